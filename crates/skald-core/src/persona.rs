use serde::{Deserialize, Serialize};
use std::fmt;

/// Behavioral archetype inferred from commit timing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PersonaType {
    NightOwl,
    EarlyBird,
    SteadyCoder,
    WeekendWarrior,
}

impl fmt::Display for PersonaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NightOwl => write!(f, "night-owl"),
            Self::EarlyBird => write!(f, "early-bird"),
            Self::SteadyCoder => write!(f, "steady-coder"),
            Self::WeekendWarrior => write!(f, "weekend-warrior"),
        }
    }
}

impl std::str::FromStr for PersonaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "night-owl" => Ok(Self::NightOwl),
            "early-bird" => Ok(Self::EarlyBird),
            "steady-coder" => Ok(Self::SteadyCoder),
            "weekend-warrior" => Ok(Self::WeekendWarrior),
            other => Err(format!("unknown persona type: {other}")),
        }
    }
}

/// Well-known trait tags attached to a persona.
pub mod trait_tag {
    pub const CONSISTENT: &str = "consistent";
    pub const DEDICATED: &str = "dedicated";
    pub const ADAPTABLE: &str = "adaptable";
    pub const BALANCED: &str = "balanced";
}

/// Inferred developer persona: archetype, how strongly the commit timing
/// agrees with it, and secondary trait tags. Derived once per story, never
/// persisted on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeveloperPersona {
    #[serde(rename = "type")]
    pub kind: PersonaType,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<String>,
}

impl DeveloperPersona {
    /// Neutral default used when there are no commits to classify.
    pub fn neutral() -> Self {
        Self {
            kind: PersonaType::SteadyCoder,
            confidence: 0.0,
            traits: Vec::new(),
        }
    }
}
