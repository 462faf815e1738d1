use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

use crate::persona::DeveloperPersona;
use crate::types::StoryStats;

/// Invalid settings are a caller contract violation, surfaced at the string
/// boundary and never coerced to a default.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("unknown story style: {0}")]
    UnknownStyle(String),
    #[error("unknown story tone: {0}")]
    UnknownTone(String),
    #[error("unknown story length: {0}")]
    UnknownLength(String),
}

/// Narrative voice used to render the story. Same facts, different prose.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoryStyle {
    Epic,
    Narrative,
    Casual,
    Technical,
}

impl fmt::Display for StoryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epic => write!(f, "epic"),
            Self::Narrative => write!(f, "narrative"),
            Self::Casual => write!(f, "casual"),
            Self::Technical => write!(f, "technical"),
        }
    }
}

impl std::str::FromStr for StoryStyle {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "epic" => Ok(Self::Epic),
            "narrative" => Ok(Self::Narrative),
            "casual" => Ok(Self::Casual),
            "technical" => Ok(Self::Technical),
            other => Err(SettingsError::UnknownStyle(other.to_string())),
        }
    }
}

/// Secondary voice adjustment within a style.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoryTone {
    #[default]
    Neutral,
    Playful,
    Formal,
}

impl fmt::Display for StoryTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral => write!(f, "neutral"),
            Self::Playful => write!(f, "playful"),
            Self::Formal => write!(f, "formal"),
        }
    }
}

impl std::str::FromStr for StoryTone {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "neutral" => Ok(Self::Neutral),
            "playful" => Ok(Self::Playful),
            "formal" => Ok(Self::Formal),
            other => Err(SettingsError::UnknownTone(other.to_string())),
        }
    }
}

/// How many pattern blocks are rendered in full before folding the rest.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl StoryLength {
    /// Maximum pattern blocks rendered in full; `None` means unbounded.
    pub fn pattern_budget(&self) -> Option<usize> {
        match self {
            Self::Short => Some(3),
            Self::Medium => Some(6),
            Self::Long => None,
        }
    }
}

impl fmt::Display for StoryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short => write!(f, "short"),
            Self::Medium => write!(f, "medium"),
            Self::Long => write!(f, "long"),
        }
    }
}

impl std::str::FromStr for StoryLength {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(SettingsError::UnknownLength(other.to_string())),
        }
    }
}

/// Caller-supplied rendering settings. Enum fields are validated at the
/// parse boundary; by construction every value here is inside the closed set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorySettings {
    pub style: StoryStyle,
    pub tone: StoryTone,
    pub length: StoryLength,
    pub include_time_context: bool,
    pub include_language_context: bool,
    pub include_line_changes: bool,
}

impl Default for StorySettings {
    fn default() -> Self {
        Self {
            style: StoryStyle::Narrative,
            tone: StoryTone::default(),
            length: StoryLength::default(),
            include_time_context: true,
            include_language_context: true,
            include_line_changes: false,
        }
    }
}

/// What a content block represents.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoryBlockKind {
    Pattern,
    Achievement,
    Omitted,
    Quiet,
}

/// One ordered prose block of the story body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryBlock {
    pub kind: StoryBlockKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_id: Option<String>,
}

/// A milestone callout for an unusually large or significant pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source_pattern_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub unlocked_at: OffsetDateTime,
}

/// The terminal, immutable output of the pipeline. JSON-serializable;
/// persistence and display belong to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub description: String,
    pub intro: String,
    pub content: Vec<StoryBlock>,
    pub conclusion: String,
    pub persona: DeveloperPersona,
    pub stats: StoryStats,
    pub style: StoryStyle,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_display_roundtrip() {
        for style in [
            StoryStyle::Epic,
            StoryStyle::Narrative,
            StoryStyle::Casual,
            StoryStyle::Technical,
        ] {
            let parsed: StoryStyle = style.to_string().parse().unwrap();
            assert_eq!(style, parsed);
        }
    }

    #[test]
    fn unknown_style_is_typed_error() {
        let err = "dramatic".parse::<StoryStyle>().unwrap_err();
        assert_eq!(err, SettingsError::UnknownStyle("dramatic".to_string()));
    }

    #[test]
    fn unknown_tone_and_length_are_typed_errors() {
        assert!(matches!(
            "sarcastic".parse::<StoryTone>(),
            Err(SettingsError::UnknownTone(_))
        ));
        assert!(matches!(
            "epic-length".parse::<StoryLength>(),
            Err(SettingsError::UnknownLength(_))
        ));
    }

    #[test]
    fn settings_default_is_narrative_medium() {
        let s = StorySettings::default();
        assert_eq!(s.style, StoryStyle::Narrative);
        assert_eq!(s.tone, StoryTone::Neutral);
        assert_eq!(s.length, StoryLength::Medium);
        assert!(s.include_time_context);
        assert!(!s.include_line_changes);
    }

    #[test]
    fn settings_serde_rejects_unknown_style() {
        let json = r#"{"style":"operatic"}"#;
        let result: Result<StorySettings, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn settings_serde_fills_defaults() {
        let s: StorySettings = serde_json::from_str(r#"{"style":"epic"}"#).unwrap();
        assert_eq!(s.style, StoryStyle::Epic);
        assert_eq!(s.length, StoryLength::Medium);
    }

    #[test]
    fn length_pattern_budget() {
        assert_eq!(StoryLength::Short.pattern_budget(), Some(3));
        assert_eq!(StoryLength::Medium.pattern_budget(), Some(6));
        assert_eq!(StoryLength::Long.pattern_budget(), None);
    }

    #[test]
    fn block_kind_serde_snake_case() {
        let json = serde_json::to_string(&StoryBlockKind::Achievement).unwrap();
        assert_eq!(json, "\"achievement\"");
    }
}
