//! Tuning constants for clustering, achievements, and trait heuristics.
//! These are product-tuning parameters, not semantic requirements, so they
//! live in one serde-loadable struct instead of scattered literals.

use serde::{Deserialize, Serialize};

/// Pattern detector tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Gap between consecutive commits that closes the open cluster.
    pub idle_gap_hours: f64,
    /// Saturation constant for significance: `1 - e^(-k * score)`.
    pub saturation_k: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            idle_gap_hours: 36.0,
            saturation_k: 0.25,
        }
    }
}

/// Achievement qualification thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementConfig {
    pub min_significance: f64,
    pub min_commits: usize,
}

impl Default for AchievementConfig {
    fn default() -> Self {
        Self {
            min_significance: 0.8,
            min_commits: 10,
        }
    }
}

/// Trait-derivation heuristics for the persona classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitConfig {
    /// `consistent` when the stddev of commit hours is below this.
    pub consistent_hour_stddev: f64,
    /// `dedicated` needs at least this many commits...
    pub dedicated_min_commits: usize,
    /// ...landing faster than this many commits per day.
    pub dedicated_commits_per_day: f64,
    /// `adaptable` when commits span at least this many distinct weekdays.
    pub adaptable_min_weekdays: usize,
    /// `balanced` when the weekend share of commits falls in this window.
    pub balanced_weekend_low: f64,
    pub balanced_weekend_high: f64,
}

impl Default for TraitConfig {
    fn default() -> Self {
        Self {
            consistent_hour_stddev: 2.5,
            dedicated_min_commits: 10,
            dedicated_commits_per_day: 5.0,
            adaptable_min_weekdays: 5,
            balanced_weekend_low: 0.35,
            balanced_weekend_high: 0.65,
        }
    }
}

/// All engine tuning in one place. YAML-loadable; every field has a default
/// so a partial config file only overrides what it names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub detector: DetectorConfig,
    pub achievements: AchievementConfig,
    pub traits: TraitConfig,
}

impl EngineConfig {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
