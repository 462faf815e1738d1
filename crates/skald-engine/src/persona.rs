//! Persona classification from commit-timestamp distribution.

use skald_core::persona::{trait_tag, DeveloperPersona, PersonaType};
use skald_core::CommitEvent;

use crate::config::TraitConfig;

/// Infer a persona from normalized commits.
///
/// Hour buckets: night-owl [22:00, 06:00), early-bird [06:00, 12:00),
/// steady-coder [12:00, 22:00). A weekend majority (> 50% of commits on
/// Saturday/Sunday) overrides the hour buckets entirely. Zero commits yield
/// the neutral default, never an error.
pub fn classify(commits: &[CommitEvent], cfg: &TraitConfig) -> DeveloperPersona {
    if commits.is_empty() {
        return DeveloperPersona::neutral();
    }

    let total = commits.len();
    let weekend = commits.iter().filter(|c| c.is_weekend()).count();

    let mut night = 0usize;
    let mut morning = 0usize;
    let mut steady = 0usize;
    for c in commits {
        match c.hour() {
            6..=11 => morning += 1,
            12..=21 => steady += 1,
            _ => night += 1,
        }
    }

    let (kind, agreeing) = if weekend * 2 > total {
        (PersonaType::WeekendWarrior, weekend)
    } else if night >= morning && night >= steady {
        (PersonaType::NightOwl, night)
    } else if morning >= steady {
        (PersonaType::EarlyBird, morning)
    } else {
        (PersonaType::SteadyCoder, steady)
    };

    DeveloperPersona {
        kind,
        confidence: agreeing as f64 / total as f64,
        traits: derive_traits(commits, weekend, cfg),
    }
}

/// Secondary trait tags, pushed in a fixed order so identical input always
/// yields identical traits.
fn derive_traits(commits: &[CommitEvent], weekend: usize, cfg: &TraitConfig) -> Vec<String> {
    let total = commits.len();
    let mut traits = Vec::new();

    if total >= 2 && hour_stddev(commits) < cfg.consistent_hour_stddev {
        traits.push(trait_tag::CONSISTENT.to_string());
    }

    if total >= cfg.dedicated_min_commits {
        let span_days = span_days(commits).max(1.0);
        if total as f64 / span_days > cfg.dedicated_commits_per_day {
            traits.push(trait_tag::DEDICATED.to_string());
        }
    }

    let mut weekdays_seen = [false; 7];
    for c in commits {
        weekdays_seen[c.timestamp_utc.weekday().number_days_from_monday() as usize] = true;
    }
    if weekdays_seen.iter().filter(|&&seen| seen).count() >= cfg.adaptable_min_weekdays {
        traits.push(trait_tag::ADAPTABLE.to_string());
    }

    let weekend_share = weekend as f64 / total as f64;
    if weekend_share >= cfg.balanced_weekend_low && weekend_share <= cfg.balanced_weekend_high {
        traits.push(trait_tag::BALANCED.to_string());
    }

    traits
}

/// Standard deviation of commit hours. Computed over raw hours and over
/// hours shifted by 12, taking the smaller, so a committer working around
/// midnight (23:00, 01:00) is not penalized by the wraparound.
fn hour_stddev(commits: &[CommitEvent]) -> f64 {
    let raw: Vec<f64> = commits.iter().map(|c| c.hour() as f64).collect();
    let shifted: Vec<f64> = commits
        .iter()
        .map(|c| ((c.hour() + 12) % 24) as f64)
        .collect();
    stddev(&raw).min(stddev(&shifted))
}

fn stddev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Observed span in fractional days; input is sorted, so first/last bound it.
fn span_days(commits: &[CommitEvent]) -> f64 {
    match (commits.first(), commits.last()) {
        (Some(first), Some(last)) => {
            (last.timestamp_utc - first.timestamp_utc).as_seconds_f64() / 86_400.0
        }
        _ => 0.0,
    }
}
