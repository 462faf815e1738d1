use std::path::Path;

use crate::input;

/// Dump the intermediate pipeline artifacts as JSON. Useful for tuning the
/// detector config and for seeing why a record was skipped.
pub fn execute(input_path: Option<&Path>, config_path: Option<&Path>) -> anyhow::Result<()> {
    let records = input::read_commits(input_path)?;
    let cfg = input::load_config(config_path)?;

    let normalized = skald_engine::normalize::normalize(&records);
    let persona = skald_engine::persona::classify(&normalized.events, &cfg.traits);
    let patterns = skald_engine::detect::detect(&normalized.events, &cfg.detector);
    let achievements = skald_engine::achievements::extract(&patterns, &cfg.achievements);

    let report = serde_json::json!({
        "commits": normalized.events.len(),
        "skipped": normalized.skipped,
        "persona": persona,
        "patterns": patterns,
        "achievements": achievements,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
