//! Shared input handling: commit records come from a JSON file or stdin,
//! tuning values from an optional YAML file.

use anyhow::Context;
use serde_json::Value;
use skald_engine::EngineConfig;
use std::io::Read;
use std::path::Path;

/// Read the raw commit records. A path of `-` (or no path at all) means
/// stdin, matching the usual pipe-friendly convention.
pub fn read_commits(input: Option<&Path>) -> anyhow::Result<Vec<Value>> {
    let text = match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("reading commits from {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading commits from stdin")?;
            buf
        }
    };
    let records: Vec<Value> =
        serde_json::from_str(&text).context("commit input must be a JSON array of objects")?;
    Ok(records)
}

/// Load engine tuning from YAML, or fall back to the built-in defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("reading config from {}", p.display()))?;
            EngineConfig::from_yaml(&text).with_context(|| format!("parsing {}", p.display()))
        }
        None => Ok(EngineConfig::default()),
    }
}
