//! Turns raw provider records into sorted `CommitEvent`s. Malformed records
//! are dropped with a diagnostic, never fatal: the story is generated from
//! whatever survives.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use skald_core::CommitEvent;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{debug, warn};

/// Diagnostic for a record the normalizer refused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// Index into the raw input slice.
    pub index: usize,
    pub reason: String,
}

/// Output of the normalizer: events sorted ascending by timestamp plus the
/// diagnostics for everything that was dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizedCommits {
    pub events: Vec<CommitEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRecord>,
}

/// Normalize a batch of raw commit records.
///
/// Tolerates the field spellings of the common providers: `id` or `sha`,
/// `date` or `timestamp` (RFC 3339), `author` as a string or as an object
/// with a `name`, `language` or `language_hint`.
pub fn normalize(raw: &[Value]) -> NormalizedCommits {
    let mut out = NormalizedCommits::default();

    for (index, record) in raw.iter().enumerate() {
        match normalize_one(record) {
            Ok(event) => out.events.push(event),
            Err(reason) => {
                warn!(index, %reason, "skipping malformed commit record");
                out.skipped.push(SkippedRecord { index, reason });
            }
        }
    }

    // Chronological order; id as tie-break keeps the sort total.
    out.events
        .sort_by(|a, b| (a.timestamp_utc, &a.id).cmp(&(b.timestamp_utc, &b.id)));

    debug!(
        kept = out.events.len(),
        skipped = out.skipped.len(),
        "normalized commit batch"
    );
    out
}

fn normalize_one(record: &Value) -> Result<CommitEvent, String> {
    let obj = record
        .as_object()
        .ok_or_else(|| "record is not an object".to_string())?;

    let id = obj
        .get("id")
        .or_else(|| obj.get("sha"))
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| "missing id/sha".to_string())?
        .to_string();

    let message = obj
        .get("message")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "missing message".to_string())?
        .to_string();

    let date = obj
        .get("date")
        .or_else(|| obj.get("timestamp"))
        .and_then(|v| v.as_str())
        .ok_or_else(|| "missing date/timestamp".to_string())?;
    let timestamp_utc = OffsetDateTime::parse(date, &Rfc3339)
        .map_err(|e| format!("unparseable date {date:?}: {e}"))?
        .to_offset(time::UtcOffset::UTC);

    // "author": "alice" or "author": {"name": "alice", ...}
    let author = match obj.get("author") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Object(a)) => a
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown")
            .to_string(),
        _ => "unknown".to_string(),
    };

    let language_hint = obj
        .get("language")
        .or_else(|| obj.get("language_hint"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    Ok(CommitEvent {
        id,
        message,
        author,
        timestamp_utc,
        additions: count_field(obj, "additions"),
        deletions: count_field(obj, "deletions"),
        files_changed: count_field(obj, "files_changed"),
        language_hint,
    })
}

/// Non-negative count; absent, negative, or non-numeric values become 0.
fn count_field(obj: &serde_json::Map<String, Value>, key: &str) -> u64 {
    obj.get(key).and_then(|v| v.as_u64()).unwrap_or(0)
}
