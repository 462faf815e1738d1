use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Commit id as reported by the VCS provider (full or abbreviated sha).
pub type CommitId = String;

/// A single normalized commit, sorted ascending by `timestamp_utc` once it
/// leaves the normalizer. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommitEvent {
    pub id: CommitId,
    pub message: String,
    pub author: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp_utc: OffsetDateTime,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    #[serde(default)]
    pub files_changed: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_hint: Option<String>,
}

impl CommitEvent {
    /// Hour of day [0, 24) in UTC.
    pub fn hour(&self) -> u8 {
        self.timestamp_utc.hour()
    }

    /// Whether the commit landed on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(
            self.timestamp_utc.weekday(),
            time::Weekday::Saturday | time::Weekday::Sunday
        )
    }
}

/// Repository context supplied by the caller; used for titles and
/// language stats only, never for pattern detection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// Language name -> byte count, as VCS providers report it.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub languages: BTreeMap<String, u64>,
}

/// One entry of `StoryStats::top_languages`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageShare {
    pub name: String,
    pub percentage: f64,
}

/// Aggregate facts about the story's commit window. Purely derived.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoryStats {
    pub total_commits: usize,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub period_start: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub period_end: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_languages: Vec<LanguageShare>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample_commit() -> CommitEvent {
        CommitEvent {
            id: "abc1234".to_string(),
            message: "feat: add login".to_string(),
            author: "alice".to_string(),
            timestamp_utc: datetime!(2026-03-14 23:30:00 UTC),
            additions: 120,
            deletions: 8,
            files_changed: 4,
            language_hint: Some("Rust".to_string()),
        }
    }

    #[test]
    fn commit_hour_and_weekend() {
        let c = sample_commit();
        assert_eq!(c.hour(), 23);
        // 2026-03-14 is a Saturday
        assert!(c.is_weekend());
    }

    #[test]
    fn commit_event_serde_roundtrip() {
        let c = sample_commit();
        let json = serde_json::to_string(&c).unwrap();
        let parsed: CommitEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, c);
    }

    #[test]
    fn commit_event_minimal_deserializes_with_defaults() {
        let json = r#"{
            "id": "abc",
            "message": "fix: x",
            "author": "bob",
            "timestamp_utc": "2026-01-05T09:00:00Z"
        }"#;
        let c: CommitEvent = serde_json::from_str(json).unwrap();
        assert_eq!(c.additions, 0);
        assert_eq!(c.deletions, 0);
        assert!(c.language_hint.is_none());
    }

    #[test]
    fn stats_empty_period_serializes_null() {
        let stats = StoryStats {
            total_commits: 0,
            period_start: None,
            period_end: None,
            top_languages: vec![],
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"period_start\":null"));
        assert!(!json.contains("top_languages"));
    }
}
