use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

use crate::types::CommitId;

/// Closed classification of what a commit (and by extension a cluster of
/// commits) was about, parsed from conventional-commit prefixes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CommitPatternType {
    Feature,
    Refactor,
    Bugfix,
    Docs,
    Test,
    Chore,
    Style,
    Perf,
    Revert,
    Merge,
    Release,
}

impl fmt::Display for CommitPatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feature => write!(f, "feature"),
            Self::Refactor => write!(f, "refactor"),
            Self::Bugfix => write!(f, "bugfix"),
            Self::Docs => write!(f, "docs"),
            Self::Test => write!(f, "test"),
            Self::Chore => write!(f, "chore"),
            Self::Style => write!(f, "style"),
            Self::Perf => write!(f, "perf"),
            Self::Revert => write!(f, "revert"),
            Self::Merge => write!(f, "merge"),
            Self::Release => write!(f, "release"),
        }
    }
}

impl std::str::FromStr for CommitPatternType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feature" => Ok(Self::Feature),
            "refactor" => Ok(Self::Refactor),
            "bugfix" => Ok(Self::Bugfix),
            "docs" => Ok(Self::Docs),
            "test" => Ok(Self::Test),
            "chore" => Ok(Self::Chore),
            "style" => Ok(Self::Style),
            "perf" => Ok(Self::Perf),
            "revert" => Ok(Self::Revert),
            "merge" => Ok(Self::Merge),
            "release" => Ok(Self::Release),
            other => Err(format!("unknown commit pattern type: {other}")),
        }
    }
}

/// Classify a commit message by its subject line.
///
/// Recognizes conventional-commit prefixes (`feat:`, `fix(scope)!:`, ...),
/// merge commits, and semver-like release subjects. Anything else falls back
/// to `chore`.
pub fn classify_message(message: &str) -> CommitPatternType {
    let subject = message.lines().next().unwrap_or("").trim();

    if subject == "Merge" || subject.starts_with("Merge ") {
        return CommitPatternType::Merge;
    }

    if let Some((prefix, _rest)) = subject.split_once(':') {
        // "feat(auth)!" -> "feat"
        let bare = prefix
            .split_once('(')
            .map(|(p, _)| p)
            .unwrap_or(prefix)
            .trim_end_matches('!')
            .trim()
            .to_ascii_lowercase();
        match bare.as_str() {
            "feat" | "feature" => return CommitPatternType::Feature,
            "fix" | "bugfix" | "hotfix" => return CommitPatternType::Bugfix,
            "refactor" => return CommitPatternType::Refactor,
            "docs" | "doc" => return CommitPatternType::Docs,
            "test" | "tests" => return CommitPatternType::Test,
            "chore" => return CommitPatternType::Chore,
            "style" => return CommitPatternType::Style,
            "perf" => return CommitPatternType::Perf,
            "revert" => return CommitPatternType::Revert,
            "release" => return CommitPatternType::Release,
            _ => {}
        }
    }

    if subject.to_ascii_lowercase().starts_with("revert") {
        return CommitPatternType::Revert;
    }
    if looks_like_release(subject) {
        return CommitPatternType::Release;
    }

    CommitPatternType::Chore
}

/// Semver-like subject: "v1.2.3", "1.2.3", "0.4", or a "release ..." line.
fn looks_like_release(subject: &str) -> bool {
    if subject.to_ascii_lowercase().starts_with("release") {
        return true;
    }
    let version = subject.strip_prefix('v').unwrap_or(subject);
    let segments: Vec<&str> = version.split('.').collect();
    segments.len() >= 2
        && segments
            .iter()
            .all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
}

/// A temporally and semantically related cluster of commits, treated as one
/// narrative unit. Invariant: `commit_ids` is non-empty and chronological;
/// `start_time <= end_time` equal the first/last commit timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitPattern {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CommitPatternType,
    pub commit_ids: Vec<CommitId>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    /// Normalized notability score in [0, 1].
    pub significance: f64,
    /// Style-neutral summary consumed by the renderers, not itself prose.
    pub description: String,
}

impl CommitPattern {
    /// Elapsed time between first and last commit, in fractional hours.
    pub fn elapsed_hours(&self) -> f64 {
        (self.end_time - self.start_time).as_seconds_f64() / 3600.0
    }
}
