//! Pattern detection: a single chronological sweep that clusters commits by
//! idle gaps and dominant type. Patterns partition the input; every commit
//! lands in exactly one pattern.

use skald_core::pattern::{classify_message, CommitPattern, CommitPatternType};
use skald_core::timefmt::format_hours;
use skald_core::CommitEvent;
use tracing::debug;

use crate::config::DetectorConfig;

/// Per-type importance weight feeding the significance score. Feature and
/// refactor work is weighted above housekeeping.
fn type_weight(kind: CommitPatternType) -> f64 {
    match kind {
        CommitPatternType::Feature => 1.0,
        CommitPatternType::Refactor => 0.9,
        CommitPatternType::Perf => 0.85,
        CommitPatternType::Bugfix => 0.7,
        CommitPatternType::Revert => 0.6,
        CommitPatternType::Release => 0.6,
        CommitPatternType::Test => 0.5,
        CommitPatternType::Docs => 0.4,
        CommitPatternType::Merge => 0.4,
        CommitPatternType::Chore => 0.3,
        CommitPatternType::Style => 0.3,
    }
}

/// Detect commit patterns. Input must be sorted ascending by timestamp
/// (the normalizer guarantees this).
pub fn detect(commits: &[CommitEvent], cfg: &DetectorConfig) -> Vec<CommitPattern> {
    let mut patterns: Vec<CommitPattern> = Vec::new();
    // Open cluster: (commit, parsed type) in chronological order.
    let mut open: Vec<(&CommitEvent, CommitPatternType)> = Vec::new();

    for commit in commits {
        let kind = classify_message(&commit.message);

        if let Some((last, _)) = open.last() {
            let gap_hours =
                (commit.timestamp_utc - last.timestamp_utc).as_seconds_f64() / 3600.0;
            let splits = gap_hours > cfg.idle_gap_hours
                || dominant_would_change(&open, kind);
            if splits {
                patterns.push(close_cluster(&open, cfg));
                open.clear();
            }
        }

        open.push((commit, kind));
    }

    if !open.is_empty() {
        patterns.push(close_cluster(&open, cfg));
    }

    #[cfg(debug_assertions)]
    {
        let covered: usize = patterns.iter().map(|p| p.commit_ids.len()).sum();
        debug_assert_eq!(covered, commits.len(), "patterns must partition the input");
        let unique: std::collections::HashSet<&str> = patterns
            .iter()
            .flat_map(|p| p.commit_ids.iter().map(|s| s.as_str()))
            .collect();
        debug_assert_eq!(unique.len(), commits.len(), "patterns must not duplicate commits");
    }

    debug!(
        commits = commits.len(),
        patterns = patterns.len(),
        "detected commit patterns"
    );
    patterns
}

/// Would appending a commit of `incoming` type flip the cluster's majority?
fn dominant_would_change(
    open: &[(&CommitEvent, CommitPatternType)],
    incoming: CommitPatternType,
) -> bool {
    let before = dominant_type(open.iter().map(|(_, k)| *k));
    let after = dominant_type(open.iter().map(|(_, k)| *k).chain(std::iter::once(incoming)));
    before != after
}

/// Majority type of a cluster. Ties go to the type seen earliest, which
/// keeps the sweep deterministic.
fn dominant_type(kinds: impl Iterator<Item = CommitPatternType>) -> CommitPatternType {
    let mut order: Vec<CommitPatternType> = Vec::new();
    let mut counts: std::collections::BTreeMap<CommitPatternType, usize> =
        std::collections::BTreeMap::new();
    for kind in kinds {
        if !counts.contains_key(&kind) {
            order.push(kind);
        }
        *counts.entry(kind).or_insert(0) += 1;
    }
    let best = counts.values().copied().max().unwrap_or(0);
    order
        .into_iter()
        .find(|k| counts[k] == best)
        .expect("dominant_type called on a non-empty cluster")
}

fn close_cluster(
    open: &[(&CommitEvent, CommitPatternType)],
    cfg: &DetectorConfig,
) -> CommitPattern {
    let kind = dominant_type(open.iter().map(|(_, k)| *k));
    let first = open.first().expect("cluster is non-empty").0;
    let last = open.last().expect("cluster is non-empty").0;
    let size = open.len();
    let elapsed_hours =
        (last.timestamp_utc - first.timestamp_utc).as_seconds_f64() / 3600.0;

    CommitPattern {
        // Derived from the first commit so identical input yields identical
        // ids (patterns partition the input, so the first commit is unique).
        id: format!("pat_{}", first.id),
        kind,
        commit_ids: open.iter().map(|(c, _)| c.id.clone()).collect(),
        start_time: first.timestamp_utc,
        end_time: last.timestamp_utc,
        significance: significance(size, elapsed_hours, kind, cfg),
        description: describe(size, elapsed_hours, kind),
    }
}

/// Weighted size/density/type score squashed into [0, 1] with a saturating
/// exponential.
fn significance(
    size: usize,
    elapsed_hours: f64,
    kind: CommitPatternType,
    cfg: &DetectorConfig,
) -> f64 {
    let density = size as f64 / elapsed_hours.max(1.0);
    let score = 0.4 * size as f64 + 0.2 * density + type_weight(kind);
    (1.0 - (-cfg.saturation_k * score).exp()).clamp(0.0, 1.0)
}

/// Style-neutral summary: "7 feature commits over 3 hours".
fn describe(size: usize, elapsed_hours: f64, kind: CommitPatternType) -> String {
    if size == 1 {
        format!("1 {kind} commit")
    } else {
        format!("{size} {kind} commits over {}", format_hours(elapsed_hours))
    }
}
