//! Aggregate story statistics: commit totals, period bounds, language mix.

use std::collections::BTreeMap;

use skald_core::{CommitEvent, LanguageShare, RepositoryMetadata, StoryStats};

/// Derive stats from normalized (sorted) commits and repository metadata.
///
/// Languages come from commit `language_hint`s by commit count; when no
/// commit carries a hint, the repository's reported byte shares are used
/// instead.
pub fn compute(commits: &[CommitEvent], metadata: &RepositoryMetadata) -> StoryStats {
    let top_languages = language_shares(commits, metadata);

    StoryStats {
        total_commits: commits.len(),
        period_start: commits.first().map(|c| c.timestamp_utc),
        period_end: commits.last().map(|c| c.timestamp_utc),
        top_languages,
    }
}

fn language_shares(commits: &[CommitEvent], metadata: &RepositoryMetadata) -> Vec<LanguageShare> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for c in commits {
        if let Some(lang) = c.language_hint.as_deref() {
            *counts.entry(lang).or_insert(0) += 1;
        }
    }
    if counts.is_empty() {
        counts = metadata
            .languages
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
    }

    let total: u64 = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<LanguageShare> = counts
        .into_iter()
        .map(|(name, count)| LanguageShare {
            name: name.to_string(),
            percentage: round1(count as f64 * 100.0 / total as f64),
        })
        .collect();
    // Descending by share; name as tie-break keeps the order total.
    shares.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    shares
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    fn commit(id: &str, ts: &str, lang: Option<&str>) -> CommitEvent {
        CommitEvent {
            id: id.to_string(),
            message: "feat: x".to_string(),
            author: "alice".to_string(),
            timestamp_utc: OffsetDateTime::parse(ts, &Rfc3339).unwrap(),
            additions: 1,
            deletions: 0,
            files_changed: 1,
            language_hint: lang.map(|s| s.to_string()),
        }
    }

    #[test]
    fn empty_commits_give_zero_stats() {
        let stats = compute(&[], &RepositoryMetadata::default());
        assert_eq!(stats.total_commits, 0);
        assert!(stats.period_start.is_none());
        assert!(stats.period_end.is_none());
        assert!(stats.top_languages.is_empty());
    }

    #[test]
    fn period_bounds_come_from_first_and_last() {
        let commits = vec![
            commit("a", "2026-03-02T10:00:00Z", None),
            commit("b", "2026-03-09T10:00:00Z", None),
        ];
        let stats = compute(&commits, &RepositoryMetadata::default());
        assert_eq!(stats.total_commits, 2);
        assert_eq!(stats.period_start, Some(commits[0].timestamp_utc));
        assert_eq!(stats.period_end, Some(commits[1].timestamp_utc));
    }

    #[test]
    fn languages_ranked_by_commit_count() {
        let commits = vec![
            commit("a", "2026-03-02T10:00:00Z", Some("Rust")),
            commit("b", "2026-03-02T11:00:00Z", Some("Rust")),
            commit("c", "2026-03-02T12:00:00Z", Some("Rust")),
            commit("d", "2026-03-02T13:00:00Z", Some("TypeScript")),
        ];
        let stats = compute(&commits, &RepositoryMetadata::default());
        assert_eq!(stats.top_languages.len(), 2);
        assert_eq!(stats.top_languages[0].name, "Rust");
        assert_eq!(stats.top_languages[0].percentage, 75.0);
        assert_eq!(stats.top_languages[1].percentage, 25.0);
    }

    #[test]
    fn metadata_languages_used_when_no_hints() {
        let commits = vec![commit("a", "2026-03-02T10:00:00Z", None)];
        let mut metadata = RepositoryMetadata::default();
        metadata.languages.insert("Go".to_string(), 3000);
        metadata.languages.insert("Shell".to_string(), 1000);
        let stats = compute(&commits, &metadata);
        assert_eq!(stats.top_languages[0].name, "Go");
        assert_eq!(stats.top_languages[0].percentage, 75.0);
        assert_eq!(stats.top_languages[1].name, "Shell");
    }

    #[test]
    fn equal_shares_tie_break_by_name() {
        let commits = vec![
            commit("a", "2026-03-02T10:00:00Z", Some("Zig")),
            commit("b", "2026-03-02T11:00:00Z", Some("Ada")),
        ];
        let stats = compute(&commits, &RepositoryMetadata::default());
        assert_eq!(stats.top_languages[0].name, "Ada");
        assert_eq!(stats.top_languages[1].name, "Zig");
    }
}
