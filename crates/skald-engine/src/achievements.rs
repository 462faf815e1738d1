//! Achievement extraction: milestone callouts for patterns that cross the
//! significance or size threshold.

use skald_core::ids::new_achievement_id;
use skald_core::pattern::{CommitPattern, CommitPatternType};
use skald_core::story::Achievement;

use crate::config::AchievementConfig;

/// Scan patterns for qualifying ones. Patterns below both thresholds simply
/// produce nothing.
pub fn extract(patterns: &[CommitPattern], cfg: &AchievementConfig) -> Vec<Achievement> {
    patterns
        .iter()
        .filter(|p| p.significance >= cfg.min_significance || p.commit_ids.len() >= cfg.min_commits)
        .map(|p| Achievement {
            id: new_achievement_id(),
            title: title_for(p.kind),
            description: describe(p),
            source_pattern_id: p.id.clone(),
            unlocked_at: p.end_time,
        })
        .collect()
}

fn title_for(kind: CommitPatternType) -> String {
    match kind {
        CommitPatternType::Feature => "Feature Milestone",
        CommitPatternType::Refactor => "Code Sculptor",
        CommitPatternType::Bugfix => "Bug Crusher",
        CommitPatternType::Docs => "Documentarian",
        CommitPatternType::Test => "Safety Net",
        CommitPatternType::Chore => "Housekeeper",
        CommitPatternType::Style => "Polish Pass",
        CommitPatternType::Perf => "Speed Demon",
        CommitPatternType::Revert => "Course Correction",
        CommitPatternType::Merge => "Integrator",
        CommitPatternType::Release => "Ship It",
    }
    .to_string()
}

fn describe(p: &CommitPattern) -> String {
    let n = p.commit_ids.len();
    match p.kind {
        CommitPatternType::Feature => format!("Shipped a major feature across {n} commits"),
        CommitPatternType::Refactor => format!("Reshaped the codebase across {n} commits"),
        CommitPatternType::Bugfix => format!("Hunted down bugs across {n} commits"),
        CommitPatternType::Docs => format!("Documented the project across {n} commits"),
        CommitPatternType::Test => format!("Strengthened the test suite across {n} commits"),
        CommitPatternType::Chore => format!("Kept the lights on across {n} commits"),
        CommitPatternType::Style => format!("Polished the code across {n} commits"),
        CommitPatternType::Perf => format!("Chased performance across {n} commits"),
        CommitPatternType::Revert => format!("Walked back changes across {n} commits"),
        CommitPatternType::Merge => format!("Brought branches together across {n} commits"),
        CommitPatternType::Release => format!("Cut releases across {n} commits"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn pattern(kind: CommitPatternType, n: usize, significance: f64) -> CommitPattern {
        CommitPattern {
            id: "pat_test".to_string(),
            kind,
            commit_ids: (0..n).map(|i| format!("c{i}")).collect(),
            start_time: datetime!(2026-03-02 10:00:00 UTC),
            end_time: datetime!(2026-03-02 14:00:00 UTC),
            significance,
            description: format!("{n} {kind} commits over 4 hours"),
        }
    }

    fn cfg() -> AchievementConfig {
        AchievementConfig::default()
    }

    #[test]
    fn high_significance_qualifies() {
        let patterns = vec![pattern(CommitPatternType::Feature, 5, 0.85)];
        let achievements = extract(&patterns, &cfg());
        assert_eq!(achievements.len(), 1);
        assert_eq!(achievements[0].source_pattern_id, patterns[0].id);
        assert_eq!(achievements[0].unlocked_at, patterns[0].end_time);
        assert!(achievements[0].id.starts_with("ach_"));
    }

    #[test]
    fn large_pattern_qualifies_regardless_of_significance() {
        let patterns = vec![pattern(CommitPatternType::Bugfix, 12, 0.4)];
        let achievements = extract(&patterns, &cfg());
        assert_eq!(achievements.len(), 1);
        assert_eq!(
            achievements[0].description,
            "Hunted down bugs across 12 commits"
        );
        assert_eq!(achievements[0].title, "Bug Crusher");
    }

    #[test]
    fn below_both_thresholds_is_no_achievement() {
        let patterns = vec![pattern(CommitPatternType::Chore, 3, 0.2)];
        assert!(extract(&patterns, &cfg()).is_empty());
    }

    #[test]
    fn one_achievement_per_qualifying_pattern() {
        let patterns = vec![
            pattern(CommitPatternType::Feature, 12, 0.9),
            pattern(CommitPatternType::Chore, 2, 0.1),
            pattern(CommitPatternType::Refactor, 11, 0.5),
        ];
        let achievements = extract(&patterns, &cfg());
        assert_eq!(achievements.len(), 2);
        assert_eq!(achievements[0].source_pattern_id, patterns[0].id);
        assert_eq!(achievements[1].source_pattern_id, patterns[2].id);
    }

    #[test]
    fn feature_description_mentions_major_feature() {
        let patterns = vec![pattern(CommitPatternType::Feature, 12, 0.9)];
        let achievements = extract(&patterns, &cfg());
        assert_eq!(
            achievements[0].description,
            "Shipped a major feature across 12 commits"
        );
    }

    #[test]
    fn thresholds_are_tunable() {
        let strict = AchievementConfig {
            min_significance: 0.99,
            min_commits: 100,
        };
        let patterns = vec![pattern(CommitPatternType::Feature, 12, 0.9)];
        assert!(extract(&patterns, &strict).is_empty());
    }
}
