use skald_core::pattern::CommitPattern;
use skald_core::persona::DeveloperPersona;
use skald_core::story::StoryTone;
use time::format_description::well_known::Rfc3339;

use super::{persona_description, StyleRenderer};

/// Report register: labeled fields, one fact per line. Tone shifts only the
/// closing remark, never the fields.
pub struct TechnicalRenderer {
    pub tone: StoryTone,
}

impl StyleRenderer for TechnicalRenderer {
    fn intro(&self, commit_count: usize, persona: &DeveloperPersona) -> String {
        if commit_count == 0 {
            return "Commit Count: 0\nStatus: quiet period (no recorded activity)".to_string();
        }
        format!(
            "Commit Count: {commit_count}\nDeveloper Profile: {}",
            persona_description(persona)
        )
    }

    fn pattern(&self, pattern: &CommitPattern) -> String {
        let start = pattern
            .start_time
            .format(&Rfc3339)
            .unwrap_or_else(|_| pattern.start_time.to_string());
        let end = pattern
            .end_time
            .format(&Rfc3339)
            .unwrap_or_else(|_| pattern.end_time.to_string());
        format!(
            "Pattern Type: {}\nCommits: {}\nWindow: {start} .. {end}\nSignificance: {:.2}\nSummary: {}",
            pattern.kind,
            pattern.commit_ids.len(),
            pattern.significance,
            pattern.description
        )
    }

    fn achievement(&self, description: &str) -> String {
        format!("Milestone: {description}")
    }

    fn conclusion(&self, time_span: Option<&str>, persona: &DeveloperPersona) -> String {
        let span = time_span.unwrap_or("n/a");
        let remark = match self.tone {
            StoryTone::Neutral => "End of report.",
            StoryTone::Playful => "End of report. Graphs left as an exercise.",
            StoryTone::Formal => "This concludes the activity report.",
        };
        format!(
            "Period Analyzed: {span}\nProfile: {}\n{remark}",
            persona_description(persona)
        )
    }

    fn omitted(&self, count: usize) -> String {
        format!("Patterns Omitted: {count}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skald_core::pattern::CommitPatternType;
    use time::macros::datetime;

    #[test]
    fn technical_pattern_has_labeled_type_line() {
        let r = TechnicalRenderer {
            tone: StoryTone::Neutral,
        };
        let p = CommitPattern {
            id: "pat_test".to_string(),
            kind: CommitPatternType::Feature,
            commit_ids: vec!["a".to_string(), "b".to_string()],
            start_time: datetime!(2026-03-02 10:00:00 UTC),
            end_time: datetime!(2026-03-02 13:00:00 UTC),
            significance: 0.4217,
            description: "2 feature commits over 3 hours".to_string(),
        };
        let text = r.pattern(&p);
        assert!(text.lines().any(|l| l == "Pattern Type: feature"), "{text}");
        assert!(text.contains("Commits: 2"));
        assert!(text.contains("Significance: 0.42"));
        assert!(text.contains("2026-03-02T10:00:00Z .. 2026-03-02T13:00:00Z"));
    }

    #[test]
    fn technical_conclusion_without_span_uses_na() {
        let r = TechnicalRenderer {
            tone: StoryTone::Neutral,
        };
        let text = r.conclusion(None, &DeveloperPersona::neutral());
        assert!(text.contains("Period Analyzed: n/a"));
    }
}
