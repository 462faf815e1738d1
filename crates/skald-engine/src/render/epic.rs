use skald_core::pattern::{CommitPattern, CommitPatternType};
use skald_core::persona::DeveloperPersona;
use skald_core::story::StoryTone;

use super::{persona_description, StyleRenderer};

/// Heroic register: commits are deeds, patterns are campaigns.
pub struct EpicRenderer {
    pub tone: StoryTone,
}

impl StyleRenderer for EpicRenderer {
    fn intro(&self, commit_count: usize, persona: &DeveloperPersona) -> String {
        if commit_count == 0 {
            return "The chronicle opens upon a quiet period. No deeds were recorded in this age."
                .to_string();
        }
        let who = persona_description(persona);
        match self.tone {
            StoryTone::Neutral => {
                format!("Hear now the tale of {commit_count} deeds, wrought by {who}.")
            }
            StoryTone::Playful => format!(
                "Gather round! Here begins the tale of {commit_count} deeds, wrought by {who}."
            ),
            StoryTone::Formal => format!(
                "Let the chronicle record {commit_count} deeds, wrought by {who}."
            ),
        }
    }

    fn pattern(&self, pattern: &CommitPattern) -> String {
        let campaign = match pattern.kind {
            CommitPatternType::Feature => "A campaign of creation was waged",
            CommitPatternType::Refactor => "The very foundations were reforged",
            CommitPatternType::Bugfix => "Monsters were slain in the deep",
            CommitPatternType::Docs => "The scribes set lore to parchment",
            CommitPatternType::Test => "Wards were raised against future evils",
            CommitPatternType::Chore => "The keep was tended and provisioned",
            CommitPatternType::Style => "Every blade was polished to a shine",
            CommitPatternType::Perf => "The war engines were made swifter",
            CommitPatternType::Revert => "A retreat was sounded, and ground regained",
            CommitPatternType::Merge => "Armies joined beneath one banner",
            CommitPatternType::Release => "A new age was proclaimed across the land",
        };
        format!("{campaign}: {}.", pattern.description)
    }

    fn achievement(&self, description: &str) -> String {
        format!("A legend is forged! {description}.")
    }

    fn conclusion(&self, time_span: Option<&str>, persona: &DeveloperPersona) -> String {
        let who = persona_description(persona);
        match time_span {
            Some(span) => format!("Thus ends a saga spanning {span}, written by {who}."),
            None => format!("Thus ends the saga, for now, written by {who}."),
        }
    }

    fn omitted(&self, count: usize) -> String {
        format!("And {count} lesser campaigns besides, too many to sing of.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn epic_pattern_keeps_the_summary() {
        let r = EpicRenderer {
            tone: StoryTone::Neutral,
        };
        let p = CommitPattern {
            id: "pat_test".to_string(),
            kind: CommitPatternType::Bugfix,
            commit_ids: vec!["a".to_string()],
            start_time: datetime!(2026-03-02 10:00:00 UTC),
            end_time: datetime!(2026-03-02 10:00:00 UTC),
            significance: 0.1,
            description: "1 bugfix commit".to_string(),
        };
        let text = r.pattern(&p);
        assert!(text.starts_with("Monsters were slain"));
        assert!(text.contains("1 bugfix commit"));
    }

    #[test]
    fn epic_conclusion_without_span() {
        let r = EpicRenderer {
            tone: StoryTone::Neutral,
        };
        let text = r.conclusion(None, &DeveloperPersona::neutral());
        assert!(text.contains("Thus ends the saga"));
    }
}
