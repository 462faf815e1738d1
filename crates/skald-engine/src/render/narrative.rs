use skald_core::pattern::{CommitPattern, CommitPatternType};
use skald_core::persona::DeveloperPersona;
use skald_core::story::StoryTone;

use super::{persona_description, StyleRenderer};

/// Plain storytelling register: chapters, stretches of work, quiet closes.
pub struct NarrativeRenderer {
    pub tone: StoryTone,
}

impl StyleRenderer for NarrativeRenderer {
    fn intro(&self, commit_count: usize, persona: &DeveloperPersona) -> String {
        if commit_count == 0 {
            return "This was a quiet period. No commits were recorded, and the repository rested."
                .to_string();
        }
        let who = persona_description(persona);
        match self.tone {
            StoryTone::Neutral => format!(
                "Over this stretch of work, {who} left {commit_count} commits behind."
            ),
            StoryTone::Playful => format!(
                "Our story begins with {who}, who somehow racked up {commit_count} commits."
            ),
            StoryTone::Formal => format!(
                "In the period under review, {who} recorded {commit_count} commits."
            ),
        }
    }

    fn pattern(&self, pattern: &CommitPattern) -> String {
        let turn = match pattern.kind {
            CommitPatternType::Feature => "Then came a burst of building",
            CommitPatternType::Refactor => "Then came a careful reshaping",
            CommitPatternType::Bugfix => "Then came a hunt for what was broken",
            CommitPatternType::Docs => "Then came time to write things down",
            CommitPatternType::Test => "Then came the work of making it safe",
            CommitPatternType::Chore => "Then came the everyday upkeep",
            CommitPatternType::Style => "Then came a tidying of loose ends",
            CommitPatternType::Perf => "Then came a push to make it faster",
            CommitPatternType::Revert => "Then came second thoughts",
            CommitPatternType::Merge => "Then the branches came together",
            CommitPatternType::Release => "Then it was time to ship",
        };
        format!("{turn}: {}.", pattern.description)
    }

    fn achievement(&self, description: &str) -> String {
        format!("It was a milestone worth marking: {description}.")
    }

    fn conclusion(&self, time_span: Option<&str>, persona: &DeveloperPersona) -> String {
        let who = persona_description(persona);
        match time_span {
            Some(span) => format!(
                "The chapter closes after {span}, and {who} moves on to whatever comes next."
            ),
            None => format!("The chapter closes here, and {who} moves on."),
        }
    }

    fn omitted(&self, count: usize) -> String {
        format!("And {count} more stretches of work passed with less fanfare.")
    }
}
