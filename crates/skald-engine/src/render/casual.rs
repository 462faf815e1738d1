use skald_core::pattern::{CommitPattern, CommitPatternType};
use skald_core::persona::DeveloperPersona;
use skald_core::story::StoryTone;

use super::{persona_description, StyleRenderer};

/// Conversational register: short sentences, no ceremony.
pub struct CasualRenderer {
    pub tone: StoryTone,
}

impl StyleRenderer for CasualRenderer {
    fn intro(&self, commit_count: usize, persona: &DeveloperPersona) -> String {
        if commit_count == 0 {
            return "Pretty quiet around here. Nothing got committed this time.".to_string();
        }
        let who = persona_description(persona);
        match self.tone {
            StoryTone::Neutral => format!("So, {commit_count} commits happened. Turns out we're dealing with {who}."),
            StoryTone::Playful => format!("Buckle up: {commit_count} commits from {who}. Let's see what went down."),
            StoryTone::Formal => format!("Quick recap: {commit_count} commits, courtesy of {who}."),
        }
    }

    fn pattern(&self, pattern: &CommitPattern) -> String {
        let opener = match pattern.kind {
            CommitPatternType::Feature => "New stuff got built",
            CommitPatternType::Refactor => "Some serious code shuffling",
            CommitPatternType::Bugfix => "Bug squashing time",
            CommitPatternType::Docs => "Docs got some love",
            CommitPatternType::Test => "Tests, actual tests",
            CommitPatternType::Chore => "Housekeeping mode",
            CommitPatternType::Style => "A formatting spree",
            CommitPatternType::Perf => "Chasing milliseconds",
            CommitPatternType::Revert => "Ctrl+Z, basically",
            CommitPatternType::Merge => "Branch soup got merged",
            CommitPatternType::Release => "Shipping day",
        };
        format!("{opener}: {}.", pattern.description)
    }

    fn achievement(&self, description: &str) -> String {
        format!("Big one: {description}. Nice.")
    }

    fn conclusion(&self, time_span: Option<&str>, persona: &DeveloperPersona) -> String {
        let who = persona_description(persona);
        match time_span {
            Some(span) => format!("That wraps {span} of hacking from {who}. See you in the log."),
            None => format!("That's the lot from {who}. See you in the log."),
        }
    }

    fn omitted(&self, count: usize) -> String {
        format!("...plus {count} other bursts of work we'll skip.")
    }
}
