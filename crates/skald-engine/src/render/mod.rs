//! Template rendering: one renderer per narrative style behind a common
//! trait. Every style renders the same facts; only the vocabulary changes.

mod casual;
mod epic;
mod narrative;
mod technical;

pub use casual::CasualRenderer;
pub use epic::EpicRenderer;
pub use narrative::NarrativeRenderer;
pub use technical::TechnicalRenderer;

use skald_core::pattern::CommitPattern;
use skald_core::persona::{DeveloperPersona, PersonaType};
use skald_core::story::{StoryStyle, StoryTone};

/// The four text blocks every style knows how to produce, plus the fold for
/// patterns elided by the length setting. All methods are pure.
pub trait StyleRenderer {
    fn intro(&self, commit_count: usize, persona: &DeveloperPersona) -> String;
    fn pattern(&self, pattern: &CommitPattern) -> String;
    fn achievement(&self, description: &str) -> String;
    fn conclusion(&self, time_span: Option<&str>, persona: &DeveloperPersona) -> String;
    fn omitted(&self, count: usize) -> String;
}

/// Select the renderer for a style. Exhaustive: adding a style is a
/// compile-time change here and in the `StoryStyle` enum.
pub fn renderer_for(style: StoryStyle, tone: StoryTone) -> Box<dyn StyleRenderer> {
    match style {
        StoryStyle::Epic => Box::new(EpicRenderer { tone }),
        StoryStyle::Narrative => Box::new(NarrativeRenderer { tone }),
        StoryStyle::Casual => Box::new(CasualRenderer { tone }),
        StoryStyle::Technical => Box::new(TechnicalRenderer { tone }),
    }
}

/// Persona description shared by all styles: derived once from type plus
/// traits, reused verbatim in every block that mentions the developer.
pub fn persona_description(persona: &DeveloperPersona) -> String {
    let base = match persona.kind {
        PersonaType::NightOwl => "a night owl who does their best work after dark",
        PersonaType::EarlyBird => "an early bird who greets the morning with commits",
        PersonaType::SteadyCoder => "a steady coder who keeps regular hours",
        PersonaType::WeekendWarrior => "a weekend warrior who saves the real push for weekends",
    };
    if persona.traits.is_empty() {
        base.to_string()
    } else {
        format!("{base} ({})", join_traits(&persona.traits))
    }
}

fn join_traits(traits: &[String]) -> String {
    match traits.len() {
        0 => String::new(),
        1 => traits[0].clone(),
        2 => format!("{} and {}", traits[0], traits[1]),
        _ => {
            let head = traits[..traits.len() - 1].join(", ");
            format!("{head}, and {}", traits[traits.len() - 1])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skald_core::pattern::CommitPatternType;
    use time::macros::datetime;

    fn persona(kind: PersonaType, traits: &[&str]) -> DeveloperPersona {
        DeveloperPersona {
            kind,
            confidence: 0.9,
            traits: traits.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn sample_pattern() -> CommitPattern {
        CommitPattern {
            id: "pat_test".to_string(),
            kind: CommitPatternType::Feature,
            commit_ids: vec!["a".to_string(), "b".to_string()],
            start_time: datetime!(2026-03-02 10:00:00 UTC),
            end_time: datetime!(2026-03-02 13:00:00 UTC),
            significance: 0.42,
            description: "2 feature commits over 3 hours".to_string(),
        }
    }

    #[test]
    fn persona_description_without_traits() {
        let desc = persona_description(&persona(PersonaType::NightOwl, &[]));
        assert_eq!(desc, "a night owl who does their best work after dark");
    }

    #[test]
    fn persona_description_joins_traits() {
        let desc = persona_description(&persona(
            PersonaType::EarlyBird,
            &["consistent", "dedicated", "adaptable"],
        ));
        assert!(desc.contains("consistent, dedicated, and adaptable"), "{desc}");
    }

    #[test]
    fn persona_description_two_traits() {
        let desc = persona_description(&persona(PersonaType::SteadyCoder, &["consistent", "balanced"]));
        assert!(desc.ends_with("(consistent and balanced)"), "{desc}");
    }

    #[test]
    fn all_styles_render_the_same_facts() {
        let p = persona(PersonaType::NightOwl, &["consistent"]);
        let pat = sample_pattern();
        for style in [
            StoryStyle::Epic,
            StoryStyle::Narrative,
            StoryStyle::Casual,
            StoryStyle::Technical,
        ] {
            let r = renderer_for(style, StoryTone::Neutral);
            let intro = r.intro(17, &p);
            assert!(intro.contains("17"), "{style} intro must carry the count: {intro}");
            let block = r.pattern(&pat);
            assert!(
                block.contains("2 feature commits over 3 hours"),
                "{style} pattern must carry the summary: {block}"
            );
            let ach = r.achievement("Shipped a major feature across 12 commits");
            assert!(ach.contains("Shipped a major feature across 12 commits"));
            let concl = r.conclusion(Some("3 months and 12 days"), &p);
            assert!(
                concl.contains("3 months and 12 days"),
                "{style} conclusion must carry the span: {concl}"
            );
            let fold = r.omitted(4);
            assert!(fold.contains('4'), "{style} fold must carry the count: {fold}");
        }
    }

    #[test]
    fn zero_commit_intro_mentions_quiet_period() {
        let p = DeveloperPersona::neutral();
        for style in [
            StoryStyle::Epic,
            StoryStyle::Narrative,
            StoryStyle::Casual,
            StoryStyle::Technical,
        ] {
            let intro = renderer_for(style, StoryTone::Neutral).intro(0, &p);
            assert!(
                intro.to_lowercase().contains("quiet"),
                "{style} zero-commit intro should mention the quiet period: {intro}"
            );
        }
    }

    #[test]
    fn tones_change_phrasing_not_facts() {
        let p = persona(PersonaType::SteadyCoder, &[]);
        let neutral = renderer_for(StoryStyle::Epic, StoryTone::Neutral).intro(9, &p);
        let playful = renderer_for(StoryStyle::Epic, StoryTone::Playful).intro(9, &p);
        assert_ne!(neutral, playful);
        assert!(neutral.contains('9') && playful.contains('9'));
    }
}
