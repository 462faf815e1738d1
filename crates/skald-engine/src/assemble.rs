//! Story assembly: runs the whole pipeline and lays the rendered blocks out
//! in order: intro, patterns chronologically (each qualifying pattern's
//! achievement right behind it), conclusion.

use serde_json::Value;
use skald_core::ids::new_story_id;
use skald_core::pattern::CommitPattern;
use skald_core::story::{Story, StoryBlock, StoryBlockKind, StorySettings, StoryStyle};
use skald_core::timefmt::format_span;
use skald_core::{CommitEvent, RepositoryMetadata};
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::debug;

use crate::config::EngineConfig;
use crate::render::renderer_for;
use crate::{achievements, detect, normalize, persona, stats};

/// Build a story from raw commit records. Total: malformed records are
/// dropped with diagnostics inside the normalizer, an empty window becomes a
/// quiet-period story, and settings are valid by construction.
pub fn assemble(
    raw: &[Value],
    metadata: &RepositoryMetadata,
    settings: &StorySettings,
    cfg: &EngineConfig,
) -> Story {
    let normalized = normalize::normalize(raw);
    let commits = &normalized.events;

    let persona = persona::classify(commits, &cfg.traits);
    let patterns = detect::detect(commits, &cfg.detector);
    let unlocked = achievements::extract(&patterns, &cfg.achievements);
    let stats = stats::compute(commits, metadata);

    let renderer = renderer_for(settings.style, settings.tone);
    let intro = renderer.intro(commits.len(), &persona);

    let mut content: Vec<StoryBlock> = Vec::new();
    if commits.is_empty() {
        content.push(StoryBlock {
            kind: StoryBlockKind::Quiet,
            text: "No recorded activity in this period.".to_string(),
            pattern_id: None,
        });
    } else {
        let budget = settings.length.pattern_budget().unwrap_or(usize::MAX);
        let rendered = patterns.len().min(budget);

        for pattern in &patterns[..rendered] {
            let mut text = renderer.pattern(pattern);
            if settings.include_line_changes {
                let (adds, dels, files) = line_totals(pattern, commits);
                text.push_str(&format!(" [+{adds}/-{dels} across {files} files]"));
            }
            content.push(StoryBlock {
                kind: StoryBlockKind::Pattern,
                text,
                pattern_id: Some(pattern.id.clone()),
            });
            if let Some(a) = unlocked.iter().find(|a| a.source_pattern_id == pattern.id) {
                content.push(StoryBlock {
                    kind: StoryBlockKind::Achievement,
                    text: renderer.achievement(&a.description),
                    pattern_id: Some(pattern.id.clone()),
                });
            }
        }

        if rendered < patterns.len() {
            content.push(StoryBlock {
                kind: StoryBlockKind::Omitted,
                text: renderer.omitted(patterns.len() - rendered),
                pattern_id: None,
            });
            // Milestones survive the fold: achievements of folded patterns
            // still appear, in chronological order.
            for pattern in &patterns[rendered..] {
                if let Some(a) = unlocked.iter().find(|a| a.source_pattern_id == pattern.id) {
                    content.push(StoryBlock {
                        kind: StoryBlockKind::Achievement,
                        text: renderer.achievement(&a.description),
                        pattern_id: Some(pattern.id.clone()),
                    });
                }
            }
        }
    }

    let time_span = match (stats.period_start, stats.period_end) {
        (Some(start), Some(end)) if settings.include_time_context => {
            Some(format_span(start, end))
        }
        _ => None,
    };
    let conclusion = renderer.conclusion(time_span.as_deref(), &persona);

    debug!(
        commits = commits.len(),
        patterns = patterns.len(),
        achievements = unlocked.len(),
        blocks = content.len(),
        style = %settings.style,
        "assembled story"
    );

    Story {
        id: new_story_id(),
        title: title_for(settings.style, metadata),
        description: describe(&stats, settings),
        intro,
        content,
        conclusion,
        persona,
        stats,
        style: settings.style,
        created_at: OffsetDateTime::now_utc(),
    }
}

fn title_for(style: StoryStyle, metadata: &RepositoryMetadata) -> String {
    let name = if metadata.name.is_empty() {
        "an unnamed repository"
    } else {
        metadata.name.as_str()
    };
    match style {
        StoryStyle::Epic => format!("The Saga of {name}"),
        StoryStyle::Narrative => format!("The Story of {name}"),
        StoryStyle::Casual => format!("What Happened in {name}"),
        StoryStyle::Technical => format!("{name}: Commit Activity Report"),
    }
}

fn describe(stats: &skald_core::StoryStats, settings: &StorySettings) -> String {
    let date_fmt = format_description!("[year]-[month]-[day]");
    let mut description = match (stats.period_start, stats.period_end) {
        (Some(start), Some(end)) => {
            let start = start.format(&date_fmt).unwrap_or_default();
            let end = end.format(&date_fmt).unwrap_or_default();
            format!("{} commits between {start} and {end}.", stats.total_commits)
        }
        _ => "No recorded activity in this period.".to_string(),
    };
    if settings.include_language_context {
        if let Some(top) = stats.top_languages.first() {
            description.push_str(&format!(" Most of the work was in {}.", top.name));
        }
    }
    description
}

/// Summed line stats for one pattern, looked up from the normalized commits.
fn line_totals(pattern: &CommitPattern, commits: &[CommitEvent]) -> (u64, u64, u64) {
    let mut adds = 0;
    let mut dels = 0;
    let mut files = 0;
    for c in commits {
        if pattern.commit_ids.iter().any(|id| id == &c.id) {
            adds += c.additions;
            dels += c.deletions;
            files += c.files_changed;
        }
    }
    (adds, dels, files)
}
