use skald_core::story::{Story, StorySettings};
use skald_core::RepositoryMetadata;
use std::path::PathBuf;

use crate::input;

pub struct TellArgs {
    pub input: Option<PathBuf>,
    pub style: String,
    pub tone: String,
    pub length: String,
    pub repo: String,
    pub config: Option<PathBuf>,
    pub no_time_context: bool,
    pub no_language_context: bool,
    pub line_changes: bool,
    pub json: bool,
}

pub fn execute(args: &TellArgs) -> anyhow::Result<()> {
    let records = input::read_commits(args.input.as_deref())?;
    let cfg = input::load_config(args.config.as_deref())?;

    let settings = StorySettings {
        style: args.style.parse()?,
        tone: args.tone.parse()?,
        length: args.length.parse()?,
        include_time_context: !args.no_time_context,
        include_language_context: !args.no_language_context,
        include_line_changes: args.line_changes,
    };
    let metadata = RepositoryMetadata {
        name: args.repo.clone(),
        ..RepositoryMetadata::default()
    };

    let story = skald_engine::assemble(&records, &metadata, &settings, &cfg);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&story)?);
    } else {
        print!("{}", story_text(&story));
    }
    Ok(())
}

/// Plain-text layout: title, description, then each block separated by a
/// blank line. The JSON form carries the structure; this form reads well
/// in a terminal.
fn story_text(story: &Story) -> String {
    let mut out = String::new();
    out.push_str(&story.title);
    out.push_str("\n\n");
    if !story.description.is_empty() {
        out.push_str(&story.description);
        out.push_str("\n\n");
    }
    out.push_str(&story.intro);
    out.push_str("\n\n");
    for block in &story.content {
        out.push_str(&block.text);
        out.push_str("\n\n");
    }
    out.push_str(&story.conclusion);
    out.push('\n');
    out
}
