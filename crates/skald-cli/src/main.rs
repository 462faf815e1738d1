mod cmd_inspect;
mod cmd_tell;
mod input;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skald", version, about = "Turn a commit history into a story")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a story from a JSON array of commit records
    Tell {
        /// Commits JSON file; stdin when omitted
        input: Option<PathBuf>,
        /// Narrative style: epic, narrative, casual, or technical
        #[arg(long, default_value = "narrative")]
        style: String,
        /// Voice adjustment: neutral, playful, or formal
        #[arg(long, default_value = "neutral")]
        tone: String,
        /// Story length: short, medium, or long
        #[arg(long, default_value = "medium")]
        length: String,
        /// Repository name used in the story title
        #[arg(long, default_value = "")]
        repo: String,
        /// YAML tuning config (idle gap, thresholds, trait heuristics)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Leave the elapsed-time context out of the conclusion
        #[arg(long)]
        no_time_context: bool,
        /// Leave the top-language sentence out of the description
        #[arg(long)]
        no_language_context: bool,
        /// Append line-change totals to each pattern block
        #[arg(long)]
        line_changes: bool,
        /// Print the full story as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show intermediate pipeline artifacts (persona, patterns, achievements) as JSON
    Inspect {
        /// Commits JSON file; stdin when omitted
        input: Option<PathBuf>,
        /// YAML tuning config
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Tell {
            input,
            style,
            tone,
            length,
            repo,
            config,
            no_time_context,
            no_language_context,
            line_changes,
            json,
        } => cmd_tell::execute(&cmd_tell::TellArgs {
            input,
            style,
            tone,
            length,
            repo,
            config,
            no_time_context,
            no_language_context,
            line_changes,
            json,
        }),
        Command::Inspect { input, config } => {
            cmd_inspect::execute(input.as_deref(), config.as_deref())
        }
    }
}
