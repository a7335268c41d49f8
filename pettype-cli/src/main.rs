use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod logging;

use logging::LogTarget;

#[derive(Parser)]
#[command(name = "pettype", about = "Find out which pet matches your personality")]
#[command(version, propagate_version = true)]
struct Cli {
    /// Defaults to `play`
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the quiz
    Play(commands::play::PlayArgs),
    /// Show recently recorded results
    History(commands::history::HistoryArgs),
    /// Inspect quiz content
    Content(commands::content::ContentArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Play(Default::default()));

    let target = match command {
        Commands::Play(_) => LogTarget::File(pettype_paths::log_file()),
        _ => LogTarget::Stderr,
    };
    // Held until exit so file logs are flushed
    let _log_guard = logging::init(cli.verbose, target);

    match command {
        Commands::Play(args) => commands::play::run(args).await,
        Commands::History(args) => commands::history::run(args).await,
        Commands::Content(args) => commands::content::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
