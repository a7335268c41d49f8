use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use pettype_core::{Content, TypeCode};

use crate::config::ConfigLoader;

#[derive(Args)]
pub struct ContentArgs {
    #[command(subcommand)]
    pub command: ContentCommands,
}

#[derive(Subcommand)]
pub enum ContentCommands {
    /// Validate quiz content and print a summary
    Check {
        /// Directory with questions.toml / results.toml (defaults to config)
        #[arg(long)]
        content_dir: Option<PathBuf>,
    },
}

pub fn run(args: ContentArgs) -> Result<()> {
    match args.command {
        ContentCommands::Check { content_dir } => {
            let dir = match content_dir {
                Some(dir) => Some(dir),
                None => ConfigLoader::load()?.quiz.content_dir,
            };
            let content = Content::load(dir.as_deref()).context("Quiz content is invalid")?;
            print!("{}", summary(&content, dir.as_ref()));
            Ok(())
        }
    }
}

fn summary(content: &Content, dir: Option<&PathBuf>) -> String {
    let source = match dir {
        Some(dir) => dir.display().to_string(),
        None => "bundled".to_string(),
    };
    let mut out = format!("Content:   {source}\n");
    out.push_str(&format!("Questions: {}\n", content.questions.len()));
    out.push_str(&format!("Results:   {} of 16\n", content.results.len()));
    out.push_str(&format!("Default:   {}\n", content.results.default_code()));

    let missing = content.results.missing_codes();
    if !missing.is_empty() {
        let codes: Vec<String> = missing.iter().map(TypeCode::to_string).collect();
        out.push_str(&format!(
            "Missing:   {} (the default is shown instead)\n",
            codes.join(", ")
        ));
    }
    out
}
