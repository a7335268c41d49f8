use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use pettype_core::{JsonlOutcomeStore, OutcomeRecord, OutcomeStore};

use super::play::outcomes_path;
use crate::config::ConfigLoader;

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of outcomes to show
    #[arg(short = 'n', long, default_value_t = 10)]
    pub limit: usize,

    /// Outcome file to read instead of the configured one
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub async fn run(args: HistoryArgs) -> Result<()> {
    let path = match args.file {
        Some(path) => path,
        None => outcomes_path(&ConfigLoader::load()?.telemetry),
    };

    let store = JsonlOutcomeStore::new(&path);
    let records = store
        .recent(args.limit)
        .await
        .with_context(|| format!("Failed to read outcomes from {}", path.display()))?;

    if records.is_empty() {
        println!("No outcomes recorded yet ({})", path.display());
        return Ok(());
    }

    println!("{}", outcome_table(&records));
    Ok(())
}

fn outcome_table(records: &[OutcomeRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("When").fg(Color::Cyan),
        Cell::new("Type").fg(Color::Cyan),
        Cell::new("Pet").fg(Color::Cyan),
        Cell::new("Session").fg(Color::Cyan),
    ]);

    for record in records {
        let session = record.session_id.simple().to_string();
        table.add_row(vec![
            Cell::new(record.recorded_at.format("%Y-%m-%d %H:%M")),
            Cell::new(record.type_code),
            Cell::new(&record.label),
            Cell::new(&session[..8]),
        ]);
    }

    table
}
