//! JSONL outcome store
//!
//! Append-only file with one `OutcomeRecord` per line.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

use super::{OutcomeRecord, OutcomeStore};
use crate::error::TelemetryError;

/// JSONL file-based outcome store
#[derive(Debug, Clone)]
pub struct JsonlOutcomeStore {
    path: PathBuf,
}

impl JsonlOutcomeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<(), TelemetryError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Unreadable lines are skipped.
    fn parse_line(line: &str) -> Option<OutcomeRecord> {
        if line.trim().is_empty() {
            return None;
        }
        serde_json::from_str(line).ok()
    }
}

#[async_trait]
impl OutcomeStore for JsonlOutcomeStore {
    async fn record(&self, record: OutcomeRecord) -> Result<(), TelemetryError> {
        self.ensure_parent_dir().await?;

        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        debug!(path = %self.path.display(), code = %record.type_code, "Outcome appended");
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<OutcomeRecord>, TelemetryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).await?;
        let mut lines = BufReader::new(file).lines();
        let mut records = Vec::new();
        while let Some(line) = lines.next_line().await? {
            if let Some(record) = Self::parse_line(&line) {
                records.push(record);
            }
        }

        records.reverse();
        records.truncate(limit);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn create_test_store() -> (TempDir, JsonlOutcomeStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonlOutcomeStore::new(dir.path().join("nested").join("outcomes.jsonl"));
        (dir, store)
    }

    fn record(code: &str, label: &str) -> OutcomeRecord {
        OutcomeRecord::new(Uuid::new_v4(), code.parse().unwrap(), label)
    }

    #[tokio::test]
    async fn missing_file_reads_empty() {
        let (_dir, store) = create_test_store();
        assert!(store.recent(5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn record_creates_parent_and_appends() {
        let (_dir, store) = create_test_store();
        store.record(record("ENFP", "Corgi")).await.unwrap();
        store.record(record("INTJ", "Russian Blue")).await.unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.lines().count(), 2);

        let recent = store.recent(10).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].label, "Russian Blue");
        assert_eq!(recent[1].type_code.to_string(), "ENFP");
    }

    #[tokio::test]
    async fn recent_honours_limit_and_skips_garbage() {
        let (_dir, store) = create_test_store();
        for code in ["ESTJ", "ISFP", "ENTP"] {
            store.record(record(code, "Pet")).await.unwrap();
        }
        {
            let mut file = OpenOptions::new()
                .append(true)
                .open(store.path())
                .await
                .unwrap();
            file.write_all(b"not json\n\n").await.unwrap();
        }

        let recent = store.recent(2).await.unwrap();
        let codes: Vec<String> = recent.iter().map(|r| r.type_code.to_string()).collect();
        assert_eq!(codes, vec!["ENTP", "ISFP"]);
    }
}
