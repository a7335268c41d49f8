//! Outcome records and the store trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::TelemetryError;
use crate::personality::TypeCode;
use crate::session::SessionId;

/// A completed session's result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub session_id: SessionId,
    pub type_code: TypeCode,
    /// Title of the result shown to the user
    pub label: String,
    pub recorded_at: DateTime<Utc>,
}

impl OutcomeRecord {
    /// Record stamped with the current time.
    pub fn new(session_id: SessionId, type_code: TypeCode, label: impl Into<String>) -> Self {
        Self {
            session_id,
            type_code,
            label: label.into(),
            recorded_at: Utc::now(),
        }
    }
}

/// Durable destination for session outcomes.
#[async_trait]
pub trait OutcomeStore: Send + Sync {
    /// Persist one outcome.
    async fn record(&self, record: OutcomeRecord) -> Result<(), TelemetryError>;

    /// Up to `limit` most recent outcomes, newest first.
    ///
    /// Write-only stores return an empty list.
    async fn recent(&self, limit: usize) -> Result<Vec<OutcomeRecord>, TelemetryError>;
}

/// Keeps outcomes in memory.
#[derive(Debug, Default)]
pub struct MemoryOutcomeStore {
    records: RwLock<Vec<OutcomeRecord>>,
}

impl MemoryOutcomeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    pub async fn records(&self) -> Vec<OutcomeRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl OutcomeStore for MemoryOutcomeStore {
    async fn record(&self, record: OutcomeRecord) -> Result<(), TelemetryError> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<OutcomeRecord>, TelemetryError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Discards outcomes.
#[derive(Debug, Default)]
pub struct NoopOutcomeStore;

#[async_trait]
impl OutcomeStore for NoopOutcomeStore {
    async fn record(&self, _record: OutcomeRecord) -> Result<(), TelemetryError> {
        Ok(())
    }

    async fn recent(&self, _limit: usize) -> Result<Vec<OutcomeRecord>, TelemetryError> {
        Ok(Vec::new())
    }
}
