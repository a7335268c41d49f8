//! HTTP outcome store
//!
//! POSTs each outcome as a JSON row to a REST endpoint. The row carries the
//! result label as `animal` and the recording time as `timestamp`.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use super::{OutcomeRecord, OutcomeStore};
use crate::error::TelemetryError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome store backed by an HTTP endpoint
pub struct HttpOutcomeStore {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl HttpOutcomeStore {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// JSON body sent for `record`.
    pub fn payload(record: &OutcomeRecord) -> Value {
        json!({
            "animal": record.label,
            "timestamp": record.recorded_at.to_rfc3339(),
            "type_code": record.type_code,
            "session_id": record.session_id,
        })
    }
}

impl std::fmt::Debug for HttpOutcomeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpOutcomeStore")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[async_trait]
impl OutcomeStore for HttpOutcomeStore {
    async fn record(&self, record: OutcomeRecord) -> Result<(), TelemetryError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .json(&Self::payload(&record));
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TelemetryError::Rejected {
                status: status.as_u16(),
            });
        }

        debug!(endpoint = %self.endpoint, status = status.as_u16(), "Outcome posted");
        Ok(())
    }

    async fn recent(&self, _limit: usize) -> Result<Vec<OutcomeRecord>, TelemetryError> {
        Ok(Vec::new())
    }
}
