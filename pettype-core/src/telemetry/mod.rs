//! Telemetry collaborators.
//!
//! Page views go to an [`AnalyticsSink`]; completed sessions go to an
//! [`OutcomeStore`]. Both are best-effort: failures are logged and dropped,
//! and the quiz flow never waits on them.

mod analytics;
mod http;
mod jsonl;
mod outcome;

use std::sync::Arc;

pub use analytics::{AnalyticsSink, MemoryAnalytics, NoopAnalytics, TracingAnalytics};
pub use http::HttpOutcomeStore;
pub use jsonl::JsonlOutcomeStore;
pub use outcome::{MemoryOutcomeStore, NoopOutcomeStore, OutcomeRecord, OutcomeStore};

/// The pair of collaborators a session controller reports to.
#[derive(Clone)]
pub struct Telemetry {
    pub analytics: Arc<dyn AnalyticsSink>,
    pub outcomes: Arc<dyn OutcomeStore>,
}

impl Telemetry {
    pub fn new(analytics: Arc<dyn AnalyticsSink>, outcomes: Arc<dyn OutcomeStore>) -> Self {
        Self {
            analytics,
            outcomes,
        }
    }

    /// Telemetry that discards everything.
    pub fn disabled() -> Self {
        Self::new(Arc::new(NoopAnalytics), Arc::new(NoopOutcomeStore))
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::disabled()
    }
}

impl std::fmt::Debug for Telemetry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Telemetry").finish_non_exhaustive()
    }
}
