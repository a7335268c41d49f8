//! Page-view analytics sinks.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::TelemetryError;
use crate::session::Screen;

/// Receives a page view whenever the session changes screen.
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    async fn page_view(&self, screen: Screen) -> Result<(), TelemetryError>;
}

/// Emits each page view as a structured log event.
#[derive(Debug, Default)]
pub struct TracingAnalytics;

#[async_trait]
impl AnalyticsSink for TracingAnalytics {
    async fn page_view(&self, screen: Screen) -> Result<(), TelemetryError> {
        info!(target: "pettype::analytics", page = %screen.page_path(), "page_view");
        Ok(())
    }
}

/// Keeps page views in memory.
#[derive(Debug, Default)]
pub struct MemoryAnalytics {
    views: RwLock<Vec<Screen>>,
}

impl MemoryAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page views received so far, oldest first.
    pub async fn views(&self) -> Vec<Screen> {
        self.views.read().await.clone()
    }
}

#[async_trait]
impl AnalyticsSink for MemoryAnalytics {
    async fn page_view(&self, screen: Screen) -> Result<(), TelemetryError> {
        self.views.write().await.push(screen);
        Ok(())
    }
}

/// Discards page views.
#[derive(Debug, Default)]
pub struct NoopAnalytics;

#[async_trait]
impl AnalyticsSink for NoopAnalytics {
    async fn page_view(&self, _screen: Screen) -> Result<(), TelemetryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_analytics_records_in_order() {
        let sink = MemoryAnalytics::new();
        sink.page_view(Screen::Start).await.unwrap();
        sink.page_view(Screen::Quiz).await.unwrap();
        assert_eq!(sink.views().await, vec![Screen::Start, Screen::Quiz]);
    }

    #[tokio::test]
    async fn tracing_and_noop_never_fail() {
        assert!(TracingAnalytics.page_view(Screen::Result).await.is_ok());
        assert!(NoopAnalytics.page_view(Screen::Loading).await.is_ok());
    }
}
