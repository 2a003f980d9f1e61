use crate::analytics::summarize;
use crate::error::SourceError;
use crate::model::{Reading, ReadingSource, SiteSummary};
use std::sync::Arc;

/// Pairs a reading source with the analytics.
///
/// The source is injected, so the same service runs against an HTTP
/// endpoint, a static export or a test double.
pub struct BatteryService {
    source: Arc<dyn ReadingSource>,
}

impl BatteryService {
    pub fn new(source: Arc<dyn ReadingSource>) -> Self {
        Self { source }
    }

    pub async fn fetch_readings(&self) -> Result<Vec<Reading>, SourceError> {
        self.source.fetch_readings().await
    }

    /// Fetches readings and summarizes them per site, ranked.
    pub async fn site_summaries(&self) -> Result<Vec<SiteSummary>, SourceError> {
        let readings = self.fetch_readings().await?;
        tracing::debug!(readings = readings.len(), "Summarizing readings");
        Ok(summarize(&readings))
    }

    /// Summary of a single site, or `None` if no reading belongs to it.
    pub async fn site_detail(&self, site_id: i64) -> Result<Option<SiteSummary>, SourceError> {
        let summaries = self.site_summaries().await?;
        Ok(summaries.into_iter().find(|site| site.site_id == site_id))
    }
}
