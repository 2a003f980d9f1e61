use crate::error::SourceError;
use async_trait::async_trait;

use super::types::Reading;

/// Trait for anything that can supply battery readings.
///
/// Implementors own the transport and format of the upstream data (an HTTP
/// endpoint, a static export file, a test double). The analytics never see
/// where readings came from, only the materialized list.
#[async_trait]
pub trait ReadingSource: Send + Sync {
    /// Fetches every reading currently available from the source.
    ///
    /// # Returns
    /// - `Ok(Vec<Reading>)` in the order the source delivered them
    /// - `Err(SourceError)` on transport, status or parse failures
    async fn fetch_readings(&self) -> Result<Vec<Reading>, SourceError>;
}
