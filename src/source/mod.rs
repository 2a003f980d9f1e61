//! Reading sources: where battery readings come from.

mod envelope;
mod file;
mod http;

pub use file::FileReadingSource;
pub use http::HttpReadingSource;

use crate::config::SourceConfig;
use crate::error::{ConfigError, Result};
use crate::model::ReadingSource;
use std::sync::Arc;
use std::time::Duration;

/// Builds the configured reading source.
///
/// An HTTP source is used when a URL is configured, unless `mock_api` forces
/// the static file.
pub fn from_config(config: &SourceConfig, mock_api: bool) -> Result<Arc<dyn ReadingSource>> {
    match config.url.as_deref().map(str::trim) {
        Some(url) if !mock_api && !url.is_empty() => {
            tracing::info!(url, "Reading battery data over HTTP");
            let source = HttpReadingSource::new(url, Duration::from_secs(config.timeout_seconds))?;
            Ok(Arc::new(source))
        }
        _ => {
            if config.path.trim().is_empty() {
                return Err(ConfigError::missing("BATTERY_SOURCE_URL or BATTERY_SOURCE_PATH").into());
            }
            tracing::info!(path = %config.path, "Reading battery data from file");
            Ok(Arc::new(FileReadingSource::new(config.path.as_str())))
        }
    }
}
