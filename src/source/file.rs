use crate::error::SourceError;
use crate::model::{Reading, ReadingSource};
use async_trait::async_trait;
use std::path::PathBuf;

use super::envelope::parse_readings;

/// Reads readings from a static JSON export on disk.
pub struct FileReadingSource {
    path: PathBuf,
}

impl FileReadingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ReadingSource for FileReadingSource {
    async fn fetch_readings(&self) -> Result<Vec<Reading>, SourceError> {
        let path = self.path.display().to_string();

        let result = match tokio::fs::read_to_string(&self.path).await {
            Ok(body) => parse_readings(&body).map_err(SourceError::from),
            Err(e) => Err(SourceError::io(path.as_str(), e)),
        };

        if let Err(e) = &result {
            tracing::error!(path = %path, "Error reading battery data: {}", e);
        }
        result
    }
}
