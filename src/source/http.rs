use crate::error::SourceError;
use crate::model::{Reading, ReadingSource};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use std::time::Duration;

use super::envelope::parse_readings;

/// Fetches readings from an HTTP endpoint serving the upstream JSON export.
pub struct HttpReadingSource {
    http_client: HttpClient,
    url: String,
}

impl HttpReadingSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            url: url.into(),
        })
    }

    async fn get(&self) -> Result<String, SourceError> {
        let response = self
            .http_client
            .get(&self.url)
            .header("accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(SourceError::from_status(self.url.as_str(), status, body))
        }
    }
}

#[async_trait]
impl ReadingSource for HttpReadingSource {
    async fn fetch_readings(&self) -> Result<Vec<Reading>, SourceError> {
        let result = match self.get().await {
            Ok(body) => parse_readings(&body).map_err(SourceError::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(readings) => {
                tracing::debug!(url = %self.url, readings = readings.len(), "Fetched battery data");
                Ok(readings)
            }
            Err(e) => {
                tracing::error!(url = %self.url, "Error fetching battery data: {}", e);
                Err(e)
            }
        }
    }
}
