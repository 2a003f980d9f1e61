//! Configuration utilities for testing.

use crate::config::SourceConfig;

/// Builder for creating test reading source configurations.
#[derive(Debug)]
pub struct TestSourceConfigBuilder {
    url: Option<String>,
    path: String,
    timeout_seconds: u64,
}

impl TestSourceConfigBuilder {
    /// Creates a new test config builder: no URL, the bundled data file, 5 second timeout.
    pub fn new() -> Self {
        Self {
            url: None,
            path: "data/battery.json".to_string(),
            timeout_seconds: 5,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn build(self) -> SourceConfig {
        SourceConfig {
            url: self.url,
            path: self.path,
            timeout_seconds: self.timeout_seconds,
        }
    }
}

/// Creates a source configuration pointing at a mock server URL.
pub fn test_source_config_with_url(url: impl Into<String>) -> SourceConfig {
    TestSourceConfigBuilder::new().with_url(url).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_config_builder() {
        let config = TestSourceConfigBuilder::new()
            .with_url("http://custom.local/battery")
            .with_path("/tmp/battery.json")
            .with_timeout_seconds(9)
            .build();

        assert_eq!(config.url.as_deref(), Some("http://custom.local/battery"));
        assert_eq!(config.path, "/tmp/battery.json");
        assert_eq!(config.timeout_seconds, 9);
    }

    #[test]
    fn test_convenience_function() {
        let config = test_source_config_with_url("http://mock.local");
        assert_eq!(config.url.as_deref(), Some("http://mock.local"));
        assert_eq!(config.path, "data/battery.json");
    }
}
