use crate::error::ConfigError;
use crate::presentation::ReportFormat;
use serde_derive::Deserialize;
use std::str::FromStr;

fn default_log_level() -> String {
    "info".to_string()
}

fn default_report_format() -> String {
    "text".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_report_format")]
    pub report_format: String,
    // site to select and list device by device
    #[serde(default)]
    pub report_site_id: Option<i64>,
    // read the bundled data file even when a URL is configured
    #[serde(default)]
    pub mock_api: bool,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }

    pub fn report_format(&self) -> Result<ReportFormat, ConfigError> {
        ReportFormat::from_str(self.report_format.as_str())
            .map_err(|message| ConfigError::invalid("REPORT_FORMAT", message))
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig, ConfigError> {
    match envy::from_env::<AppConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(ConfigError::env_parse(format!("AppConfig: {}", err))),
    }
}

fn default_source_path() -> String {
    "data/battery.json".to_string()
}

fn default_source_timeout_seconds() -> u64 {
    30
}

#[derive(Deserialize, Debug)]
pub struct SourceConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_source_path")]
    pub path: String,
    #[serde(default = "default_source_timeout_seconds")]
    pub timeout_seconds: u64,
}

pub(crate) fn load_source_config() -> Result<SourceConfig, ConfigError> {
    match envy::prefixed("BATTERY_SOURCE_").from_env::<SourceConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(ConfigError::env_parse(format!("SourceConfig: {}", err))),
    }
}

fn default_task_timeout_seconds() -> u64 {
    60
}

#[derive(Deserialize, Debug)]
pub struct RefreshConfig {
    // 0 runs a single refresh and exits
    #[serde(default)]
    pub interval_sec: u64,
    #[serde(default = "default_task_timeout_seconds")]
    pub task_timeout_seconds: u64,
}

pub(crate) fn load_refresh_config() -> Result<RefreshConfig, ConfigError> {
    match envy::prefixed("REFRESH_").from_env::<RefreshConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(ConfigError::env_parse(format!("RefreshConfig: {}", err))),
    }
}
