use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// A single battery-level observation reported by a handheld device.
///
/// Field names on the wire follow the upstream export format
/// (`academyId`, `employeeId`, `serialNumber`, ...).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Reading {
    /// Site (academy) the device is deployed at
    #[serde(rename = "academyId")]
    pub site_id: i64,
    /// Charge level in the range 0.0 to 1.0
    #[serde(rename = "batteryLevel")]
    pub battery_level: f64,
    /// Operator who was holding the device when the reading was taken
    #[serde(rename = "employeeId")]
    pub operator_id: String,
    /// Serial number identifying the device
    #[serde(rename = "serialNumber")]
    pub device_serial: String,
    /// When the reading was taken, normalized to UTC
    #[serde(rename = "timestamp", deserialize_with = "timestamp::deserialize")]
    pub taken_at: DateTime<Utc>,
}

/// Health classification of a single device.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Average daily consumption is at or below the replacement threshold
    Healthy,
    /// Average daily consumption exceeds the replacement threshold
    Unhealthy,
    /// Not enough applicable intervals to estimate consumption
    Unknown,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Unhealthy => write!(f, "unhealthy"),
            HealthStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Derived battery health of one device within one site.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceHealth {
    pub device_serial: String,
    /// Operator from the most recent reading
    pub last_operator_id: String,
    /// Battery level from the most recent reading
    pub last_battery_level: f64,
    /// Projected fraction of battery consumed per day, if it could be estimated
    pub avg_daily_consumption: Option<f64>,
    pub needs_replacement: bool,
    pub reading_count: usize,
    pub status: HealthStatus,
    /// Timestamp of the most recent reading
    pub last_updated_at: DateTime<Utc>,
}

/// Per-site rollup of device health.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSummary {
    pub site_id: i64,
    pub device_count: usize,
    pub unhealthy_count: usize,
    pub healthy_count: usize,
    pub unknown_count: usize,
    /// Unhealthy devices first
    pub devices: Vec<DeviceHealth>,
}

/// Lenient ISO-8601 timestamp parsing for readings.
///
/// Any RFC 3339 offset is accepted and converted to UTC. Timestamps
/// without an offset are taken to be UTC already, as are minute-precision
/// forms ending in `Z`. A bare date is midnight UTC.
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, ParseError, Utc};
    use serde::{de, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(|e| de::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    pub fn parse(raw: &str) -> Result<DateTime<Utc>, ParseError> {
        raw.parse::<DateTime<Utc>>().or_else(|err| {
            let local = raw.strip_suffix('Z').unwrap_or(raw);
            NAIVE_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(local, format).ok())
                .or_else(|| {
                    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                        .ok()
                        .map(|date| date.and_time(NaiveTime::MIN))
                })
                .map(|naive| naive.and_utc())
                .ok_or(err)
        })
    }
}
