//! Test fixtures and common test data.
//!
//! This module provides a reading builder, reference timestamps, sample
//! fleets and a few assertion helpers used across the test suite.

use crate::model::Reading;
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Common test data constants.
pub mod constants {
    pub const TEST_SITE_ID: i64 = 1;
    pub const TEST_SERIAL: &str = "S1";
    pub const TEST_OPERATOR: &str = "T1";

    /// Tolerance for floating point comparisons of rates.
    pub const EPSILON: f64 = 1e-9;
}

/// Test date and time generators.
pub mod dates {
    use super::*;

    /// Reference instant all builder offsets are relative to: 2024-02-20 10:00 UTC.
    pub fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 20, 10, 0, 0).unwrap()
    }

    pub fn hours_after_t0(hours: i64) -> DateTime<Utc> {
        t0() + Duration::hours(hours)
    }
}

/// Asserts two rates are equal within [`constants::EPSILON`].
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < constants::EPSILON,
        "expected {} to be close to {}",
        actual,
        expected
    );
}

/// Builder for readings with sensible defaults (site 1, device S1, full battery at t0).
#[derive(Debug)]
pub struct TestReadingBuilder {
    site_id: i64,
    device_serial: String,
    operator_id: String,
    battery_level: f64,
    taken_at: DateTime<Utc>,
}

impl TestReadingBuilder {
    pub fn new() -> Self {
        Self {
            site_id: constants::TEST_SITE_ID,
            device_serial: constants::TEST_SERIAL.to_string(),
            operator_id: constants::TEST_OPERATOR.to_string(),
            battery_level: 1.0,
            taken_at: dates::t0(),
        }
    }

    pub fn with_site(mut self, site_id: i64) -> Self {
        self.site_id = site_id;
        self
    }

    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.device_serial = serial.into();
        self
    }

    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator_id = operator.into();
        self
    }

    pub fn with_level(mut self, level: f64) -> Self {
        self.battery_level = level;
        self
    }

    pub fn at(mut self, taken_at: DateTime<Utc>) -> Self {
        self.taken_at = taken_at;
        self
    }

    pub fn hours_after_t0(self, hours: i64) -> Self {
        self.at(dates::hours_after_t0(hours))
    }

    pub fn build(self) -> Reading {
        Reading {
            site_id: self.site_id,
            battery_level: self.battery_level,
            operator_id: self.operator_id,
            device_serial: self.device_serial,
            taken_at: self.taken_at,
        }
    }
}

/// Sample data generators.
pub mod samples {
    use super::*;

    fn reading(site: i64, serial: &str, operator: &str, level: f64, hours: i64) -> Reading {
        TestReadingBuilder::new()
            .with_site(site)
            .with_serial(serial)
            .with_operator(operator)
            .with_level(level)
            .hours_after_t0(hours)
            .build()
    }

    /// Three sites with every health status, delivered out of order.
    ///
    /// - site 1: S1-A unhealthy (100%/day), S1-B unknown (one reading), S1-C healthy (5%/day)
    /// - site 2: S2-A unhealthy (60%/day), S2-B unknown (only a charging interval)
    /// - site 3: S3-A healthy (10%/day) with a duplicated reading
    pub fn mixed_fleet() -> Vec<Reading> {
        vec![
            reading(2, "S2-B", "T21", 0.3, 0),
            reading(1, "S1-A", "T11", 0.5, 12),
            reading(3, "S3-A", "T31", 0.8, 0),
            reading(1, "S1-B", "T12", 0.15, 3),
            reading(2, "S2-A", "T22", 0.9, 0),
            reading(1, "S1-C", "T13", 1.0, 0),
            reading(2, "S2-B", "T21", 0.8, 5),
            reading(1, "S1-A", "T11", 1.0, 0),
            reading(3, "S3-A", "T32", 0.7, 24),
            reading(3, "S3-A", "T32", 0.7, 24),
            reading(2, "S2-A", "T22", 0.6, 12),
            reading(1, "S1-C", "T14", 0.95, 24),
        ]
    }

    /// Wraps readings in the upstream `{ "data": [...] }` envelope.
    pub fn envelope_json(readings: &[Reading]) -> String {
        serde_json::json!({ "data": readings }).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let reading = TestReadingBuilder::new().build();
        assert_eq!(reading.site_id, constants::TEST_SITE_ID);
        assert_eq!(reading.device_serial, constants::TEST_SERIAL);
        assert_eq!(reading.operator_id, constants::TEST_OPERATOR);
        assert_eq!(reading.battery_level, 1.0);
        assert_eq!(reading.taken_at, dates::t0());
    }

    #[test]
    fn test_envelope_json_shape() {
        let body = samples::envelope_json(&[TestReadingBuilder::new().build()]);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(value["data"][0]["academyId"], 1);
        assert_eq!(value["data"][0]["serialNumber"], "S1");
        assert_eq!(value["data"][0]["timestamp"], "2024-02-20T10:00:00Z");
    }
}
