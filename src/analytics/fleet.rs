use crate::model::{DeviceHealth, HealthStatus, Reading, SiteSummary};
use std::collections::HashMap;
use std::hash::Hash;

use super::trend::{aggregate, chronological};

/// A device using more than 30% of its battery per day needs a new battery.
pub const UNHEALTHY_THRESHOLD: f64 = 0.3;

/// Groups readings by site and device and produces ranked health summaries.
///
/// Sites are ordered by unhealthy device count, highest first. Within a site,
/// unhealthy devices come first. Both sorts are stable, so ties keep the
/// order in which their site or device first appeared in `records`.
pub fn summarize(records: &[Reading]) -> Vec<SiteSummary> {
    let mut sites: Vec<SiteSummary> = group_by(records, |record| record.site_id)
        .into_iter()
        .map(|(site_id, site_records)| summarize_site(site_id, site_records))
        .collect();

    sites.sort_by(|a, b| b.unhealthy_count.cmp(&a.unhealthy_count));
    sites
}

/// Maps a consumption estimate to a health status.
pub fn classify(avg_daily_consumption: Option<f64>) -> HealthStatus {
    match avg_daily_consumption {
        None => HealthStatus::Unknown,
        Some(rate) if rate > UNHEALTHY_THRESHOLD => HealthStatus::Unhealthy,
        Some(_) => HealthStatus::Healthy,
    }
}

fn summarize_site(site_id: i64, records: Vec<&Reading>) -> SiteSummary {
    let mut devices: Vec<DeviceHealth> = group_by(records, |record| record.device_serial.as_str())
        .into_iter()
        .filter_map(|(serial, readings)| assess_device(serial, readings))
        .collect();

    devices.sort_by_key(|device| device.status != HealthStatus::Unhealthy);

    let count = |status: HealthStatus| devices.iter().filter(|d| d.status == status).count();
    let unhealthy_count = count(HealthStatus::Unhealthy);
    let healthy_count = count(HealthStatus::Healthy);
    let unknown_count = count(HealthStatus::Unknown);

    tracing::debug!(
        site_id,
        devices = devices.len(),
        unhealthy = unhealthy_count,
        healthy = healthy_count,
        unknown = unknown_count,
        "Summarized site"
    );

    SiteSummary {
        site_id,
        device_count: devices.len(),
        unhealthy_count,
        healthy_count,
        unknown_count,
        devices,
    }
}

fn assess_device(serial: &str, readings: Vec<&Reading>) -> Option<DeviceHealth> {
    let sorted = chronological(readings);
    let last = *sorted.last()?;
    let avg_daily_consumption = aggregate(&sorted);
    let status = classify(avg_daily_consumption);

    Some(DeviceHealth {
        device_serial: serial.to_string(),
        last_operator_id: last.operator_id.clone(),
        last_battery_level: last.battery_level,
        avg_daily_consumption,
        needs_replacement: status == HealthStatus::Unhealthy,
        reading_count: sorted.len(),
        status,
        last_updated_at: last.taken_at,
    })
}

/// Groups records by key, keeping groups in first-seen key order.
fn group_by<'a, I, K, F>(records: I, key: F) -> Vec<(K, Vec<&'a Reading>)>
where
    I: IntoIterator<Item = &'a Reading>,
    K: Eq + Hash + Copy,
    F: Fn(&'a Reading) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a Reading>)> = Vec::new();

    for record in records {
        let k = key(record);
        match index.get(&k) {
            Some(&i) => groups[i].1.push(record),
            None => {
                index.insert(k, groups.len());
                groups.push((k, vec![record]));
            }
        }
    }

    groups
}
