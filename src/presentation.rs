//! Rendering of site summaries for the terminal.
//!
//! Battery-level color tiers here describe how full a battery is right now.
//! They are unrelated to the daily consumption threshold used to decide
//! whether a battery needs replacing.

use crate::model::{DeviceHealth, SiteSummary};
use crate::state::AppState;
use std::fmt;
use std::str::FromStr;

/// Display tier for a current battery level.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BatteryLevelTier {
    /// Below 20%
    Low,
    /// 20% up to but excluding 50%
    Medium,
    /// 50% and above
    High,
}

impl BatteryLevelTier {
    pub fn from_level(level: f64) -> Self {
        if level < 0.2 {
            BatteryLevelTier::Low
        } else if level < 0.5 {
            BatteryLevelTier::Medium
        } else {
            BatteryLevelTier::High
        }
    }
}

impl fmt::Display for BatteryLevelTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BatteryLevelTier::Low => write!(f, "low"),
            BatteryLevelTier::Medium => write!(f, "medium"),
            BatteryLevelTier::High => write!(f, "high"),
        }
    }
}

/// Output format of the report.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("expected 'text' or 'json', got '{}'", other)),
        }
    }
}

/// Formats a 0.0 to 1.0 level as a whole percentage, e.g. `0.75` as `"75%"`.
pub fn battery_percentage(level: f64) -> String {
    format!("{}%", (level * 100.0).round())
}

/// Looks up a site by id.
pub fn find_site(sites: &[SiteSummary], site_id: i64) -> Option<&SiteSummary> {
    sites.iter().find(|site| site.site_id == site_id)
}

/// Renders the current state as a text dashboard or as JSON.
///
/// JSON output is the selected site when there is one, otherwise every
/// loaded site in ranked order.
pub fn render_report(state: &AppState, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Json => match &state.selected_site {
            Some(site) => serde_json::to_string_pretty(site),
            None => serde_json::to_string_pretty(&state.sites),
        },
        ReportFormat::Text => Ok(render_text(state)),
    }
}

fn render_text(state: &AppState) -> String {
    let mut lines = vec![format!(
        "Battery health: {} sites, {} devices need replacement",
        state.sites.len(),
        state.total_unhealthy_devices()
    )];

    let high_priority: Vec<String> = state
        .high_priority_sites()
        .iter()
        .map(|site| site.site_id.to_string())
        .collect();
    if !high_priority.is_empty() {
        lines.push(format!("High priority sites: {}", high_priority.join(", ")));
    }

    for site in &state.sites_ranked() {
        lines.push(site_line(site));
    }

    if let Some(site) = &state.selected_site {
        lines.push(String::new());
        lines.push(format!("Site {} devices:", site.site_id));
        lines.extend(site.devices.iter().map(device_line));
    }

    if let Some(error) = &state.error {
        lines.push(String::new());
        lines.push(format!("Error: {}", error));
    }

    lines.join("\n")
}

fn site_line(site: &SiteSummary) -> String {
    format!(
        "Site {:>6}: {:>3} devices ({} unhealthy, {} healthy, {} unknown)",
        site.site_id, site.device_count, site.unhealthy_count, site.healthy_count, site.unknown_count
    )
}

fn device_line(device: &DeviceHealth) -> String {
    let consumption = match device.avg_daily_consumption {
        Some(rate) => format!("{}/day", battery_percentage(rate)),
        None => "n/a".to_string(),
    };
    let flag = if device.needs_replacement { "  [replace]" } else { "" };

    format!(
        "  {:<16} {:<9} level {:>4} ({}), consumption {}, last seen {} by {}{}",
        device.device_serial,
        device.status.to_string(),
        battery_percentage(device.last_battery_level),
        BatteryLevelTier::from_level(device.last_battery_level),
        consumption,
        device.last_updated_at.format("%Y-%m-%d %H:%M"),
        device.last_operator_id,
        flag
    )
}
