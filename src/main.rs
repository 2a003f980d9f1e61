//! Battery Health Monitor
//!
//! Reads battery-level measurements reported by handheld devices across
//! sites, estimates each device's average daily consumption and reports
//! which batteries need replacing, site by site.
//!
//! # Architecture
//!
//! - **Source**: readings come from an HTTP endpoint or a static JSON export
//! - **Analytics**: a pure pipeline (interval rate → device trend → fleet summary)
//! - **State**: loaded summaries, the selected site and the last error
//! - **Report**: a text dashboard or JSON written to stdout
//!
//! # Features
//!
//! - One-shot report (default) or periodic refresh
//! - Graceful shutdown on SIGTERM/SIGINT
//! - Timeout protection for hung refreshes

mod analytics;
mod config;
mod error;
mod model;
mod presentation;
mod service;
mod source;
mod state;


use crate::presentation::ReportFormat;
use crate::service::BatteryService;
use crate::state::AppState;
use anyhow::{anyhow, Context};
use std::future::IntoFuture;
use tokio::signal::ctrl_c;
use tokio::signal::unix::{signal, SignalKind};
use tokio::time;
use tokio::time::Duration;

/// Application entry point.
///
/// Loads configuration, builds the reading source and either prints a
/// single report or keeps refreshing until a termination signal arrives.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::load_app_config()?;
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .with_writer(std::io::stderr)
        .init();

    let format = app_config.report_format()?;
    let source_config = config::load_source_config()?;
    let refresh_config = config::load_refresh_config()?;

    let source = source::from_config(&source_config, app_config.mock_api)?;
    let service = BatteryService::new(source);
    let mut state = AppState::default();

    let cycle = RefreshCycle {
        site_id: app_config.report_site_id,
        format,
        timeout_seconds: refresh_config.task_timeout_seconds,
    };

    if refresh_config.interval_sec == 0 {
        cycle.run(&service, &mut state).await;
        return match state.error {
            Some(message) => Err(anyhow!(message)),
            None => Ok(()),
        };
    }

    let mut sig_term = signal(SignalKind::terminate()).context("Failed to register SIGTERM handler")?;
    let mut interval = time::interval(Duration::from_secs(refresh_config.interval_sec));
    tracing::info!(
        interval_sec = refresh_config.interval_sec,
        "Running... Press Ctrl-C or send SIGTERM to terminate."
    );
    loop {
        tokio::select! {
            // Handle SIGTERM for graceful shutdown in containers
            _ = sig_term.recv() => {
                tracing::info!("Received SIGTERM. Exiting...");
                break;
            }
            // Handle Ctrl-C for manual termination
            _ = ctrl_c() => {
                tracing::info!("Received SIGINT. Exiting...");
                break;
            }
            _ = interval.tick() => {
                cycle.run(&service, &mut state).await;
            }
        }
    }

    Ok(())
}

/// One refresh of the dashboard: load, optionally select a site, print.
struct RefreshCycle {
    site_id: Option<i64>,
    format: ReportFormat,
    timeout_seconds: u64,
}

impl RefreshCycle {
    async fn run(&self, service: &BatteryService, state: &mut AppState) {
        let loaded = with_timeout(
            "refresh",
            async {
                state.fetch_sites(service).await;
                match self.site_id {
                    Some(site_id) => state.select_site(service, site_id).await,
                    None => state.clear_selected_site(),
                }
            },
            self.timeout_seconds,
        )
        .await;

        if loaded.is_none() {
            state.loading = false;
            state.error = Some(format!(
                "Refresh timed out after {} seconds",
                self.timeout_seconds
            ));
        }

        match presentation::render_report(state, self.format) {
            Ok(report) => println!("{}", report),
            Err(e) => tracing::error!("Failed to render report: {:?}", e),
        }
    }
}

/// Wraps a future with a timeout to prevent a refresh from hanging indefinitely.
///
/// Returns `None` and logs an error when the timeout elapses first.
async fn with_timeout<F>(task_name: &'static str, future: F, timeout_seconds: u64) -> Option<F::Output>
where
    F: IntoFuture,
{
    let timeout_duration = Duration::from_secs(timeout_seconds);

    match time::timeout(timeout_duration, future).await {
        Ok(output) => Some(output),
        Err(_) => {
            tracing::error!("Task {} timed out.", task_name);
            None
        }
    }
}
