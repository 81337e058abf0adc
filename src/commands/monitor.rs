//! Monitor command handler.
//!
//! Turns CLI arguments into a [`MonitorConfig`], wires Ctrl+C to the
//! shutdown signal and runs the sampling loop until it stops.

use anyhow::{Context, Result};
use clap::ArgMatches;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::config::{MonitorConfig, DEFAULT_INTERVAL_SECS, DEFAULT_LOG_FILE};
use crate::core::rotating_log::RotationPolicy;
use crate::core::system_monitor::{Monitor, ShutdownSignal, SysinfoSource};
use crate::error::MonitorError;
use crate::ui::ConsoleReporter;

/// A tick fault the monitor has already printed to the console
#[derive(Debug, thiserror::Error)]
#[error("Monitoring stopped on an unrecoverable error")]
pub struct ReportedFault(#[source] pub MonitorError);

/// Build the run configuration from parsed arguments
pub fn config_from_matches(matches: &ArgMatches) -> MonitorConfig {
    let defaults = RotationPolicy::default();

    let interval = matches
        .get_one::<u64>("interval")
        .copied()
        .unwrap_or(DEFAULT_INTERVAL_SECS);

    let log_file = matches
        .get_one::<PathBuf>("log-file")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let rotation = RotationPolicy {
        max_bytes: matches
            .get_one::<u64>("max-bytes")
            .copied()
            .unwrap_or(defaults.max_bytes),
        backup_count: matches
            .get_one::<usize>("backups")
            .copied()
            .unwrap_or(defaults.backup_count),
    };

    MonitorConfig::default()
        .with_interval(Duration::from_secs(interval))
        .with_log_file(log_file)
        .with_rotation(rotation)
}

/// Execute the monitor command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = config_from_matches(matches);

    let shutdown = ShutdownSignal::new();
    let handler_signal = shutdown.clone();

    // Setup Ctrl+C handler
    ctrlc::set_handler(move || handler_signal.trigger())
        .map_err(|e| MonitorError::signal(format!("Failed to set Ctrl+C handler: {}", e)))?;

    let log_file = config.log_file.clone();
    let mut monitor = Monitor::start(
        config,
        SysinfoSource::new(),
        ConsoleReporter::stdout(),
        shutdown,
    )
    .with_context(|| format!("Failed to start monitor (log file: {})", log_file.display()))?;

    let summary = monitor.run().map_err(ReportedFault)?;

    log::info!(
        "Monitor stopped after {} ticks ({} rotations)",
        summary.ticks,
        summary.rotations
    );

    Ok(())
}
