use std::path::PathBuf;
use std::time::Duration;

use crate::core::rotating_log::{RotationPolicy, Severity};
use crate::error::{MonitorError, Result};

pub const DEFAULT_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_LOG_FILE: &str = "system_monitor.log";

/// Startup parameters of a monitoring run
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    /// Pause between two ticks
    pub interval: Duration,
    pub log_file: PathBuf,
    pub rotation: RotationPolicy,
    /// Records below this level are not written to the log file
    pub log_level: Severity,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            rotation: RotationPolicy::default(),
            log_level: Severity::Info,
        }
    }
}

impl MonitorConfig {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_log_file<P: Into<PathBuf>>(mut self, log_file: P) -> Self {
        self.log_file = log_file.into();
        self
    }

    pub fn with_rotation(mut self, rotation: RotationPolicy) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(MonitorError::config("interval must be greater than zero"));
        }

        if self.log_file.as_os_str().is_empty() {
            return Err(MonitorError::config("log file path must not be empty"));
        }

        Ok(())
    }
}
