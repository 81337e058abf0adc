//! Size-capped append log with numbered backups.
//!
//! Records are written as one line each:
//!
//! ```text
//! 2024-05-01 12:00:00 | INFO | CPU: 3.0% | RAM: 41.2% (6590.2MB Used) | GPU: 0.0% (N/A)
//! ```
//!
//! When the next record would push the active file past `max_bytes`, the file
//! is moved into the backup chain first (`<log>.1` is the newest backup,
//! `<log>.<backup_count>` the oldest) and a fresh active file is opened.
//!
//! # Examples
//!
//! ```no_run
//! use sysmon::core::rotating_log::{RotatingLogSink, RotationPolicy, Severity};
//!
//! let mut sink = RotatingLogSink::open("system_monitor.log", RotationPolicy::default())?;
//! sink.write(Severity::Info, "--- MONITOR STARTED ---")?;
//! sink.close()?;
//! # Ok::<(), sysmon::MonitorError>(())
//! ```

use chrono::{DateTime, Local};
use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{MonitorError, Result};

/// 5 MiB
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;
pub const DEFAULT_BACKUP_COUNT: usize = 3;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Record severity, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When to rotate and how many old files to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Size cap of the active file. `0` disables rotation.
    pub max_bytes: u64,
    /// Number of backups kept. `0` truncates the active file on rotation.
    pub backup_count: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            backup_count: DEFAULT_BACKUP_COUNT,
        }
    }
}

/// Owned handle on the active log file plus its rotation bookkeeping
pub struct RotatingLogSink {
    path: PathBuf,
    policy: RotationPolicy,
    min_level: Severity,
    file: Option<File>,
    current_size: u64,
    rotations: usize,
}

impl RotatingLogSink {
    /// Open (or create) the active log file in append mode
    pub fn open<P: AsRef<Path>>(path: P, policy: RotationPolicy) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| MonitorError::log_sink(parent, e))?;
            }
        }

        let file = open_append(&path)?;
        let current_size = file
            .metadata()
            .map_err(|e| MonitorError::log_sink(&path, e))?
            .len();

        Ok(Self {
            path,
            policy,
            min_level: Severity::Info,
            file: Some(file),
            current_size,
            rotations: 0,
        })
    }

    /// Drop records below `level`
    pub fn with_min_level(mut self, level: Severity) -> Self {
        self.min_level = level;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> RotationPolicy {
        self.policy
    }

    pub fn min_level(&self) -> Severity {
        self.min_level
    }

    /// Bytes in the active file
    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    /// Rotations performed by this sink since it was opened
    pub fn rotations(&self) -> usize {
        self.rotations
    }

    /// Path of backup number `index` (1 is the most recent)
    pub fn backup_path(&self, index: usize) -> PathBuf {
        backup_path(&self.path, index)
    }

    /// Append one record, rotating first if it would overflow the active file
    pub fn write(&mut self, level: Severity, message: &str) -> Result<()> {
        if level < self.min_level {
            return Ok(());
        }

        let record = format_record(&Local::now(), level, message);
        let len = record.len() as u64;

        if self.should_rotate(len) {
            self.rotate()?;
        }

        let file = self.file.as_mut().ok_or_else(|| {
            MonitorError::log_sink(
                &self.path,
                std::io::Error::new(std::io::ErrorKind::NotConnected, "log file is closed"),
            )
        })?;

        file.write_all(record.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| MonitorError::log_sink(&self.path, e))?;

        self.current_size += len;
        Ok(())
    }

    /// Flush and release the active file
    pub fn close(mut self) -> Result<()> {
        match self.file.take() {
            Some(mut file) => file
                .flush()
                .map_err(|e| MonitorError::log_sink(&self.path, e)),
            None => Ok(()),
        }
    }

    fn should_rotate(&self, incoming: u64) -> bool {
        // An empty file always takes the record, even an oversized one
        self.policy.max_bytes > 0
            && self.current_size > 0
            && self.current_size + incoming > self.policy.max_bytes
    }

    fn rotate(&mut self) -> Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush().map_err(|e| MonitorError::log_sink(&self.path, e))?;
        }

        let backups = self.policy.backup_count;
        let file = if backups > 0 {
            for index in (1..backups).rev() {
                let src = self.backup_path(index);
                if src.exists() {
                    let dst = self.backup_path(index + 1);
                    remove_if_exists(&dst)?;
                    fs::rename(&src, &dst).map_err(|e| MonitorError::log_sink(&src, e))?;
                }
            }

            let newest = self.backup_path(1);
            remove_if_exists(&newest)?;
            if self.path.exists() {
                fs::rename(&self.path, &newest)
                    .map_err(|e| MonitorError::log_sink(&self.path, e))?;
            }
            open_append(&self.path)?
        } else {
            File::create(&self.path).map_err(|e| MonitorError::log_sink(&self.path, e))?
        };

        log::debug!(
            "Rotated {} (rotation #{})",
            self.path.display(),
            self.rotations + 1
        );

        self.file = Some(file);
        self.current_size = 0;
        self.rotations += 1;
        Ok(())
    }
}

impl Drop for RotatingLogSink {
    fn drop(&mut self) {
        if let Some(file) = self.file.as_mut() {
            let _ = file.flush();
        }
    }
}

impl fmt::Debug for RotatingLogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotatingLogSink")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .field("min_level", &self.min_level)
            .field("current_size", &self.current_size)
            .field("rotations", &self.rotations)
            .finish()
    }
}

/// `<timestamp> | <LEVEL> | <message>\n`, line breaks in `message` flattened
pub fn format_record(timestamp: &DateTime<Local>, level: Severity, message: &str) -> String {
    let message = message.replace(['\r', '\n'], " ");
    format!(
        "{} | {} | {}\n",
        timestamp.format(TIMESTAMP_FORMAT),
        level,
        message
    )
}

fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{}", index));
    PathBuf::from(name)
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| MonitorError::log_sink(path, e))
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(MonitorError::log_sink(path, e)),
    }
}
