use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the monitor library
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log file error ({}): {source}", path.display())]
    LogSink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("GPU not available: {0}")]
    GpuNotAvailable(String),

    #[error("Metric collection failed: {0}")]
    MetricCollection(String),

    #[error("Signal handler error: {0}")]
    Signal(String),
}

/// Result type alias for the monitor library
pub type Result<T> = std::result::Result<T, MonitorError>;

impl MonitorError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MonitorError::Config(msg.into())
    }

    /// Wrap an IO failure on the log file, keeping the offending path
    pub fn log_sink<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        MonitorError::LogSink {
            path: path.into(),
            source,
        }
    }

    pub fn gpu_not_available<S: Into<String>>(msg: S) -> Self {
        MonitorError::GpuNotAvailable(msg.into())
    }

    pub fn metric_collection<S: Into<String>>(msg: S) -> Self {
        MonitorError::MetricCollection(msg.into())
    }

    pub fn signal<S: Into<String>>(msg: S) -> Self {
        MonitorError::Signal(msg.into())
    }
}
