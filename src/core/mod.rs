// Core business logic module

pub mod config;
pub mod rotating_log;
pub mod system_monitor;

// Re-export commonly used items
pub use config::MonitorConfig;
pub use rotating_log::{RotatingLogSink, RotationPolicy, Severity};
pub use system_monitor::{Monitor, MonitorState, RunSummary, ShutdownSignal, SysinfoSource};
