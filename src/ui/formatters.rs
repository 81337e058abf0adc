use crate::core::system_monitor::{MetricsSnapshot, StaticSystemInfo};

pub const STARTED_MARKER: &str = "--- MONITOR STARTED ---";
pub const STOPPED_MARKER: &str = "--- MONITOR STOPPED ---";

/// Header record written once per run
pub fn format_header(info: &StaticSystemInfo) -> String {
    format!("{} System Info: {}", STARTED_MARKER, info)
}

/// Per-tick log record
pub fn format_tick_record(snapshot: &MetricsSnapshot) -> String {
    format!(
        "CPU: {:.1}% | RAM: {:.1}% ({:.1}MB Used) | GPU: {:.1}% ({})",
        snapshot.cpu_usage_percent,
        snapshot.ram_usage_percent,
        snapshot.ram_used_mb,
        snapshot.gpu_usage_percent,
        snapshot.gpu_name
    )
}

/// Compact line rewritten in place on the console every tick
pub fn format_live_summary(snapshot: &MetricsSnapshot) -> String {
    format!(
        "[LIVE] CPU: {:.1}% | RAM: {:.1}% | GPU: {:.1}%",
        snapshot.cpu_usage_percent, snapshot.ram_usage_percent, snapshot.gpu_usage_percent
    )
}
