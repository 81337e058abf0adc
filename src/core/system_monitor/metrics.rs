use std::fmt;

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Placeholder reported when no GPU could be queried
pub const GPU_UNAVAILABLE_NAME: &str = "N/A";

/// Host facts captured once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct StaticSystemInfo {
    pub os: String,
    pub version: String,
    pub arch: String,
    pub cores: usize,
    pub total_ram_gb: f64,
}

impl fmt::Display for StaticSystemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{OS: {}, Version: {}, Arch: {}, Cores: {}, Total_RAM: {:.2} GB}}",
            self.os, self.version, self.arch, self.cores, self.total_ram_gb
        )
    }
}

/// One tick worth of measurements
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    pub cpu_usage_percent: f32,
    pub ram_usage_percent: f32,
    pub ram_used_mb: f64,
    pub ram_free_mb: f64,
    pub gpu_usage_percent: f32,
    pub gpu_name: String,
}

/// RAM figures as reported by the memory path of a [`MetricSource`](super::MetricSource)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryUsage {
    pub percent: f32,
    pub used_mb: f64,
    pub free_mb: f64,
}

impl MemoryUsage {
    /// Build from raw byte counters. `free_bytes` is the memory available to new allocations.
    pub fn from_bytes(total_bytes: u64, used_bytes: u64, free_bytes: u64) -> Self {
        let percent = if total_bytes > 0 {
            (used_bytes as f64 / total_bytes as f64 * 100.0) as f32
        } else {
            0.0
        };

        Self {
            percent,
            used_mb: round2(used_bytes as f64 / BYTES_PER_MB),
            free_mb: round2(free_bytes as f64 / BYTES_PER_MB),
        }
    }
}

/// GPU load and device name; never an error
#[derive(Debug, Clone, PartialEq)]
pub struct GpuReading {
    pub percent: f32,
    pub name: String,
}

impl GpuReading {
    pub fn new(percent: f32, name: impl Into<String>) -> Self {
        Self {
            percent,
            name: name.into(),
        }
    }

    /// The `(0.0, "N/A")` pair used whenever the GPU path fails
    pub fn unavailable() -> Self {
        Self::new(0.0, GPU_UNAVAILABLE_NAME)
    }

    pub fn is_available(&self) -> bool {
        self.name != GPU_UNAVAILABLE_NAME
    }
}

impl Default for GpuReading {
    fn default() -> Self {
        Self::unavailable()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpuVendor {
    Nvidia,
}

/// Raw reading produced by a [`GpuProvider`](super::GpuProvider)
#[derive(Debug, Clone, PartialEq)]
pub struct GpuSample {
    pub name: String,
    pub utilization_percent: u32,
}

impl From<GpuSample> for GpuReading {
    fn from(sample: GpuSample) -> Self {
        GpuReading::new(sample.utilization_percent.min(100) as f32, sample.name)
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
