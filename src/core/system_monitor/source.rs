//! Metric source adapter.
//!
//! Isolates OS and hardware queries from the sampling loop. CPU and memory
//! failures are reported to the caller; GPU failures are absorbed here.

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use crate::error::{MonitorError, Result};
use crate::platform::gpu::get_gpu_provider;

use super::gpu::GpuProvider;
use super::metrics::{round2, GpuReading, MemoryUsage, StaticSystemInfo, BYTES_PER_GB};

/// Queries the sampler needs from the host
pub trait MetricSource {
    /// Static host facts. Calling this twice yields the same value.
    fn os_info(&self) -> StaticSystemInfo;

    /// Utilization across all logical cores since the previous call
    fn cpu_usage(&mut self) -> Result<f32>;

    fn memory_usage(&mut self) -> Result<MemoryUsage>;

    /// Load of the first GPU, or [`GpuReading::unavailable`] on any failure
    fn gpu_usage(&mut self) -> GpuReading;
}

/// [`MetricSource`] backed by `sysinfo` and the platform GPU providers
pub struct SysinfoSource {
    system: System,
    gpu_provider: Option<Box<dyn GpuProvider>>,
}

impl SysinfoSource {
    /// Create a source with the first GPU provider that initializes, if any
    pub fn new() -> Self {
        let gpu_provider = match get_gpu_provider() {
            Ok(provider) => {
                log::info!("GPU provider ready ({:?})", provider.vendor());
                Some(provider)
            }
            Err(e) => {
                log::debug!("Could not retrieve GPU info: {}", e);
                None
            }
        };

        Self::with_gpu_provider(gpu_provider)
    }

    /// Create a source with an explicit GPU provider (or none)
    pub fn with_gpu_provider(gpu_provider: Option<Box<dyn GpuProvider>>) -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram());

        // The first refresh primes the CPU counters so the next reading is a
        // real delta instead of a zero.
        let system = System::new_with_specifics(refresh_kind);

        Self {
            system,
            gpu_provider,
        }
    }
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for SysinfoSource {
    fn os_info(&self) -> StaticSystemInfo {
        StaticSystemInfo {
            os: System::name().unwrap_or_else(|| "Unknown".to_string()),
            version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
            arch: std::env::consts::ARCH.to_string(),
            cores: self.system.cpus().len(),
            total_ram_gb: round2(self.system.total_memory() as f64 / BYTES_PER_GB),
        }
    }

    fn cpu_usage(&mut self) -> Result<f32> {
        self.system.refresh_cpu_usage();

        if self.system.cpus().is_empty() {
            return Err(MonitorError::metric_collection(
                "CPU counters unavailable: no processors reported",
            ));
        }

        let usage = self.system.global_cpu_usage();
        if usage.is_finite() {
            Ok(usage)
        } else {
            // Two refreshes inside the same jiffy leave no delta to divide by
            log::debug!("CPU usage undefined since last refresh, reporting 0");
            Ok(0.0)
        }
    }

    fn memory_usage(&mut self) -> Result<MemoryUsage> {
        self.system.refresh_memory();

        let total = self.system.total_memory();
        if total == 0 {
            return Err(MonitorError::metric_collection(
                "Memory counters unavailable: total memory reported as 0",
            ));
        }

        Ok(MemoryUsage::from_bytes(
            total,
            self.system.used_memory(),
            self.system.available_memory(),
        ))
    }

    fn gpu_usage(&mut self) -> GpuReading {
        let Some(provider) = self.gpu_provider.as_mut() else {
            return GpuReading::unavailable();
        };

        match provider.sample() {
            Ok(sample) => sample.into(),
            Err(e) => {
                log::debug!("Could not retrieve GPU info: {}", e);
                GpuReading::unavailable()
            }
        }
    }
}
