use crate::error::{MonitorError, Result};

use super::metrics::MetricsSnapshot;
use super::source::MetricSource;

/// Turns one round of adapter queries into a [`MetricsSnapshot`]
pub struct Sampler<S> {
    source: S,
}

impl<S: MetricSource> Sampler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Collect one snapshot.
    ///
    /// CPU and memory errors propagate. GPU failures have already been
    /// folded into defaults by the source.
    pub fn fetch_metrics(&mut self) -> Result<MetricsSnapshot> {
        let cpu = percent("CPU usage", self.source.cpu_usage()?)?;
        let memory = self.source.memory_usage()?;
        let ram = percent("RAM usage", memory.percent)?;
        let gpu = self.source.gpu_usage();

        Ok(MetricsSnapshot {
            cpu_usage_percent: cpu,
            ram_usage_percent: ram,
            ram_used_mb: non_negative(memory.used_mb),
            ram_free_mb: non_negative(memory.free_mb),
            gpu_usage_percent: if gpu.percent.is_finite() {
                gpu.percent.clamp(0.0, 100.0)
            } else {
                0.0
            },
            gpu_name: gpu.name,
        })
    }
}

fn percent(label: &str, value: f32) -> Result<f32> {
    if !value.is_finite() {
        return Err(MonitorError::metric_collection(format!(
            "{} is not a number: {}",
            label, value
        )));
    }
    Ok(value.clamp(0.0, 100.0))
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
