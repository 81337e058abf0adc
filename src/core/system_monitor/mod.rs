//! System monitoring core functionality.
//!
//! This module provides the metric source adapter, the sampler that turns
//! adapter queries into snapshots, and the controller that drives the
//! sampling loop.

mod controller;
mod gpu;
mod metrics;
mod sampler;
mod shutdown;
mod source;

pub use controller::{Monitor, MonitorState, RunSummary};
pub use gpu::GpuProvider;
pub use metrics::{
    GpuReading, GpuSample, GpuVendor, MemoryUsage, MetricsSnapshot, StaticSystemInfo,
    GPU_UNAVAILABLE_NAME,
};
pub use sampler::Sampler;
pub use shutdown::ShutdownSignal;
pub use source::{MetricSource, SysinfoSource};
