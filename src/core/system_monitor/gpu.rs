use super::metrics::GpuSample;
use crate::error::Result;

/// Trait for GPU metrics providers
///
/// Implementations live in the platform layer. Errors returned here are
/// absorbed by [`SysinfoSource::gpu_usage`](super::SysinfoSource) and never
/// reach the sampling loop.
pub trait GpuProvider: Send {
    /// Get the vendor of the GPU
    fn vendor(&self) -> GpuVendor;

    /// Query the current load of the device this provider is bound to
    fn sample(&mut self) -> Result<GpuSample>;
}

// Re-export GpuVendor for convenience
pub use super::metrics::GpuVendor;
