//! GPU-specific platform code.
//!
//! Only the first device of the first working vendor is ever reported.
//! NVIDIA is supported through NVML (`nvml` feature).

mod nvidia;

pub use nvidia::NvidiaGpuProvider;

use crate::core::system_monitor::GpuProvider;
use crate::error::{MonitorError, Result};

/// Attempt to get an available GPU provider
///
/// Returns error if no GPU is available.
pub fn get_gpu_provider() -> Result<Box<dyn GpuProvider>> {
    match NvidiaGpuProvider::new() {
        Ok(provider) => Ok(Box::new(provider)),
        Err(e) => Err(MonitorError::gpu_not_available(format!(
            "No supported GPU found ({})",
            e
        ))),
    }
}
