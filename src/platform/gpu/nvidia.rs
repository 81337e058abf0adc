#[cfg(feature = "nvml")]
use nvml_wrapper::{Device, Nvml};

use crate::core::system_monitor::{GpuProvider, GpuSample, GpuVendor};
use crate::error::{MonitorError, Result};

/// NVIDIA GPU provider using NVML
pub struct NvidiaGpuProvider {
    #[cfg(feature = "nvml")]
    nvml: Nvml,
    #[cfg_attr(not(feature = "nvml"), allow(dead_code))]
    device_index: u32,
}

impl NvidiaGpuProvider {
    /// Create a new NVIDIA GPU provider
    ///
    /// Initializes NVML and selects the first available GPU.
    pub fn new() -> Result<Self> {
        Self::with_device_index(0)
    }

    /// Create provider for a specific GPU index
    pub fn with_device_index(index: u32) -> Result<Self> {
        #[cfg(feature = "nvml")]
        {
            let nvml = Nvml::init().map_err(|e| {
                MonitorError::gpu_not_available(format!("Failed to init NVML: {}", e))
            })?;

            // Verify device exists
            let _ = nvml.device_by_index(index).map_err(|e| {
                MonitorError::gpu_not_available(format!("GPU {} not found: {}", index, e))
            })?;

            Ok(Self {
                nvml,
                device_index: index,
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            let _ = index;
            Err(MonitorError::gpu_not_available(
                "NVIDIA GPU support not enabled",
            ))
        }
    }

    #[cfg(feature = "nvml")]
    fn get_device(&self) -> Result<Device<'_>> {
        self.nvml.device_by_index(self.device_index).map_err(|e| {
            MonitorError::metric_collection(format!("Failed to get GPU device: {}", e))
        })
    }
}

impl GpuProvider for NvidiaGpuProvider {
    fn vendor(&self) -> GpuVendor {
        GpuVendor::Nvidia
    }

    fn sample(&mut self) -> Result<GpuSample> {
        #[cfg(feature = "nvml")]
        {
            let device = self.get_device()?;

            let name = device
                .name()
                .unwrap_or_else(|_| "Unknown NVIDIA GPU".to_string());

            let utilization = device.utilization_rates().map_err(|e| {
                MonitorError::metric_collection(format!("Failed to get GPU utilization: {}", e))
            })?;

            Ok(GpuSample {
                name,
                utilization_percent: utilization.gpu,
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            Err(MonitorError::gpu_not_available(
                "NVIDIA GPU support not enabled",
            ))
        }
    }
}
