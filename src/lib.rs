// sysmon library - public API

// Re-export error types
pub mod error;
pub use error::{MonitorError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use core::config::MonitorConfig;

// Initialize logging
//
// Diagnostics go to stderr; the default level stays at `warn` so they do not
// tear the live console line. Use RUST_LOG=debug to see GPU probing.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
