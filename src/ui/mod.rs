// Console output and record formatting

pub mod console;
pub mod formatters;

pub use console::ConsoleReporter;
pub use formatters::{
    format_header, format_live_summary, format_tick_record, STARTED_MARKER, STOPPED_MARKER,
};
