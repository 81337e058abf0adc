//! Operator console output: startup banner, live line, shutdown notices.
//!
//! Console writes are best effort. The rotating log is the record of truth,
//! so a closed stdout never stops the monitor.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

use super::formatters::format_live_summary;
use crate::core::system_monitor::MetricsSnapshot;

pub struct ConsoleReporter {
    out: Box<dyn Write + Send>,
    live_line_open: bool,
}

impl ConsoleReporter {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out,
            live_line_open: false,
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn banner(&mut self, log_file: &Path) {
        writeln!(
            self.out,
            "{} (Log file: {})",
            "System monitoring service started.".green().bold(),
            log_file.display()
        )
        .ok();
        writeln!(self.out, "{}", "Press CTRL+C to exit.".dimmed()).ok();
        writeln!(self.out).ok();
        self.out.flush().ok();
    }

    /// Overwrite the current line with the latest snapshot
    pub fn live(&mut self, snapshot: &MetricsSnapshot) {
        // Trailing spaces erase leftovers of a longer previous line
        write!(self.out, "\r{}   ", format_live_summary(snapshot)).ok();
        self.out.flush().ok();
        self.live_line_open = true;
    }

    pub fn stopping(&mut self) {
        self.end_live_line();
        writeln!(self.out).ok();
        writeln!(self.out, "{}", "Stopping service...".yellow().bold()).ok();
        self.out.flush().ok();
    }

    pub fn error(&mut self, error: &dyn Display) {
        self.end_live_line();
        writeln!(self.out, "{} {}", "An error occurred:".red().bold(), error).ok();
        self.out.flush().ok();
    }

    fn end_live_line(&mut self) {
        if self.live_line_open {
            writeln!(self.out).ok();
            self.live_line_open = false;
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::stdout()
    }
}
