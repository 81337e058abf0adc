//! Monitor controller.
//!
//! Owns the rotating log, the sampler and the console for one run and drives
//! them through `Starting -> Running -> Stopping -> Stopped`, or
//! `Running -> Faulted -> Stopped` when a tick fails.

use crate::core::config::MonitorConfig;
use crate::core::rotating_log::{RotatingLogSink, Severity};
use crate::error::{MonitorError, Result};
use crate::ui::{format_header, format_tick_record, ConsoleReporter, STOPPED_MARKER};

use super::metrics::{MetricsSnapshot, StaticSystemInfo};
use super::sampler::Sampler;
use super::shutdown::ShutdownSignal;
use super::source::MetricSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Starting,
    Running,
    Stopping,
    Faulted,
    Stopped,
}

/// Outcome of a run that ended without a fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub rotations: usize,
}

pub struct Monitor<S> {
    config: MonitorConfig,
    sampler: Sampler<S>,
    sink: Option<RotatingLogSink>,
    console: ConsoleReporter,
    shutdown: ShutdownSignal,
    system_info: StaticSystemInfo,
    state: MonitorState,
    ticks: u64,
}

impl<S: MetricSource> Monitor<S> {
    /// Open the log, record the host header and print the banner.
    ///
    /// On success the monitor is `Running` and ready for [`Monitor::run`].
    pub fn start(
        config: MonitorConfig,
        source: S,
        mut console: ConsoleReporter,
        shutdown: ShutdownSignal,
    ) -> Result<Self> {
        config.validate()?;

        let mut sink = RotatingLogSink::open(&config.log_file, config.rotation)?
            .with_min_level(config.log_level);

        let sampler = Sampler::new(source);
        let system_info = sampler.source().os_info();

        sink.write(Severity::Info, &format_header(&system_info))?;
        console.banner(&config.log_file);

        log::info!(
            "Monitoring every {:?}, logging to {}",
            config.interval,
            config.log_file.display()
        );

        Ok(Self {
            config,
            sampler,
            sink: Some(sink),
            console,
            shutdown,
            system_info,
            state: MonitorState::Running,
            ticks: 0,
        })
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn system_info(&self) -> &StaticSystemInfo {
        &self.system_info
    }

    /// Ticks completed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Handle that stops the loop from another thread
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.clone()
    }

    /// Sample until shutdown is requested or a tick fails
    pub fn run(&mut self) -> Result<RunSummary> {
        self.run_loop(None)
    }

    /// Like [`Monitor::run`], but stops cleanly after `count` ticks
    pub fn run_ticks(&mut self, count: u64) -> Result<RunSummary> {
        self.run_loop(Some(count))
    }

    /// Run one tick without waiting afterwards. A failed tick faults the monitor.
    pub fn step(&mut self) -> Result<MetricsSnapshot> {
        self.ensure_running()?;
        self.tick().map_err(|e| self.fault(e))
    }

    fn ensure_running(&self) -> Result<()> {
        if self.state != MonitorState::Running {
            return Err(MonitorError::config(format!(
                "monitor cannot run from state {:?}",
                self.state
            )));
        }
        Ok(())
    }

    fn run_loop(&mut self, limit: Option<u64>) -> Result<RunSummary> {
        self.ensure_running()?;

        let mut done = 0u64;
        loop {
            if self.shutdown.is_triggered() || limit.is_some_and(|n| done >= n) {
                break;
            }

            if let Err(e) = self.tick() {
                return Err(self.fault(e));
            }
            done += 1;

            if limit.is_some_and(|n| done >= n) {
                break;
            }

            if self.shutdown.wait_timeout(self.config.interval) {
                break;
            }
        }

        self.stop()
    }

    fn tick(&mut self) -> Result<MetricsSnapshot> {
        let snapshot = self.sampler.fetch_metrics()?;
        self.sink()?
            .write(Severity::Info, &format_tick_record(&snapshot))?;
        self.console.live(&snapshot);
        self.ticks += 1;
        Ok(snapshot)
    }

    fn stop(&mut self) -> Result<RunSummary> {
        self.state = MonitorState::Stopping;
        self.console.stopping();
        log::info!("Stopping after {} ticks", self.ticks);

        let result = self.sink().and_then(|sink| {
            sink.write(Severity::Info, STOPPED_MARKER)?;
            Ok(sink.rotations())
        });
        let closed = self.close_sink();

        self.state = MonitorState::Stopped;
        let rotations = result?;
        closed?;
        Ok(RunSummary {
            ticks: self.ticks,
            rotations,
        })
    }

    fn fault(&mut self, error: MonitorError) -> MonitorError {
        self.state = MonitorState::Faulted;
        log::error!("Tick {} failed: {}", self.ticks + 1, error);

        if let Some(sink) = self.sink.as_mut() {
            let record = format!("Unexpected error: {}", error);
            if let Err(e) = sink.write(Severity::Critical, &record) {
                log::warn!("Could not record failure in log file: {}", e);
            }
        }
        self.console.error(&error);

        if let Err(e) = self.close_sink() {
            log::warn!("Could not close log file: {}", e);
        }
        self.state = MonitorState::Stopped;
        error
    }

    fn sink(&mut self) -> Result<&mut RotatingLogSink> {
        let path = &self.config.log_file;
        self.sink.as_mut().ok_or_else(|| {
            MonitorError::log_sink(
                path,
                std::io::Error::new(std::io::ErrorKind::NotConnected, "log file is closed"),
            )
        })
    }

    fn close_sink(&mut self) -> Result<()> {
        match self.sink.take() {
            Some(sink) => sink.close(),
            None => Ok(()),
        }
    }
}
