//! The logger context object
//!
//! A [`Logger`] owns the level mask, the per-severity enable-flag cache,
//! the start instant used for elapsed-time prefixes, and the output sink.
//! The hosting process constructs one at startup and shares it by
//! reference; tests construct their own with a capturing sink. The
//! process-wide convenience instance lives in [`crate::global`].

use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Instant;

use parking_lot::Mutex;

use crate::error::FormatError;
use crate::level::{Severity, COLOR_RESET};
use crate::template;

const NANOS_PER_HOUR: u128 = 3_600_000_000_000;
const NANOS_PER_MIN: u128 = 60_000_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MILLI: u128 = 1_000_000;

/// Console logger with bitmask severity filtering, elapsed-time prefixes
/// and per-severity ANSI colors.
///
/// Disabled severities cost one relaxed atomic load per call: no time is
/// read, nothing is formatted, nothing is allocated.
pub struct Logger {
    /// Exact mask as last configured; read back by [`Logger::mask`].
    mask: AtomicU8,
    /// Cache of `mask & loggable_bits()`, recomputed on every
    /// configuration change. The emission fast path reads only this.
    flags: AtomicU8,
    start: Instant,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a logger writing to stdout with an `Info` threshold.
    pub fn new() -> Self {
        Self::with_sink(io::stdout())
    }

    /// Create a logger with a custom sink. Tests use this to capture
    /// output bytes.
    pub fn with_sink(sink: impl Write + Send + 'static) -> Self {
        let logger = Self {
            mask: AtomicU8::new(0),
            flags: AtomicU8::new(0),
            start: Instant::now(),
            sink: Mutex::new(Box::new(sink)),
        };
        logger.set_threshold(Severity::Info);
        logger
    }

    /// Create a stdout logger whose threshold comes from the
    /// `CHROMALOG_LEVEL` environment variable (`none`, `error`, `warn`,
    /// `info`, `debug` or `trace`). Unset or unrecognized values keep
    /// the `Info` default.
    pub fn from_env() -> Self {
        let logger = Self::new();
        if let Ok(value) = std::env::var("CHROMALOG_LEVEL") {
            if let Some(level) = Severity::from_name(&value) {
                logger.set_threshold(level);
            }
        }
        logger
    }

    /// Enable every severity from `Error` up to and including `level`.
    ///
    /// `set_threshold(Severity::None)` disables all output.
    pub fn set_threshold(&self, level: Severity) {
        self.store_mask(level.threshold_mask());
    }

    /// Set the level mask verbatim, allowing non-contiguous combinations
    /// such as `Severity::Error | Severity::Trace`.
    pub fn set_mask(&self, bits: u8) {
        self.store_mask(bits);
    }

    /// The current level mask.
    pub fn mask(&self) -> u8 {
        self.mask.load(Ordering::Relaxed)
    }

    /// Whether `severity` currently produces output.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.flags.load(Ordering::Relaxed) & severity.bit() != 0
    }

    fn store_mask(&self, bits: u8) {
        self.mask.store(bits, Ordering::Relaxed);
        // The None bit never enables anything.
        self.flags
            .store(bits & Severity::loggable_bits(), Ordering::Relaxed);
    }

    /// Log an error message.
    pub fn error(&self, template: &str, args: &[&dyn fmt::Display]) -> Result<(), FormatError> {
        self.emit(Severity::Error, None, template, args)
    }

    /// Log an error message under a category.
    pub fn error_cat(
        &self,
        category: &str,
        template: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError> {
        self.emit(Severity::Error, Some(category), template, args)
    }

    /// Log a warning message.
    pub fn warn(&self, template: &str, args: &[&dyn fmt::Display]) -> Result<(), FormatError> {
        self.emit(Severity::Warn, None, template, args)
    }

    /// Log a warning message under a category.
    pub fn warn_cat(
        &self,
        category: &str,
        template: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError> {
        self.emit(Severity::Warn, Some(category), template, args)
    }

    /// Log an info message.
    pub fn info(&self, template: &str, args: &[&dyn fmt::Display]) -> Result<(), FormatError> {
        self.emit(Severity::Info, None, template, args)
    }

    /// Log an info message under a category.
    pub fn info_cat(
        &self,
        category: &str,
        template: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError> {
        self.emit(Severity::Info, Some(category), template, args)
    }

    /// Log a debug message.
    pub fn debug(&self, template: &str, args: &[&dyn fmt::Display]) -> Result<(), FormatError> {
        self.emit(Severity::Debug, None, template, args)
    }

    /// Log a debug message under a category.
    pub fn debug_cat(
        &self,
        category: &str,
        template: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError> {
        self.emit(Severity::Debug, Some(category), template, args)
    }

    /// Log a trace message.
    pub fn trace(&self, template: &str, args: &[&dyn fmt::Display]) -> Result<(), FormatError> {
        self.emit(Severity::Trace, None, template, args)
    }

    /// Log a trace message under a category.
    pub fn trace_cat(
        &self,
        category: &str,
        template: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError> {
        self.emit(Severity::Trace, Some(category), template, args)
    }

    fn emit(
        &self,
        severity: Severity,
        category: Option<&str>,
        template: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError> {
        if !self.enabled(severity) {
            return Ok(());
        }
        // Render first: a template error must not reach the sink.
        let message = template::render(template, args)?;
        self.write_line(severity, category, &message);
        Ok(())
    }

    /// Emission entry point for the logging macros, which carry
    /// compile-time-checked [`format_args!`] payloads and therefore
    /// cannot fail.
    pub fn write_args(&self, severity: Severity, category: Option<&str>, args: fmt::Arguments<'_>) {
        if !self.enabled(severity) {
            return;
        }
        self.write_line(severity, category, &args.to_string());
    }

    fn write_line(&self, severity: Severity, category: Option<&str>, message: &str) {
        let mut sink = self.sink.lock();

        // Elapsed time is read under the sink lock so timestamps agree
        // with output order.
        let nanos = self.start.elapsed().as_nanos();
        let hours = nanos / NANOS_PER_HOUR;
        let nanos = nanos - hours * NANOS_PER_HOUR;
        let minutes = nanos / NANOS_PER_MIN;
        let nanos = nanos - minutes * NANOS_PER_MIN;
        let seconds = nanos / NANOS_PER_SEC;
        let nanos = nanos - seconds * NANOS_PER_SEC;
        let millis = nanos / NANOS_PER_MILLI;

        let mut line = String::with_capacity(message.len() + 48);
        let _ = write!(
            line,
            "{}{}:{:02}:{:02}:{:03}{}",
            severity.color(),
            hours,
            minutes,
            seconds,
            millis,
            severity.tag()
        );
        if let Some(category) = category {
            let _ = write!(line, "[{}] ", category);
        }
        line.push_str(message);
        line.push_str(COLOR_RESET);
        line.push('\n');

        let _ = sink.write_all(line.as_bytes());
        let _ = sink.flush();
    }
}

/// Convenience macros for logging through a specific [`Logger`]
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.write_args($crate::Severity::Error, None, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.write_args($crate::Severity::Warn, None, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.write_args($crate::Severity::Info, None, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.write_args($crate::Severity::Debug, None, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.write_args($crate::Severity::Trace, None, format_args!($($arg)*))
    };
}
