//! Process-wide default logger
//!
//! A lazily-initialized [`Logger`] shared by the whole process, plus free
//! functions mirroring the instance API. First use captures the start
//! instant and applies the `CHROMALOG_LEVEL` environment variable; after
//! that the instance only changes through the configuration calls below.

use std::fmt;

use once_cell::sync::Lazy;

use crate::error::FormatError;
use crate::level::Severity;
use crate::logger::Logger;

static LOGGER: Lazy<Logger> = Lazy::new(Logger::from_env);

/// The process-wide logger instance. The global logging macros go
/// through this.
pub fn logger() -> &'static Logger {
    &LOGGER
}

/// Enable every severity from `Error` up to and including `level` on the
/// process-wide logger.
pub fn set_threshold(level: Severity) {
    LOGGER.set_threshold(level);
}

/// Set the process-wide level mask verbatim.
pub fn set_mask(bits: u8) {
    LOGGER.set_mask(bits);
}

/// The process-wide level mask.
pub fn mask() -> u8 {
    LOGGER.mask()
}

/// Log an error message.
pub fn error(template: &str, args: &[&dyn fmt::Display]) -> Result<(), FormatError> {
    LOGGER.error(template, args)
}

/// Log an error message under a category.
pub fn error_cat(
    category: &str,
    template: &str,
    args: &[&dyn fmt::Display],
) -> Result<(), FormatError> {
    LOGGER.error_cat(category, template, args)
}

/// Log a warning message.
pub fn warn(template: &str, args: &[&dyn fmt::Display]) -> Result<(), FormatError> {
    LOGGER.warn(template, args)
}

/// Log a warning message under a category.
pub fn warn_cat(
    category: &str,
    template: &str,
    args: &[&dyn fmt::Display],
) -> Result<(), FormatError> {
    LOGGER.warn_cat(category, template, args)
}

/// Log an info message.
pub fn info(template: &str, args: &[&dyn fmt::Display]) -> Result<(), FormatError> {
    LOGGER.info(template, args)
}

/// Log an info message under a category.
pub fn info_cat(
    category: &str,
    template: &str,
    args: &[&dyn fmt::Display],
) -> Result<(), FormatError> {
    LOGGER.info_cat(category, template, args)
}

/// Log a debug message.
pub fn debug(template: &str, args: &[&dyn fmt::Display]) -> Result<(), FormatError> {
    LOGGER.debug(template, args)
}

/// Log a debug message under a category.
pub fn debug_cat(
    category: &str,
    template: &str,
    args: &[&dyn fmt::Display],
) -> Result<(), FormatError> {
    LOGGER.debug_cat(category, template, args)
}

/// Log a trace message.
pub fn trace(template: &str, args: &[&dyn fmt::Display]) -> Result<(), FormatError> {
    LOGGER.trace(template, args)
}

/// Log a trace message under a category.
pub fn trace_cat(
    category: &str,
    template: &str,
    args: &[&dyn fmt::Display],
) -> Result<(), FormatError> {
    LOGGER.trace_cat(category, template, args)
}

/// Convenience macros for logging through the process-wide logger, with
/// the calling module as the category
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::global::logger().write_args(
            $crate::Severity::Error,
            Some(module_path!()),
            format_args!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::global::logger().write_args(
            $crate::Severity::Warn,
            Some(module_path!()),
            format_args!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::global::logger().write_args(
            $crate::Severity::Info,
            Some(module_path!()),
            format_args!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::global::logger().write_args(
            $crate::Severity::Debug,
            Some(module_path!()),
            format_args!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        $crate::global::logger().write_args(
            $crate::Severity::Trace,
            Some(module_path!()),
            format_args!($($arg)*),
        )
    };
}
