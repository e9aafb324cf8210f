//! Chromalog Core
//!
//! A minimal colorized console logging facility: messages are filtered by
//! a severity bitmask, prefixed with the elapsed time since the logger
//! started, framed in per-severity ANSI colors, and written to stdout one
//! line at a time. There is no rotation, no structured output and no
//! transport; formatting and level gating are the whole job.
//!
//! Levels can be configured as a verbosity ceiling or as an arbitrary
//! bit combination:
//!
//! ```rust
//! use chromalog_core::{log_debug, Logger, Severity};
//!
//! let logger = Logger::new();
//! logger.set_threshold(Severity::Debug);
//! logger.info("starting {} workers", &[&4]).unwrap();
//! logger.warn_cat("net", "retrying {}", &[&"10.0.0.1"]).unwrap();
//!
//! // Compile-time-checked formatting via the macros:
//! log_debug!(logger, "cache warm in {}ms", 12);
//!
//! // Only errors and traces, nothing in between:
//! logger.set_mask(Severity::Error | Severity::Trace);
//! ```
//!
//! Calls for a disabled severity are complete no-ops: one atomic flag
//! load, no time computation, no formatting. A shared default instance
//! lives in [`global`] for code that wants process-wide logging without
//! threading a `Logger` through every call site.

pub mod level;
pub mod error;
pub mod template;
pub mod logger;
pub mod global;

pub use level::{Severity, COLOR_RESET, LOGGABLE};
pub use error::FormatError;
pub use logger::Logger;

// Re-export the process-wide convenience functions
pub use global::{
    set_threshold, set_mask, mask,
    error, error_cat, warn, warn_cat, info, info_cat,
    debug, debug_cat, trace, trace_cat,
};
