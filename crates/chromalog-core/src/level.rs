//! Severity levels and the enable bitmask

use std::fmt;

/// ANSI reset sequence appended after every emitted line.
pub const COLOR_RESET: &str = "\x1b[0m";

/// Logging severity. Each level occupies its own bit so arbitrary
/// combinations can be packed into a `u8` mask.
///
/// Ordered by verbosity: `None < Error < Warn < Info < Debug < Trace`.
/// `None` is a sentinel meaning "nothing enabled" and is never loggable
/// itself.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    None = 1,
    Error = 2,
    Warn = 4,
    Info = 8,
    Debug = 16,
    Trace = 32,
}

/// The five loggable severities, loudest first. `None` is excluded.
pub const LOGGABLE: [Severity; 5] = [
    Severity::Error,
    Severity::Warn,
    Severity::Info,
    Severity::Debug,
    Severity::Trace,
];

impl Severity {
    /// The bit this severity occupies in a level mask.
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Bits of every loggable severity. Masks out the `None` bit, which
    /// threshold arithmetic can set but which must never enable anything.
    pub const fn loggable_bits() -> u8 {
        Severity::Error.bit()
            | Severity::Warn.bit()
            | Severity::Info.bit()
            | Severity::Debug.bit()
            | Severity::Trace.bit()
    }

    /// Mask enabling every severity from `Error` up to and including
    /// `self`: all bits below the next power of two.
    pub const fn threshold_mask(self) -> u8 {
        (self.bit() << 1) - 1
    }

    /// Tag text inserted between the timestamp and the message.
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::None => " NONE: ",
            Severity::Error => " ERROR: ",
            Severity::Warn => " WARN: ",
            Severity::Info => " INFO: ",
            Severity::Debug => " DEBUG: ",
            Severity::Trace => " TRACE: ",
        }
    }

    /// ANSI color sequence emitted before the timestamp.
    pub const fn color(self) -> &'static str {
        match self {
            Severity::None => "",
            Severity::Error => "\x1b[1;31m",
            Severity::Warn => "\x1b[1;33m",
            Severity::Info => "\x1b[1;34m",
            Severity::Debug => "\x1b[1;32m",
            Severity::Trace => "\x1b[1;37m",
        }
    }

    /// Parse a severity name, as used by the `CHROMALOG_LEVEL`
    /// environment variable. Case-insensitive; `None` for anything
    /// unrecognized.
    pub fn from_name(name: &str) -> Option<Severity> {
        match name.to_lowercase().as_str() {
            "none" | "off" => Some(Severity::None),
            "error" => Some(Severity::Error),
            "warn" | "warning" => Some(Severity::Warn),
            "info" => Some(Severity::Info),
            "debug" => Some(Severity::Debug),
            "trace" => Some(Severity::Trace),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::None => write!(f, "NONE"),
            Severity::Error => write!(f, "ERROR"),
            Severity::Warn => write!(f, "WARN"),
            Severity::Info => write!(f, "INFO"),
            Severity::Debug => write!(f, "DEBUG"),
            Severity::Trace => write!(f, "TRACE"),
        }
    }
}

// `Error | Trace` and friends build a mask directly.
impl std::ops::BitOr for Severity {
    type Output = u8;

    fn bitor(self, rhs: Severity) -> u8 {
        self.bit() | rhs.bit()
    }
}

impl std::ops::BitOr<Severity> for u8 {
    type Output = u8;

    fn bitor(self, rhs: Severity) -> u8 {
        self | rhs.bit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_are_distinct_powers_of_two() {
        let mut seen = 0u8;
        for level in [Severity::None, Severity::Error, Severity::Warn,
                      Severity::Info, Severity::Debug, Severity::Trace] {
            assert!(level.bit().is_power_of_two());
            assert_eq!(seen & level.bit(), 0);
            seen |= level.bit();
        }
    }

    #[test]
    fn test_threshold_mask_covers_louder_levels() {
        // Threshold Info enables Error, Warn and Info but not Debug/Trace.
        let mask = Severity::Info.threshold_mask();
        assert_ne!(mask & Severity::Error.bit(), 0);
        assert_ne!(mask & Severity::Warn.bit(), 0);
        assert_ne!(mask & Severity::Info.bit(), 0);
        assert_eq!(mask & Severity::Debug.bit(), 0);
        assert_eq!(mask & Severity::Trace.bit(), 0);
    }

    #[test]
    fn test_threshold_mask_none_enables_nothing_loggable() {
        let mask = Severity::None.threshold_mask();
        assert_eq!(mask & Severity::loggable_bits(), 0);
    }

    #[test]
    fn test_bitor_builds_masks() {
        let mask = Severity::Error | Severity::Trace;
        assert_eq!(mask, 0b10_0010);
        assert_eq!(mask | Severity::Warn, 0b10_0110);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Severity::from_name("TRACE"), Some(Severity::Trace));
        assert_eq!(Severity::from_name("warning"), Some(Severity::Warn));
        assert_eq!(Severity::from_name("off"), Some(Severity::None));
        assert_eq!(Severity::from_name("loud"), None);
    }
}
