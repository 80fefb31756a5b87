//! Severity levels and level filters.
//!
//! [`Level`] is the severity attached to every log call. [`LevelFilter`] is the
//! threshold a call is compared against; it adds [`LevelFilter::Off`], which
//! sorts above every level and therefore silences all of them.
//!
//! ## Ordering
//!
//! ```text
//! Debug(1) < Info(2) < Warn(3) < Critical(4) < Off(5)
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::LogError;
use crate::utility::parse_level_filter;

/// Severity of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Level {
    /// Verbose diagnostics
    Debug = 1,
    /// Normal operation messages
    Info = 2,
    /// Unexpected but recoverable conditions
    Warn = 3,
    /// Failures that need attention
    Critical = 4,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Critical];

    /// Tag printed between brackets at the start of a record.
    pub const fn tag(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Critical => "CRITICAL",
        }
    }

    /// Numeric value of the level (1-4).
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// The filter that lets exactly this level and everything above it pass.
    pub const fn to_filter(self) -> LevelFilter {
        match self {
            Level::Debug => LevelFilter::Debug,
            Level::Info => LevelFilter::Info,
            Level::Warn => LevelFilter::Warn,
            Level::Critical => LevelFilter::Critical,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<LevelFilter>()?.to_level() {
            Some(level) => Ok(level),
            None => Err(LogError::unknown_level()),
        }
    }
}

/// Minimum severity a call must reach to be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum LevelFilter {
    /// Everything passes
    Debug = 1,
    Info = 2,
    Warn = 3,
    Critical = 4,
    /// Nothing passes
    Off = 5,
}

impl LevelFilter {
    /// Name of the filter as accepted by `SERIAL_LOGGER_LEVEL`.
    pub const fn name(self) -> &'static str {
        match self.to_level() {
            Some(level) => level.tag(),
            None => "OFF",
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// The lowest level this filter lets through, `None` for [`LevelFilter::Off`].
    pub const fn to_level(self) -> Option<Level> {
        match self {
            LevelFilter::Debug => Some(Level::Debug),
            LevelFilter::Info => Some(Level::Info),
            LevelFilter::Warn => Some(Level::Warn),
            LevelFilter::Critical => Some(Level::Critical),
            LevelFilter::Off => None,
        }
    }

    /// The stricter of two filters.
    pub const fn stricter(self, other: LevelFilter) -> LevelFilter {
        if self.as_u8() >= other.as_u8() {
            self
        } else {
            other
        }
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LevelFilter {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level_filter(s).ok_or_else(LogError::unknown_level)
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        level.to_filter()
    }
}

impl PartialEq<LevelFilter> for Level {
    fn eq(&self, other: &LevelFilter) -> bool {
        self.as_u8() == other.as_u8()
    }
}

impl PartialOrd<LevelFilter> for Level {
    fn partial_cmp(&self, other: &LevelFilter) -> Option<Ordering> {
        Some(self.as_u8().cmp(&other.as_u8()))
    }
}
