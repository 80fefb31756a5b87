//! Build-time configuration.
//!
//! Everything here is resolved while the crate compiles:
//!
//! - Cargo feature `logger` switches logging on (default) or compiles every
//!   call site away.
//! - Cargo features `max-level-*` set a level floor that no runtime
//!   configuration can go below. The most restrictive one wins.
//! - Environment variables read with `option_env!` override the defaults:
//!
//! ```text
//! SERIAL_LOGGER_LEVEL=debug            # default min level (INFO)
//! SERIAL_LOGGER_MAX_MESSAGE_LEN=256    # formatted record bound (150)
//! SERIAL_LOGGER_BAUD_RATE=9600         # baud rate passed to begin (115200)
//! ```
//!
//! A malformed value stops the build: the parsers run in `const` items and
//! panic with the name of the offending variable.

use crate::level::{Level, LevelFilter};
use crate::utility::{parse_level_filter, parse_u32};

/// Whether logging is compiled in at all.
pub const ENABLED: bool = cfg!(feature = "logger");

/// Level floor selected by the `max-level-*` features.
pub const STATIC_MAX_LEVEL: LevelFilter = {
    let mut filter = LevelFilter::Debug;
    if cfg!(feature = "max-level-info") {
        filter = filter.stricter(LevelFilter::Info);
    }
    if cfg!(feature = "max-level-warn") {
        filter = filter.stricter(LevelFilter::Warn);
    }
    if cfg!(feature = "max-level-critical") {
        filter = filter.stricter(LevelFilter::Critical);
    }
    if cfg!(feature = "max-level-off") {
        filter = filter.stricter(LevelFilter::Off);
    }
    filter
};

/// Default minimum level of a [`LoggerConfig`].
pub const DEFAULT_LEVEL: LevelFilter = resolve_level(option_env!("SERIAL_LOGGER_LEVEL"));

/// Default bound, in bytes, of a formatted record (prefix and payload).
pub const DEFAULT_MAX_MESSAGE_LEN: usize = resolve_message_len(option_env!("SERIAL_LOGGER_MAX_MESSAGE_LEN"));

/// Default baud rate handed to the sink on [`begin`](crate::Logger::begin).
pub const DEFAULT_BAUD_RATE: u32 = resolve_baud_rate(option_env!("SERIAL_LOGGER_BAUD_RATE"));

/// Resolve `SERIAL_LOGGER_LEVEL`, `INFO` when unset.
///
/// Panics on an unknown name. In a `const` item that panic is a build error:
///
/// ```rust,compile_fail
/// use serial_logger::configuration::resolve_level;
/// use serial_logger::LevelFilter;
///
/// const LEVEL: LevelFilter = resolve_level(Some("LOUD"));
/// let _level = LEVEL;
/// ```
pub const fn resolve_level(value: Option<&str>) -> LevelFilter {
    match value {
        Some(name) => match parse_level_filter(name) {
            Some(filter) => filter,
            None => panic!("SERIAL_LOGGER_LEVEL must be one of DEBUG, INFO, WARN, CRITICAL, OFF"),
        },
        None => LevelFilter::Info,
    }
}

/// Resolve `SERIAL_LOGGER_MAX_MESSAGE_LEN`, 150 when unset.
///
/// ```rust,compile_fail
/// use serial_logger::configuration::resolve_message_len;
///
/// const LEN: usize = resolve_message_len(Some("0"));
/// let _len = LEN;
/// ```
pub const fn resolve_message_len(value: Option<&str>) -> usize {
    match value {
        Some(text) => match parse_u32(text) {
            Some(0) => panic!("SERIAL_LOGGER_MAX_MESSAGE_LEN must be non-zero"),
            Some(len) => len as usize,
            None => panic!("SERIAL_LOGGER_MAX_MESSAGE_LEN must be a decimal byte count"),
        },
        None => 150,
    }
}

/// Resolve `SERIAL_LOGGER_BAUD_RATE`, 115200 when unset.
pub const fn resolve_baud_rate(value: Option<&str>) -> u32 {
    match value {
        Some(text) => match parse_u32(text) {
            Some(0) | None => panic!("SERIAL_LOGGER_BAUD_RATE must be a positive decimal number"),
            Some(baud) => baud,
        },
        None => 115_200,
    }
}

/// Immutable logger configuration.
///
/// Built once, usually in a `const` or `static`, and moved into a
/// [`Logger`](crate::Logger). There is no setter on the logger afterwards.
///
/// ```rust
/// use serial_logger::{LevelFilter, LoggerConfig};
///
/// const CONFIG: LoggerConfig = LoggerConfig::new()
///     .with_min_level(LevelFilter::Debug)
///     .with_baud_rate(9600);
///
/// assert_eq!(CONFIG.min_level(), LevelFilter::Debug);
/// assert_eq!(CONFIG.baud_rate(), 9600);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerConfig {
    enabled: bool,
    min_level: LevelFilter,
    baud_rate: u32,
}

impl LoggerConfig {
    /// Configuration with the build-time defaults.
    pub const fn new() -> Self {
        Self {
            enabled: ENABLED,
            min_level: DEFAULT_LEVEL,
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }

    /// Set the minimum level.
    #[must_use]
    pub const fn with_min_level(mut self, min_level: LevelFilter) -> Self {
        self.min_level = min_level;
        self
    }

    /// Switch this logger on or off. Cannot re-enable a build without the
    /// `logger` feature.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub const fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    pub const fn min_level(&self) -> LevelFilter {
        self.min_level
    }

    pub const fn baud_rate(&self) -> u32 {
        self.baud_rate
    }

    /// The effective threshold: the configured level, raised to the static
    /// floor, or `Off` when disabled.
    pub const fn effective_level(&self) -> LevelFilter {
        if !ENABLED || !self.enabled {
            LevelFilter::Off
        } else {
            self.min_level.stricter(STATIC_MAX_LEVEL)
        }
    }

    /// Whether a call at `level` passes this configuration.
    #[inline]
    pub const fn allows(&self, level: Level) -> bool {
        crate::gate::passes(level, self.effective_level())
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}
