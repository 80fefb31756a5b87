//! Error types for logger configuration.
//!
//! Logging itself never fails: overflow truncates, filtered calls do nothing and
//! sink writes are fire-and-forget. Errors only exist where a level name is
//! parsed at runtime and when installing the `log` bridge.

use core::fmt;

#[cfg(feature = "std")]
use std::backtrace::Backtrace;

/// Result type alias for logger configuration.
pub type Result<T> = core::result::Result<T, LogError>;

/// Configuration error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum ConfigErrorKind {
    UnknownLevel,
}

/// Logger error types.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogError {
    /// A configuration value could not be parsed
    Config(ConfigError),
    /// A global `log` logger is already installed
    LoggerAlreadySet,
}

/// Configuration error with optional backtrace
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigError {
    kind: ConfigErrorKind,
    #[cfg(feature = "std")]
    #[cfg_attr(feature = "defmt", defmt(Debug2Format))]
    backtrace: Backtrace,
}

impl ConfigError {
    pub(crate) fn new(kind: ConfigErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if a level name was not recognized
    pub fn is_unknown_level(&self) -> bool {
        matches!(self.kind, ConfigErrorKind::UnknownLevel)
    }

    /// Where the error was created.
    ///
    /// Only captured when `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` is set.
    #[cfg(feature = "std")]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl LogError {
    pub(crate) fn unknown_level() -> Self {
        Self::Config(ConfigError::new(ConfigErrorKind::UnknownLevel))
    }
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::Config(e) => match e.kind {
                ConfigErrorKind::UnknownLevel => {
                    write!(f, "Configuration error: unknown level (expected DEBUG, INFO, WARN, CRITICAL or OFF)")
                }
            },
            LogError::LoggerAlreadySet => write!(f, "A global logger is already installed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LogError {}
