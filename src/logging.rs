//! Unified logging entry point and `log` crate bridge.
//!
//! # Usage
//!
//! ```rust,no_run
//! # use serial_logger::{serial_log, Logger, LoggerConfig};
//! # use serial_logger::sink::ByteSink;
//! # struct Uart;
//! # impl ByteSink for Uart { fn write(&mut self, _: &[u8]) {} }
//! # let logger: Logger<Uart> = Logger::new(Uart, LoggerConfig::new());
//! # let n = 3;
//! serial_log!(logger, info, "Connection established");
//! serial_log!(logger, debug, "Received {} bytes", n);
//! serial_log!(logger, warn, "Timeout occurred");
//! serial_log!(logger, critical, "Failed to connect");
//! ```
//!
//! # Feature Flags
//!
//! - `log` - [`init`] installs a `'static` [`Logger`](crate::Logger) as the
//!   global logger of the `log` crate, so dependencies using `log::info!` and
//!   friends end up on the same serial port. `log` levels map as
//!   `Error → Critical`, `Warn → Warn`, `Info → Info`, `Debug | Trace → Debug`.

/// Unified logging macro - selects the level by identifier.
///
/// Accepts `debug`, `info`, `warn`, `critical` and, for call sites ported
/// from the `log` crate, `error` (Critical) and `trace` (Debug). Every form
/// takes a format string and ends the line, like the `logf_*!` macros.
#[macro_export]
macro_rules! serial_log {
    ($logger:expr, debug, $($arg:tt)+) => { $crate::logf_debug!($logger, $($arg)+) };
    ($logger:expr, trace, $($arg:tt)+) => { $crate::logf_debug!($logger, $($arg)+) };
    ($logger:expr, info, $($arg:tt)+) => { $crate::logf_info!($logger, $($arg)+) };
    ($logger:expr, warn, $($arg:tt)+) => { $crate::logf_warn!($logger, $($arg)+) };
    ($logger:expr, critical, $($arg:tt)+) => { $crate::logf_critical!($logger, $($arg)+) };
    ($logger:expr, error, $($arg:tt)+) => { $crate::logf_critical!($logger, $($arg)+) };
}

#[cfg(feature = "log")]
mod bridge {
    use crate::clock::Clock;
    use crate::error::{LogError, Result};
    use crate::level::{Level, LevelFilter};
    use crate::logger::Logger;
    use crate::sink::ByteSink;

    /// Level of a `log` record.
    pub const fn from_log_level(level: log::Level) -> Level {
        match level {
            log::Level::Error => Level::Critical,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }

    /// `log` filter letting through what `filter` lets through.
    pub const fn to_log_filter(filter: LevelFilter) -> log::LevelFilter {
        match filter {
            LevelFilter::Debug => log::LevelFilter::Trace,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Critical => log::LevelFilter::Error,
            LevelFilter::Off => log::LevelFilter::Off,
        }
    }

    impl<S, C, const N: usize> log::Log for Logger<S, C, N>
    where
        S: ByteSink + Send,
        C: Clock + Sync + Send,
    {
        fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
            self.is_enabled(from_log_level(metadata.level()))
        }

        fn log(&self, record: &log::Record<'_>) {
            self.log_at(
                from_log_level(record.level()),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                *record.args(),
            );
        }

        fn flush(&self) {}
    }

    /// Install `logger` as the global `log` logger.
    ///
    /// The `log` max level is set from the logger's effective level.
    pub fn init<S, C, const N: usize>(logger: &'static Logger<S, C, N>) -> Result<()>
    where
        S: ByteSink + Send + 'static,
        C: Clock + Sync + Send + 'static,
    {
        log::set_logger(logger).map_err(|_already_set| LogError::LoggerAlreadySet)?;
        log::set_max_level(to_log_filter(logger.config().effective_level()));
        Ok(())
    }
}

#[cfg(feature = "log")]
pub use bridge::{from_log_level, init, to_log_filter};
