//! The logger: configuration, sink and clock bound together.
//!
//! ## Pipeline
//!
//! ```text
//! call site ──► level gate ──► Record (prefix + payload, N bytes) ──► sink
//!               const + config   formatted outside the critical section   write(prefix)
//!                                                                          write / write_line(payload)
//! ```
//!
//! The sink lives in a `critical_section::Mutex`, and the writes of one
//! record happen inside a single critical section, so records from different
//! threads, tasks or interrupt handlers never interleave.
//!
//! ## Example
//!
//! ```rust,no_run
//! use serial_logger::{log_begin, log_info, logf_warn, Logger, LoggerConfig, LevelFilter};
//! # use serial_logger::sink::ByteSink;
//! # struct Uart;
//! # impl ByteSink for Uart { fn write(&mut self, _: &[u8]) {} }
//!
//! static LOGGER: Logger<Uart> = Logger::new(
//!     Uart,
//!     LoggerConfig::new().with_min_level(LevelFilter::Debug),
//! );
//!
//! log_begin!(LOGGER);
//! log_info!(LOGGER, "boot");
//! logf_warn!(LOGGER, "battery at {}%", 12);
//! ```

use core::cell::RefCell;
use core::fmt;

use critical_section::Mutex;

use crate::clock::{Clock, NoClock};
use crate::configuration::{LoggerConfig, DEFAULT_MAX_MESSAGE_LEN, ENABLED};
use crate::format::Payload;
use crate::level::Level;
use crate::record::{CallSite, Record};
use crate::sink::ByteSink;

/// Leveled logger writing to a [`ByteSink`].
///
/// - `S`: the sink, e.g. a UART driver
/// - `C`: the timestamp source, [`NoClock`] to omit timestamps
/// - `N`: bound in bytes of one formatted record (prefix and payload)
///
/// The configuration is fixed at construction. All constructors are
/// `const fn`, so a logger can be a `static` shared by every call site.
pub struct Logger<S, C = NoClock, const N: usize = DEFAULT_MAX_MESSAGE_LEN> {
    config: LoggerConfig,
    sink: Mutex<RefCell<S>>,
    clock: C,
}

impl<S> Logger<S> {
    /// Logger without timestamps and with the default record bound.
    pub const fn new(sink: S, config: LoggerConfig) -> Self {
        Self::from_parts(sink, NoClock, config)
    }
}

impl<S, C> Logger<S, C> {
    /// Logger with a timestamp source and the default record bound.
    pub const fn with_clock(sink: S, clock: C, config: LoggerConfig) -> Self {
        Self::from_parts(sink, clock, config)
    }
}

impl<S, C, const N: usize> Logger<S, C, N> {
    /// Logger with every parameter chosen explicitly.
    pub const fn from_parts(sink: S, clock: C, config: LoggerConfig) -> Self {
        Self {
            config,
            sink: Mutex::new(RefCell::new(sink)),
            clock,
        }
    }

    pub const fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Record bound in bytes.
    pub const fn max_message_len(&self) -> usize {
        N
    }

    /// Whether calls at `level` are emitted by this logger.
    #[inline(always)]
    pub const fn is_enabled(&self, level: Level) -> bool {
        self.config.allows(level)
    }

    /// Exclusive access to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        self.sink.get_mut().get_mut()
    }

    /// Take the sink back.
    pub fn into_sink(self) -> S {
        self.sink.into_inner().into_inner()
    }

    /// Run `f` on the sink inside a critical section.
    ///
    /// Works through a shared reference, so it reaches the sink of a `static`
    /// logger. Returns `None` if the sink is already borrowed, i.e. when
    /// called from inside the sink's own `write`.
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        critical_section::with(|cs| {
            let mut sink = self.sink.borrow(cs).try_borrow_mut().ok()?;
            Some(f(&mut *sink))
        })
    }
}

impl<S: ByteSink, C: Clock, const N: usize> Logger<S, C, N> {
    /// Start the sink and announce the resolved level.
    ///
    /// Calls [`ByteSink::begin`] until it reports ready. There is no timeout:
    /// a sink that never becomes ready blocks here forever. Then one Info
    /// record naming the effective level is written, if Info passes.
    ///
    /// Does nothing when logging is disabled.
    #[track_caller]
    pub fn begin(&self) {
        if !ENABLED || !self.config.enabled() {
            return;
        }

        let baud_rate = self.config.baud_rate();
        while !self.poll_ready(baud_rate) {
            core::hint::spin_loop();
        }

        if self.is_enabled(Level::Info) {
            let site = CallSite::caller(Level::Info);
            self.log_fmt(
                &site,
                format_args!("logger ready, level: {}", self.config.effective_level()),
            );
        }
    }

    fn poll_ready(&self, baud_rate: u32) -> bool {
        // Short critical section per poll so interrupts keep running while waiting
        critical_section::with(|cs| match self.sink.borrow(cs).try_borrow_mut() {
            Ok(mut sink) => sink.begin(baud_rate),
            Err(_) => false,
        })
    }

    /// Log a single value, without a terminator after the payload.
    pub fn log<P: Payload + ?Sized>(&self, site: &CallSite, value: &P) {
        if self.is_enabled(site.level()) {
            let mut record = self.start(site);
            record.push_value(value);
            self.emit(&record, false);
        }
    }

    /// Log a single value followed by a line terminator.
    pub fn log_ln<P: Payload + ?Sized>(&self, site: &CallSite, value: &P) {
        if self.is_enabled(site.level()) {
            let mut record = self.start(site);
            record.push_value(value);
            self.emit(&record, true);
        }
    }

    /// Log formatted arguments followed by a line terminator.
    pub fn log_fmt(&self, site: &CallSite, args: fmt::Arguments<'_>) {
        self.log_at(site.level(), site.file(), site.line(), args);
    }

    /// Log formatted arguments for a location known only at runtime.
    pub fn log_at(&self, level: Level, file: &str, line: u32, args: fmt::Arguments<'_>) {
        if self.is_enabled(level) {
            let mut record: Record<'_, N> = Record::new(level, file, line, self.clock.now_millis());
            record.push_args(args);
            self.emit(&record, true);
        }
    }

    fn start(&self, site: &CallSite) -> Record<'static, N> {
        Record::at(site, self.clock.now_millis())
    }

    /// Write a record: prefix first, then the payload.
    fn emit(&self, record: &Record<'_, N>, line_end: bool) {
        critical_section::with(|cs| {
            // A sink that logs through this logger from inside `write` would
            // re-enter here; such nested records are dropped
            let Ok(mut sink) = self.sink.borrow(cs).try_borrow_mut() else {
                return;
            };
            sink.write(record.prefix());
            if line_end {
                sink.write_line(record.payload());
            } else {
                sink.write(record.payload());
            }
        });
    }
}

impl<S, C: fmt::Debug, const N: usize> fmt::Debug for Logger<S, C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("clock", &self.clock)
            .field("max_message_len", &N)
            .finish_non_exhaustive()
    }
}
