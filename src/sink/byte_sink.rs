//! Byte sink abstraction for log output.
//!
//! This module provides the `ByteSink` trait that abstracts the transport a
//! log record is written to, enabling:
//! - Testability through mock implementations
//! - Any transport (UART, USB CDC, RTT, semihosting) without touching the logger
//!
//! ## Example
//!
//! ```rust,no_run
//! use serial_logger::sink::ByteSink;
//!
//! struct Uart0;
//!
//! impl ByteSink for Uart0 {
//!     fn begin(&mut self, baud_rate: u32) -> bool {
//!         // configure the peripheral, report whether the line is up
//!         true
//!     }
//!
//!     fn write(&mut self, bytes: &[u8]) {
//!         // push bytes into the TX FIFO
//!     }
//! }
//! ```

use crate::sink::LINE_TERMINATOR;

/// Transport that accepts raw log bytes.
///
/// # Design Notes
///
/// Writes are fire-and-forget: the trait has no error channel and the logger
/// never retries. A sink that can fail should drop the bytes.
///
/// Every record is written as a short sequence (`write` for the prefix, then
/// `write` or `write_line` for the payload) while the logger holds a critical
/// section, so implementations must not block on interrupts that need to run
/// for the write to complete.
///
/// A logger over a type that is not a sink does not build, whether or not
/// logging is compiled in:
///
/// ```rust,compile_fail
/// use serial_logger::{log_info, Logger, LoggerConfig};
///
/// struct Lcd;
///
/// let logger: Logger<Lcd> = Logger::new(Lcd, LoggerConfig::new());
/// log_info!(logger, "boot");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a log sink",
    label = "the logger needs a `ByteSink` to write to",
    note = "implement `serial_logger::sink::ByteSink` for your serial port, or enable the `std` feature to use `StdoutSink`"
)]
pub trait ByteSink {
    /// Start the transport.
    ///
    /// Called repeatedly by [`Logger::begin`](crate::Logger::begin) until it
    /// returns `true`.
    ///
    /// # Default Implementation
    ///
    /// Default implementation reports the sink as ready immediately.
    fn begin(&mut self, _baud_rate: u32) -> bool {
        true
    }

    /// Write bytes without a terminator.
    fn write(&mut self, bytes: &[u8]);

    /// Write bytes followed by [`LINE_TERMINATOR`].
    fn write_line(&mut self, bytes: &[u8]) {
        self.write(bytes);
        self.write(LINE_TERMINATOR.as_bytes());
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn begin(&mut self, baud_rate: u32) -> bool {
        (**self).begin(baud_rate)
    }

    fn write(&mut self, bytes: &[u8]) {
        (**self).write(bytes);
    }

    fn write_line(&mut self, bytes: &[u8]) {
        (**self).write_line(bytes);
    }
}

/// Collects output into a fixed-capacity byte vector, dropping what does not fit.
impl<const N: usize> ByteSink for heapless::Vec<u8, N> {
    fn write(&mut self, bytes: &[u8]) {
        let room = N - self.len();
        let _ = self.extend_from_slice(&bytes[..bytes.len().min(room)]);
    }
}
