//! Mock sink implementation for testing.
//!
//! This module provides a mock implementation of `ByteSink` that records
//! every call so tests can check exactly what a logger emitted, in which
//! order and through which primitive.
//!
//! ## Example
//!
//! ```rust
//! use serial_logger::{logf_info, LevelFilter, Logger, LoggerConfig};
//! use serial_logger::sink::{MockSink, SinkEvent};
//!
//! let config = LoggerConfig::new().with_min_level(LevelFilter::Debug);
//! let logger: Logger<MockSink> = Logger::new(MockSink::new(), config);
//! logf_info!(logger, "x={}", 1);
//!
//! let sink = logger.into_sink();
//! if serial_logger::configuration::ENABLED {
//!     assert_eq!(sink.events().len(), 2);
//!     assert!(matches!(sink.events()[1], SinkEvent::WriteLine(_)));
//! } else {
//!     assert!(sink.events().is_empty());
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::sink::byte_sink::ByteSink;
use crate::sink::LINE_TERMINATOR;

/// One call received by a [`MockSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    /// `write(bytes)`
    Write(Vec<u8>),
    /// `write_line(bytes)`
    WriteLine(Vec<u8>),
}

impl SinkEvent {
    /// Bytes passed to the call, without the line terminator.
    pub fn bytes(&self) -> &[u8] {
        match self {
            SinkEvent::Write(bytes) | SinkEvent::WriteLine(bytes) => bytes,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, SinkEvent::WriteLine(_))
    }
}

/// Mock sink for testing loggers without hardware.
///
/// This mock sink allows you to:
/// - Inspect every `write` and `write_line` call in order
/// - Read back the byte stream as a terminal would show it
/// - Simulate a transport that only becomes ready after some `begin` calls,
///   or when another thread raises a readiness flag
#[derive(Debug, Clone)]
pub struct MockSink {
    /// Record of all calls in arrival order
    events: Vec<SinkEvent>,
    /// Number of `begin` calls received
    begin_calls: usize,
    /// Baud rate of the last `begin` call
    baud_rate: Option<u32>,
    /// `begin` calls that report "not ready" before the first success
    not_ready_polls: usize,
    /// External readiness signal, checked in addition to `not_ready_polls`
    ready: Arc<AtomicBool>,
}

impl MockSink {
    /// Create a mock sink that is ready on the first `begin`.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            begin_calls: 0,
            baud_rate: None,
            not_ready_polls: 0,
            ready: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Create a mock sink whose first `polls` calls to `begin` report "not ready".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_logger::sink::{ByteSink, MockSink};
    ///
    /// let mut sink = MockSink::ready_after(2);
    /// assert!(!sink.begin(9600));
    /// assert!(!sink.begin(9600));
    /// assert!(sink.begin(9600));
    /// ```
    pub fn ready_after(polls: usize) -> Self {
        Self {
            not_ready_polls: polls,
            ..Self::new()
        }
    }

    /// Create a mock sink that stays "not ready" until the returned flag is set.
    pub fn with_ready_signal() -> (Self, Arc<AtomicBool>) {
        let ready = Arc::new(AtomicBool::new(false));
        let sink = Self {
            ready: Arc::clone(&ready),
            ..Self::new()
        };
        (sink, ready)
    }

    /// All calls received so far.
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Number of `write` and `write_line` calls received.
    pub fn write_count(&self) -> usize {
        self.events.len()
    }

    /// The byte stream as it would appear on the wire.
    pub fn output(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for event in &self.events {
            out.extend_from_slice(event.bytes());
            if event.is_line() {
                out.extend_from_slice(LINE_TERMINATOR.as_bytes());
            }
        }
        out
    }

    /// [`output`](Self::output) as text.
    pub fn output_string(&self) -> String {
        String::from_utf8_lossy(&self.output()).into_owned()
    }

    pub fn begin_calls(&self) -> usize {
        self.begin_calls
    }

    /// Baud rate passed to the last `begin` call.
    pub fn baud_rate(&self) -> Option<u32> {
        self.baud_rate
    }

    /// Clear all recorded calls.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSink for MockSink {
    fn begin(&mut self, baud_rate: u32) -> bool {
        self.begin_calls += 1;
        self.baud_rate = Some(baud_rate);
        if self.not_ready_polls > 0 {
            self.not_ready_polls -= 1;
            return false;
        }
        self.ready.load(Ordering::Acquire)
    }

    fn write(&mut self, bytes: &[u8]) {
        self.events.push(SinkEvent::Write(bytes.to_vec()));
    }

    fn write_line(&mut self, bytes: &[u8]) {
        self.events.push(SinkEvent::WriteLine(bytes.to_vec()));
    }
}
