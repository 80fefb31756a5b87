//! Per-call log records.
//!
//! A [`Record`] lives on the stack for the duration of one log call: the
//! prefix is rendered when it is created, the payload is appended, the two
//! segments are handed to the sink and the record is dropped.
//!
//! ## Layout
//!
//! ```text
//! [<LEVEL>] [time: <millis>; ]<file>:<line>\r\n\t<payload>
//! └──────────────── prefix ───────────────────┘└ payload ┘
//! ```
//!
//! Prefix and payload share one buffer of `N` bytes. A prefix that fills the
//! buffer leaves an empty payload; a payload that does not fit is truncated.

use core::fmt::{self, Write};

use crate::format::{MessageBuffer, Payload};
use crate::level::Level;
use crate::sink::LINE_TERMINATOR;

/// Source location and level of a log statement, fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    level: Level,
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub const fn new(level: Level, file: &'static str, line: u32) -> Self {
        Self { level, file, line }
    }

    /// Call site of the caller, for APIs marked `#[track_caller]`.
    #[track_caller]
    pub fn caller(level: Level) -> Self {
        let location = core::panic::Location::caller();
        Self::new(level, location.file(), location.line())
    }

    pub const fn level(&self) -> Level {
        self.level
    }

    pub const fn file(&self) -> &'static str {
        self.file
    }

    pub const fn line(&self) -> u32 {
        self.line
    }
}

/// A formatted log record.
#[derive(Debug)]
pub struct Record<'a, const N: usize> {
    level: Level,
    file: &'a str,
    line: u32,
    timestamp: Option<u64>,
    text: MessageBuffer<N>,
    prefix_len: usize,
}

impl<'a, const N: usize> Record<'a, N> {
    /// Start a record and render its prefix.
    pub fn new(level: Level, file: &'a str, line: u32, timestamp: Option<u64>) -> Self {
        let mut record = Self {
            level,
            file,
            line,
            timestamp,
            text: MessageBuffer::new(),
            prefix_len: 0,
        };
        // Overflow is recorded in the buffer, not reported
        let _ = record.write_prefix();
        record.prefix_len = record.text.len();
        record
    }

    /// Start a record for a compile-time call site.
    pub fn at(site: &CallSite, timestamp: Option<u64>) -> Record<'static, N> {
        Record::new(site.level(), site.file(), site.line(), timestamp)
    }

    fn write_prefix(&mut self) -> fmt::Result {
        write!(self.text, "[{}] ", self.level.tag())?;
        if let Some(millis) = self.timestamp {
            write!(self.text, "time: {millis}; ")?;
        }
        write!(self.text, "{}:{}{}\t", self.file, self.line, LINE_TERMINATOR)
    }

    /// Append a single value.
    pub fn push_value<P: Payload + ?Sized>(&mut self, value: &P) {
        let _ = value.render(&mut self.text);
    }

    /// Append formatted arguments.
    pub fn push_args(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.text.write_fmt(args);
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn file(&self) -> &str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn timestamp(&self) -> Option<u64> {
        self.timestamp
    }

    /// Prefix bytes: tag, optional timestamp, location.
    pub fn prefix(&self) -> &[u8] {
        &self.text.as_bytes()[..self.prefix_len]
    }

    /// Payload bytes rendered after the prefix.
    pub fn payload(&self) -> &[u8] {
        &self.text.as_bytes()[self.prefix_len..]
    }

    /// Whole rendered text.
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn is_truncated(&self) -> bool {
        self.text.is_truncated()
    }
}
