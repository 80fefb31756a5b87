//! Standard output sink for host builds.

use std::io::Write;

use crate::sink::byte_sink::ByteSink;

/// Writes log output to the process's standard output.
///
/// Stdout is always ready, and write errors are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub const fn new() -> Self {
        Self
    }
}

impl ByteSink for StdoutSink {
    fn write(&mut self, bytes: &[u8]) {
        let _ = std::io::stdout().lock().write_all(bytes);
    }

    fn write_line(&mut self, bytes: &[u8]) {
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(bytes);
        let _ = out.write_all(crate::sink::LINE_TERMINATOR.as_bytes());
        let _ = out.flush();
    }
}
