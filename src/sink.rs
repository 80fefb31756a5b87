//! Byte sinks the logger writes to.
//!
//! The logger does not own a transport. It is generic over [`ByteSink`], which
//! an integrator implements for their serial port, USB CDC class or RTT
//! channel. Two implementations ship with the crate for hosts:
//!
//! - [`StdoutSink`](stdout_sink::StdoutSink) (feature `std`)
//! - [`MockSink`](mock_sink::MockSink) (feature `std`, and in tests)

pub mod byte_sink;
#[cfg(any(test, feature = "std"))]
pub mod mock_sink;
#[cfg(feature = "std")]
pub mod stdout_sink;

/// Line break appended by [`ByteSink::write_line`] and after the location in
/// every record prefix.
pub const LINE_TERMINATOR: &str = "\r\n";

#[doc(inline)]
pub use byte_sink::ByteSink;
#[cfg(any(test, feature = "std"))]
#[doc(inline)]
pub use mock_sink::{MockSink, SinkEvent};
#[cfg(feature = "std")]
#[doc(inline)]
pub use stdout_sink::StdoutSink;
