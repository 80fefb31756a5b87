#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # serial-logger
//!
//! Leveled diagnostic output for microcontroller firmware.
//!
//! ## Features
//!
//! - Four severity levels with a compile-time floor and a per-logger minimum
//! - Calls below the threshold compile to nothing, arguments included
//! - `[LEVEL] [time: ms; ]file:line` prefix, captured at compile time
//! - Bounded formatting into a stack buffer with silent truncation
//! - Any transport through the [`ByteSink`] trait
//! - `no_std`, no allocation
//!
//! ## Example
//!
//! ```rust,no_run
//! use serial_logger::{log_begin, log_info, logf_debug, Logger, LoggerConfig, LevelFilter};
//! use serial_logger::sink::ByteSink;
//!
//! struct Uart;
//!
//! impl ByteSink for Uart {
//!     fn write(&mut self, bytes: &[u8]) {
//!         // hand bytes to the UART peripheral
//!     }
//! }
//!
//! static LOGGER: Logger<Uart> =
//!     Logger::new(Uart, LoggerConfig::new().with_min_level(LevelFilter::Debug));
//!
//! log_begin!(LOGGER);
//! log_info!(LOGGER, 21.5f32);
//! logf_debug!(LOGGER, "count={}", 42);
//! ```

pub mod clock;
pub mod configuration;
pub mod error;
pub mod format;
pub mod gate;
pub mod level;
pub mod logger;
pub mod record;
pub mod sink;
pub mod utility;

// Macro modules
#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

// Re-export commonly used types
#[doc(inline)]
pub use clock::{Clock, NoClock};
#[doc(inline)]
pub use configuration::{LoggerConfig, DEFAULT_MAX_MESSAGE_LEN};
#[doc(inline)]
pub use error::{LogError, Result};
#[doc(inline)]
pub use format::Payload;
#[doc(inline)]
pub use level::{Level, LevelFilter};
#[doc(inline)]
pub use logger::Logger;
#[doc(inline)]
pub use sink::ByteSink;
