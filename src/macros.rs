//! Logging macros.
//!
//! Every macro takes the logger first. The logger expression can be a
//! `static`, a local or a reference to either.
//!
//! | Macro               | Payload                  | Terminator after payload |
//! |---------------------|--------------------------|--------------------------|
//! | `log_<level>!`      | one value ([`Payload`])  | no                       |
//! | `log_<level>_ln!`   | one value                | yes                      |
//! | `logf_<level>!`     | format string + args     | yes                      |
//! | `logf_p_<level>!`   | format string + args     | yes                      |
//!
//! with `<level>` one of `debug`, `info`, `warn`, `critical`.
//!
//! # Compile-time elision
//!
//! Each expansion defines `const` items for its call site and for the static
//! gate. When the static gate is closed (feature `logger` off or a
//! `max-level-*` feature above the level) the body is `if false { .. }` and
//! is removed, together with its format string. When the static gate is open,
//! the logger's configuration is checked before any argument is evaluated:
//!
//! ```rust
//! use serial_logger::{log_debug, Logger, LoggerConfig, LevelFilter};
//! use serial_logger::sink::ByteSink;
//!
//! struct Discard;
//! impl ByteSink for Discard { fn write(&mut self, _: &[u8]) {} }
//!
//! let logger: Logger<Discard> = Logger::new(Discard, LoggerConfig::new().with_min_level(LevelFilter::Info));
//! let mut calls = 0;
//! log_debug!(logger, { calls += 1; calls });
//! assert_eq!(calls, 0);
//! ```
//!
//! # Program memory templates
//!
//! `logf_p_<level>!` exist for call sites written for targets that keep
//! format templates in a separate read-only memory class. `format_args!`
//! templates are already `'static` data in flash on every Rust target, so
//! these behave exactly like `logf_<level>!`.
//!
//! [`Payload`]: crate::format::Payload

#[doc(hidden)]
#[macro_export]
macro_rules! __log_value {
    ($logger:expr, $level:ident, $method:ident, $value:expr) => {{
        const __ACTIVE: bool = $crate::gate::statically_enabled($crate::Level::$level);
        const __SITE: $crate::record::CallSite =
            $crate::record::CallSite::new($crate::Level::$level, ::core::file!(), ::core::line!());
        if __ACTIVE {
            let __logger = &$logger;
            if __logger.is_enabled($crate::Level::$level) {
                __logger.$method(&__SITE, &$value);
            }
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_args {
    ($logger:expr, $level:ident, $($arg:tt)+) => {{
        const __ACTIVE: bool = $crate::gate::statically_enabled($crate::Level::$level);
        const __SITE: $crate::record::CallSite =
            $crate::record::CallSite::new($crate::Level::$level, ::core::file!(), ::core::line!());
        if __ACTIVE {
            let __logger = &$logger;
            if __logger.is_enabled($crate::Level::$level) {
                __logger.log_fmt(&__SITE, ::core::format_args!($($arg)+));
            }
        }
    }};
}

/// Starts the sink and announces the resolved level.
///
/// Blocks until the sink reports ready. Expands to nothing when the `logger`
/// feature is off.
///
/// ```rust,no_run
/// # use serial_logger::{log_begin, Logger, LoggerConfig};
/// # use serial_logger::sink::ByteSink;
/// # struct Uart;
/// # impl ByteSink for Uart { fn write(&mut self, _: &[u8]) {} }
/// static LOGGER: Logger<Uart> = Logger::new(Uart, LoggerConfig::new());
///
/// log_begin!(LOGGER);
/// ```
#[macro_export]
macro_rules! log_begin {
    ($logger:expr $(,)?) => {{
        if $crate::configuration::ENABLED {
            $logger.begin();
        }
    }};
}

/// Logs one value at Debug level.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $value:expr $(,)?) => {
        $crate::__log_value!($logger, Debug, log, $value)
    };
}

/// Logs one value at Info level.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $value:expr $(,)?) => {
        $crate::__log_value!($logger, Info, log, $value)
    };
}

/// Logs one value at Warn level.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $value:expr $(,)?) => {
        $crate::__log_value!($logger, Warn, log, $value)
    };
}

/// Logs one value at Critical level.
#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $value:expr $(,)?) => {
        $crate::__log_value!($logger, Critical, log, $value)
    };
}

/// Logs one value at Debug level and ends the line.
#[macro_export]
macro_rules! log_debug_ln {
    ($logger:expr, $value:expr $(,)?) => {
        $crate::__log_value!($logger, Debug, log_ln, $value)
    };
}

/// Logs one value at Info level and ends the line.
#[macro_export]
macro_rules! log_info_ln {
    ($logger:expr, $value:expr $(,)?) => {
        $crate::__log_value!($logger, Info, log_ln, $value)
    };
}

/// Logs one value at Warn level and ends the line.
#[macro_export]
macro_rules! log_warn_ln {
    ($logger:expr, $value:expr $(,)?) => {
        $crate::__log_value!($logger, Warn, log_ln, $value)
    };
}

/// Logs one value at Critical level and ends the line.
#[macro_export]
macro_rules! log_critical_ln {
    ($logger:expr, $value:expr $(,)?) => {
        $crate::__log_value!($logger, Critical, log_ln, $value)
    };
}

/// Logs a formatted message at Debug level.
///
/// ```rust,no_run
/// # use serial_logger::{logf_debug, Logger, LoggerConfig};
/// # use serial_logger::sink::ByteSink;
/// # struct Uart;
/// # impl ByteSink for Uart { fn write(&mut self, _: &[u8]) {} }
/// # let logger: Logger<Uart> = Logger::new(Uart, LoggerConfig::new());
/// logf_debug!(logger, "count={}", 42);
/// ```
#[macro_export]
macro_rules! logf_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_args!($logger, Debug, $($arg)+)
    };
}

/// Logs a formatted message at Info level.
#[macro_export]
macro_rules! logf_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_args!($logger, Info, $($arg)+)
    };
}

/// Logs a formatted message at Warn level.
#[macro_export]
macro_rules! logf_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_args!($logger, Warn, $($arg)+)
    };
}

/// Logs a formatted message at Critical level.
#[macro_export]
macro_rules! logf_critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_args!($logger, Critical, $($arg)+)
    };
}

/// Logs a formatted message at Debug level, template in program memory.
#[macro_export]
macro_rules! logf_p_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_args!($logger, Debug, $($arg)+)
    };
}

/// Logs a formatted message at Info level, template in program memory.
#[macro_export]
macro_rules! logf_p_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_args!($logger, Info, $($arg)+)
    };
}

/// Logs a formatted message at Warn level, template in program memory.
#[macro_export]
macro_rules! logf_p_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_args!($logger, Warn, $($arg)+)
    };
}

/// Logs a formatted message at Critical level, template in program memory.
#[macro_export]
macro_rules! logf_p_critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_args!($logger, Critical, $($arg)+)
    };
}

#[cfg(all(test, feature = "logger"))]
mod tests {
    use crate::configuration::LoggerConfig;
    use crate::level::{Level, LevelFilter};
    use crate::logger::Logger;
    use crate::sink::{MockSink, SinkEvent};

    fn logger(min_level: LevelFilter) -> Logger<MockSink> {
        Logger::new(MockSink::new(), LoggerConfig::new().with_min_level(min_level))
    }

    /// Number of records (prefix writes) a sink received.
    fn records(sink: &MockSink) -> usize {
        sink.events().iter().filter(|e| e.bytes().starts_with(b"[")).count()
    }

    fn log_all_levels(logger: &Logger<MockSink>) {
        log_debug!(logger, "d");
        log_info!(logger, "i");
        log_warn!(logger, "w");
        log_critical!(logger, "c");
    }

    #[test]
    fn test_gate_per_min_level() {
        let cases = [
            (LevelFilter::Debug, 4),
            (LevelFilter::Info, 3),
            (LevelFilter::Warn, 2),
            (LevelFilter::Critical, 1),
            (LevelFilter::Off, 0),
        ];
        for (filter, expected) in cases {
            let logger = logger(filter);
            log_all_levels(&logger);
            let sink = logger.into_sink();
            assert_eq!(records(&sink), expected, "min level {filter}");
            assert_eq!(sink.write_count(), expected * 2);
        }
    }

    #[test]
    fn test_equal_level_is_emitted() {
        for level in Level::ALL {
            let logger = logger(level.to_filter());
            log_all_levels(&logger);
            let sink = logger.into_sink();
            let tag = format!("[{}] ", level.tag());
            assert!(sink.output_string().contains(&tag), "{level} missing");
        }
    }

    #[test]
    fn test_logf_debug_exact_bytes() {
        let logger = logger(LevelFilter::Debug);
        let line = line!() + 1;
        logf_debug!(logger, "count={}", 42);

        let sink = logger.into_sink();
        let prefix = format!("[DEBUG] {}:{}\r\n\t", file!(), line);
        assert_eq!(
            sink.events(),
            &[
                SinkEvent::Write(prefix.into_bytes()),
                SinkEvent::WriteLine(b"count=42".to_vec()),
            ]
        );
    }

    #[test]
    fn test_payload_types() {
        let logger = logger(LevelFilter::Debug);
        log_info!(logger, -5);
        log_info!(logger, -5i64);
        log_info!(logger, 5u32);
        log_info!(logger, 5u64);
        log_info!(logger, 3.5f32);
        log_info!(logger, 3.5f64);
        log_info!(logger, "text");

        let sink = logger.into_sink();
        let payloads: Vec<&[u8]> = sink.events().iter().skip(1).step_by(2).map(SinkEvent::bytes).collect();
        assert_eq!(
            payloads,
            [&b"-5"[..], b"-5", b"5", b"5", b"3.500000", b"3.500000", b"text"]
        );
    }

    #[test]
    fn test_ln_variants_end_the_line() {
        let logger = logger(LevelFilter::Debug);
        log_debug_ln!(logger, 1u8);
        log_info_ln!(logger, 2u8);
        log_warn_ln!(logger, 3u8);
        log_critical_ln!(logger, 4u8);

        let sink = logger.into_sink();
        assert_eq!(sink.write_count(), 8);
        for pair in sink.events().chunks(2) {
            assert!(!pair[0].is_line());
            assert!(pair[1].is_line());
        }
    }

    #[test]
    fn test_plain_variants_do_not_end_the_line() {
        let logger = logger(LevelFilter::Debug);
        log_warn!(logger, "a");
        log_warn!(logger, "b");

        let sink = logger.into_sink();
        assert!(sink.events().iter().all(|e| !e.is_line()));
    }

    #[test]
    fn test_logf_variants_end_the_line() {
        let logger = logger(LevelFilter::Debug);
        logf_debug!(logger, "{}", 1);
        logf_info!(logger, "{}", 2);
        logf_warn!(logger, "{}", 3);
        logf_critical!(logger, "{}", 4);
        logf_p_debug!(logger, "{}", 5);
        logf_p_info!(logger, "{}", 6);
        logf_p_warn!(logger, "{}", 7);
        logf_p_critical!(logger, "{}", 8);

        let sink = logger.into_sink();
        assert_eq!(sink.write_count(), 16);
        let payloads: Vec<&[u8]> = sink.events().iter().skip(1).step_by(2).map(SinkEvent::bytes).collect();
        assert_eq!(payloads, [&b"1"[..], b"2", b"3", b"4", b"5", b"6", b"7", b"8"]);
        assert!(sink.events().iter().skip(1).step_by(2).all(SinkEvent::is_line));
    }

    #[test]
    fn test_consecutive_calls_are_ordered() {
        let logger = logger(LevelFilter::Debug);
        logf_info!(logger, "first");
        logf_warn!(logger, "second");

        let sink = logger.into_sink();
        let events = sink.events();
        assert_eq!(events.len(), 4);
        assert!(events[0].bytes().starts_with(b"[INFO] "));
        assert_eq!(events[1], SinkEvent::WriteLine(b"first".to_vec()));
        assert!(events[2].bytes().starts_with(b"[WARN] "));
        assert_eq!(events[3], SinkEvent::WriteLine(b"second".to_vec()));
    }

    #[test]
    fn test_inactive_call_does_not_evaluate_arguments() {
        let logger = logger(LevelFilter::Warn);
        let mut evaluated = 0;

        log_debug!(logger, {
            evaluated += 1;
            evaluated
        });
        logf_info!(logger, "{}", {
            evaluated += 1;
            evaluated
        });
        log_info_ln!(logger, {
            evaluated += 1;
            "never"
        });
        assert_eq!(evaluated, 0);

        log_warn!(logger, {
            evaluated += 1;
            evaluated
        });
        assert_eq!(evaluated, 1);
        assert_eq!(logger.into_sink().write_count(), 2);
    }

    #[test]
    fn test_logger_expression_evaluated_once() {
        let logger = logger(LevelFilter::Debug);
        let mut lookups = 0;
        logf_info!(
            {
                lookups += 1;
                &logger
            },
            "x"
        );
        assert_eq!(lookups, 1);
    }

    #[test]
    fn test_log_begin_macro() {
        let logger: Logger<MockSink> = Logger::new(
            MockSink::ready_after(2),
            LoggerConfig::new().with_min_level(LevelFilter::Debug),
        );
        log_begin!(logger);

        let sink = logger.into_sink();
        assert_eq!(sink.begin_calls(), 3);
        assert_eq!(records(&sink), 1);
        assert!(sink.output_string().contains("level: DEBUG"));
    }

    #[test]
    fn test_truncation_through_macro() {
        let logger: Logger<MockSink, crate::clock::NoClock, 40> = Logger::from_parts(
            MockSink::new(),
            crate::clock::NoClock,
            LoggerConfig::new().with_min_level(LevelFilter::Debug),
        );
        logf_critical!(logger, "{:>100}", "right aligned");

        let sink = logger.into_sink();
        let written: usize = sink.events().iter().map(|e| e.bytes().len()).sum();
        assert_eq!(written, 40);
        assert_eq!(sink.write_count(), 2);
    }
}
