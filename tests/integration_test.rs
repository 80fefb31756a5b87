//! Integration tests for serial-logger
//!
//! These tests drive the public macros the way firmware does: a `static`
//! logger bound to an integrator-defined sink.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test integration_test
//! ```
//!
//! The build with logging compiled out is covered by `compiled_out.rs`.

#![cfg(feature = "logger")]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use serial_logger::clock::FnClock;
use serial_logger::sink::ByteSink;
use serial_logger::{
    log_begin, log_critical, log_debug, log_info_ln, logf_debug, logf_info, logf_p_warn, LevelFilter, Logger,
    LoggerConfig,
};

/// Sink shared with the test through an `Arc`, as a UART driver would be
/// shared with an interrupt handler.
#[derive(Clone, Default)]
struct SharedSink {
    writes: Arc<Mutex<Vec<(bool, Vec<u8>)>>>,
    ready: Arc<AtomicBool>,
    polls: Arc<AtomicUsize>,
}

impl SharedSink {
    fn ready() -> Self {
        let sink = Self::default();
        sink.ready.store(true, Ordering::SeqCst);
        sink
    }

    fn writes(&self) -> Vec<(bool, Vec<u8>)> {
        self.writes.lock().unwrap().clone()
    }

    fn text(&self) -> String {
        let mut out = String::new();
        for (line, bytes) in self.writes() {
            out.push_str(&String::from_utf8(bytes).unwrap());
            if line {
                out.push_str("\r\n");
            }
        }
        out
    }
}

impl ByteSink for SharedSink {
    fn begin(&mut self, _baud_rate: u32) -> bool {
        self.polls.fetch_add(1, Ordering::SeqCst);
        self.ready.load(Ordering::SeqCst)
    }

    fn write(&mut self, bytes: &[u8]) {
        self.writes.lock().unwrap().push((false, bytes.to_vec()));
    }

    fn write_line(&mut self, bytes: &[u8]) {
        self.writes.lock().unwrap().push((true, bytes.to_vec()));
    }
}

fn debug_config() -> LoggerConfig {
    LoggerConfig::new().with_min_level(LevelFilter::Debug)
}

#[test]
fn test_logf_debug_literal_scenario() {
    let sink = SharedSink::ready();
    let logger: Logger<SharedSink> = Logger::new(sink.clone(), debug_config());

    let line = line!() + 1;
    logf_debug!(logger, "count={}", 42);

    let writes = sink.writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0], (false, format!("[DEBUG] {}:{}\r\n\t", file!(), line).into_bytes()));
    assert_eq!(writes[1], (true, b"count=42".to_vec()));
}

#[test]
fn test_begin_blocks_until_sink_ready() {
    let sink = SharedSink::default();
    let config = LoggerConfig::new().with_min_level(LevelFilter::Info);
    let logger: Arc<Logger<SharedSink>> = Arc::new(Logger::new(sink.clone(), config));

    let worker = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || log_begin!(logger))
    };

    // Give the worker time to spin on the not-ready sink
    while sink.polls.load(Ordering::SeqCst) < 10 {
        thread::yield_now();
    }
    thread::sleep(Duration::from_millis(20));
    assert!(!worker.is_finished());
    assert!(sink.writes().is_empty());

    sink.ready.store(true, Ordering::SeqCst);
    worker.join().unwrap();

    let writes = sink.writes();
    assert_eq!(writes.len(), 2, "exactly one Info record after begin");
    assert!(writes[0].1.starts_with(b"[INFO] "));
    assert_eq!(writes[1], (true, b"logger ready, level: INFO".to_vec()));
}

#[test]
fn test_static_logger_with_timestamps() {
    static SINK: Mutex<Vec<u8>> = Mutex::new(Vec::new());

    struct StaticSink;

    impl ByteSink for StaticSink {
        fn write(&mut self, bytes: &[u8]) {
            SINK.lock().unwrap().extend_from_slice(bytes);
        }
    }

    fn uptime() -> u64 {
        777
    }

    static LOGGER: Logger<StaticSink, FnClock<fn() -> u64>> = Logger::with_clock(
        StaticSink,
        FnClock::new(uptime as fn() -> u64),
        LoggerConfig::new().with_min_level(LevelFilter::Info),
    );

    log_critical!(LOGGER, "overheat");
    log_debug!(LOGGER, "filtered below INFO");

    let out = String::from_utf8(SINK.lock().unwrap().clone()).unwrap();
    assert!(out.starts_with("[CRITICAL] time: 777; "));
    assert!(out.ends_with("\r\n\toverheat"));
    assert!(!out.contains("filtered"));
}

#[test]
fn test_concurrent_records_do_not_interleave() {
    let sink = SharedSink::ready();
    let logger: Logger<SharedSink> = Logger::new(sink.clone(), debug_config());

    thread::scope(|scope| {
        for worker in 0..4 {
            let logger = &logger;
            scope.spawn(move || {
                for i in 0..50 {
                    logf_info!(logger, "worker {} message {}", worker, i);
                }
            });
        }
    });

    let writes = sink.writes();
    assert_eq!(writes.len(), 4 * 50 * 2);
    for pair in writes.chunks(2) {
        assert!(pair[0].1.starts_with(b"[INFO] "), "prefix must come first");
        assert!(!pair[0].0);
        assert!(pair[1].0, "payload must end the line");
        assert!(pair[1].1.starts_with(b"worker "));
    }
}

#[test]
fn test_silent_truncation_keeps_the_record() {
    let sink = SharedSink::ready();
    let logger: Logger<SharedSink, serial_logger::NoClock, 48> =
        Logger::from_parts(sink.clone(), serial_logger::NoClock, debug_config());

    let long = "x".repeat(500);
    log_info_ln!(logger, long.as_str());

    let writes = sink.writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0].1.len() + writes[1].1.len(), 48);
    assert!(writes[1].1.iter().all(|&b| b == b'x'));
    assert!(writes[1].0);
}

#[test]
fn test_off_and_debug_filters() {
    for (filter, expected_records) in [(LevelFilter::Off, 0), (LevelFilter::Debug, 4)] {
        let sink = SharedSink::ready();
        let logger: Logger<SharedSink> = Logger::new(sink.clone(), LoggerConfig::new().with_min_level(filter));

        log_debug!(logger, 1);
        logf_info!(logger, "{}", 2);
        logf_p_warn!(logger, "{}", 3);
        log_critical!(logger, 4u64);

        assert_eq!(sink.writes().len(), expected_records * 2, "filter {filter}");
    }
}

#[test]
fn test_text_layout() {
    let sink = SharedSink::ready();
    let logger: Logger<SharedSink> = Logger::new(sink.clone(), debug_config());

    log_info_ln!(logger, -42i32);
    log_info_ln!(logger, 42u32);
    log_info_ln!(logger, 0.125f64);

    let text = sink.text();
    let payloads: Vec<&str> = text.lines().filter(|l| l.starts_with('\t')).collect();
    assert_eq!(payloads, ["\t-42", "\t42", "\t0.125000"]);
}
