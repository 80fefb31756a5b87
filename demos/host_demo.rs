//! Host demo: the serial logger printing to stdout.
//!
//! Run with: cargo run --example host_demo --features std
//! Raise the threshold at build time with:
//! SERIAL_LOGGER_LEVEL=WARN cargo run --example host_demo --features std

use std::sync::OnceLock;

use serial_logger::clock::StdClock;
use serial_logger::sink::StdoutSink;
use serial_logger::{
    log_begin, log_critical_ln, log_debug_ln, log_info, log_info_ln, log_warn_ln, logf_debug, logf_info,
    logf_p_warn, serial_log, LevelFilter, Logger, LoggerConfig,
};

type HostLogger = Logger<StdoutSink, StdClock>;

fn logger() -> &'static HostLogger {
    static LOGGER: OnceLock<HostLogger> = OnceLock::new();
    LOGGER.get_or_init(|| {
        Logger::with_clock(
            StdoutSink::new(),
            StdClock::new(),
            LoggerConfig::new().with_min_level(LevelFilter::Debug),
        )
    })
}

fn read_sensor(step: u32) -> f32 {
    20.0 + step as f32 * 0.75
}

fn main() {
    let logger = logger();
    log_begin!(logger);

    log_debug_ln!(logger, "starting sensor loop");
    for step in 0..5u32 {
        let temp = read_sensor(step);
        logf_debug!(logger, "step={} raw={}", step, temp);

        log_info!(logger, "temperature: ");
        log_info_ln!(logger, temp);

        if temp > 22.0 {
            logf_p_warn!(logger, "temperature {:.1} above threshold", temp);
        }
    }

    logf_info!(logger, "uptime check, {} records per step", 3);
    log_warn_ln!(logger, -1i32);
    serial_log!(logger, error, "simulated fault on channel {}", 2);
    log_critical_ln!(logger, "halting");
}
