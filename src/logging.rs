#![cfg(feature = "std")]
//! Stderr logger for the binaries. Stdout stays free for game output and
//! the `sim` JSON summary.

use crate::config::LOG_ENV_VAR;
use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "[{:<5} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value` (`off`, `error` .. `trace`, any case), or `info`.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the logger at the level given by `TICTACTOE_LOG`.
///
/// Only the first call takes effect; later calls leave logger and level alone.
pub fn init_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        let configured = std::env::var(LOG_ENV_VAR).ok();
        log::set_max_level(level_from(configured.as_deref()));
    }
}
