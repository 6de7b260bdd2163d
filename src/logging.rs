#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        // stdout carries the board; keep diagnostics off it.
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Level used when `REVERSI_LOG` is unset or invalid.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Parse a level name such as `debug` or `off`, falling back to
/// [`DEFAULT_LOG_LEVEL`].
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Initialize logging with a level taken from the `REVERSI_LOG` environment variable.
pub fn init_logging() {
    let level = parse_level(env::var("REVERSI_LOG").ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
