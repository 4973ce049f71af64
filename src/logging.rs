#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        // stdout carries the board; keep log lines off it.
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "TICTACTOE_LOG";

/// Level taken from `TICTACTOE_LOG`, falling back to `info` when the variable
/// is unset or unparsable.
pub fn level_from_env() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger. `level` overrides the environment when given.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level.unwrap_or_else(level_from_env);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
