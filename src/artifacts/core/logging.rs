//! Stderr logger behind the `log` facade
//!
//! The level comes from `K_LOG` (`error`, `warn`, `info`, `debug`, `trace`, `off`) and
//! defaults to `warn`, so a normal run prints nothing but the listing.

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

pub const LOG_LEVEL_ENV: &str = "K_LOG";

pub struct Logger {
    level: LevelFilter,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            eprintln!(
                "{} {} [{}] {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

pub fn init() -> Result<(), SetLoggerError> {
    let level = level_from(std::env::var(LOG_LEVEL_ENV).ok().as_deref());
    init_with(level)
}

pub fn init_with(level: LevelFilter) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // only the first call installs the logger, later calls keep its level
    let first_call = LOGGER.get().is_none();
    let logger = LOGGER.get_or_init(|| Logger { level });

    if first_call {
        log::set_logger(logger)?;
        log::set_max_level(level);
    }

    Ok(())
}
