//! Minimal stderr backend for the `log` facade, used by the binary.
//!
//! The level comes from configuration; `TIPWRAP_LOG` (error, warn, info, debug,
//! trace, off) overrides it so a single run can be traced without touching config.

use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;

const LOG_ENV_VAR: &str = "TIPWRAP_LOG";

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Nothing sensible to do if stderr is gone.
        let _ = writeln!(
            std::io::stderr().lock(),
            "[{:<5} {}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Picks the effective level: the environment override wins over `configured`.
pub fn effective_level(configured: LevelFilter, env_value: Option<&str>) -> LevelFilter {
    env_value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(configured)
}

/// Installs the stderr logger. Calling it twice keeps the first logger.
pub fn init_logging(configured: LevelFilter) {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let level = effective_level(configured, env_value.as_deref());
    let logger: &'static StderrLogger = Box::leak(Box::new(StderrLogger { level }));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_level() {
        assert_eq!(effective_level(LevelFilter::Warn, None), LevelFilter::Warn);
        assert_eq!(effective_level(LevelFilter::Warn, Some("trace")), LevelFilter::Trace);
        assert_eq!(effective_level(LevelFilter::Warn, Some(" OFF ")), LevelFilter::Off);
        assert_eq!(effective_level(LevelFilter::Info, Some("chatty")), LevelFilter::Info);
    }

    #[test]
    fn test_logger_respects_level() {
        let logger = StderrLogger {
            level: LevelFilter::Info,
        };
        let debug = Metadata::builder().level(log::Level::Debug).build();
        let warn = Metadata::builder().level(log::Level::Warn).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));
    }
}
