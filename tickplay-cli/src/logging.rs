//! Console sink for the `log` facade.

use std::io::Write;
use std::sync::OnceLock;

use log::{LevelFilter, Log, Metadata, Record};

struct ConsoleLogger {
    level: LevelFilter,
    echo_stderr: bool,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}", record.level(), record.args());
        if self.echo_stderr {
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
        } else {
            let _ = writeln!(std::io::stdout().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Parse a `RUST_LOG`-style level name. Unknown values fall back to info.
pub fn parse_level(value: &str) -> LevelFilter {
    match value.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Install the console logger.
///
/// The level comes from `RUST_LOG` (default info) and is capped at warn when
/// `quiet` is set. Lines go to stdout unless `TICKPLAY_LOG_STDERR` is set to
/// anything but `0`.
pub fn init(quiet: bool) {
    let mut level = std::env::var("RUST_LOG")
        .map(|value| parse_level(&value))
        .unwrap_or(LevelFilter::Info);
    if quiet {
        level = level.min(LevelFilter::Warn);
    }

    let echo_stderr = std::env::var("TICKPLAY_LOG_STDERR")
        .map(|value| value != "0")
        .unwrap_or(false);

    let logger_ref = LOGGER.get_or_init(|| ConsoleLogger { level, echo_stderr });
    if log::set_logger(logger_ref).is_ok() {
        log::set_max_level(logger_ref.level);
    }
}
