//! Debug log bridge for doctabs hosts.
//!
//! The library only talks to the `log` facade. A host application calls
//! [`init_log_bridge`] once from its composition root to route those records
//! into a debug file, so editor UIs sharing stdout/stderr are not disturbed:
//!
//! - `/tmp/doctabs_debug.log` on Unix/macOS
//! - `%TEMP%\doctabs_debug.log` on Windows
//!
//! Level precedence: explicit level > `RUST_LOG` > `DEBUG_LEVEL` (0-4) > off.
//! When `RUST_LOG` is set, records are mirrored to stderr as well.

use crate::config::LogLevel;
use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Map the numeric `DEBUG_LEVEL` convention onto a log level
pub fn level_from_debug_level(value: &str) -> LogLevel {
    match value.trim().parse::<u8>() {
        Ok(1) => LogLevel::Error,
        Ok(2) => LogLevel::Info,
        Ok(3) => LogLevel::Debug,
        Ok(4) => LogLevel::Trace,
        _ => LogLevel::Off,
    }
}

/// Decide the effective level from the explicit level and the environment
pub fn resolve_level(
    explicit: Option<LogLevel>,
    rust_log: Option<&str>,
    debug_level: Option<&str>,
) -> LogLevel {
    if let Some(level) = explicit {
        return level;
    }
    if let Some(level) = rust_log.and_then(LogLevel::from_name) {
        return level;
    }
    debug_level.map(level_from_debug_level).unwrap_or_default()
}

/// Location of the debug log file
pub fn log_file_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp/doctabs_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("doctabs_debug.log")
    }
}

/// Format one log line: `[secs.micros] [LEVEL] [target] message`
fn format_line(timestamp: &str, level: log::Level, target: &str, msg: &str) -> String {
    format!("[{}] [{:<5}] [{}] {}\n", timestamp, level, target, msg)
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

struct DebugLogger {
    level: LevelFilter,
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl Log for DebugLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &get_timestamp(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );

        if let Some(file) = self.file.lock().as_mut() {
            // Losing a debug line is preferable to failing the caller
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

/// Install the debug logger as the process-wide `log` backend.
///
/// Returns the effective level. Calling it a second time leaves the first
/// logger in place.
pub fn init_log_bridge(level: Option<LogLevel>) -> LogLevel {
    let rust_log = std::env::var("RUST_LOG").ok();
    let debug_level = std::env::var("DEBUG_LEVEL").ok();
    let effective = resolve_level(level, rust_log.as_deref(), debug_level.as_deref());

    let file = if effective == LogLevel::Off {
        None
    } else {
        // Silently run without a file if it can't be opened
        OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_file_path())
            .ok()
    };

    let logger = DebugLogger {
        level: effective.to_level_filter(),
        file: Mutex::new(file),
        mirror_stderr: rust_log.is_some(),
    };

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(effective.to_level_filter());
        log::info!(
            "doctabs debug session started (level={})",
            effective.display_name()
        );
    }
    effective
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_level_numbers() {
        assert_eq!(level_from_debug_level("0"), LogLevel::Off);
        assert_eq!(level_from_debug_level("1"), LogLevel::Error);
        assert_eq!(level_from_debug_level(" 3 "), LogLevel::Debug);
        assert_eq!(level_from_debug_level("4"), LogLevel::Trace);
        assert_eq!(level_from_debug_level("loud"), LogLevel::Off);
    }

    #[test]
    fn explicit_level_wins() {
        let level = resolve_level(Some(LogLevel::Warn), Some("trace"), Some("4"));
        assert_eq!(level, LogLevel::Warn);
    }

    #[test]
    fn rust_log_beats_debug_level() {
        assert_eq!(resolve_level(None, Some("info"), Some("4")), LogLevel::Info);
        // Module filters are not understood, DEBUG_LEVEL applies
        assert_eq!(
            resolve_level(None, Some("doctabs=trace"), Some("3")),
            LogLevel::Debug
        );
    }

    #[test]
    fn nothing_set_means_off() {
        assert_eq!(resolve_level(None, None, None), LogLevel::Off);
    }

    #[test]
    fn bridge_installs_once_and_reports_level() {
        assert_eq!(init_log_bridge(Some(LogLevel::Off)), LogLevel::Off);
        // A second install keeps the first logger but still resolves the level
        assert_eq!(init_log_bridge(Some(LogLevel::Warn)), LogLevel::Warn);
        log::warn!("logged through the bridge");
    }

    #[test]
    fn line_format() {
        let line = format_line("12.000034", log::Level::Info, "doctabs::tab", "Opened tab");
        assert_eq!(line, "[12.000034] [INFO ] [doctabs::tab] Opened tab\n");
    }
}
