//! Small value types referenced by `Config` fields.

use serde::{Deserialize, Serialize};

/// A reserved sentinel path of which at most one tab may exist at a time.
///
/// Opening a singleton that is already open only activates the existing tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingletonView {
    /// Sentinel path, e.g. `HOME`
    pub path: String,
    /// Title shown in the tab strip
    pub title: String,
}

impl SingletonView {
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
        }
    }
}

/// Log level for debug logging to file.
///
/// Controls the verbosity of log output written to the debug log file.
/// The `RUST_LOG` environment variable takes precedence when no explicit
/// level is handed to the log bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging (log file not created)
    #[default]
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LogLevel::Off => "Off",
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// All available levels for UI iteration
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// Parse a level name as accepted by `RUST_LOG` (case-insensitive).
    ///
    /// Only bare level names are understood; module filters such as
    /// `doctabs=debug` yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "off" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_from_name_is_case_insensitive() {
        assert_eq!(LogLevel::from_name("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_name(" warning "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_name("doctabs=trace"), None);
    }

    #[test]
    fn log_level_serializes_lowercase() {
        let yaml = serde_yaml_ng::to_string(&LogLevel::Trace).unwrap();
        assert_eq!(yaml.trim(), "trace");
    }

    #[test]
    fn every_level_maps_to_a_filter() {
        for level in LogLevel::all() {
            let filter = level.to_level_filter();
            assert_eq!(filter == log::LevelFilter::Off, *level == LogLevel::Off);
        }
    }
}
