//! Core `Config` struct for the tab registry.

use crate::defaults;
use crate::types::{LogLevel, SingletonView};
use serde::{Deserialize, Serialize};

/// Registry configuration.
///
/// Every field is defaulted so partial YAML files load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Title used for tabs without a usable path segment
    #[serde(default = "defaults::untitled_title")]
    pub untitled_title: String,

    /// Reserved sentinel paths that may only be open once
    #[serde(default = "defaults::singleton_views")]
    pub singleton_views: Vec<SingletonView>,

    /// Capacity of the recently-closed log (0 = unbounded)
    #[serde(default = "defaults::max_recently_closed")]
    pub max_recently_closed: usize,

    /// Verbosity of the debug log file
    #[serde(default = "defaults::log_level")]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            untitled_title: defaults::untitled_title(),
            singleton_views: defaults::singleton_views(),
            max_recently_closed: defaults::max_recently_closed(),
            log_level: defaults::log_level(),
        }
    }
}

impl Config {
    /// Display title configured for a singleton sentinel, if any
    pub fn singleton_title(&self, path: &str) -> Option<&str> {
        self.singleton_views
            .iter()
            .find(|view| view.path == path)
            .map(|view| view.title.as_str())
    }

    /// Whether `path` is one of the configured singleton sentinels
    pub fn is_singleton(&self, path: &str) -> bool {
        self.singleton_views.iter().any(|view| view.path == path)
    }
}
