//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `Config` fields and by `Config::default()`.

use crate::types::{LogLevel, SingletonView};

pub fn untitled_title() -> String {
    "Untitled".to_string()
}

pub fn singleton_views() -> Vec<SingletonView> {
    vec![SingletonView::new("HOME", "Home")]
}

/// Oldest entries are dropped past this many closed paths (0 = unbounded)
pub fn max_recently_closed() -> usize {
    50
}

pub fn log_level() -> LogLevel {
    LogLevel::Off
}
