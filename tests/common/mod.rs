//! Shared integration test helpers for doctabs.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{manager_with_paths, observed_manager};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers is used per file.

#![allow(dead_code)]

use doctabs::config::Config;
use doctabs::{TabEventBuffer, TabId, TabManager};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Registry with one tab per path, opened in order. The last one is active.
pub fn manager_with_paths(paths: &[&str]) -> (TabManager, Vec<TabId>) {
    let mut mgr = TabManager::new();
    let ids = paths
        .iter()
        .map(|path| mgr.open_from_path(path, ""))
        .collect();
    (mgr, ids)
}

/// Empty registry with an unfiltered event buffer attached.
pub fn observed_manager() -> (TabManager, Arc<TabEventBuffer>) {
    let mut mgr = TabManager::new();
    let buffer = Arc::new(TabEventBuffer::default());
    mgr.add_observer(buffer.clone());
    (mgr, buffer)
}

/// Tab ids in display order.
pub fn display_order(mgr: &TabManager) -> Vec<TabId> {
    mgr.tabs().iter().map(|tab| tab.id()).collect()
}

/// Provides test isolation with automatic resource cleanup.
///
/// Wraps a `TempDir` and a config file path inside it; the directory is
/// removed when `TestContext` is dropped.
pub struct TestContext {
    /// Temporary directory, kept alive for the lifetime of the context.
    pub dir: TempDir,
    /// Config instance for the test.
    pub config: Config,
}

impl TestContext {
    /// Create a new `TestContext` with a fresh temp dir and default config.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            dir,
            config: Config::default(),
        }
    }

    /// `<tmp>/doctabs/config.yaml`
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("doctabs").join("config.yaml")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
