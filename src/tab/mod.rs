//! Open-document tab management
//!
//! This module provides the core tab infrastructure including:
//! - `Tab`: One open document or virtual view with its content, dirty and view state
//! - `TabManager`: The ordered registry of tabs plus the active pointer
//! - `TabId`: Unique identifier for each tab
//! - `EditorViewState`: Opaque editor state capsule stored per tab

mod manager;
mod navigation;

pub use manager::{CycleDirection, TabManager, TabsSnapshot};

use crate::config::Config;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tab
pub type TabId = Uuid;

/// Editor-owned view state (selections, folds, cursor), stored verbatim.
///
/// The registry never looks inside; whatever the editor widget hands in is
/// what it gets back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorViewState(serde_json::Value);

impl EditorViewState {
    pub fn from_value(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for EditorViewState {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Derive a tab title from a path: the last segment after splitting on `/`
/// and `\`, or `untitled` when that segment is empty.
pub fn derive_title(path: &str, untitled: &str) -> String {
    match path.rsplit(['/', '\\']).next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => untitled.to_string(),
    }
}

/// Title for `path` under `config`: configured singleton titles win over
/// the derived path segment.
pub(crate) fn title_for(path: &str, config: &Config) -> String {
    config
        .singleton_title(path)
        .map(str::to_string)
        .unwrap_or_else(|| derive_title(path, &config.untitled_title))
}

/// A single open document or virtual view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier for this tab
    id: TabId,
    /// Logical location; empty for unsaved documents
    path: String,
    /// Title shown in the tab strip (derived from `path`)
    title: String,
    /// Last rendered form of the document
    content: String,
    /// Editable source
    raw_content: String,
    /// Last persisted source, baseline for `is_dirty`
    original_content: String,
    /// Cached `raw_content != original_content`
    is_dirty: bool,
    /// Edit mode vs. view mode
    is_editing: bool,
    /// Visited paths, oldest first
    history: Vec<String>,
    /// Cursor into `history`
    history_index: usize,
    scroll_top: f64,
    scroll_percentage: f64,
    anchor_line: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    editor_view_state: Option<EditorViewState>,
}

impl Tab {
    fn with_state(id: TabId, path: &str, content: &str, config: &Config) -> Self {
        Self {
            id,
            path: path.to_string(),
            title: title_for(path, config),
            content: content.to_string(),
            raw_content: content.to_string(),
            original_content: content.to_string(),
            is_dirty: false,
            is_editing: false,
            history: Vec::new(),
            history_index: 0,
            scroll_top: 0.0,
            scroll_percentage: 0.0,
            anchor_line: 0,
            editor_view_state: None,
        }
    }

    /// Tab for a document at `path`, seeded with one history entry
    pub(crate) fn from_path(id: TabId, path: &str, content: &str, config: &Config) -> Self {
        let mut tab = Self::with_state(id, path, content, config);
        tab.history = vec![path.to_string()];
        tab
    }

    /// Untitled document, starts in edit mode
    pub(crate) fn blank(id: TabId, config: &Config) -> Self {
        let mut tab = Self::from_path(id, "", "", config);
        tab.is_editing = true;
        tab
    }

    /// Singleton view; never navigated, so its history starts empty
    pub(crate) fn singleton(id: TabId, sentinel: &str, config: &Config) -> Self {
        Self::with_state(id, sentinel, "", config)
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    pub fn original_content(&self) -> &str {
        &self.original_content
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_index(&self) -> usize {
        self.history_index
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn scroll_percentage(&self) -> f64 {
        self.scroll_percentage
    }

    pub fn anchor_line(&self) -> u32 {
        self.anchor_line
    }

    pub fn editor_view_state(&self) -> Option<&EditorViewState> {
        self.editor_view_state.as_ref()
    }

    /// Whether this tab has never been saved to a path
    pub fn is_untitled(&self) -> bool {
        self.path.is_empty()
    }

    /// History entry under the cursor, `None` for an empty history
    pub fn current_history_entry(&self) -> Option<&str> {
        self.history.get(self.history_index).map(String::as_str)
    }

    pub(crate) fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }

    /// Returns true when the dirty flag flipped
    pub(crate) fn set_raw_content(&mut self, raw: &str) -> bool {
        let was_dirty = self.is_dirty;
        self.raw_content = raw.to_string();
        self.recompute_dirty();
        was_dirty != self.is_dirty
    }

    /// Record `raw` as both editable and persisted source.
    /// Returns true when the dirty flag flipped.
    pub(crate) fn commit_raw_content(&mut self, raw: &str) -> bool {
        let was_dirty = self.is_dirty;
        self.raw_content = raw.to_string();
        self.original_content = raw.to_string();
        self.is_dirty = false;
        was_dirty
    }

    pub(crate) fn recompute_dirty(&mut self) {
        self.is_dirty = self.raw_content != self.original_content;
    }

    pub(crate) fn set_scroll_top(&mut self, scroll_top: f64) {
        self.scroll_top = scroll_top;
    }

    pub(crate) fn set_scroll_percentage(&mut self, percentage: f64) {
        self.scroll_percentage = percentage;
    }

    pub(crate) fn set_anchor_line(&mut self, line: u32) {
        self.anchor_line = line;
    }

    pub(crate) fn set_editor_view_state(&mut self, state: Option<EditorViewState>) {
        self.editor_view_state = state;
    }

    /// Returns true when the mode actually changed
    pub(crate) fn set_editing(&mut self, editing: bool) -> bool {
        let changed = self.is_editing != editing;
        self.is_editing = editing;
        changed
    }

    /// Set `path` and recompute the title
    pub(crate) fn set_path(&mut self, path: &str, config: &Config) {
        self.path = path.to_string();
        self.title = title_for(path, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_title_splits_on_both_separators() {
        assert_eq!(derive_title("/home/me/notes/todo.md", "Untitled"), "todo.md");
        assert_eq!(derive_title(r"C:\Users\me\draft.txt", "Untitled"), "draft.txt");
        assert_eq!(derive_title(r"C:\mixed/dir\file.rs", "Untitled"), "file.rs");
        assert_eq!(derive_title("plain", "Untitled"), "plain");
    }

    #[test]
    fn derive_title_falls_back_for_empty_segment() {
        assert_eq!(derive_title("", "Untitled"), "Untitled");
        assert_eq!(derive_title("/var/log/", "Untitled"), "Untitled");
        assert_eq!(derive_title(r"dir\", "Nameless"), "Nameless");
    }

    #[test]
    fn title_for_prefers_singleton_title() {
        let config = Config::default();
        assert_eq!(title_for("HOME", &config), "Home");
        assert_eq!(title_for("docs/HOME", &config), "HOME");
    }

    #[test]
    fn blank_tab_starts_editing_with_one_history_entry() {
        let tab = Tab::blank(Uuid::new_v4(), &Config::default());
        assert!(tab.is_editing());
        assert!(tab.is_untitled());
        assert_eq!(tab.title(), "Untitled");
        assert_eq!(tab.history(), &[String::new()]);
        assert_eq!(tab.current_history_entry(), Some(""));
    }

    #[test]
    fn singleton_tab_has_empty_history() {
        let tab = Tab::singleton(Uuid::new_v4(), "HOME", &Config::default());
        assert!(tab.history().is_empty());
        assert_eq!(tab.current_history_entry(), None);
        assert!(!tab.is_editing());
    }

    #[test]
    fn raw_content_tracks_dirtiness_against_baseline() {
        let mut tab = Tab::from_path(Uuid::new_v4(), "a.md", "base", &Config::default());
        assert!(tab.set_raw_content("edited"));
        assert!(tab.is_dirty());
        // Typing back to the baseline clears the flag
        assert!(tab.set_raw_content("base"));
        assert!(!tab.is_dirty());
        assert!(!tab.set_raw_content("base"));
    }

    #[test]
    fn editor_view_state_roundtrips_verbatim() {
        let value = serde_json::json!({"cursor": {"line": 3, "column": 9}, "folds": [1, 7]});
        let state = EditorViewState::from(value.clone());
        assert_eq!(state.as_value(), &value);
        assert_eq!(state.into_value(), value);
    }
}
