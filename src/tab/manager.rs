//! Tab registry: the ordered set of open documents and the active pointer
//!
//! Every mutator looks its target up by id first. A stale id (the tab was
//! already closed by another event) is a silent no-op, logged at debug level.

use super::{EditorViewState, Tab, TabId, title_for};
use crate::config::Config;
use crate::observer::{ObserverId, TabEvent, TabObserver};
use std::collections::VecDeque;
use std::sync::Arc;
use uuid::Uuid;

/// Direction for [`TabManager::cycle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Next,
    Prev,
}

/// Read-only copy of the registry for rendering layers
#[derive(Debug, Clone, PartialEq)]
pub struct TabsSnapshot {
    /// Tabs in display order
    pub tabs: Vec<Tab>,
    pub active_tab_id: Option<TabId>,
    /// Registry generation the snapshot was taken at
    pub generation: u64,
}

impl TabsSnapshot {
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .and_then(|id| self.tabs.iter().find(|t| t.id == id))
    }
}

/// Manages the open documents of one editor session
pub struct TabManager {
    /// All tabs, in display order
    tabs: Vec<Tab>,
    /// Currently active tab ID (may dangle after `set_active` with an unknown id)
    active_tab_id: Option<TabId>,
    /// Paths of closed tabs, most recent at the back
    recently_closed: VecDeque<String>,
    config: Config,
    /// Bumped on every state change
    generation: u64,
    observers: Vec<(ObserverId, Arc<dyn TabObserver>)>,
    next_observer_id: ObserverId,
}

impl TabManager {
    /// Create a new empty tab manager with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new empty tab manager
    pub fn with_config(config: Config) -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
            recently_closed: VecDeque::new(),
            config,
            generation: 0,
            observers: Vec::new(),
            next_observer_id: 1,
        }
    }

    /// Rebuild a manager from already-validated parts (session restore)
    pub(crate) fn from_parts(
        config: Config,
        tabs: Vec<Tab>,
        active_tab_id: Option<TabId>,
        recently_closed: Vec<String>,
    ) -> Self {
        let mut mgr = Self::with_config(config);
        mgr.tabs = tabs;
        mgr.active_tab_id = active_tab_id;
        for path in recently_closed {
            mgr.remember_closed(path);
        }
        mgr
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ------------------------------------------------------------------
    // Creation
    // ------------------------------------------------------------------

    /// Open a document at `path`. Never deduplicates by path.
    pub fn open_from_path(&mut self, path: &str, content: &str) -> TabId {
        let id = Uuid::new_v4();
        let tab = Tab::from_path(id, path, content, &self.config);
        self.push_and_activate(tab);
        log::info!(
            "Opened tab {} for {:?} (total: {})",
            id,
            path,
            self.tabs.len()
        );
        id
    }

    /// Open an untitled document in edit mode
    pub fn open_blank(&mut self) -> TabId {
        let id = Uuid::new_v4();
        let tab = Tab::blank(id, &self.config);
        self.push_and_activate(tab);
        log::info!("Opened untitled tab {} (total: {})", id, self.tabs.len());
        id
    }

    /// Open the singleton view for `sentinel`, or activate it if already open
    pub fn open_singleton(&mut self, sentinel: &str) -> TabId {
        if let Some(existing) = self.find_by_path(sentinel).map(Tab::id) {
            log::debug!("Singleton {:?} already open as tab {}", sentinel, existing);
            self.set_active(existing);
            return existing;
        }

        let id = Uuid::new_v4();
        let tab = Tab::singleton(id, sentinel, &self.config);
        self.push_and_activate(tab);
        log::info!(
            "Opened singleton tab {} for {:?} (total: {})",
            id,
            sentinel,
            self.tabs.len()
        );
        id
    }

    /// Reopen the most recently closed path in a fresh, empty tab.
    ///
    /// The caller is expected to load the content afterwards. Singleton
    /// views go through [`open_singleton`](Self::open_singleton), so a
    /// view that is already open again is only activated.
    pub fn reopen_closed(&mut self) -> Option<TabId> {
        let path = self.pop_recently_closed()?;
        if self.config.is_singleton(&path) {
            return Some(self.open_singleton(&path));
        }
        Some(self.open_from_path(&path, ""))
    }

    fn push_and_activate(&mut self, tab: Tab) {
        let id = tab.id;
        let path = tab.path.clone();
        self.tabs.push(tab);
        self.emit(TabEvent::Opened { id, path });
        self.active_tab_id = Some(id);
        self.emit(TabEvent::Activated { id: Some(id) });
    }

    // ------------------------------------------------------------------
    // Activation & ordering
    // ------------------------------------------------------------------

    /// Make `id` the active tab.
    ///
    /// The id is stored even if no such tab exists; `active_tab` then
    /// yields `None` until a known id is activated.
    pub fn set_active(&mut self, id: TabId) {
        if self.active_tab_id == Some(id) {
            return;
        }
        if !self.tabs.iter().any(|t| t.id == id) {
            log::warn!("Activating unknown tab {}", id);
        } else {
            log::debug!("Switched to tab {}", id);
        }
        self.active_tab_id = Some(id);
        self.emit(TabEvent::Activated { id: Some(id) });
    }

    /// Switch to tab by index (1-based for Cmd+1-9)
    pub fn switch_to_index(&mut self, index: usize) {
        if index > 0 && index <= self.tabs.len() {
            let id = self.tabs[index - 1].id;
            self.set_active(id);
        }
    }

    /// Move the tab at `from` to `to` (used by drag-and-drop reordering).
    ///
    /// `to` is clamped to the last index. Returns true if a tab actually moved.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tabs.len() {
            log::debug!(
                "Ignoring reorder from index {} (only {} tabs)",
                from,
                self.tabs.len()
            );
            return false;
        }

        let clamped_target = to.min(self.tabs.len() - 1);
        if clamped_target == from {
            return false;
        }

        let tab = self.tabs.remove(from);
        self.tabs.insert(clamped_target, tab);
        log::debug!("Moved tab from index {} to {}", from, clamped_target);
        self.emit(TabEvent::Reordered {
            from,
            to: clamped_target,
        });
        true
    }

    /// Move a tab one slot left or right, wrapping at the ends
    pub fn move_tab(&mut self, id: TabId, direction: CycleDirection) {
        let Some(current_idx) = self.tabs.iter().position(|t| t.id == id) else {
            return;
        };
        let len = self.tabs.len();
        let new_idx = match direction {
            CycleDirection::Next => (current_idx + 1) % len,
            CycleDirection::Prev => (current_idx + len - 1) % len,
        };
        self.reorder(current_idx, new_idx);
    }

    /// Activate the neighbour of the active tab, wrapping around.
    ///
    /// No-op with fewer than two tabs or when the active id is not in the
    /// collection.
    pub fn cycle(&mut self, direction: CycleDirection) {
        if self.tabs.len() < 2 {
            return;
        }
        let Some(current_idx) = self.active_tab_index() else {
            return;
        };

        let len = self.tabs.len();
        let next_idx = match direction {
            CycleDirection::Next => (current_idx + 1) % len,
            CycleDirection::Prev => (current_idx + len - 1) % len,
        };
        let next_id = self.tabs[next_idx].id;
        self.set_active(next_id);
    }

    /// Switch to the next tab (wraps around)
    pub fn next_tab(&mut self) {
        self.cycle(CycleDirection::Next);
    }

    /// Switch to the previous tab (wraps around)
    pub fn prev_tab(&mut self) {
        self.cycle(CycleDirection::Prev);
    }

    // ------------------------------------------------------------------
    // Closing
    // ------------------------------------------------------------------

    /// Close a tab by ID
    /// Returns true if no tabs remain afterwards
    pub fn close_tab(&mut self, id: TabId) -> bool {
        let Some(idx) = self.tabs.iter().position(|t| t.id == id) else {
            log::debug!("close_tab: tab {} not found", id);
            return self.tabs.is_empty();
        };

        log::info!("Closing tab {} (index {})", id, idx);
        let tab = self.tabs.remove(idx);

        if !tab.path.is_empty() {
            self.remember_closed(tab.path.clone());
        }
        self.emit(TabEvent::Closed { id, path: tab.path });

        // If we closed the active tab, switch to another
        if self.active_tab_id == Some(id) {
            self.active_tab_id = if self.tabs.is_empty() {
                None
            } else {
                // Prefer the tab at the same index (or previous if at end)
                let new_idx = idx.min(self.tabs.len() - 1);
                Some(self.tabs[new_idx].id)
            };
            self.emit(TabEvent::Activated {
                id: self.active_tab_id,
            });
        }

        self.tabs.is_empty()
    }

    /// Close every tab. The recently-closed log is left untouched.
    pub fn close_all(&mut self) {
        let count = self.tabs.len();
        let had_active = self.active_tab_id.is_some();
        self.tabs.clear();
        self.active_tab_id = None;
        log::info!("Closed all tabs ({})", count);

        if count > 0 {
            self.emit(TabEvent::AllClosed { count });
        }
        if had_active {
            self.emit(TabEvent::Activated { id: None });
        }
    }

    /// Remove and return the most recently closed path
    pub fn pop_recently_closed(&mut self) -> Option<String> {
        self.recently_closed.pop_back()
    }

    /// Recently closed paths, oldest first
    pub fn recently_closed(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.recently_closed.iter().map(String::as_str)
    }

    fn remember_closed(&mut self, path: String) {
        self.recently_closed.push_back(path);
        let limit = self.config.max_recently_closed;
        while limit > 0 && self.recently_closed.len() > limit {
            self.recently_closed.pop_front();
        }
    }

    // ------------------------------------------------------------------
    // Content & view state
    // ------------------------------------------------------------------

    /// Store the rendered form. Does not affect dirtiness.
    pub fn set_content(&mut self, id: TabId, content: &str) {
        let Some(idx) = self.position(id, "set_content") else {
            return;
        };
        self.tabs[idx].set_content(content);
        self.emit(TabEvent::ContentChanged { id });
    }

    /// Store the editable source and recompute dirtiness
    pub fn set_raw_content(&mut self, id: TabId, raw: &str) {
        let Some(idx) = self.position(id, "set_raw_content") else {
            return;
        };
        let tab = &mut self.tabs[idx];
        let flipped = tab.set_raw_content(raw);
        let is_dirty = tab.is_dirty;

        self.emit(TabEvent::ContentChanged { id });
        if flipped {
            self.emit(TabEvent::DirtyChanged { id, is_dirty });
        }
    }

    /// Record a successful save: `raw` becomes the persisted baseline
    pub fn commit_raw_content(&mut self, id: TabId, raw: &str) {
        let Some(idx) = self.position(id, "commit_raw_content") else {
            return;
        };
        let flipped = self.tabs[idx].commit_raw_content(raw);

        self.emit(TabEvent::ContentChanged { id });
        if flipped {
            self.emit(TabEvent::DirtyChanged {
                id,
                is_dirty: false,
            });
        }
    }

    pub fn set_scroll_top(&mut self, id: TabId, scroll_top: f64) {
        if let Some(idx) = self.position(id, "set_scroll_top") {
            self.tabs[idx].set_scroll_top(scroll_top);
            self.emit(TabEvent::ViewStateChanged { id });
        }
    }

    pub fn set_scroll_percentage(&mut self, id: TabId, percentage: f64) {
        if let Some(idx) = self.position(id, "set_scroll_percentage") {
            self.tabs[idx].set_scroll_percentage(percentage);
            self.emit(TabEvent::ViewStateChanged { id });
        }
    }

    pub fn set_anchor_line(&mut self, id: TabId, line: u32) {
        if let Some(idx) = self.position(id, "set_anchor_line") {
            self.tabs[idx].set_anchor_line(line);
            self.emit(TabEvent::ViewStateChanged { id });
        }
    }

    pub fn set_editor_view_state(&mut self, id: TabId, state: Option<EditorViewState>) {
        if let Some(idx) = self.position(id, "set_editor_view_state") {
            self.tabs[idx].set_editor_view_state(state);
            self.emit(TabEvent::ViewStateChanged { id });
        }
    }

    /// Switch a tab between edit and view mode
    pub fn set_editing(&mut self, id: TabId, editing: bool) {
        let Some(idx) = self.position(id, "set_editing") else {
            return;
        };
        if self.tabs[idx].set_editing(editing) {
            self.emit(TabEvent::EditingChanged {
                id,
                is_editing: editing,
            });
        }
    }

    // ------------------------------------------------------------------
    // Path changes
    // ------------------------------------------------------------------

    /// Give a tab its first real path (save-as of an untitled document).
    ///
    /// The current history entry is replaced rather than a new step added;
    /// an empty history is seeded with `path`.
    pub fn assign_path(&mut self, id: TabId, path: &str) {
        let Some(idx) = self.position(id, "assign_path") else {
            return;
        };
        if let Some(holder) = self.singleton_holder(path, id) {
            log::warn!(
                "assign_path: {:?} is already open in tab {}, ignoring for tab {}",
                path,
                holder,
                id
            );
            return;
        }
        let tab = &mut self.tabs[idx];
        let was_dirty = tab.is_dirty;
        tab.set_path(path, &self.config);
        tab.is_dirty = false;
        tab.replace_current_entry(path, true);

        log::debug!("Assigned path {:?} to tab {}", path, id);
        self.emit(TabEvent::PathChanged {
            id,
            path: path.to_string(),
        });
        if was_dirty {
            self.emit(TabEvent::DirtyChanged {
                id,
                is_dirty: false,
            });
        }
    }

    /// Point a tab at a renamed file. Dirtiness is left as is.
    pub fn rename_tab(&mut self, id: TabId, new_path: &str) {
        let Some(idx) = self.position(id, "rename_tab") else {
            return;
        };
        if let Some(holder) = self.singleton_holder(new_path, id) {
            log::warn!(
                "rename_tab: {:?} is already open in tab {}, ignoring for tab {}",
                new_path,
                holder,
                id
            );
            return;
        }
        let tab = &mut self.tabs[idx];
        tab.set_path(new_path, &self.config);
        tab.replace_current_entry(new_path, false);

        log::debug!("Renamed tab {} to {:?}", id, new_path);
        self.emit(TabEvent::PathChanged {
            id,
            path: new_path.to_string(),
        });
    }

    // ------------------------------------------------------------------
    // Navigation history
    // ------------------------------------------------------------------

    /// Take a fresh navigation step to `path` inside the tab.
    ///
    /// Discards forward history, dirtiness and scroll position. Navigating
    /// to the current path does nothing. Navigating to a singleton view
    /// that another tab already shows activates that tab instead.
    pub fn navigate(&mut self, id: TabId, path: &str) {
        let Some(idx) = self.position(id, "navigate") else {
            return;
        };
        if let Some(holder) = self.singleton_holder(path, id) {
            log::debug!("Tab {} navigating to open singleton {:?}, activating {}", id, path, holder);
            self.set_active(holder);
            return;
        }
        let tab = &mut self.tabs[idx];
        if !tab.navigate_to(path, &self.config) {
            return;
        }
        let history_index = tab.history_index;

        log::debug!(
            "Tab {} navigated to {:?} (history {}/{})",
            id,
            path,
            history_index + 1,
            self.tabs[idx].history.len()
        );
        self.emit(TabEvent::Navigated {
            id,
            path: path.to_string(),
            history_index,
        });
    }

    pub fn can_go_back(&self, id: TabId) -> bool {
        self.get_tab(id).is_some_and(Tab::can_go_back)
    }

    pub fn can_go_forward(&self, id: TabId) -> bool {
        self.get_tab(id).is_some_and(Tab::can_go_forward)
    }

    /// Step back in the tab's history, returning the path now shown
    pub fn go_back(&mut self, id: TabId) -> Option<String> {
        let idx = self.position(id, "go_back")?;
        let path = self.tabs[idx].step_back(&self.config)?;
        self.after_history_step(idx, &path);
        Some(path)
    }

    /// Step forward in the tab's history, returning the path now shown
    pub fn go_forward(&mut self, id: TabId) -> Option<String> {
        let idx = self.position(id, "go_forward")?;
        let path = self.tabs[idx].step_forward(&self.config)?;
        self.after_history_step(idx, &path);
        Some(path)
    }

    fn after_history_step(&mut self, idx: usize, path: &str) {
        let id = self.tabs[idx].id;
        let history_index = self.tabs[idx].history_index;
        log::debug!("Tab {} moved to history entry {} ({:?})", id, history_index, path);
        self.emit(TabEvent::Navigated {
            id,
            path: path.to_string(),
            history_index,
        });
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Get a reference to the active tab
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id.and_then(|id| self.get_tab(id))
    }

    /// Get the active tab ID (possibly dangling, see `set_active`)
    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active_tab_id
    }

    /// Get index of active tab (0-based)
    pub fn active_tab_index(&self) -> Option<usize> {
        self.active_tab_id
            .and_then(|id| self.tabs.iter().position(|t| t.id == id))
    }

    /// Get all tabs in display order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Get a tab by ID
    pub fn get_tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// First tab (in display order) whose path equals `path`
    pub fn find_by_path(&self, path: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.path == path)
    }

    /// Get the number of tabs
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Check if there are multiple tabs
    pub fn has_multiple_tabs(&self) -> bool {
        self.tabs.len() > 1
    }

    /// Tabs with unsaved edits, in display order
    pub fn dirty_tabs(&self) -> impl Iterator<Item = &Tab> + '_ {
        self.tabs.iter().filter(|t| t.is_dirty)
    }

    /// Whether closing everything now would lose edits
    pub fn has_dirty_tabs(&self) -> bool {
        self.tabs.iter().any(|t| t.is_dirty)
    }

    /// Counter bumped on every state change; cheap to poll
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Clone the current state for a rendering layer
    pub fn snapshot(&self) -> TabsSnapshot {
        TabsSnapshot {
            tabs: self.tabs.clone(),
            active_tab_id: self.active_tab_id,
            generation: self.generation,
        }
    }

    /// Recompute the title of every tab, e.g. after the untitled title or
    /// singleton titles changed
    pub fn update_all_titles(&mut self) {
        for tab in &mut self.tabs {
            tab.title = title_for(&tab.path, &self.config);
        }
    }

    /// Replace the configuration and retitle tabs to match
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
        self.update_all_titles();
        let limit = self.config.max_recently_closed;
        while limit > 0 && self.recently_closed.len() > limit {
            self.recently_closed.pop_front();
        }
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Register an observer; it is called after every state change
    pub fn add_observer(&mut self, observer: Arc<dyn TabObserver>) -> ObserverId {
        let id = self.next_observer_id;
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Unregister an observer. Returns false if the id was unknown.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    fn emit(&mut self, event: TabEvent) {
        self.generation += 1;
        for (_, observer) in &self.observers {
            observer.on_tab_event(&event);
        }
    }

    /// Another tab already showing the singleton view at `path`
    fn singleton_holder(&self, path: &str, except: TabId) -> Option<TabId> {
        if !self.config.is_singleton(path) {
            return None;
        }
        self.tabs
            .iter()
            .find(|t| t.id != except && t.path == path)
            .map(|t| t.id)
    }

    fn position(&self, id: TabId, op: &str) -> Option<usize> {
        let idx = self.tabs.iter().position(|t| t.id == id);
        if idx.is_none() {
            log::debug!("{}: tab {} not found, ignoring", op, id);
        }
        idx
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a TabManager with one tab per path; the last one is active
    fn manager_with_paths(paths: &[&str]) -> (TabManager, Vec<TabId>) {
        let mut mgr = TabManager::new();
        let ids = paths.iter().map(|p| mgr.open_from_path(p, "")).collect();
        (mgr, ids)
    }

    fn order(mgr: &TabManager) -> Vec<TabId> {
        mgr.tabs.iter().map(|t| t.id).collect()
    }

    #[test]
    fn reorder_forward() {
        let (mut mgr, ids) = manager_with_paths(&["a", "b", "c", "d"]);
        assert!(mgr.reorder(0, 2));
        assert_eq!(order(&mgr), vec![ids[1], ids[2], ids[0], ids[3]]);
    }

    #[test]
    fn reorder_backward() {
        let (mut mgr, ids) = manager_with_paths(&["a", "b", "c", "d"]);
        assert!(mgr.reorder(2, 0));
        assert_eq!(order(&mgr), vec![ids[2], ids[0], ids[1], ids[3]]);
    }

    #[test]
    fn reorder_same_position() {
        let (mut mgr, ids) = manager_with_paths(&["a", "b", "c"]);
        let generation = mgr.generation();
        assert!(!mgr.reorder(1, 1));
        assert_eq!(order(&mgr), ids);
        assert_eq!(mgr.generation(), generation);
    }

    #[test]
    fn reorder_out_of_bounds_target_clamped() {
        let (mut mgr, ids) = manager_with_paths(&["a", "b", "c"]);
        assert!(mgr.reorder(0, 100));
        assert_eq!(order(&mgr), vec![ids[1], ids[2], ids[0]]);
    }

    #[test]
    fn reorder_out_of_bounds_source_ignored() {
        let (mut mgr, ids) = manager_with_paths(&["a", "b", "c"]);
        assert!(!mgr.reorder(3, 0));
        assert_eq!(order(&mgr), ids);

        let mut empty = TabManager::new();
        assert!(!empty.reorder(0, 0));
    }

    #[test]
    fn reorder_keeps_active_tab() {
        let (mut mgr, ids) = manager_with_paths(&["a", "b", "c"]);
        mgr.set_active(ids[0]);
        mgr.reorder(0, 2);
        assert_eq!(mgr.active_tab_id(), Some(ids[0]));
        assert_eq!(mgr.active_tab_index(), Some(2));
    }

    #[test]
    fn move_tab_wraps() {
        let (mut mgr, ids) = manager_with_paths(&["a", "b", "c"]);
        mgr.move_tab(ids[0], CycleDirection::Prev);
        assert_eq!(order(&mgr), vec![ids[1], ids[2], ids[0]]);
        mgr.move_tab(ids[0], CycleDirection::Next);
        assert_eq!(order(&mgr), vec![ids[0], ids[1], ids[2]]);
    }

    #[test]
    fn switch_to_index_is_one_based() {
        let (mut mgr, ids) = manager_with_paths(&["a", "b", "c"]);
        mgr.switch_to_index(1);
        assert_eq!(mgr.active_tab_id(), Some(ids[0]));
        mgr.switch_to_index(0);
        mgr.switch_to_index(4);
        assert_eq!(mgr.active_tab_id(), Some(ids[0]));
    }

    #[test]
    fn recently_closed_is_bounded() {
        let config = Config {
            max_recently_closed: 2,
            ..Config::default()
        };
        let mut mgr = TabManager::with_config(config);
        for path in ["a", "b", "c"] {
            let id = mgr.open_from_path(path, "");
            mgr.close_tab(id);
        }
        assert_eq!(mgr.recently_closed().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn zero_limit_means_unbounded() {
        let config = Config {
            max_recently_closed: 0,
            ..Config::default()
        };
        let mut mgr = TabManager::with_config(config);
        for i in 0..100 {
            let id = mgr.open_from_path(&format!("f{i}"), "");
            mgr.close_tab(id);
        }
        assert_eq!(mgr.recently_closed().count(), 100);
    }

    #[test]
    fn set_config_retitles_and_trims() {
        let (mut mgr, ids) = manager_with_paths(&["a", "b", "c"]);
        let blank = mgr.open_blank();
        for id in &ids {
            mgr.close_tab(*id);
        }

        let config = Config {
            untitled_title: "New Document".to_string(),
            max_recently_closed: 1,
            ..Config::default()
        };
        mgr.set_config(config);

        assert_eq!(mgr.get_tab(blank).map(Tab::title), Some("New Document"));
        assert_eq!(mgr.recently_closed().collect::<Vec<_>>(), vec!["c"]);
    }

    #[test]
    fn stale_ids_do_not_bump_generation() {
        let (mut mgr, _) = manager_with_paths(&["a"]);
        let generation = mgr.generation();
        let stale = Uuid::new_v4();

        mgr.set_content(stale, "x");
        mgr.set_raw_content(stale, "x");
        mgr.commit_raw_content(stale, "x");
        mgr.set_scroll_top(stale, 1.0);
        mgr.set_editing(stale, true);
        mgr.assign_path(stale, "x");
        mgr.rename_tab(stale, "x");
        mgr.navigate(stale, "x");
        assert_eq!(mgr.go_back(stale), None);
        mgr.close_tab(stale);

        assert_eq!(mgr.generation(), generation);
    }
}
