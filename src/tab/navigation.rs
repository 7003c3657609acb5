//! Per-tab back/forward navigation over visited paths.
//!
//! `history` is a linear stack with a cursor. Navigating somewhere new drops
//! every entry after the cursor, so a discarded forward branch is gone for
//! good.

use super::Tab;
use crate::config::Config;

impl Tab {
    pub fn can_go_back(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }

    /// Move to `path` as a fresh navigation step.
    ///
    /// Returns false (and changes nothing) when `path` is already the current
    /// path. Clears dirtiness and resets the scroll position.
    pub(crate) fn navigate_to(&mut self, path: &str, config: &Config) -> bool {
        if self.path == path {
            return false;
        }

        if self.history.is_empty() {
            self.history.push(path.to_string());
            self.history_index = 0;
        } else {
            self.history.truncate(self.history_index + 1);
            self.history.push(path.to_string());
            self.history_index += 1;
        }

        self.set_path(path, config);
        self.is_dirty = false;
        self.scroll_top = 0.0;
        true
    }

    /// Step one entry back. Scroll position is left alone.
    pub(crate) fn step_back(&mut self, config: &Config) -> Option<String> {
        if !self.can_go_back() {
            return None;
        }
        self.history_index -= 1;
        Some(self.land_on_current_entry(config))
    }

    /// Step one entry forward. Scroll position is left alone.
    pub(crate) fn step_forward(&mut self, config: &Config) -> Option<String> {
        if !self.can_go_forward() {
            return None;
        }
        self.history_index += 1;
        Some(self.land_on_current_entry(config))
    }

    fn land_on_current_entry(&mut self, config: &Config) -> String {
        let path = self.history[self.history_index].clone();
        self.set_path(&path, config);
        self.is_dirty = false;
        path
    }

    /// Replace the history entry under the cursor with `path`.
    ///
    /// With `seed_if_empty`, an empty history becomes `[path]`; otherwise an
    /// empty history is left untouched.
    pub(crate) fn replace_current_entry(&mut self, path: &str, seed_if_empty: bool) {
        if let Some(entry) = self.history.get_mut(self.history_index) {
            *entry = path.to_string();
        } else if seed_if_empty {
            self.history = vec![path.to_string()];
            self.history_index = 0;
        }
    }
}
