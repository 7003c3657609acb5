//! Helpers for restoring session state

use super::SessionState;
use crate::config::Config;
use crate::error::SessionError;
use crate::tab::{TabId, TabManager};
use std::collections::{HashMap, HashSet};

/// Rebuild a registry from a captured session.
///
/// Ids are kept as captured. Dirty flags and titles are recomputed against
/// `config` rather than trusted. A singleton view open in several tabs keeps
/// only its first tab. An active id that names no tab falls back to the
/// first tab.
pub fn restore_session(config: Config, state: SessionState) -> Result<TabManager, SessionError> {
    let SessionState {
        tabs: captured,
        active_tab_id,
        recently_closed,
        ..
    } = state;

    let mut ids = HashSet::new();
    let mut singletons: HashMap<String, TabId> = HashMap::new();
    // Dropped duplicate singleton tab -> the tab kept for that view
    let mut merged: HashMap<TabId, TabId> = HashMap::new();
    let mut restored = Vec::with_capacity(captured.len());

    for mut tab in captured {
        if !ids.insert(tab.id()) {
            return Err(SessionError::DuplicateTabId(tab.id()));
        }

        let len = tab.history().len();
        let index = tab.history_index();
        let in_range = if len == 0 { index == 0 } else { index < len };
        if !in_range {
            return Err(SessionError::HistoryIndexOutOfRange {
                id: tab.id(),
                index,
                len,
            });
        }

        if config.is_singleton(tab.path()) {
            if let Some(&kept) = singletons.get(tab.path()) {
                log::warn!(
                    "Session restore: {:?} is already open in tab {}, dropping tab {}",
                    tab.path(),
                    kept,
                    tab.id()
                );
                merged.insert(tab.id(), kept);
                continue;
            }
            singletons.insert(tab.path().to_string(), tab.id());
        }

        tab.recompute_dirty();
        restored.push(tab);
    }

    let active_tab_id = active_tab_id.map(|id| merged.get(&id).copied().unwrap_or(id));
    let active_tab_id = match active_tab_id {
        Some(id) if restored.iter().any(|tab| tab.id() == id) => Some(id),
        other => {
            if let Some(id) = other {
                log::warn!(
                    "Session restore: active tab {} no longer exists, falling back to first tab",
                    id
                );
            }
            restored.first().map(|tab| tab.id())
        }
    };

    log::info!("Restored session with {} tabs", restored.len());
    let mut mgr = TabManager::from_parts(config, restored, active_tab_id, recently_closed);
    mgr.update_all_titles();
    Ok(mgr)
}
