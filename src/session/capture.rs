//! Capture current session state from a live registry

use super::SessionState;
use crate::tab::TabManager;

/// Capture the registry's tabs, active pointer and recently-closed log
pub fn capture_session(manager: &TabManager) -> SessionState {
    // A dangling active id is not worth persisting
    let active_tab_id = manager.active_tab().map(|tab| tab.id());

    let state = SessionState {
        saved_at: chrono::Utc::now().to_rfc3339(),
        tabs: manager.tabs().to_vec(),
        active_tab_id,
        recently_closed: manager.recently_closed().map(str::to_string).collect(),
    };

    log::debug!("Captured session with {} tabs", state.tabs.len());
    state
}
