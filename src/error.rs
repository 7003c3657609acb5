//! Typed error types for doctabs.
//!
//! Registry operations themselves never fail: stale ids are silent no-ops.
//! Errors only come from rebuilding a registry out of externally supplied
//! state.

use crate::tab::TabId;
use thiserror::Error;

/// Reasons a captured session cannot be turned back into a registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Two tabs in the session share an id.
    #[error("Duplicate tab id {0} in session")]
    DuplicateTabId(TabId),

    /// A tab's history cursor points past the end of its history.
    #[error("Tab {id} has history index {index} but only {len} history entries")]
    HistoryIndexOutOfRange {
        /// Offending tab.
        id: TabId,
        /// Stored cursor.
        index: usize,
        /// Stored history length.
        len: usize,
    },
}
