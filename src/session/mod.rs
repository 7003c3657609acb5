//! Session state types for handing the registry to a persistence layer
//!
//! The registry never touches the filesystem. A host that wants tabs to
//! survive a restart captures a [`SessionState`], serializes it wherever it
//! likes, and feeds it back through [`restore_session`].

pub mod capture;
pub mod restore;

pub use capture::capture_session;
pub use restore::restore_session;

use crate::tab::{Tab, TabId};
use serde::{Deserialize, Serialize};

/// Everything needed to rebuild a `TabManager`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Timestamp when the session was captured (RFC 3339)
    pub saved_at: String,
    /// Tabs in display order
    pub tabs: Vec<Tab>,
    /// Active tab at capture time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab_id: Option<TabId>,
    /// Recently closed paths, oldest first
    #[serde(default)]
    pub recently_closed: Vec<String>,
}
