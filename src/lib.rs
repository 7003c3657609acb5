//! doctabs: the open-document registry of an editor session.
//!
//! One [`TabManager`] per editor window owns the ordered tabs, the active
//! pointer, per-tab back/forward history and view state, and a log of
//! recently closed paths. It is single-threaded and in-memory: rendering,
//! file I/O and the editor widget are collaborators that call into it and
//! read it back through [`TabManager::snapshot`] or a [`TabObserver`].

/// Library version (root crate version, for use by hosts).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod debug;
pub mod error;
pub mod observer;
pub mod session;
pub mod tab;

pub use config::Config;
pub use error::SessionError;
pub use observer::{ObserverId, TabEvent, TabEventBuffer, TabObserver};
pub use session::SessionState;
pub use tab::{CycleDirection, EditorViewState, Tab, TabId, TabManager, TabsSnapshot};
