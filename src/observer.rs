//! Change notification for the tab registry.
//!
//! Rendering layers register a [`TabObserver`] with
//! [`TabManager::add_observer`](crate::tab::TabManager::add_observer) and are
//! called synchronously after each state change. [`TabEventBuffer`] is a
//! ready-made observer that queues events for the owner to drain on its next
//! frame.

use crate::tab::TabId;
use parking_lot::Mutex;
use std::collections::HashSet;

/// Handle returned by `add_observer`, used to unregister
pub type ObserverId = u64;

/// A state change in the registry
#[derive(Debug, Clone, PartialEq)]
pub enum TabEvent {
    /// A tab was created (it is also activated, see `Activated`)
    Opened { id: TabId, path: String },
    /// The active pointer moved; `None` once the last tab is gone
    Activated { id: Option<TabId> },
    /// A tab was removed
    Closed { id: TabId, path: String },
    /// Every tab was removed at once
    AllClosed { count: usize },
    /// A tab moved from one display index to another
    Reordered { from: usize, to: usize },
    /// Rendered, raw, or committed content was replaced
    ContentChanged { id: TabId },
    /// The cached dirty flag flipped
    DirtyChanged { id: TabId, is_dirty: bool },
    /// Scroll, anchor line, or editor view state was stored
    ViewStateChanged { id: TabId },
    /// Save-as or rename gave the tab a new path
    PathChanged { id: TabId, path: String },
    /// The history cursor moved (navigate, back, forward)
    Navigated {
        id: TabId,
        path: String,
        history_index: usize,
    },
    /// Edit/view mode toggled
    EditingChanged { id: TabId, is_editing: bool },
}

impl TabEvent {
    /// snake_case kind name, used for subscription filters
    pub fn kind_name(&self) -> &'static str {
        match self {
            TabEvent::Opened { .. } => "opened",
            TabEvent::Activated { .. } => "activated",
            TabEvent::Closed { .. } => "closed",
            TabEvent::AllClosed { .. } => "all_closed",
            TabEvent::Reordered { .. } => "reordered",
            TabEvent::ContentChanged { .. } => "content_changed",
            TabEvent::DirtyChanged { .. } => "dirty_changed",
            TabEvent::ViewStateChanged { .. } => "view_state_changed",
            TabEvent::PathChanged { .. } => "path_changed",
            TabEvent::Navigated { .. } => "navigated",
            TabEvent::EditingChanged { .. } => "editing_changed",
        }
    }

    /// Tab the event is about, if it concerns a single tab
    pub fn tab_id(&self) -> Option<TabId> {
        match self {
            TabEvent::Opened { id, .. }
            | TabEvent::Closed { id, .. }
            | TabEvent::ContentChanged { id }
            | TabEvent::DirtyChanged { id, .. }
            | TabEvent::ViewStateChanged { id }
            | TabEvent::PathChanged { id, .. }
            | TabEvent::Navigated { id, .. }
            | TabEvent::EditingChanged { id, .. } => Some(*id),
            TabEvent::Activated { id } => *id,
            TabEvent::AllClosed { .. } | TabEvent::Reordered { .. } => None,
        }
    }
}

/// Receives registry changes.
///
/// Called on the thread that owns the registry, after the change has been
/// applied. Implementations must not call back into the registry.
pub trait TabObserver: Send + Sync {
    fn on_tab_event(&self, event: &TabEvent);
}

/// Observer that buffers events until the owner drains them.
pub struct TabEventBuffer {
    /// Optional subscription filter expressed as snake_case kind names.
    /// `None` means "buffer everything".
    subscription_filter: Option<HashSet<String>>,
    event_buffer: Mutex<Vec<TabEvent>>,
}

impl TabEventBuffer {
    /// Create a new buffer.
    ///
    /// # Arguments
    /// * `subscriptions` - If `Some`, only events whose kind name is in the
    ///   set are kept. If `None`, all events are kept.
    pub fn new(subscriptions: Option<HashSet<String>>) -> Self {
        Self {
            subscription_filter: subscriptions,
            event_buffer: Mutex::new(Vec::new()),
        }
    }

    /// Drain all buffered events, returning them and clearing the buffer.
    pub fn drain_events(&self) -> Vec<TabEvent> {
        std::mem::take(&mut *self.event_buffer.lock())
    }

    pub fn pending(&self) -> usize {
        self.event_buffer.lock().len()
    }

    fn accepts(&self, event: &TabEvent) -> bool {
        self.subscription_filter
            .as_ref()
            .is_none_or(|kinds| kinds.contains(event.kind_name()))
    }
}

impl Default for TabEventBuffer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl TabObserver for TabEventBuffer {
    fn on_tab_event(&self, event: &TabEvent) {
        if self.accepts(event) {
            self.event_buffer.lock().push(event.clone());
        }
    }
}
