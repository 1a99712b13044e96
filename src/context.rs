//! Application Context
//!
//! Shared invalidation handle provided via the Leptos Context API.

use leptos::prelude::*;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Fires whenever the subject list on the server may have changed
    topics_changed: Trigger,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            topics_changed: Trigger::new(),
        }
    }

    /// Re-run every view that called [`AppContext::track_topics`].
    pub fn reload_topics(&self) {
        self.topics_changed.notify();
    }

    /// Subscribe the current reactive scope to topic reloads.
    pub fn track_topics(&self) {
        self.topics_changed.track();
    }
}
