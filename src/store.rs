//! Session State Store
//!
//! Cross-page session state with field-level reactivity, restored from
//! browser storage on startup.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::{auth, i18n};

const LANGUAGE_KEY: &str = "language";

/// Per-visitor session state
#[derive(Clone, Debug, Default, Store)]
pub struct Session {
    /// Active UI language ("en" or "nl")
    pub language: String,
    /// Role string left by the login flow; the literal "true" marks an admin
    pub role: String,
}

impl Session {
    /// Restore the session from browser storage.
    pub fn load() -> Self {
        Self {
            language: stored_language().unwrap_or_else(|| i18n::DEFAULT_LANGUAGE.to_string()),
            role: auth::load_role(),
        }
    }
}

/// Type alias for the store
pub type SessionStore = Store<Session>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

/// Switch the UI language and persist the choice.
pub fn set_language(store: &SessionStore, language: &str) {
    *store.language().write() = language.to_string();
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(LANGUAGE_KEY, language);
    }
}

fn stored_language() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(LANGUAGE_KEY).ok().flatten())
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}
