//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::session::{BrowserStorage, Session};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Signed-in admin; written only by login and logout
    pub session: Session,
    /// Sidebar shown next to the content
    pub sidebar_visible: bool,
}

impl AppState {
    /// Initial state, restoring the persisted session
    pub fn new() -> Self {
        Self {
            session: Session::load(&BrowserStorage::new()),
            sidebar_visible: true,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Start a session and write it through to local storage
pub fn store_login(store: &AppStore, session: Session) {
    session.persist(&BrowserStorage::new());
    log::info!("[Store] signed in as user {:?}", session.user_id);
    store.session().set(session);
}

/// End the session and forget the persisted keys
pub fn store_logout(store: &AppStore) {
    Session::clear(&BrowserStorage::new());
    log::info!("[Store] signed out");
    store.session().set(Session::logged_out());
}

pub fn store_toggle_sidebar(store: &AppStore) {
    store.sidebar_visible().update(|visible| *visible = !*visible);
}
