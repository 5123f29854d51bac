//! Session
//!
//! Login state persisted as flat strings in browser local storage so it
//! survives reloads. Only login and logout write it.

use serde::Deserialize;

const KEY_LOGGED_IN: &str = "isLoggedIn";
const KEY_TOKEN: &str = "token";
const KEY_USER_ID: &str = "user_id";
const KEY_USER_NAME: &str = "user_name";

// ========================
// Storage Seam
// ========================

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`; every call is a no-op when storage is unavailable
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[Session] local storage unavailable; login will not survive a reload");
        }
        Self { storage }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("[Session] failed to persist {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            storage.remove_item(key).ok();
        }
    }
}

// ========================
// Session Value
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub token: Option<String>,
    pub user_id: Option<u64>,
    pub display_name: Option<String>,
}

impl Session {
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Read the persisted session. A user id that is not a number counts
    /// as absent.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let non_empty = |key: &str| store.get(key).filter(|v| !v.trim().is_empty());
        Self {
            logged_in: store.get(KEY_LOGGED_IN).as_deref() == Some("true"),
            token: non_empty(KEY_TOKEN),
            user_id: store.get(KEY_USER_ID).and_then(|v| v.trim().parse().ok()),
            display_name: non_empty(KEY_USER_NAME),
        }
    }

    pub fn persist(&self, store: &impl KeyValueStore) {
        if self.logged_in {
            store.set(KEY_LOGGED_IN, "true");
        } else {
            store.remove(KEY_LOGGED_IN);
        }
        let optional = |key: &str, value: Option<String>| match value {
            Some(v) => store.set(key, &v),
            None => store.remove(key),
        };
        optional(KEY_TOKEN, self.token.clone());
        optional(KEY_USER_ID, self.user_id.map(|id| id.to_string()));
        optional(KEY_USER_NAME, self.display_name.clone());
    }

    pub fn clear(store: &impl KeyValueStore) {
        for key in [KEY_LOGGED_IN, KEY_TOKEN, KEY_USER_ID, KEY_USER_NAME] {
            store.remove(key);
        }
    }

    /// Greeting shown in the header
    pub fn greeting_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Admin")
    }
}

/// Successful `/login` payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginGrant {
    #[serde(default)]
    pub token: Option<String>,
    pub users: LoginUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    #[serde(deserialize_with = "crate::models::lenient_u64")]
    pub id: u64,
    #[serde(default, deserialize_with = "crate::models::lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "crate::models::lenient_string")]
    pub email: String,
}

impl From<LoginGrant> for Session {
    fn from(grant: LoginGrant) -> Self {
        let name = if grant.users.first_name.trim().is_empty() {
            grant.users.email
        } else {
            grant.users.first_name
        };
        Self {
            logged_in: true,
            token: grant.token.filter(|t| !t.is_empty()),
            user_id: Some(grant.users.id),
            display_name: Some(name).filter(|n| !n.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    fn signed_in() -> Session {
        Session {
            logged_in: true,
            token: Some("abc123".to_string()),
            user_id: Some(7),
            display_name: Some("Priya".to_string()),
        }
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::default();
        signed_in().persist(&store);
        assert_eq!(store.get("isLoggedIn").as_deref(), Some("true"));
        assert_eq!(store.get("user_id").as_deref(), Some("7"));
        assert_eq!(Session::load(&store), signed_in());
    }

    #[test]
    fn test_empty_store_is_logged_out() {
        assert_eq!(Session::load(&MemoryStore::default()), Session::logged_out());
    }

    #[test]
    fn test_non_numeric_user_id_is_absent() {
        let store = MemoryStore::default();
        store.set("isLoggedIn", "true");
        store.set("user_id", "undefined");
        let session = Session::load(&store);
        assert!(session.logged_in);
        assert_eq!(session.user_id, None);
    }

    #[test]
    fn test_clear_removes_everything() {
        let store = MemoryStore::default();
        signed_in().persist(&store);
        Session::clear(&store);
        assert!(store.0.borrow().is_empty());
    }

    #[test]
    fn test_persist_logged_out_removes_keys() {
        let store = MemoryStore::default();
        signed_in().persist(&store);
        Session::logged_out().persist(&store);
        assert!(store.0.borrow().is_empty());
    }

    #[test]
    fn test_session_from_login_grant() {
        let grant: LoginGrant = serde_json::from_str(
            r#"{"status":true,"token":"t0k","users":{"id":"12","first_name":"","email":"a@b.c"}}"#,
        )
        .unwrap();
        let session = Session::from(grant);
        assert_eq!(session.user_id, Some(12));
        assert_eq!(session.token.as_deref(), Some("t0k"));
        assert_eq!(session.greeting_name(), "a@b.c");
    }
}
