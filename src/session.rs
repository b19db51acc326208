//! Session Store
//!
//! Client-held identity: `userId`, `username` and `role` in a persistent
//! key/value store. Presence-based only; the backend re-checks every
//! privileged request.

use std::cell::RefCell;
use std::collections::HashMap;

use leptos::prelude::*;

use crate::handlers::{self, Feedback};
use crate::models::{Role, User};

pub const USER_ID_KEY: &str = "userId";
pub const USERNAME_KEY: &str = "username";
pub const ROLE_KEY: &str = "role";

// ========================
// Storage backends
// ========================

/// Persistent string key/value storage
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        let written = Self::storage().map(|s| s.set_item(key, value).is_ok());
        if written != Some(true) {
            log::warn!("[SESSION] Could not write {} to localStorage", key);
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory storage for tests and storage-less environments
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

// ========================
// Session
// ========================

/// What the client believes about the current user
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub role: Role,
}

impl Session {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: Some(user.id.clone()),
            username: Some(user.username.clone()),
            role: user.role,
        }
    }

    /// Authenticated iff both the user id and the username are present
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some() && self.username.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role == Role::Admin
    }
}

/// Reads and writes the session keys of a `KeyValueStore`
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn get_session(&self) -> Session {
        let read = |key: &str| self.storage.get_item(key).filter(|v| !v.is_empty());
        Session {
            user_id: read(USER_ID_KEY),
            username: read(USERNAME_KEY),
            role: read(ROLE_KEY).map(|r| Role::from_wire(&r)).unwrap_or_default(),
        }
    }

    pub fn login(&self, user: &User) {
        self.storage.set_item(USER_ID_KEY, &user.id);
        self.storage.set_item(USERNAME_KEY, &user.username);
        self.storage.set_item(ROLE_KEY, user.role.as_str());
    }

    pub fn logout(&self) {
        for key in [USER_ID_KEY, USERNAME_KEY, ROLE_KEY] {
            self.storage.remove_item(key);
        }
    }
}

// ========================
// Session context
// ========================

/// Session read once at start-up and shared through context.
///
/// Components read the signal; only `sign_in` / `sign_out` touch storage.
#[derive(Clone, Copy)]
pub struct SessionContext {
    current: RwSignal<Session>,
    signing_out: RwSignal<bool>,
}

impl SessionContext {
    pub fn load() -> Self {
        let session = SessionStore::new(BrowserStorage).get_session();
        log::info!(
            "[SESSION] Restored session: authenticated={}, role={}",
            session.is_authenticated(),
            session.role.as_str()
        );
        Self {
            current: RwSignal::new(session),
            signing_out: RwSignal::new(false),
        }
    }

    /// Current session (tracked)
    pub fn get(&self) -> Session {
        self.current.get()
    }

    pub fn get_untracked(&self) -> Session {
        self.current.get_untracked()
    }

    /// True between a logout click and the redirect home
    pub fn is_signing_out(&self) -> bool {
        self.signing_out.get()
    }

    pub fn sign_in(&self, user: &User) {
        SessionStore::new(BrowserStorage).login(user);
        self.signing_out.set(false);
        self.current.set(Session::from_user(user));
    }

    /// Clears the local session at once; the backend call is the caller's.
    pub fn sign_out(&self) -> Feedback {
        self.signing_out.set(true);
        let feedback = handlers::auth::sign_out(&SessionStore::new(BrowserStorage));
        self.current.set(Session::default());
        feedback
    }

    pub fn finish_sign_out(&self) {
        self.signing_out.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: "u7".to_string(),
            username: "asha".to_string(),
            role,
        }
    }

    #[test]
    fn test_empty_store_is_unauthenticated_student() {
        let store = SessionStore::new(MemoryStorage::default());
        let session = store.get_session();
        assert!(!session.is_authenticated());
        assert_eq!(session.role, Role::Student);
    }

    #[test]
    fn test_login_writes_all_keys() {
        let store = SessionStore::new(MemoryStorage::default());
        store.login(&user(Role::Admin));
        assert_eq!(store.storage.get_item(USER_ID_KEY).as_deref(), Some("u7"));
        assert_eq!(store.storage.get_item(USERNAME_KEY).as_deref(), Some("asha"));
        assert_eq!(store.storage.get_item(ROLE_KEY).as_deref(), Some("ADMIN"));
        let session = store.get_session();
        assert!(session.is_authenticated());
        assert!(session.is_admin());
    }

    #[test]
    fn test_missing_role_defaults_to_student() {
        let storage = MemoryStorage::default();
        storage.set_item(USER_ID_KEY, "u1");
        storage.set_item(USERNAME_KEY, "kiran");
        let session = SessionStore::new(storage).get_session();
        assert!(session.is_authenticated());
        assert_eq!(session.role, Role::Student);
        assert!(!session.is_admin());
    }

    #[test]
    fn test_username_alone_is_not_authenticated() {
        let storage = MemoryStorage::default();
        storage.set_item(USERNAME_KEY, "kiran");
        storage.set_item(USER_ID_KEY, "");
        let session = SessionStore::new(storage).get_session();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_logout_clears_all_keys() {
        let store = SessionStore::new(MemoryStorage::default());
        store.login(&user(Role::Student));
        store.logout();
        assert_eq!(store.storage.get_item(USER_ID_KEY), None);
        assert_eq!(store.storage.get_item(USERNAME_KEY), None);
        assert_eq!(store.storage.get_item(ROLE_KEY), None);
        assert_eq!(store.get_session(), Session::default());
    }
}
