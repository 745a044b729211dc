//! Session Store
//!
//! Holds the bearer token: persisted through a [`TokenStorage`] and mirrored
//! in memory for the HTTP client. Shared via Leptos context.

use std::sync::{Arc, RwLock};

/// Persistent home of the token
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn remove(&self);
}

/// Browser `localStorage` under a fixed key
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStorage for LocalStorage {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(&self.key, token) {
                    log::error!("[AUTH] Failed to persist token: {:?}", e);
                }
            }
            None => log::error!("[AUTH] localStorage unavailable, token not persisted"),
        }
    }

    fn remove(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}

/// In-process storage, lost on reload
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    token: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn remove(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

/// Explicit session context consumed by the API client
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn TokenStorage>,
    /// Credential attached to outgoing requests
    bearer: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            storage,
            bearer: Arc::new(RwLock::new(None)),
        }
    }

    pub fn in_browser(key: &str) -> Self {
        Self::new(Arc::new(LocalStorage::new(key)))
    }

    /// Re-read the persisted token and sync the in-memory credential with it.
    /// Presence is all that is checked. Returns whether a token is present.
    pub fn restore(&self) -> bool {
        let token = self.storage.load().filter(|t| !t.is_empty());
        let present = token.is_some();
        self.set_bearer(token);
        present
    }

    /// Persist a freshly issued token and start attaching it.
    pub fn login(&self, token: &str) {
        self.storage.save(token);
        self.set_bearer(Some(token.to_string()));
        log::info!("[AUTH] Session started");
    }

    /// Drop both the persisted token and the in-memory credential.
    pub fn logout(&self) {
        self.storage.remove();
        self.set_bearer(None);
        log::info!("[AUTH] Session ended");
    }

    pub fn bearer(&self) -> Option<String> {
        self.bearer.read().ok().and_then(|b| b.clone())
    }

    fn set_bearer(&self, token: Option<String>) {
        if let Ok(mut slot) = self.bearer.write() {
            *slot = token;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_session() -> (Session, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::default());
        (Session::new(storage.clone()), storage)
    }

    #[test]
    fn test_restore_without_token() {
        let (session, _) = memory_session();
        assert!(!session.restore());
        assert!(session.bearer().is_none());
        assert_eq!(session.bearer(), None);
    }

    #[test]
    fn test_restore_attaches_persisted_token() {
        let (session, storage) = memory_session();
        storage.save("abc");
        assert!(session.restore());
        assert_eq!(session.bearer().as_deref(), Some("abc"));
    }

    #[test]
    fn test_login_persists_and_attaches() {
        let (session, storage) = memory_session();
        session.login("tok");
        assert_eq!(storage.load().as_deref(), Some("tok"));
        assert!(session.bearer().is_some());
    }

    #[test]
    fn test_logout_is_seen_by_next_restore() {
        let (session, storage) = memory_session();
        session.login("tok");
        let other_handle = session.clone();

        session.logout();
        assert_eq!(storage.load(), None);
        assert!(other_handle.bearer().is_none());
        assert!(!other_handle.restore());
    }

    #[test]
    fn test_token_removed_outside_session_is_detected() {
        let (session, storage) = memory_session();
        session.login("tok");
        storage.remove();
        assert!(session.bearer().is_some());
        assert!(!session.restore());
        assert!(session.bearer().is_none());
    }
}
