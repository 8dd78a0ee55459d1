//! Session token storage.
//!
//! A single opaque token in `sessionStorage["token"]` means "logged in".
//! There is no expiry tracking; the server's 401 is the only signal that
//! the token went stale.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

/// Storage key holding the token.
pub const TOKEN_KEY: &str = "token";

/// Backing store for the session token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// Token store backed by the browser's `sessionStorage`.
///
/// Outside the browser every read is empty and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStorageStore;

#[cfg(feature = "csr")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl TokenStore for SessionStorageStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            session_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn store(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-memory token store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.token.lock().map_or(None, |t| t.clone())
    }

    fn store(&self, token: &str) {
        if let Ok(mut t) = self.token.lock() {
            *t = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut t) = self.token.lock() {
            *t = None;
        }
    }
}

/// Handle to the current session, passed explicitly to the request helper
/// and page loader.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("logged_in", &self.is_logged_in()).finish()
    }
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session backed by the browser's `sessionStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(Arc::new(SessionStorageStore))
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    /// Current token; an empty stored value counts as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.is_empty())
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn sign_in(&self, token: &str) {
        self.store.store(token);
    }

    pub fn sign_out(&self) {
        self.store.clear();
    }
}
