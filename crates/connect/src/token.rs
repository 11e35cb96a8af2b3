//! Bearer-token storage seam.
//!
//! The client never decides where tokens live; it reads and writes them
//! through [`TokenStore`]. The in-memory implementation covers a single
//! session and tests; persistent backends are external collaborators.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::warn;

/// Trait defining the contract for bearer-token storage.
pub trait TokenStore: Send + Sync {
    /// The currently stored token, if the user is authenticated.
    fn get_token(&self) -> Option<String>;

    /// Replaces the stored token after a successful login.
    fn save_token(&self, token: &str);

    /// Drops the stored token on logout.
    fn clear_token(&self);
}

/// Session-lifetime token store.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the token lock, recovering from poison if necessary. A stale
    /// token is harmless here; the API rejects it on use.
    fn read(&self) -> RwLockReadGuard<'_, Option<String>> {
        self.token.read().unwrap_or_else(|poisoned| {
            warn!("Token store lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<String>> {
        self.token.write().unwrap_or_else(|poisoned| {
            warn!("Token store lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl TokenStore for InMemoryTokenStore {
    fn get_token(&self) -> Option<String> {
        self.read().clone()
    }

    fn save_token(&self, token: &str) {
        *self.write() = Some(token.to_string());
    }

    fn clear_token(&self) {
        *self.write() = None;
    }
}
