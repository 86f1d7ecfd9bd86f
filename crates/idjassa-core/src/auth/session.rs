use std::sync::Arc;

use tracing::{info, warn};

use super::storage::{MemoryStorage, SessionStorage, StorageError};
use crate::models::Profile;

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "idjassa_token";

/// Storage key holding the JSON-encoded user profile
pub const USER_KEY: &str = "idjassa_user";

/// Snapshot of the persisted credentials.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<Profile>,
}

impl Session {
    /// An empty token counts as no token
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty()) && self.user.is_some()
    }
}

/// Shared handle over the session entries.
/// Clone is cheap - every clone points at the same storage.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Store backed by process memory only
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Current token/user pair. Never fails: unreadable entries count as absent.
    pub fn read(&self) -> Session {
        Session {
            token: self.token(),
            user: self.user(),
        }
    }

    pub fn token(&self) -> Option<String> {
        match self.storage.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Failed to read session token");
                None
            }
        }
    }

    pub fn user(&self) -> Option<Profile> {
        let raw = match self.storage.get(USER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "Failed to read session user");
                return None;
            }
        };
        serde_json::from_str(&raw).ok()
    }

    pub fn save(&self, token: &str, user: &Profile) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(user)?;
        self.storage
            .set_entries(&[(TOKEN_KEY, token.to_string()), (USER_KEY, user_json)])?;
        info!(user_id = ?user.id, "Session saved");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_entries(&[TOKEN_KEY, USER_KEY])?;
        info!("Session cleared");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
