//! Session Gate
//!
//! The signed-in user's token and role, held in one context object that is
//! passed to whoever needs it instead of being read from ambient storage.
//! Storage is pluggable so the browser can persist across reloads while
//! tests stay in memory.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::domain::Role;

/// A signed-in user's credential and role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Full `Authorization` header value
    pub token: String,
    pub role: Role,
}

/// Where the session survives between page loads
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Process-local store used by tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            slot: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.slot.read().ok().and_then(|s| s.clone())
    }

    fn save(&self, session: &Session) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(session.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = None;
        }
    }
}

/// Shared session handle. Cloning shares the same underlying state.
#[derive(Clone)]
pub struct SessionContext {
    current: Arc<RwLock<Option<Session>>>,
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionContext {
    /// Restore whatever session the store still holds
    pub fn load(store: Arc<dyn SessionStore>) -> Self {
        let restored = store.load();
        if restored.is_some() {
            log::debug!("restored stored session");
        }
        Self {
            current: Arc::new(RwLock::new(restored)),
            store,
        }
    }

    /// Signed-out context backed by memory
    pub fn in_memory() -> Self {
        Self::load(Arc::new(MemorySessionStore::new()))
    }

    pub fn current(&self) -> Option<Session> {
        self.current.read().ok().and_then(|s| s.clone())
    }

    pub fn set(&self, token: impl Into<String>, role: Role) {
        let session = Session {
            token: token.into(),
            role,
        };
        self.store.save(&session);
        if let Ok(mut current) = self.current.write() {
            *current = Some(session);
        }
        log::info!("session started with role {:?}", role);
    }

    pub fn clear(&self) {
        self.store.clear();
        if let Ok(mut current) = self.current.write() {
            *current = None;
        }
        log::info!("session cleared");
    }

    pub fn token(&self) -> Option<String> {
        self.current().map(|s| s.token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .map(|s| s.is_some())
            .unwrap_or(false)
    }

    pub fn has_elevated_role(&self) -> bool {
        self.current
            .read()
            .map(|s| s.as_ref().is_some_and(|s| s.role.is_elevated()))
            .unwrap_or(false)
    }
}
