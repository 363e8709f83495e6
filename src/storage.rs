//! Browser session storage
//!
//! Keeps the session in `localStorage` so a reload stays signed in.

use todo_admin_core::session::{Session, SessionStore};

pub const SESSION_KEY: &str = "todo-admin.session";

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        let raw = Self::storage()?.get_item(SESSION_KEY).ok()??;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("ignoring unreadable stored session: {}", err);
                None
            }
        }
    }

    fn save(&self, session: &Session) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, session will not survive a reload");
            return;
        };
        match serde_json::to_string(session) {
            Ok(raw) => {
                if let Err(err) = storage.set_item(SESSION_KEY, &raw) {
                    log::warn!("failed to store session: {:?}", err);
                }
            }
            Err(err) => log::error!("failed to encode session: {}", err),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(err) = storage.remove_item(SESSION_KEY) {
                log::warn!("failed to remove stored session: {:?}", err);
            }
        }
    }
}
