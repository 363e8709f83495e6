//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use todo_admin_core::api::{ApiError, ApiResult, HttpApi};
use todo_admin_core::config::AppConfig;
use todo_admin_core::domain::LoginResponse;
use todo_admin_core::session::SessionContext;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    session: StoredValue<SessionContext>,
    config: StoredValue<AppConfig>,
    /// One client for the whole app; it reads the token from `session` per request
    api: StoredValue<HttpApi>,
    /// Bumped whenever the session starts or ends - read
    pub session_version: ReadSignal<u32>,
    /// Bumped whenever the session starts or ends - write
    set_session_version: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        session: SessionContext,
        config: AppConfig,
        session_version: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        let api = HttpApi::new(config.clone(), session.clone());
        Self {
            session: StoredValue::new(session),
            config: StoredValue::new(config),
            api: StoredValue::new(api),
            session_version: session_version.0,
            set_session_version: session_version.1,
        }
    }

    /// Session handle. Not tracked; read `session_version` to react to changes.
    pub fn session(&self) -> SessionContext {
        self.session.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Shared client; clones reuse the same connection pool and session
    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_version.track();
        self.session.with_value(|s| s.is_authenticated())
    }

    pub fn is_admin(&self) -> bool {
        self.session_version.track();
        self.session.with_value(|s| s.has_elevated_role())
    }

    pub fn sign_in(&self, response: &LoginResponse) {
        self.session
            .with_value(|s| s.set(response.authorization(), response.role()));
        self.session_changed();
    }

    pub fn sign_out(&self) {
        self.session.with_value(|s| s.clear());
        self.session_changed();
    }

    /// The client already dropped the session on 401; let the views know
    pub fn observe<T>(&self, result: &ApiResult<T>) {
        if let Err(err) = result {
            self.observe_error(err);
        }
    }

    pub fn observe_error(&self, err: &ApiError) {
        if matches!(err, ApiError::Unauthorized) {
            self.session_changed();
        }
    }

    fn session_changed(&self) {
        self.set_session_version.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
