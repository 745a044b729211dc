//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::session::Session;

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    /// Token holder read by every API call
    pub session: Session,
}

impl AppContext {
    pub fn new(config: AppConfig, session: Session) -> Self {
        Self { config, session }
    }

    /// Client bound to the current session
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config.clone(), self.session.clone())
    }

    /// Clear the session and reload the app on the login page.
    ///
    /// A full page load, not a router transition, so no in-memory state
    /// survives.
    pub fn logout(&self) {
        self.session.logout();
        if let Err(e) = window().location().set_href("/login") {
            log::error!("[AUTH] Redirect after logout failed: {:?}", e);
        }
    }
}

/// Get the app context; panics outside of [`crate::app::App`].
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
