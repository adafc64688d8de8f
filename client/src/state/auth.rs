//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and to build authorized API clients.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiClient;
use crate::net::types::{ClientConfig, User};
use crate::util::session::{self, Session};

/// Authentication state: the restored or freshly issued session, if any.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// State at startup: restore from storage.
    #[must_use]
    pub fn restore() -> Self {
        Self { session: session::load(), loading: false }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(User::is_admin)
    }

    /// API client carrying this session's bearer token.
    #[must_use]
    pub fn client(&self, config: &ClientConfig) -> ApiClient {
        ApiClient::new(config.api_base_url.clone()).with_token(self.token().map(str::to_owned))
    }

    /// Record and persist a new session.
    pub fn sign_in(&mut self, session: Session) {
        session::save(&session);
        self.session = Some(session);
        self.loading = false;
    }

    /// Forget the session here and in storage.
    pub fn sign_out(&mut self) {
        session::clear();
        self.session = None;
        self.loading = false;
    }
}
