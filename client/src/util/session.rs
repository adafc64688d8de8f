//! Browser localStorage persistence for the signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token and a cached copy of the user are the only things this app keeps
//! across reloads. Reads and writes are hydrate-only; SSR paths no-op so
//! server rendering stays deterministic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::net::types::User;
use crate::util::jwt;

const TOKEN_KEY: &str = "storefront_token";
const USER_KEY: &str = "storefront_user";

/// A signed-in session: bearer token plus the cached user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Keep a stored session only if its token still decodes and has not expired.
#[must_use]
pub fn restore(stored: Option<Session>, now_secs: i64) -> Option<Session> {
    let session = stored?;
    match jwt::decode_claims(&session.token) {
        Ok(claims) if !claims.is_expired(now_secs) => Some(session),
        Ok(_) => {
            log::info!("stored session for {} has expired", session.user.email);
            None
        }
        Err(e) => {
            log::warn!("discarding stored session: {e}");
            None
        }
    }
}

/// Load the persisted session, dropping it from storage if it is no longer valid.
pub fn load() -> Option<Session> {
    let token = read_raw(TOKEN_KEY)?;
    let user = load_json::<User>(USER_KEY)?;
    let session = restore(Some(Session { token, user }), jwt::now_secs());
    if session.is_none() {
        clear();
    }
    session
}

pub fn save(session: &Session) {
    write_raw(TOKEN_KEY, &session.token);
    save_json(USER_KEY, &session.user);
}

pub fn clear() {
    remove(TOKEN_KEY);
    remove(USER_KEY);
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = read_raw(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    write_raw(key, &raw);
}

fn read_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn write_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
