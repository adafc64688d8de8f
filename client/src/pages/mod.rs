//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, confirming, reporting)
//! and delegates notification rendering to the providers in `components`.


pub mod discounts;
pub mod login;
pub mod orders;

use leptos::prelude::*;

use crate::components::toast_host::Toasts;
use crate::net::api::ApiError;
use crate::state::auth::AuthState;

/// Report a failed API call. A rejected token ends the session so the route
/// guard sends the user back to `/login`.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn report_error(toasts: Toasts, auth: RwSignal<AuthState>, title: &str, err: &ApiError) {
    log::warn!("{title}: {err}");
    if matches!(err, ApiError::Unauthorized) {
        auth.try_update(AuthState::sign_out);
        toasts.clear();
        toasts.warning("Session expired", "Sign in again to continue.");
        return;
    }
    toasts.error(title, err.user_message());
}
