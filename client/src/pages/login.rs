//! Login page: email + password against the business API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::use_toasts;
use crate::net::types::ClientConfig;
use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<RwSignal<ClientConfig>>();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: nothing to do here.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if auth.with(|a| a.session.is_some()) {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(input) => input,
            Err(msg) => {
                toasts.warning("Cannot sign in", msg);
                return;
            }
        };
        busy.set(true);

        let client = auth.with_untracked(|a| a.client(&config.get_untracked()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match client.login(&email_value, &password_value).await {
                Ok(resp) => {
                    let name = resp.user.name.clone();
                    auth.update(|a| a.sign_in(crate::util::session::Session { token: resp.token, user: resp.user }));
                    toasts.success(format!("Welcome back, {name}"));
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    toasts.error("Sign-in failed", login_error_message(&e));
                }
            }
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (client, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Storefront Admin"</h1>
                <p class="login-card__subtitle">"Sign in with your staff account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(err: &crate::net::api::ApiError) -> String {
    match err {
        crate::net::api::ApiError::Unauthorized => "Email or password is incorrect.".to_owned(),
        other => other.user_message(),
    }
}
