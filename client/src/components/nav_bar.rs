//! Top navigation: section links, theme toggle, and sign-out.

use leptos::prelude::*;
use leptos_router::components::A;
use notices::{ConfirmOptions, Severity};

use crate::components::confirm_dialog::use_confirm;
use crate::components::toast_host::use_toasts;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let confirm = use_confirm();
    let toasts = use_toasts();

    let on_sign_out = move |_| {
        let question = ConfirmOptions::new("Sign out of the admin dashboard?")
            .confirm_label("Sign out")
            .severity(Severity::Info);
        let answer = confirm.ask(question);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if answer.await {
                auth.update(AuthState::sign_out);
                toasts.clear();
                toasts.info("Signed out");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (answer, toasts);
    };

    let display_name = move || auth.with(|a| a.user().map(|u| u.name.clone()).unwrap_or_default());

    view! {
        <header class="nav-bar toolbar">
            <span class="nav-bar__brand">"Storefront Admin"</span>
            <Show when=move || auth.with(|a| a.session.is_some())>
                <nav class="nav-bar__links">
                    <A href="/">"Orders"</A>
                    <A href="/discounts">"Discounts"</A>
                </nav>
            </Show>
            <span class="toolbar__spacer"></span>
            <button
                class="btn toolbar__dark-toggle"
                title="Toggle dark mode"
                on:click=move |_| ui.update(UiState::toggle_theme)
            >
                {move || ui.with(|u| u.theme.toggle_icon())}
            </button>
            <Show when=move || auth.with(|a| a.session.is_some())>
                <span class="toolbar__self">{display_name}</span>
                <button class="btn toolbar__logout" on:click=on_sign_out title="Sign out">
                    "Sign out"
                </button>
            </Show>
        </header>
    }
}
