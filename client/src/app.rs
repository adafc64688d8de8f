//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::confirm_dialog::ConfirmProvider;
use crate::components::nav_bar::NavBar;
use crate::components::toast_host::ToastProvider;
use crate::net::types::ClientConfig;
use crate::pages::{discounts::DiscountsPage, login::LoginPage, orders::OrdersPage};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, mounts the toast and confirmation
/// providers around every route, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Auth starts in the loading state so route guards wait for the stored
    // session to be restored in the browser.
    let auth = RwSignal::new(AuthState { session: None, loading: true });
    let ui = RwSignal::new(UiState::default());
    let config = RwSignal::new(ClientConfig::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(config);

    // Effects only run in the browser.
    Effect::new(move || {
        auth.set(AuthState::restore());
        let preferred = theme::read_preference();
        theme::apply(preferred);
        ui.update(|u| u.theme = preferred);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_client_config().await {
                Ok(fetched) => config.set(fetched),
                Err(e) => log::warn!("using default client config: {e}"),
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront Admin"/>

        <ToastProvider>
            <ConfirmProvider>
                <Router>
                    <NavBar/>
                    <main class="app-main">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("login") view=LoginPage/>
                            <Route path=StaticSegment("") view=OrdersPage/>
                            <Route path=StaticSegment("discounts") view=DiscountsPage/>
                        </Routes>
                    </main>
                </Router>
            </ConfirmProvider>
        </ToastProvider>
    }
}
