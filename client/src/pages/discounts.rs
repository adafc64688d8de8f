//! Discount codes: list, create, delete.

#[cfg(test)]
#[path = "discounts_test.rs"]
mod discounts_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use notices::ConfirmOptions;

use crate::components::confirm_dialog::use_confirm;
use crate::components::toast_host::use_toasts;
use crate::net::types::{ClientConfig, DiscountCode, NewDiscountCode};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DiscountsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<RwSignal<ClientConfig>>();
    let toasts = use_toasts();
    let confirm = use_confirm();
    install_unauth_redirect(auth, use_navigate());

    let discounts = RwSignal::new(Vec::<DiscountCode>::new());
    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let is_admin = move || auth.with(AuthState::is_admin);

    let code = RwSignal::new(String::new());
    let percent = RwSignal::new(String::new());
    let expires = RwSignal::new(String::new());

    Effect::new(move || {
        let Some(client) = auth.with(|a| a.session.is_some().then(|| a.client(&config.get()))) else {
            discounts.set(Vec::new());
            return;
        };
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match client.list_discounts().await {
                Ok(list) => {
                    let _ = discounts.try_set(list);
                }
                Err(e) => super::report_error(toasts, auth, "Could not load discount codes", &e),
            }
            let _ = loading.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = client;
            loading.set(false);
        }
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let payload = match NewDiscountCode::from_form(&code.get_untracked(), &percent.get_untracked(), &expires.get_untracked()) {
            Ok(payload) => payload,
            Err(msg) => {
                toasts.warning("Check the form", msg);
                return;
            }
        };
        saving.set(true);
        let client = auth.with_untracked(|a| a.client(&config.get_untracked()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match client.create_discount(&payload).await {
                Ok(created) => {
                    toasts.success(format!("Discount {} created", created.code));
                    discounts.try_update(|list| list.insert(0, created));
                    code.set(String::new());
                    percent.set(String::new());
                    expires.set(String::new());
                }
                Err(e) => super::report_error(toasts, auth, "Could not create discount", &e),
            }
            let _ = saving.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (client, payload);
            saving.set(false);
        }
    };

    let on_delete = Callback::new(move |discount: DiscountCode| {
        let answer = confirm.ask(delete_question(&discount));
        let client = auth.with_untracked(|a| a.client(&config.get_untracked()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if !answer.await {
                return;
            }
            match client.delete_discount(&discount.id).await {
                Ok(()) => {
                    discounts.try_update(|list| remove_discount(list, &discount.id));
                    toasts.success(format!("Discount {} deleted", discount.code));
                }
                Err(e) => super::report_error(toasts, auth, "Could not delete discount", &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (answer, client);
    });

    view! {
        <section class="page discounts-page">
            <header class="page__header">
                <h1>"Discount codes"</h1>
                <Show when=move || loading.get()>
                    <span class="page__loading">"Loading..."</span>
                </Show>
            </header>
            <Show
                when=is_admin
                fallback=|| view! { <p class="page__notice">"Only admins can create or delete discount codes."</p> }
            >
                <form class="discount-form" on:submit=on_create>
                    <input
                        class="discount-form__code"
                        type="text"
                        placeholder="SPRING25"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev).to_ascii_uppercase())
                    />
                    <input
                        class="discount-form__percent"
                        type="number"
                        min="1"
                        max="100"
                        placeholder="% off"
                        prop:value=move || percent.get()
                        on:input=move |ev| percent.set(event_target_value(&ev))
                    />
                    <input
                        class="discount-form__expires"
                        type="date"
                        prop:value=move || expires.get()
                        on:input=move |ev| expires.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        "Create"
                    </button>
                </form>
            </Show>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Code"</th>
                        <th>"Off"</th>
                        <th>"Status"</th>
                        <th>"Uses"</th>
                        <th>"Expires"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || discounts.get()
                        key=|d| d.id.clone()
                        children=move |discount: DiscountCode| {
                            let row = discount.clone();
                            view! {
                                <tr>
                                    <td class="mono">{discount.code.clone()}</td>
                                    <td>{format!("{}%", discount.percent_off)}</td>
                                    <td>{if discount.active { "Active" } else { "Inactive" }}</td>
                                    <td>{discount.usage_count}</td>
                                    <td>{expiry_label(&discount)}</td>
                                    <td>
                                        <Show when=is_admin>
                                            {
                                                let row = row.clone();
                                                view! {
                                                    <button
                                                        class="btn btn--danger btn--small"
                                                        on:click=move |_| on_delete.run(row.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                }
                                            }
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

fn delete_question(discount: &DiscountCode) -> ConfirmOptions {
    let uses = match discount.usage_count {
        0 => "It has not been used yet.".to_owned(),
        1 => "It has been used on 1 order.".to_owned(),
        n => format!("It has been used on {n} orders."),
    };
    ConfirmOptions::new(format!("{} will stop working immediately. {uses}", discount.code))
        .title("Delete discount code?")
        .confirm_label("Delete")
        .danger()
}

/// Drop a deleted code from the list. Returns whether it was present.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn remove_discount(list: &mut Vec<DiscountCode>, id: &str) -> bool {
    let before = list.len();
    list.retain(|d| d.id != id);
    list.len() != before
}

fn expiry_label(discount: &DiscountCode) -> String {
    discount.expires_at.clone().unwrap_or_else(|| "Never".to_owned())
}
