//! Orders page: recent orders with a guarded cancel action.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Cancelling is destructive, so it
//! goes through the confirmation broker first and reports the outcome with a
//! toast either way.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use notices::ConfirmOptions;

use crate::components::confirm_dialog::use_confirm;
use crate::components::toast_host::{Toasts, use_toasts};
use crate::net::types::{ClientConfig, Order, OrderStatus, format_cents};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<RwSignal<ClientConfig>>();
    let toasts = use_toasts();
    let confirm = use_confirm();
    install_unauth_redirect(auth, use_navigate());

    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(false);
    let busy_id = RwSignal::new(None::<String>);

    // Reload whenever the session or API base changes.
    Effect::new(move || {
        let Some(client) = auth.with(|a| a.session.is_some().then(|| a.client(&config.get()))) else {
            orders.set(Vec::new());
            return;
        };
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match client.list_orders().await {
                Ok(list) => {
                    let _ = orders.try_set(list);
                }
                Err(e) => super::report_error(toasts, auth, "Could not load orders", &e),
            }
            let _ = loading.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = client;
            loading.set(false);
        }
    });

    let on_cancel = Callback::new(move |order: Order| {
        if cancel_in_flight(busy_id, toasts) {
            return;
        }
        let answer = confirm.ask(cancel_question(&order));
        let client = auth.with_untracked(|a| a.client(&config.get_untracked()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if !answer.await {
                return;
            }
            busy_id.set(Some(order.id.clone()));
            match client.cancel_order(&order.id).await {
                Ok(updated) => {
                    orders.try_update(|list| replace_order(list, updated));
                    toasts.success(format!("Order {} cancelled", order.id));
                }
                Err(e) => super::report_error(toasts, auth, "Could not cancel order", &e),
            }
            let _ = busy_id.try_set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (answer, client, toasts);
    });

    view! {
        <section class="page orders-page">
            <header class="page__header">
                <h1>"Orders"</h1>
                <Show when=move || loading.get()>
                    <span class="page__loading">"Loading..."</span>
                </Show>
            </header>
            <Show
                when=move || !orders.with(Vec::is_empty)
                fallback=move || {
                    view! {
                        <p class="page__empty">
                            {move || if loading.get() { "" } else { "No orders yet." }}
                        </p>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Order"</th>
                            <th>"Customer"</th>
                            <th>"Status"</th>
                            <th>"Items"</th>
                            <th>"Total"</th>
                            <th>"Placed"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || orders.get()
                            key=order_key
                            children=move |order: Order| {
                                let cancellable = order.status.can_cancel();
                                let row_id = order.id.clone();
                                let row_order = order.clone();
                                view! {
                                    <tr>
                                        <td class="mono">{order.id.clone()}</td>
                                        <td>{order.customer_email.clone()}</td>
                                        <td>
                                            <span class=status_class(order.status)>{order.status.label()}</span>
                                        </td>
                                        <td>{order.item_count}</td>
                                        <td>{format_cents(order.total_cents)}</td>
                                        <td>{order.created_at.clone()}</td>
                                        <td>
                                            {cancellable
                                                .then(|| {
                                                    view! {
                                                        <button
                                                            class="btn btn--danger btn--small"
                                                            disabled=move || {
                                                                busy_id.with(|b| b.as_deref() == Some(row_id.as_str()))
                                                            }
                                                            on:click=move |_| on_cancel.run(row_order.clone())
                                                        >
                                                            "Cancel"
                                                        </button>
                                                    }
                                                })}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

/// One cancellation at a time; a second click only gets a notice.
fn cancel_in_flight(busy_id: RwSignal<Option<String>>, toasts: Toasts) -> bool {
    let busy = busy_id.with_untracked(Option::is_some);
    if busy {
        toasts.info("Another cancellation is in progress");
    }
    busy
}

/// Row identity: a status change re-renders the row.
fn order_key(order: &Order) -> (String, OrderStatus) {
    (order.id.clone(), order.status)
}

fn cancel_question(order: &Order) -> ConfirmOptions {
    ConfirmOptions::new(format!(
        "Order {} for {} ({}) will be cancelled and the customer notified.",
        order.id,
        order.customer_email,
        format_cents(order.total_cents)
    ))
    .title("Cancel order?")
    .confirm_label("Cancel order")
    .cancel_label("Keep order")
    .danger()
}

/// Swap in the server's copy of an order. Returns whether it was found.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn replace_order(list: &mut [Order], updated: Order) -> bool {
    match list.iter_mut().find(|o| o.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

fn status_class(status: OrderStatus) -> String {
    format!("order-status order-status--{}", status.label().to_ascii_lowercase())
}
