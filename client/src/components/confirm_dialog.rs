//! Confirmation provider, context handle, and modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages ask yes/no questions with `use_confirm().ask(options).await` instead
//! of each owning a modal flag. `ConfirmProvider` owns the single
//! `ConfirmBroker` and renders its pending request; backdrop clicks and
//! Escape answer `false`.

#[cfg(test)]
#[path = "confirm_dialog_test.rs"]
mod confirm_dialog_test;

use leptos::prelude::*;
use notices::{ConfirmBroker, ConfirmOptions, Confirmation, Severity};

/// Handle to the app's confirmation broker.
#[derive(Clone, Copy)]
pub struct Confirm {
    broker: RwSignal<ConfirmBroker>,
}

impl Confirm {
    pub(crate) fn new() -> Self {
        Self { broker: RwSignal::new(ConfirmBroker::new()) }
    }

    /// Ask the user; the future yields `true` only on explicit confirmation.
    ///
    /// Once the provider has been torn down this answers `false` immediately.
    pub fn ask(&self, options: ConfirmOptions) -> Confirmation {
        self.broker
            .try_update(|broker| broker.request(options))
            .unwrap_or_else(|| Confirmation::settled(false))
    }

    /// Answer the pending question, if any.
    pub fn resolve(&self, answer: bool) {
        self.broker.try_update(|broker| {
            broker.resolve(answer);
        });
    }

    pub fn cancel(&self) {
        self.resolve(false);
    }

    /// The question currently on screen. Tracked.
    pub fn current(&self) -> Option<ConfirmOptions> {
        self.broker.with(|broker| broker.pending().cloned())
    }

    pub fn is_open_untracked(&self) -> bool {
        self.broker.with_untracked(ConfirmBroker::is_pending)
    }
}

/// Fetch the confirmation handle from context.
///
/// # Panics
///
/// Panics when called outside a [`ConfirmProvider`].
pub fn use_confirm() -> Confirm {
    expect_context::<Confirm>()
}

/// Provides [`Confirm`] to `children` and renders the modal after them.
#[component]
pub fn ConfirmProvider(children: Children) -> impl IntoView {
    let confirm = Confirm::new();
    provide_context(confirm);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && confirm.is_open_untracked() {
                ev.prevent_default();
                confirm.cancel();
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        {children()}
        {move || confirm.current().map(|options| view! { <ConfirmModal confirm=confirm options=options/> })}
    }
}

#[component]
fn ConfirmModal(confirm: Confirm, options: ConfirmOptions) -> impl IntoView {
    let ConfirmOptions { title, message, confirm_label, cancel_label, severity } = options;

    view! {
        <div class="dialog-backdrop" on:click=move |_| confirm.cancel()>
            <div
                class="dialog confirm-dialog"
                role="alertdialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
            >
                {title.map(|t| view! { <h2 class="confirm-dialog__title">{t}</h2> })}
                <p class=message_class(severity)>{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| confirm.cancel()>
                        {cancel_label}
                    </button>
                    <button class=confirm_button_class(severity) on:click=move |_| confirm.resolve(true)>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn confirm_button_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Danger => "btn btn--danger",
        Severity::Warning => "btn btn--warning",
        Severity::Info => "btn btn--primary",
    }
}

fn message_class(severity: Severity) -> String {
    format!("confirm-dialog__message confirm-dialog__message--{}", severity.as_str())
}
