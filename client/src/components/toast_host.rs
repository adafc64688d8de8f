//! Toast provider, context handle, and stack renderer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ToastProvider` wraps the app root and owns the only `ToastQueue`. Any
//! component grabs the `Toasts` handle with [`use_toasts`] and fires
//! notifications without managing timers or DOM cleanup. In the browser each
//! toast gets its own expiry task; dismissing early leaves that task harmless
//! because removal is idempotent.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;
use notices::{Scheduled, Toast, ToastId, ToastKind, ToastQueue, ToastSpec};

/// Handle to the app's toast queue.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Toasts {
    pub(crate) fn new() -> Self {
        Self { queue: RwSignal::new(ToastQueue::new()) }
    }

    /// Show a toast. Returns `None` once the provider has been torn down.
    pub fn add(&self, spec: ToastSpec) -> Option<ToastId> {
        let scheduled = self.queue.try_update(|q| q.add(spec))?;
        self.schedule_expiry(scheduled);
        Some(scheduled.id)
    }

    /// Dismiss a toast; unknown ids are ignored.
    pub fn remove(&self, id: ToastId) {
        self.queue.try_update(|q| {
            q.remove(id);
        });
    }

    /// Dismiss every toast, e.g. when the session ends.
    pub fn clear(&self) {
        self.queue.try_update(ToastQueue::clear);
    }

    pub fn success(&self, title: impl Into<String>) {
        self.add(ToastSpec::success(title));
    }

    pub fn info(&self, title: impl Into<String>) {
        self.add(ToastSpec::info(title));
    }

    pub fn warning(&self, title: impl Into<String>, message: impl Into<String>) {
        self.add(ToastSpec::warning(title).with_message(message));
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.add(ToastSpec::error(title).with_message(message));
    }

    /// Active toasts, oldest first. Tracked.
    pub fn active(&self) -> Vec<Toast> {
        self.queue.with(|q| q.iter().cloned().collect())
    }

    fn schedule_expiry(&self, scheduled: Scheduled) {
        #[cfg(feature = "hydrate")]
        {
            if scheduled.expires_in.is_none() {
                return;
            }
            let queue = self.queue;
            leptos::task::spawn_local(notices::expire_after(scheduled, gloo_timers::future::sleep, move |id| {
                queue.try_update(|q| {
                    q.remove(id);
                });
            }));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = scheduled;
        }
    }
}

/// Fetch the toast handle from context.
///
/// # Panics
///
/// Panics when called outside a [`ToastProvider`].
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Provides [`Toasts`] to `children` and renders the toast stack after them.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = Toasts::new();
    provide_context(toasts);

    view! {
        {children()}
        <ToastStack toasts=toasts/>
    }
}

#[component]
fn ToastStack(toasts: Toasts) -> impl IntoView {
    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.active()
                key=|toast| toast.id
                children=move |toast: Toast| view! { <ToastCard toast=toast toasts=toasts/> }
            />
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast, toasts: Toasts) -> impl IntoView {
    let Toast { id, kind, title, message, .. } = toast;

    // Rendered with the entering modifier, then dropped a frame later so the
    // CSS transition runs.
    let entering = RwSignal::new(true);
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(16, move || {
        let _ = entering.try_set(false);
    })
    .forget();

    view! {
        <div class=move || toast_class(kind, entering.get()) role=toast_role(kind)>
            <span class="toast__icon" aria-hidden="true">{toast_icon(kind)}</span>
            <div class="toast__body">
                <p class="toast__title">{title}</p>
                {message.map(|m| view! { <p class="toast__message">{m}</p> })}
            </div>
            <button class="toast__close" title="Dismiss" on:click=move |_| toasts.remove(id)>
                "✕"
            </button>
        </div>
    }
}

fn toast_class(kind: ToastKind, entering: bool) -> String {
    let mut class = format!("toast toast--{}", kind.as_str());
    if entering {
        class.push_str(" toast--entering");
    }
    class
}

/// Errors interrupt screen readers; everything else waits its turn.
fn toast_role(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Error => "alert",
        _ => "status",
    }
}

fn toast_icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✓",
        ToastKind::Error => "✕",
        ToastKind::Warning => "!",
        ToastKind::Info => "i",
    }
}
