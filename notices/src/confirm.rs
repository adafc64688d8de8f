//! Confirmation broker: an awaitable yes/no question for the user.
//!
//! DESIGN
//! ======
//! The broker holds at most one pending request. Callers get a
//! [`Confirmation`] future back from [`ConfirmBroker::request`]; the
//! presentation layer reads [`ConfirmBroker::pending`] to render a modal and
//! calls [`ConfirmBroker::resolve`] when the user answers.
//!
//! A request that arrives while another is pending supersedes it: the earlier
//! future settles with `false` as if the user had cancelled. Dropping the
//! broker settles any pending future with `false` too, so a `Confirmation`
//! never hangs once its broker is gone.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::channel::oneshot;

/// Presentation hint for the confirm button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    Danger,
    #[default]
    Warning,
    Info,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// What to ask and how to label the answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub title: Option<String>,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub severity: Severity,
}

impl ConfirmOptions {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            confirm_label: "OK".to_owned(),
            cancel_label: "Cancel".to_owned(),
            severity: Severity::default(),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    #[must_use]
    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Shorthand for a destructive action.
    #[must_use]
    pub fn danger(self) -> Self {
        self.severity(Severity::Danger)
    }
}

/// Identifier of a confirmation request, unique per broker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfirmId(u64);

impl fmt::Display for ConfirmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "confirm-{}", self.0)
    }
}

/// Future returned by [`ConfirmBroker::request`].
///
/// Resolves to `true` when the user confirms and `false` on cancel, backdrop
/// dismissal, supersession or broker teardown.
#[derive(Debug)]
#[must_use = "a confirmation does nothing unless awaited"]
pub struct Confirmation {
    rx: oneshot::Receiver<bool>,
}

impl Confirmation {
    /// A confirmation that is already answered.
    pub fn settled(answer: bool) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(answer);
        Self { rx }
    }
}

impl Future for Confirmation {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        // A dropped sender means the request was abandoned: treat as cancel.
        self.rx.poll_unpin(cx).map(|answer| answer.unwrap_or(false))
    }
}

#[derive(Debug)]
struct Pending {
    id: ConfirmId,
    options: ConfirmOptions,
    resolver: oneshot::Sender<bool>,
}

/// Single-slot holder of the outstanding confirmation request.
#[derive(Debug, Default)]
pub struct ConfirmBroker {
    pending: Option<Pending>,
    next_id: u64,
}

impl ConfirmBroker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the user a question. Supersedes any request still pending.
    pub fn request(&mut self, options: ConfirmOptions) -> Confirmation {
        if let Some(previous) = self.pending.take() {
            log::warn!("{} superseded before the user answered; settling as cancelled", previous.id);
            let _ = previous.resolver.send(false);
        }

        self.next_id += 1;
        let id = ConfirmId(self.next_id);
        let (resolver, rx) = oneshot::channel();
        log::debug!("{id} requested: {}", options.message);
        self.pending = Some(Pending { id, options, resolver });
        Confirmation { rx }
    }

    /// Deliver the user's answer and clear the slot.
    ///
    /// Returns `false` without doing anything when no request is pending.
    pub fn resolve(&mut self, answer: bool) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        log::debug!("{} resolved: {answer}", pending.id);
        // The caller may have stopped awaiting; an unread answer is fine.
        let _ = pending.resolver.send(answer);
        true
    }

    /// Cancel the pending request (backdrop click, Escape).
    pub fn cancel(&mut self) -> bool {
        self.resolve(false)
    }

    #[must_use]
    pub fn pending(&self) -> Option<&ConfirmOptions> {
        self.pending.as_ref().map(|p| &p.options)
    }

    #[must_use]
    pub fn pending_id(&self) -> Option<ConfirmId> {
        self.pending.as_ref().map(|p| p.id)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
