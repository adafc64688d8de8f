//! Toast queue: ordered, time-boxed status messages.
//!
//! DESIGN
//! ======
//! The queue only tracks which toasts are active. Expiry is scheduled by the
//! owner (browser timer, tokio timer) through [`expire_after`], which calls
//! back into [`ToastQueue::remove`]. Because removal is idempotent, a timer
//! that fires after the user already dismissed its toast is inert.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::fmt;
use std::future::Future;
use std::time::Duration;

/// Lifetime applied when a toast does not ask for one.
pub const DEFAULT_TTL: Duration = Duration::from_millis(5000);

/// Identifier of a toast within its queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// Lowercase name, used for CSS modifiers and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// How long a toast stays visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ttl {
    /// [`DEFAULT_TTL`].
    #[default]
    Default,
    /// Stays until dismissed.
    Persistent,
    /// Removed after the given duration.
    After(Duration),
}

impl Ttl {
    /// Millisecond form used by API-facing callers; `0` means persistent.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 { Self::Persistent } else { Self::After(Duration::from_millis(ms)) }
    }

    /// Delay before automatic removal, or `None` when the toast persists.
    #[must_use]
    pub fn delay(self) -> Option<Duration> {
        match self {
            Self::Default => Some(DEFAULT_TTL),
            Self::Persistent => None,
            Self::After(d) if d.is_zero() => None,
            Self::After(d) => Some(d),
        }
    }
}

/// Request to show a toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastSpec {
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
    pub ttl: Ttl,
}

impl ToastSpec {
    #[must_use]
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self { kind, title: title.into(), message: None, ttl: Ttl::Default }
    }

    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title)
    }

    #[must_use]
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title)
    }

    #[must_use]
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, title)
    }

    #[must_use]
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title)
    }

    /// Attach a body line under the title.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: Ttl) -> Self {
        self.ttl = ttl;
        self
    }

    /// Keep the toast until the user dismisses it.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.with_ttl(Ttl::Persistent)
    }
}

/// An active toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
    pub ttl: Ttl,
}

/// Result of [`ToastQueue::add`]: the new id and when it should expire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub id: ToastId,
    /// `None` for persistent toasts.
    pub expires_in: Option<Duration>,
}

/// Active toasts in insertion order (oldest first).
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return its id with the expiry the owner must schedule.
    pub fn add(&mut self, spec: ToastSpec) -> Scheduled {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        let expires_in = spec.ttl.delay();
        log::debug!("{id} added ({}): {}", spec.kind.as_str(), spec.title);
        self.items.push(Toast { id, kind: spec.kind, title: spec.title, message: spec.message, ttl: spec.ttl });
        Scheduled { id, expires_in }
    }

    /// Remove a toast. Returns `false` (and changes nothing) for unknown ids.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let Some(pos) = self.items.iter().position(|t| t.id == id) else {
            return false;
        };
        self.items.remove(pos);
        log::debug!("{id} removed");
        true
    }

    #[cfg(test)]
    pub(crate) fn get(&self, id: ToastId) -> Option<&Toast> {
        self.items.iter().find(|t| t.id == id)
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every active toast. Pending timers for them become inert; ids keep
    /// counting up.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Wait out a toast's lifetime, then hand its id to `expire`.
///
/// `sleep` is the runtime's delay function, e.g. `gloo_timers::future::sleep`
/// in the browser or `tokio::time::sleep` natively. Persistent toasts return
/// immediately without calling `expire`.
pub async fn expire_after<S, Fut, F>(scheduled: Scheduled, sleep: S, expire: F)
where
    S: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
    F: FnOnce(ToastId),
{
    let Some(delay) = scheduled.expires_in else {
        return;
    };
    sleep(delay).await;
    expire(scheduled.id);
}
