//! UI notification primitives shared by the storefront client.
//!
//! This crate owns the state behind two coordination patterns:
//!
//! - [`toast::ToastQueue`]: transient status messages with independent expiry.
//! - [`confirm::ConfirmBroker`]: a single-slot yes/no request whose answer is
//!   delivered to the caller as a future.
//!
//! Nothing here depends on a UI framework or an async runtime. Providers in the
//! client own one instance of each and drive rendering and timers around them.

pub mod confirm;
pub mod toast;

pub use confirm::{ConfirmBroker, ConfirmId, ConfirmOptions, Confirmation, Severity};
pub use toast::{Scheduled, Toast, ToastId, ToastKind, ToastQueue, ToastSpec, Ttl, expire_after};
