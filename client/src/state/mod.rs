//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `ui`) so individual components can
//! depend on small focused models. Notification state lives in the providers
//! under `components`.

pub mod auth;
pub mod ui;
