//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and the notification surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod nav_bar;
pub mod toast_host;
