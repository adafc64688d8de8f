//! Networking modules for the business REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and error mapping; `types` defines the JSON
//! schema shared with the API.

pub mod api;
pub mod types;
