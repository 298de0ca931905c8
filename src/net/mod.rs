//! Networking modules for the portfolio HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the gateway (base address, credential forwarding, verb helpers,
//! auth endpoints), `content` covers the per-resource content endpoints,
//! `error` defines the failure taxonomy, and `types` the wire schema.

pub mod api;
pub mod content;
pub mod error;
pub mod types;
