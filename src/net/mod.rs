//! Networking modules for the CRM REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` is the generic resource accessor, `api` holds per-entity wrappers,
//! `types` defines the wire schema, and `error` the shared failure taxonomy.

pub mod api;
pub mod client;
pub mod error;
pub mod types;
