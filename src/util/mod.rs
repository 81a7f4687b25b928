//! Helpers with no reactive state of their own.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gate` holds the authorization decisions the route wrapper and login page
//! share, `token_store` the only `localStorage` access, and `format` the
//! table-cell formatting used by every page.

pub mod format;
pub mod gate;
pub mod token_store;
