//! Session and page-load state.
//!
//! DESIGN
//! ======
//! `session` holds the plain session value and its ticketed store; `provider`
//! wraps that store in a reactive context with the login/signup/logout
//! operations. `remote` is the load state pages keep for their own fetches.

pub mod provider;
pub mod remote;
pub mod session;
