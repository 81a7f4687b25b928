//! UI components shared across routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `protected_route` is the authorization gate mounted above every signed-in
//! route; `layout` and its sidebar/navbar frame those routes. The rest are
//! small presentation pieces shared by pages.

pub mod call_log_table;
pub mod layout;
pub mod loading;
pub mod modal;
pub mod navbar;
pub mod protected_route;
pub mod sidebar;
