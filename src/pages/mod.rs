//! Routed page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `login` is the only public page. Every other page renders behind the
//! authorization gate and inside the layout, and reads the session provider
//! from context for its client and the caller's role.

pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod prospect_form;
pub mod report;
pub mod sales_report;
pub mod team_report;
pub mod user_data;
