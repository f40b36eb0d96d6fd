//! Feature implementations for studyfocus.
//!
//! - Focus tracking: records, sessions, registry, notifiers
//! - Analytics: reports and session log replay

pub mod analytics;
pub mod focus;
