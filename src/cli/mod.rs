//! Command-line interface for studyfocus.

pub mod args;
pub mod commands;
