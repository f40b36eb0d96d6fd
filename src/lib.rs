//! studyfocus - study session tracking
//!
//! This crate models study sessions as ordered, timestamped focus records
//! kept in an explicit session registry. Every change is reported to an
//! injectable [`Notifier`](features::focus::Notifier), and registered
//! sessions can be summarised into a [`StudyReport`](features::analytics::StudyReport).

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::StudyError;
pub use features::focus::{FocusRecord, SessionRegistry, StudySession};
