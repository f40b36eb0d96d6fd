//! Command implementations for studyfocus.
//!
//! Each command returns the text to print; `main` does the printing.

mod demo;
mod replay;

pub use demo::{demo, DEMO_START_TIME};
pub use replay::{replay, report};
