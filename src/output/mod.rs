//! Output formatting for studyfocus.
//!
//! This module provides formatters for displaying sessions and events in
//! various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::StudyError;
use crate::features::analytics::StudyReport;
use crate::features::focus::{StudyEvent, StudySession};

pub use json::*;
pub use pretty::*;

/// Format sessions based on output format
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_sessions(
    sessions: &[&StudySession],
    title: &str,
    format: OutputFormat,
) -> Result<String, StudyError> {
    match format {
        OutputFormat::Pretty => Ok(format_sessions_pretty(sessions, title)),
        OutputFormat::Json => format_sessions_json(sessions),
    }
}

/// Format captured events based on output format
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_events(events: &[StudyEvent], format: OutputFormat) -> Result<String, StudyError> {
    match format {
        OutputFormat::Pretty => Ok(format_events_pretty(events)),
        OutputFormat::Json => format_events_json(events),
    }
}

/// Format a study report based on output format
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_report(report: &StudyReport, format: OutputFormat) -> Result<String, StudyError> {
    match format {
        OutputFormat::Pretty => Ok(report.format()),
        OutputFormat::Json => to_json(report),
    }
}
