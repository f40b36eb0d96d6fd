//! JSON output formatting for studyfocus.

use serde::Serialize;
use serde_json::json;

use crate::error::StudyError;
use crate::features::focus::{StudyEvent, StudySession};

/// Format sessions as JSON
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_sessions_json(sessions: &[&StudySession]) -> Result<String, StudyError> {
    let output = json!({
        "count": sessions.len(),
        "items": sessions
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format captured events as JSON
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_events_json(events: &[StudyEvent]) -> Result<String, StudyError> {
    let output = json!({
        "count": events.len(),
        "events": events
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, StudyError> {
    Ok(serde_json::to_string_pretty(value)?)
}
