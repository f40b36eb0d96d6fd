//! Error types for studyfocus.

use thiserror::Error;

/// Errors produced by studyfocus.
///
/// The session model itself never fails; these variants cover the edges
/// around it: configuration, session logs, notifier sinks, and lookups made
/// through the registry's fallible helpers.
#[derive(Debug, Error)]
pub enum StudyError {
    /// Configuration could not be resolved, read, or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input rejected at a boundary (for example a negative duration).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No session is registered under the given id.
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// A notifier failed to deliver an event.
    #[error("Notification failed: {0}")]
    Notification(String),

    /// I/O failure while reading a session log or config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML (de)serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl StudyError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) | Self::SessionNotFound(_) => 2,
            _ => 1,
        }
    }
}
