//! Session logs.
//!
//! A session log is a YAML or JSON document describing study sessions and
//! the focus intervals recorded in them. Replaying a log drives the regular
//! session API, so every registration and append is notified as usual.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::FocusConfig;
use crate::error::StudyError;
use crate::features::focus::{FocusEntry, FocusMode, Notifier, SessionRegistry, StudySession};

/// A session log document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    /// Sessions in the order they should be registered
    #[serde(default)]
    pub sessions: Vec<LoggedSession>,
}

/// A session as written in a log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedSession {
    pub session_id: String,
    pub start_time: String,
    /// Focus intervals in append order
    #[serde(default)]
    pub focus: Vec<LoggedFocus>,
}

/// A focus interval as written in a log.
///
/// Durations are signed here so that negative values can be reported
/// instead of failing to parse. A log can therefore hold at most `i64::MAX`
/// seconds per entry; larger values fail to parse as a YAML or JSON error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedFocus {
    pub focus_seconds: i64,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<FocusMode>,
}

/// Counts from a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    /// Sessions registered (including replacements)
    pub sessions: usize,
    /// Focus records appended
    pub records: usize,
}

impl SessionLog {
    /// Parse a log, detecting JSON by a leading `{` and reading YAML otherwise.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Json` or `StudyError::Yaml` if the text is malformed.
    pub fn parse(text: &str) -> Result<Self, StudyError> {
        if text.trim_start().starts_with('{') {
            Ok(serde_json::from_str(text)?)
        } else if text.trim().is_empty() {
            Ok(Self::default())
        } else {
            Ok(serde_yaml::from_str(text)?)
        }
    }

    /// Replay the log into a registry.
    ///
    /// Every entry is validated before anything is registered, so a rejected
    /// log leaves the registry untouched.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::InvalidInput` if an entry has a negative duration
    /// and the policy is `reject`.
    pub fn replay(
        &self,
        registry: &mut SessionRegistry,
        notifier: &Arc<dyn Notifier>,
        config: &FocusConfig,
    ) -> Result<ReplaySummary, StudyError> {
        let prepared = self
            .sessions
            .iter()
            .map(|session| {
                let entries = session
                    .focus
                    .iter()
                    .map(|focus| focus.to_entry(config))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| match e {
                        StudyError::InvalidInput(msg) => StudyError::InvalidInput(format!(
                            "session {}: {msg}",
                            session.session_id
                        )),
                        other => other,
                    })?;
                Ok((session, entries))
            })
            .collect::<Result<Vec<_>, StudyError>>()?;

        let mut summary = ReplaySummary::default();
        for (logged, entries) in prepared {
            let session = StudySession::with_notifier(
                logged.session_id.clone(),
                logged.start_time.clone(),
                Arc::clone(notifier),
            );
            let stored = registry.register(session);
            summary.sessions += 1;

            for entry in entries {
                stored.append_entry(entry);
                summary.records += 1;
            }
        }

        tracing::debug!(
            sessions = summary.sessions,
            records = summary.records,
            "session log replayed"
        );
        Ok(summary)
    }
}

impl LoggedFocus {
    fn to_entry(&self, config: &FocusConfig) -> Result<FocusEntry, StudyError> {
        let focus_seconds = config.negative_durations.apply(self.focus_seconds)?;
        Ok(FocusEntry {
            focus_seconds,
            timestamp: self.timestamp.clone(),
            subject: self.subject.clone(),
            mode: self.mode.or(config.default_mode),
        })
    }
}
