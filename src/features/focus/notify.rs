//! Notification hooks for session changes.
//!
//! Sessions and registries report every state change to an injected
//! [`Notifier`]. The default [`LogNotifier`] writes a `tracing` event; tests
//! and the CLI capture events with [`EventLog`] instead.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record::FocusRecord;
use crate::error::StudyError;

/// A change observed by a notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StudyEvent {
    /// A session was added to (or replaced in) a registry.
    SessionRegistered {
        /// Id of the registered session
        session_id: String,
        /// Session start time as supplied by the caller
        start_time: String,
    },
    /// A focus record was appended to a session.
    FocusRecorded {
        /// Id of the session the record belongs to
        session_id: String,
        /// The appended record
        record: FocusRecord,
    },
}

impl StudyEvent {
    /// Id of the session this event concerns.
    #[must_use]
    pub fn session_id(&self) -> &str {
        match self {
            Self::SessionRegistered { session_id, .. } | Self::FocusRecorded { session_id, .. } => {
                session_id
            }
        }
    }
}

impl std::fmt::Display for StudyEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SessionRegistered {
                session_id,
                start_time,
            } => write!(f, "[Study Log] Session {session_id} started at {start_time}"),
            Self::FocusRecorded { session_id, record } => write!(
                f,
                "[Analytics Sync] Session {session_id}: added {}s focus at {}",
                record.focus_seconds(),
                record.timestamp()
            ),
        }
    }
}

/// Receiver for [`StudyEvent`]s.
///
/// Delivery is fire-and-forget: callers log and discard any error returned
/// here, so a failing sink never interrupts record keeping.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Deliver an event.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Notification` if the sink could not accept the event.
    fn notify(&self, event: &StudyEvent) -> Result<(), StudyError>;
}

/// Emit an event, swallowing delivery failures.
pub(crate) fn dispatch(notifier: &dyn Notifier, event: &StudyEvent) {
    if let Err(e) = notifier.notify(event) {
        tracing::warn!(session_id = event.session_id(), error = %e, "notification dropped");
    }
}

/// Notifier that writes each event as a structured `tracing` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: &StudyEvent) -> Result<(), StudyError> {
        match event {
            StudyEvent::SessionRegistered {
                session_id,
                start_time,
            } => {
                tracing::info!(%session_id, %start_time, "session registered");
            }
            StudyEvent::FocusRecorded { session_id, record } => {
                tracing::info!(
                    %session_id,
                    timestamp = record.timestamp(),
                    focus_seconds = record.focus_seconds(),
                    subject = record.subject(),
                    "focus recorded"
                );
            }
        }
        Ok(())
    }
}

/// Notifier that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: &StudyEvent) -> Result<(), StudyError> {
        Ok(())
    }
}

/// In-memory event capture.
///
/// Clones share the same buffer, so one handle can be injected into sessions
/// while another is kept to inspect what was emitted.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<StudyEvent>>>,
}

impl EventLog {
    /// Create an empty event log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<StudyEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Number of captured events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for EventLog {
    fn notify(&self, event: &StudyEvent) -> Result<(), StudyError> {
        let mut events = self
            .events
            .lock()
            .map_err(|e| StudyError::Notification(format!("event log poisoned: {e}")))?;
        events.push(event.clone());
        Ok(())
    }
}

/// Adapter turning a closure into a [`Notifier`].
pub struct FnNotifier<F>(F);

impl<F> FnNotifier<F>
where
    F: Fn(&StudyEvent) + Send + Sync,
{
    /// Wrap a callback.
    pub const fn new(callback: F) -> Self {
        Self(callback)
    }
}

impl<F> Notifier for FnNotifier<F>
where
    F: Fn(&StudyEvent) + Send + Sync,
{
    fn notify(&self, event: &StudyEvent) -> Result<(), StudyError> {
        (self.0)(event);
        Ok(())
    }
}

/// Shared default notifier.
#[must_use]
pub fn default_notifier() -> Arc<dyn Notifier> {
    Arc::new(LogNotifier)
}
