//! Study session management.
//!
//! A study session accumulates focus records in the order they are appended
//! and reports each append to its notifier.

use std::sync::Arc;

use serde::Serialize;

use super::notify::{default_notifier, dispatch, Notifier, StudyEvent};
use super::record::{FocusEntry, FocusRecord};

/// A study session.
#[derive(Clone, Serialize)]
pub struct StudySession {
    session_id: String,
    start_time: String,
    focus_records: Vec<FocusRecord>,
    #[serde(skip)]
    notifier: Arc<dyn Notifier>,
}

impl StudySession {
    /// Create a session that logs through `tracing`.
    #[must_use]
    pub fn new(session_id: impl Into<String>, start_time: impl Into<String>) -> Self {
        Self::with_notifier(session_id, start_time, default_notifier())
    }

    /// Create a session reporting to the given notifier.
    #[must_use]
    pub fn with_notifier(
        session_id: impl Into<String>,
        start_time: impl Into<String>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            start_time: start_time.into(),
            focus_records: Vec::new(),
            notifier,
        }
    }

    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    #[must_use]
    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    /// Recorded focus intervals, in append order.
    #[must_use]
    pub fn focus_records(&self) -> &[FocusRecord] {
        &self.focus_records
    }

    /// Record a focus interval.
    ///
    /// The record is appended after every existing record and then reported
    /// to the notifier.
    pub fn append_focus(
        &mut self,
        focus_seconds: u64,
        timestamp: impl Into<String>,
    ) -> &FocusRecord {
        self.append_entry(FocusEntry::new(focus_seconds, timestamp))
    }

    /// Record a focus interval with optional subject and mode.
    pub fn append_entry(&mut self, entry: FocusEntry) -> &FocusRecord {
        self.focus_records.push(FocusRecord::from_entry(entry));
        let index = self.focus_records.len() - 1;
        self.notify(&self.focus_records[index]);
        &self.focus_records[index]
    }

    /// Report a record to the notifier. Delivery failures are logged and dropped.
    pub fn notify(&self, record: &FocusRecord) {
        let event = StudyEvent::FocusRecorded {
            session_id: self.session_id.clone(),
            record: record.clone(),
        };
        dispatch(self.notifier.as_ref(), &event);
    }

    /// Sum of all recorded focus time, in seconds, saturating at `u64::MAX`.
    #[must_use]
    pub fn total_focus_seconds(&self) -> u64 {
        self.focus_records
            .iter()
            .map(FocusRecord::focus_seconds)
            .fold(0, u64::saturating_add)
    }

    #[must_use]
    pub fn last_record(&self) -> Option<&FocusRecord> {
        self.focus_records.last()
    }

    /// Number of recorded focus intervals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.focus_records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.focus_records.is_empty()
    }
}

impl std::fmt::Debug for StudySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudySession")
            .field("session_id", &self.session_id)
            .field("start_time", &self.start_time)
            .field("focus_records", &self.focus_records)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for StudySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Session {} (started {}) - {} focus records, {}s total",
            self.session_id,
            self.start_time,
            self.focus_records.len(),
            self.total_focus_seconds()
        )
    }
}
