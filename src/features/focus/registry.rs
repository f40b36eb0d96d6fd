//! Session registry.
//!
//! Owns registered study sessions, keyed by session id.

use std::collections::HashMap;
use std::sync::Arc;

use super::notify::{default_notifier, dispatch, Notifier, StudyEvent};
use super::record::{FocusEntry, FocusRecord};
use super::session::StudySession;
use crate::error::StudyError;

/// Registry of study sessions.
///
/// Listing follows insertion order. Registering an id that is already present
/// replaces the stored session in place, so the id keeps its original slot.
pub struct SessionRegistry {
    sessions: Vec<StudySession>,
    index: HashMap<String, usize>,
    notifier: Arc<dyn Notifier>,
}

impl SessionRegistry {
    /// Create an empty registry that logs through `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_notifier(default_notifier())
    }

    /// Create an empty registry reporting to the given notifier.
    #[must_use]
    pub fn with_notifier(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            sessions: Vec::new(),
            index: HashMap::new(),
            notifier,
        }
    }

    /// Register a session, replacing any session with the same id.
    ///
    /// Returns the stored session so the caller can keep appending to it.
    pub fn register(&mut self, session: StudySession) -> &mut StudySession {
        let event = StudyEvent::SessionRegistered {
            session_id: session.session_id().to_string(),
            start_time: session.start_time().to_string(),
        };

        let existing = self.index.get(session.session_id()).copied();
        let slot = match existing {
            Some(slot) => {
                tracing::debug!(session_id = session.session_id(), "replacing registered session");
                self.sessions[slot] = session;
                slot
            }
            None => {
                let slot = self.sessions.len();
                self.index.insert(session.session_id().to_string(), slot);
                self.sessions.push(session);
                slot
            }
        };

        dispatch(self.notifier.as_ref(), &event);
        &mut self.sessions[slot]
    }

    /// Look up a session by id.
    #[must_use]
    pub fn get(&self, session_id: &str) -> Option<&StudySession> {
        self.index.get(session_id).map(|&slot| &self.sessions[slot])
    }

    /// Look up a session by id for appending.
    pub fn get_mut(&mut self, session_id: &str) -> Option<&mut StudySession> {
        let slot = *self.index.get(session_id)?;
        Some(&mut self.sessions[slot])
    }

    /// All registered sessions, in registration order.
    #[must_use]
    pub fn list_all(&self) -> Vec<&StudySession> {
        self.sessions.iter().collect()
    }

    /// Iterate over registered sessions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StudySession> {
        self.sessions.iter()
    }

    /// Append a focus entry to a registered session.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::SessionNotFound` if no session has this id.
    pub fn append_focus(
        &mut self,
        session_id: &str,
        entry: FocusEntry,
    ) -> Result<&FocusRecord, StudyError> {
        let session = self
            .get_mut(session_id)
            .ok_or_else(|| StudyError::SessionNotFound(session_id.to_string()))?;
        Ok(session.append_entry(entry))
    }

    /// Remove a session, returning it if it was registered.
    pub fn remove(&mut self, session_id: &str) -> Option<StudySession> {
        let slot = self.index.remove(session_id)?;
        let removed = self.sessions.remove(slot);
        for later in self.index.values_mut().filter(|s| **s > slot) {
            *later -= 1;
        }
        Some(removed)
    }

    #[must_use]
    pub fn contains(&self, session_id: &str) -> bool {
        self.index.contains_key(session_id)
    }

    /// Number of registered sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("sessions", &self.sessions)
            .finish_non_exhaustive()
    }
}
