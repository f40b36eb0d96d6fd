//! Focus records.
//!
//! A focus record is one timestamped interval of concentrated study time.

use serde::{Deserialize, Serialize};

/// How a focus interval was timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusMode {
    /// Fixed-length countdown interval
    Pomodoro,
    /// Open-ended count-up interval
    Stopwatch,
}

impl FocusMode {
    /// Parse a focus mode from string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pomodoro" | "pomo" | "p" => Some(Self::Pomodoro),
            "stopwatch" | "sw" | "s" => Some(Self::Stopwatch),
            _ => None,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Pomodoro => "Pomodoro",
            Self::Stopwatch => "Stopwatch",
        }
    }
}

impl std::fmt::Display for FocusMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Caller-supplied description of a focus interval, before it is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusEntry {
    /// Focus time in seconds
    pub focus_seconds: u64,
    /// When the interval was recorded (ISO-8601, not validated)
    pub timestamp: String,
    /// What was studied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// How the interval was timed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<FocusMode>,
}

impl FocusEntry {
    /// Create an entry with no subject or mode.
    #[must_use]
    pub fn new(focus_seconds: u64, timestamp: impl Into<String>) -> Self {
        Self {
            focus_seconds,
            timestamp: timestamp.into(),
            subject: None,
            mode: None,
        }
    }

    /// Set the subject.
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the focus mode.
    #[must_use]
    pub const fn mode(mut self, mode: FocusMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// An immutable, recorded focus interval.
///
/// Records are only created by [`StudySession`](super::StudySession) when an
/// entry is appended, and have no mutators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusRecord {
    timestamp: String,
    focus_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<FocusMode>,
}

impl FocusRecord {
    pub(crate) fn from_entry(entry: FocusEntry) -> Self {
        Self {
            timestamp: entry.timestamp,
            focus_seconds: entry.focus_seconds,
            subject: entry.subject,
            mode: entry.mode,
        }
    }

    /// Timestamp the interval was recorded at, exactly as supplied.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Focus duration in seconds.
    #[must_use]
    pub const fn focus_seconds(&self) -> u64 {
        self.focus_seconds
    }

    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    #[must_use]
    pub const fn mode(&self) -> Option<FocusMode> {
        self.mode
    }
}

impl std::fmt::Display for FocusRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s at {}", self.focus_seconds, self.timestamp)?;
        if let Some(ref subject) = self.subject {
            write!(f, " on {subject}")?;
        }
        if let Some(mode) = self.mode {
            write!(f, " ({mode})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_mode_parse() {
        assert_eq!(FocusMode::parse("pomodoro"), Some(FocusMode::Pomodoro));
        assert_eq!(FocusMode::parse("POMO"), Some(FocusMode::Pomodoro));
        assert_eq!(FocusMode::parse("stopwatch"), Some(FocusMode::Stopwatch));
        assert_eq!(FocusMode::parse("sw"), Some(FocusMode::Stopwatch));
        assert_eq!(FocusMode::parse("lap"), None);
    }

    #[test]
    fn test_record_from_entry() {
        let entry = FocusEntry::new(1500, "2025-02-05T16:52:53+05:30")
            .subject("Calculus")
            .mode(FocusMode::Pomodoro);
        let record = FocusRecord::from_entry(entry);

        assert_eq!(record.focus_seconds(), 1500);
        assert_eq!(record.timestamp(), "2025-02-05T16:52:53+05:30");
        assert_eq!(record.subject(), Some("Calculus"));
        assert_eq!(record.mode(), Some(FocusMode::Pomodoro));
    }

    #[test]
    fn test_malformed_timestamp_is_kept_verbatim() {
        let record = FocusRecord::from_entry(FocusEntry::new(60, "not a date"));
        assert_eq!(record.timestamp(), "not a date");
    }

    #[test]
    fn test_record_display() {
        let record = FocusRecord::from_entry(FocusEntry::new(1800, "2025-02-05T17:00:00Z"));
        assert_eq!(record.to_string(), "1800s at 2025-02-05T17:00:00Z");

        let record = FocusRecord::from_entry(
            FocusEntry::new(300, "t").subject("Physics").mode(FocusMode::Stopwatch),
        );
        assert_eq!(record.to_string(), "300s at t on Physics (Stopwatch)");
    }

    #[test]
    fn test_entry_deserialize_defaults() {
        let entry: FocusEntry =
            serde_json::from_str(r#"{"focus_seconds": 900, "timestamp": "t"}"#).unwrap();
        assert_eq!(entry, FocusEntry::new(900, "t"));
    }
}
