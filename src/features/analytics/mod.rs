//! Study analytics.
//!
//! Builds reports from registered sessions and replays session logs:
//! - Totals, averages, and longest interval
//! - Breakdowns by subject, mode, day, and session
//! - YAML/JSON session logs replayed through the session API

pub mod replay;
pub mod report;

pub use replay::{LoggedFocus, LoggedSession, ReplaySummary, SessionLog};
pub use report::{
    DailyFocusTime, ModeFocusTime, SessionFocusTime, StudyReport, SubjectFocusTime,
};
