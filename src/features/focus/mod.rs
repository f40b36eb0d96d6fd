//! Focus tracking: records, sessions, and the session registry.
//!
//! - Immutable focus records appended to study sessions
//! - Injectable notifiers observing every change
//! - A registry owning sessions by id, listed in registration order

pub mod duration;
pub mod notify;
pub mod record;
pub mod registry;
pub mod session;

pub use duration::{format_seconds, parse_duration, render_bar};
pub use notify::{EventLog, FnNotifier, LogNotifier, Notifier, NullNotifier, StudyEvent};
pub use record::{FocusEntry, FocusMode, FocusRecord};
pub use registry::SessionRegistry;
pub use session::StudySession;
