//! Demo command implementation.
//!
//! Records a sample study session end to end: create, register, append.

use std::sync::Arc;

use chrono::{Local, SecondsFormat};

use crate::cli::args::{DemoArgs, OutputFormat};
use crate::config::Config;
use crate::error::StudyError;
use crate::features::focus::{
    parse_duration, EventLog, FocusEntry, FocusMode, LogNotifier, Notifier, SessionRegistry,
    StudySession,
};
use crate::output::{format_events, format_sessions};

/// Start time used when neither --start nor --now is given.
pub const DEMO_START_TIME: &str = "2025-02-05T16:52:53+05:30";

/// Execute the demo command.
///
/// # Errors
///
/// Returns `StudyError::InvalidInput` for an unparseable duration or mode.
pub fn demo(config: &Config, args: DemoArgs, format: OutputFormat) -> Result<String, StudyError> {
    let start_time = resolve_start_time(&args);

    let durations = if args.durations.is_empty() {
        config.focus.demo_durations.clone()
    } else {
        args.durations
    };
    let seconds = durations
        .iter()
        .map(|d| {
            parse_duration(d)
                .ok_or_else(|| StudyError::InvalidInput(format!("invalid duration '{d}'")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mode = args
        .mode
        .as_deref()
        .map(|m| {
            FocusMode::parse(m)
                .ok_or_else(|| StudyError::InvalidInput(format!("unknown focus mode '{m}'")))
        })
        .transpose()?
        .or(config.focus.default_mode);

    let events = EventLog::new();
    let notifier: Arc<dyn Notifier> = if args.events {
        Arc::new(events.clone())
    } else {
        Arc::new(LogNotifier)
    };

    let mut registry = SessionRegistry::with_notifier(Arc::clone(&notifier));
    let session = StudySession::with_notifier(args.session_id, start_time.clone(), notifier);
    let stored = registry.register(session);

    for secs in seconds {
        let mut entry = FocusEntry::new(secs, start_time.clone());
        entry.subject.clone_from(&args.subject);
        entry.mode = mode;
        stored.append_entry(entry);
    }

    if args.events {
        return format_events(&events.events(), format);
    }

    format_sessions(&registry.list_all(), "Current Study Sessions", format)
}

/// The caller-side clock: the core only ever sees the formatted string.
fn resolve_start_time(args: &DemoArgs) -> String {
    if args.now {
        Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
    } else {
        args.start
            .clone()
            .unwrap_or_else(|| DEMO_START_TIME.to_string())
    }
}
