//! Replay and report command implementations.
//!
//! Both commands load a session log and rebuild a registry from it.

use std::io::Read;
use std::sync::Arc;

use crate::cli::args::{OutputFormat, ReplayArgs, ReportArgs};
use crate::config::Config;
use crate::error::StudyError;
use crate::features::analytics::{SessionLog, StudyReport};
use crate::features::focus::{EventLog, LogNotifier, Notifier, NullNotifier, SessionRegistry};
use crate::output::{format_events, format_report, format_sessions};

/// Execute the replay command.
///
/// # Errors
///
/// Returns an error if the log cannot be read, parsed, or replayed, or if
/// `--session` names a session the log does not contain.
pub fn replay(
    config: &Config,
    args: ReplayArgs,
    format: OutputFormat,
) -> Result<String, StudyError> {
    let log = load_log(&args.input)?;

    let events = EventLog::new();
    let notifier: Arc<dyn Notifier> = if args.events {
        Arc::new(events.clone())
    } else {
        Arc::new(LogNotifier)
    };

    let mut registry = SessionRegistry::with_notifier(Arc::clone(&notifier));
    log.replay(&mut registry, &notifier, &config.focus)?;

    if args.events {
        return format_events(&events.events(), format);
    }

    match args.session {
        Some(id) => {
            let session = registry
                .get(&id)
                .ok_or(StudyError::SessionNotFound(id))?;
            format_sessions(&[session], "Study Session", format)
        }
        None => format_sessions(&registry.list_all(), "Study Sessions", format),
    }
}

/// Execute the report command.
///
/// # Errors
///
/// Returns an error if the log cannot be read, parsed, or replayed.
pub fn report(
    config: &Config,
    args: ReportArgs,
    format: OutputFormat,
) -> Result<String, StudyError> {
    let log = load_log(&args.input)?;

    let notifier: Arc<dyn Notifier> = Arc::new(NullNotifier);
    let mut registry = SessionRegistry::with_notifier(Arc::clone(&notifier));
    log.replay(&mut registry, &notifier, &config.focus)?;

    format_report(&StudyReport::generate(&registry), format)
}

/// Read a session log from a path, or from stdin for "-".
fn load_log(input: &str) -> Result<SessionLog, StudyError> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input).map_err(|e| {
            StudyError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to read session log {input}: {e}"),
            ))
        })?
    };

    tracing::debug!(input, bytes = text.len(), "loaded session log");
    SessionLog::parse(&text)
}
