//! Pretty (human-readable) output formatting for studyfocus.

use colored::Colorize;

use crate::features::focus::{format_seconds, StudyEvent, StudySession};

/// Format a list of sessions as a pretty listing
pub fn format_sessions_pretty(sessions: &[&StudySession], title: &str) -> String {
    if sessions.is_empty() {
        return format!("{title} (0 sessions)\n  No sessions");
    }

    let mut output = format!("{} ({} sessions)\n", title, sessions.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for session in sessions {
        output.push_str(&format_session_pretty(session));
    }

    output
}

/// Format a single session with its focus records
pub fn format_session_pretty(session: &StudySession) -> String {
    let mut output = format!(
        "{}  {}  {}\n",
        session.session_id().bold(),
        session.start_time().dimmed(),
        format_seconds(session.total_focus_seconds()).green()
    );

    if session.is_empty() {
        output.push_str(&format!("  {}\n", "no focus records".dimmed()));
        return output;
    }

    for (i, record) in session.focus_records().iter().enumerate() {
        let mut line = format!(
            "  {:>2}. {:>8}  {}",
            i + 1,
            format_seconds(record.focus_seconds()),
            record.timestamp()
        );

        if let Some(subject) = record.subject() {
            line.push_str(&format!("  {}", subject.cyan()));
        }

        if let Some(mode) = record.mode() {
            line.push_str(&format!("  {}", mode.to_string().yellow()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format captured events, one per line
pub fn format_events_pretty(events: &[StudyEvent]) -> String {
    if events.is_empty() {
        return "No events".dimmed().to_string();
    }

    events
        .iter()
        .map(|event| match event {
            StudyEvent::SessionRegistered { .. } => event.to_string().blue().to_string(),
            StudyEvent::FocusRecorded { .. } => event.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
