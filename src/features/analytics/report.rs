//! Study reports.
//!
//! Aggregates the focus records of every registered session into totals and
//! breakdowns by subject, mode, and day. Sums saturate at `u64::MAX`.

use std::collections::{BTreeMap, HashMap};

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::features::focus::{format_seconds, FocusMode, FocusRecord, SessionRegistry};

/// Label for records without a subject.
pub const NO_SUBJECT: &str = "(No Subject)";

/// Label for records whose timestamp is not RFC 3339.
pub const UNKNOWN_DAY: &str = "unknown";

/// Aggregated study report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyReport {
    /// Number of registered sessions
    pub session_count: usize,
    /// Number of focus records across all sessions
    pub record_count: usize,
    /// Total focus time in seconds
    pub total_seconds: u64,
    /// Total focus time in hours
    pub total_hours: f64,
    /// Average focus record length in seconds
    pub avg_record_seconds: f64,
    /// Longest single focus record in seconds
    pub longest_record_seconds: u64,
    /// Number of distinct named subjects
    pub subjects_covered: usize,
    /// Subject with the most focus time
    pub top_subject: Option<String>,
    /// Focus time by subject, largest first
    pub by_subject: Vec<SubjectFocusTime>,
    /// Focus time by mode
    pub by_mode: Vec<ModeFocusTime>,
    /// Focus time by calendar day, most recent first
    pub daily: Vec<DailyFocusTime>,
    /// Per-session totals in registration order
    pub sessions: Vec<SessionFocusTime>,
}

/// Focus time per subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectFocusTime {
    pub subject: String,
    pub seconds: u64,
    pub records: usize,
    /// Fraction of the report's total focus time
    pub share: f64,
}

/// Focus time per mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeFocusTime {
    /// Mode name, or "unspecified"
    pub mode: String,
    pub seconds: u64,
    pub records: usize,
}

/// Focus time per day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyFocusTime {
    /// Date as `YYYY-MM-DD` in the timestamp's own offset, or "unknown"
    pub date: String,
    pub seconds: u64,
    pub records: usize,
}

/// Focus time per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFocusTime {
    pub session_id: String,
    pub start_time: String,
    pub seconds: u64,
    pub records: usize,
}

impl StudyReport {
    /// Generate a report over every session in the registry.
    #[must_use]
    pub fn generate(registry: &SessionRegistry) -> Self {
        let records: Vec<&FocusRecord> = registry
            .iter()
            .flat_map(|s| s.focus_records().iter())
            .collect();

        let total_seconds = records
            .iter()
            .map(|r| r.focus_seconds())
            .fold(0, u64::saturating_add);
        let record_count = records.len();

        #[allow(clippy::cast_precision_loss)]
        let avg_record_seconds = if record_count > 0 {
            total_seconds as f64 / record_count as f64
        } else {
            0.0
        };

        let longest_record_seconds = records
            .iter()
            .map(|r| r.focus_seconds())
            .max()
            .unwrap_or(0);

        // By subject
        let mut subject_map: HashMap<&str, (u64, usize)> = HashMap::new();
        for record in &records {
            let entry = subject_map
                .entry(record.subject().unwrap_or(NO_SUBJECT))
                .or_insert((0, 0));
            entry.0 = entry.0.saturating_add(record.focus_seconds());
            entry.1 += 1;
        }

        let mut by_subject: Vec<SubjectFocusTime> = subject_map
            .into_iter()
            .map(|(subject, (seconds, records))| SubjectFocusTime {
                subject: subject.to_string(),
                seconds,
                records,
                share: share_of(seconds, total_seconds),
            })
            .collect();
        by_subject.sort_by(|a, b| b.seconds.cmp(&a.seconds).then(a.subject.cmp(&b.subject)));

        let subjects_covered = by_subject
            .iter()
            .filter(|s| s.subject != NO_SUBJECT)
            .count();

        let top_subject = by_subject
            .iter()
            .find(|s| s.subject != NO_SUBJECT && s.seconds > 0)
            .map(|s| s.subject.clone());

        // By mode
        let mut mode_map: BTreeMap<&str, (u64, usize)> = BTreeMap::new();
        for record in &records {
            let entry = mode_map
                .entry(record.mode().map_or("unspecified", mode_key))
                .or_insert((0, 0));
            entry.0 = entry.0.saturating_add(record.focus_seconds());
            entry.1 += 1;
        }

        let by_mode = mode_map
            .into_iter()
            .map(|(mode, (seconds, records))| ModeFocusTime {
                mode: mode.to_string(),
                seconds,
                records,
            })
            .collect();

        // Daily breakdown
        let mut daily_map: BTreeMap<String, (u64, usize)> = BTreeMap::new();
        for record in &records {
            let entry = daily_map
                .entry(day_of(record.timestamp()))
                .or_insert((0, 0));
            entry.0 = entry.0.saturating_add(record.focus_seconds());
            entry.1 += 1;
        }

        let mut daily: Vec<DailyFocusTime> = daily_map
            .into_iter()
            .map(|(date, (seconds, records))| DailyFocusTime {
                date,
                seconds,
                records,
            })
            .collect();
        daily.sort_by(|a, b| match (a.date == UNKNOWN_DAY, b.date == UNKNOWN_DAY) {
            (true, false) => std::cmp::Ordering::Greater,
            (false, true) => std::cmp::Ordering::Less,
            _ => b.date.cmp(&a.date),
        });

        let sessions = registry
            .iter()
            .map(|s| SessionFocusTime {
                session_id: s.session_id().to_string(),
                start_time: s.start_time().to_string(),
                seconds: s.total_focus_seconds(),
                records: s.len(),
            })
            .collect();

        Self {
            session_count: registry.len(),
            record_count,
            total_seconds,
            total_hours: hours_of(total_seconds),
            avg_record_seconds,
            longest_record_seconds,
            subjects_covered,
            top_subject,
            by_subject,
            by_mode,
            daily,
            sessions,
        }
    }

    /// Format the report for display.
    #[must_use]
    pub fn format(&self) -> String {
        let mut lines = Vec::new();

        lines.push("Study Report".to_string());
        lines.push("═".repeat(50));
        lines.push(String::new());

        lines.push("Summary".to_string());
        lines.push("─".repeat(40));
        lines.push(format!(
            "  Total focus time:    {}",
            format_seconds(self.total_seconds)
        ));
        lines.push(format!("  Total hours:         {:.1}", self.total_hours));
        lines.push(format!("  Sessions:            {}", self.session_count));
        lines.push(format!("  Focus records:       {}", self.record_count));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let avg = self.avg_record_seconds.round() as u64;
        lines.push(format!("  Average record:      {}", format_seconds(avg)));
        lines.push(format!(
            "  Longest record:      {}",
            format_seconds(self.longest_record_seconds)
        ));
        lines.push(format!("  Subjects covered:    {}", self.subjects_covered));
        lines.push(format!(
            "  Most studied:        {}",
            self.top_subject.as_deref().unwrap_or("N/A")
        ));
        lines.push(String::new());

        if !self.by_subject.is_empty() {
            lines.push("By Subject".to_string());
            lines.push("─".repeat(40));
            for subject in &self.by_subject {
                let name = truncate(&subject.subject, 20);
                lines.push(format!(
                    "  {:<20} {:>8} {}",
                    name,
                    format_seconds(subject.seconds),
                    crate::features::focus::render_bar(subject.share, 20)
                ));
            }
            lines.push(String::new());
        }

        if !self.daily.is_empty() {
            lines.push("By Day".to_string());
            lines.push("─".repeat(40));
            for day in self.daily.iter().take(7) {
                lines.push(format!(
                    "  {:<10} {:>8} ({} records)",
                    day.date,
                    format_seconds(day.seconds),
                    day.records
                ));
            }
        }

        lines.join("\n")
    }
}

const fn mode_key(mode: FocusMode) -> &'static str {
    match mode {
        FocusMode::Pomodoro => "pomodoro",
        FocusMode::Stopwatch => "stopwatch",
    }
}

#[allow(clippy::cast_precision_loss)]
fn hours_of(seconds: u64) -> f64 {
    seconds as f64 / 3600.0
}

#[allow(clippy::cast_precision_loss)]
fn share_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// Calendar day of an RFC 3339 timestamp, in the timestamp's own offset.
fn day_of(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp).map_or_else(
        |_| UNKNOWN_DAY.to_string(),
        |t| t.date_naive().to_string(),
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}
