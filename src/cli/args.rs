use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "studyfocus")]
#[command(about = "Track study sessions made of timestamped focus intervals")]
#[command(long_about = "studyfocus - study session tracking

Records study sessions as ordered, timestamped focus intervals, keeps them in
a session registry, and reports on them. Every registration and every
recorded interval is announced through the analytics hook (logged to stderr).

QUICK START:
  studyfocus demo                     Record the sample session
  studyfocus replay sessions.yaml     Replay a session log
  studyfocus report sessions.yaml     Summarise a session log

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  studyfocus <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the config file (default: ~/.studyfocus/config.yaml)
    #[arg(long, global = true, env = "STUDYFOCUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a sample study session
    ///
    /// Creates a session, registers it, and appends one focus record per
    /// duration. The start time and record timestamps are fixed unless
    /// --start or --now is given.
    ///
    /// # Examples
    ///
    ///   studyfocus demo
    ///   studyfocus demo --durations 25m,5m,25m --subject Calculus
    ///   studyfocus demo --now --events
    Demo(DemoArgs),

    /// Replay a session log and list the resulting sessions
    ///
    /// Reads a YAML or JSON session log from a file, or from stdin when the
    /// path is '-', and records every session and focus interval in order.
    ///
    /// # Examples
    ///
    ///   studyfocus replay sessions.yaml
    ///   studyfocus replay sessions.json --session session_001
    ///   cat sessions.yaml | studyfocus replay - --events
    Replay(ReplayArgs),

    /// Summarise a session log
    ///
    /// Shows total focus time, per-subject and per-day breakdowns.
    ///
    /// # Examples
    ///
    ///   studyfocus report sessions.yaml
    ///   studyfocus -o json report sessions.yaml
    Report(ReportArgs),
}

/// Arguments for the demo command.
#[derive(Args)]
pub struct DemoArgs {
    /// Session id
    #[arg(long, default_value = "session_001")]
    pub session_id: String,

    /// Session start time (ISO-8601), used for every record
    #[arg(long, conflicts_with = "now")]
    pub start: Option<String>,

    /// Use the current local time as the start time
    #[arg(long)]
    pub now: bool,

    /// Focus durations to record (e.g., 25m,30m,1h)
    #[arg(long, short = 'd', value_delimiter = ',')]
    pub durations: Vec<String>,

    /// Subject studied
    #[arg(long, short = 's')]
    pub subject: Option<String>,

    /// Focus mode (pomodoro, stopwatch)
    #[arg(long, short = 'm')]
    pub mode: Option<String>,

    /// Print the emitted events instead of the sessions
    #[arg(long)]
    pub events: bool,
}

/// Arguments for the replay command.
#[derive(Args)]
pub struct ReplayArgs {
    /// Session log path, or '-' for stdin
    pub input: String,

    /// Show only this session
    #[arg(long)]
    pub session: Option<String>,

    /// Print the emitted events instead of the sessions
    #[arg(long)]
    pub events: bool,
}

/// Arguments for the report command.
#[derive(Args)]
pub struct ReportArgs {
    /// Session log path, or '-' for stdin
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::try_parse_from(["studyfocus", "demo"]).unwrap();
        assert!(cli.output.is_none());
        assert!(matches!(OutputFormat::default(), OutputFormat::Pretty));
    }

    #[test]
    fn test_cli_output_format_json() {
        let cli = Cli::try_parse_from(["studyfocus", "--output", "json", "demo"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_output_format_short_after_subcommand() {
        let cli = Cli::try_parse_from(["studyfocus", "demo", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_demo_defaults() {
        let cli = Cli::try_parse_from(["studyfocus", "demo"]).unwrap();
        if let Commands::Demo(args) = cli.command {
            assert_eq!(args.session_id, "session_001");
            assert!(args.start.is_none());
            assert!(args.durations.is_empty());
            assert!(!args.events);
        } else {
            panic!("Expected Demo command");
        }
    }

    #[test]
    fn test_cli_demo_durations_list() {
        let cli = Cli::try_parse_from([
            "studyfocus", "demo", "-d", "25m,5m", "--subject", "Math",
        ])
        .unwrap();
        if let Commands::Demo(args) = cli.command {
            assert_eq!(args.durations, vec!["25m", "5m"]);
            assert_eq!(args.subject.as_deref(), Some("Math"));
        } else {
            panic!("Expected Demo command");
        }
    }

    #[test]
    fn test_cli_demo_start_conflicts_with_now() {
        let result =
            Cli::try_parse_from(["studyfocus", "demo", "--now", "--start", "2025-01-01T00:00:00Z"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_replay_command() {
        let cli = Cli::try_parse_from(["studyfocus", "replay", "-", "--session", "s1"]).unwrap();
        if let Commands::Replay(args) = cli.command {
            assert_eq!(args.input, "-");
            assert_eq!(args.session.as_deref(), Some("s1"));
        } else {
            panic!("Expected Replay command");
        }
    }

    #[test]
    fn test_cli_report_requires_input() {
        assert!(Cli::try_parse_from(["studyfocus", "report"]).is_err());
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from([
            "studyfocus", "--quiet", "--config", "/tmp/c.yaml", "demo",
        ])
        .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.yaml")));
    }
}
