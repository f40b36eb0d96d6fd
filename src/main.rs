use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use studyfocus::cli::args::{Cli, Commands};
use studyfocus::cli::commands;
use studyfocus::config::Config;
use studyfocus::error::StudyError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        let code = e
            .downcast_ref::<StudyError>()
            .map_or(1, StudyError::exit_code);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.general.color.apply();
    init_tracing(&config, cli.quiet);

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Demo(args) => commands::demo(&config, args, format)?,
        Commands::Replay(args) => commands::replay(&config, args, format)?,
        Commands::Report(args) => commands::report(&config, args, format)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Initialize tracing on stderr, with `RUST_LOG` taking precedence over config.
fn init_tracing(config: &Config, quiet: bool) {
    let level = if quiet { "warn" } else { config.logging.level.as_str() };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("studyfocus={level}")));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}
