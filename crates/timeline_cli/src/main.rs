//! Timeline - time-travel tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use timeline_cli::{Action, Cli, Command, DriverConfig, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = DriverConfig::load_or_default(&cli.config)?;
    if let Some(filter) = &cli.log_filter {
        config.log_filter = filter.clone();
    }
    if cli.no_history {
        config.show_history = false;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_interactive(config),
        Command::Replay { moves, jump, json } => run_replay(config, &moves, jump, json),
    }
}

/// Play on stdin/stdout until EOF or `quit`.
#[instrument(skip(config))]
fn run_interactive(config: DriverConfig) -> Result<()> {
    info!("Starting interactive session");
    let mut session = Session::new(config);
    session.run(std::io::stdin().lock(), std::io::stdout().lock())
}

/// Play `moves` in order, optionally rewind, and print the result.
#[instrument(skip(config))]
fn run_replay(
    config: DriverConfig,
    moves: &[String],
    jump: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut session = Session::new(config);

    for (n, square) in moves.iter().enumerate() {
        let action: Action = format!("move {}", square)
            .parse()
            .with_context(|| format!("Move #{} is not a square", n + 1))?;
        session
            .execute(action)
            .with_context(|| format!("Move #{} ({}) was rejected", n + 1, square))?;
    }

    if let Some(index) = jump {
        session
            .execute(Action::Jump(index))
            .with_context(|| format!("Cannot jump to entry {}", index))?;
    }

    let rendered = if json {
        session.render_json()?
    } else {
        session.render_after(Action::Show)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    Ok(())
}
