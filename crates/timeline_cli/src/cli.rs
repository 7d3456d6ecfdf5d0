//! Command-line interface for the timeline driver.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Time-travel tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "timeline")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (skipped if missing)
    #[arg(long, default_value = "timeline.toml")]
    pub config: PathBuf,

    /// Tracing filter, overriding the config file
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Hide the history list
    #[arg(long)]
    pub no_history: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Play a list of squares in order and print the result
    Replay {
        /// Squares as indices (0-8) or labels
        moves: Vec<String>,

        /// Jump to this history entry after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print the session as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["timeline"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("timeline.toml"));
        assert!(!cli.no_history);
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::parse_from(["timeline", "replay", "4", "center", "--jump", "1", "--json"]);
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec!["4".to_string(), "center".to_string()],
                jump: Some(1),
                json: true,
            })
        );
    }
}
