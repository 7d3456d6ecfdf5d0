//! Terminal driver for time-travel tic-tac-toe.
//!
//! Parses commands, owns one history store per session and renders the
//! board, status line and history list after every command.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DriverConfig};
pub use session::{Action, Flow, ParseError, Session};
