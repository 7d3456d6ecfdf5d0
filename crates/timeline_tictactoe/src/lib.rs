//! Tic-tac-toe rules with an immutable, rewindable move history.
//!
//! # Architecture
//!
//! - **GameState**: an immutable snapshot of the nine squares; applying a
//!   move returns a new snapshot and whose turn it is comes from the mark count
//! - **rules**: pure win/draw detection over a board
//! - **HistoryStore**: every snapshot of the session plus a cursor, with
//!   append (dropping abandoned futures), jump and reset
//! - **invariants / contracts**: properties checked in debug builds
//! - **view**: status line and history list for a front end
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{HistoryStore, Outcome, Player, Position};
//!
//! let mut store = HistoryStore::new();
//! store.play(Position::Center)?;
//! store.play(Position::TopLeft)?;
//! assert_eq!(store.to_move(), Player::X);
//!
//! store.jump(1)?;
//! store.play(Position::BottomRight)?;
//! assert_eq!(store.len(), 3);
//! assert_eq!(store.outcome(), Outcome::NoWinner);
//! # Ok::<(), timeline_tictactoe::TimelineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod error;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use error::TimelineError;
pub use history::{HistoryError, HistoryStore};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::detect_outcome;
pub use state::GameState;
pub use types::{Board, Player, Square};
pub use view::{HistoryEntry, StatusLine};
