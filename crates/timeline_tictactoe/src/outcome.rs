//! Evaluated status of a board.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of evaluating a board.
///
/// Exactly one variant holds for any reachable board. `NoWinner` is the
/// only non-terminal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    NoWinner,
    /// Player won the game.
    Winner(Player),
    /// Board is full with no winner.
    Draw,
}

impl Outcome {
    /// Returns true once no further moves are permitted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::NoWinner)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::NoWinner => write!(f, "No winner yet"),
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
