//! Immutable board snapshots and move application.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::outcome::Outcome;
use super::{Board, Player, Position, rules};
use serde::Serialize;
use tracing::{debug, instrument};

/// One snapshot of the board.
///
/// A `GameState` never changes once built. Applying a move returns a new
/// snapshot, so any state recorded in history stays valid for as long as
/// it is held. Whose turn it is is derived from the number of marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct GameState {
    board: Board,
}

impl GameState {
    /// Creates the empty starting state.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of marks placed so far.
    pub fn move_count(&self) -> usize {
        self.board.filled()
    }

    /// Returns the player to move, derived from turn parity.
    pub fn to_move(&self) -> Player {
        Player::for_filled_count(self.board.filled())
    }

    /// Evaluates this state.
    pub fn outcome(&self) -> Outcome {
        rules::detect_outcome(&self.board)
    }

    /// Returns the empty positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Applies a move, producing a new state.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if this state is already won or drawn.
    /// - [`MoveError::SquareOccupied`] if the target square is taken.
    #[instrument(skip(self))]
    pub fn apply_move(&self, action: Move) -> Result<GameState, MoveError> {
        MoveContract::pre(self, &action)?;

        let next = Self {
            board: self.board.with_mark(action.position, action.player),
        };
        debug_assert!(
            MoveContract::post(self, &next).is_ok(),
            "Move postcondition violated"
        );
        debug!(filled = next.move_count(), "Move applied");
        Ok(next)
    }

    /// Applies a move for the player whose turn it is.
    #[instrument(skip(self))]
    pub fn play(&self, position: Position) -> Result<GameState, MoveError> {
        self.apply_move(Move::new(self.to_move(), position))
    }

    /// Applies a move at a raw cell index (0-8) for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for indices past 8, otherwise as [`GameState::apply_move`].
    #[instrument(skip(self))]
    pub fn play_index(&self, index: usize) -> Result<GameState, MoveError> {
        self.play(Position::try_from(index)?)
    }
}
