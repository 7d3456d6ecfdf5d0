//! Contract-based validation for moves and history appends.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{AppendInvariants, InvariantSet, InvariantViolation, added_mark};
use super::{GameState, HistoryStore, Square};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Error reported when the precondition fails.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Contract
// ─────────────────────────────────────────────────────────────

/// Contract for applying a move to a snapshot.
///
/// Preconditions:
/// - Game is not already decided
/// - Square must be empty
///
/// Postconditions:
/// - Exactly one square was filled
/// - Every previously filled square is unchanged
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    type Error = MoveError;

    #[instrument(skip(state))]
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        let outcome = state.outcome();
        if outcome.is_terminal() {
            return Err(MoveError::GameOver(outcome));
        }

        if state.board().get(action.position) != Square::Empty {
            return Err(MoveError::SquareOccupied(action.position));
        }

        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        if added_mark(before.board(), after.board()).is_none() {
            warn!(
                before = before.move_count(),
                after = after.move_count(),
                "Move did not add exactly one mark"
            );
            return Err(vec![InvariantViolation::new(
                "Move adds exactly one mark and keeps existing marks",
            )]);
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Append Contract
// ─────────────────────────────────────────────────────────────

/// Contract for appending a snapshot to the history.
///
/// Preconditions:
/// - The new state adds one mark to `current()`
///
/// Postconditions:
/// - Length is the prior cursor plus two
/// - The cursor sits on the last entry
/// - [`AppendInvariants`] hold
///
/// Whose mark was added is not checked; callers may record moves made
/// with an explicit mover.
pub struct AppendContract;

impl Contract<HistoryStore, GameState> for AppendContract {
    type Error = InvariantViolation;

    #[instrument(skip_all)]
    fn pre(store: &HistoryStore, next: &GameState) -> Result<(), InvariantViolation> {
        match added_mark(store.current().board(), next.board()) {
            Some(_) => Ok(()),
            None => Err(InvariantViolation::new(
                "Appended state must add exactly one mark to the current state",
            )),
        }
    }

    fn post(before: &HistoryStore, after: &HistoryStore) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if after.len() != before.cursor() + 2 {
            violations.push(InvariantViolation::new(format!(
                "History length {} after append, expected {}",
                after.len(),
                before.cursor() + 2
            )));
        }

        if !after.is_at_latest() {
            violations.push(InvariantViolation::new("Cursor is not on the appended entry"));
        }

        if let Err(mut broken) = AppendInvariants::check_all(after) {
            violations.append(&mut broken);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Append postcondition violated");
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Player, Position};

    #[test]
    fn test_precondition_empty_square() {
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&GameState::new(), &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let state = GameState::new().play(Position::Center).unwrap();
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&state, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let store = HistoryStore::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();
        let action = Move::new(Player::O, Position::BottomRight);
        assert_eq!(
            MoveContract::pre(store.current(), &action),
            Err(MoveError::GameOver(Outcome::Winner(Player::X)))
        );
    }

    #[test]
    fn test_move_postcondition() {
        let before = GameState::new();
        let after = before.play(Position::Center).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
        assert!(MoveContract::post(&before, &before).is_err());
    }

    #[test]
    fn test_append_accepts_any_mover() {
        let store = HistoryStore::new();
        let next = GameState::new()
            .apply_move(Move::new(Player::O, Position::Center))
            .unwrap();
        assert!(AppendContract::pre(&store, &next).is_ok());

        let mut after = store.clone();
        after.append(next);
        assert!(AppendContract::post(&store, &after).is_ok());
    }

    #[test]
    fn test_append_precondition_rejects_non_successor() {
        let store = HistoryStore::new();
        assert!(AppendContract::pre(&store, &GameState::new()).is_err());
    }

    #[test]
    fn test_append_postcondition_holds() {
        let before = HistoryStore::replay(&[Position::Center, Position::TopLeft]).unwrap();
        let mut after = before.clone();
        after.play(Position::BottomRight).unwrap();
        assert!(AppendContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_append_postcondition_detects_stale_future() {
        let mut before = HistoryStore::replay(&[Position::Center, Position::TopLeft]).unwrap();
        before.jump(0).unwrap();
        // Unchanged store: length 3, not cursor_before + 2, and cursor not at end.
        let after = before.clone();
        let violations = AppendContract::post(&before, &after).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
