//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. They never touch history and are
//! safe to call on any board, any number of times.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board: a completed line wins, otherwise a full board
/// is a draw, otherwise play continues.
#[instrument(skip(board))]
pub fn detect_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Winner(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::NoWinner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn board_from(marks: &[(Position, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, (pos, player)| board.with_mark(*pos, *player))
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(detect_outcome(&Board::new()), Outcome::NoWinner);
    }

    #[test]
    fn test_full_board_with_line_is_a_win_not_a_draw() {
        // X X X / O O X / X O O
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::X),
            (Position::BottomCenter, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(detect_outcome(&board), Outcome::Winner(Player::X));
    }

    #[test]
    fn test_outcome_is_idempotent() {
        let board = board_from(&[
            (Position::TopLeft, Player::O),
            (Position::Center, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        let first = detect_outcome(&board);
        assert_eq!(first, detect_outcome(&board));
        assert_eq!(first, Outcome::Winner(Player::O));
    }
}
