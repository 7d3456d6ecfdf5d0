//! Alternating marks invariant: X, O, X, O, ...

use super::super::{HistoryStore, Player};
use super::Invariant;
use super::single_step::added_mark;

/// Invariant: the mark added at entry `i` belongs to X when `i` is odd
/// and to O when `i` is even.
///
/// Entries that do not add exactly one mark are left to
/// [`super::SingleStepHistory`].
pub struct AlternatingMarks;

impl Invariant<HistoryStore> for AlternatingMarks {
    fn holds(store: &HistoryStore) -> bool {
        store.states.windows(2).enumerate().all(|(i, pair)| {
            match added_mark(pair[0].board(), pair[1].board()) {
                Some((_, player)) => player == Player::for_filled_count(i),
                None => true,
            }
        })
    }

    fn description() -> &'static str {
        "Players alternate marks starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Move, Position};

    #[test]
    fn test_empty_store_holds() {
        assert!(AlternatingMarks::holds(&HistoryStore::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let store = HistoryStore::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ])
        .unwrap();
        assert!(AlternatingMarks::holds(&store));
        assert_eq!(store.to_move(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut store = HistoryStore::new();
        let first = GameState::new().play(Position::TopLeft).unwrap();
        let second = first
            .apply_move(Move::new(Player::X, Position::Center))
            .unwrap();
        store.states.extend([first, second]);
        assert!(!AlternatingMarks::holds(&store));
    }
}
