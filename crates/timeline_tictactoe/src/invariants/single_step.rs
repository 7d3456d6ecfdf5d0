//! Single-step invariant: each entry adds exactly one mark.

use super::super::{Board, HistoryStore, Player, Position, Square};
use super::Invariant;

/// Returns the one mark `after` adds to `before`.
///
/// `None` unless `after` equals `before` with exactly one empty square
/// filled.
pub fn added_mark(before: &Board, after: &Board) -> Option<(Position, Player)> {
    let mut added = None;
    for pos in Position::ALL {
        match (before.get(pos), after.get(pos)) {
            (old, new) if old == new => {}
            (Square::Empty, Square::Occupied(player)) if added.is_none() => {
                added = Some((pos, player));
            }
            _ => return None,
        }
    }
    added
}

/// Invariant: every entry differs from its predecessor by one new mark.
///
/// Marks are never removed or overwritten along the stored sequence.
pub struct SingleStepHistory;

impl Invariant<HistoryStore> for SingleStepHistory {
    fn holds(store: &HistoryStore) -> bool {
        store
            .states
            .windows(2)
            .all(|pair| added_mark(pair[0].board(), pair[1].board()).is_some())
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to its predecessor"
    }
}
