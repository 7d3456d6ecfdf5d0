//! Cursor invariant: the cursor always names an existing entry.

use super::super::{GameState, HistoryStore};
use super::Invariant;

/// Invariant: the store is never empty, starts from the empty board and
/// its cursor is within `0..len`.
pub struct CursorInBounds;

impl Invariant<HistoryStore> for CursorInBounds {
    fn holds(store: &HistoryStore) -> bool {
        store.states.first() == Some(&GameState::new()) && store.cursor < store.states.len()
    }

    fn description() -> &'static str {
        "Cursor addresses an existing entry and history starts empty"
    }
}
