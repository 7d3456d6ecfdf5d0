//! Rewindable move history.
//!
//! A [`HistoryStore`] is an ordered list of snapshots plus a cursor. Entry 0
//! is always the empty board and each later entry adds one mark. Jumping
//! only moves the cursor; appending after a jump discards every entry past
//! the cursor before recording the new one.

use super::action::MoveError;
use super::contracts::{AppendContract, Contract};
use super::outcome::Outcome;
use super::{GameState, Player, Position};
use serde::Serialize;
use tracing::{debug, instrument};

/// Jump target outside the stored history.
///
/// Callers should only offer indices they read from the store, so this
/// signals a contract violation on their side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// Index is not within `0..len`.
    #[display("History index {index} out of range (history has {len} entries)")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of stored entries.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}

/// Ordered snapshots of one game session with a cursor on the active one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryStore {
    pub(crate) states: Vec<GameState>,
    pub(crate) cursor: usize,
}

#[allow(clippy::len_without_is_empty)]
impl HistoryStore {
    /// Creates a store holding only the empty board, cursor at 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            states: vec![GameState::new()],
            cursor: 0,
        }
    }

    /// Builds a store by playing `moves` in order from the empty board.
    ///
    /// Marks alternate starting with X. Stops at the first rejected move.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut store = Self::new();
        for position in moves {
            store.play(*position)?;
        }
        Ok(store)
    }

    /// Records `state` as the next entry after the cursor.
    ///
    /// Everything after the cursor is dropped first, then `state` is pushed
    /// and the cursor moves onto it. The resulting length is always the
    /// previous cursor plus two.
    ///
    /// `state` must add one mark to [`HistoryStore::current`]. Debug builds
    /// assert this. Whose mark it is does not matter.
    #[instrument(skip(self, state), fields(cursor = self.cursor, len = self.states.len()))]
    pub fn append(&mut self, state: GameState) {
        debug_assert!(
            AppendContract::pre(self, &state).is_ok(),
            "Append precondition violated"
        );
        #[cfg(debug_assertions)]
        let before = self.clone();

        let discarded = self.states.len() - (self.cursor + 1);
        self.states.truncate(self.cursor + 1);
        self.states.push(state);
        self.cursor = self.states.len() - 1;
        debug!(discarded, cursor = self.cursor, "Appended history entry");

        #[cfg(debug_assertions)]
        debug_assert!(
            AppendContract::post(&before, self).is_ok(),
            "Append postcondition violated"
        );
    }

    /// Moves the cursor to `index` without touching the stored entries.
    ///
    /// # Errors
    ///
    /// [`HistoryError::OutOfRange`] if `index >= len()`. The store is left
    /// unchanged.
    #[instrument(skip(self))]
    pub fn jump(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.states.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.states.len(),
            });
        }
        self.cursor = index;
        debug!(cursor = index, "Jumped in history");
        Ok(())
    }

    /// Returns the snapshot under the cursor.
    pub fn current(&self) -> &GameState {
        &self.states[self.cursor]
    }

    /// Starts over with a single empty board.
    ///
    /// Entries and cursor are replaced together, so no caller can observe
    /// one without the other.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("History reset");
    }

    /// Applies a move for the player to move and appends the result.
    ///
    /// This is the whole path of a click: validate against the current
    /// snapshot, build the next one, record it.
    ///
    /// # Errors
    ///
    /// Any [`MoveError`] from [`GameState::play`]; the store is unchanged.
    #[instrument(skip(self))]
    pub fn play(&mut self, position: Position) -> Result<&GameState, MoveError> {
        let next = self.current().play(position)?;
        self.append(next);
        Ok(self.current())
    }

    /// Like [`HistoryStore::play`] but takes a raw cell index.
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<&GameState, MoveError> {
        self.play(Position::try_from(index)?)
    }

    /// Number of stored entries, including the empty start.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Index of the active entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All stored entries, oldest first.
    pub fn states(&self) -> &[GameState] {
        &self.states
    }

    /// Returns the entry at `index`, if stored.
    pub fn get(&self, index: usize) -> Option<&GameState> {
        self.states.get(index)
    }

    /// True when the cursor is on the newest entry.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.states.len()
    }

    /// Outcome of the active entry.
    pub fn outcome(&self) -> Outcome {
        self.current().outcome()
    }

    /// Player to move in the active entry.
    pub fn to_move(&self) -> Player {
        self.current().to_move()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
