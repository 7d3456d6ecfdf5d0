//! Presentation-facing summaries of a history store.
//!
//! A front end re-reads these after every command; they are pure
//! derivations and never change the store.

use super::{HistoryStore, Outcome, Player};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// Headline for the active entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusLine {
    /// Game ongoing, this player moves next.
    Turn(Player),
    /// This player completed a line.
    Won(Player),
    /// Board full, no line.
    Drawn,
}

impl StatusLine {
    /// Derives the headline for the store's active entry.
    #[instrument(skip(store))]
    pub fn of(store: &HistoryStore) -> Self {
        match store.outcome() {
            Outcome::NoWinner => StatusLine::Turn(store.to_move()),
            Outcome::Winner(player) => StatusLine::Won(player),
            Outcome::Draw => StatusLine::Drawn,
        }
    }
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusLine::Turn(player) => write!(f, "{}'s Turn", player),
            StatusLine::Won(player) => write!(f, "{} Wins!", player),
            StatusLine::Drawn => write!(f, "Draw!"),
        }
    }
}

/// One row of the time-travel list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct HistoryEntry {
    /// Index to pass to [`HistoryStore::jump`].
    index: usize,
    /// "Start" for the empty board, "Move #n" after.
    label: String,
    /// True for the entry under the cursor.
    is_current: bool,
}

impl HistoryEntry {
    /// Lists every stored entry, oldest first.
    #[instrument(skip(store))]
    pub fn list(store: &HistoryStore) -> Vec<HistoryEntry> {
        (0..store.len())
            .map(|index| HistoryEntry {
                index,
                label: if index == 0 {
                    "Start".to_string()
                } else {
                    format!("Move #{}", index)
                },
                is_current: index == store.cursor(),
            })
            .collect()
    }
}
