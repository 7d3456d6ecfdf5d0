//! Crate-level error type.

use super::action::MoveError;
use super::history::HistoryError;

/// Any rejection the core can report.
///
/// Both kinds leave the store exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum TimelineError {
    /// A move was refused.
    #[display("{}", _0)]
    Move(MoveError),
    /// A jump target was out of range.
    #[display("{}", _0)]
    History(HistoryError),
}

impl std::error::Error for TimelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TimelineError::Move(err) => Some(err),
            TimelineError::History(err) => Some(err),
        }
    }
}
