//! One interactive game session.
//!
//! The session owns a single [`HistoryStore`], turns each input line into
//! an [`Action`], hands it to the core and re-renders.

use crate::config::DriverConfig;
use derive_more::{Display, Error};
use serde::Serialize;
use std::io::{BufRead, Write};
use timeline_tictactoe::{
    GameState, HistoryEntry, HistoryStore, Outcome, Position, StatusLine, TimelineError,
};
use tracing::{debug, info, instrument, warn};

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the next mark.
    Play(Position),
    /// Move the cursor to a history entry.
    Jump(usize),
    /// Print the history list.
    History,
    /// Start over.
    New,
    /// Print the board.
    Show,
    /// Print the status, cursor and every snapshot as JSON.
    Json,
    /// Print the command list.
    Help,
    /// Leave.
    Quit,
}

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input: {}", input)]
pub struct ParseError {
    /// The offending input, trimmed.
    pub input: String,
}

impl std::str::FromStr for Action {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let err = || ParseError {
            input: line.to_string(),
        };
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match (word.to_lowercase().as_str(), rest) {
            ("move" | "play" | "m", target) if !target.is_empty() => {
                Position::from_label_or_number(target).map(Action::Play).ok_or_else(err)
            }
            ("jump" | "j", target) => target.parse().map(Action::Jump).map_err(|_| err()),
            ("history" | "h", "") => Ok(Action::History),
            ("new" | "reset", "") => Ok(Action::New),
            ("show" | "s", "") => Ok(Action::Show),
            ("json", "") => Ok(Action::Json),
            ("help" | "?", "") => Ok(Action::Help),
            ("quit" | "exit" | "q", "") => Ok(Action::Quit),
            _ => Position::from_label_or_number(line).map(Action::Play).ok_or_else(err),
        }
    }
}

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop.
    Quit,
}

/// JSON shape of a session: status and outcome of the active entry, the
/// cursor, and every stored snapshot.
#[derive(Serialize)]
struct SessionDump<'a> {
    status: String,
    outcome: Outcome,
    cursor: usize,
    states: &'a [GameState],
}

const HELP: &str = "\
Commands:
  <0-8 | label>     place the next mark (also: move <square>)
  jump <n>          return to history entry n
  history           list history entries
  new               start a new game
  show              print the board
  json              print status, cursor and all snapshots as JSON
  quit              leave";

/// A game session bound to one store.
#[derive(Debug, Clone)]
pub struct Session {
    store: HistoryStore,
    config: DriverConfig,
}

impl Session {
    /// Creates a session with a fresh store.
    #[instrument(skip(config))]
    pub fn new(config: DriverConfig) -> Self {
        info!("Creating new game session");
        Self {
            store: HistoryStore::new(),
            config,
        }
    }

    /// Returns the store.
    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// Applies `action` to the store.
    ///
    /// Rejected moves and jumps come back as errors; the store is
    /// untouched in that case.
    #[instrument(skip(self))]
    pub fn execute(&mut self, action: Action) -> Result<Flow, TimelineError> {
        match action {
            Action::Play(position) => {
                self.store.play(position)?;
                debug!(cursor = self.store.cursor(), "Move recorded");
            }
            Action::Jump(index) => self.store.jump(index)?,
            Action::New => self.store.reset(),
            Action::Quit => return Ok(Flow::Quit),
            Action::History | Action::Show | Action::Json | Action::Help => {}
        }
        Ok(Flow::Continue)
    }

    /// Renders the active board and its status line.
    pub fn render_board(&self) -> String {
        let current = self.store.current();
        let mut out = format!("{}\n\n{}", StatusLine::of(&self.store), current.board());
        if self.config.show_positions && !current.outcome().is_terminal() {
            let open: Vec<_> = current
                .valid_moves()
                .iter()
                .map(|pos| format!("{} ({})", pos.to_index(), pos.label()))
                .collect();
            out.push_str(&format!("\n\nOpen: {}", open.join(", ")));
        }
        out
    }

    /// Renders the time-travel list, marking the active entry.
    pub fn render_history(&self) -> String {
        HistoryEntry::list(&self.store)
            .iter()
            .map(|entry| {
                let marker = if *entry.is_current() { '>' } else { ' ' };
                format!("{} {:>2}. {}", marker, entry.index(), entry.label())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders the active status, the cursor and all stored snapshots as JSON.
    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&SessionDump {
            status: StatusLine::of(&self.store).to_string(),
            outcome: self.store.outcome(),
            cursor: self.store.cursor(),
            states: self.store.states(),
        })
    }

    /// Output printed after `action` succeeded.
    pub fn render_after(&self, action: Action) -> anyhow::Result<String> {
        Ok(match action {
            Action::History => self.render_history(),
            Action::Json => self.render_json()?,
            Action::Help => HELP.to_string(),
            Action::Quit => String::new(),
            Action::Play(_) | Action::Jump(_) | Action::New | Action::Show => {
                if self.config.show_history {
                    format!("{}\n\n{}", self.render_board(), self.render_history())
                } else {
                    self.render_board()
                }
            }
        })
    }

    /// Reads commands from `input` until EOF or `quit`, writing to `output`.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        writeln!(output, "{}\n", self.render_after(Action::Show)?)?;
        writeln!(output, "Type `help` for commands.")?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let action = match line.parse::<Action>() {
                Ok(action) => action,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            match self.execute(action) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {
                    writeln!(output, "{}\n", self.render_after(action)?)?;
                }
                Err(e) => {
                    warn!(error = %e, "Command rejected");
                    writeln!(output, "Nothing changed: {}", e)?;
                }
            }
        }

        info!(entries = self.store.len(), "Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timeline_tictactoe::{HistoryError, MoveError, Player};

    #[test]
    fn test_parse_actions() {
        assert_eq!("4".parse(), Ok(Action::Play(Position::Center)));
        assert_eq!("move top-left".parse(), Ok(Action::Play(Position::TopLeft)));
        assert_eq!(" jump 2 ".parse(), Ok(Action::Jump(2)));
        assert_eq!("NEW".parse(), Ok(Action::New));
        assert_eq!("q".parse(), Ok(Action::Quit));
        assert_eq!("center".parse(), Ok(Action::Play(Position::Center)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("jump".parse::<Action>().is_err());
        assert!("jump x".parse::<Action>().is_err());
        assert!("move".parse::<Action>().is_err());
        assert!("9".parse::<Action>().is_err());
        assert!("dance".parse::<Action>().is_err());
    }

    #[test]
    fn test_execute_round() {
        let mut session = Session::new(DriverConfig::default());
        session.execute(Action::Play(Position::Center)).unwrap();
        session.execute(Action::Play(Position::TopLeft)).unwrap();
        session.execute(Action::Jump(1)).unwrap();
        assert_eq!(session.store().to_move(), Player::O);

        assert_eq!(
            session.execute(Action::Play(Position::Center)),
            Err(TimelineError::Move(MoveError::SquareOccupied(Position::Center)))
        );
        assert_eq!(
            session.execute(Action::Jump(5)),
            Err(TimelineError::History(HistoryError::OutOfRange { index: 5, len: 3 }))
        );
        assert_eq!(session.store().cursor(), 1);

        session.execute(Action::New).unwrap();
        assert_eq!(session.store(), &HistoryStore::new());
        assert_eq!(session.execute(Action::Quit), Ok(Flow::Quit));
    }

    #[test]
    fn test_render_history_marks_cursor() {
        let mut session = Session::new(DriverConfig::default());
        session.execute(Action::Play(Position::Center)).unwrap();
        session.execute(Action::Jump(0)).unwrap();
        assert_eq!(session.render_history(), ">  0. Start\n   1. Move #1");
    }

    #[test]
    fn test_render_json() {
        let mut session = Session::new(DriverConfig::default());
        session.execute(Action::Play(Position::Center)).unwrap();
        session.execute(Action::Jump(0)).unwrap();

        let json = session.render_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "X's Turn");
        assert_eq!(value["cursor"], 0);
        assert_eq!(value["states"].as_array().unwrap().len(), 2);
        assert_eq!(value["outcome"], serde_json::to_value(Outcome::NoWinner).unwrap());
    }
}
