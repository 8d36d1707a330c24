//! Shell input parsing.

use gambit_core::{Square, SquareError};

/// A line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// A board square, as if clicked.
    Square(Square),
    /// Start a new game.
    Reset,
    /// Take back the last move.
    Undo,
    /// Print the current view as JSON.
    Json,
    /// List the legal moves of the side to move.
    Moves,
    /// Show the command summary.
    Help,
    /// Leave the shell.
    Quit,
    /// Blank line.
    Empty,
}

impl ShellCommand {
    /// Parses one line of input.
    ///
    /// Squares are accepted as algebraic names (`e2`) or as `col,row` pairs
    /// with row 0 at the top of the board (`4,6`).
    pub fn parse(input: &str) -> Result<Self, SquareError> {
        let input = input.trim();

        match input.to_ascii_lowercase().as_str() {
            "" => Ok(ShellCommand::Empty),
            "reset" | "new" => Ok(ShellCommand::Reset),
            "undo" => Ok(ShellCommand::Undo),
            "json" => Ok(ShellCommand::Json),
            "moves" => Ok(ShellCommand::Moves),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            other => Self::parse_square(other).map(ShellCommand::Square),
        }
    }

    fn parse_square(input: &str) -> Result<Square, SquareError> {
        match input.split_once(',') {
            Some((col, row)) => {
                let invalid = || SquareError::InvalidName(input.to_string());
                let col: i16 = col.trim().parse().map_err(|_| invalid())?;
                let row: i16 = row.trim().parse().map_err(|_| invalid())?;
                Square::try_from((col, row))
            }
            None => input.parse(),
        }
    }
}

/// Summary printed by the `help` command.
pub const HELP: &str = "\
Type a square to select a piece, then a highlighted square to move it.
Squares: algebraic (e2) or col,row with row 0 at the top (4,6).
Commands:
  moves  list legal moves for the side to move
  undo   take back the last move
  reset  start a new game
  json   print the current position as JSON
  help   show this text
  quit   leave";
