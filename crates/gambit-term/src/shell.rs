//! Interactive read-eval-print loop over a [`Game`].

use crate::command::{ShellCommand, HELP};
use crate::config::ShellConfig;
use crate::render;
use gambit_engine::{Game, GameError, Selection};
use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A shell reading commands from `R` and writing frames to `W`.
pub struct Shell<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    game: Game,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(reader: R, writer: W, game: Game, config: ShellConfig) -> Self {
        Self {
            reader,
            writer,
            game,
            config,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> Result<(), ShellError> {
        self.draw()?;
        loop {
            write!(self.writer, "> ")?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                writeln!(self.writer)?;
                return Ok(());
            }

            let command = match ShellCommand::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    tracing::debug!("rejected input {:?}: {}", line.trim(), e);
                    writeln!(self.writer, "{} (type 'help' for commands)", e)?;
                    continue;
                }
            };

            if self.execute(command)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Executes one command.
    pub fn execute(&mut self, command: ShellCommand) -> Result<Flow, ShellError> {
        match command {
            ShellCommand::Square(sq) => match self.game.select_or_move(sq) {
                Ok(Selection::Ignored) => {
                    writeln!(self.writer, "Nothing to select on {}", sq)?;
                }
                Ok(_) => self.draw()?,
                Err(GameError::GameOver(status)) => {
                    tracing::info!("restarting after {}", status);
                    self.game.reset();
                    self.draw()?;
                }
                Err(e) => writeln!(self.writer, "{}", e)?,
            },
            ShellCommand::Reset => {
                self.game.reset();
                self.draw()?;
            }
            ShellCommand::Undo => match self.game.undo() {
                Some(m) => {
                    writeln!(self.writer, "Took back {}", m)?;
                    self.draw()?;
                }
                None => writeln!(self.writer, "Nothing to undo")?,
            },
            ShellCommand::Json => {
                let json = serde_json::to_string_pretty(&self.game.state().view())?;
                writeln!(self.writer, "{}", json)?;
            }
            ShellCommand::Moves => {
                let moves: Vec<String> = self
                    .game
                    .state()
                    .all_legal_moves()
                    .iter()
                    .map(|m| m.to_string())
                    .collect();
                writeln!(self.writer, "{} legal: {}", moves.len(), moves.join(" "))?;
            }
            ShellCommand::Help => writeln!(self.writer, "{}", HELP)?,
            ShellCommand::Quit => return Ok(Flow::Quit),
            ShellCommand::Empty => {}
        }
        Ok(Flow::Continue)
    }

    fn draw(&mut self) -> Result<(), ShellError> {
        let frame = render::frame(&self.game.state().view(), &self.config);
        write!(self.writer, "{}", frame)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Glyphs;
    use gambit_engine::GameStatus;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Game, String) {
        let config = ShellConfig {
            glyphs: Glyphs::Ascii,
            ..ShellConfig::default()
        };
        let mut output = Vec::new();
        let game = {
            let mut shell = Shell::new(Cursor::new(script), &mut output, Game::new(), config);
            shell.run().unwrap();
            shell.game().clone()
        };
        (game, String::from_utf8(output).unwrap())
    }

    #[test]
    fn plays_moves_from_squares() {
        let (game, output) = run_script("e2\ne4\n4,1\n4,3\nquit\n");
        assert_eq!(game.ply_count(), 2);
        assert!(output.contains("White's turn"));
        assert!(output.contains("Black's turn"));
    }

    #[test]
    fn fools_mate_then_restart() {
        let (game, output) = run_script("f2\nf3\ne7\ne5\ng2\ng4\nd8\nh4\n");
        assert_eq!(game.state().status(), GameStatus::Checkmate);
        assert!(output.contains("Checkmate! Black wins!"));

        let (game, _) = run_script("f2\nf3\ne7\ne5\ng2\ng4\nd8\nh4\na2\n");
        assert_eq!(game.state().status(), GameStatus::Playing);
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn undo_and_reset() {
        let (game, output) = run_script("d2\nd4\nundo\nundo\n");
        assert_eq!(game.ply_count(), 0);
        assert!(output.contains("Took back d2-d4"));
        assert!(output.contains("Nothing to undo"));

        let (game, _) = run_script("d2\nd4\nreset\n");
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn reports_bad_input_and_empty_squares() {
        let (_, output) = run_script("z9\ne4\n\n");
        assert!(output.contains("invalid square name"));
        assert!(output.contains("Nothing to select on e4"));
    }

    #[test]
    fn json_and_moves() {
        let (_, output) = run_script("json\nmoves\n");
        assert!(output.contains("\"status\": \"playing\""));
        assert!(output.contains("20 legal:"));
        assert!(output.contains("g1-f3"));
    }

    #[test]
    fn quit_stops_reading() {
        let (game, _) = run_script("quit\ne2\ne4\n");
        assert_eq!(game.ply_count(), 0);
    }
}
