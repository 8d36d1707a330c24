//! Rule set abstraction.
//!
//! The orchestrator delegates starting layout, legality and status evaluation
//! to a [`RuleSet`]. [`StandardChess`] is the only rule set shipped.

mod standard;

pub use standard::StandardChess;

use crate::Board;
use gambit_core::{Color, Move, Piece, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a game from the perspective of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// The side to move has legal moves and is not in check.
    Playing,
    /// The side to move is in check but can escape.
    Check,
    /// The side to move is in check with no legal moves.
    Checkmate,
    /// The side to move is not in check but has no legal moves.
    Stalemate,
}

impl GameStatus {
    /// Combines "has a legal move" and "is in check" into a status.
    pub const fn evaluate(can_move: bool, in_check: bool) -> Self {
        match (can_move, in_check) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Playing,
            (false, true) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// Returns true for checkmate and stalemate.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    /// Returns true if the side to move is in check.
    #[inline]
    pub const fn is_check(self) -> bool {
        matches!(self, GameStatus::Check | GameStatus::Checkmate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        write!(f, "{}", name)
    }
}

/// Trait for the rules the orchestrator plays by.
///
/// # Example
///
/// ```
/// use gambit_engine::{RuleSet, StandardChess};
/// use gambit_core::Color;
///
/// let board = StandardChess.initial_board();
/// let moves = StandardChess.legal_moves_for(&board, Color::White, None);
/// assert_eq!(moves.len(), 20);
/// ```
pub trait RuleSet {
    /// Returns the starting layout.
    fn initial_board(&self) -> Board;

    /// Returns the legal moves of one piece.
    fn legal_moves(&self, board: &Board, piece: &Piece, en_passant: Option<Square>) -> Vec<Move>;

    /// Returns true if the king of the given color is attacked.
    fn is_check(&self, board: &Board, color: Color) -> bool;

    /// Returns every legal move for the given color.
    fn legal_moves_for(&self, board: &Board, color: Color, en_passant: Option<Square>) -> Vec<Move>;

    /// Evaluates the status for the side about to move.
    fn status(&self, board: &Board, to_move: Color, en_passant: Option<Square>) -> GameStatus;
}
