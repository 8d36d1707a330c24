//! Chess rules engine with a click-driven game state machine.
//!
//! This crate provides:
//! - [`Board`] - the live piece placement
//! - Move generation in [`movegen`] and king-safety filtering in [`legality`]
//! - [`RuleSet`] - the rules the orchestrator plays by, with [`StandardChess`]
//! - [`GameState`] - turn order, selection, en passant, and status
//! - [`Game`] - a game with history and undo
//! - [`GameView`] - a serializable render snapshot
//!
//! # Architecture
//!
//! Pieces live in a flat list of at most 32 entries and every query is a
//! linear scan. Candidate moves are generated per piece, then filtered by
//! playing each one on a cloned board and testing whether the mover's king is
//! attacked afterwards.
//!
//! # Example
//!
//! ```
//! use gambit_core::Square;
//! use gambit_engine::{GameState, GameStatus, Selection};
//!
//! let mut state = GameState::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//!
//! assert_eq!(state.select_or_move(e2).unwrap(), Selection::Selected(e2));
//! assert!(matches!(state.select_or_move(e4).unwrap(), Selection::Moved(_)));
//! assert_eq!(state.status(), GameStatus::Playing);
//! ```

mod board;
mod game;
pub mod legality;
pub mod movegen;
pub mod rules;
mod view;

pub use board::Board;
pub use game::{Game, GameError, GameState, Selection};
pub use movegen::perft::{perft, perft_divide};
pub use movegen::{candidate_moves, reaches};
pub use rules::{GameStatus, RuleSet, StandardChess};
pub use view::{GameView, PieceView, TargetView};
