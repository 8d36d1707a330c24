//! Core types for gambit.
//!
//! This crate provides the value types shared by the rules engine and its
//! presentation shells:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates (column/row, rank 8 on row 0)
//! - [`Move`], [`MoveFlags`] and [`RookHop`] for move representation
//! - FEN position setup

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{Fen, FenError};
pub use mov::{Move, MoveFlags, RookHop};
pub use piece::{Piece, PieceKind};
pub use square::{Square, SquareError};
