//! Text rendering of a [`GameView`].
//!
//! Each square is three characters wide. The selected piece is wrapped in
//! `[ ]`, legal destinations in `( )` (an empty destination shows `*`), and a
//! king in check in `< >`.

use crate::config::{Glyphs, ShellConfig};
use gambit_core::{Color, PieceKind, Square};
use gambit_engine::{GameStatus, GameView, PieceView};

/// Returns the glyph for a piece.
pub fn glyph(piece: &PieceView, glyphs: Glyphs) -> char {
    match glyphs {
        Glyphs::Ascii => piece.kind.to_fen_char(piece.color),
        Glyphs::Unicode => match (piece.color, piece.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        },
    }
}

fn cell(view: &GameView, sq: Square, glyphs: Glyphs) -> String {
    let piece = view.piece_at(sq).map(|p| glyph(p, glyphs));
    let is_target = view.target_at(sq).is_some();

    let (open, close) = if view.selected == Some(sq) {
        ('[', ']')
    } else if is_target {
        ('(', ')')
    } else if view.checked_king == Some(sq) {
        ('<', '>')
    } else {
        (' ', ' ')
    };

    let body = match piece {
        Some(c) => c,
        None if is_target => '*',
        None => '.',
    };

    format!("{}{}{}", open, body, close)
}

/// Draws the board, White's back rank at the bottom.
pub fn board(view: &GameView, config: &ShellConfig) -> String {
    let mut out = String::new();
    let files = "   a  b  c  d  e  f  g  h";

    if config.coordinates {
        out.push_str(&format!("{}\n", files));
    }
    for row in 0..Square::SIZE {
        let rank = Square::SIZE - row;
        if config.coordinates {
            out.push_str(&format!("{} ", rank));
        }
        for col in 0..Square::SIZE {
            if let Some(sq) = Square::new(col, row) {
                out.push_str(&cell(view, sq, config.glyphs));
            }
        }
        if config.coordinates {
            out.push_str(&format!(" {}", rank));
        }
        out.push('\n');
    }
    if config.coordinates {
        out.push_str(&format!("{}\n", files));
    }
    out
}

/// Describes the status for the side to move.
pub fn status_line(view: &GameView) -> String {
    match view.status {
        GameStatus::Checkmate => format!(
            "Checkmate! {} wins! Enter any square to restart.",
            view.turn.opposite()
        ),
        GameStatus::Stalemate => "Stalemate! Draw. Enter any square to restart.".to_string(),
        GameStatus::Check => format!("{}'s turn. CHECK!", view.turn),
        GameStatus::Playing => format!("{}'s turn", view.turn),
    }
}

/// Draws the board followed by the status line.
pub fn frame(view: &GameView, config: &ShellConfig) -> String {
    format!("{}{}\n", board(view, config), status_line(view))
}
