//! Render snapshots.
//!
//! A [`GameView`] is everything a presentation layer needs to draw one frame:
//! pieces, the highlighted selection and its targets, and the king to flag
//! when in check. It serializes to JSON with squares in algebraic form.

use crate::rules::GameStatus;
use crate::GameState;
use gambit_core::{Color, Piece, PieceKind, Square};
use serde::Serialize;

/// A piece as drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceView {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
}

impl From<&Piece> for PieceView {
    fn from(piece: &Piece) -> Self {
        PieceView {
            kind: piece.kind,
            color: piece.color,
            square: piece.square,
        }
    }
}

/// A highlighted destination of the selected piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetView {
    pub square: Square,
    pub capture: bool,
    pub castling: bool,
}

/// A snapshot of a [`GameState`] for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub turn: Color,
    pub status: GameStatus,
    /// Pieces ordered by square, row 0 first.
    pub pieces: Vec<PieceView>,
    pub selected: Option<Square>,
    pub targets: Vec<TargetView>,
    pub en_passant: Option<Square>,
    /// Square of the king of the side to move while it is in check.
    pub checked_king: Option<Square>,
}

impl GameView {
    pub(crate) fn from_state(state: &GameState) -> Self {
        let mut pieces: Vec<PieceView> = state.board().iter().map(PieceView::from).collect();
        pieces.sort_by_key(|p| p.square);

        let targets = state
            .legal_moves()
            .iter()
            .map(|m| TargetView {
                square: m.to(),
                capture: m.is_capture(),
                castling: m.is_castling(),
            })
            .collect();

        let checked_king = if state.status().is_check() {
            state.board().king(state.turn()).map(|k| k.square)
        } else {
            None
        };

        GameView {
            turn: state.turn(),
            status: state.status(),
            pieces,
            selected: state.selected_piece().map(|p| p.square),
            targets,
            en_passant: state.en_passant(),
            checked_king,
        }
    }

    /// Returns the piece drawn on the given square.
    pub fn piece_at(&self, sq: Square) -> Option<&PieceView> {
        self.pieces.iter().find(|p| p.square == sq)
    }

    /// Returns the highlight for the given square, if it is a target.
    pub fn target_at(&self, sq: Square) -> Option<&TargetView> {
        self.targets.iter().find(|t| t.square == sq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn initial_view() {
        let view = GameState::new().view();
        assert_eq!(view.turn, Color::White);
        assert_eq!(view.pieces.len(), 32);
        assert_eq!(view.pieces[0].square, Square::A8);
        assert_eq!(view.pieces[0].kind, PieceKind::Rook);
        assert!(view.selected.is_none());
        assert!(view.targets.is_empty());
        assert!(view.checked_king.is_none());
    }

    #[test]
    fn selection_highlights_targets() {
        let mut state = GameState::new();
        state.select_or_move(sq("g1")).unwrap();
        let view = state.view();
        assert_eq!(view.selected, Some(sq("g1")));
        assert_eq!(view.targets.len(), 2);
        assert!(view.target_at(sq("f3")).is_some());
        assert!(view.target_at(sq("g3")).is_none());
    }

    #[test]
    fn checked_king_is_flagged() {
        let state = GameState::from_fen("3R2k1/6pp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        let view = state.view();
        assert_eq!(view.status, GameStatus::Check);
        assert_eq!(view.checked_king, Some(sq("g8")));
    }

    #[test]
    fn serializes_squares_as_names() {
        let mut state = GameState::new();
        state.play(sq("e2"), sq("e4")).unwrap();
        let json = serde_json::to_value(state.view()).unwrap();
        assert_eq!(json["turn"], "black");
        assert_eq!(json["status"], "playing");
        assert_eq!(json["en_passant"], "e3");
        assert!(json["selected"].is_null());
        assert!(json["pieces"]
            .as_array()
            .unwrap()
            .iter()
            .any(|p| p["square"] == "e4" && p["kind"] == "pawn"));
    }
}
