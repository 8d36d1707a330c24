//! Standard chess rules implementation.

use super::{GameStatus, RuleSet};
use crate::{legality, Board};
use gambit_core::{Color, Move, Piece, Square};

/// Standard chess rules:
/// - Standard piece movement
/// - Castling (kingside and queenside)
/// - En passant
/// - Automatic promotion to a queen
/// - Check, checkmate, and stalemate detection
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

impl RuleSet for StandardChess {
    fn initial_board(&self) -> Board {
        Board::standard()
    }

    fn legal_moves(&self, board: &Board, piece: &Piece, en_passant: Option<Square>) -> Vec<Move> {
        legality::legal_moves(board, piece, en_passant)
    }

    fn is_check(&self, board: &Board, color: Color) -> bool {
        legality::is_king_in_check(board, color)
    }

    fn legal_moves_for(&self, board: &Board, color: Color, en_passant: Option<Square>) -> Vec<Move> {
        legality::legal_moves_for(board, color, en_passant)
    }

    fn status(&self, board: &Board, to_move: Color, en_passant: Option<Square>) -> GameStatus {
        let can_move = legality::has_any_legal_move(board, to_move, en_passant);
        GameStatus::evaluate(can_move, legality::is_king_in_check(board, to_move))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board() {
        let board = StandardChess.initial_board();
        assert_eq!(board.len(), 32);
        assert_eq!(
            StandardChess.status(&board, Color::White, None),
            GameStatus::Playing
        );
    }

    #[test]
    fn legal_moves_for_both_sides() {
        let board = StandardChess.initial_board();
        assert_eq!(StandardChess.legal_moves_for(&board, Color::White, None).len(), 20);
        assert_eq!(StandardChess.legal_moves_for(&board, Color::Black, None).len(), 20);

        let mated = Board::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert!(StandardChess.legal_moves_for(&mated, Color::Black, None).is_empty());
    }

    #[test]
    fn status_checkmate() {
        // Back-rank mate
        let board = Board::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert_eq!(
            StandardChess.status(&board, Color::Black, None),
            GameStatus::Checkmate
        );
    }

    #[test]
    fn status_check() {
        let board = Board::from_fen("3R2k1/6pp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert_eq!(
            StandardChess.status(&board, Color::Black, None),
            GameStatus::Check
        );
    }

    #[test]
    fn status_stalemate() {
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(
            StandardChess.status(&board, Color::Black, None),
            GameStatus::Stalemate
        );
    }
}
