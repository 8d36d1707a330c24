//! Check detection and legal move filtering.
//!
//! King safety is evaluated on a hypothetical successor board built with
//! [`Board::after`], so the live board is only ever borrowed immutably here.

use crate::movegen::{candidate_moves, reaches};
use crate::Board;
use gambit_core::{Color, Move, Piece, Square};

/// Returns true if any piece of color `by` attacks `sq`.
///
/// Attacks follow capture geometry: pawns hit diagonally forward, sliders stop
/// at the first occupied square, and pawn pushes or castling never count.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    board.pieces_of(by).any(|piece| reaches(board, piece, sq))
}

/// Returns true if the king of the given color is attacked.
///
/// A board without that king is treated as not in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.king(color) {
        Some(king) => is_square_attacked(board, king.square, color.opposite()),
        None => {
            tracing::warn!("no {} king on the board, treating as not in check", color);
            false
        }
    }
}

/// Returns true if playing `m` would leave `piece`'s own king attacked.
pub fn would_expose_own_king(board: &Board, piece: &Piece, m: Move) -> bool {
    is_king_in_check(&board.after(m), piece.color)
}

/// Returns the legal moves of one piece.
///
/// Castling additionally requires that the king is not in check now and that
/// the square it crosses is not attacked.
pub fn legal_moves(board: &Board, piece: &Piece, en_passant: Option<Square>) -> Vec<Move> {
    let mut in_check = None;
    candidate_moves(board, piece, en_passant)
        .into_iter()
        .filter(|&m| !would_expose_own_king(board, piece, m))
        .filter(|&m| {
            if !m.is_castling() {
                return true;
            }
            let checked = *in_check.get_or_insert_with(|| is_king_in_check(board, piece.color));
            !checked && castling_transit_is_safe(board, piece, m)
        })
        .collect()
}

fn castling_transit_is_safe(board: &Board, king: &Piece, m: Move) -> bool {
    match m.castling_transit() {
        Some(transit) => !would_expose_own_king(board, king, Move::normal(king.square, transit)),
        None => false,
    }
}

/// Returns every legal move for the given color.
pub fn legal_moves_for(board: &Board, color: Color, en_passant: Option<Square>) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|piece| legal_moves(board, piece, en_passant))
        .collect()
}

/// Returns true if the given color has at least one legal move.
pub fn has_any_legal_move(board: &Board, color: Color, en_passant: Option<Square>) -> bool {
    board
        .pieces_of(color)
        .any(|piece| !legal_moves(board, piece, en_passant).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gambit_core::{MoveFlags, PieceKind};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn legal_of(board: &Board, from: &str) -> Vec<Move> {
        let piece = board.piece_at(sq(from)).unwrap();
        legal_moves(board, piece, None)
    }

    #[test]
    fn startpos_has_twenty_moves_each() {
        let board = Board::standard();
        assert_eq!(legal_moves_for(&board, Color::White, None).len(), 20);
        assert_eq!(legal_moves_for(&board, Color::Black, None).len(), 20);
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn square_attacks() {
        let board = Board::standard();
        assert!(is_square_attacked(&board, sq("e3"), Color::White));
        assert!(!is_square_attacked(&board, sq("e4"), Color::White));
        assert!(is_square_attacked(&board, sq("f6"), Color::Black));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let board = Board::from_fen("8/8/8/8/8/8/8/q3K3 w - - 0 1").unwrap();
        assert!(!is_king_in_check(&board, Color::Black));
        assert!(is_king_in_check(&board, Color::White));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let board = Board::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        assert!(legal_of(&board, "e2").is_empty());
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let board = Board::from_fen("3r2k1/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let king = legal_of(&board, "e1");
        assert!(king.iter().all(|m| m.to().col() != 3));
        assert_eq!(king.len(), 3);
    }

    #[test]
    fn capture_removes_the_checker() {
        let board = Board::from_fen("6k1/8/8/8/8/8/4q3/3RK3 w - - 0 1").unwrap();
        assert!(is_king_in_check(&board, Color::White));
        let king = legal_of(&board, "e1");
        assert!(king.iter().any(|m| m.to() == sq("e2") && m.is_capture()));
    }

    #[test]
    fn en_passant_that_exposes_king_is_illegal() {
        // Capturing en passant would clear the fourth rank between king and rook.
        let board = Board::from_fen("8/8/8/8/k2pP2R/8/8/4K3 b - e3 0 1").unwrap();
        let pawn = board.piece_at(sq("d4")).unwrap();
        let candidates = candidate_moves(&board, pawn, Some(sq("e3")));
        assert!(candidates.iter().any(|m| m.is_en_passant()));
        let legal = legal_moves(&board, pawn, Some(sq("e3")));
        assert!(legal.iter().all(|m| !m.is_en_passant()));
    }

    #[test]
    fn simulation_leaves_board_untouched() {
        let board = Board::from_fen("r3k2r/8/8/8/3pP3/8/8/R3K2R b KQkq e3 0 1").unwrap();
        let snapshot = board.clone();
        for piece in board.pieces_of(Color::Black) {
            for m in candidate_moves(&board, piece, Some(sq("e3"))) {
                would_expose_own_king(&board, piece, m);
            }
        }
        assert_eq!(board, snapshot);
    }

    #[test]
    fn castling_allowed_when_path_is_safe() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let king = legal_of(&board, "e1");
        let castles: Vec<Square> = king.iter().filter(|m| m.is_castling()).map(|m| m.to()).collect();
        assert_eq!(castles.len(), 2);
        assert!(castles.contains(&Square::G1));
        assert!(castles.contains(&Square::C1));
    }

    #[test]
    fn no_castling_out_of_check() {
        let board = Board::from_fen("r3k2r/8/8/8/4r3/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert!(is_king_in_check(&board, Color::White));
        assert!(legal_of(&board, "e1").iter().all(|m| !m.is_castling()));
    }

    #[test]
    fn no_castling_through_attacked_square() {
        // f1 is covered, d1 is not
        let board = Board::from_fen("r3k2r/8/8/8/5r2/8/8/R3K2R w KQkq - 0 1").unwrap();
        let castles: Vec<Square> = legal_of(&board, "e1")
            .iter()
            .filter(|m| m.is_castling())
            .map(|m| m.to())
            .collect();
        assert_eq!(castles, vec![Square::C1]);
    }

    #[test]
    fn no_castling_into_attacked_square() {
        let board = Board::from_fen("r3k2r/8/8/8/6r1/8/8/R3K2R w KQkq - 0 1").unwrap();
        let castles: Vec<Square> = legal_of(&board, "e1")
            .iter()
            .filter(|m| m.is_castling())
            .map(|m| m.to())
            .collect();
        assert_eq!(castles, vec![Square::C1]);
    }

    #[test]
    fn queenside_castling_checks_only_the_king_path() {
        let castles = |fen: &str| -> Vec<Square> {
            let board = Board::from_fen(fen).unwrap();
            legal_of(&board, "e1")
                .iter()
                .filter(|m| m.is_castling())
                .map(|m| m.to())
                .collect()
        };

        // d1 covered
        assert!(castles("4k3/8/8/8/3r4/8/8/R3K3 w Q - 0 1").is_empty());
        // b1 covered, but the king never crosses it
        assert_eq!(castles("4k3/8/8/8/1r6/8/8/R3K3 w Q - 0 1"), vec![Square::C1]);
    }

    #[test]
    fn has_any_legal_move_in_stalemate() {
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(!is_king_in_check(&board, Color::Black));
        assert!(!has_any_legal_move(&board, Color::Black, None));
        assert!(has_any_legal_move(&board, Color::White, None));
    }

    #[test]
    fn promotion_moves_stay_legal() {
        let board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let moves = legal_of(&board, "a7");
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].flags(), MoveFlags::PROMOTION);
        let next = board.after(moves[0]);
        assert_eq!(next.piece_at(sq("a8")).map(|p| p.kind), Some(PieceKind::Queen));
    }
}
