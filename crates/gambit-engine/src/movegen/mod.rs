//! Pseudo-legal move generation.
//!
//! Candidates follow each piece kind's movement and blocking rules but ignore
//! whether the mover's own king ends up attacked; see [`crate::legality`] for
//! the filtering step.

mod attacks;
pub mod perft;

use crate::Board;
use gambit_core::{Move, MoveFlags, Piece, PieceKind, RookHop, Square};

pub use attacks::{
    king_targets, knight_targets, leaps, pawn_capture_targets, ray, slider_directions, Step,
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

/// Generates the pseudo-legal moves of one piece.
///
/// `en_passant` is the square skipped by the opponent's last double step, if
/// any; pawns may capture onto it.
pub fn candidate_moves(board: &Board, piece: &Piece, en_passant: Option<Square>) -> Vec<Move> {
    let mut moves = Vec::new();

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, piece, en_passant, &mut moves),
        PieceKind::Knight => {
            generate_leaper_moves(board, piece, knight_targets(piece.square), &mut moves)
        }
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            generate_slider_moves(board, piece, &mut moves)
        }
        PieceKind::King => {
            generate_leaper_moves(board, piece, king_targets(piece.square), &mut moves);
            generate_castling_moves(board, piece, &mut moves);
        }
    }

    moves
}

/// Returns true if the piece attacks `target`.
///
/// Pawns attack only diagonally forward and kings only their adjacent
/// squares, so pushes and castling never count. Sliders stop at the first
/// occupied square, which is itself attacked whatever its color.
pub fn reaches(board: &Board, piece: &Piece, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_capture_targets(piece.square, piece.color).any(|sq| sq == target),
        PieceKind::Knight => knight_targets(piece.square).any(|sq| sq == target),
        PieceKind::King => king_targets(piece.square).any(|sq| sq == target),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            slider_directions(piece.kind).iter().any(|&dir| {
                for sq in ray(piece.square, dir) {
                    if sq == target {
                        return true;
                    }
                    if !board.is_vacant(sq) {
                        return false;
                    }
                }
                false
            })
        }
    }
}

/// Pushes a move to `to` unless a friendly piece stands there.
///
/// Returns true if `to` was empty.
fn push_unless_friendly(board: &Board, piece: &Piece, to: Square, moves: &mut Vec<Move>) -> bool {
    match board.piece_at(to) {
        None => {
            moves.push(Move::normal(piece.square, to));
            true
        }
        Some(other) => {
            if other.is_enemy_of(piece) {
                moves.push(Move::new(piece.square, to, MoveFlags::CAPTURE));
            }
            false
        }
    }
}

/// Generates knight and king single-jump moves.
fn generate_leaper_moves(
    board: &Board,
    piece: &Piece,
    targets: impl Iterator<Item = Square>,
    moves: &mut Vec<Move>,
) {
    for to in targets {
        push_unless_friendly(board, piece, to, moves);
    }
}

/// Generates bishop, rook and queen moves along their rays.
fn generate_slider_moves(board: &Board, piece: &Piece, moves: &mut Vec<Move>) {
    for &dir in slider_directions(piece.kind) {
        for to in ray(piece.square, dir) {
            if !push_unless_friendly(board, piece, to, moves) {
                break;
            }
        }
    }
}

/// Generates pawn pushes, double steps, captures, and en passant.
fn generate_pawn_moves(
    board: &Board,
    pawn: &Piece,
    en_passant: Option<Square>,
    moves: &mut Vec<Move>,
) {
    let from = pawn.square;
    let dir = pawn.color.pawn_direction();
    let promotion_row = pawn.color.promotion_row();
    let with_promotion = |to: Square, flags: MoveFlags| {
        if to.row() == promotion_row {
            flags | MoveFlags::PROMOTION
        } else {
            flags
        }
    };

    // Single and double pushes
    if let Some(one) = from.offset(0, dir).filter(|&sq| board.is_vacant(sq)) {
        moves.push(Move::new(from, one, with_promotion(one, MoveFlags::NONE)));

        if from.row() == pawn.color.pawn_row() {
            if let Some(two) = one.offset(0, dir).filter(|&sq| board.is_vacant(sq)) {
                moves.push(Move::new(from, two, MoveFlags::DOUBLE_STEP));
            }
        }
    }

    // Diagonal captures, including onto the en passant square
    for to in pawn_capture_targets(from, pawn.color) {
        match board.piece_at(to) {
            Some(target) if target.is_enemy_of(pawn) => {
                moves.push(Move::new(from, to, with_promotion(to, MoveFlags::CAPTURE)));
            }
            Some(_) => {}
            None if en_passant == Some(to) => {
                moves.push(Move::new(
                    from,
                    to,
                    MoveFlags::EN_PASSANT | MoveFlags::CAPTURE,
                ));
            }
            None => {}
        }
    }
}

/// Generates castling candidates for an unmoved king.
///
/// Only placement is checked here: the corner rook must be an unmoved friendly
/// rook and every square between king and rook must be empty. Attack
/// conditions are applied by the legality filter.
fn generate_castling_moves(board: &Board, king: &Piece, moves: &mut Vec<Move>) {
    if king.has_moved {
        return;
    }

    let king_col = king.square.col() as i8;
    for (rook_col, step) in [(7i8, 1i8), (0, -1)] {
        // The king needs two columns of travel plus the rook's landing square.
        if (rook_col - king_col).abs() < 3 {
            continue;
        }
        let Some(rook_sq) = king.square.with_col(rook_col as u8) else {
            continue;
        };
        let rook_ready = board.piece_at(rook_sq).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
        });
        if !rook_ready {
            continue;
        }

        let path_clear = ray(king.square, (step, 0))
            .take_while(|&sq| sq != rook_sq)
            .all(|sq| board.is_vacant(sq));
        if !path_clear {
            continue;
        }

        let to = king.square.offset(2 * step, 0);
        let rook_to = king.square.offset(step, 0);
        if let (Some(to), Some(rook_to)) = (to, rook_to) {
            moves.push(Move::castle(
                king.square,
                to,
                RookHop {
                    from: rook_sq,
                    to: rook_to,
                },
            ));
        }
    }
}
