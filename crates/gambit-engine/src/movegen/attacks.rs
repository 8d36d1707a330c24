//! Step tables and target iterators for each piece kind.

use gambit_core::{Color, PieceKind, Square};

/// A (column, row) step.
pub type Step = (i8, i8);

pub const KNIGHT_OFFSETS: [Step; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [Step; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const BISHOP_DIRECTIONS: [Step; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const ROOK_DIRECTIONS: [Step; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const QUEEN_DIRECTIONS: [Step; 8] = KING_OFFSETS;

/// Returns the sliding directions for a piece kind (empty for non-sliders).
pub const fn slider_directions(kind: PieceKind) -> &'static [Step] {
    match kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &[],
    }
}

/// Returns the on-board squares one jump away by each offset.
pub fn leaps(from: Square, offsets: &'static [Step]) -> impl Iterator<Item = Square> {
    offsets
        .iter()
        .filter_map(move |&(dc, dr)| from.offset(dc, dr))
}

/// Returns the squares from `from` (exclusive) toward the board edge.
pub fn ray(from: Square, (dc, dr): Step) -> impl Iterator<Item = Square> {
    std::iter::successors(from.offset(dc, dr), move |sq| sq.offset(dc, dr))
}

/// Returns knight targets from the given square.
#[inline]
pub fn knight_targets(sq: Square) -> impl Iterator<Item = Square> {
    leaps(sq, &KNIGHT_OFFSETS)
}

/// Returns king targets from the given square.
#[inline]
pub fn king_targets(sq: Square) -> impl Iterator<Item = Square> {
    leaps(sq, &KING_OFFSETS)
}

/// Returns the two diagonal squares a pawn of the given color captures on.
#[inline]
pub fn pawn_capture_targets(sq: Square, color: Color) -> impl Iterator<Item = Square> {
    let dr = color.pawn_direction();
    [-1i8, 1].into_iter().filter_map(move |dc| sq.offset(dc, dr))
}
