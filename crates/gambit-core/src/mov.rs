//! Move representation.

use crate::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Set of flags describing the special effects of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const NONE: MoveFlags = MoveFlags(0);
    /// The destination holds an enemy piece, or the move is en passant.
    pub const CAPTURE: MoveFlags = MoveFlags(0b0_0001);
    /// Pawn advance of two squares from its starting row.
    pub const DOUBLE_STEP: MoveFlags = MoveFlags(0b0_0010);
    /// Pawn capture of a pawn that just double-stepped past the destination.
    pub const EN_PASSANT: MoveFlags = MoveFlags(0b0_0100);
    /// King moves two columns and the corner rook hops over it.
    pub const CASTLING: MoveFlags = MoveFlags(0b0_1000);
    /// Pawn reaches the far row and becomes a queen.
    pub const PROMOTION: MoveFlags = MoveFlags(0b1_0000);

    /// Returns true if every flag in `other` is set.
    #[inline]
    pub const fn contains(self, other: MoveFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if no flag is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl std::ops::BitOr for MoveFlags {
    type Output = MoveFlags;

    #[inline]
    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for MoveFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: MoveFlags) {
        self.0 |= rhs.0;
    }
}

/// The rook relocation that accompanies a castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RookHop {
    pub from: Square,
    pub to: Square,
}

/// A chess move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    from: Square,
    to: Square,
    flags: MoveFlags,
    rook: Option<RookHop>,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, flags: MoveFlags) -> Self {
        Move {
            from,
            to,
            flags,
            rook: None,
        }
    }

    /// Creates a quiet move (no special flags).
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveFlags::NONE)
    }

    /// Creates a castling move for the king, carrying the rook's hop.
    #[inline]
    pub const fn castle(from: Square, to: Square, rook: RookHop) -> Self {
        Move {
            from,
            to,
            flags: MoveFlags::CASTLING,
            rook: Some(rook),
        }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the move flags.
    #[inline]
    pub const fn flags(self) -> MoveFlags {
        self.flags
    }

    /// Returns the rook hop for castling moves.
    #[inline]
    pub const fn rook(self) -> Option<RookHop> {
        self.rook
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    #[inline]
    pub const fn is_double_step(self) -> bool {
        self.flags.contains(MoveFlags::DOUBLE_STEP)
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.flags.contains(MoveFlags::EN_PASSANT)
    }

    #[inline]
    pub const fn is_castling(self) -> bool {
        self.flags.contains(MoveFlags::CASTLING)
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.flags.contains(MoveFlags::PROMOTION)
    }

    /// Returns the square of the pawn removed by an en passant capture:
    /// the destination's column on the row the mover starts this move from.
    #[inline]
    pub const fn en_passant_victim(self) -> Option<Square> {
        if self.is_en_passant() {
            Square::new(self.to.col(), self.from.row())
        } else {
            None
        }
    }

    /// Returns the square a double-stepping pawn passed over.
    #[inline]
    pub const fn skipped_square(self) -> Option<Square> {
        if self.is_double_step() {
            Square::new(self.from.col(), (self.from.row() + self.to.row()) / 2)
        } else {
            None
        }
    }

    /// Returns the square the king crosses while castling.
    #[inline]
    pub const fn castling_transit(self) -> Option<Square> {
        if self.is_castling() {
            Square::new((self.from.col() + self.to.col()) / 2, self.from.row())
        } else {
            None
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}", self)?;
        for (flag, name) in [
            (MoveFlags::CAPTURE, "capture"),
            (MoveFlags::DOUBLE_STEP, "double-step"),
            (MoveFlags::EN_PASSANT, "en-passant"),
            (MoveFlags::CASTLING, "castling"),
            (MoveFlags::PROMOTION, "promotion"),
        ] {
            if self.flags.contains(flag) {
                write!(f, " {}", name)?;
            }
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
