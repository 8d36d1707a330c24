//! Board square representation.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when building a square from untrusted input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SquareError {
    #[error("coordinates ({col}, {row}) are off the board")]
    OutOfBounds { col: i16, row: i16 },

    #[error("invalid square name: '{0}'")]
    InvalidName(String),
}

/// A square on the chess board, addressed by column and row.
///
/// Column 0 is the a-file. Row 0 is Black's back rank (rank 8) and row 7 is
/// White's back rank (rank 1), so White pawns advance toward row 0.
/// Internally packed as `row * 8 + col`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of columns and rows.
    pub const SIZE: u8 = 8;

    /// Creates a square from column and row, or `None` if off the board.
    #[inline]
    pub const fn new(col: u8, row: u8) -> Option<Self> {
        if col < Self::SIZE && row < Self::SIZE {
            Some(Square(row * Self::SIZE + col))
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, or `None` if off the board.
    #[inline]
    pub const fn from_coords(col: i8, row: i8) -> Option<Self> {
        if col < 0 || row < 0 {
            return None;
        }
        Self::new(col as u8, row as u8)
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Self::new(file - b'a', b'8' - rank)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the column (0-7, a-file first).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % Self::SIZE
    }

    /// Returns the row (0-7, rank 8 first).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / Self::SIZE
    }

    /// Returns the square shifted by the given column and row deltas, if it
    /// stays on the board.
    #[inline]
    pub const fn offset(self, dc: i8, dr: i8) -> Option<Self> {
        Self::from_coords(self.col() as i8 + dc, self.row() as i8 + dr)
    }

    /// Returns the square in column `col` on this square's row.
    #[inline]
    pub const fn with_col(self, col: u8) -> Option<Self> {
        Self::new(col, self.row())
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col()) as char;
        let rank = (b'8' - self.row()) as char;
        format!("{}{}", file, rank)
    }

    /// Iterates over all 64 squares, row 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    // Back-rank corners and king/queen squares
    pub const A8: Square = Square(0);
    pub const B8: Square = Square(1);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);
}

impl TryFrom<(i16, i16)> for Square {
    type Error = SquareError;

    fn try_from((col, row): (i16, i16)) -> Result<Self, Self::Error> {
        if (0..8).contains(&col) && (0..8).contains(&row) {
            Ok(Square(row as u8 * Self::SIZE + col as u8))
        } else {
            Err(SquareError::OutOfBounds { col, row })
        }
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s).ok_or_else(|| SquareError::InvalidName(s.to_string()))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_algebraic())
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}
