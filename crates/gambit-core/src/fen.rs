//! FEN (Forsyth-Edwards Notation) position setup.
//!
//! Only the fields the rules engine cares about are kept: piece placement,
//! side to move, castling availability and the en passant square. Castling
//! availability is folded into each king's and corner rook's `has_moved`
//! flag. The halfmove clock and fullmove number are optional and ignored.

use crate::{Color, Piece, PieceKind, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 4 or 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid move counter: {0}")]
    InvalidCounter(String),
}

/// A parsed FEN position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Pieces in placement order (row 0 first), with `has_moved` derived
    /// from castling availability and pawn rows.
    pub pieces: Vec<Piece>,
    /// The side to move.
    pub active_color: Color,
    /// En passant target square, if any.
    pub en_passant: Option<Square>,
}

impl Fen {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 4 && parts.len() != 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let active_color = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let rights = Self::parse_castling(parts[2])?;
        let en_passant = Self::parse_en_passant(parts[3])?;

        for counter in parts.iter().skip(4) {
            counter
                .parse::<u32>()
                .map_err(|_| FenError::InvalidCounter(counter.to_string()))?;
        }

        let mut pieces = Self::parse_placement(parts[0])?;
        for piece in &mut pieces {
            piece.has_moved = !Self::is_unmoved(piece, &rights);
        }

        if let Some(target) = en_passant {
            if !Self::en_passant_is_consistent(target, active_color, &pieces) {
                return Err(FenError::InvalidEnPassantSquare(parts[3].to_string()));
            }
        }

        Ok(Fen {
            pieces,
            active_color,
            en_passant,
        })
    }

    /// Writes the placement field for the given pieces.
    pub fn placement_of<'a>(pieces: impl IntoIterator<Item = &'a Piece>) -> String {
        let mut grid = [[None::<char>; 8]; 8];
        for piece in pieces {
            grid[piece.square.row() as usize][piece.square.col() as usize] =
                Some(piece.fen_char());
        }

        let mut fen = String::new();
        for (row, cells) in grid.iter().enumerate() {
            let mut empty_count = 0;
            for cell in cells {
                match cell {
                    Some(c) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(*c);
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }
        fen
    }

    fn parse_placement(placement: &str) -> Result<Vec<Piece>, FenError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                rows.len()
            )));
        }

        let mut pieces = Vec::new();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0u32;
            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    col += digit;
                } else if let Some((kind, color)) = PieceKind::from_fen_char(c) {
                    let square = Square::new(col as u8, row as u8).ok_or_else(|| {
                        FenError::InvalidPiecePlacement(format!(
                            "rank {} overflows the board",
                            8 - row
                        ))
                    })?;
                    pieces.push(Piece::new(kind, color, square));
                    col += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - row
                    )));
                }
            }
            if col != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - row,
                    col
                )));
            }
        }

        Ok(pieces)
    }

    fn parse_castling(castling: &str) -> Result<CastlingRights, FenError> {
        let mut rights = CastlingRights::default();
        if castling == "-" {
            return Ok(rights);
        }

        for c in castling.chars() {
            match c {
                'K' => rights.kingside[Color::White.index()] = true,
                'Q' => rights.queenside[Color::White.index()] = true,
                'k' => rights.kingside[Color::Black.index()] = true,
                'q' => rights.queenside[Color::Black.index()] = true,
                _ => {
                    return Err(FenError::InvalidCastlingRights(format!(
                        "invalid character '{}'",
                        c
                    )))
                }
            }
        }

        Ok(rights)
    }

    fn parse_en_passant(ep: &str) -> Result<Option<Square>, FenError> {
        if ep == "-" {
            return Ok(None);
        }

        match Square::from_algebraic(ep) {
            // Only the third and sixth ranks can be skipped by a double step.
            Some(sq) if sq.row() == 2 || sq.row() == 5 => Ok(Some(sq)),
            _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
        }
    }

    /// The target must be the empty square an enemy pawn just skipped: on
    /// the side to move's capture rank, with that pawn directly beyond it.
    fn en_passant_is_consistent(target: Square, active: Color, pieces: &[Piece]) -> bool {
        let mover = active.opposite();
        let skipped_row = (mover.pawn_row() as i8 + mover.pawn_direction()) as u8;
        if target.row() != skipped_row {
            return false;
        }

        let occupant = |sq: Square| pieces.iter().find(|p| p.square == sq);
        let victim = target
            .offset(0, mover.pawn_direction())
            .and_then(&occupant);

        occupant(target).is_none()
            && matches!(victim, Some(p) if p.kind == PieceKind::Pawn && p.color == mover)
    }

    fn is_unmoved(piece: &Piece, rights: &CastlingRights) -> bool {
        let side = piece.color.index();
        let back_row = piece.color.back_row();
        match piece.kind {
            PieceKind::Pawn => piece.square.row() == piece.color.pawn_row(),
            PieceKind::King => {
                piece.square.row() == back_row
                    && piece.square.col() == 4
                    && (rights.kingside[side] || rights.queenside[side])
            }
            PieceKind::Rook if piece.square.row() == back_row => match piece.square.col() {
                0 => rights.queenside[side],
                7 => rights.kingside[side],
                _ => false,
            },
            PieceKind::Rook => false,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => true,
        }
    }
}

#[derive(Debug, Default)]
struct CastlingRights {
    kingside: [bool; 2],
    queenside: [bool; 2],
}
