//! Piece placement store.

use gambit_core::{Color, Fen, FenError, Move, Piece, PieceKind, Square};

/// The live pieces of a game.
///
/// At most 32 pieces exist, so lookups are linear scans. Every mutation keeps
/// squares unique: placing a piece onto an occupied square replaces the
/// occupant. Two boards are equal when they hold the same pieces, whatever
/// the storage order.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pieces: Vec<Piece>,
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|p| other.piece_at(p.square) == Some(p))
    }
}

impl Eq for Board {}

/// Back row layout from the a-file to the h-file.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board { pieces: Vec::new() }
    }

    /// Creates the standard starting position.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, kind) in (0u8..).zip(BACK_ROW) {
                let back = Square::new(col, color.back_row());
                let pawn = Square::new(col, color.pawn_row());
                if let (Some(back), Some(pawn)) = (back, pawn) {
                    board.place_piece(Piece::new(kind, color, back));
                    board.place_piece(Piece::new(PieceKind::Pawn, color, pawn));
                }
            }
        }
        board
    }

    /// Creates a board from the given pieces. Later pieces replace earlier
    /// ones on the same square.
    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece>) -> Self {
        let mut board = Board::empty();
        for piece in pieces {
            board.place_piece(piece);
        }
        board
    }

    /// Creates a board from the placement and castling fields of a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_pieces(Fen::parse(fen)?.pieces))
    }

    /// Returns the piece on the given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.square == sq)
    }

    /// Returns the piece at the given coordinates. Off-board coordinates hold
    /// no piece.
    pub fn piece_at_coords(&self, col: i16, row: i16) -> Option<&Piece> {
        Square::try_from((col, row))
            .ok()
            .and_then(|sq| self.piece_at(sq))
    }

    /// Returns true if no piece stands on the given square.
    #[inline]
    pub fn is_vacant(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Removes and returns the piece on the given square. No-op if empty.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let idx = self.pieces.iter().position(|p| p.square == sq)?;
        Some(self.pieces.swap_remove(idx))
    }

    /// Places a piece, returning any piece it displaced.
    pub fn place_piece(&mut self, piece: Piece) -> Option<Piece> {
        let displaced = self.remove_piece(piece.square);
        self.pieces.push(piece);
        displaced
    }

    /// Moves the piece on `from` to `to` and marks it moved.
    ///
    /// Returns false if `from` is empty. Any piece on `to` is removed.
    pub fn relocate(&mut self, from: Square, to: Square) -> bool {
        if from == to {
            return self.piece_at(from).is_some();
        }
        if self.is_vacant(from) {
            return false;
        }
        self.remove_piece(to);
        match self.pieces.iter_mut().find(|p| p.square == from) {
            Some(piece) => {
                piece.square = to;
                piece.has_moved = true;
                true
            }
            None => false,
        }
    }

    /// Iterates over all live pieces in no particular order.
    pub fn iter(&self) -> std::slice::Iter<'_, Piece> {
        self.pieces.iter()
    }

    /// Iterates over the pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| p.color == color)
    }

    /// Returns the king of the given color, if present.
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces_of(color).find(|p| p.kind == PieceKind::King)
    }

    /// Returns the number of live pieces.
    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Applies the board effects of a move and returns the captured piece.
    ///
    /// In order: the en passant victim is removed, any piece on the
    /// destination is removed, a castling rook hops, the mover is relocated
    /// and marked moved, and a pawn reaching its far row becomes a queen.
    /// Turn order and the en passant target are the caller's business.
    pub fn apply(&mut self, m: Move) -> Option<Piece> {
        let Some(mover) = self.piece_at(m.from()).copied() else {
            tracing::warn!("no piece on {} to play {}", m.from(), m);
            return None;
        };

        let mut captured = m.en_passant_victim().and_then(|sq| self.remove_piece(sq));
        if let Some(piece) = self.remove_piece(m.to()) {
            captured = Some(piece);
        }

        if let Some(hop) = m.rook() {
            self.relocate(hop.from, hop.to);
        }

        self.relocate(m.from(), m.to());

        if mover.kind == PieceKind::Pawn && m.to().row() == mover.color.promotion_row() {
            if let Some(piece) = self.pieces.iter_mut().find(|p| p.square == m.to()) {
                piece.kind = PieceKind::Queen;
            }
        }

        captured
    }

    /// Returns the hypothetical board after a move, leaving `self` untouched.
    pub fn after(&self, m: Move) -> Board {
        let mut next = self.clone();
        next.apply(m);
        next
    }

    /// Returns the FEN placement field for this board.
    pub fn placement(&self) -> String {
        Fen::placement_of(&self.pieces)
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Piece;
    type IntoIter = std::slice::Iter<'a, Piece>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
