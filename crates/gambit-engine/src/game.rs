//! Turn state machine and game management.
//!
//! [`GameState`] is the explicit value the presentation shell drives: it owns
//! the board, the side to move, the status, the current selection and the en
//! passant target. [`Game`] wraps it with a move history for undo.

use crate::rules::{GameStatus, RuleSet, StandardChess};
use crate::view::GameView;
use crate::Board;
use gambit_core::{Color, Fen, FenError, Move, Piece, Square};
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The game has ended; only a reset is accepted.
    #[error("game is over ({0}), reset to play again")]
    GameOver(GameStatus),
    /// No piece stands on the square.
    #[error("no piece on {0}")]
    NoPiece(Square),
    /// The piece on the square belongs to the side not on move.
    #[error("the piece on {0} belongs to the side not on move")]
    NotYourTurn(Square),
    /// The move is not legal in the current position.
    #[error("illegal move: {from}-{to}")]
    IllegalMove { from: Square, to: Square },
    /// The FEN string could not be parsed.
    #[error(transparent)]
    InvalidFen(#[from] FenError),
}

/// What a call to [`GameState::select_or_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A piece of the side to move was selected (or reselected).
    Selected(Square),
    /// The current selection was cleared.
    Deselected,
    /// The selected piece moved; the turn passed to the other side.
    Moved(Move),
    /// Nothing changed.
    Ignored,
}

/// The complete state of a game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Color,
    status: GameStatus,
    selected: Option<Square>,
    legal_moves: Vec<Move>,
    en_passant: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a game in the standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(StandardChess.initial_board(), Color::White, None)
    }

    /// Creates a game from a board, the side to move and an en passant
    /// target. The status is evaluated immediately.
    pub fn from_board(board: Board, turn: Color, en_passant: Option<Square>) -> Self {
        let status = StandardChess.status(&board, turn, en_passant);
        GameState {
            board,
            turn,
            status,
            selected: None,
            legal_moves: Vec::new(),
            en_passant,
        }
    }

    /// Creates a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let parsed = Fen::parse(fen)?;
        Ok(Self::from_board(
            Board::from_pieces(parsed.pieces),
            parsed.active_color,
            parsed.en_passant,
        ))
    }

    /// Restores the standard starting position and clears all transient state.
    pub fn reset(&mut self) -> &GameState {
        *self = Self::new();
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the status for the side to move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the en passant target square, if any.
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Returns the selected piece, if any.
    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selected.and_then(|sq| self.board.piece_at(sq))
    }

    /// Returns the legal moves of the selected piece (empty without a
    /// selection).
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    /// Returns every legal move for the side to move.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }
        StandardChess.legal_moves_for(&self.board, self.turn, self.en_passant)
    }

    /// Handles a click on a board square.
    ///
    /// With nothing selected, clicking a piece of the side to move selects it.
    /// With a selection, clicking one of its legal destinations plays the
    /// move, clicking another friendly piece reselects, and clicking anywhere
    /// else clears the selection.
    pub fn select_or_move(&mut self, sq: Square) -> Result<Selection, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver(self.status));
        }

        if self.selected.is_some() {
            if let Some(m) = self.legal_moves.iter().copied().find(|m| m.to() == sq) {
                self.execute_move(m);
                return Ok(Selection::Moved(m));
            }
        }

        let own = self
            .board
            .piece_at(sq)
            .filter(|p| p.color == self.turn)
            .copied();
        match own {
            Some(piece) => {
                self.legal_moves = StandardChess.legal_moves(&self.board, &piece, self.en_passant);
                self.selected = Some(sq);
                tracing::trace!("selected {} with {} legal moves", sq, self.legal_moves.len());
                Ok(Selection::Selected(sq))
            }
            None if self.selected.is_some() => {
                self.clear_selection();
                Ok(Selection::Deselected)
            }
            None => Ok(Selection::Ignored),
        }
    }

    /// Plays the move from `from` to `to` for the side to move.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Move, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver(self.status));
        }

        let piece = self.board.piece_at(from).ok_or(GameError::NoPiece(from))?;
        if piece.color != self.turn {
            return Err(GameError::NotYourTurn(from));
        }

        let m = StandardChess
            .legal_moves(&self.board, piece, self.en_passant)
            .into_iter()
            .find(|m| m.to() == to)
            .ok_or(GameError::IllegalMove { from, to })?;

        self.execute_move(m);
        Ok(m)
    }

    /// Clears the selection and its highlighted moves.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.legal_moves.clear();
    }

    /// Builds a render snapshot of this state.
    pub fn view(&self) -> GameView {
        GameView::from_state(self)
    }

    /// Executes a legal move and advances the turn.
    pub(crate) fn execute_move(&mut self, m: Move) {
        let mover = self.turn;
        let captured = self.board.apply(m);
        self.en_passant = m.skipped_square();
        self.turn = mover.opposite();
        self.clear_selection();
        self.status = StandardChess.status(&self.board, self.turn, self.en_passant);

        match captured {
            Some(piece) => tracing::debug!("{} played {:?}, capturing {}", mover, m, piece),
            None => tracing::debug!("{} played {:?}", mover, m),
        }
        if self.status.is_terminal() {
            tracing::info!("game over: {} with {} to move", self.status, self.turn);
        }
    }
}

/// A game with move history and undo.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
    /// States before each executed move, selection cleared.
    history: Vec<GameState>,
    moves: Vec<Move>,
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Game {
            state: GameState::new(),
            history: Vec::new(),
            moves: Vec::new(),
        }
    }

    /// Creates a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        Ok(Game {
            state: GameState::from_fen(fen)?,
            history: Vec::new(),
            moves: Vec::new(),
        })
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the moves played so far.
    pub fn move_history(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Handles a click on a board square, recording any executed move.
    pub fn select_or_move(&mut self, sq: Square) -> Result<Selection, GameError> {
        let mut before = self.state.clone();
        let outcome = self.state.select_or_move(sq)?;
        if let Selection::Moved(m) = outcome {
            before.clear_selection();
            self.record(before, m);
        }
        Ok(outcome)
    }

    /// Plays a move by squares, recording it.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Move, GameError> {
        let mut before = self.state.clone();
        let m = self.state.play(from, to)?;
        before.clear_selection();
        self.record(before, m);
        Ok(m)
    }

    /// Takes back the last move. Returns it, or `None` at the start.
    pub fn undo(&mut self) -> Option<Move> {
        let previous = self.history.pop()?;
        self.state = previous;
        let m = self.moves.pop();
        if let Some(m) = m {
            tracing::debug!("took back {}", m);
        }
        m
    }

    /// Restores the standard starting position and forgets the history.
    pub fn reset(&mut self) -> &GameState {
        self.history.clear();
        self.moves.clear();
        self.state.reset()
    }

    fn record(&mut self, before: GameState, m: Move) {
        self.history.push(before);
        self.moves.push(m);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gambit_core::PieceKind;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn play(state: &mut GameState, from: &str, to: &str) -> Move {
        state.play(sq(from), sq(to)).unwrap()
    }

    #[test]
    fn new_game() {
        let state = GameState::new();
        assert_eq!(state.turn(), Color::White);
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.board().len(), 32);
        assert!(state.selected_piece().is_none());
        assert!(state.legal_moves().is_empty());
        assert_eq!(state.en_passant(), None);
        assert_eq!(state.all_legal_moves().len(), 20);
    }

    #[test]
    fn select_then_move() {
        let mut state = GameState::new();
        assert_eq!(
            state.select_or_move(sq("e2")).unwrap(),
            Selection::Selected(sq("e2"))
        );
        assert_eq!(state.selected_piece().map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(state.legal_moves().len(), 2);

        let outcome = state.select_or_move(sq("e4")).unwrap();
        assert!(matches!(outcome, Selection::Moved(m) if m.is_double_step()));
        assert_eq!(state.turn(), Color::Black);
        assert!(state.selected_piece().is_none());
        assert!(state.legal_moves().is_empty());
        assert_eq!(state.en_passant(), Some(sq("e3")));
    }

    #[test]
    fn reselect_and_deselect() {
        let mut state = GameState::new();
        state.select_or_move(sq("e2")).unwrap();
        assert_eq!(
            state.select_or_move(sq("g1")).unwrap(),
            Selection::Selected(sq("g1"))
        );
        assert_eq!(state.legal_moves().len(), 2);

        // Not a destination and not a friendly piece
        assert_eq!(
            state.select_or_move(sq("e5")).unwrap(),
            Selection::Deselected
        );
        assert!(state.selected_piece().is_none());
        assert_eq!(state.turn(), Color::White);
    }

    #[test]
    fn clicks_without_selection_are_ignored() {
        let mut state = GameState::new();
        let before = state.clone();
        assert_eq!(state.select_or_move(sq("e4")).unwrap(), Selection::Ignored);
        assert_eq!(state.select_or_move(sq("e7")).unwrap(), Selection::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn selecting_a_stuck_piece_shows_no_moves() {
        let mut state = GameState::new();
        state.select_or_move(Square::A1).unwrap();
        assert!(state.selected_piece().is_some());
        assert!(state.legal_moves().is_empty());
        assert_eq!(state.select_or_move(sq("a3")).unwrap(), Selection::Deselected);
    }

    #[test]
    fn play_errors() {
        let mut state = GameState::new();
        assert_eq!(
            state.play(sq("e4"), sq("e5")),
            Err(GameError::NoPiece(sq("e4")))
        );
        assert_eq!(
            state.play(sq("e7"), sq("e5")),
            Err(GameError::NotYourTurn(sq("e7")))
        );
        assert_eq!(
            state.play(sq("e2"), sq("e5")),
            Err(GameError::IllegalMove {
                from: sq("e2"),
                to: sq("e5")
            })
        );
    }

    #[test]
    fn en_passant_target_lasts_one_turn() {
        let mut state = GameState::new();
        play(&mut state, "e2", "e4");
        assert_eq!(state.en_passant(), Some(sq("e3")));
        play(&mut state, "g8", "f6");
        assert_eq!(state.en_passant(), None);
        play(&mut state, "e4", "e5");
        play(&mut state, "d7", "d5");
        assert_eq!(state.en_passant(), Some(sq("d6")));

        let m = play(&mut state, "e5", "d6");
        assert!(m.is_en_passant());
        assert!(state.board().piece_at(sq("d5")).is_none());
        assert_eq!(state.en_passant(), None);
    }

    #[test]
    fn promotion_to_queen() {
        let mut state = GameState::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let m = play(&mut state, "a7", "a8");
        assert!(m.is_promotion());
        let queen = state.board().piece_at(sq("a8")).unwrap();
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(queen.color, Color::White);
        assert_eq!(state.status(), GameStatus::Check);
    }

    #[test]
    fn fools_mate() {
        let mut state = GameState::new();
        play(&mut state, "f2", "f3");
        play(&mut state, "e7", "e5");
        play(&mut state, "g2", "g4");
        play(&mut state, "d8", "h4");
        assert_eq!(state.status(), GameStatus::Checkmate);
        assert_eq!(state.turn(), Color::White);
        assert!(state.all_legal_moves().is_empty());
    }

    #[test]
    fn terminal_state_rejects_input() {
        let mut state = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(state.status(), GameStatus::Stalemate);
        assert_eq!(
            state.select_or_move(Square::H8),
            Err(GameError::GameOver(GameStatus::Stalemate))
        );
        assert!(state.play(Square::H8, Square::G8).is_err());

        let fresh = state.reset().clone();
        assert_eq!(fresh, GameState::new());
    }

    #[test]
    fn invalid_fen() {
        assert!(matches!(
            GameState::from_fen("nonsense"),
            Err(GameError::InvalidFen(FenError::InvalidPartCount(1)))
        ));
    }

    #[test]
    fn fen_en_passant_cannot_capture_own_or_non_pawn() {
        for fen in [
            "4k3/8/8/8/8/8/3PP3/4K3 w - e3 0 1",
            "4k3/8/8/8/3pN3/8/8/4K3 b - e3 0 1",
        ] {
            assert!(matches!(
                GameState::from_fen(fen),
                Err(GameError::InvalidFen(FenError::InvalidEnPassantSquare(_)))
            ));
        }

        let mut state = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let m = play(&mut state, "e5", "d6");
        assert!(m.is_en_passant());
        assert!(state.board().piece_at(sq("d5")).is_none());
        assert_eq!(state.board().len(), 3);
    }

    #[test]
    fn game_records_and_undoes() {
        let mut game = Game::new();
        let start = game.state().clone();
        game.play(sq("e2"), sq("e4")).unwrap();
        let after_e4 = game.state().clone();

        game.select_or_move(sq("e7")).unwrap();
        game.select_or_move(sq("e5")).unwrap();
        assert_eq!(game.ply_count(), 2);
        assert_eq!(game.move_history()[1].to(), sq("e5"));

        assert_eq!(game.undo().map(|m| m.to()), Some(sq("e5")));
        assert_eq!(game.state(), &after_e4);
        assert!(game.undo().is_some());
        assert_eq!(game.state(), &start);
        assert_eq!(game.undo(), None);
    }

    #[test]
    fn game_selection_is_not_history() {
        let mut game = Game::new();
        game.select_or_move(sq("b1")).unwrap();
        game.select_or_move(sq("h8")).unwrap();
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn game_reset_forgets_history() {
        let mut game = Game::new();
        game.play(sq("d2"), sq("d4")).unwrap();
        let state = game.reset().clone();
        assert_eq!(state, GameState::new());
        assert_eq!(game.ply_count(), 0);
        assert_eq!(game.undo(), None);
    }
}
