//! The move engine: the single owner of a live game.
//!
//! `ChessGame` validates requests against a scratch copy of the board, swaps
//! the copy in only when the move is legal, and classifies the resulting
//! position. Callers that share a game between actors must serialize calls.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::{legal_destinations, validate_move};
use crate::moves::move_descriptions::{MoveRecord, MoveRequest};
use crate::rules::game_outcome::{classify_position, GameOutcome};
use crate::utils::algebraic::from_algebraic;
use crate::utils::long_algebraic::parse_move_text;

#[derive(Debug, Clone)]
pub struct ChessGame {
    state: GameState,
    outcome: GameOutcome,
    move_log: Vec<MoveRecord>,
    /// Pieces taken by each color, indexed by the capturing color.
    captured: [Vec<Piece>; 2],
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// A game from the standard starting position.
    pub fn new() -> Self {
        Self {
            state: GameState::new_game(),
            outcome: GameOutcome::Ongoing,
            move_log: Vec::new(),
            captured: [Vec::new(), Vec::new()],
        }
    }

    /// Load a game from FEN. Repetition history starts at the loaded position,
    /// since FEN cannot carry the moves that led to it.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let state = GameState::from_fen(fen)?;
        let outcome = classify_position(&state)?;
        Ok(Self {
            state,
            outcome,
            move_log: Vec::new(),
            captured: [Vec::new(), Vec::new()],
        })
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.state.piece_at(square)
    }

    #[inline]
    pub fn fen(&self) -> String {
        self.state.get_fen()
    }

    #[inline]
    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    #[inline]
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    /// Legal destinations for the piece on `square`; empty once the game is over.
    pub fn legal_destinations(&self, square: Square) -> ChessResult<Vec<Square>> {
        if self.outcome.is_terminal() {
            return Ok(Vec::new());
        }
        legal_destinations(&self.state, square)
    }

    /// Submit a move. On success the returned outcome describes the position
    /// now facing the opponent. On error the game is left exactly as it was.
    pub fn submit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<GameOutcome> {
        self.submit(&MoveRequest { from, to, promotion })
    }

    pub fn submit(&mut self, request: &MoveRequest) -> ChessResult<GameOutcome> {
        if self.outcome.is_terminal() {
            return Err(ChessError::GameOver(self.outcome));
        }

        let (next, record) = validate_move(&self.state, request)?;
        let outcome = classify_position(&next)?;

        if let Some(captured) = record.captured {
            self.captured[record.piece.color.index()].push(captured);
        }
        self.move_log.push(record);
        self.state = next;
        self.outcome = outcome;

        Ok(outcome)
    }

    /// Submit a move written as two algebraic squares plus an optional
    /// promotion letter, e.g. `("E7", "E8", Some('n'))`.
    pub fn submit_algebraic(
        &mut self,
        from: &str,
        to: &str,
        promotion: Option<char>,
    ) -> ChessResult<GameOutcome> {
        let from = from_algebraic(from)?;
        let to = from_algebraic(to)?;
        let promotion = promotion
            .map(PieceKind::from_letter)
            .transpose()
            .map_err(|_| ChessError::InvalidMove { from, to })?;
        self.submit_move(from, to, promotion)
    }

    /// Submit coordinate move text such as `e2e4` or `e7e8q`, the form an
    /// external move suggester answers with. It gets no special trust.
    pub fn submit_move_text(&mut self, text: &str) -> ChessResult<GameOutcome> {
        let request = parse_move_text(text)?;
        self.submit(&request)
    }
}
