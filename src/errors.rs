use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};
use crate::rules::game_outcome::GameOutcome;

pub type ChessResult<T> = Result<T, ChessError>;

/// Every way a request against the rules engine can be refused.
///
/// Rejections never leave a partially-applied move behind: the game is
/// byte-identical before and after any call that returns one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Malformed or out-of-range square text or indices.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("no piece at {0}")]
    NoPieceAtSquare(Square),
    #[error("not {mover}'s turn, {side_to_move} to move")]
    NotYourTurn { mover: Color, side_to_move: Color },
    #[error("invalid move {from} -> {to}")]
    InvalidMove { from: Square, to: Square },
    /// The move would leave or place the mover's own king in check.
    #[error("move leaves own king in check")]
    Check,
    #[error("malformed FEN: {0}")]
    MalformedFen(String),
    #[error("invalid color '{0}'")]
    InvalidColor(char),
    #[error("invalid piece kind '{0}'")]
    InvalidPieceKind(char),
    /// The game already reached a terminal outcome.
    #[error("game is over: {0}")]
    GameOver(GameOutcome),
    /// Internal invariant violation, e.g. an externally forced illegal board.
    #[error("invalid game state: {0}")]
    InvalidState(String),
}
