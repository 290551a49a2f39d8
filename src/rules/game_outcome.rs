//! Game outcome classification for the side about to move.

use std::fmt;

use crate::errors::ChessResult;
use crate::game_state::chess_rules::{FIFTY_MOVE_HALFMOVE_LIMIT, REPETITION_DRAW_COUNT};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

/// Computed fresh after every applied move; never stored in the FEN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    /// The given side is in check but has a legal reply.
    Check(Color),
    Checkmate { winner: Color },
    Stalemate,
    DrawByRepetition,
    DrawByFiftyMoveRule,
}

impl GameOutcome {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Ongoing | GameOutcome::Check(_))
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "ongoing"),
            GameOutcome::Check(color) => write!(f, "{color} is in check"),
            GameOutcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameOutcome::Stalemate => write!(f, "stalemate"),
            GameOutcome::DrawByRepetition => write!(f, "draw by threefold repetition"),
            GameOutcome::DrawByFiftyMoveRule => write!(f, "draw by the fifty-move rule"),
        }
    }
}

/// Classify the position from the point of view of the side to move.
///
/// Mate and stalemate take precedence over repetition, which takes
/// precedence over the fifty-move rule.
pub fn classify_position(game_state: &GameState) -> ChessResult<GameOutcome> {
    let side = game_state.side_to_move;
    let in_check = is_king_in_check(game_state, side);

    if !has_legal_move(game_state)? {
        return Ok(if in_check {
            GameOutcome::Checkmate {
                winner: side.opposite(),
            }
        } else {
            GameOutcome::Stalemate
        });
    }

    if game_state.repetition_count() >= REPETITION_DRAW_COUNT {
        return Ok(GameOutcome::DrawByRepetition);
    }
    if game_state.halfmove_clock >= FIFTY_MOVE_HALFMOVE_LIMIT {
        return Ok(GameOutcome::DrawByFiftyMoveRule);
    }

    Ok(if in_check {
        GameOutcome::Check(side)
    } else {
        GameOutcome::Ongoing
    })
}
