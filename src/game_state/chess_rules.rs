//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN and the thresholds for draw conditions.

use crate::game_state::chess_types::Color;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Occurrences of one position signature that end the game as a draw.
pub const REPETITION_DRAW_COUNT: usize = 3;

/// Halfmove clock value at which the fifty-move rule draws the game.
pub const FIFTY_MOVE_HALFMOVE_LIMIT: u16 = 100;

/// File the king starts on for both colors.
pub const KING_HOME_FILE: u8 = 4;

/// Rank index a pawn of the given color starts on.
#[inline]
pub const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// Rank index a pawn of the given color promotes on.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}
