//! Attack detection: whether a square or a king is under attack.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::pawn_moves::pawn_capture_squares;
use crate::moves::sliding_moves::{first_blocker, ALL_DIRECTIONS, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

/// A side without a king on the board is never in check.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// Whether any piece of `attacker_color` could capture on `square`.
///
/// Works on empty squares too, which castling transit checks rely on.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Square, kinds: &[PieceKind]| {
        matches!(
            game_state.piece_at(sq),
            Some(piece) if piece.color == attacker_color && kinds.contains(&piece.kind)
        )
    };

    // An attacking pawn sits where its own capture squares include `square`.
    let defender = attacker_color.opposite();
    if pawn_capture_squares(defender, square).any(|sq| holds(sq, &[PieceKind::Pawn])) {
        return true;
    }

    let knight_hit = KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dr, df)| square.offset(dr, df))
        .any(|sq| holds(sq, &[PieceKind::Knight]));
    if knight_hit {
        return true;
    }

    let king_hit = ALL_DIRECTIONS
        .iter()
        .filter_map(|&(dr, df)| square.offset(dr, df))
        .any(|sq| holds(sq, &[PieceKind::King]));
    if king_hit {
        return true;
    }

    let diagonal_hit = DIAGONAL_DIRECTIONS.iter().any(|&direction| {
        first_blocker(game_state, square, direction)
            .is_some_and(|sq| holds(sq, &[PieceKind::Bishop, PieceKind::Queen]))
    });
    if diagonal_hit {
        return true;
    }

    ORTHOGONAL_DIRECTIONS.iter().any(|&direction| {
        first_blocker(game_state, square, direction)
            .is_some_and(|sq| holds(sq, &[PieceKind::Rook, PieceKind::Queen]))
    })
}
