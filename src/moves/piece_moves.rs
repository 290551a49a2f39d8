//! Pseudo-legal destination generation, dispatched on the piece kind.

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::king_moves::king_destinations;
use crate::moves::knight_moves::knight_destinations;
use crate::moves::pawn_moves::pawn_destinations;
use crate::moves::sliding_moves::{
    slide_destinations, ALL_DIRECTIONS, DIAGONAL_DIRECTIONS, MAX_SLIDE_DISTANCE,
    ORTHOGONAL_DIRECTIONS,
};

/// Destinations for `piece` standing on `from`, ignoring self-check.
pub fn piece_destinations(game_state: &GameState, from: Square, piece: Piece) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    let mover = piece.color;

    match piece.kind {
        PieceKind::Pawn => pawn_destinations(game_state, from, mover, &mut out),
        PieceKind::Knight => knight_destinations(game_state, from, mover, &mut out),
        PieceKind::Bishop => slide_destinations(
            game_state,
            from,
            mover,
            &DIAGONAL_DIRECTIONS,
            MAX_SLIDE_DISTANCE,
            &mut out,
        ),
        PieceKind::Rook => slide_destinations(
            game_state,
            from,
            mover,
            &ORTHOGONAL_DIRECTIONS,
            MAX_SLIDE_DISTANCE,
            &mut out,
        ),
        PieceKind::Queen => slide_destinations(
            game_state,
            from,
            mover,
            &ALL_DIRECTIONS,
            MAX_SLIDE_DISTANCE,
            &mut out,
        ),
        PieceKind::King => king_destinations(game_state, from, mover, &mut out),
    }

    out
}

/// Destinations for whatever occupies `from`; empty when the square is empty.
pub fn pseudo_legal_destinations(game_state: &GameState, from: Square) -> Vec<Square> {
    match game_state.piece_at(from) {
        Some(piece) => piece_destinations(game_state, from, piece),
        None => Vec::new(),
    }
}
