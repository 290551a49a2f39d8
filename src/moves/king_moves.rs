//! King geometry: single steps plus castling candidates.
//!
//! Castling candidates here only check rights, piece placement and the empty
//! path between king and rook. Whether the king starts in, passes through or
//! lands on an attacked square is decided by the legality layer.

use crate::game_state::chess_rules::KING_HOME_FILE;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::sliding_moves::{slide_destinations, ALL_DIRECTIONS};

pub fn king_destinations(game_state: &GameState, from: Square, mover: Color, out: &mut Vec<Square>) {
    slide_destinations(game_state, from, mover, &ALL_DIRECTIONS, 1, out);

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if let Some(to) = castling_destination(game_state, from, mover, side) {
            out.push(to);
        }
    }
}

fn castling_destination(
    game_state: &GameState,
    from: Square,
    mover: Color,
    side: CastleSide,
) -> Option<Square> {
    let rank = mover.back_rank();
    if !game_state.castling_rights.has(mover, side)
        || from.rank() != rank
        || from.file() != KING_HOME_FILE
    {
        return None;
    }

    let rook_square = Square::new(rank, side.rook_file()).ok()?;
    if game_state.piece_at(rook_square) != Some(Piece::new(PieceKind::Rook, mover)) {
        return None;
    }

    let (low, high) = if side.rook_file() < KING_HOME_FILE {
        (side.rook_file() + 1, KING_HOME_FILE)
    } else {
        (KING_HOME_FILE + 1, side.rook_file())
    };
    for file in low..high {
        if !game_state.is_empty(Square::new(rank, file).ok()?) {
            return None;
        }
    }

    Square::new(rank, side.king_target_file()).ok()
}

/// Which castle, if any, a king move from `from` to `to` represents.
pub fn castle_side_for_king_move(mover: Color, from: Square, to: Square) -> Option<CastleSide> {
    let rank = mover.back_rank();
    if from.rank() != rank || to.rank() != rank || from.file() != KING_HOME_FILE {
        return None;
    }
    [CastleSide::Kingside, CastleSide::Queenside]
        .into_iter()
        .find(|side| side.king_target_file() == to.file())
}
