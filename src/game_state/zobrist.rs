//! Zobrist hashing support for position identity and repetition tracking.
//!
//! The keys are generated from a fixed seed so hashes are deterministic across
//! runs, which is useful for testing and debugging.

use std::sync::OnceLock;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color {
            for sq in piece {
                *sq = next_random_u64(&mut seed);
            }
        }
    }

    let side_to_move = next_random_u64(&mut seed);

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = next_random_u64(&mut seed);
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = next_random_u64(&mut seed);
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

#[inline]
fn next_random_u64(state: &mut u64) -> u64 {
    // splitmix64
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
fn piece_square_key(piece: Piece, square: Square) -> u64 {
    let index = square.rank() as usize * 8 + square.file() as usize;
    tables().piece_square[piece.color.index()][piece.kind.index()][index]
}

/// Compute the position signature: occupancy, side to move, castling rights
/// and the en passant file when a capture onto it is actually available.
pub fn compute_position_key(game_state: &GameState) -> u64 {
    let mut key = 0u64;

    for square in Square::all() {
        if let Some(piece) = game_state.piece_at(square) {
            key ^= piece_square_key(piece, square);
        }
    }

    if game_state.side_to_move == Color::Black {
        key ^= tables().side_to_move;
    }

    key ^= tables().castling[game_state.castling_rights.bits() as usize];

    if let Some(ep_square) = game_state.en_passant_square {
        if en_passant_capture_available(game_state, ep_square) {
            key ^= tables().en_passant_file[ep_square.file() as usize];
        }
    }

    key
}

/// A pawn of the side to move stands diagonally behind the target square.
fn en_passant_capture_available(game_state: &GameState, ep_square: Square) -> bool {
    let side = game_state.side_to_move;
    let capturer = Piece::new(PieceKind::Pawn, side);
    [-1i8, 1].into_iter().any(|file_delta| {
        ep_square
            .offset(-side.forward(), file_delta)
            .and_then(|sq| game_state.piece_at(sq))
            == Some(capturer)
    })
}
