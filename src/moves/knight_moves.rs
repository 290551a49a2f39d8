//! Knight geometry: the eight fixed L-shaped jumps.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn knight_destinations(game_state: &GameState, from: Square, mover: Color, out: &mut Vec<Square>) {
    for (rank_delta, file_delta) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(rank_delta, file_delta) {
            if game_state.color_at(to) != Some(mover) {
                out.push(to);
            }
        }
    }
}
