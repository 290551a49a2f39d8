//! Ray walking shared by rooks, bishops, queens and the king's single steps.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (0, -1),
    (0, 1),
    (1, 0),
];

/// Full-board ray length for rooks, bishops and queens.
pub const MAX_SLIDE_DISTANCE: u8 = 8;

/// Walk each direction up to `max_distance` squares. A ray ends at the
/// first occupied square, which is kept only when it holds an enemy piece.
pub fn slide_destinations(
    game_state: &GameState,
    from: Square,
    mover: Color,
    directions: &[(i8, i8)],
    max_distance: u8,
    out: &mut Vec<Square>,
) {
    for &(rank_step, file_step) in directions {
        let mut current = from;
        for _ in 0..max_distance {
            let Some(next) = current.offset(rank_step, file_step) else {
                break;
            };
            match game_state.color_at(next) {
                None => out.push(next),
                Some(color) => {
                    if color != mover {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// First occupied square along a ray, if any.
pub fn first_blocker(game_state: &GameState, from: Square, direction: (i8, i8)) -> Option<Square> {
    let mut current = from;
    while let Some(next) = current.offset(direction.0, direction.1) {
        if !game_state.is_empty(next) {
            return Some(next);
        }
        current = next;
    }
    None
}
