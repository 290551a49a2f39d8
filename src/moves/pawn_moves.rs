//! Pawn geometry: pushes, double pushes, diagonal captures and en passant.

use crate::game_state::chess_rules::pawn_home_rank;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;

/// Squares a pawn of `color` on `from` attacks diagonally.
pub fn pawn_capture_squares(color: Color, from: Square) -> impl Iterator<Item = Square> {
    [-1i8, 1]
        .into_iter()
        .filter_map(move |file_delta| from.offset(color.forward(), file_delta))
}

pub fn pawn_destinations(game_state: &GameState, from: Square, mover: Color, out: &mut Vec<Square>) {
    if let Some(one_step) = from.offset(mover.forward(), 0) {
        if game_state.is_empty(one_step) {
            out.push(one_step);

            if from.rank() == pawn_home_rank(mover) {
                if let Some(two_step) = one_step.offset(mover.forward(), 0) {
                    if game_state.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for to in pawn_capture_squares(mover, from) {
        match game_state.color_at(to) {
            Some(color) if color != mover => out.push(to),
            None if game_state.en_passant_square == Some(to) => out.push(to),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pawn_destinations;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::from_algebraic;

    fn sq(name: &str) -> Square {
        from_algebraic(name).expect("square should parse")
    }

    fn sorted_destinations(fen: &str, from: &str, mover: Color) -> Vec<Square> {
        let game_state = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        pawn_destinations(&game_state, sq(from), mover, &mut out);
        out.sort();
        out
    }

    #[test]
    fn home_rank_pawn_can_advance_one_or_two() {
        let out = sorted_destinations(STARTING_POSITION_FEN, "e2", Color::White);
        assert_eq!(out, vec![sq("e3"), sq("e4")]);

        let out = sorted_destinations(STARTING_POSITION_FEN, "d7", Color::Black);
        assert_eq!(out, vec![sq("d5"), sq("d6")]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let out = sorted_destinations("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", "e2", Color::White);
        assert!(out.is_empty());

        let out = sorted_destinations("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", "e2", Color::White);
        assert_eq!(out, vec![sq("e3")]);
    }

    #[test]
    fn captures_only_enemy_pieces_diagonally() {
        let out = sorted_destinations("4k3/8/8/8/8/3p1N2/4P3/4K3 w - - 0 1", "e2", Color::White);
        assert_eq!(out, vec![sq("d3"), sq("e3"), sq("e4")]);
    }

    #[test]
    fn en_passant_target_is_a_destination() {
        let out = sorted_destinations("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", "e5", Color::White);
        assert_eq!(out, vec![sq("d6"), sq("e6")]);

        let out = sorted_destinations("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1", "e5", Color::White);
        assert_eq!(out, vec![sq("e6")]);
    }
}
