//! Legal move validation and enumeration.
//!
//! Candidates come from piece geometry, castling paths are checked for
//! attacked squares, and every survivor is applied to a scratch copy to make
//! sure the mover's own king is not left in check.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{promotion_rank, KING_HOME_FILE};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::moves::king_moves::castle_side_for_king_move;
use crate::moves::move_descriptions::{MoveRecord, MoveRequest};
use crate::moves::piece_moves::piece_destinations;

#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub record: MoveRecord,
    pub game_after_move: GameState,
}

/// Validate `request` for the side to move and return the resulting state.
///
/// `game_state` is only read; the returned state is a detached copy.
pub fn validate_move(game_state: &GameState, request: &MoveRequest) -> ChessResult<(GameState, MoveRecord)> {
    let MoveRequest { from, to, .. } = *request;
    let piece = game_state
        .piece_at(from)
        .ok_or(ChessError::NoPieceAtSquare(from))?;

    if piece.color != game_state.side_to_move {
        return Err(ChessError::NotYourTurn {
            mover: piece.color,
            side_to_move: game_state.side_to_move,
        });
    }

    if !piece_destinations(game_state, from, piece).contains(&to) {
        return Err(ChessError::InvalidMove { from, to });
    }

    simulate(game_state, request, piece)
}

fn simulate(
    game_state: &GameState,
    request: &MoveRequest,
    piece: Piece,
) -> ChessResult<(GameState, MoveRecord)> {
    if piece.kind == PieceKind::King {
        if let Some(side) = castle_side_for_king_move(piece.color, request.from, request.to) {
            check_castling_path(game_state, piece.color, side)?;
        }
    }

    let (next, record) = apply_move(game_state, request)?;
    if is_king_in_check(&next, piece.color) {
        return Err(ChessError::Check);
    }
    Ok((next, record))
}

/// The king may not castle out of check or across an attacked square.
fn check_castling_path(game_state: &GameState, mover: Color, side: CastleSide) -> ChessResult<()> {
    let rank = mover.back_rank();
    let enemy = mover.opposite();
    let transit_file = (KING_HOME_FILE + side.king_target_file()) / 2;

    for file in [KING_HOME_FILE, transit_file] {
        if is_square_attacked(game_state, Square::new(rank, file)?, enemy) {
            return Err(ChessError::Check);
        }
    }
    Ok(())
}

/// Fully legal destinations for the piece on `from`, sorted.
///
/// Only pieces of the side to move have destinations.
pub fn legal_destinations(game_state: &GameState, from: Square) -> ChessResult<Vec<Square>> {
    let Some(piece) = game_state.piece_at(from) else {
        return Ok(Vec::new());
    };
    if piece.color != game_state.side_to_move {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    for to in piece_destinations(game_state, from, piece) {
        match simulate(game_state, &MoveRequest::new(from, to), piece) {
            Ok(_) => out.push(to),
            Err(ChessError::Check) => {}
            Err(other) => return Err(other),
        }
    }
    out.sort();
    Ok(out)
}

/// Every legal move for the side to move, one entry per promotion choice.
pub fn legal_moves(game_state: &GameState) -> ChessResult<Vec<GeneratedMove>> {
    let mut legal = Vec::with_capacity(64);
    for_each_legal_move(game_state, |generated| {
        legal.push(generated);
        true
    })?;
    Ok(legal)
}

pub fn has_legal_move(game_state: &GameState) -> ChessResult<bool> {
    let mut found = false;
    for_each_legal_move(game_state, |_| {
        found = true;
        false
    })?;
    Ok(found)
}

/// Feed legal moves to `visit` until it returns `false`.
fn for_each_legal_move(
    game_state: &GameState,
    mut visit: impl FnMut(GeneratedMove) -> bool,
) -> ChessResult<()> {
    let side = game_state.side_to_move;
    let own_pieces: Vec<(Square, Piece)> = game_state.occupied_by(side).collect();

    for (from, piece) in own_pieces {
        for to in piece_destinations(game_state, from, piece) {
            let promotes = piece.kind == PieceKind::Pawn && to.rank() == promotion_rank(side);
            let requests: Vec<MoveRequest> = if promotes {
                PROMOTION_KINDS
                    .iter()
                    .map(|&kind| MoveRequest::with_promotion(from, to, kind))
                    .collect()
            } else {
                vec![MoveRequest::new(from, to)]
            };

            for request in requests {
                match simulate(game_state, &request, piece) {
                    Ok((game_after_move, record)) => {
                        if !visit(GeneratedMove {
                            record,
                            game_after_move,
                        }) {
                            return Ok(());
                        }
                    }
                    Err(ChessError::Check) => {}
                    Err(other) => return Err(other),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{has_legal_move, legal_destinations, legal_moves, validate_move};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::MoveRequest;
    use crate::utils::algebraic::from_algebraic;

    fn sq(name: &str) -> Square {
        from_algebraic(name).expect("square should parse")
    }

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let game = GameState::new_game();
        assert_eq!(legal_moves(&game).expect("generation should succeed").len(), 20);
    }

    #[test]
    fn pinned_piece_may_only_move_along_the_pin() {
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1").expect("FEN should parse");
        let destinations = legal_destinations(&game, sq("e2")).expect("query should succeed");
        assert_eq!(
            destinations,
            vec![sq("e3"), sq("e4"), sq("e5"), sq("e6"), sq("e7"), sq("e8")]
        );

        let err = validate_move(&game, &MoveRequest::new(sq("e2"), sq("d2")))
            .expect_err("exposing the king should be rejected");
        assert_eq!(err, ChessError::Check);
    }

    #[test]
    fn validation_errors_follow_submission_order() {
        let game = GameState::new_game();
        assert_eq!(
            validate_move(&game, &MoveRequest::new(sq("e4"), sq("e5"))).expect_err("empty origin"),
            ChessError::NoPieceAtSquare(sq("e4"))
        );
        assert_eq!(
            validate_move(&game, &MoveRequest::new(sq("e7"), sq("e5"))).expect_err("wrong side"),
            ChessError::NotYourTurn {
                mover: Color::Black,
                side_to_move: Color::White
            }
        );
        assert_eq!(
            validate_move(&game, &MoveRequest::new(sq("e2"), sq("e5"))).expect_err("bad geometry"),
            ChessError::InvalidMove {
                from: sq("e2"),
                to: sq("e5")
            }
        );
    }

    #[test]
    fn castling_is_refused_out_of_and_through_check() {
        let through = GameState::from_fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        assert!(!legal_destinations(&through, sq("e1"))
            .expect("query should succeed")
            .contains(&sq("g1")));
        assert_eq!(
            validate_move(&through, &MoveRequest::new(sq("e1"), sq("g1"))).expect_err("through check"),
            ChessError::Check
        );

        let out_of = GameState::from_fen("4r1k1/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        assert_eq!(
            validate_move(&out_of, &MoveRequest::new(sq("e1"), sq("g1"))).expect_err("out of check"),
            ChessError::Check
        );

        // b1 may be attacked on the queenside; only d1 and c1 matter.
        let queenside = GameState::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").expect("FEN should parse");
        assert!(legal_destinations(&queenside, sq("e1"))
            .expect("query should succeed")
            .contains(&sq("c1")));
    }

    #[test]
    fn promotion_expands_into_four_moves() {
        let game = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let promotions = legal_moves(&game)
            .expect("generation should succeed")
            .into_iter()
            .filter(|m| m.record.promotion.is_some())
            .count();
        assert_eq!(promotions, 4);
    }

    #[test]
    fn opponent_pieces_have_no_legal_destinations() {
        let game = GameState::new_game();
        assert!(legal_destinations(&game, sq("e7"))
            .expect("query should succeed")
            .is_empty());
    }

    #[test]
    fn stalemated_side_has_no_legal_move() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(!has_legal_move(&game).expect("generation should succeed"));
    }
}
