//! Legal move-tree node counting.
//!
//! Perft counts are published for well-known positions, which makes them the
//! sharpest available check that geometry and legality filtering agree with
//! the rules of chess.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_legal_move, legal_moves, GeneratedMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in legal_moves(game_state)? {
        total.merge(perft_recurse(&mv, depth - 1)?);
    }
    Ok(total)
}

fn perft_recurse(mv: &GeneratedMove, remaining: u8) -> ChessResult<PerftCounts> {
    if remaining == 0 {
        return leaf_counts(mv);
    }

    let mut total = PerftCounts::default();
    for child in legal_moves(&mv.game_after_move)? {
        total.merge(perft_recurse(&child, remaining - 1)?);
    }
    Ok(total)
}

fn leaf_counts(mv: &GeneratedMove) -> ChessResult<PerftCounts> {
    let record = &mv.record;
    let after = &mv.game_after_move;
    let gives_check = is_king_in_check(after, after.side_to_move);

    Ok(PerftCounts {
        nodes: 1,
        captures: record.is_capture() as usize,
        en_passant: record.en_passant as usize,
        castles: record.castle.is_some() as usize,
        promotions: record.promotion.is_some() as usize,
        checks: gives_check as usize,
        checkmates: (gives_check && !has_legal_move(after)?) as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::{perft, PerftCounts};
    use crate::game_state::game_state::GameState;

    fn run(fen: &str, depth: u8) -> PerftCounts {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        perft(&game, depth).expect("perft should run")
    }

    #[test]
    fn startpos_node_counts() {
        let fen = crate::game_state::chess_rules::STARTING_POSITION_FEN;
        assert_eq!(run(fen, 1).nodes, 20);
        assert_eq!(run(fen, 2).nodes, 400);

        let depth3 = run(fen, 3);
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.checks, 12);
        assert_eq!(depth3.checkmates, 0);
    }

    #[test]
    fn kiwipete_exercises_castling_en_passant_and_pins() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let depth1 = run(fen, 1);
        assert_eq!(depth1.nodes, 48);
        assert_eq!(depth1.captures, 8);
        assert_eq!(depth1.castles, 2);

        let depth2 = run(fen, 2);
        assert_eq!(depth2.nodes, 2039);
        assert_eq!(depth2.captures, 351);
        assert_eq!(depth2.en_passant, 1);
        assert_eq!(depth2.castles, 91);
        assert_eq!(depth2.checks, 3);
    }

    #[test]
    fn rook_endgame_with_en_passant_pins() {
        let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
        assert_eq!(run(fen, 1).nodes, 14);
        assert_eq!(run(fen, 2).nodes, 191);
        assert_eq!(run(fen, 3).nodes, 2812);
    }

    #[test]
    fn promotion_heavy_position() {
        let fen = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
        assert_eq!(run(fen, 1).nodes, 6);
        assert_eq!(run(fen, 2).nodes, 264);
    }
}
