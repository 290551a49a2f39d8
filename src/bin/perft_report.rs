//! Perft report runner.
//!
//! Usage:
//! `cargo run --release --bin perft_report`
//! `cargo run --release --bin perft_report -- --depth 4`

use std::time::Instant;

use ferrule_chess::move_generation::perft::perft;
use ferrule_chess::{ChessError, GameState};

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v.max(1);
            }
        }
    }
    default
}

fn run_case(name: &str, fen: &str, depth: u8) -> Result<(), ChessError> {
    let game = GameState::from_fen(fen)?;
    let started = Instant::now();
    let counts = perft(&game, depth)?;
    println!(
        "{name}: depth={depth} nodes={} captures={} en_passant={} castles={} promotions={} checks={} checkmates={} elapsed_ms={}",
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates,
        started.elapsed().as_millis()
    );
    Ok(())
}

fn main() -> Result<(), ChessError> {
    let depth = parse_arg_u8("--depth", 3);
    let suite = [
        (
            "startpos",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        ),
        (
            "kiwipete",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        ),
        ("rook_endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
        (
            "promotions",
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        ),
    ];
    println!("perft report: depth={depth}");
    for (name, fen) in suite {
        run_case(name, fen, depth)?;
    }
    Ok(())
}
