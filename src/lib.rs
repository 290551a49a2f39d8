//! Crate root module declarations for the Ferrule chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, piece geometry,
//! legal move generation, the move engine, and notation helpers) so binaries,
//! tests, and external front ends can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod zobrist;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod rules {
    pub mod game_outcome;
    pub mod move_engine;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
}

pub use errors::{ChessError, ChessResult};
pub use game_state::chess_types::{CastleSide, CastlingRights, Color, Piece, PieceKind, Square};
pub use game_state::game_state::GameState;
pub use moves::move_descriptions::{MoveRecord, MoveRequest};
pub use rules::game_outcome::GameOutcome;
pub use rules::move_engine::ChessGame;
