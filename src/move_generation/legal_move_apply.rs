//! Applies a geometrically valid move to a detached copy of the game state.
//!
//! The input state is never touched; callers decide whether the returned
//! copy replaces the live state or is thrown away after a legality probe.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::king_moves::castle_side_for_king_move;
use crate::moves::move_descriptions::{MoveRecord, MoveRequest};

pub fn apply_move(game_state: &GameState, request: &MoveRequest) -> ChessResult<(GameState, MoveRecord)> {
    let MoveRequest { from, to, .. } = *request;
    let piece = game_state
        .piece_at(from)
        .ok_or(ChessError::NoPieceAtSquare(from))?;
    let mover = piece.color;

    let mut next = game_state.clone();
    let mut record = MoveRecord {
        from,
        to,
        piece,
        captured: game_state.piece_at(to),
        promotion: None,
        castle: None,
        en_passant: false,
        double_pawn_push: false,
    };

    if record.captured.is_some_and(|captured| captured.kind == PieceKind::King) {
        return Err(ChessError::InvalidState(format!(
            "move {from} -> {to} would capture a king"
        )));
    }

    // Special cases, in order: castling, en passant, promotion.
    let mut placed = piece;
    if piece.kind == PieceKind::King {
        if let Some(side) = castle_side_for_king_move(mover, from, to) {
            let rank = mover.back_rank();
            let rook_from = Square::new(rank, side.rook_file())?;
            let rook_to = Square::new(rank, side.rook_target_file())?;
            let rook = next.take_piece(rook_from);
            next.set_piece(rook_to, rook);
            record.castle = Some(side);
        }
    } else if piece.kind == PieceKind::Pawn {
        if game_state.en_passant_square == Some(to) && from.file() != to.file() && record.captured.is_none() {
            let victim_square = Square::new(from.rank(), to.file())?;
            let victim = next.take_piece(victim_square);
            if victim != Some(Piece::new(PieceKind::Pawn, mover.opposite())) {
                return Err(ChessError::InvalidState(format!(
                    "en passant {from} -> {to} has no enemy pawn on {victim_square}"
                )));
            }
            record.captured = victim;
            record.en_passant = true;
        }
        if to.rank() == promotion_rank(mover) {
            let kind = request.promotion.unwrap_or(PieceKind::Queen);
            if !kind.is_promotion_target() {
                return Err(ChessError::InvalidMove { from, to });
            }
            placed = Piece::new(kind, mover);
            record.promotion = Some(kind);
        }
        record.double_pawn_push = from.rank().abs_diff(to.rank()) == 2;
    }

    next.take_piece(from);
    next.set_piece(to, Some(placed));

    match piece.kind {
        PieceKind::King => next.castling_rights.clear_color(mover),
        PieceKind::Rook => next.castling_rights.clear_for_rook_square(from),
        _ => {}
    }
    if record.captured.is_some() {
        next.castling_rights.clear_for_rook_square(to);
    }

    next.en_passant_square = if record.double_pawn_push {
        Square::new((from.rank() + to.rank()) / 2, from.file()).ok()
    } else {
        None
    };

    if piece.kind == PieceKind::Pawn || record.captured.is_some() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = mover.opposite();
    next.last_move = Some((from, to));
    next.record_position();

    Ok((next, record))
}
