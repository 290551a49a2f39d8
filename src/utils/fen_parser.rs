//! FEN-to-GameState parser.
//!
//! Builds a fully-populated game state from a Forsyth-Edwards Notation
//! string, including the board grid, rights, clocks and the seeded
//! repetition history.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::algebraic::from_algebraic;

fn malformed(message: impl Into<String>) -> ChessError {
    ChessError::MalformedFen(message.into())
}

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| malformed("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| malformed("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| malformed("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| malformed("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| malformed("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| malformed("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(malformed("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part, &game_state)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| malformed(format!("invalid halfmove clock: {halfmove_part}")))?;
    game_state.fullmove_number = match fullmove_part.parse::<u16>() {
        Ok(n) if n >= 1 => n,
        _ => return Err(malformed(format!("invalid fullmove number: {fullmove_part}"))),
    };

    if is_king_in_check(&game_state, game_state.side_to_move.opposite()) {
        return Err(malformed("side not to move is in check"));
    }

    // Rights without the king and rook at home can never be exercised.
    game_state.castling_rights = game_state.live_castling_rights();
    game_state.record_position();

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(malformed("board layout must contain 8 ranks"));
    }

    let mut king_counts = [0usize; 2];

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(malformed(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(malformed(format!("rank '{rank_str}' has too many files")));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .map_err(|_| malformed(format!("invalid piece character '{ch}'")))?;

            if file >= 8 {
                return Err(malformed(format!("rank '{rank_str}' has too many files")));
            }
            if piece.kind == PieceKind::Pawn
                && (board_rank == promotion_rank(Color::White)
                    || board_rank == promotion_rank(Color::Black))
            {
                return Err(malformed("pawn on a back rank"));
            }
            if piece.kind == PieceKind::King {
                king_counts[piece.color.index()] += 1;
            }

            let square = Square::new(board_rank, file).map_err(|e| malformed(e.to_string()))?;
            game_state.set_piece(square, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(malformed(format!("rank '{rank_str}' does not sum to 8 files")));
        }
    }

    if king_counts.iter().any(|&count| count > 1) {
        return Err(malformed("more than one king of a color"));
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    let mut chars = side_part.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Color::from_fen_char(ch)
            .map_err(|_| malformed(format!("invalid side-to-move field: {side_part}"))),
        _ => Err(malformed(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut rights = CastlingRights::NONE;

    for ch in castling_part.chars() {
        let (color, side) = match ch {
            'K' => (Color::White, CastleSide::Kingside),
            'Q' => (Color::White, CastleSide::Queenside),
            'k' => (Color::Black, CastleSide::Kingside),
            'q' => (Color::Black, CastleSide::Queenside),
            _ => return Err(malformed(format!("invalid castling rights character: {ch}"))),
        };
        if rights.has(color, side) {
            return Err(malformed(format!("duplicate castling right: {ch}")));
        }
        rights.set(color, side, true);
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str, game_state: &GameState) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = from_algebraic(en_passant_part)
        .map_err(|_| malformed(format!("invalid en-passant square: {en_passant_part}")))?;

    // The target sits behind a pawn the opponent just advanced two squares.
    let side_to_move = game_state.side_to_move;
    let expected_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    if square.rank() != expected_rank {
        return Err(malformed(format!(
            "en-passant square {en_passant_part} impossible with {side_to_move} to move"
        )));
    }

    let pushed_pawn = Piece::new(PieceKind::Pawn, side_to_move.opposite());
    let pawn_square = square.offset(-side_to_move.forward(), 0);
    let origin_square = square.offset(side_to_move.forward(), 0);
    let consistent = pawn_square.is_some_and(|sq| game_state.piece_at(sq) == Some(pushed_pawn))
        && origin_square.is_some_and(|sq| game_state.is_empty(sq))
        && game_state.is_empty(square);
    if !consistent {
        return Err(malformed(format!(
            "en-passant square {en_passant_part} does not follow a double pawn push"
        )));
    }

    Ok(Some(square))
}
