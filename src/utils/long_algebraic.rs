//! Coordinate move text (`e2e4`, `e7e8q`) to and from move requests.
//!
//! This is the format external move suggesters answer in. Whitespace between
//! the parts is tolerated so console-style input like `E7 E8 Q` also parses.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_descriptions::MoveRequest;
use crate::utils::algebraic::from_algebraic;

pub fn parse_move_text(text: &str) -> ChessResult<MoveRequest> {
    let compact: String = text.chars().filter(|ch| !ch.is_whitespace()).collect();
    if !compact.is_ascii() || !(4..=5).contains(&compact.len()) {
        return Err(ChessError::InvalidCoordinate(text.to_owned()));
    }

    let from = from_algebraic(&compact[0..2])?;
    let to = from_algebraic(&compact[2..4])?;

    let promotion = match compact[4..].chars().next() {
        Some(ch) => Some(PieceKind::from_letter(ch).map_err(|_| ChessError::InvalidMove { from, to })?),
        None => None,
    };

    Ok(MoveRequest { from, to, promotion })
}

pub fn move_request_to_long_algebraic(request: &MoveRequest) -> String {
    let mut out = format!("{}{}", request.from, request.to).to_ascii_lowercase();
    if let Some(promotion) = request.promotion {
        out.push(promotion.letter());
    }
    out
}
