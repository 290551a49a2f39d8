//! Conversions between algebraic square names and board coordinates.
//!
//! Converts between human-readable coordinates (e.g., `E4`) and the
//! zero-based `(rank, file)` pairs used by every other component.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert a zero-based `(rank, file)` pair to algebraic notation (for example: "E4").
#[inline]
pub fn to_algebraic(rank: u8, file: u8) -> ChessResult<String> {
    Ok(Square::new(rank, file)?.to_string())
}

/// Convert algebraic notation (for example: "e4" or "E4") to a square.
pub fn from_algebraic(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidCoordinate(square.to_owned()));
    }

    let file = bytes[0].to_ascii_uppercase();
    let rank = bytes[1];

    if !(b'A'..=b'H').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidCoordinate(square.to_owned()));
    }

    Square::new(rank - b'1', file - b'A')
}

#[cfg(test)]
mod tests {
    use super::{from_algebraic, to_algebraic};
    use crate::errors::ChessError;

    #[test]
    fn round_trip_square_conversions() {
        let a1 = from_algebraic("A1").expect("A1 should parse");
        assert_eq!((a1.rank(), a1.file()), (0, 0));
        let h8 = from_algebraic("h8").expect("h8 should parse");
        assert_eq!((h8.rank(), h8.file()), (7, 7));
        assert_eq!(to_algebraic(0, 0).expect("0,0 should convert"), "A1");
        assert_eq!(to_algebraic(3, 4).expect("3,4 should convert"), "E4");
    }

    #[test]
    fn rejects_malformed_and_out_of_range_text() {
        for bad in ["", "E", "E9", "I1", "E0", "E22", "4E", "é4"] {
            assert!(
                matches!(from_algebraic(bad), Err(ChessError::InvalidCoordinate(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_indices_instead_of_clamping() {
        assert!(matches!(
            to_algebraic(8, 0),
            Err(ChessError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            to_algebraic(0, 200),
            Err(ChessError::InvalidCoordinate(_))
        ));
    }
}
