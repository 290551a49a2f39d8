//! Move requests submitted by callers and records of applied moves.

use std::fmt;

use crate::game_state::chess_types::{CastleSide, Piece, PieceKind, Square};

/// A caller's request: origin, destination, optional promotion choice.
///
/// The promotion kind only matters when a pawn reaches the last rank; it
/// defaults to a queen there and is ignored everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveRequest {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

/// What actually happened when a validated move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on the origin square.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub castle: Option<CastleSide>,
    pub en_passant: bool,
    pub double_pawn_push: bool,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// The request that reproduces this move, promotion included.
    #[inline]
    pub fn request(&self) -> MoveRequest {
        MoveRequest {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}

/// Short movetext, e.g. `e4`, `Nxf3`, `exd6`, `O-O`, `e8=Q`.
impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.castle {
            Some(CastleSide::Kingside) => return write!(f, "O-O"),
            Some(CastleSide::Queenside) => return write!(f, "O-O-O"),
            None => {}
        }

        let destination = self.to.to_string().to_ascii_lowercase();
        if self.piece.kind == PieceKind::Pawn {
            if self.is_capture() {
                write!(f, "{}x", char::from(b'a' + self.from.file()))?;
            }
            write!(f, "{destination}")?;
        } else {
            let letter = self.piece.kind.letter().to_ascii_uppercase();
            let capture = if self.is_capture() { "x" } else { "" };
            write!(f, "{letter}{capture}{destination}")?;
        }

        if let Some(promotion) = self.promotion {
            write!(f, "={}", promotion.letter().to_ascii_uppercase())?;
        }
        Ok(())
    }
}
