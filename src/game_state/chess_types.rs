//! Core value types shared by every layer of the rules engine.
//!
//! Squares, colors, piece kinds and the explicit castling-rights record live
//! here so geometry, legality and FEN code all speak the same vocabulary.

use std::fmt;

use crate::errors::{ChessError, ChessResult};

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color advances by.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank index holding this color's king and rooks at the start.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn from_fen_char(ch: char) -> ChessResult<Self> {
        match ch {
            'w' => Ok(Color::White),
            'b' => Ok(Color::Black),
            _ => Err(ChessError::InvalidColor(ch)),
        }
    }

    pub const fn to_fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind. Color is carried separately by [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Parse a case-insensitive piece letter (`p n b r q k`).
    pub fn from_letter(ch: char) -> ChessResult<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Ok(PieceKind::Pawn),
            'n' => Ok(PieceKind::Knight),
            'b' => Ok(PieceKind::Bishop),
            'r' => Ok(PieceKind::Rook),
            'q' => Ok(PieceKind::Queen),
            'k' => Ok(PieceKind::King),
            _ => Err(ChessError::InvalidPieceKind(ch)),
        }
    }

    /// Lowercase letter as used by FEN for black pieces.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// A colored piece. Pieces carry no identity beyond kind and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    pub fn from_fen_char(ch: char) -> ChessResult<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return Err(ChessError::InvalidPieceKind(ch));
        };
        Ok(Self::new(PieceKind::from_letter(ch)?, color))
    }

    pub const fn to_fen_char(self) -> char {
        let base = self.kind.letter();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}

/// Board coordinate, zero-based. Rank 0 is rank "1", file 0 is file "A".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Build a square, rejecting indices outside `0..=7`.
    pub fn new(rank: u8, file: u8) -> ChessResult<Self> {
        if rank > 7 || file > 7 {
            return Err(ChessError::InvalidCoordinate(format!(
                "rank {rank}, file {file}"
            )));
        }
        Ok(Self { rank, file })
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Step by a signed `(rank, file)` delta; `None` when it leaves the board.
    #[inline]
    pub fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Self> {
        let rank = self.rank as i8 + rank_delta;
        let file = self.file as i8 + file_delta;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, rank-major from A1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'A' + self.file),
            char::from(b'1' + self.rank)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// File the rook starts on.
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the king lands on.
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// File the rook is relocated to.
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }
}

/// Four independent castling rights. Cleared explicitly when a king or rook
/// leaves its home square or a rook is captured on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    pub const fn has(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => self.white_kingside,
            (Color::White, CastleSide::Queenside) => self.white_queenside,
            (Color::Black, CastleSide::Kingside) => self.black_kingside,
            (Color::Black, CastleSide::Queenside) => self.black_queenside,
        }
    }

    pub fn set(&mut self, color: Color, side: CastleSide, value: bool) {
        let slot = match (color, side) {
            (Color::White, CastleSide::Kingside) => &mut self.white_kingside,
            (Color::White, CastleSide::Queenside) => &mut self.white_queenside,
            (Color::Black, CastleSide::Kingside) => &mut self.black_kingside,
            (Color::Black, CastleSide::Queenside) => &mut self.black_queenside,
        };
        *slot = value;
    }

    pub fn clear_color(&mut self, color: Color) {
        self.set(color, CastleSide::Kingside, false);
        self.set(color, CastleSide::Queenside, false);
    }

    /// Clear whichever right is tied to a rook home square.
    pub fn clear_for_rook_square(&mut self, square: Square) {
        for color in [Color::White, Color::Black] {
            if square.rank() != color.back_rank() {
                continue;
            }
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                if square.file() == side.rook_file() {
                    self.set(color, side, false);
                }
            }
        }
    }

    /// Pack into a `0..=15` mask (K=1, Q=2, k=4, q=8).
    pub const fn bits(&self) -> u8 {
        (self.white_kingside as u8)
            | (self.white_queenside as u8) << 1
            | (self.black_kingside as u8) << 2
            | (self.black_queenside as u8) << 3
    }
}
