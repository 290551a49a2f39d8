//! Authoritative board state.
//!
//! `GameState` is the central model for the rules engine. It stores the
//! square grid, turn and castling flags, clocks, and the position-signature
//! history used to detect repetitions. It is a plain value: cloning it gives a
//! fully detached copy, which is what legality simulation relies on.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::{KING_HOME_FILE, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::game_state::zobrist::compute_position_key;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// `[rank][file]`, rank 0 is rank "1".
    pub board: [[Option<Piece>; 8]; 8],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square passed over by the last two-square pawn advance.
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    /// Append-only signatures of every position reached, current one last.
    pub repetition_history: Vec<u64>,
    pub last_move: Option<(Square, Square)>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            repetition_history: Vec::new(),
            last_move: None,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.rank() as usize][square.file() as usize] = piece;
    }

    #[inline]
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.board[square.rank() as usize][square.file() as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Color of the occupant, if any.
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|piece| piece.color)
    }

    /// Every occupied square holding a piece of `color`.
    pub fn occupied_by(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.piece_at(square) {
            Some(piece) if piece.color == color => Some((square, piece)),
            _ => None,
        })
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&square| self.piece_at(square) == Some(king))
    }

    /// Castling rights still backed by pieces on their home squares.
    pub fn live_castling_rights(&self) -> CastlingRights {
        let mut live = self.castling_rights;
        for color in [Color::White, Color::Black] {
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                if live.has(color, side) && !self.castling_pieces_home(color, side) {
                    live.set(color, side, false);
                }
            }
        }
        live
    }

    fn castling_pieces_home(&self, color: Color, side: CastleSide) -> bool {
        let rank = color.back_rank();
        let at = |file: u8| Square::new(rank, file).ok().and_then(|sq| self.piece_at(sq));
        at(KING_HOME_FILE) == Some(Piece::new(PieceKind::King, color))
            && at(side.rook_file()) == Some(Piece::new(PieceKind::Rook, color))
    }

    #[inline]
    pub fn position_key(&self) -> u64 {
        compute_position_key(self)
    }

    /// Append the current position signature to the history.
    #[inline]
    pub fn record_position(&mut self) {
        let key = self.position_key();
        self.repetition_history.push(key);
    }

    /// How often the current position signature appears in the history.
    pub fn repetition_count(&self) -> usize {
        let key = self.position_key();
        self.repetition_history
            .iter()
            .filter(|&&seen| seen == key)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::from_algebraic;

    #[test]
    fn new_game_places_both_armies() {
        let game = GameState::new_game();
        assert_eq!(game.occupied_by(Color::White).count(), 16);
        assert_eq!(game.occupied_by(Color::Black).count(), 16);
        assert_eq!(
            game.king_square(Color::Black),
            Some(from_algebraic("e8").expect("e8 should parse"))
        );
        assert_eq!(game.repetition_history.len(), 1);
        assert_eq!(game.repetition_count(), 1);
    }

    #[test]
    fn live_castling_rights_require_pieces_at_home() {
        let game =
            GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1").expect("FEN should parse");
        let live = game.live_castling_rights();
        assert!(live.white_kingside);
        assert!(!live.white_queenside);
    }

    #[test]
    fn clone_is_detached_from_original() {
        let game = GameState::new_game();
        let mut scratch = game.clone();
        let e2 = from_algebraic("e2").expect("e2 should parse");
        scratch.take_piece(e2);
        scratch.record_position();

        assert!(scratch.is_empty(e2));
        assert_eq!(
            game.piece_at(e2),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(game.repetition_history.len(), 1);
    }
}
