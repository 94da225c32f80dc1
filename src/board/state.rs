//! Board state: the 8x8 grid, side to move, king caches and move history.

use super::types::{Color, Move, MoveRecord, Piece, PieceKind, Square};

/// A chess position with enough bookkeeping to reverse every mutation.
///
/// The board is mutated in place by `make_move`/`unmake_move`; the search
/// never copies it. King squares are cached and kept exact at every mutation
/// site rather than recomputed by scanning.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
    pub(crate) history: Vec<MoveRecord>,
}

impl Board {
    /// Create a board with the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back_rank.iter().enumerate() {
            board.grid[0][col] = Some(Piece::new(kind, Color::Black));
            board.grid[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.grid[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.grid[7][col] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    /// An empty board; callers must place both kings and fix the caches
    /// before the position is usable.
    pub(crate) fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            side_to_move: Color::White,
            white_king: Square::at(7, 4),
            black_king: Square::at(0, 4),
            history: Vec::new(),
        }
    }

    /// The piece on `square`, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.row()][square.col()]
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_empty_square(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// The side whose turn it is
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The cached square of `color`'s king
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    #[inline]
    pub(crate) fn set_king_square(&mut self, color: Color, square: Square) {
        match color {
            Color::White => self.white_king = square,
            Color::Black => self.black_king = square,
        }
    }

    /// Number of moves made and not yet unmade
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// The most recently made move, if any
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|record| record.mv)
    }

    /// Scan the grid for `color`'s king (verification and FEN setup only;
    /// normal play goes through the cache).
    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            self.piece_at(sq)
                .is_some_and(|p| p.kind == PieceKind::King && p.color == color)
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
