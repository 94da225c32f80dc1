//! Move generation and legality.
//!
//! Pseudo-legal generation obeys piece geometry and the own-color capture
//! ban only; the legality filter then rejects moves that leave the mover's
//! own king attacked, by speculatively making and unmaking each candidate.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::types::{Color, Move, MoveList, PieceKind, Square};
use super::Board;

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Generate pseudo-legal moves for the piece on `from`.
    ///
    /// Movement geometry and capture targets are derived from the piece's own
    /// color, not the side to move, so check detection can probe either
    /// side's pieces directly. An empty square yields an empty list.
    pub(crate) fn pseudo_moves_from(&self, from: Square) -> MoveList {
        let Some(piece) = self.piece_at(from) else {
            return MoveList::new();
        };

        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece.color),
            PieceKind::Rook => self.generate_sliding_moves(from, piece.color, &ROOK_DIRECTIONS),
            PieceKind::Knight => self.generate_knight_moves(from, piece.color),
            PieceKind::Bishop => self.generate_sliding_moves(from, piece.color, &BISHOP_DIRECTIONS),
            PieceKind::Queen => self.generate_queen_moves(from, piece.color),
            PieceKind::King => self.generate_king_moves(from, piece.color),
        }
    }

    /// Is `color`'s king currently attacked?
    ///
    /// Scans every enemy piece and asks whether any of its pseudo-legal moves
    /// lands on the defender's cached king square. Pseudo-legal (not
    /// filtered) generation is essential here to avoid mutual recursion with
    /// the legality filter.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let king_square = self.king_square(color);
        Square::all()
            .filter(|&sq| self.piece_at(sq).is_some_and(|p| p.color != color))
            .any(|sq| {
                self.pseudo_moves_from(sq)
                    .iter()
                    .any(|mv| mv.to == king_square)
            })
    }

    /// Would making `mv` leave the mover's own king in check?
    fn leaves_king_in_check(&mut self, mv: Move) -> bool {
        let Some(mover) = self.piece_at(mv.from) else {
            return false;
        };
        let mover_color = mover.color;
        // Speculative make/test/unmake; both calls must succeed since the
        // origin is occupied and the history top is the move just made.
        if self.make_move(mv).is_err() {
            return false;
        }
        let in_check = self.is_in_check(mover_color);
        let undone = self.unmake_move(mv);
        debug_assert!(undone.is_ok());
        in_check
    }

    /// Legal moves for the piece on `square`.
    ///
    /// Empty unless the square holds a piece of the side to move. Every move
    /// returned has been verified not to leave the mover's own king in check.
    #[must_use]
    pub fn legal_moves_from(&mut self, square: Square) -> MoveList {
        let side = self.side_to_move;
        if !self.piece_at(square).is_some_and(|p| p.color == side) {
            return MoveList::new();
        }

        let candidates = self.pseudo_moves_from(square);
        let mut moves = MoveList::new();
        for mv in candidates.to_vec() {
            if !self.leaves_king_in_check(mv) {
                moves.push(mv);
            }
        }
        moves
    }

    /// All legal moves for `color`.
    ///
    /// Empty whenever `color` is not the side to move.
    #[must_use]
    pub fn legal_moves(&mut self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        if color != self.side_to_move {
            return moves;
        }
        for from in Square::all() {
            if self.piece_at(from).is_some_and(|p| p.color == color) {
                for mv in self.legal_moves_from(from).iter() {
                    moves.push(*mv);
                }
            }
        }
        moves
    }

    /// Checkmate: `color` is in check and has no legal move.
    ///
    /// Only meaningful when `color` is the side to move.
    #[must_use]
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && self.legal_moves(color).is_empty()
    }

    /// Stalemate: `color` is not in check and has no legal move.
    ///
    /// Only meaningful when `color` is the side to move.
    #[must_use]
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && self.legal_moves(color).is_empty()
    }
}
