use super::super::types::{Color, Move, MoveList, Square};
use super::super::Board;

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();

        // Single push, and double push from the starting row if both
        // intervening squares are empty. Pushes never capture.
        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty_square(forward) {
                moves.push(Move::new(from, forward));
                if from.row() == color.pawn_start_row() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty_square(double) {
                            moves.push(Move::new(from, double));
                        }
                    }
                }
            }
        }

        // Diagonal moves are capture-only.
        for dc in [-1, 1] {
            if let Some(target) = from.offset(dir, dc) {
                if self.piece_at(target).is_some_and(|p| p.color != color) {
                    moves.push(Move::new(from, target));
                }
            }
        }

        moves
    }
}
