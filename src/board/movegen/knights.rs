use super::super::types::{Color, Move, MoveList, Square};
use super::super::Board;

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (dr, dc) in KNIGHT_OFFSETS {
            if let Some(to) = from.offset(dr, dc) {
                if !self.piece_at(to).is_some_and(|p| p.color == color) {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }
}
