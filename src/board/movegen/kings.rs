use super::super::types::{Color, Move, MoveList, Square};
use super::super::Board;

const KING_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (dr, dc) in KING_OFFSETS {
            if let Some(to) = from.offset(dr, dc) {
                if !self.piece_at(to).is_some_and(|p| p.color == color) {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }
}
