use super::super::types::{Color, Move, MoveList, Square};
use super::super::Board;
use super::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

impl Board {
    /// Ray-cast from `from` along each direction, stopping at the board edge
    /// or the first occupied square; that square is included iff it holds an
    /// enemy piece.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> MoveList {
        let mut moves = MoveList::new();
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(blocker) => {
                        if blocker.color != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
        moves
    }

    pub(crate) fn generate_queen_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = self.generate_sliding_moves(from, color, &ROOK_DIRECTIONS);
        let diagonals = self.generate_sliding_moves(from, color, &BISHOP_DIRECTIONS);
        for mv in diagonals.iter() {
            moves.push(*mv);
        }
        moves
    }
}
