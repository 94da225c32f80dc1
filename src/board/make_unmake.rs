//! Making and unmaking moves.
//!
//! `make_move` records exactly what it overwrites so that `unmake_move` can
//! restore it, giving O(1) reversal instead of copying the whole grid. The
//! search leans on this pair being exact inverses under LIFO discipline.

use super::error::MoveError;
use super::types::{Move, MoveRecord, PieceKind};
use super::Board;

impl Board {
    /// Make a move on the board.
    ///
    /// Succeeds whenever the origin square is occupied, regardless of
    /// legality; filtering illegal moves is the move generator's job. On
    /// success the captured occupant of the destination (if any) is recorded
    /// in the history stack, the king cache is updated if a king moved, and
    /// the side to move flips.
    ///
    /// # Errors
    /// Returns `MoveError::EmptyOrigin` and leaves the board unchanged if
    /// there is no piece on `mv.from`.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let mut piece = self
            .piece_at(mv.from)
            .ok_or(MoveError::EmptyOrigin { from: mv.from })?;

        let record = MoveRecord {
            mv,
            captured: self.piece_at(mv.to),
            mover_had_moved: piece.has_moved,
        };

        piece.has_moved = true;
        self.grid[mv.to.row()][mv.to.col()] = Some(piece);
        self.grid[mv.from.row()][mv.from.col()] = None;

        if piece.kind == PieceKind::King {
            self.set_king_square(piece.color, mv.to);
        }

        self.side_to_move = self.side_to_move.opponent();
        self.history.push(record);
        Ok(())
    }

    /// Unmake a move, restoring the board to its state before `make_move`.
    ///
    /// The move must be the most recently made one; the history stack is
    /// strictly LIFO.
    ///
    /// # Errors
    /// Returns `MoveError::HistoryMismatch` and leaves the board unchanged
    /// if `mv` is not the move on top of the history stack.
    pub fn unmake_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let record = match self.history.last() {
            Some(record) if record.mv == mv => *record,
            top => {
                return Err(MoveError::HistoryMismatch {
                    given: mv,
                    expected: top.map(|record| record.mv),
                })
            }
        };
        self.history.pop();

        // The record guarantees the mover is still on its destination square.
        let mut piece = match self.piece_at(mv.to) {
            Some(piece) => piece,
            None => unreachable!("mover vanished from {}", mv.to),
        };
        piece.has_moved = record.mover_had_moved;

        self.grid[mv.from.row()][mv.from.col()] = Some(piece);
        self.grid[mv.to.row()][mv.to.col()] = record.captured;

        if piece.kind == PieceKind::King {
            self.set_king_square(piece.color, mv.from);
        }

        self.side_to_move = self.side_to_move.opponent();
        Ok(())
    }
}
