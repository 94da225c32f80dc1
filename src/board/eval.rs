//! Static evaluation: material plus a pawn piece-square table.

use super::pst::pawn_bonus;
use super::types::{PieceKind, Square};
use super::Board;

/// Evaluate the position in centipawns; positive favors White.
///
/// Sums material (kings excluded, they always cancel) and a positional bonus
/// for every pawn. Terminal positions are not treated specially here; the
/// search scores checkmate and stalemate before ever calling this.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;
    for sq in Square::all() {
        let Some(piece) = board.piece_at(sq) else {
            continue;
        };
        let value = match piece.kind {
            PieceKind::King => 0,
            PieceKind::Pawn => piece.kind.value() + pawn_bonus(piece.color, sq),
            _ => piece.kind.value(),
        };
        score += piece.color.sign() * value;
    }
    score
}
