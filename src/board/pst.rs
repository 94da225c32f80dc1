//! Piece-square table for pawns.

use super::types::{Color, Square};

/// Positional bonus per square for White pawns, in centipawns, indexed by
/// `Square::as_index` (a8=0 .. h1=63). White pawns advance toward row 0, so
/// the large bonuses sit on the far ranks; Black reads the table in reverse
/// index order.
#[rustfmt::skip]
pub(crate) const PAWN_PST: [i32; 64] = [
     0,  0,  0,   0,   0,  0,  0,  0,
    50, 50, 50,  50,  50, 50, 50, 50,
    10, 10, 20,  30,  30, 20, 10, 10,
     5,  5, 10,  25,  25, 10,  5,  5,
     0,  0,  0,  20,  20,  0,  0,  0,
     5, -5, -10,  0,   0, -10, -5, 5,
     5, 10, 10, -20, -20, 10, 10,  5,
     0,  0,  0,   0,   0,  0,  0,  0,
];

/// Positional bonus for a pawn of `color` on `square`
#[inline]
pub(crate) fn pawn_bonus(color: Color, square: Square) -> i32 {
    let idx = square.as_index();
    match color {
        Color::White => PAWN_PST[idx],
        Color::Black => PAWN_PST[63 - idx],
    }
}
