//! Move ordering heuristic for search.
//!
//! Captures are searched before quiet moves, more valuable victims first.
//! Ordering only affects how quickly alpha-beta prunes, never the value it
//! returns.

use super::super::types::Move;
use super::super::Board;

/// Added to every capture so all captures sort above all quiet moves
pub(crate) const CAPTURE_BONUS: i32 = 10_000;

/// Heuristic ordering score for `mv`: captures get `CAPTURE_BONUS` plus the
/// victim's material value, quiet moves score zero.
pub(crate) fn move_score(board: &Board, mv: Move) -> i32 {
    match board.piece_at(mv.to) {
        Some(victim) => CAPTURE_BONUS + victim.kind.value(),
        None => 0,
    }
}

/// Sort `moves` by descending heuristic score.
///
/// The sort is stable, so pre-existing order (e.g. the root shuffle) is
/// preserved among equally scored moves.
pub(crate) fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_key(|&mv| std::cmp::Reverse(move_score(board, mv)));
}
