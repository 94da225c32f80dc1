//! Minimax search with alpha-beta pruning.
//!
//! Single-threaded depth-first recursion over one mutable board. Every
//! candidate is made, searched, and unmade before its sibling, so the board
//! is back in its original state when the search returns. Pruning changes
//! how many nodes are visited, never the value returned.

mod move_order;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::eval::evaluate;
use super::types::{Color, Move};
use super::Board;
use move_order::order_moves;

/// Score for delivering checkmate; a finite stand-in for infinity, far
/// outside any reachable material score.
pub const MATE_SCORE: i32 = 1_000_000;

/// Score for a drawn (stalemate) position
pub const DRAW_SCORE: i32 = 0;

/// The color bound to `maximizing == true`. Evaluation is White-positive, so
/// White maximizes and Black minimizes.
const fn side_for(maximizing: bool) -> Color {
    if maximizing {
        Color::White
    } else {
        Color::Black
    }
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// `maximizing` must agree with `board.side_to_move()`; the search keeps the
/// two in lockstep as it recurses. Checkmate of the side to move scores
/// `-MATE_SCORE` when that side is maximizing (and `+MATE_SCORE` otherwise);
/// stalemate scores exactly `DRAW_SCORE`, overriding material.
pub(crate) fn minimax(
    board: &mut Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    let side = side_for(maximizing);
    let moves = board.legal_moves(side);

    if moves.is_empty() {
        if board.is_in_check(side) {
            return if maximizing { -MATE_SCORE } else { MATE_SCORE };
        }
        return DRAW_SCORE;
    }
    if depth == 0 {
        return evaluate(board);
    }

    let mut ordered = moves.to_vec();
    order_moves(board, &mut ordered);

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in ordered {
        // Legal moves always have an occupied origin, so make cannot fail.
        if board.make_move(mv).is_err() {
            continue;
        }
        let score = minimax(board, depth - 1, alpha, beta, !maximizing);
        let undone = board.unmake_move(mv);
        debug_assert!(undone.is_ok());

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }
    best
}

/// Pick the best move for `color` searching `depth` plies ahead, using the
/// given RNG to break ties between equally promising root moves.
///
/// The root move list is shuffled, then stably reordered captures-first, so
/// equal-valued candidates come out in a random order while the pruning
/// heuristic still applies. Returns `None` iff `color` has no legal moves
/// (the caller is expected to have classified checkmate/stalemate already).
pub fn find_best_move_with_rng<R: Rng>(
    board: &mut Board,
    color: Color,
    depth: u32,
    rng: &mut R,
) -> Option<Move> {
    let maximizing = color == Color::White;
    let mut moves = board.legal_moves(color).to_vec();
    if moves.is_empty() {
        return None;
    }

    moves.shuffle(rng);
    order_moves(board, &mut moves);

    let mut best_move = None;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        if board.make_move(mv).is_err() {
            continue;
        }
        let score = minimax(board, depth.saturating_sub(1), i32::MIN, i32::MAX, !maximizing);
        let undone = board.unmake_move(mv);
        debug_assert!(undone.is_ok());
        debug!("root move {mv} scores {score}");

        let improved = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improved || best_move.is_none() {
            best_score = score;
            best_move = Some(mv);
        }
    }

    debug!(
        "best move for {color} at depth {depth}: {} (score {best_score})",
        best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
    );
    best_move
}

/// `find_best_move_with_rng` with a thread-local RNG; move choice among
/// equally scored candidates varies from run to run.
pub fn find_best_move(board: &mut Board, color: Color, depth: u32) -> Option<Move> {
    find_best_move_with_rng(board, color, depth, &mut rand::thread_rng())
}
