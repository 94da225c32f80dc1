//! Search tests to verify the engine finds correct moves in various positions.

use rand::prelude::*;

use minimax_chess::{evaluate, find_best_move_with_rng, Board, Color, Move};

fn mv(from: &str, to: &str) -> Move {
    Move::new(from.parse().unwrap(), to.parse().unwrap())
}

/// Test that the engine finds a simple mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    // White to move, Qe8# is mate
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let mut rng = StdRng::seed_from_u64(3);

    let best = find_best_move_with_rng(&mut board, Color::White, 2, &mut rng);
    assert_eq!(best, Some(mv("e1", "e8")), "should find Qe8# (back rank mate)");

    board.make_move(best.unwrap()).unwrap();
    assert!(board.is_checkmate(Color::Black));
}

/// Test that the engine captures free material
#[test]
fn captures_free_queen() {
    // White to move, the d5 queen is free for the taking
    let mut board = Board::from_fen("k7/8/8/3q4/4P3/8/8/K7 w - - 0 1");
    let mut rng = StdRng::seed_from_u64(3);

    let best = find_best_move_with_rng(&mut board, Color::White, 1, &mut rng);
    assert_eq!(best, Some(mv("e4", "d5")), "should take the queen");
}

/// Test that the engine avoids giving away material
#[test]
fn avoids_hanging_the_queen() {
    // White to move; Qxd4 would lose the queen to cxd4.
    let mut board = Board::from_fen("4k3/8/8/2p5/3p4/8/8/3QK3 w - - 0 1");
    let mut rng = StdRng::seed_from_u64(3);

    let best = find_best_move_with_rng(&mut board, Color::White, 2, &mut rng)
        .expect("white has moves");
    assert_ne!(best, mv("d1", "d4"), "Qxd4 hangs the queen to the c5 pawn");
}

/// Test that an engine move is always legal for the side it plays
#[test]
fn chosen_move_is_legal() {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..12 {
        let side = board.side_to_move();
        let Some(best) = find_best_move_with_rng(&mut board, side, 2, &mut rng) else {
            break;
        };
        assert!(
            board.legal_moves(side).contains(best),
            "{best} is not legal for {side}"
        );
        board.make_move(best).unwrap();
        assert!(!board.is_in_check(side), "{best} left the king in check");
    }
}

/// Test that the search never corrupts the position it analyses
#[test]
fn search_restores_the_board() {
    let mut board =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    let fen = board.to_fen();
    let eval_before = evaluate(&board);
    let mut rng = StdRng::seed_from_u64(3);

    find_best_move_with_rng(&mut board, Color::Black, 3, &mut rng);
    assert_eq!(board.to_fen(), fen);
    assert_eq!(evaluate(&board), eval_before);
}

/// Deeper search should not blunder the immediate recapture
#[test]
fn sees_the_recapture() {
    // The d5 pawn is defended by e6; QxP at depth 2 loses the queen.
    let mut board = Board::from_fen("k7/8/4p3/3p4/8/3Q4/8/K7 w - - 0 1");
    let mut rng = StdRng::seed_from_u64(3);

    let best = find_best_move_with_rng(&mut board, Color::White, 2, &mut rng)
        .expect("white has moves");
    assert_ne!(best, mv("d3", "d5"), "Qxd5 loses the queen to exd5");
}
