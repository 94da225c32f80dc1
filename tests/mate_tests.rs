//! Game termination tests driven through the public API.

use rand::prelude::*;

use minimax_chess::{find_best_move_with_rng, Board, Color, Move};

fn play(board: &mut Board, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        let mv = Move::new(from.parse().unwrap(), to.parse().unwrap());
        let side = board.side_to_move();
        assert!(
            board.legal_moves(side).contains(mv),
            "{mv} is not legal for {side}"
        );
        board.make_move(mv).unwrap();
    }
}

#[test]
fn fools_mate_checkmates_white() {
    let mut board = Board::new();
    play(
        &mut board,
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );

    assert!(board.is_in_check(Color::White));
    assert!(board.is_checkmate(Color::White));
    assert!(!board.is_stalemate(Color::White));
    assert!(board.legal_moves(Color::White).is_empty());
}

#[test]
fn scholars_mate_checkmates_black() {
    let mut board = Board::new();
    play(
        &mut board,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("f1", "c4"),
            ("b8", "c6"),
            ("d1", "h5"),
            ("g8", "f6"),
            ("h5", "f7"),
        ],
    );

    assert!(board.is_checkmate(Color::Black));
}

#[test]
fn stalemate_is_not_checkmate() {
    let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(board.is_stalemate(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
    assert!(!board.is_in_check(Color::Black));
}

#[test]
fn mate_in_one_suite() {
    // The side to move mates in one; the engine must find a mating move.
    let problems = [
        "6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1",
        "4q2k/8/8/8/8/8/5PPP/6K1 b - - 0 1",
        "7k/8/6K1/8/8/8/Q7/8 w - - 0 1",
    ];

    for fen in problems {
        let mut board = Board::from_fen(fen);
        let side = board.side_to_move();
        let mut rng = StdRng::seed_from_u64(11);

        let best = find_best_move_with_rng(&mut board, side, 2, &mut rng)
            .unwrap_or_else(|| panic!("no move found for {fen}"));

        board.make_move(best).unwrap();
        assert!(
            board.is_checkmate(side.opponent()),
            "move {best} does not mate in {fen}"
        );
    }
}
