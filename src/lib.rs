pub mod board;

pub use board::{Board, Color, Move, MoveError, Piece, PieceKind, Square};
pub use board::{evaluate, find_best_move, find_best_move_with_rng};
