//! Chess board representation and game logic.
//!
//! Uses a mailbox (8x8 array) board with a move-record history stack so that
//! every mutation is exactly reversible in O(1), which the search relies on.
//! Covers the core piece movement rules; castling, en passant and promotion
//! are not implemented.
//!
//! # Example
//! ```
//! use minimax_chess::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(board.side_to_move());
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, MoveError, SquareError};
pub use state::Board;
pub use types::{Color, Move, MoveList, Piece, PieceKind, Square};

// Public API - evaluation and search
pub use eval::evaluate;
pub use search::{find_best_move, find_best_move_with_rng, DRAW_SCORE, MATE_SCORE};
