//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Move generation and legality
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Minimax and alpha-beta behavior
//! - `proptest.rs` - Property-based tests


use super::types::{Move, Square};

pub(crate) fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square notation")
}

pub(crate) fn mv(from: &str, to: &str) -> Move {
    Move::new(sq(from), sq(to))
}
