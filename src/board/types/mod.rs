//! Core value types shared across the board modules.

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use moves::MoveRecord;
