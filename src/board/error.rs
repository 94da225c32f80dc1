//! Error types for chess board operations.

use std::fmt;

use super::types::{Move, Square};

/// Error type for make/unmake failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The move's origin square holds no piece
    EmptyOrigin { from: Square },
    /// The move given to `unmake_move` is not the most recently made one
    HistoryMismatch {
        given: Move,
        expected: Option<Move>,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptyOrigin { from } => {
                write!(f, "No piece on origin square {from}")
            }
            MoveError::HistoryMismatch {
                given,
                expected: Some(expected),
            } => {
                write!(f, "Cannot unmake {given}, last move made was {expected}")
            }
            MoveError::HistoryMismatch {
                given,
                expected: None,
            } => {
                write!(f, "Cannot unmake {given}, no moves have been made")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 2)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Wrong number of ranks in position string
    InvalidRankCount { ranks: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// A side is missing its king
    MissingKing { color: &'static str },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 2 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidRankCount { ranks } => {
                write!(f, "FEN must have 8 ranks, found {ranks}")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::MissingKing { color } => {
                write!(f, "FEN position has no {color} king")
            }
        }
    }
}

impl std::error::Error for FenError {}
