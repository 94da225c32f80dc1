//! FEN position parsing and formatting.
//!
//! Only the piece placement and side-to-move fields are interpreted;
//! castling rights, en passant, and the move clocks are accepted and ignored
//! since none of those rules are implemented.

use super::error::FenError;
use super::types::{Color, Piece, PieceKind};
use super::Board;

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// # Errors
    /// Returns an error if the placement or side-to-move field is malformed,
    /// or if either king is missing.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement: FEN lists rank 8 first, which is row 0 here.
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { ranks: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if col >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: 8 - row,
                            files: col + 1,
                        });
                    }
                    board.grid[row][col] = Some(Piece::new(kind, color));
                    col += 1;
                }
            }
        }

        match parts[1] {
            "w" => board.side_to_move = Color::White,
            "b" => board.side_to_move = Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }

        board.white_king = board
            .find_king(Color::White)
            .ok_or(FenError::MissingKing { color: "white" })?;
        board.black_king = board
            .find_king(Color::Black)
            .ok_or(FenError::MissingKing { color: "black" })?;

        Ok(board)
    }

    /// Parse a FEN string, panicking on failure. Convenient for tests.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        match Board::try_from_fen(fen) {
            Ok(board) => board,
            Err(err) => panic!("invalid FEN '{fen}': {err}"),
        }
    }

    /// Format the position as FEN (placement and side to move; the
    /// castling/en-passant/clock fields are emitted as placeholders).
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for row in 0..8 {
            let mut empty = 0;
            for col in 0..8 {
                match self.grid[row][col] {
                    None => empty += 1,
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });
        fen.push_str(" - - 0 1");
        fen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_start_position_round_trip() {
        let board = Board::from_fen(START_FEN);
        assert_eq!(board.to_fen(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1");
        assert_eq!(board.piece_at(Square::at(7, 4)).map(|p| p.kind), Some(PieceKind::King));
    }

    #[test]
    fn test_start_fen_matches_new() {
        assert_eq!(Board::from_fen(START_FEN), Board::new());
    }

    #[test]
    fn test_king_caches_rebuilt() {
        let board = Board::from_fen("8/8/3k4/8/8/4K3/8/8 w - - 0 1");
        assert_eq!(board.king_square(Color::White), Square::at(5, 4));
        assert_eq!(board.king_square(Color::Black), Square::at(2, 3));
    }

    #[test]
    fn test_side_to_move_parsed() {
        let board = Board::from_fen("8/8/3k4/8/8/4K3/8/8 b - - 0 1");
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn test_missing_king_rejected() {
        let err = Board::try_from_fen("8/8/3k4/8/8/8/8/8 w - - 0 1").unwrap_err();
        assert_eq!(err, FenError::MissingKing { color: "white" });
    }

    #[test]
    fn test_invalid_piece_rejected() {
        let err = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w - - 0 1")
            .unwrap_err();
        assert_eq!(err, FenError::InvalidPiece { char: 'X' });
    }

    #[test]
    fn test_too_few_parts_rejected() {
        let err = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap_err();
        assert_eq!(err, FenError::TooFewParts { found: 1 });
    }
}
