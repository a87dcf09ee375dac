//! FEN parsing and formatting.

use std::str::FromStr;

use super::error::FenError;
use super::state::{CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q};
use super::{Board, Color, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Returns an error if the FEN string is invalid. Accepts 4-6 fields;
    /// missing clocks default to 0 and 1.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement, rank 8 first
        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square(7 - rank_idx, file), color, piece);
                    file += 1;
                }
            }
        }

        match parts[1] {
            "w" => board.white_to_move = true,
            "b" => board.white_to_move = false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }

        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights |= CASTLE_WHITE_K,
                'Q' => board.castling_rights |= CASTLE_WHITE_Q,
                'k' => board.castling_rights |= CASTLE_BLACK_K,
                'q' => board.castling_rights |= CASTLE_BLACK_Q,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let sq = parts[3]
                .parse::<Square>()
                .map_err(|_| FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                })?;
            Some(sq)
        };

        if let Some(halfmove) = parts.get(4) {
            board.halfmove_clock = halfmove.parse().unwrap_or(0);
        }
        if let Some(fullmove) = parts.get(5) {
            board.fullmove_number = fullmove.parse().unwrap_or(1);
        }

        Ok(board)
    }

    /// Format the position as a FEN string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            fen.push(char::from_digit(empty, 10).unwrap_or('0'));
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push(char::from_digit(empty, 10).unwrap_or('0'));
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(if self.white_to_move { 'w' } else { 'b' });

        fen.push(' ');
        if self.castling_rights == 0 {
            fen.push('-');
        } else {
            if self.castling_rights & CASTLE_WHITE_K != 0 {
                fen.push('K');
            }
            if self.castling_rights & CASTLE_WHITE_Q != 0 {
                fen.push('Q');
            }
            if self.castling_rights & CASTLE_BLACK_K != 0 {
                fen.push('k');
            }
            if self.castling_rights & CASTLE_BLACK_Q != 0 {
                fen.push('q');
            }
        }

        fen.push(' ');
        match self.en_passant_target {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_round_trip() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let board: Board = fen.parse().unwrap();
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fen_matches_programmatic_startpos() {
        let parsed: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .unwrap();
        let built = Board::new();
        assert_eq!(parsed.hash(), built.hash());
        assert_eq!(parsed.piece_material, built.piece_material);
        assert_eq!(parsed.pcsq_mg, built.pcsq_mg);
    }

    #[test]
    fn test_fen_side_and_ep() {
        let board: Board = "rnbqkbnr/ppp1pppp/8/3p4/8/8/PPPPPPPP/RNBQKBNR w KQkq d6 0 2"
            .parse()
            .unwrap();
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.en_passant_target, Some(Square(5, 3)));
        assert_eq!(board.fullmove_number, 2);
    }

    #[test]
    fn test_fen_errors() {
        assert_eq!(
            "8/8/8/8 w".parse::<Board>().unwrap_err(),
            FenError::TooFewParts { found: 2 }
        );
        assert!(matches!(
            "8/8/8/8/8/8/8/zzzzzzzz w - - 0 1".parse::<Board>(),
            Err(FenError::InvalidPiece { .. })
        ));
        assert!(matches!(
            "8/8/8/8/8/8/8/8 x - - 0 1".parse::<Board>(),
            Err(FenError::InvalidSideToMove { .. })
        ));
        assert!(matches!(
            "8/8/8/8/8/8/8/8 w Z - 0 1".parse::<Board>(),
            Err(FenError::InvalidCastling { .. })
        ));
        assert!(matches!(
            "8/8/8/8/8/8/8/8 w - z9 0 1".parse::<Board>(),
            Err(FenError::InvalidEnPassant { .. })
        ));
    }

    #[test]
    fn test_fen_halfmove_parsing() {
        let board: Board = "8/8/8/8/8/8/8/K1k5 w - - 57 1".parse().unwrap();
        assert_eq!(board.halfmove_clock, 57);
    }
}
