use super::pst::{PIECE_VALUES, PST_EG, PST_MG};
use super::{Bitboard, Color, Piece, Square};
use crate::zobrist::ZOBRIST;

pub(crate) const CASTLE_WHITE_K: u8 = 0b0001;
pub(crate) const CASTLE_WHITE_Q: u8 = 0b0010;
pub(crate) const CASTLE_BLACK_K: u8 = 0b0100;
pub(crate) const CASTLE_BLACK_Q: u8 = 0b1000;

/// A chess position with incrementally maintained evaluation accumulators.
///
/// Every mutation goes through [`Board::set_piece`] / [`Board::remove_piece`],
/// which keep the bitboards, the material totals, the piece-square partial
/// sums and the position hash consistent with each other. The evaluation
/// core only reads these accumulators; it never recomputes them from the
/// board.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) white_to_move: bool,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: u8, // bitmask
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    // Piece-placement part of the Zobrist hash; flags are folded in by hash()
    piece_hash: u64,
    // Incrementally counted material and piece-square sums, per side
    pub(crate) piece_material: [i32; 2], // non-pawn, non-king material
    pub(crate) pawn_material: [i32; 2],
    pub(crate) pcsq_mg: [i32; 2],
    pub(crate) pcsq_eg: [i32; 2],
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(7, file), Color::Black, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        board.castling_rights = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;
        board
    }

    #[must_use]
    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            white_to_move: true,
            en_passant_target: None,
            castling_rights: 0,
            halfmove_clock: 0,
            fullmove_number: 1,
            piece_hash: 0,
            piece_material: [0, 0],
            pawn_material: [0, 0],
            pcsq_mg: [0, 0],
            pcsq_eg: [0, 0],
        }
    }

    /// Place a piece on an empty square, updating all accumulators.
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        debug_assert!(
            !self.all_occupied.contains(sq),
            "set_piece on occupied square {sq}"
        );
        let bit = Bitboard::from_square(sq);
        let c = color.index();
        let p = piece.index();

        self.pieces[c][p] = self.pieces[c][p] | bit;
        self.occupied[c] = self.occupied[c] | bit;
        self.all_occupied = self.all_occupied | bit;
        self.piece_hash ^= ZOBRIST.piece_keys[p][c][sq.as_index()];

        let rel = color.relative_square(sq).as_index();
        self.pcsq_mg[c] += PST_MG[p][rel];
        self.pcsq_eg[c] += PST_EG[p][rel];
        match piece {
            Piece::Pawn => self.pawn_material[c] += PIECE_VALUES[p],
            Piece::King => {}
            _ => self.piece_material[c] += PIECE_VALUES[p],
        }
    }

    /// Remove a piece from a square, updating all accumulators.
    pub fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = Bitboard::from_square(sq);
        let c = color.index();
        let p = piece.index();
        debug_assert!(
            !(self.pieces[c][p] & bit).is_empty(),
            "remove_piece of absent {color} piece at {sq}"
        );

        self.pieces[c][p] = self.pieces[c][p] & !bit;
        self.occupied[c] = self.occupied[c] & !bit;
        self.all_occupied = self.all_occupied & !bit;
        self.piece_hash ^= ZOBRIST.piece_keys[p][c][sq.as_index()];

        let rel = color.relative_square(sq).as_index();
        self.pcsq_mg[c] -= PST_MG[p][rel];
        self.pcsq_eg[c] -= PST_EG[p][rel];
        match piece {
            Piece::Pawn => self.pawn_material[c] -= PIECE_VALUES[p],
            Piece::King => {}
            _ => self.piece_material[c] -= PIECE_VALUES[p],
        }
    }

    /// The piece on a square, if any.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        for color in Color::BOTH {
            if !self.occupied[color.index()].contains(sq) {
                continue;
            }
            for piece in Piece::ALL {
                if self.pieces[color.index()][piece.index()].contains(sq) {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    /// Number of pieces of the given type for the given side.
    #[inline]
    #[must_use]
    pub fn piece_count(&self, color: Color, piece: Piece) -> u32 {
        self.pieces[color.index()][piece.index()].popcount()
    }

    /// The king's square for the given side, if a king is on the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces[color.index()][Piece::King.index()].iter().next()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.white_to_move = color == Color::White;
    }

    /// Non-pawn, non-king material for the given side, in centipawns.
    #[inline]
    #[must_use]
    pub fn piece_material(&self, color: Color) -> i32 {
        self.piece_material[color.index()]
    }

    /// Pawn material for the given side, in centipawns.
    #[inline]
    #[must_use]
    pub fn pawn_material(&self, color: Color) -> i32 {
        self.pawn_material[color.index()]
    }

    /// The position's Zobrist key, including side to move, castling rights
    /// and en passant file.
    #[must_use]
    pub fn hash(&self) -> u64 {
        let mut h = self.piece_hash;
        if !self.white_to_move {
            h ^= ZOBRIST.black_to_move_key;
        }
        if self.castling_rights & CASTLE_WHITE_K != 0 {
            h ^= ZOBRIST.castling_keys[0][0];
        }
        if self.castling_rights & CASTLE_WHITE_Q != 0 {
            h ^= ZOBRIST.castling_keys[0][1];
        }
        if self.castling_rights & CASTLE_BLACK_K != 0 {
            h ^= ZOBRIST.castling_keys[1][0];
        }
        if self.castling_rights & CASTLE_BLACK_Q != 0 {
            h ^= ZOBRIST.castling_keys[1][1];
        }
        if let Some(ep) = self.en_passant_target {
            h ^= ZOBRIST.en_passant_keys[ep.file()];
        }
        h
    }

    /// The color-mirrored position: every piece reflected to the opposite
    /// side's mirror square, side to move, castling rights and en passant
    /// target flipped.
    ///
    /// Evaluation is color-symmetric, so `evaluate(board)` must equal
    /// `-evaluate(board.mirrored())`.
    #[must_use]
    pub fn mirrored(&self) -> Board {
        let mut out = Board::empty();
        for color in Color::BOTH {
            for piece in Piece::ALL {
                for sq in self.pieces[color.index()][piece.index()].iter() {
                    out.set_piece(sq.flip_vertical(), color.opponent(), piece);
                }
            }
        }
        out.white_to_move = !self.white_to_move;
        out.castling_rights = ((self.castling_rights & 0b0011) << 2)
            | ((self.castling_rights & 0b1100) >> 2);
        out.en_passant_target = self.en_passant_target.map(Square::flip_vertical);
        out.halfmove_clock = self.halfmove_clock;
        out.fullmove_number = self.fullmove_number;
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_accounting() {
        let board = Board::new();
        for color in Color::BOTH {
            assert_eq!(board.pawn_material(color), 800);
            // 2N + 2B + 2R + Q
            assert_eq!(board.piece_material(color), 2 * 310 + 2 * 320 + 2 * 500 + 975);
        }
        assert_eq!(board.pcsq_mg[0], board.pcsq_mg[1], "mirrored PST sums match");
        assert_eq!(board.pcsq_eg[0], board.pcsq_eg[1]);
    }

    #[test]
    fn test_set_remove_restores_accumulators() {
        let mut board = Board::new();
        let before = (
            board.hash(),
            board.piece_material,
            board.pawn_material,
            board.pcsq_mg,
            board.pcsq_eg,
        );

        board.set_piece(Square(4, 4), Color::White, Piece::Queen);
        assert_ne!(board.hash(), before.0);
        board.remove_piece(Square(4, 4), Color::White, Piece::Queen);

        assert_eq!(board.hash(), before.0);
        assert_eq!(board.piece_material, before.1);
        assert_eq!(board.pawn_material, before.2);
        assert_eq!(board.pcsq_mg, before.3);
        assert_eq!(board.pcsq_eg, before.4);
    }

    #[test]
    fn test_piece_at() {
        let board = Board::new();
        assert_eq!(board.piece_at(Square(0, 4)), Some((Color::White, Piece::King)));
        assert_eq!(board.piece_at(Square(7, 3)), Some((Color::Black, Piece::Queen)));
        assert_eq!(board.piece_at(Square(4, 4)), None);
    }

    #[test]
    fn test_hash_depends_on_side_to_move() {
        let mut board = Board::new();
        let white = board.hash();
        board.set_side_to_move(Color::Black);
        assert_ne!(board.hash(), white);
    }

    #[test]
    fn test_mirrored_startpos_is_startpos_with_black_to_move() {
        let board = Board::new();
        let mirror = board.mirrored();
        assert_eq!(mirror.side_to_move(), Color::Black);
        assert_eq!(mirror.piece_at(Square(0, 4)), Some((Color::White, Piece::King)));
        assert_eq!(mirror.piece_material, board.piece_material);
        // White's PST sums become Black's and vice versa
        assert_eq!(mirror.pcsq_mg[0], board.pcsq_mg[1]);
        assert_eq!(mirror.pcsq_mg[1], board.pcsq_mg[0]);
    }

    #[test]
    fn test_mirrored_involution() {
        let board: Board = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R4RK1 w kq e3 0 1"
            .parse()
            .unwrap();
        let twice = board.mirrored().mirrored();
        assert_eq!(twice.hash(), board.hash());
    }

    #[test]
    fn test_king_square() {
        let board = Board::new();
        assert_eq!(board.king_square(Color::White), Some(Square(0, 4)));
        assert_eq!(board.king_square(Color::Black), Some(Square(7, 4)));
        assert_eq!(Board::empty().king_square(Color::White), None);
    }
}
