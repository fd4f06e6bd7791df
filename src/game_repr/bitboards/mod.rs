use super::{piece::Piece, Color};

pub mod magic;
pub mod tables;
pub use magic::*;
pub use tables::*;

/// Index of the both-colors plane in `occupancies`
pub const BOTH: usize = 2;

/// Bitboard representation using 12 u64 values (6 piece types × 2 colors)
/// plus three derived occupancy planes.
/// Each bit represents presence/absence of a piece on that square (0-63)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitboards {
    /// 12 piece-specific bitboards indexed by [`Piece::index`]
    /// White: 0=Pawn, 1=Knight, 2=Bishop, 3=Rook, 4=Queen, 5=King
    /// Black: 6=Pawn, 7=Knight, 8=Bishop, 9=Rook, 10=Queen, 11=King
    pieces: [u64; 12],
    /// [white, black, both], always the unions of `pieces`
    occupancies: [u64; 3],
}

impl Bitboards {
    /// Create empty bitboards
    pub fn empty() -> Self {
        Self {
            pieces: [0; 12],
            occupancies: [0; 3],
        }
    }

    /// Convert from 64-element piece array to bitboards
    pub fn from_array(pieces: &[Piece; 64]) -> Self {
        let mut bitboards = Self::empty();

        for (idx, piece) in pieces.iter().enumerate() {
            if !piece.is_none() {
                bitboards.add_piece(*piece, idx);
            }
        }

        bitboards
    }

    /// Add a piece to a square, updating the occupancy planes
    #[inline(always)]
    pub fn add_piece(&mut self, piece: Piece, square: usize) {
        let bit = 1u64 << square;
        self.pieces[piece.index()] |= bit;
        self.occupancies[piece.color.index()] |= bit;
        self.occupancies[BOTH] |= bit;
    }

    /// Remove a piece from a square, updating the occupancy planes
    #[inline(always)]
    pub fn remove_piece(&mut self, piece: Piece, square: usize) {
        let bit = !(1u64 << square);
        self.pieces[piece.index()] &= bit;
        self.occupancies[piece.color.index()] &= bit;
        self.occupancies[BOTH] &= bit;
    }

    /// Test if a bit is set at the given square for the specified piece
    #[inline]
    pub fn test_bit(&self, piece: Piece, square: usize) -> bool {
        (self.pieces[piece.index()] & (1u64 << square)) != 0
    }

    /// Get bitboard for a specific piece
    #[inline(always)]
    pub fn pieces(&self, piece: Piece) -> u64 {
        self.pieces[piece.index()]
    }

    /// Raw access by piece index (0..12)
    #[inline(always)]
    pub fn by_index(&self, idx: usize) -> u64 {
        self.pieces[idx]
    }

    /// Get bitboard for all pieces of a color
    #[inline(always)]
    pub fn occupied_by_color(&self, color: Color) -> u64 {
        self.occupancies[color.index()]
    }

    /// Get bitboard for all occupied squares
    #[inline(always)]
    pub fn all_occupied(&self) -> u64 {
        self.occupancies[BOTH]
    }

    /// Union of the per-piece boards of one color, computed from scratch
    pub fn union_of_color(&self, color: Color) -> u64 {
        let base = color.index() * 6;
        self.pieces[base..base + 6].iter().fold(0, |acc, bb| acc | bb)
    }
}

/// Pop the least significant bit from a bitboard and return its index
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> usize {
    let sq = bb.trailing_zeros() as usize;
    *bb &= *bb - 1; // Clear the LSB
    sq
}

/// Find the index of the least significant bit (without modifying the bitboard)
#[inline(always)]
pub fn bitscan_forward(bb: u64) -> usize {
    bb.trailing_zeros() as usize
}

/// Count the number of set bits in a bitboard
#[inline]
pub fn popcount(bb: u64) -> u32 {
    bb.count_ones()
}

// File and rank masks
pub const FILE_A: u64 = 0x0101010101010101;
pub const FILE_H: u64 = 0x8080808080808080;

pub const RANK_1: u64 = 0x00000000000000FF;
pub const RANK_8: u64 = 0xFF00000000000000;

#[inline]
pub const fn file_mask(file: usize) -> u64 {
    FILE_A << file
}

#[inline]
pub const fn rank_mask(rank: usize) -> u64 {
    RANK_1 << (rank * 8)
}
