use super::Piece;

/// Zobrist hashing constants for chess positions
///
/// Zobrist hashing uses random 64-bit numbers to represent each possible
/// piece-square combination, along with castling rights, en passant, and
/// side to move. This allows for efficient incremental hash updates.
#[derive(Clone)]
pub struct ZobristKeys {
    /// [piece index][square] - 12 pieces * 64 squares
    pub pieces: [[u64; 64]; 12],
    /// [castling bitmask] - one key per rights combination
    pub castling: [u64; 16],
    /// [square] - en passant target square
    pub en_passant: [u64; 64],
    /// Side to move (toggled in when it's black's turn)
    pub side_to_move: u64,
}

impl ZobristKeys {
    /// Generate Zobrist keys using a seeded random number generator
    /// This ensures the keys are random but reproducible
    pub fn generate(seed: u64) -> Self {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(seed);

        let mut pieces = [[0u64; 64]; 12];
        for piece in &mut pieces {
            for square in piece {
                *square = rng.gen();
            }
        }

        let mut castling = [0u64; 16];
        for castle in &mut castling {
            *castle = rng.gen();
        }

        let mut en_passant = [0u64; 64];
        for ep in &mut en_passant {
            *ep = rng.gen();
        }

        Self {
            pieces,
            castling,
            en_passant,
            side_to_move: rng.gen(),
        }
    }

    #[inline(always)]
    pub fn piece(&self, piece: Piece, square: usize) -> u64 {
        self.pieces[piece.index()][square]
    }
}
