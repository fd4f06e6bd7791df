use super::Color;

/// Castling rights bitmask
pub const WHITE_KING_SIDE: u8 = 1;
pub const WHITE_QUEEN_SIDE: u8 = 2;
pub const BLACK_KING_SIDE: u8 = 4;
pub const BLACK_QUEEN_SIDE: u8 = 8;
pub const ALL_CASTLING: u8 = 15;

pub const A1: usize = 0;
pub const C1: usize = 2;
pub const D1: usize = 3;
pub const E1: usize = 4;
pub const F1: usize = 5;
pub const G1: usize = 6;
pub const H1: usize = 7;
pub const A8: usize = 56;
pub const C8: usize = 58;
pub const D8: usize = 59;
pub const E8: usize = 60;
pub const F8: usize = 61;
pub const G8: usize = 62;
pub const H8: usize = 63;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    /// The king always lands on the g or c file
    #[inline(always)]
    pub fn from_king_destination(to: usize) -> CastleSide {
        if to % 8 == 6 {
            CastleSide::King
        } else {
            CastleSide::Queen
        }
    }

    #[inline(always)]
    fn index(self) -> usize {
        match self {
            CastleSide::King => 0,
            CastleSide::Queen => 1,
        }
    }
}

/// (rook_from, rook_to) indexed by [color][castle side]
const CASTLE_ROOK_MOVES: [[(usize, usize); 2]; 2] = [
    [(H1, F1), (A1, D1)],
    [(H8, F8), (A8, D8)],
];

#[inline(always)]
pub fn castle_rook_move(color: Color, side: CastleSide) -> (usize, usize) {
    CASTLE_ROOK_MOVES[color.index()][side.index()]
}

/// Rights kept when a piece moves from or to a square.
/// Touching a king or rook home square drops the matching rights.
pub static CASTLING_RIGHTS: [u8; 64] = generate_castling_rights();

const fn generate_castling_rights() -> [u8; 64] {
    let mut rights = [ALL_CASTLING; 64];
    rights[A1] = ALL_CASTLING & !WHITE_QUEEN_SIDE;
    rights[E1] = ALL_CASTLING & !(WHITE_KING_SIDE | WHITE_QUEEN_SIDE);
    rights[H1] = ALL_CASTLING & !WHITE_KING_SIDE;
    rights[A8] = ALL_CASTLING & !BLACK_QUEEN_SIDE;
    rights[E8] = ALL_CASTLING & !(BLACK_KING_SIDE | BLACK_QUEEN_SIDE);
    rights[H8] = ALL_CASTLING & !BLACK_KING_SIDE;
    rights
}

/// FEN castling field ("KQkq", "-", ...)
pub fn castling_to_string(perm: u8) -> String {
    let mut s = String::new();
    if perm & WHITE_KING_SIDE != 0 {
        s.push('K');
    }
    if perm & WHITE_QUEEN_SIDE != 0 {
        s.push('Q');
    }
    if perm & BLACK_KING_SIDE != 0 {
        s.push('k');
    }
    if perm & BLACK_QUEEN_SIDE != 0 {
        s.push('q');
    }
    if s.is_empty() {
        s.push('-');
    }
    s
}
