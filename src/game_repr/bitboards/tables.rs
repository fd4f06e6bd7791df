//! Leaper attack tables and empty-board rays, all built at compile time.

/// (rank, file) offsets of the eight knight jumps
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// KNIGHT_ATTACKS[square] returns a bitboard of all squares a knight attacks from that square
pub static KNIGHT_ATTACKS: [u64; 64] = generate_leaper_attacks(&KNIGHT_DELTAS);

/// KING_ATTACKS[square] returns a bitboard of all squares a king attacks from that square
pub static KING_ATTACKS: [u64; 64] = generate_leaper_attacks(&KING_DELTAS);

/// PAWN_ATTACKS[color][square] returns a bitboard of squares a pawn of that color attacks
/// Index 0 = White (captures towards rank 8), Index 1 = Black
pub static PAWN_ATTACKS: [[u64; 64]; 2] = [
    generate_leaper_attacks(&[(1, -1), (1, 1)]),
    generate_leaper_attacks(&[(-1, -1), (-1, 1)]),
];

const fn generate_leaper_attacks(deltas: &[(i8, i8)]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    let mut sq = 0;

    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut attack = 0u64;

        let mut i = 0;
        while i < deltas.len() {
            let (dr, df) = deltas[i];
            let r = rank + dr;
            let f = file + df;
            if r >= 0 && r < 8 && f >= 0 && f < 8 {
                attack |= 1u64 << (r * 8 + f);
            }
            i += 1;
        }

        attacks[sq] = attack;
        sq += 1;
    }

    attacks
}

// Direction indices
pub const NORTH: usize = 0;
pub const NORTH_EAST: usize = 1;
pub const EAST: usize = 2;
pub const SOUTH_EAST: usize = 3;
pub const SOUTH: usize = 4;
pub const SOUTH_WEST: usize = 5;
pub const WEST: usize = 6;
pub const NORTH_WEST: usize = 7;

pub const ORTHOGONAL: [usize; 4] = [NORTH, EAST, SOUTH, WEST];
pub const DIAGONAL: [usize; 4] = [NORTH_EAST, SOUTH_EAST, SOUTH_WEST, NORTH_WEST];

/// (rank, file) step for each direction index
const DIRECTION_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// RAYS[direction][square] returns a bitboard of all squares in that direction from the square
pub static RAYS: [[u64; 64]; 8] = generate_rays();

const fn generate_rays() -> [[u64; 64]; 8] {
    let mut rays = [[0u64; 64]; 8];
    let mut dir = 0;

    while dir < 8 {
        let (dr, df) = DIRECTION_STEPS[dir];
        let mut sq = 0;
        while sq < 64 {
            let mut r = (sq / 8) as i8 + dr;
            let mut f = (sq % 8) as i8 + df;
            while r >= 0 && r < 8 && f >= 0 && f < 8 {
                rays[dir][sq] |= 1u64 << (r * 8 + f);
                r += dr;
                f += df;
            }
            sq += 1;
        }
        dir += 1;
    }

    rays
}

/// Rays that walk towards higher square indices
#[inline]
pub const fn is_forward(direction: usize) -> bool {
    matches!(direction, NORTH | NORTH_EAST | EAST | NORTH_WEST)
}
