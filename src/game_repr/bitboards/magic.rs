//! Magic bitboards for O(1) sliding piece attacks.
//!
//! For every square the relevant blockers (the empty-board rays minus the board
//! edges) are masked out of the occupancy, multiplied by a per-square magic
//! number and shifted right by `64 - popcount(mask)`. The result indexes a
//! dense slice of precomputed attack sets. Lookups trust the tables completely;
//! correctness is established once, when the tables are built.

use std::time::Instant;

use super::tables::{is_forward, DIAGONAL, ORTHOGONAL, RAYS};
use super::{file_mask, popcount, rank_mask, FILE_A, FILE_H, RANK_1, RANK_8};
use crate::game_repr::errors::MagicError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slider {
    Bishop,
    Rook,
}

impl Slider {
    #[inline]
    fn directions(self) -> &'static [usize; 4] {
        match self {
            Slider::Bishop => &DIAGONAL,
            Slider::Rook => &ORTHOGONAL,
        }
    }
}

/// Attack set of a slider computed by walking the rays.
/// Includes the first blocker in every direction and nothing beyond it.
pub fn ray_attacks(slider: Slider, square: usize, occupancy: u64) -> u64 {
    let mut attacks = 0u64;

    for &direction in slider.directions() {
        let ray = RAYS[direction][square];
        let blockers = ray & occupancy;
        if blockers == 0 {
            attacks |= ray;
            continue;
        }

        let blocker_sq = if is_forward(direction) {
            blockers.trailing_zeros() as usize
        } else {
            63 - blockers.leading_zeros() as usize
        };

        // Mask out squares beyond the blocker
        attacks |= ray & !RAYS[direction][blocker_sq];
    }

    attacks
}

/// Squares whose occupancy can change the attack set: the empty-board rays,
/// minus the last square of each ray.
pub fn relevance_mask(slider: Slider, square: usize) -> u64 {
    let edges = ((RANK_1 | RANK_8) & !rank_mask(square / 8))
        | ((FILE_A | FILE_H) & !file_mask(square % 8));
    ray_attacks(slider, square, 0) & !edges
}

/// Per-square lookup parameters
#[derive(Debug, Clone, Copy, Default)]
struct Magic {
    mask: u64,
    magic: u64,
    shift: u32,
    offset: usize,
}

impl Magic {
    #[inline(always)]
    fn index(&self, occupancy: u64) -> usize {
        self.offset + ((occupancy & self.mask).wrapping_mul(self.magic) >> self.shift) as usize
    }
}

/// The magic multipliers for every square, the input the attack tables are built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderMagics {
    pub bishop: [u64; 64],
    pub rook: [u64; 64],
}

impl SliderMagics {
    /// Search a working set of magics. Deterministic: the same numbers come
    /// out on every run.
    pub fn find() -> Self {
        let started = Instant::now();
        let mut attempts = 0u64;

        let mut magics = Self {
            bishop: [0; 64],
            rook: [0; 64],
        };
        for square in 0..64 {
            let (magic, tries) = find_magic(Slider::Bishop, square);
            magics.bishop[square] = magic;
            attempts += tries as u64;

            let (magic, tries) = find_magic(Slider::Rook, square);
            magics.rook[square] = magic;
            attempts += tries as u64;
        }

        log::debug!(
            "found 128 slider magics in {} attempts ({:?})",
            attempts,
            started.elapsed()
        );
        magics
    }

    #[inline]
    fn get(&self, slider: Slider) -> &[u64; 64] {
        match slider {
            Slider::Bishop => &self.bishop,
            Slider::Rook => &self.rook,
        }
    }
}

/// xorshift64star generator used for the magic search
struct SparseRng(u64);

impl SparseRng {
    fn rand64(&mut self) -> u64 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        self.0.wrapping_mul(2685821657736338717)
    }

    /// Few set bits make good magic candidates
    fn sparse_rand(&mut self) -> u64 {
        self.rand64() & self.rand64() & self.rand64()
    }
}

/// Seeds per rank that reach a valid magic in few attempts
const MAGIC_SEEDS: [u64; 8] = [728, 10316, 55013, 32803, 12281, 15100, 16645, 255];

/// Every subset of `mask` (Carry-Rippler) paired with its attack set
fn enumerate_occupancies(slider: Slider, square: usize, mask: u64) -> (Vec<u64>, Vec<u64>) {
    let size = 1usize << popcount(mask);
    let mut occupancy = Vec::with_capacity(size);
    let mut reference = Vec::with_capacity(size);

    let mut subset = 0u64;
    loop {
        occupancy.push(subset);
        reference.push(ray_attacks(slider, square, subset));
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }

    (occupancy, reference)
}

/// Write every reference attack into `slots` under `magic`. Fails on the first
/// slot that two occupancies with different attack sets hash to. `epoch`
/// marks which slots were written by this attempt (`stamp`).
fn fill_slots(
    occupancy: &[u64],
    reference: &[u64],
    magic: u64,
    shift: u32,
    slots: &mut [u64],
    epoch: &mut [u32],
    stamp: u32,
) -> bool {
    for (&occ, &attacks) in occupancy.iter().zip(reference) {
        let idx = (occ.wrapping_mul(magic) >> shift) as usize;
        if epoch[idx] < stamp {
            epoch[idx] = stamp;
            slots[idx] = attacks;
        } else if slots[idx] != attacks {
            return false;
        }
    }
    true
}

fn find_magic(slider: Slider, square: usize) -> (u64, u32) {
    let mask = relevance_mask(slider, square);
    let shift = 64 - popcount(mask);
    let (occupancy, reference) = enumerate_occupancies(slider, square, mask);

    let mut slots = vec![0u64; occupancy.len()];
    let mut epoch = vec![0u32; occupancy.len()];
    let mut rng = SparseRng(MAGIC_SEEDS[square / 8]);
    let mut stamp = 0u32;

    loop {
        let magic = loop {
            let candidate = rng.sparse_rand();
            if (candidate.wrapping_mul(mask) >> 56).count_ones() >= 6 {
                break candidate;
            }
        };

        stamp += 1;
        if fill_slots(&occupancy, &reference, magic, shift, &mut slots, &mut epoch, stamp) {
            return (magic, stamp);
        }
    }
}

/// Bishop and rook attack tables for all 64 squares.
///
/// Immutable once built, so one instance can be shared by any number of
/// threads.
pub struct SliderAttacks {
    bishop: [Magic; 64],
    rook: [Magic; 64],
    /// Dense attack sets; each square owns `1 << relevant_bits` consecutive slots
    table: Vec<u64>,
}

impl SliderAttacks {
    /// Find magics and build the tables from them
    pub fn generate() -> Self {
        let magics = SliderMagics::find();
        match Self::from_magics(&magics) {
            Ok(attacks) => attacks,
            Err(err) => unreachable!("freshly found magics rejected: {}", err),
        }
    }

    /// Build the tables from supplied magics, rejecting magics that collide
    pub fn from_magics(magics: &SliderMagics) -> Result<Self, MagicError> {
        let started = Instant::now();
        let mut attacks = Self {
            bishop: [Magic::default(); 64],
            rook: [Magic::default(); 64],
            table: Vec::new(),
        };

        for slider in [Slider::Bishop, Slider::Rook] {
            for square in 0..64 {
                let mask = relevance_mask(slider, square);
                let shift = 64 - popcount(mask);
                let (occupancy, reference) = enumerate_occupancies(slider, square, mask);

                let offset = attacks.table.len();
                attacks.table.resize(offset + occupancy.len(), 0);
                let mut epoch = vec![0u32; occupancy.len()];
                let magic = magics.get(slider)[square];

                let slots = &mut attacks.table[offset..];
                if !fill_slots(&occupancy, &reference, magic, shift, slots, &mut epoch, 1) {
                    return Err(MagicError::Collision { slider, square });
                }

                let entry = Magic {
                    mask,
                    magic,
                    shift,
                    offset,
                };
                match slider {
                    Slider::Bishop => attacks.bishop[square] = entry,
                    Slider::Rook => attacks.rook[square] = entry,
                }
            }
        }

        log::debug!(
            "built slider attack tables: {} entries ({:?})",
            attacks.table.len(),
            started.elapsed()
        );
        Ok(attacks)
    }

    /// Squares attacked by a bishop on `square` given blockers `occupancy`
    #[inline(always)]
    pub fn bishop_attacks(&self, square: usize, occupancy: u64) -> u64 {
        self.table[self.bishop[square].index(occupancy)]
    }

    /// Squares attacked by a rook on `square` given blockers `occupancy`
    #[inline(always)]
    pub fn rook_attacks(&self, square: usize, occupancy: u64) -> u64 {
        self.table[self.rook[square].index(occupancy)]
    }

    #[inline(always)]
    pub fn queen_attacks(&self, square: usize, occupancy: u64) -> u64 {
        self.bishop_attacks(square, occupancy) | self.rook_attacks(square, occupancy)
    }

    #[inline]
    pub fn attacks(&self, slider: Slider, square: usize, occupancy: u64) -> u64 {
        match slider {
            Slider::Bishop => self.bishop_attacks(square, occupancy),
            Slider::Rook => self.rook_attacks(square, occupancy),
        }
    }

    pub fn relevant_bits(&self, slider: Slider, square: usize) -> u32 {
        64 - self.entry(slider, square).shift
    }

    pub fn mask(&self, slider: Slider, square: usize) -> u64 {
        self.entry(slider, square).mask
    }

    /// The magics these tables were built from
    pub fn magics(&self) -> SliderMagics {
        SliderMagics {
            bishop: std::array::from_fn(|sq| self.bishop[sq].magic),
            rook: std::array::from_fn(|sq| self.rook[sq].magic),
        }
    }

    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    fn entry(&self, slider: Slider, square: usize) -> &Magic {
        match slider {
            Slider::Bishop => &self.bishop[square],
            Slider::Rook => &self.rook[square],
        }
    }
}
