use once_cell::sync::Lazy;

use super::bitboards::SliderAttacks;
use super::zobrist::ZobristKeys;
use crate::config::CoreConfig;

/// Read-only lookup data shared by every position: slider attack tables and
/// Zobrist keys. Positions hold a `&'static` handle to one of these.
pub struct EngineTables {
    pub attacks: SliderAttacks,
    pub zobrist: ZobristKeys,
}

/// Process-wide instance built from `CoreConfig::default()` on first use
static GLOBAL_TABLES: Lazy<EngineTables> = Lazy::new(|| EngineTables::new(&CoreConfig::default()));

impl EngineTables {
    pub fn new(config: &CoreConfig) -> Self {
        log::debug!("building engine tables (zobrist seed {:#x})", config.zobrist_seed);
        Self {
            attacks: SliderAttacks::generate(),
            zobrist: ZobristKeys::generate(config.zobrist_seed),
        }
    }

    pub fn global() -> &'static EngineTables {
        &GLOBAL_TABLES
    }

    /// Build a private instance that lives for the rest of the process.
    /// Meant for callers that need non-default seeds; build it once.
    pub fn leak(config: &CoreConfig) -> &'static EngineTables {
        Box::leak(Box::new(Self::new(config)))
    }
}

/// Bishop attacks from `square` using the global tables
#[inline]
pub fn bishop_attacks(square: usize, occupancy: u64) -> u64 {
    EngineTables::global().attacks.bishop_attacks(square, occupancy)
}

/// Rook attacks from `square` using the global tables
#[inline]
pub fn rook_attacks(square: usize, occupancy: u64) -> u64 {
    EngineTables::global().attacks.rook_attacks(square, occupancy)
}

/// Queen attacks from `square` using the global tables
#[inline]
pub fn queen_attacks(square: usize, occupancy: u64) -> u64 {
    EngineTables::global().attacks.queen_attacks(square, occupancy)
}
