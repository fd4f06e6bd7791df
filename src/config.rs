//! Core configuration.
//!
//! A [`CoreConfig`] fixes the sizes of the per-position stacks and the seeds of
//! the shared lookup tables. The defaults are what [`EngineTables::global`]
//! and [`Position::default`] use.
//!
//! [`EngineTables::global`]: crate::game_repr::EngineTables::global
//! [`Position::default`]: crate::game_repr::Position

/// Longest game (in plies) a position is expected to carry in its history
pub const DEFAULT_MAX_GAME_PLY: usize = 1024;

/// Deepest search line on top of the game history
pub const DEFAULT_MAX_SEARCH_DEPTH: usize = 128;

pub const DEFAULT_ZOBRIST_SEED: u64 = 0x517cc1b727220a95;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Plies of game history a position can hold before search starts
    pub max_game_ply: usize,
    /// Extra plies reserved for the search on top of the game
    pub max_search_depth: usize,
    /// Seed for the Zobrist key generator
    pub zobrist_seed: u64,
    /// Transposition table size in megabytes
    pub tt_size_mb: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            max_game_ply: DEFAULT_MAX_GAME_PLY,
            max_search_depth: DEFAULT_MAX_SEARCH_DEPTH,
            zobrist_seed: DEFAULT_ZOBRIST_SEED,
            tt_size_mb: 16,
        }
    }
}

impl CoreConfig {
    /// Number of history slots every position allocates up front
    pub fn history_capacity(&self) -> usize {
        self.max_game_ply + self.max_search_depth
    }

    pub fn with_zobrist_seed(mut self, seed: u64) -> Self {
        self.zobrist_seed = seed;
        self
    }

    pub fn with_search_depth(mut self, depth: usize) -> Self {
        self.max_search_depth = depth;
        self
    }
}
