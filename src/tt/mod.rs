//! Transposition table storage and the prefetch hint issued by `make_move`.

mod transposition_table;

pub use transposition_table::{NodeType, TranspositionTable, TtEntry};

/// Cache hint for the table slot a key maps to.
///
/// Purely a performance hint: an implementation that does nothing must be
/// indistinguishable to callers.
pub trait TtPrefetch {
    fn prefetch(&self, key: u64);
}

/// Prefetcher that does nothing, for callers without a table
pub struct NoPrefetch;

impl TtPrefetch for NoPrefetch {
    #[inline(always)]
    fn prefetch(&self, _key: u64) {}
}
