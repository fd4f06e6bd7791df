use super::TtPrefetch;
use crate::game_repr::Move;

/// Node type for transposition table entries
///
/// - Exact: The exact score for this position
/// - LowerBound: Score is at least this value (beta cutoff)
/// - UpperBound: Score is at most this value (alpha cutoff)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Exact,
    LowerBound,
    UpperBound,
}

/// Entry in the transposition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    /// Zobrist key of the position
    pub key: u64,
    /// Search depth when this position was evaluated
    pub depth: u8,
    /// Evaluation score (centipawns)
    pub score: i32,
    /// Best move found in this position
    pub best_move: Option<Move>,
    pub node_type: NodeType,
}

/// Fixed-size, directly indexed transposition table.
///
/// The slot of a key is `key & (len - 1)`; the table length is a power of two.
/// Stored keys are compared in full on probe, so index collisions read as misses.
pub struct TranspositionTable {
    slots: Vec<Option<TtEntry>>,
    mask: usize,
    /// Statistics: number of successful probes
    pub hits: u64,
    /// Statistics: number of failed probes
    pub misses: u64,
}

impl TranspositionTable {
    /// Create a table using roughly `size_mb` megabytes
    pub fn new(size_mb: usize) -> Self {
        let bytes = size_mb.max(1) * 1024 * 1024;
        let wanted = bytes / std::mem::size_of::<Option<TtEntry>>();
        // Round down to a power of two
        let len = 1usize << (usize::BITS - 1 - wanted.max(2).leading_zeros());
        Self::with_slots(len)
    }

    /// Create a table with exactly `len` slots (rounded up to a power of two)
    pub fn with_slots(len: usize) -> Self {
        let len = len.max(1).next_power_of_two();
        log::debug!("allocating transposition table with {} slots", len);
        Self {
            slots: vec![None; len],
            mask: len - 1,
            hits: 0,
            misses: 0,
        }
    }

    #[inline(always)]
    fn slot_index(&self, key: u64) -> usize {
        key as usize & self.mask
    }

    /// Probe the table for a position
    pub fn probe(&mut self, key: u64) -> Option<TtEntry> {
        match self.slots[self.slot_index(key)] {
            Some(entry) if entry.key == key => {
                self.hits += 1;
                Some(entry)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store an entry.
    ///
    /// An occupied slot holding the same position is only replaced by an entry
    /// that is at least as deep, or by an exact score over a bound. A different
    /// position is always replaced.
    pub fn store(&mut self, entry: TtEntry) {
        let idx = self.slot_index(entry.key);
        if let Some(existing) = self.slots[idx] {
            let should_replace = existing.key != entry.key
                || entry.depth >= existing.depth
                || (entry.node_type == NodeType::Exact && existing.node_type != NodeType::Exact);
            if !should_replace {
                return;
            }
        }
        self.slots[idx] = Some(entry);
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.hits = 0;
        self.misses = 0;
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of occupied slots
    pub fn len_entries(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Get hit rate (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl TtPrefetch for TranspositionTable {
    #[inline(always)]
    fn prefetch(&self, key: u64) {
        let slot = &self.slots[self.slot_index(key)];

        #[cfg(target_arch = "x86_64")]
        // SAFETY: prefetching is a hint and never faults, the pointer is a live slot
        unsafe {
            use std::arch::x86_64::{_mm_prefetch, _MM_HINT_T0};
            _mm_prefetch::<_MM_HINT_T0>(slot as *const _ as *const i8);
        }

        #[cfg(not(target_arch = "x86_64"))]
        let _ = slot;
    }
}
