use super::Piece;

/// Rollback record written before a move mutates the position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Undo {
    pub fifty_move: u16,
    pub en_passant: Option<usize>,
    pub castle_perm: u8,
    pub checkers: u64,
    /// Piece taken by a normal (non en passant) capture, `Type::None` otherwise
    pub capture: Piece,
    /// Written by a light apply that never pushed an accumulator snapshot
    pub light: bool,
}

/// Fixed-capacity stack of [`Undo`] records indexed by ply.
///
/// Slots are reused: `top` is the number of live entries, anything above it
/// is stale.
#[derive(Clone, Debug)]
pub struct History {
    entries: Box<[Undo]>,
    top: usize,
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: vec![Undo::default(); capacity].into_boxed_slice(),
            top: 0,
        }
    }

    /// Slot for the next record. Does not advance `top`; call [`History::advance`].
    #[inline(always)]
    pub fn next_slot(&mut self) -> &mut Undo {
        debug_assert!(
            self.top < self.entries.len(),
            "history overflow at ply {}",
            self.top
        );
        &mut self.entries[self.top]
    }

    #[inline(always)]
    pub fn advance(&mut self) {
        self.top += 1;
    }

    /// Drop the newest record and return it
    #[inline(always)]
    pub fn pop(&mut self) -> Undo {
        debug_assert!(self.top > 0, "unmake without a matching make");
        self.top -= 1;
        self.entries[self.top]
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.top
    }

    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }
}
