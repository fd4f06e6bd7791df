//! Incremental evaluation features.
//!
//! The board core calls an [`Accumulator`] at exactly the points where it moves
//! pieces and keeps a rollback stack of accumulator snapshots. It never reads
//! the accumulator's contents; interpreting them is the evaluator's business.

mod piece_square_tables;

pub use piece_square_tables::{psqt_value, PHASE_WEIGHTS, TOTAL_PHASE};

use crate::game_repr::{Color, Piece};

/// Evaluation-feature state updated alongside piece placement
pub trait Accumulator: Clone {
    /// `piece` appeared on `square`
    fn add(&mut self, piece: Piece, square: usize);

    /// `piece` left `square`
    fn clear(&mut self, piece: Piece, square: usize);

    /// `piece` moved from `from` to `to`
    fn move_piece(&mut self, piece: Piece, from: usize, to: usize) {
        self.clear(piece, from);
        self.add(piece, to);
    }

    /// Rebuild from a full board
    fn refresh(&mut self, board: &[Piece; 64]);
}

/// No evaluation state at all
impl Accumulator for () {
    #[inline(always)]
    fn add(&mut self, _piece: Piece, _square: usize) {}

    #[inline(always)]
    fn clear(&mut self, _piece: Piece, _square: usize) {}

    #[inline(always)]
    fn refresh(&mut self, _board: &[Piece; 64]) {}
}

/// Tapered evaluation score with middlegame and endgame components
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaperedScore {
    pub mg: i32,
    pub eg: i32,
}

impl TaperedScore {
    /// Interpolate between middlegame and endgame scores based on game phase
    /// phase: 0 (endgame) to 256 (opening)
    pub fn interpolate(&self, phase: i32) -> i32 {
        ((self.mg * phase) + (self.eg * (256 - phase))) / 256
    }

    pub fn add(&mut self, other: TaperedScore) {
        self.mg += other.mg;
        self.eg += other.eg;
    }

    pub fn sub(&mut self, other: TaperedScore) {
        self.mg -= other.mg;
        self.eg -= other.eg;
    }
}

/// Material + piece-square sums and game phase, kept incrementally
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PsqtAccumulator {
    /// White minus black
    score: TaperedScore,
    /// Sum of [`PHASE_WEIGHTS`] over the pieces on the board
    phase: i32,
}

impl PsqtAccumulator {
    pub fn score(&self) -> TaperedScore {
        self.score
    }

    /// 0 (bare kings and pawns) to 256 (all pieces)
    pub fn phase(&self) -> i32 {
        let phase = (self.phase.min(TOTAL_PHASE) * 256 + TOTAL_PHASE / 2) / TOTAL_PHASE;
        phase.clamp(0, 256)
    }

    /// Centipawns from the point of view of `side`
    pub fn evaluate(&self, side: Color) -> i32 {
        let white = self.score.interpolate(self.phase());
        match side {
            Color::White => white,
            Color::Black => -white,
        }
    }
}

impl Accumulator for PsqtAccumulator {
    #[inline]
    fn add(&mut self, piece: Piece, square: usize) {
        self.score.add(psqt_value(piece, square));
        self.phase += PHASE_WEIGHTS[piece.piece_type.index()];
    }

    #[inline]
    fn clear(&mut self, piece: Piece, square: usize) {
        self.score.sub(psqt_value(piece, square));
        self.phase -= PHASE_WEIGHTS[piece.piece_type.index()];
    }

    #[inline]
    fn move_piece(&mut self, piece: Piece, from: usize, to: usize) {
        self.score.sub(psqt_value(piece, from));
        self.score.add(psqt_value(piece, to));
    }

    fn refresh(&mut self, board: &[Piece; 64]) {
        *self = Self::default();
        for (square, piece) in board.iter().enumerate() {
            if !piece.is_none() {
                self.add(*piece, square);
            }
        }
    }
}
