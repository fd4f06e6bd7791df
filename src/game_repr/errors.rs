use thiserror::Error;

use super::bitboards::Slider;

/// Errors from [`Position::from_fen`](super::Position::from_fen)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN is missing the {0} field")]
    MissingField(&'static str),
    #[error("invalid piece character '{0}' in FEN")]
    InvalidPiece(char),
    #[error("rank {rank} of the FEN describes {squares} squares, expected 8")]
    BadRankLength { rank: usize, squares: usize },
    #[error("FEN describes {0} ranks, expected 8")]
    BadRankCount(usize),
    #[error("invalid side to move '{0}'")]
    InvalidSide(String),
    #[error("invalid castling field '{0}'")]
    InvalidCastling(String),
    #[error("invalid en passant square '{0}'")]
    InvalidEnPassant(String),
    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
    #[error("{0:?} has {1} kings, expected exactly one")]
    KingCount(super::Color, u32),
}

/// Errors from long-algebraic move parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("move '{0}' is not in long algebraic form")]
    Malformed(String),
    #[error("no piece of the side to move on {0}")]
    NoPieceOnSource(String),
    #[error("invalid promotion piece in '{0}'")]
    InvalidPromotion(String),
    #[error("move '{0}' would capture a friendly piece")]
    FriendlyCapture(String),
    #[error("move '{0}' would capture the king")]
    KingCapture(String),
}

/// A broken invariant found by [`Position::verify`](super::Position::verify)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    #[error("square {square} is claimed by {count} piece bitboards")]
    OverlappingPieces { square: usize, count: u32 },
    #[error("occupancy plane {plane} is {actual:#018x}, union of piece boards is {expected:#018x}")]
    OccupancyMismatch { plane: usize, expected: u64, actual: u64 },
    #[error("mailbox square {square} disagrees with the bitboards")]
    MailboxMismatch { square: usize },
    #[error("position key {actual:#018x} differs from recomputed key {expected:#018x}")]
    KeyMismatch { expected: u64, actual: u64 },
    #[error("cached checkers {actual:#018x} differ from recomputed {expected:#018x}")]
    CheckersMismatch { expected: u64, actual: u64 },
    #[error("history index {his_ply} does not match {played} recorded keys")]
    HistoryMismatch { his_ply: usize, played: usize },
}

/// Supplied magic numbers that do not hash every relevant occupancy correctly
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MagicError {
    #[error("{slider:?} magic for square {square} maps different attack sets to one slot")]
    Collision { slider: Slider, square: usize },
}
