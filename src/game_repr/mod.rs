pub mod bitboards;
pub mod castling;
mod engine_tables;
pub mod errors;
mod history;
mod make_move;
mod moves;
mod piece;
mod position;
mod uci_move;
pub mod zobrist;

#[cfg(test)]
mod tests;

pub use bitboards::*;
pub use engine_tables::*;
pub use errors::*;
pub use history::{History, Undo};
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use zobrist::ZobristKeys;
