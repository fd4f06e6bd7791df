//! Board state, move application and sliding-piece attack tables for a
//! chess engine's search loop.
//!
//! A [`Position`](game_repr::Position) is mutated in place by
//! `make_move` / `unmake_move` pairs, keeping its Zobrist key, check status
//! and evaluation accumulator current. The magic-bitboard attack tables and
//! Zobrist keys live in a shared, read-only [`EngineTables`](game_repr::EngineTables).

pub mod config;
pub mod eval;
pub mod game_repr;
pub mod tt;
