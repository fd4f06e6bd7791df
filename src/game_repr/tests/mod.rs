use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Position from a FEN the test knows to be valid
pub fn position(fen: &str) -> Position {
    Position::from_fen(fen).unwrap_or_else(|err| panic!("bad test FEN '{}': {}", fen, err))
}

/// Square index from its name
pub fn sq(name: &str) -> usize {
    parse_square(name).unwrap_or_else(|| panic!("bad square '{}'", name))
}

pub fn bit(name: &str) -> u64 {
    1u64 << sq(name)
}

/// Apply `uci`, check every invariant, take it back and check nothing changed
pub fn assert_round_trip(pos: &mut Position, uci: &str) {
    let before = pos.snapshot();
    let mv = pos.parse_move(uci).unwrap();

    pos.make_move(mv);
    pos.verify().unwrap_or_else(|err| panic!("after {}: {}", uci, err));

    pos.unmake_move(mv);
    pos.verify().unwrap_or_else(|err| panic!("after unmaking {}: {}", uci, err));
    assert_eq!(pos.snapshot(), before, "round trip of {}", uci);
}

/// Apply a move and verify the result
pub fn make(pos: &mut Position, uci: &str) -> Move {
    let mv = pos.parse_move(uci).unwrap();
    pos.make_move(mv);
    pos.verify().unwrap_or_else(|err| panic!("after {}: {}", uci, err));
    mv
}

// ==================== TEST MODULES ====================

mod en_passant;
mod fifty_move;
mod hashing;
mod null_move;
mod promotion;
