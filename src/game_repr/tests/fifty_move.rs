use super::*;

// ==================== FIFTY MOVE COUNTER TESTS ====================

#[test]
fn test_quiet_moves_increment() {
    let mut pos = position("4k3/8/8/8/8/8/8/R3K3 w - - 10 40");
    let mv = make(&mut pos, "a1a5");
    assert_eq!(pos.fifty_move(), 11);
    make(&mut pos, "e8d7");
    assert_eq!(pos.fifty_move(), 12);

    let mut pos = position("4k3/8/8/8/8/8/8/R3K3 w - - 10 40");
    pos.make_move(mv);
    pos.unmake_move(mv);
    assert_eq!(pos.fifty_move(), 10);
}

#[test]
fn test_pawn_move_resets() {
    let mut pos = position("4k3/8/8/8/8/8/4P3/4K3 w - - 7 30");
    let mv = make(&mut pos, "e2e3");
    assert_eq!(pos.fifty_move(), 0);

    pos.unmake_move(mv);
    assert_eq!(pos.fifty_move(), 7);
}

#[test]
fn test_capture_resets() {
    let mut pos = position("4k3/8/8/3p4/8/8/8/3RK3 w - - 12 30");
    let mv = make(&mut pos, "d1d5");
    assert_eq!(pos.fifty_move(), 0);

    pos.unmake_move(mv);
    assert_eq!(pos.fifty_move(), 12);
}

#[test]
fn test_fifty_move_draw() {
    let mut pos = position("4k3/8/8/8/8/8/8/R3K3 w - - 99 80");
    assert!(!pos.is_fifty_move_draw());
    make(&mut pos, "a1a2");
    assert!(pos.is_fifty_move_draw());
}

#[test]
fn test_counters_in_fen() {
    let mut pos = position("4k3/8/8/8/8/8/8/R3K3 w - - 10 40");
    make(&mut pos, "a1a5");
    assert_eq!(pos.to_fen(), "4k3/8/8/R7/8/8/8/4K3 b - - 11 40");
    make(&mut pos, "e8d7");
    assert_eq!(pos.to_fen(), "8/3k4/8/R7/8/8/8/4K3 w - - 12 41");
}
