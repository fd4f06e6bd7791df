use super::*;

// ==================== NULL MOVE TESTS ====================

#[test]
fn test_null_move_round_trip() {
    let mut pos = position("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 3 10");
    let before = pos.snapshot();

    pos.make_null_move();
    assert_eq!(pos.side(), Color::Black);
    assert_eq!(pos.his_ply(), 1);
    assert_eq!(pos.played_positions(), &[before.key]);
    pos.verify().unwrap();

    pos.take_null_move();
    assert_eq!(pos.snapshot(), before);
}

#[test]
fn test_null_move_clears_en_passant() {
    let mut pos = Position::default();
    make(&mut pos, "e2e4");

    pos.make_null_move();
    assert_eq!(pos.en_passant(), None);
    assert_eq!(pos.side(), Color::White);
    assert_eq!(pos.key(), pos.compute_hash());

    pos.take_null_move();
    assert_eq!(pos.en_passant(), Some(sq("e3")));
    assert_eq!(pos.key(), pos.compute_hash());
}

#[test]
fn test_null_move_leaves_board_and_accumulator() {
    let mut pos = Position::default();
    let accumulator = *pos.accumulator();
    let mailbox = *pos.mailbox();

    pos.make_null_move();
    assert_eq!(*pos.accumulator(), accumulator);
    assert_eq!(*pos.mailbox(), mailbox);
    assert_eq!(pos.fifty_move(), 0);
    assert!(!pos.in_check());
}

#[test]
fn test_null_move_nests_with_real_moves() {
    let mut pos = Position::default();
    let start = pos.snapshot();

    let e4 = make(&mut pos, "e2e4");
    pos.make_null_move();
    let d4 = make(&mut pos, "d2d4");
    assert_eq!(pos.his_ply(), 3);

    pos.unmake_move(d4);
    pos.take_null_move();
    pos.unmake_move(e4);
    assert_eq!(pos.snapshot(), start);
}
