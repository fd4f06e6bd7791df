use super::*;

// ==================== EN PASSANT TESTS ====================

#[test]
fn test_double_push_sets_target() {
    let mut pos = Position::default();
    make(&mut pos, "e2e4");
    assert_eq!(pos.en_passant(), Some(sq("e3")));

    make(&mut pos, "c7c5");
    assert_eq!(pos.en_passant(), Some(sq("c6")));
}

#[test]
fn test_target_lasts_one_ply() {
    let mut pos = Position::default();
    make(&mut pos, "e2e4");
    make(&mut pos, "g8f6");
    assert_eq!(pos.en_passant(), None);
    assert_eq!(pos.key(), pos.compute_hash());
}

#[test]
fn test_single_push_sets_no_target() {
    let mut pos = Position::default();
    make(&mut pos, "e2e3");
    assert_eq!(pos.en_passant(), None);
}

#[test]
fn test_white_captures_en_passant() {
    let mut pos = position("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let mv = pos.parse_move("e5f6").unwrap();
    assert!(mv.is_en_passant());

    pos.make_move(mv);
    pos.verify().unwrap();
    assert_eq!(pos.piece_on(sq("f6")), Piece::new(Color::White, Type::Pawn));
    assert!(pos.piece_on(sq("f5")).is_none());
    assert!(pos.piece_on(sq("e5")).is_none());
    assert_eq!(pos.fifty_move(), 0);
    assert_eq!(pos.en_passant(), None);

    pos.unmake_move(mv);
    assert_eq!(pos.piece_on(sq("f5")), Piece::new(Color::Black, Type::Pawn));
    assert_eq!(pos.piece_on(sq("e5")), Piece::new(Color::White, Type::Pawn));
    assert!(pos.piece_on(sq("f6")).is_none());
    assert_eq!(pos.en_passant(), Some(sq("f6")));
}

#[test]
fn test_black_captures_en_passant() {
    let mut pos = position("rnbqkbnr/pppp1ppp/8/8/3Pp3/8/PPP1PPPP/RNBQKBNR b KQkq d3 0 2");
    make(&mut pos, "e4d3");
    assert_eq!(pos.piece_on(sq("d3")), Piece::new(Color::Black, Type::Pawn));
    assert!(pos.piece_on(sq("d4")).is_none());
    assert_eq!(pos.pieces(Piece::new(Color::White, Type::Pawn)).count_ones(), 7);
}

#[test]
fn test_en_passant_round_trips() {
    let mut pos = position("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    assert_round_trip(&mut pos, "e5f6");
    assert_round_trip(&mut pos, "e5e6");

    let mut pos = position("rnbqkbnr/pppp1ppp/8/8/3Pp3/8/PPP1PPPP/RNBQKBNR b KQkq d3 0 2");
    assert_round_trip(&mut pos, "e4d3");
}

#[test]
fn test_en_passant_can_give_check() {
    // Removing the c5 pawn opens the a3-d6 diagonal
    let mut pos = position("8/8/3k4/2pP4/8/B7/8/4K3 w - c6 0 1");
    make(&mut pos, "d5c6");
    assert_eq!(pos.checkers(), bit("a3"));
}
