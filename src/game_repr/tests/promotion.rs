use super::*;
use crate::eval::{Accumulator, PsqtAccumulator};

// ==================== PROMOTION TESTS ====================

#[test]
fn test_queen_promotion() {
    let mut pos = position("4k3/P7/8/8/8/8/8/4K3 w - - 5 40");
    make(&mut pos, "a7a8q");

    assert_eq!(pos.piece_on(sq("a8")), Piece::new(Color::White, Type::Queen));
    assert!(pos.piece_on(sq("a7")).is_none());
    assert_eq!(pos.pieces(Piece::new(Color::White, Type::Pawn)), 0);
    assert_eq!(pos.fifty_move(), 0);
    assert_eq!(pos.checkers(), bit("a8"));
}

#[test]
fn test_underpromotion_with_capture() {
    let mut pos = position("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let mv = make(&mut pos, "a7b8n");

    assert_eq!(pos.piece_on(sq("b8")), Piece::new(Color::White, Type::Knight));
    assert_eq!(pos.pieces(Piece::new(Color::Black, Type::Rook)), 0);

    pos.unmake_move(mv);
    assert_eq!(pos.piece_on(sq("b8")), Piece::new(Color::Black, Type::Rook));
    assert_eq!(pos.piece_on(sq("a7")), Piece::new(Color::White, Type::Pawn));
    assert_eq!(pos.pieces(Piece::new(Color::White, Type::Knight)), 0);
}

#[test]
fn test_black_promotion_gives_check() {
    let mut pos = position("4k3/8/8/8/8/8/p7/4K3 b - - 0 1");
    make(&mut pos, "a2a1r");
    assert_eq!(pos.piece_on(sq("a1")), Piece::new(Color::Black, Type::Rook));
    assert!(pos.in_check());
}

#[test]
fn test_promotion_round_trips() {
    let mut pos = position("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    for uci in ["a7a8q", "a7a8r", "a7a8b", "a7a8n", "a7b8q", "a7b8n"] {
        assert_round_trip(&mut pos, uci);
    }
}

#[test]
fn test_promotion_updates_accumulator() {
    let mut pos = position("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let before = *pos.accumulator();
    make(&mut pos, "a7b8q");

    let mut fresh = PsqtAccumulator::default();
    fresh.refresh(pos.mailbox());
    assert_eq!(*pos.accumulator(), fresh);
    assert!(pos.accumulator().evaluate(Color::White) > before.evaluate(Color::White));
}
