use super::*;
use crate::config::CoreConfig;
use crate::game_repr::castling::{BLACK_QUEEN_SIDE, WHITE_KING_SIDE};
use crate::eval::PsqtAccumulator;

// ==================== ZOBRIST HASHING TESTS ====================

#[test]
fn test_double_push_key_delta() {
    let mut pos = Position::default();
    let start = pos.snapshot();
    let keys = &pos.tables().zobrist;
    let white_pawn = Piece::new(Color::White, Type::Pawn);

    let mv = make(&mut pos, "e2e4");
    assert_eq!(pos.en_passant(), Some(sq("e3")));
    assert_eq!(pos.fifty_move(), 0);
    assert_eq!(pos.side(), Color::Black);

    let expected = start.key
        ^ keys.piece(white_pawn, sq("e2"))
        ^ keys.piece(white_pawn, sq("e4"))
        ^ keys.en_passant[sq("e3")]
        ^ keys.side_to_move;
    assert_eq!(pos.key(), expected);

    pos.unmake_move(mv);
    assert_eq!(pos.key(), start.key);
    assert_eq!(pos.snapshot(), start);
}

#[test]
fn test_transpositions_share_a_key() {
    let mut a = Position::default();
    let mut b = Position::default();
    a.play_moves("g1f3 g8f6 b1c3").unwrap();
    b.play_moves("b1c3 g8f6 g1f3").unwrap();

    assert_eq!(a.key(), b.key());
    assert_eq!(a.key(), a.compute_hash());
}

#[test]
fn test_state_fields_change_the_key() {
    let keys = &EngineTables::global().zobrist;

    let white = position("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    let black = position("4k3/8/8/8/8/8/8/4K3 b - - 0 1");
    assert_eq!(white.key() ^ black.key(), keys.side_to_move);

    let no_rights = position("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1");
    let rights = position("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");
    assert_eq!(
        no_rights.key() ^ rights.key(),
        keys.castling[0] ^ keys.castling[(WHITE_KING_SIDE | BLACK_QUEEN_SIDE) as usize]
    );

    let no_ep = position("4k3/8/8/8/4P3/8/8/4K3 b - - 0 1");
    let ep = position("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1");
    assert_eq!(no_ep.key() ^ ep.key(), keys.en_passant[sq("e3")]);
}

#[test]
fn test_key_tracks_every_move() {
    let mut pos = position("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let line = "e1c1 h3g2 f3g2 e8g8 d5e6 d7e6 e5g6 f7g6 d2h6 b4c3 h6g7 g8g7";
    for uci in line.split_whitespace() {
        make(&mut pos, uci);
        assert_eq!(pos.key(), pos.compute_hash(), "after {}", uci);
    }
}

#[test]
fn test_seed_changes_keys() {
    let config = CoreConfig::default().with_zobrist_seed(7);
    let tables = EngineTables::leak(&config);
    let mut pos: Position<PsqtAccumulator> = Position::with_tables(START_FEN, tables, &config).unwrap();

    assert_ne!(pos.key(), Position::default().key());
    pos.play_moves("d2d4 d7d5").unwrap();
    assert_eq!(pos.key(), pos.compute_hash());
    pos.verify().unwrap();
}
