use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chess_core::game_repr::{EngineTables, Move, Position};
use chess_core::tt::TranspositionTable;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

/// Moves from kiwipete covering quiet moves, captures, castling and checks
const KIWIPETE_MOVES: [&str; 8] = ["e1g1", "e1c1", "e5f7", "f3f6", "d5e6", "e2a6", "g2h3", "d2g5"];

fn bench_slider_lookups(c: &mut Criterion) {
    let tables = EngineTables::global();
    let mut rng = StdRng::seed_from_u64(1);
    let occupancies: Vec<u64> = (0..1024).map(|_| rng.gen::<u64>() & rng.gen::<u64>()).collect();

    c.bench_function("rook + bishop lookups x64x1024", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for &occ in &occupancies {
                for square in 0..64 {
                    acc ^= tables.attacks.rook_attacks(square, occ);
                    acc ^= tables.attacks.bishop_attacks(square, occ);
                }
            }
            black_box(acc)
        })
    });
}

fn kiwipete_moves(pos: &Position) -> Vec<Move> {
    KIWIPETE_MOVES
        .iter()
        .map(|uci| pos.parse_move(uci).unwrap())
        .collect()
}

fn bench_make_unmake(c: &mut Criterion) {
    let mut pos = Position::from_fen(KIWIPETE).unwrap();
    let moves = kiwipete_moves(&pos);

    c.bench_function("make/unmake kiwipete x8", |b| {
        b.iter(|| {
            for &mv in &moves {
                pos.make_move(black_box(mv));
                pos.unmake_move(mv);
            }
            black_box(pos.key())
        })
    });

    let tt = TranspositionTable::new(16);
    c.bench_function("make/unmake with prefetch kiwipete x8", |b| {
        b.iter(|| {
            for &mv in &moves {
                pos.make_move_with(black_box(mv), &tt);
                pos.unmake_move(mv);
            }
            black_box(pos.key())
        })
    });
}

fn bench_null_move(c: &mut Criterion) {
    let mut pos = Position::from_fen(KIWIPETE).unwrap();
    c.bench_function("null move kiwipete", |b| {
        b.iter(|| {
            pos.make_null_move();
            pos.take_null_move();
            black_box(pos.key())
        })
    });
}

fn bench_light_move(c: &mut Criterion) {
    let start = Position::from_fen(KIWIPETE).unwrap();
    let moves = kiwipete_moves(&start);
    c.bench_function("clone + light make kiwipete x8", |b| {
        b.iter(|| {
            for &mv in &moves {
                let mut pos = start.clone();
                pos.make_move_light(black_box(mv));
                black_box(pos.key());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_slider_lookups,
    bench_make_unmake,
    bench_null_move,
    bench_light_move
);
criterion_main!(benches);
