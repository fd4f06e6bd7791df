#![allow(dead_code)]

use std::str::FromStr;

use chess::{Board, ChessMove, MoveGen};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chess_core::game_repr::castling::*;
use chess_core::game_repr::{Color, Piece, Position, Type};

/// Piece on `square` as the reference board sees it
pub fn reference_piece(board: &Board, square: usize) -> Piece {
    let sq = chess::ALL_SQUARES[square];
    let (Some(piece), Some(color)) = (board.piece_on(sq), board.color_on(sq)) else {
        return Piece::none();
    };
    let piece_type = match piece {
        chess::Piece::Pawn => Type::Pawn,
        chess::Piece::Knight => Type::Knight,
        chess::Piece::Bishop => Type::Bishop,
        chess::Piece::Rook => Type::Rook,
        chess::Piece::Queen => Type::Queen,
        chess::Piece::King => Type::King,
    };
    let color = match color {
        chess::Color::White => Color::White,
        chess::Color::Black => Color::Black,
    };
    Piece::new(color, piece_type)
}

pub fn reference_rights(board: &Board) -> u8 {
    let mut perm = 0;
    for (color, king_side, queen_side) in [
        (chess::Color::White, WHITE_KING_SIDE, WHITE_QUEEN_SIDE),
        (chess::Color::Black, BLACK_KING_SIDE, BLACK_QUEEN_SIDE),
    ] {
        let rights = board.castle_rights(color);
        if rights.has_kingside() {
            perm |= king_side;
        }
        if rights.has_queenside() {
            perm |= queen_side;
        }
    }
    perm
}

/// Compare everything the reference board can tell us about `pos`
pub fn assert_matches_reference(pos: &Position, board: &Board, context: &str) {
    for square in 0..64 {
        assert_eq!(
            pos.piece_on(square),
            reference_piece(board, square),
            "square {} {}",
            square,
            context
        );
    }
    let side = match board.side_to_move() {
        chess::Color::White => Color::White,
        chess::Color::Black => Color::Black,
    };
    assert_eq!(pos.side(), side, "{}", context);
    assert_eq!(pos.checkers(), board.checkers().0, "{}", context);
    assert_eq!(pos.castle_perm(), reference_rights(board), "{}", context);
}

/// Play a random legal game from `fen`, checking the position against the
/// reference board after every move and the round trip of every legal move
/// along the way. Returns the number of plies played.
pub fn random_walk(fen: &str, seed: u64, plies: usize) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::from_str(fen).expect("reference board rejects FEN");
    let mut pos = Position::from_fen(fen).expect("position rejects FEN");
    let start = pos.snapshot();
    let mut played = Vec::new();

    for ply in 0..plies {
        let legal: Vec<ChessMove> = MoveGen::new_legal(&board).collect();
        if legal.is_empty() {
            break;
        }

        let before = pos.snapshot();
        for reference in &legal {
            let mv = pos.parse_move(&reference.to_string()).expect("legal move does not parse");
            pos.make_move(mv);
            pos.verify().expect("inconsistent after make");
            pos.unmake_move(mv);
            assert_eq!(pos.snapshot(), before, "round trip of {} at ply {}", mv, ply);
        }

        let reference = legal[rng.gen_range(0..legal.len())];
        let mv = pos.parse_move(&reference.to_string()).expect("legal move does not parse");
        let perm = pos.castle_perm();
        pos.make_move(mv);
        board = board.make_move_new(reference);

        let context = format!("after {} at ply {} (seed {})", mv, ply, seed);
        pos.verify().expect("inconsistent after make");
        assert_matches_reference(&pos, &board, &context);
        assert_eq!(pos.castle_perm() & !perm, 0, "rights grew {}", context);
        played.push(mv);
    }

    for mv in played.iter().rev() {
        pos.unmake_move(*mv);
    }
    assert_eq!(pos.snapshot(), start, "unwinding seed {}", seed);
    played.len()
}
