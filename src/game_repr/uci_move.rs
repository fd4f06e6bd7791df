use smallvec::SmallVec;

use super::errors::MoveParseError;
use super::moves::*;
use super::*;
use crate::eval::Accumulator;

impl<A: Accumulator> Position<A> {
    /// Encode a long algebraic move ("e2e4", "e7e8q") against the current board.
    ///
    /// Flags are derived from the board: captures from the destination square,
    /// en passant from the current target square, castling from a two-file king
    /// step off the home square. Legality is not checked, but a move capturing
    /// the king is refused.
    pub fn parse_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        let malformed = || MoveParseError::Malformed(uci.to_string());
        if !uci.is_ascii() || !(4..=5).contains(&uci.len()) {
            return Err(malformed());
        }

        let from = parse_square(&uci[0..2]).ok_or_else(malformed)?;
        let to = parse_square(&uci[2..4]).ok_or_else(malformed)?;
        if from == to {
            return Err(malformed());
        }

        let piece = self.mailbox[from];
        if !piece.is(self.side) {
            return Err(MoveParseError::NoPieceOnSource(uci.to_string()));
        }
        let target = self.mailbox[to];
        if target.is(self.side) {
            return Err(MoveParseError::FriendlyCapture(uci.to_string()));
        }
        if target.piece_type == Type::King {
            return Err(MoveParseError::KingCapture(uci.to_string()));
        }

        let (last_rank, king_home) = match self.side {
            Color::White => (7, castling::E1),
            Color::Black => (0, castling::E8),
        };
        let reaches_last_rank = piece.piece_type == Type::Pawn && to / 8 == last_rank;
        let promoted = match uci[4..].chars().next() {
            Some(c) if reaches_last_rank => {
                Type::from_promotion_char(c).ok_or_else(|| MoveParseError::InvalidPromotion(uci.to_string()))?
            }
            None if !reaches_last_rank => Type::None,
            _ => return Err(MoveParseError::InvalidPromotion(uci.to_string())),
        };

        let mut flags = 0;
        if !target.is_none() {
            flags |= FLAG_CAPTURE;
        }
        match piece.piece_type {
            Type::Pawn if from.abs_diff(to) == 16 => flags |= FLAG_DOUBLE_PUSH,
            Type::Pawn if from % 8 != to % 8 && target.is_none() && self.en_passant == Some(to) => {
                flags |= FLAG_EN_PASSANT | FLAG_CAPTURE
            }
            Type::King if from == king_home && from.abs_diff(to) == 2 => flags |= FLAG_CASTLE,
            _ => {}
        }

        Ok(Move::new(from, to, piece, promoted, flags))
    }

    /// Parse and apply a whitespace separated move sequence.
    ///
    /// On a parse error every move already applied is taken back and the
    /// position is left as it was.
    pub fn play_moves(&mut self, moves: &str) -> Result<SmallVec<[Move; 32]>, MoveParseError> {
        let mut played: SmallVec<[Move; 32]> = SmallVec::new();
        for uci in moves.split_whitespace() {
            match self.parse_move(uci) {
                Ok(mv) => {
                    self.make_move(mv);
                    played.push(mv);
                }
                Err(err) => {
                    for mv in played.iter().rev() {
                        self.unmake_move(*mv);
                    }
                    return Err(err);
                }
            }
        }
        Ok(played)
    }
}
