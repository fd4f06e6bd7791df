use std::fmt;

use super::bitboards::{bitscan_forward, pop_lsb, Bitboards, BOTH, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};
use super::castling::*;
use super::errors::{ConsistencyError, FenError};
use super::history::History;
use super::moves::{parse_square, square_name};
use super::*;
use crate::config::CoreConfig;
use crate::eval::{Accumulator, PsqtAccumulator};

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD STATE AND ITS DERIVED DATA
 */

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Largest half-move clock accepted from a FEN
pub const MAX_FIFTY_MOVE: u16 = 150;

/// Mutable board state plus everything search needs to move forward and back.
///
/// `A` is the evaluation-feature state carried along with the pieces; the
/// board never looks inside it.
#[derive(Clone)]
pub struct Position<A: Accumulator = PsqtAccumulator> {
    /// Bitboard representation with derived occupancy planes
    pub(crate) bitboards: Bitboards,
    /// Mailbox representation for fast piece lookup (kept in sync with bitboards)
    pub(crate) mailbox: [Piece; 64],
    pub(crate) side: Color,
    /// Castling rights bitmask, see [`castling`](super::castling)
    pub(crate) castle_perm: u8,
    pub(crate) en_passant: Option<usize>,
    /// Half-moves since the last pawn move or capture
    pub(crate) fifty_move: u16,
    /// Game ply of the root position, for the FEN move number
    pub(crate) start_ply: usize,
    pub(crate) key: u64,
    /// Pieces giving check to the side to move
    pub(crate) checkers: u64,
    pub(crate) history: History,
    /// Key of every position before each applied move, oldest first
    pub(crate) played_positions: Vec<u64>,
    pub(crate) accumulator: A,
    pub(crate) accumulator_stack: Vec<A>,
    pub(crate) tables: &'static EngineTables,
}

/// Every observable field, for equality checks across make/unmake
#[derive(Clone, Debug, PartialEq)]
pub struct PositionSnapshot<A> {
    pub bitboards: Bitboards,
    pub mailbox: [Piece; 64],
    pub side: Color,
    pub castle_perm: u8,
    pub en_passant: Option<usize>,
    pub fifty_move: u16,
    pub key: u64,
    pub checkers: u64,
    pub his_ply: usize,
    pub played_positions: Vec<u64>,
    pub accumulator: A,
}

impl Default for Position {
    fn default() -> Self {
        match Self::from_fen(START_FEN) {
            Ok(pos) => pos,
            Err(err) => unreachable!("start position FEN rejected: {}", err),
        }
    }
}

impl Position {
    /// Parse a FEN string using the global tables and default configuration
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        Self::with_tables(fen, EngineTables::global(), &CoreConfig::default())
    }
}

impl<A: Accumulator + Default> Position<A> {
    /// Parse a FEN string with explicit tables and configuration.
    /// Only the piece placement is required; missing fields default to
    /// "w - - 0 1".
    pub fn with_tables(
        fen: &str,
        tables: &'static EngineTables,
        config: &CoreConfig,
    ) -> Result<Self, FenError> {
        log::trace!("parsing FEN '{}'", fen);
        let mut fields = fen.split_whitespace();

        let placement = fields.next().ok_or(FenError::MissingField("piece placement"))?;
        let mailbox = parse_placement(placement)?;

        let side = match fields.next().unwrap_or("w") {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSide(other.to_string())),
        };

        let castle_perm = parse_castling(fields.next().unwrap_or("-"))?;

        let en_passant = match fields.next().unwrap_or("-") {
            "-" => None,
            field => match parse_square(field) {
                Some(sq) if sq / 8 == 2 || sq / 8 == 5 => Some(sq),
                _ => return Err(FenError::InvalidEnPassant(field.to_string())),
            },
        };

        let fifty_move = match fields.next() {
            Some(field) => field
                .parse::<u16>()
                .ok()
                .filter(|&n| n <= MAX_FIFTY_MOVE)
                .ok_or_else(|| FenError::InvalidCounter(field.to_string()))?,
            None => 0,
        };
        let start_ply = match fields.next() {
            Some(field) => field
                .parse::<u32>()
                .ok()
                .and_then(|n| (n.saturating_sub(1) as usize).checked_mul(2))
                .and_then(|ply| ply.checked_add(side.index()))
                .ok_or_else(|| FenError::InvalidCounter(field.to_string()))?,
            None => side.index(),
        };

        let bitboards = Bitboards::from_array(&mailbox);
        for color in [Color::White, Color::Black] {
            let kings = bitboards.pieces(Piece::new(color, Type::King)).count_ones();
            if kings != 1 {
                return Err(FenError::KingCount(color, kings));
            }
        }

        let mut accumulator = A::default();
        accumulator.refresh(&mailbox);

        let mut pos = Self {
            bitboards,
            mailbox,
            side,
            castle_perm,
            en_passant,
            fifty_move,
            start_ply,
            key: 0,
            checkers: 0,
            history: History::with_capacity(config.history_capacity()),
            played_positions: Vec::with_capacity(config.history_capacity()),
            accumulator,
            accumulator_stack: Vec::with_capacity(config.max_search_depth),
            tables,
        };
        pos.key = pos.compute_hash();
        pos.checkers = pos.compute_checkers();
        Ok(pos)
    }
}

fn parse_placement(placement: &str) -> Result<[Piece; 64], FenError> {
    let mut mailbox = [Piece::default(); 64];
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::BadRankCount(ranks.len()));
    }

    // FEN lists rank 8 first
    for (i, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - i;
        let mut file = 0usize;
        for c in rank_str.chars() {
            match c {
                '1'..='8' => file += c as usize - '0' as usize,
                _ => {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece(c))?;
                    if file < 8 {
                        mailbox[rank * 8 + file] = piece;
                    }
                    file += 1;
                }
            }
        }
        if file != 8 {
            return Err(FenError::BadRankLength {
                rank: rank + 1,
                squares: file,
            });
        }
    }

    Ok(mailbox)
}

fn parse_castling(field: &str) -> Result<u8, FenError> {
    if field == "-" {
        return Ok(0);
    }
    let mut perm = 0u8;
    for c in field.chars() {
        perm |= match c {
            'K' => WHITE_KING_SIDE,
            'Q' => WHITE_QUEEN_SIDE,
            'k' => BLACK_KING_SIDE,
            'q' => BLACK_QUEEN_SIDE,
            _ => return Err(FenError::InvalidCastling(field.to_string())),
        };
    }
    Ok(perm)
}

impl<A: Accumulator> Position<A> {
    /// Converts the current position to FEN notation
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);

        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                let piece = self.mailbox[rank * 8 + file];
                if piece.is_none() {
                    empty += 1;
                    continue;
                }
                if empty > 0 {
                    fen.push_str(&empty.to_string());
                    empty = 0;
                }
                fen.push(piece.to_char());
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side {
            Color::White => 'w',
            Color::Black => 'b',
        });
        fen.push(' ');
        fen.push_str(&castling_to_string(self.castle_perm));
        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&square_name(sq)),
            None => fen.push('-'),
        }

        let ply = self.start_ply + self.history.len();
        fen.push_str(&format!(" {} {}", self.fifty_move, ply / 2 + 1));
        fen
    }

    #[inline(always)]
    pub fn side(&self) -> Color {
        self.side
    }

    #[inline(always)]
    pub fn castle_perm(&self) -> u8 {
        self.castle_perm
    }

    #[inline(always)]
    pub fn en_passant(&self) -> Option<usize> {
        self.en_passant
    }

    #[inline(always)]
    pub fn fifty_move(&self) -> u16 {
        self.fifty_move
    }

    /// Zobrist key of the current position
    #[inline(always)]
    pub fn key(&self) -> u64 {
        self.key
    }

    #[inline(always)]
    pub fn checkers(&self) -> u64 {
        self.checkers
    }

    #[inline(always)]
    pub fn in_check(&self) -> bool {
        self.checkers != 0
    }

    /// Current ply depth, the number of live history entries
    #[inline(always)]
    pub fn his_ply(&self) -> usize {
        self.history.len()
    }

    #[inline(always)]
    pub fn piece_on(&self, square: usize) -> Piece {
        self.mailbox[square]
    }

    pub fn mailbox(&self) -> &[Piece; 64] {
        &self.mailbox
    }

    #[inline(always)]
    pub fn pieces(&self, piece: Piece) -> u64 {
        self.bitboards.pieces(piece)
    }

    #[inline(always)]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.bitboards.occupied_by_color(color)
    }

    #[inline(always)]
    pub fn occupancy_all(&self) -> u64 {
        self.bitboards.all_occupied()
    }

    pub fn accumulator(&self) -> &A {
        &self.accumulator
    }

    /// Keys of the positions before each applied move, oldest first
    pub fn played_positions(&self) -> &[u64] {
        &self.played_positions
    }

    pub fn tables(&self) -> &'static EngineTables {
        self.tables
    }

    #[inline(always)]
    pub fn king_square(&self, color: Color) -> usize {
        bitscan_forward(self.bitboards.pieces(Piece::new(color, Type::King)))
    }

    /// Every piece of either color attacking `square` given `occupancy`
    pub fn attackers_to(&self, square: usize, occupancy: u64) -> u64 {
        let bb = &self.bitboards;
        let attacks = &self.tables.attacks;
        let of_both = |t: Type| {
            bb.pieces(Piece::new(Color::White, t)) | bb.pieces(Piece::new(Color::Black, t))
        };

        // A white pawn attacks `square` from where a black pawn on `square` would attack
        let pawns = (PAWN_ATTACKS[Color::Black.index()][square] & bb.pieces(Piece::new(Color::White, Type::Pawn)))
            | (PAWN_ATTACKS[Color::White.index()][square] & bb.pieces(Piece::new(Color::Black, Type::Pawn)));
        let queens = of_both(Type::Queen);

        pawns
            | (KNIGHT_ATTACKS[square] & of_both(Type::Knight))
            | (KING_ATTACKS[square] & of_both(Type::King))
            | (attacks.bishop_attacks(square, occupancy) & (of_both(Type::Bishop) | queens))
            | (attacks.rook_attacks(square, occupancy) & (of_both(Type::Rook) | queens))
    }

    /// Checks if a square is under attack by any piece of the given color
    pub fn is_square_attacked(&self, square: usize, by_color: Color) -> bool {
        let bb = &self.bitboards;
        let attacks = &self.tables.attacks;
        let occupied = bb.all_occupied();
        let theirs = |t: Type| bb.pieces(Piece::new(by_color, t));

        if PAWN_ATTACKS[by_color.opposite().index()][square] & theirs(Type::Pawn) != 0 {
            return true;
        }
        if KNIGHT_ATTACKS[square] & theirs(Type::Knight) != 0 {
            return true;
        }
        if KING_ATTACKS[square] & theirs(Type::King) != 0 {
            return true;
        }

        let queens = theirs(Type::Queen);
        attacks.bishop_attacks(square, occupied) & (theirs(Type::Bishop) | queens) != 0
            || attacks.rook_attacks(square, occupied) & (theirs(Type::Rook) | queens) != 0
    }

    /// Checks if the king of the given color is currently attacked
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opposite())
    }

    /// Opposing pieces attacking the king of the side to move
    pub(crate) fn compute_checkers(&self) -> u64 {
        let king = self.king_square(self.side);
        self.attackers_to(king, self.bitboards.all_occupied()) & self.bitboards.occupied_by_color(self.side.opposite())
    }

    /// Zobrist key recomputed from scratch
    pub fn compute_hash(&self) -> u64 {
        let keys = &self.tables.zobrist;
        let mut hash = 0u64;

        for idx in 0..12 {
            let mut bb = self.bitboards.by_index(idx);
            while bb != 0 {
                let sq = pop_lsb(&mut bb);
                hash ^= keys.pieces[idx][sq];
            }
        }

        hash ^= keys.castling[self.castle_perm as usize];
        if let Some(sq) = self.en_passant {
            hash ^= keys.en_passant[sq];
        }
        if self.side == Color::Black {
            hash ^= keys.side_to_move;
        }

        hash
    }

    /// Check every derived-state invariant against a from-scratch computation.
    /// A diagnostic; search never calls it.
    pub fn verify(&self) -> Result<(), ConsistencyError> {
        let result = self.check_invariants();
        if let Err(err) = &result {
            log::warn!("inconsistent position {}: {}", self.to_fen(), err);
        }
        result
    }

    fn check_invariants(&self) -> Result<(), ConsistencyError> {
        let bb = &self.bitboards;

        for square in 0..64 {
            let count = (0..12)
                .filter(|&idx| bb.by_index(idx) & (1u64 << square) != 0)
                .count() as u32;
            if count > 1 {
                return Err(ConsistencyError::OverlappingPieces { square, count });
            }
        }

        let white = bb.union_of_color(Color::White);
        let black = bb.union_of_color(Color::Black);
        let planes = [
            (Color::White.index(), white, bb.occupied_by_color(Color::White)),
            (Color::Black.index(), black, bb.occupied_by_color(Color::Black)),
            (BOTH, white | black, bb.all_occupied()),
        ];
        for (plane, expected, actual) in planes {
            if expected != actual {
                return Err(ConsistencyError::OccupancyMismatch { plane, expected, actual });
            }
        }

        for (square, piece) in self.mailbox.iter().enumerate() {
            let consistent = if piece.is_none() {
                bb.all_occupied() & (1u64 << square) == 0
            } else {
                bb.test_bit(*piece, square)
            };
            if !consistent {
                return Err(ConsistencyError::MailboxMismatch { square });
            }
        }

        let expected = self.compute_hash();
        if expected != self.key {
            return Err(ConsistencyError::KeyMismatch {
                expected,
                actual: self.key,
            });
        }

        let expected = self.compute_checkers();
        if expected != self.checkers {
            return Err(ConsistencyError::CheckersMismatch {
                expected,
                actual: self.checkers,
            });
        }

        if self.history.len() != self.played_positions.len() {
            return Err(ConsistencyError::HistoryMismatch {
                his_ply: self.history.len(),
                played: self.played_positions.len(),
            });
        }

        Ok(())
    }

    pub fn snapshot(&self) -> PositionSnapshot<A> {
        PositionSnapshot {
            bitboards: self.bitboards,
            mailbox: self.mailbox,
            side: self.side,
            castle_perm: self.castle_perm,
            en_passant: self.en_passant,
            fifty_move: self.fifty_move,
            key: self.key,
            checkers: self.checkers,
            his_ply: self.history.len(),
            played_positions: self.played_positions.clone(),
            accumulator: self.accumulator.clone(),
        }
    }

    /// The current position occurred before with the same side to move,
    /// within the reach of the fifty-move counter
    pub fn is_repetition(&self) -> bool {
        let reach = (self.fifty_move as usize).min(self.played_positions.len());
        self.played_positions
            .iter()
            .rev()
            .take(reach)
            .skip(1)
            .step_by(2)
            .any(|&key| key == self.key)
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.fifty_move >= 100
    }
}

impl<A: Accumulator> fmt::Display for Position<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                write!(f, " {}", self.mailbox[rank * 8 + file].to_char())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        writeln!(f, "FEN: {}", self.to_fen())?;
        write!(f, "Key: {:016x}", self.key)
    }
}

impl<A: Accumulator> fmt::Debug for Position<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_fen())
    }
}
