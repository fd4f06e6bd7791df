use super::castling::{castle_rook_move, CastleSide, CASTLING_RIGHTS};
use super::history::Undo;
use super::*;
use crate::eval::Accumulator;
use crate::tt::{NoPrefetch, TtPrefetch};

/// Square one rank behind `to` from the point of view of `side`.
/// The en passant target after a double push, and the captured pawn of an
/// en passant capture.
#[inline(always)]
fn behind(to: usize, side: Color) -> usize {
    match side {
        Color::White => to - 8,
        Color::Black => to + 8,
    }
}

impl<A: Accumulator> Position<A> {
    // Placement primitives used by apply: board, mailbox and key together,
    // plus the accumulator when FEATURES is set

    #[inline(always)]
    fn remove_piece<const FEATURES: bool>(&mut self, piece: Piece, square: usize) {
        self.bitboards.remove_piece(piece, square);
        self.mailbox[square] = Piece::none();
        self.key ^= self.tables.zobrist.piece(piece, square);
        if FEATURES {
            self.accumulator.clear(piece, square);
        }
    }

    #[inline(always)]
    fn put_piece<const FEATURES: bool>(&mut self, piece: Piece, square: usize) {
        self.bitboards.add_piece(piece, square);
        self.mailbox[square] = piece;
        self.key ^= self.tables.zobrist.piece(piece, square);
        if FEATURES {
            self.accumulator.add(piece, square);
        }
    }

    #[inline(always)]
    fn shift_piece<const FEATURES: bool>(&mut self, piece: Piece, from: usize, to: usize) {
        let keys = &self.tables.zobrist;
        self.key ^= keys.piece(piece, from) ^ keys.piece(piece, to);
        self.bitboards.remove_piece(piece, from);
        self.bitboards.add_piece(piece, to);
        self.mailbox[from] = Piece::none();
        self.mailbox[to] = piece;
        if FEATURES {
            self.accumulator.move_piece(piece, from, to);
        }
    }

    // Unmake restores the key and accumulator wholesale, so its primitives
    // only touch the board

    #[inline(always)]
    fn lift(&mut self, piece: Piece, square: usize) {
        self.bitboards.remove_piece(piece, square);
        self.mailbox[square] = Piece::none();
    }

    #[inline(always)]
    fn place(&mut self, piece: Piece, square: usize) {
        self.bitboards.add_piece(piece, square);
        self.mailbox[square] = piece;
    }

    #[inline(always)]
    fn slide(&mut self, piece: Piece, from: usize, to: usize) {
        self.lift(piece, from);
        self.place(piece, to);
    }

    /// Apply a legal move, keeping everything needed to take it back
    #[inline]
    pub fn make_move(&mut self, mv: Move) {
        self.apply::<true, _>(mv, &NoPrefetch);
    }

    /// [`Position::make_move`] that also hints the transposition table slot of
    /// the resulting position into cache
    #[inline]
    pub fn make_move_with<P: TtPrefetch>(&mut self, mv: Move, prefetch: &P) {
        self.apply::<true, P>(mv, prefetch);
    }

    /// Apply a move that will never be unmade.
    ///
    /// Board, key and history stay exact, but the evaluation accumulator is
    /// left untouched and no snapshot of it is pushed. Calling
    /// [`Position::unmake_move`] on such a move panics.
    #[inline]
    pub fn make_move_light(&mut self, mv: Move) {
        self.apply::<false, _>(mv, &NoPrefetch);
    }

    fn apply<const FEATURES: bool, P: TtPrefetch>(&mut self, mv: Move, prefetch: &P) {
        let tables = self.tables;

        *self.history.next_slot() = Undo {
            fifty_move: self.fifty_move,
            en_passant: self.en_passant,
            castle_perm: self.castle_perm,
            checkers: self.checkers,
            capture: Piece::none(),
            light: !FEATURES,
        };
        self.played_positions.push(self.key);
        if FEATURES {
            self.accumulator_stack.push(self.accumulator.clone());
        }

        let from = mv.from();
        let to = mv.to();
        let piece = mv.piece();
        let side = self.side;
        self.fifty_move += 1;

        if mv.is_en_passant() {
            self.remove_piece::<FEATURES>(Piece::new(side.opposite(), Type::Pawn), behind(to, side));
            self.fifty_move = 0;
        } else if mv.is_capture() {
            let captured = self.mailbox[to];
            debug_assert!(
                captured.is(side.opposite()) && captured.piece_type != Type::King,
                "move {} captures {:?}",
                mv,
                captured
            );
            self.remove_piece::<FEATURES>(captured, to);
            self.history.next_slot().capture = captured;
            self.fifty_move = 0;
        }

        if piece.piece_type == Type::Pawn {
            self.fifty_move = 0;
        }

        self.history.advance();

        if mv.is_promotion() {
            self.remove_piece::<FEATURES>(piece, from);
            self.put_piece::<FEATURES>(Piece::new(side, mv.promoted_type()), to);
        } else {
            self.shift_piece::<FEATURES>(piece, from, to);
        }

        if let Some(ep) = self.en_passant.take() {
            self.key ^= tables.zobrist.en_passant[ep];
        }
        if mv.is_double_push() {
            let ep = behind(to, side);
            self.en_passant = Some(ep);
            self.key ^= tables.zobrist.en_passant[ep];
        }

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_move(side, CastleSide::from_king_destination(to));
            self.shift_piece::<FEATURES>(Piece::new(side, Type::Rook), rook_from, rook_to);
        }

        self.key ^= tables.zobrist.castling[self.castle_perm as usize];
        self.castle_perm &= CASTLING_RIGHTS[from] & CASTLING_RIGHTS[to];
        self.key ^= tables.zobrist.castling[self.castle_perm as usize];

        self.side = side.opposite();
        self.key ^= tables.zobrist.side_to_move;

        prefetch.prefetch(self.key);

        self.checkers = self.compute_checkers();
    }

    /// Take back `mv`, which must be the most recent move applied with
    /// [`Position::make_move`] or [`Position::make_move_with`]
    pub fn unmake_move(&mut self, mv: Move) {
        let undo = self.history.pop();
        assert!(
            !undo.light,
            "unmake_move({}) on a move applied with make_move_light",
            mv
        );

        self.fifty_move = undo.fifty_move;
        self.en_passant = undo.en_passant;
        self.castle_perm = undo.castle_perm;
        self.checkers = undo.checkers;
        debug_assert!(!self.accumulator_stack.is_empty(), "accumulator stack underflow");
        if let Some(accumulator) = self.accumulator_stack.pop() {
            self.accumulator = accumulator;
        }

        let from = mv.from();
        let to = mv.to();
        let piece = mv.piece();
        let side = self.side.opposite();

        if mv.is_promotion() {
            self.lift(Piece::new(side, mv.promoted_type()), to);
            self.place(piece, from);
        } else {
            self.slide(piece, to, from);
        }

        if mv.is_en_passant() {
            self.place(Piece::new(side.opposite(), Type::Pawn), behind(to, side));
        } else if mv.is_capture() {
            debug_assert!(!undo.capture.is_none(), "capture {} recorded no piece", mv);
            self.place(undo.capture, to);
        }

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_move(side, CastleSide::from_king_destination(to));
            self.slide(Piece::new(side, Type::Rook), rook_to, rook_from);
        }

        self.side = side;
        if let Some(key) = self.played_positions.pop() {
            self.key = key;
        }
    }

    /// Pass the turn without moving. The side to move must not be in check.
    pub fn make_null_move(&mut self) {
        debug_assert!(!self.in_check(), "null move while in check");

        *self.history.next_slot() = Undo {
            fifty_move: self.fifty_move,
            en_passant: self.en_passant,
            castle_perm: self.castle_perm,
            checkers: self.checkers,
            capture: Piece::none(),
            light: false,
        };
        self.played_positions.push(self.key);
        self.history.advance();

        if let Some(ep) = self.en_passant.take() {
            self.key ^= self.tables.zobrist.en_passant[ep];
        }

        self.side = self.side.opposite();
        self.key ^= self.tables.zobrist.side_to_move;
    }

    pub fn take_null_move(&mut self) {
        let undo = self.history.pop();
        self.fifty_move = undo.fifty_move;
        self.en_passant = undo.en_passant;
        self.castle_perm = undo.castle_perm;
        self.checkers = undo.checkers;

        self.side = self.side.opposite();
        if let Some(key) = self.played_positions.pop() {
            self.key = key;
        }
    }
}
