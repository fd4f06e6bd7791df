use super::{Piece, Type};
use std::fmt;

/*-------ARCHITECTURE--------*/

// | 6 bits | 6 bits | 4 bits | 3 bits   | 1 bit   | 1 bit  | 1 bit | 1 bit  |
// |  From  |   To   | Piece  | Promoted | Capture | Double | EnPas | Castle |
// |                            23 bits                                      |

const FROM_SHIFT: u32 = 0;
const TO_SHIFT: u32 = 6;
const PIECE_SHIFT: u32 = 12;
const PROMO_SHIFT: u32 = 16;

const SQUARE_MASK: u32 = 0x3F;
const PIECE_MASK: u32 = 0xF;
const PROMO_MASK: u32 = 0x7;

pub const FLAG_CAPTURE: u32 = 1 << 19;
pub const FLAG_DOUBLE_PUSH: u32 = 1 << 20;
pub const FLAG_EN_PASSANT: u32 = 1 << 21;
pub const FLAG_CASTLE: u32 = 1 << 22;

/// Encoded move. Decoding is pure and total for values built by [`Move::new`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    buf: u32,
}

impl Move {
    /// `promoted` is `Type::None` for non-promotions. `flags` is any union of
    /// the `FLAG_*` constants. En-passant moves should carry `FLAG_CAPTURE` too.
    pub fn new(from: usize, to: usize, piece: Piece, promoted: Type, flags: u32) -> Move {
        debug_assert!(from < 64 && to < 64);
        debug_assert!(!piece.is_none());

        let promo = match promoted {
            Type::None => 0,
            t => t.index() as u32,
        };

        let mut buf = 0u32;
        buf |= (from as u32) << FROM_SHIFT;
        buf |= (to as u32) << TO_SHIFT;
        buf |= (piece.index() as u32) << PIECE_SHIFT;
        buf |= promo << PROMO_SHIFT;
        buf |= flags & (FLAG_CAPTURE | FLAG_DOUBLE_PUSH | FLAG_EN_PASSANT | FLAG_CASTLE);

        Self { buf }
    }

    #[inline(always)]
    pub fn from(&self) -> usize {
        ((self.buf >> FROM_SHIFT) & SQUARE_MASK) as usize
    }

    #[inline(always)]
    pub fn to(&self) -> usize {
        ((self.buf >> TO_SHIFT) & SQUARE_MASK) as usize
    }

    #[inline(always)]
    pub fn piece(&self) -> Piece {
        Piece::from_index(((self.buf >> PIECE_SHIFT) & PIECE_MASK) as usize)
    }

    /// Promoted piece type, `Type::None` if this is not a promotion.
    /// Pawn (index 0) can never be a promotion target, so 0 doubles as "none".
    #[inline(always)]
    pub fn promoted_type(&self) -> Type {
        match (self.buf >> PROMO_SHIFT) & PROMO_MASK {
            0 => Type::None,
            idx => Type::from_index(idx as usize),
        }
    }

    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.buf & FLAG_CAPTURE != 0
    }

    #[inline(always)]
    pub fn is_double_push(&self) -> bool {
        self.buf & FLAG_DOUBLE_PUSH != 0
    }

    #[inline(always)]
    pub fn is_en_passant(&self) -> bool {
        self.buf & FLAG_EN_PASSANT != 0
    }

    #[inline(always)]
    pub fn is_castle(&self) -> bool {
        self.buf & FLAG_CASTLE != 0
    }

    #[inline(always)]
    pub fn is_promotion(&self) -> bool {
        (self.buf >> PROMO_SHIFT) & PROMO_MASK != 0
    }

    /// Long algebraic form, e.g. "e2e4" or "e7e8q"
    pub fn to_uci(&self) -> String {
        let mut s = String::with_capacity(5);
        s.push_str(&square_name(self.from()));
        s.push_str(&square_name(self.to()));
        if self.is_promotion() {
            let letter = Piece::new(super::Color::Black, self.promoted_type()).to_char();
            s.push(letter);
        }
        s
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {:?}", self.to_uci(), self.piece())?;
        if self.is_capture() {
            write!(f, " capture")?;
        }
        if self.is_double_push() {
            write!(f, " double")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        if self.is_castle() {
            write!(f, " castle")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uci())
    }
}

/// "e4" style name of a 0..64 square index (a1 = 0, h8 = 63)
pub fn square_name(sq: usize) -> String {
    let file = (b'a' + (sq % 8) as u8) as char;
    let rank = (b'1' + (sq / 8) as u8) as char;
    format!("{}{}", file, rank)
}

/// Inverse of [`square_name`]
pub fn parse_square(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].wrapping_sub(b'a');
    let rank = bytes[1].wrapping_sub(b'1');
    if file < 8 && rank < 8 {
        Some(rank as usize * 8 + file as usize)
    } else {
        None
    }
}
