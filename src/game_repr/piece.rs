#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    None,
}

impl Type {
    /// 0..6 for real pieces, used as the low part of a piece index
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Type::Pawn => 0,
            Type::Knight => 1,
            Type::Bishop => 2,
            Type::Rook => 3,
            Type::Queen => 4,
            Type::King => 5,
            Type::None => panic!("Cannot get index for None piece type"),
        }
    }

    #[inline]
    pub fn from_index(idx: usize) -> Type {
        match idx {
            0 => Type::Pawn,
            1 => Type::Knight,
            2 => Type::Bishop,
            3 => Type::Rook,
            4 => Type::Queen,
            5 => Type::King,
            _ => Type::None,
        }
    }

    /// Promotion letter as used in long algebraic notation
    pub fn from_promotion_char(c: char) -> Option<Type> {
        match c.to_ascii_lowercase() {
            'n' => Some(Type::Knight),
            'b' => Some(Type::Bishop),
            'r' => Some(Type::Rook),
            'q' => Some(Type::Queen),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => 1,
        }
    }
}

/// Piece identity: a type and a color. `Type::None` marks an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Default for Piece {
    fn default() -> Self {
        Self {
            color: Color::White,
            piece_type: Type::None,
        }
    }
}

impl Piece {
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.piece_type == Type::None
    }

    /// Bitboard / key index in `0..12`:
    /// white pawn..king are 0..6, black pawn..king are 6..12
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.color.index() * 6 + self.piece_type.index()
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        let color = if idx < 6 { Color::White } else { Color::Black };
        Self {
            color,
            piece_type: Type::from_index(idx % 6),
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'p' => Type::Pawn,
            'n' => Type::Knight,
            'b' => Type::Bishop,
            'r' => Type::Rook,
            'q' => Type::Queen,
            'k' => Type::King,
            _ => return None,
        };
        Some(Self { color, piece_type })
    }

    pub fn to_char(&self) -> char {
        let c = match self.piece_type {
            Type::Pawn => 'p',
            Type::Knight => 'n',
            Type::Bishop => 'b',
            Type::Rook => 'r',
            Type::Queen => 'q',
            Type::King => 'k',
            Type::None => return '.',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is(&self, color: Color) -> bool {
        !self.is_none() && self.color == color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for idx in 0..12 {
            assert_eq!(Piece::from_index(idx).index(), idx);
        }
        assert_eq!(Piece::new(Color::Black, Type::Pawn).index(), 6);
        assert_eq!(Piece::new(Color::White, Type::King).index(), 5);
    }

    #[test]
    fn test_char_conversion() {
        for c in "PNBRQKpnbrqk".chars() {
            let piece = Piece::from_char(c).unwrap();
            assert_eq!(piece.to_char(), c);
        }
        assert!(Piece::from_char('x').is_none());
        assert_eq!(Piece::none().to_char(), '.');
    }

    #[test]
    fn test_empty_piece_belongs_to_nobody() {
        let empty = Piece::none();
        assert!(!empty.is(Color::White));
        assert!(!empty.is(Color::Black));
    }
}
