use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::error::ChessError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Rank step of this color's pawns.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank holding this color's king and rooks at setup.
    pub fn home_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn pawn_rank(self) -> i8 {
        self.home_rank() + self.forward()
    }

    /// Rank on which this color's pawns promote.
    pub fn promotion_rank(self) -> i8 {
        self.other().home_rank()
    }

    /// Whether `score` is strictly better than `best` for this color.
    ///
    /// Scores are black-minus-white, so Black maximises and White minimises.
    pub fn prefers(self, score: i32, best: i32) -> bool {
        match self {
            Color::Black => score > best,
            Color::White => score < best,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Grid letter, uppercase for White and lowercase for Black.
    pub fn letter(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_letter(c: char) -> Option<(PieceKind, Color)> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some((kind, color))
    }
}

/// A board square; `(0, 0)` is a1 and `(7, 7)` is h8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    x: i8,
    y: i8,
}

impl Square {
    pub fn new(x: i8, y: i8) -> Option<Square> {
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Some(Square { x, y })
        } else {
            None
        }
    }

    /// Builds a square from coordinates the caller knows are on the board.
    pub(crate) const fn at(x: i8, y: i8) -> Square {
        assert!(x >= 0 && x < 8 && y >= 0 && y < 8, "square out of range");
        Square { x, y }
    }

    pub fn x(self) -> i8 {
        self.x
    }

    pub fn y(self) -> i8 {
        self.y
    }

    pub fn offset(self, dx: i8, dy: i8) -> Option<Square> {
        Square::new(self.x + dx, self.y + dy)
    }

    /// Index into a 64-entry set, file-major (`x * 8 + y`).
    pub(crate) fn index(self) -> u8 {
        (self.x * 8 + self.y) as u8
    }

    pub(crate) fn from_index(idx: u8) -> Square {
        Square::at((idx / 8) as i8, (idx % 8) as i8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.x as u8) as char;
        let rank = (b'1' + self.y as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        let (f, r) = (b[0].to_ascii_lowercase(), b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        Ok(Square::at((f - b'a') as i8, (r - b'1') as i8))
    }
}

// Fixed slot layout shared by both colors.
pub const PAWN_SLOTS: Range<usize> = 0..8;
pub const KNIGHT_SLOTS: Range<usize> = 8..10;
pub const BISHOP_SLOTS: Range<usize> = 10..12;
pub const ROOK_SLOTS: Range<usize> = 12..14;
pub const QUEEN_SLOT: usize = 14;
pub const KING_SLOT: usize = 15;
pub const SLOTS_PER_COLOR: usize = 16;

/// Stable handle on one of the 32 piece slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceId {
    pub color: Color,
    pub slot: usize,
}

impl PieceId {
    pub fn new(color: Color, slot: usize) -> Self {
        assert!(slot < SLOTS_PER_COLOR, "slot {slot} out of range");
        Self { color, slot }
    }

    pub fn king(color: Color) -> Self {
        Self::new(color, KING_SLOT)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub alive: bool,
    /// Set on the piece's first move; gates castling.
    pub moved: bool,
    /// Set only on the ply a pawn advanced two squares; gates en passant.
    pub double_move: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            alive: true,
            moved: false,
            double_move: false,
        }
    }

    /// An empty slot: a captured piece parked on a1.
    pub(crate) fn captured(kind: PieceKind, color: Color) -> Self {
        Self {
            alive: false,
            moved: true,
            ..Self::new(kind, color, Square::at(0, 0))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub piece: PieceId,
    /// Kind of the mover before the move (a promoting pawn is still a pawn here).
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn is_promotion(&self) -> bool {
        self.kind == PieceKind::Pawn && self.to.y() == self.piece.color.promotion_rank()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
