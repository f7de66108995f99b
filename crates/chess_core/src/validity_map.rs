//! Square sets produced by move generation.
//!
//! A `ValidityMap` marks the squares one piece may move to under a given
//! generation mode. It is stored as a 64-bit set indexed file-major
//! (bit `x * 8 + y`), so iteration walks the board file by file: a1, a2,
//! ..., a8, b1, ... This is the order the search enumerates destinations.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::types::Square;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidityMap(u64);

impl ValidityMap {
    pub const EMPTY: ValidityMap = ValidityMap(0);

    #[inline(always)]
    pub fn from_square(sq: Square) -> Self {
        ValidityMap(1u64 << sq.index())
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    #[inline(always)]
    pub fn set(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    #[inline(always)]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !(1u64 << sq.index());
    }

    /// Number of marked squares.
    #[inline(always)]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Squares in file-major order.
    pub fn squares(self) -> Squares {
        Squares(self.0)
    }
}

impl BitOr for ValidityMap {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        ValidityMap(self.0 | rhs.0)
    }
}

impl BitOrAssign for ValidityMap {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Square> for ValidityMap {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut map = ValidityMap::EMPTY;
        for sq in iter {
            map.set(sq);
        }
        map
    }
}

/// Renders the map like the board grid: rank 8 first, `x` for marked squares.
impl fmt::Display for ValidityMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..8).rev() {
            for x in 0..8 {
                let c = if self.contains(Square::at(x, y)) { 'x' } else { '.' };
                write!(f, "{c}")?;
            }
            if y > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over marked squares, lowest index first.
#[derive(Clone, Debug)]
pub struct Squares(u64);

impl Iterator for Squares {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Square::from_index(idx))
    }
}

#[cfg(test)]
#[path = "validity_map_tests.rs"]
mod validity_map_tests;
