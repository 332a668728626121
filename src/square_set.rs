// This file is part of the chessrules library.
// Copyright (C) 2026 The chessrules developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Unordered sets of squares.

use std::{
    fmt::{self, Write as _},
    iter::FusedIterator,
    ops,
};

use crate::square::{Square, BOARD_SIZE};

const _: () = assert!(
    (BOARD_SIZE as usize) * (BOARD_SIZE as usize) <= 64,
    "square sets are backed by a u64"
);

/// A set of on-board squares, one bit per square.
///
/// Iteration is row-major, starting at row 0.
///
/// # Examples
///
/// ```
/// use chessrules::{Square, SquareSet};
///
/// let set: SquareSet = [Square::new(2, 0), Square::new(3, 0)].into_iter().collect();
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Square::new(3, 0)));
/// assert!(!set.contains(Square::new(9, 0)));
/// ```
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct SquareSet(u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub const fn from_square(sq: Square) -> SquareSet {
        match sq.index() {
            Some(index) => SquareSet(1 << index),
            None => SquareSet::EMPTY,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Tests if the square is in the set. Always `false` for squares off
    /// the board.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & SquareSet::from_square(sq).0 != 0
    }

    /// Adds a square. Squares off the board are ignored.
    #[inline]
    pub fn add(&mut self, sq: Square) {
        self.0 |= SquareSet::from_square(sq).0;
    }

    #[inline]
    pub fn remove(&mut self, sq: Square) {
        self.0 &= !SquareSet::from_square(sq).0;
    }

    #[must_use]
    #[inline]
    pub const fn with(self, sq: Square) -> SquareSet {
        SquareSet(self.0 | SquareSet::from_square(sq).0)
    }

    #[inline]
    pub const fn first(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Some(Square::from_index(self.0.trailing_zeros() as usize))
        }
    }

    #[inline]
    pub const fn iter(self) -> IntoIter {
        IntoIter(self.0)
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            for col in 0..BOARD_SIZE {
                f.write_char(if self.contains(Square::new(row, col)) {
                    '1'
                } else {
                    '.'
                })?;
                f.write_char(if col + 1 < BOARD_SIZE { ' ' } else { '\n' })?;
            }
        }

        Ok(())
    }
}

impl ops::BitOr for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl ops::BitAnd for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn bitand(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 & rhs.0)
    }
}

impl From<Square> for SquareSet {
    #[inline]
    fn from(sq: Square) -> SquareSet {
        SquareSet::from_square(sq)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<T>(iter: T) -> SquareSet
    where
        T: IntoIterator<Item = Square>,
    {
        let mut result = SquareSet::EMPTY;
        result.extend(iter);
        result
    }
}

impl Extend<Square> for SquareSet {
    fn extend<T: IntoIterator<Item = Square>>(&mut self, iter: T) {
        for sq in iter {
            self.add(sq);
        }
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> IntoIter {
        self.iter()
    }
}

/// Iterator over the squares of a [`SquareSet`].
#[derive(Debug, Clone)]
pub struct IntoIter(u64);

impl Iterator for IntoIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let square = SquareSet(self.0).first();
        self.0 &= self.0.wrapping_sub(1);
        square
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for IntoIter {
    #[inline]
    fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl FusedIterator for IntoIter {}
