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

use std::fmt;

/// Number of rows and columns of the board.
pub const BOARD_SIZE: i8 = 8;

/// A `(row, col)` coordinate.
///
/// Row 0 is White's back rank. Squares off the board can be constructed:
/// move generation steps past the edge and lets the board classify the
/// result as [`SquareState::OutOfBounds`](crate::SquareState::OutOfBounds).
///
/// # Examples
///
/// ```
/// use chessrules::Square;
///
/// let sq = Square::new(3, 4);
/// assert_eq!(sq.offset(1, -1), Square::new(4, 3));
/// assert!(!sq.offset(5, 0).is_on_board());
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Square {
        Square { row, col }
    }

    /// Tests if both coordinates are in `0..BOARD_SIZE`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        0 <= self.row && self.row < BOARD_SIZE && 0 <= self.col && self.col < BOARD_SIZE
    }

    #[must_use]
    #[inline]
    pub const fn offset(self, rows: i8, cols: i8) -> Square {
        Square::new(self.row + rows, self.col + cols)
    }

    /// Row-major index into a `BOARD_SIZE * BOARD_SIZE` array, or `None`
    /// if the square is off the board.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.row as usize * BOARD_SIZE as usize + self.col as usize)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Square {
        Square::new(
            (index / BOARD_SIZE as usize) as i8,
            (index % BOARD_SIZE as usize) as i8,
        )
    }

    /// All squares of the board, row by row starting at row 0.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..BOARD_SIZE as usize * BOARD_SIZE as usize).map(Square::from_index)
    }
}

impl From<(i8, i8)> for Square {
    #[inline]
    fn from((row, col): (i8, i8)) -> Square {
        Square::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
