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

use arrayvec::ArrayVec;

use crate::{square::Square, square_set::SquareSet};

/// Result of generating the moves of a single piece.
///
/// Most callers only need [`available`](AvailableMoves::available). The
/// other two sets come out of the same pass: `blocking` holds the squares
/// that ended a sliding ray, and `kings` holds the squares of enemy kings
/// the piece attacks, which check detection looks for. A king is never an
/// available target.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct AvailableMoves {
    /// Squares the piece may legally move to.
    pub available: SquareSet,
    /// Occupied squares that stopped a ray of a bishop, rook or queen.
    pub blocking: SquareSet,
    /// Squares of enemy kings the piece attacks.
    pub kings: SquareSet,
}

impl AvailableMoves {
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.available.contains(sq)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.available.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Checks if the piece gives check to a king on `sq`.
    #[inline]
    pub fn attacks_king_on(&self, sq: Square) -> bool {
        self.kings.contains(sq)
    }
}

impl IntoIterator for AvailableMoves {
    type Item = Square;
    type IntoIter = crate::square_set::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.available.into_iter()
    }
}

/// A container for `(from, to)` candidate moves of one side, stored inline
/// on the stack.
///
/// Positions reachable from the standard setup stay far below the
/// capacity. [`Board::legal_moves`](crate::Board::legal_moves) stops
/// collecting when it is exhausted.
///
/// # Example
///
/// ```
/// use chessrules::{Board, Role};
///
/// let board = Board::standard();
/// let mut moves = board.legal_moves();
/// moves.retain(|&mut (from, _)| board.piece_at(from).map(|p| p.role) == Some(Role::Pawn));
/// assert_eq!(moves.len(), 16);
/// ```
pub type MoveList = ArrayVec<(Square, Square), 512>;
