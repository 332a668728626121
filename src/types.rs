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

use crate::{color::Color, role::Role, square::Square};

/// A piece with [`Color`] and [`Role`], plus the bookkeeping the rules
/// need about its past.
///
/// Pieces are created as plain values and handed to
/// [`Board::set_piece`](crate::Board::set_piece), which takes ownership and
/// returns a [`PieceId`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub color: Color,
    pub role: Role,
    /// Set the first time the board relocates the piece, including the
    /// rook of a castling move.
    pub has_moved: bool,
    /// Ply of the most recent two-square advance of a pawn. Informational:
    /// en passant eligibility is decided from the move history.
    pub double_step_ply: Option<u32>,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, role: Role) -> Piece {
        Piece {
            color,
            role,
            has_moved: false,
            double_step_ply: None,
        }
    }

    /// Marks the piece as moved, e.g. to set up a position without
    /// castling rights.
    #[must_use]
    #[inline]
    pub const fn moved(mut self) -> Piece {
        self.has_moved = true;
        self
    }

    /// English letter, uppercase for White.
    pub fn char(self) -> char {
        self.color.fold(self.role.upper_char(), self.role.char())
    }
}

/// Stable handle of a piece placed on a [`Board`](crate::Board).
///
/// Handles are never reused, so comparing them compares piece identity:
/// a promoted queen gets a new handle, distinct from the pawn it replaced.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceId(pub(crate) u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Classification of a square relative to the board.
///
/// Kings are reported as `King` regardless of their owner. Callers that
/// care about the owner look at the piece itself.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SquareState {
    Free,
    White,
    Black,
    King,
    OutOfBounds,
}

impl SquareState {
    /// Square holding a non-king piece of the given color.
    #[inline]
    pub const fn of(color: Color) -> SquareState {
        match color {
            Color::White => SquareState::White,
            Color::Black => SquareState::Black,
        }
    }
}

/// Secondary effect of a move, as applied by the board.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum MoveKind {
    Normal,
    /// A pawn advanced two rows. The next ply may capture it en passant.
    DoubleStep,
    /// The pawn on `captured` was removed.
    EnPassant { captured: Square },
    /// The king moved two columns and the rook was relocated with it.
    Castle {
        rook: PieceId,
        rook_from: Square,
        rook_to: Square,
    },
    /// The pawn was replaced by `queen` on the destination square.
    Promotion { queen: PieceId },
}

/// An entry of the move history.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The piece that left `from`. For a promotion this is the pawn.
    pub piece: PieceId,
    /// The piece captured on `to`, or the pawn taken en passant.
    pub capture: Option<PieceId>,
    pub kind: MoveKind,
}

impl Move {
    /// Checks if the move was a two-row pawn advance.
    #[inline]
    pub const fn is_double_step(&self) -> bool {
        matches!(self.kind, MoveKind::DoubleStep)
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle { .. })
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant { .. })
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::Promotion { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.from,
            if self.capture.is_some() { 'x' } else { '-' },
            self.to
        )?;

        match self.kind {
            MoveKind::EnPassant { .. } => f.write_str(" e.p."),
            MoveKind::Castle { .. } => f.write_str(" castle"),
            MoveKind::Promotion { .. } => f.write_str("=Q"),
            MoveKind::Normal | MoveKind::DoubleStep => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_char() {
        assert_eq!(Color::White.queen().char(), 'Q');
        assert_eq!(Color::Black.knight().char(), 'n');
    }

    #[test]
    fn test_move_display() {
        let m = Move {
            from: Square::new(4, 4),
            to: Square::new(5, 3),
            piece: PieceId(0),
            capture: Some(PieceId(1)),
            kind: MoveKind::EnPassant {
                captured: Square::new(4, 3),
            },
        };
        assert_eq!(m.to_string(), "(4, 4)x(5, 3) e.p.");
        assert!(!m.is_double_step());
    }
}
