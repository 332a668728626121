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

use std::{error::Error, fmt, ops, str::FromStr};

use crate::{
    role::Role,
    square::BOARD_SIZE,
    types::Piece,
};

/// `White` or `Black`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn fold<T>(self, white: T, black: T) -> T {
        match self {
            Color::White => white,
            Color::Black => black,
        }
    }

    /// Row delta of a single pawn advance: `+1` for White, `-1` for Black.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row the pieces of this color start on. Castling happens here, and
    /// it is the promotion row of the opponent's pawns.
    #[inline]
    pub const fn backrank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }

    /// Row the pawns of this color start on. Only from here may a pawn
    /// advance two squares.
    #[inline]
    pub const fn pawn_row(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => BOARD_SIZE - 2,
        }
    }

    /// Row on which pawns of this color promote.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => BOARD_SIZE - 1,
            Color::Black => 0,
        }
    }

    #[inline]
    pub fn pawn(self) -> Piece {
        Role::Pawn.of(self)
    }
    #[inline]
    pub fn knight(self) -> Piece {
        Role::Knight.of(self)
    }
    #[inline]
    pub fn bishop(self) -> Piece {
        Role::Bishop.of(self)
    }
    #[inline]
    pub fn rook(self) -> Piece {
        Role::Rook.of(self)
    }
    #[inline]
    pub fn queen(self) -> Piece {
        Role::Queen.of(self)
    }
    #[inline]
    pub fn king(self) -> Piece {
        Role::King.of(self)
    }

    /// `White` and `Black`, in this order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];
}

impl ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.fold(Color::Black, Color::White)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fold("white", "black"))
    }
}

/// Error when parsing an invalid color name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid color")
    }
}

impl Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Color, ParseColorError> {
        Ok(match s {
            "white" => Color::White,
            "black" => Color::Black,
            _ => return Err(ParseColorError),
        })
    }
}

/// One value per [`Color`], such as a piece count.
#[derive(Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct ByColor<T> {
    pub white: T,
    pub black: T,
}

impl<T> ByColor<T> {
    #[inline]
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        color.fold(&mut self.white, &mut self.black)
    }

    /// Finds the first color, White before Black, whose value satisfies
    /// the predicate.
    pub fn find<F>(&self, mut predicate: F) -> Option<Color>
    where
        F: FnMut(&T) -> bool,
    {
        Color::ALL
            .into_iter()
            .find(|&color| predicate(color.fold(&self.white, &self.black)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_mirrored() {
        for color in Color::ALL {
            assert_eq!(color.backrank(), (!color).promotion_row());
            assert_eq!(
                color.pawn_row(),
                color.backrank() + color.pawn_direction()
            );
        }
    }

    #[test]
    fn test_parse_color() {
        assert_eq!("white".parse::<Color>(), Ok(Color::White));
        assert_eq!("black".parse::<Color>(), Ok(Color::Black));
        assert_eq!("red".parse::<Color>(), Err(ParseColorError));
        assert_eq!(Color::Black.to_string(), "black");
    }

    #[test]
    fn test_by_color() {
        let mut kings = ByColor::<u8>::default();
        *kings.get_mut(Color::White) += 1;
        *kings.get_mut(Color::Black) += 2;
        assert_eq!(kings, ByColor { white: 1, black: 2 });
        assert_eq!(kings.find(|&n| n > 0), Some(Color::White));
        assert_eq!(kings.find(|&n| n > 1), Some(Color::Black));
        assert_eq!(kings.find(|&n| n > 2), None);
    }
}
