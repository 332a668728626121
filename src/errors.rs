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

//! Error types.

use std::{error::Error, fmt};

use bitflags::bitflags;

use crate::{color::Color, square::Square, types::PieceId};

/// Error when a piece is looked up that is not on the board.
///
/// Every piece asked for its moves must already be placed, so this
/// indicates a bug in the caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PieceNotFound {
    pub id: PieceId,
}

impl fmt::Display for PieceNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece {} is not on the board", self.id)
    }
}

impl Error for PieceNotFound {}

/// Error when a move is rejected. The board is unchanged.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlayError {
    /// There is no piece on the origin square.
    EmptySquare {
        #[allow(missing_docs)]
        square: Square,
    },
    /// The piece on the origin square does not belong to the player to
    /// move.
    WrongTurn {
        #[allow(missing_docs)]
        square: Square,
        #[allow(missing_docs)]
        turn: Color,
    },
    /// The destination is not among the legal targets of the piece.
    IllegalMove {
        #[allow(missing_docs)]
        from: Square,
        #[allow(missing_docs)]
        to: Square,
    },
    /// The piece to move is not on the board.
    PieceNotFound(PieceNotFound),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::EmptySquare { square } => write!(f, "no piece on {square}"),
            PlayError::WrongTurn { square, turn } => {
                write!(f, "piece on {square} does not belong to {turn}, who is to move")
            }
            PlayError::IllegalMove { from, to } => write!(f, "illegal move from {from} to {to}"),
            PlayError::PieceNotFound(_) => f.write_str("piece to move is not on the board"),
        }
    }
}

impl Error for PlayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlayError::PieceNotFound(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PieceNotFound> for PlayError {
    fn from(err: PieceNotFound) -> PlayError {
        PlayError::PieceNotFound(err)
    }
}

bitflags! {
    /// Reasons for a [`SetupError`].
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct SetupErrorKinds: u8 {
        /// A player has no king. Castling and check detection assume
        /// exactly one king per player.
        const MISSING_KING = 1 << 0;
        /// A player has more than one king.
        const TOO_MANY_KINGS = 1 << 1;
        /// There are pawns on a back rank. A pawn on its own back rank can
        /// never move forward, one on the opponent's should have been
        /// promoted.
        const PAWNS_ON_BACKRANK = 1 << 2;
    }
}

/// Error when a position does not satisfy the assumptions of the rules.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SetupError {
    pub(crate) kinds: SetupErrorKinds,
}

impl SetupError {
    /// Returns the reasons for this error.
    pub fn kinds(&self) -> SetupErrorKinds {
        self.kinds
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reasons = [
            (SetupErrorKinds::MISSING_KING, "missing king"),
            (SetupErrorKinds::TOO_MANY_KINGS, "too many kings"),
            (SetupErrorKinds::PAWNS_ON_BACKRANK, "pawns on backrank"),
        ];

        f.write_str("invalid setup: ")?;
        let mut first = true;
        for (kind, reason) in reasons {
            if self.kinds.contains(kind) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(reason)?;
                first = false;
            }
        }

        Ok(())
    }
}

impl Error for SetupError {}
