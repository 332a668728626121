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

//! Count move paths.

use crate::board::Board;

/// Counts move paths of a given length from `board`, following
/// [`Board::legal_moves`] for the player to move at each step.
///
/// Useful for comparing, testing and debugging move generation
/// correctness and performance. Note that only the king filters moves
/// that would leave it in check, so deeper counts diverge from standard
/// chess once pins or checks appear.
///
/// # Examples
///
/// ```
/// use chessrules::{perft, Board};
///
/// let board = Board::standard();
/// assert_eq!(perft(&board, 1), 20);
/// assert_eq!(perft(&board, 2), 400);
/// ```
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth < 1 {
        return 1;
    }

    let moves = board.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|&(from, to)| {
            let mut child = board.clone();
            let played = child.move_piece(from, to);
            debug_assert!(played.is_ok(), "generated move {from}-{to} rejected: {played:?}");
            perft(&child, depth - 1)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Color, square::Square};

    #[test]
    fn test_perft_zero_is_one() {
        assert_eq!(perft(&Board::new(), 0), 1);
    }

    #[test]
    fn test_lone_kings() {
        let mut board = Board::new();
        board.set_piece(Square::new(0, 0), Some(Color::White.king()));
        board.set_piece(Square::new(7, 7), Some(Color::Black.king()));
        assert_eq!(perft(&board, 1), 3);
        assert_eq!(perft(&board, 2), 9);
    }

    #[test]
    fn test_generated_moves_are_accepted() {
        let mut board = Board::standard();
        for (from, to) in [((1, 4), (3, 4)), ((6, 3), (4, 3)), ((3, 4), (4, 4)), ((6, 5), (4, 5))] {
            board.play(Square::from(from), Square::from(to)).expect("legal move");
        }

        for &(from, to) in board.legal_moves().iter() {
            let mut child = board.clone();
            assert_eq!(child.move_piece(from, to), Ok(()), "{from}-{to}");
        }
        assert_eq!(perft(&board, 1), board.legal_moves().len() as u64);
    }
}
