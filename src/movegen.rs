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

//! Per-role move generation.
//!
//! Every generator classifies the squares it reaches with the same two
//! board queries, [`Board::is_square_available`] and
//! [`Board::is_square_blocking`]. Enemy kings are never available targets;
//! they are collected separately so that check detection can reuse the
//! ordinary generators.

use crate::{
    board::Board,
    color::Color,
    movelist::AvailableMoves,
    role::Role,
    square::{Square, BOARD_SIZE},
    types::{Piece, PieceId, SquareState},
};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// What the generated moves are used for.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Mode {
    /// Moves for the piece itself. Kings skip squares where they would be
    /// in check and may castle.
    Legal,
    /// Squares the piece attacks, for check detection. Kings neither filter
    /// nor castle, so a king never asks whether the other king is in check.
    Attacks,
}

/// Generates the moves of the piece `id` standing on `from`.
pub(crate) fn generate(
    board: &Board,
    id: PieceId,
    piece: &Piece,
    from: Square,
    mode: Mode,
) -> AvailableMoves {
    let mut moves = AvailableMoves::default();

    match piece.role {
        Role::Pawn => pawn_moves(board, piece.color, from, &mut moves),
        Role::Knight => step_moves(board, piece.color, from, &KNIGHT_OFFSETS, &mut moves),
        Role::Bishop => slider_moves(board, piece.color, from, &BISHOP_DIRECTIONS, &mut moves),
        Role::Rook => slider_moves(board, piece.color, from, &ROOK_DIRECTIONS, &mut moves),
        Role::Queen => slider_moves(board, piece.color, from, &QUEEN_DIRECTIONS, &mut moves),
        Role::King => king_moves(board, id, piece, from, mode, &mut moves),
    }

    moves
}

fn is_enemy_king(board: &Board, color: Color, sq: Square) -> bool {
    board.square_state(sq) == SquareState::King
        && board.piece_at(sq).is_some_and(|king| king.color != color)
}

/// Records `to` in the right set and reports whether it is blocking.
fn visit(board: &Board, color: Color, to: Square, moves: &mut AvailableMoves) -> bool {
    if board.is_square_available(to, color) {
        moves.available.add(to);
    } else if is_enemy_king(board, color, to) {
        moves.kings.add(to);
    }

    board.is_square_blocking(to)
}

fn step_moves(
    board: &Board,
    color: Color,
    from: Square,
    offsets: &[(i8, i8)],
    moves: &mut AvailableMoves,
) {
    for &(rows, cols) in offsets {
        visit(board, color, from.offset(rows, cols), moves);
    }
}

fn slider_moves(
    board: &Board,
    color: Color,
    from: Square,
    directions: &[(i8, i8)],
    moves: &mut AvailableMoves,
) {
    for &(rows, cols) in directions {
        let mut to = from;
        for _ in 1..BOARD_SIZE {
            to = to.offset(rows, cols);
            if visit(board, color, to, moves) {
                if to.is_on_board() {
                    moves.blocking.add(to);
                }
                break;
            }
        }
    }
}

fn king_moves(
    board: &Board,
    id: PieceId,
    king: &Piece,
    from: Square,
    mode: Mode,
    moves: &mut AvailableMoves,
) {
    if mode == Mode::Attacks {
        step_moves(board, king.color, from, &KING_OFFSETS, moves);
        return;
    }

    for (rows, cols) in KING_OFFSETS {
        let to = from.offset(rows, cols);
        if board.is_square_available(to, king.color) {
            if !board.is_attacked_with_king_on(id, from, to) {
                moves.available.add(to);
            }
        } else if is_enemy_king(board, king.color, to) {
            moves.kings.add(to);
        }
    }

    castling_moves(board, king, from, moves);
}

/// Adds the two-column king moves. Only the king and rook histories and
/// the squares between them are examined. Whether the king passes through
/// or lands on an attacked square is not.
fn castling_moves(board: &Board, king: &Piece, from: Square, moves: &mut AvailableMoves) {
    if king.has_moved || from.row != king.color.backrank() {
        return;
    }

    for (rook_col, cols) in [(0, -1), (BOARD_SIZE - 1, 1)] {
        let to = from.offset(0, 2 * cols);
        let between = if cols < 0 {
            rook_col < to.col
        } else {
            to.col < rook_col
        };
        if !between {
            continue;
        }

        let rook_sq = Square::new(from.row, rook_col);
        let castling_rook = board.piece_at(rook_sq).is_some_and(|rook| {
            rook.role == Role::Rook && rook.color == king.color && !rook.has_moved
        });

        if castling_rook && board.is_row_path_free(from.row, from.col, rook_col) {
            moves.available.add(to);
        }
    }
}

fn pawn_moves(board: &Board, color: Color, from: Square, moves: &mut AvailableMoves) {
    let forward = color.pawn_direction();

    let single = from.offset(forward, 0);
    if board.square_state(single) == SquareState::Free {
        moves.available.add(single);

        let double = single.offset(forward, 0);
        if from.row == color.pawn_row() && board.square_state(double) == SquareState::Free {
            moves.available.add(double);
        }
    }

    for cols in [-1, 1] {
        let to = from.offset(forward, cols);
        match board.square_state(to) {
            SquareState::Free => {
                if is_en_passant_victim(board, color, from.offset(0, cols)) {
                    moves.available.add(to);
                }
            }
            SquareState::King => {
                if is_enemy_king(board, color, to) {
                    moves.kings.add(to);
                }
            }
            SquareState::OutOfBounds => {}
            state => {
                if state == SquareState::of(!color) {
                    moves.available.add(to);
                }
            }
        }
    }
}

/// Tests if the piece beside a pawn of `color` is an enemy pawn that made
/// a two-row advance on the very last ply.
fn is_en_passant_victim(board: &Board, color: Color, beside: Square) -> bool {
    let Some(victim) = board.get_piece(beside) else {
        return false;
    };

    board
        .piece(victim)
        .is_some_and(|pawn| pawn.role == Role::Pawn && pawn.color != color)
        && board
            .last_move()
            .is_some_and(|m| m.piece == victim && m.is_double_step())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available(board: &Board, id: PieceId) -> Vec<Square> {
        board
            .available_moves(id)
            .expect("piece on board")
            .into_iter()
            .collect()
    }

    #[test]
    fn test_knight_in_corner() {
        let mut board = Board::new();
        let knight = board
            .set_piece(Square::new(0, 0), Some(Color::White.knight()))
            .expect("on board");

        assert_eq!(available(&board, knight), [Square::new(1, 2), Square::new(2, 1)]);
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let mut board = Board::new();
        let knight = board
            .set_piece(Square::new(3, 3), Some(Color::White.knight()))
            .expect("on board");
        for (rows, cols) in KING_OFFSETS {
            board.set_piece(Square::new(3 + rows, 3 + cols), Some(Color::White.pawn()));
        }

        assert_eq!(available(&board, knight).len(), 8);
    }

    #[test]
    fn test_knight_attacks_king() {
        let mut board = Board::new();
        let knight = board
            .set_piece(Square::new(3, 3), Some(Color::Black.knight()))
            .expect("on board");
        board.set_piece(Square::new(5, 4), Some(Color::White.king()));
        board.set_piece(Square::new(1, 2), Some(Color::Black.king()));

        let moves = board.available_moves(knight).expect("piece on board");
        assert_eq!(moves.len(), 6);
        assert!(moves.attacks_king_on(Square::new(5, 4)));
        assert!(!moves.kings.contains(Square::new(1, 2)));
    }

    #[test]
    fn test_slider_records_blocking_squares() {
        let mut board = Board::new();
        let rook = board
            .set_piece(Square::new(0, 0), Some(Color::White.rook()))
            .expect("on board");
        board.set_piece(Square::new(0, 3), Some(Color::Black.bishop()));
        board.set_piece(Square::new(2, 0), Some(Color::White.pawn()));

        let moves = board.available_moves(rook).expect("piece on board");
        assert_eq!(
            moves.available,
            [
                Square::new(0, 1),
                Square::new(0, 2),
                Square::new(0, 3),
                Square::new(1, 0),
            ]
            .into_iter()
            .collect()
        );
        assert_eq!(
            moves.blocking,
            [Square::new(0, 3), Square::new(2, 0)].into_iter().collect()
        );
    }

    #[test]
    fn test_attack_mode_king_does_not_filter() {
        let mut board = Board::new();
        let king = board
            .set_piece(Square::new(0, 0), Some(Color::White.king()))
            .expect("on board");
        board.set_piece(Square::new(2, 7), Some(Color::Black.rook()));

        let legal = generate(&board, king, &Color::White.king(), Square::new(0, 0), Mode::Legal);
        let attacks = generate(&board, king, &Color::White.king(), Square::new(0, 0), Mode::Attacks);
        assert_eq!(legal.len(), 3);
        assert_eq!(attacks.len(), 3);

        board.set_piece(Square::new(1, 7), Some(Color::Black.rook()));
        board.set_piece(Square::new(0, 7), Some(Color::Black.rook()));
        let legal = generate(&board, king, &Color::White.king(), Square::new(0, 0), Mode::Legal);
        let attacks = generate(&board, king, &Color::White.king(), Square::new(0, 0), Mode::Attacks);
        assert_eq!(legal.len(), 0);
        assert_eq!(attacks.len(), 3);
    }
}
