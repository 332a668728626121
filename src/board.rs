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

//! The board: piece placement, move execution and check detection.

use std::fmt::{self, Write as _};

use tracing::{debug, trace};

use crate::{
    color::{ByColor, Color},
    errors::{PieceNotFound, PlayError, SetupError, SetupErrorKinds},
    movegen::{self, Mode},
    movelist::{AvailableMoves, MoveList},
    role::Role,
    square::{Square, BOARD_SIZE},
    types::{Move, MoveKind, Piece, PieceId, SquareState},
};

const NUM_SQUARES: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// A position together with the history that led to it.
///
/// The board owns every piece placed on it. Pieces are addressed by
/// [`PieceId`]: the grid holds handles into an arena of pieces, so a piece
/// keeps its identity while it is relocated, and captured or promoted
/// pieces simply become unreachable.
///
/// # Examples
///
/// ```
/// use chessrules::{Board, Color, Square};
///
/// let mut board = Board::new();
/// let pawn = board.set_piece(Square::new(1, 0), Some(Color::White.pawn())).unwrap();
///
/// let moves = pawn.available_moves(&board)?;
/// assert!(moves.contains(Square::new(2, 0)));
/// assert!(moves.contains(Square::new(3, 0)));
///
/// board.move_piece(Square::new(1, 0), Square::new(3, 0))?;
/// assert_eq!(board.get_piece(Square::new(3, 0)), Some(pawn));
/// assert_eq!(board.turn(), Color::Black);
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    grid: [Option<PieceId>; NUM_SQUARES],
    pieces: Vec<Piece>,
    turn: Color,
    ply: u32,
    history: Vec<Move>,
}

impl Board {
    /// Creates an empty board with White to move.
    pub fn new() -> Board {
        Board::with_turn(Color::White)
    }

    /// Creates an empty board with the given player to move.
    pub fn with_turn(turn: Color) -> Board {
        Board {
            grid: [None; NUM_SQUARES],
            pieces: Vec::new(),
            turn,
            ply: 0,
            history: Vec::new(),
        }
    }

    /// Creates a board with the regulation starting position and White to
    /// move.
    pub fn standard() -> Board {
        const BACKRANK: [Role; BOARD_SIZE as usize] = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];

        let mut board = Board::new();
        for color in Color::ALL {
            for (col, role) in (0..).zip(BACKRANK) {
                board.set_piece(Square::new(color.backrank(), col), Some(role.of(color)));
                board.set_piece(Square::new(color.pawn_row(), col), Some(color.pawn()));
            }
        }
        board
    }

    /// The player to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Number of moves executed on this board.
    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Moves executed on this board, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Places a piece on a square, or clears the square with `None`.
    ///
    /// This is a raw setup primitive: it performs no legality checks and
    /// replaces whatever was on the square. Returns the handle of the
    /// placed piece, or `None` if nothing was placed (no piece given, or
    /// the square is off the board).
    ///
    /// Every placement allocates a new [`PieceId`], even for a copy of a
    /// piece that is already known. A piece that should keep its identity
    /// is moved with [`Board::move_piece`] or [`PieceId::move_to`] instead.
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) -> Option<PieceId> {
        let Some(index) = square.index() else {
            debug!(%square, "ignoring placement off the board");
            return None;
        };

        let id = piece.map(|piece| self.alloc(piece));
        self.grid[index] = id;
        id
    }

    /// Gets the handle of the piece on a square. `None` for empty squares
    /// and for squares off the board.
    #[inline]
    pub fn get_piece(&self, square: Square) -> Option<PieceId> {
        square.index().and_then(|index| self.grid[index])
    }

    /// Gets a piece by handle. Captured and promoted pieces can still be
    /// looked up.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0 as usize)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.get_piece(square).and_then(|id| self.piece(id))
    }

    /// Finds the square of a piece by scanning the board.
    ///
    /// # Errors
    ///
    /// Returns [`PieceNotFound`] if the piece is not on the board.
    pub fn find_piece(&self, id: PieceId) -> Result<Square, PieceNotFound> {
        self.grid
            .iter()
            .position(|&cell| cell == Some(id))
            .map(Square::from_index)
            .ok_or(PieceNotFound { id })
    }

    /// Tests if a square is unusable: occupied, or off the board.
    #[inline]
    pub fn square_occupied(&self, square: Square) -> bool {
        !square.is_on_board() || self.get_piece(square).is_some()
    }

    pub fn square_state(&self, square: Square) -> SquareState {
        if !square.is_on_board() {
            return SquareState::OutOfBounds;
        }

        match self.piece_at(square) {
            None => SquareState::Free,
            Some(piece) if piece.role == Role::King => SquareState::King,
            Some(piece) => SquareState::of(piece.color),
        }
    }

    /// Tests if a piece of `color` may end its move on the square: it is
    /// free or holds an enemy piece other than the king.
    pub fn is_square_available(&self, square: Square, color: Color) -> bool {
        match self.square_state(square) {
            SquareState::Free => true,
            SquareState::White => color == Color::Black,
            SquareState::Black => color == Color::White,
            SquareState::King | SquareState::OutOfBounds => false,
        }
    }

    /// Tests if the square stops a sliding piece: any occupant, or the edge
    /// of the board.
    #[inline]
    pub fn is_square_blocking(&self, square: Square) -> bool {
        self.square_state(square) != SquareState::Free
    }

    /// Tests if every square strictly between the two columns of `row` is
    /// free. The order of the columns does not matter.
    pub fn is_row_path_free(&self, row: i8, col_from: i8, col_to: i8) -> bool {
        let (low, high) = if col_from <= col_to {
            (col_from, col_to)
        } else {
            (col_to, col_from)
        };

        (low.saturating_add(1)..high)
            .all(|col| self.square_state(Square::new(row, col)) == SquareState::Free)
    }

    /// Finds the first king of the player, scanning row by row.
    pub fn find_king(&self, color: Color) -> Option<(PieceId, Square)> {
        Square::all().find_map(|square| {
            let id = self.get_piece(square)?;
            self.piece(id)
                .filter(|piece| piece.role == Role::King && piece.color == color)
                .map(|_| (id, square))
        })
    }

    /// Tests if the player's king is attacked, or would be attacked if it
    /// stood on `position` instead.
    ///
    /// A hypothetical position is evaluated with the king relocated there,
    /// capturing anything on that square. A player without a king is never
    /// in check.
    pub fn is_check(&self, color: Color, position: Option<Square>) -> bool {
        let Some((king, king_sq)) = self.find_king(color) else {
            debug!(%color, "no king on the board");
            return false;
        };

        self.is_attacked_with_king_on(king, king_sq, position.unwrap_or(king_sq))
    }

    /// Tests if any enemy of the king `king`, which stands on `from`,
    /// attacks `to` once the king has moved there.
    pub(crate) fn is_attacked_with_king_on(&self, king: PieceId, from: Square, to: Square) -> bool {
        let Some(color) = self.piece(king).map(|piece| piece.color) else {
            return false;
        };

        if from == to {
            return self.is_attacked_by(!color, to);
        }

        if !to.is_on_board() {
            return false;
        }

        let mut probe = Board {
            grid: self.grid,
            pieces: self.pieces.clone(),
            turn: self.turn,
            ply: self.ply,
            history: Vec::new(),
        };
        probe.relocate(from, to);
        probe.is_attacked_by(!color, to)
    }

    /// Tests if a king on `square` would appear among the attacked king
    /// squares of any piece of `attacker`.
    fn is_attacked_by(&self, attacker: Color, square: Square) -> bool {
        Square::all().any(|from| {
            self.get_piece(from).is_some_and(|id| {
                self.piece(id).is_some_and(|piece| {
                    piece.color == attacker
                        && movegen::generate(self, id, piece, from, Mode::Attacks)
                            .kings
                            .contains(square)
                })
            })
        })
    }

    /// Generates the moves of a piece.
    ///
    /// # Errors
    ///
    /// Returns [`PieceNotFound`] if the piece is not on the board.
    pub fn available_moves(&self, id: PieceId) -> Result<AvailableMoves, PieceNotFound> {
        let from = self.find_piece(id)?;
        let piece = self.piece(id).ok_or(PieceNotFound { id })?;
        Ok(movegen::generate(self, id, piece, from, Mode::Legal))
    }

    /// Lists the available moves of every piece of the player to move,
    /// ordered row by row by origin square.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();

        for from in Square::all() {
            let Some(id) = self.get_piece(from) else {
                continue;
            };
            let Some(piece) = self.piece(id).filter(|piece| piece.color == self.turn) else {
                continue;
            };

            for to in movegen::generate(self, id, piece, from, Mode::Legal) {
                if moves.try_push((from, to)).is_err() {
                    debug!(capacity = moves.capacity(), "move list exhausted");
                    return moves;
                }
            }
        }

        moves
    }

    /// Validates and executes a move.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`Board::move_piece`], returns
    /// [`PlayError::IllegalMove`] if `to` is not among the available moves
    /// of the piece. The board is unchanged on error.
    pub fn play(&mut self, from: Square, to: Square) -> Result<(), PlayError> {
        let id = self.movable_piece(from)?;
        if !self.available_moves(id)?.contains(to) {
            debug!(%from, %to, "rejecting illegal move");
            return Err(PlayError::IllegalMove { from, to });
        }

        self.move_piece(from, to)
    }

    /// Executes a move and passes the turn to the other player.
    ///
    /// Besides relocating the piece, this applies promotion to a queen, en
    /// passant captures and the rook half of castling, and appends to the
    /// history. Apart from the ownership check the move is not validated:
    /// legality is established by offering the square in
    /// [`Board::available_moves`].
    ///
    /// A pawn moving diagonally onto a free square only captures en
    /// passant if the piece beside it is an enemy pawn. Any other piece
    /// there stays on the board and the move is a plain relocation.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::EmptySquare`] if there is no piece on `from`,
    /// [`PlayError::WrongTurn`] if it belongs to the player not to move,
    /// and [`PlayError::IllegalMove`] if `to` is `from` or off the board.
    /// The board is unchanged on error.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), PlayError> {
        let id = self.movable_piece(from)?;
        if from == to || !to.is_on_board() {
            debug!(%from, %to, "rejecting move to an unusable square");
            return Err(PlayError::IllegalMove { from, to });
        }

        let piece = *self.piece(id).ok_or(PieceNotFound { id })?;
        let target_state = self.square_state(to);
        let mut capture = self.relocate(from, to);
        self.pieces[id.0 as usize].has_moved = true;

        let kind = match piece.role {
            Role::Pawn => self.apply_pawn_effects(id, piece.color, from, to, target_state, &mut capture),
            Role::King => self.apply_king_effects(piece.color, from, to),
            _ => MoveKind::Normal,
        };

        let m = Move {
            from,
            to,
            piece: id,
            capture,
            kind,
        };
        trace!(ply = self.ply, color = %piece.color, "{m}");

        self.history.push(m);
        self.turn = !self.turn;
        self.ply += 1;
        Ok(())
    }

    fn movable_piece(&self, from: Square) -> Result<PieceId, PlayError> {
        let Some(id) = self.get_piece(from) else {
            debug!(%from, "rejecting move from an empty square");
            return Err(PlayError::EmptySquare { square: from });
        };

        match self.piece(id) {
            Some(piece) if piece.color == self.turn => Ok(id),
            Some(_) => {
                debug!(%from, turn = %self.turn, "rejecting move out of turn");
                Err(PlayError::WrongTurn {
                    square: from,
                    turn: self.turn,
                })
            }
            None => Err(PieceNotFound { id }.into()),
        }
    }

    fn apply_pawn_effects(
        &mut self,
        pawn: PieceId,
        color: Color,
        from: Square,
        to: Square,
        target_state: SquareState,
        capture: &mut Option<PieceId>,
    ) -> MoveKind {
        if to.row == color.promotion_row() {
            let queen = self.set_piece(to, Some(color.queen()));
            trace!(%to, "pawn promoted");
            return queen.map_or(MoveKind::Normal, |queen| MoveKind::Promotion { queen });
        }

        if from.col != to.col && target_state == SquareState::Free {
            let captured = Square::new(from.row, to.col);
            let victim = self.get_piece(captured).filter(|&id| {
                self.piece(id)
                    .is_some_and(|piece| piece.role == Role::Pawn && piece.color != color)
            });
            if let Some(victim) = victim {
                self.set_piece(captured, None);
                *capture = Some(victim);
                trace!(%captured, "en passant capture");
                return MoveKind::EnPassant { captured };
            }
        }

        if (to.row - from.row).abs() == 2 {
            self.pieces[pawn.0 as usize].double_step_ply = Some(self.ply);
            return MoveKind::DoubleStep;
        }

        MoveKind::Normal
    }

    fn apply_king_effects(&mut self, color: Color, from: Square, to: Square) -> MoveKind {
        let cols = to.col - from.col;
        if from.row != to.row || cols.abs() != 2 {
            return MoveKind::Normal;
        }

        let rook_from = Square::new(to.row, if cols > 0 { BOARD_SIZE - 1 } else { 0 });
        let rook_to = to.offset(0, -cols.signum());

        let Some(rook) = self.get_piece(rook_from).filter(|&id| {
            self.piece(id)
                .is_some_and(|piece| piece.role == Role::Rook && piece.color == color)
        }) else {
            debug!(%rook_from, "king moved two columns without a rook to castle with");
            return MoveKind::Normal;
        };

        self.relocate(rook_from, rook_to);
        self.pieces[rook.0 as usize].has_moved = true;
        trace!(%rook_from, %rook_to, "castled");

        MoveKind::Castle {
            rook,
            rook_from,
            rook_to,
        }
    }

    /// Moves whatever is on `from` to `to`, returning what was on `to`.
    /// Both squares must be on the board.
    fn relocate(&mut self, from: Square, to: Square) -> Option<PieceId> {
        match (from.index(), to.index()) {
            (Some(from), Some(to)) => {
                let moving = self.grid[from].take();
                std::mem::replace(&mut self.grid[to], moving)
            }
            _ => None,
        }
    }

    fn alloc(&mut self, piece: Piece) -> PieceId {
        let id = PieceId(self.pieces.len() as u32);
        self.pieces.push(piece);
        id
    }

    /// Checks the assumptions the rules make about a position: one king
    /// per player and no pawns on a back rank.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] listing every violated assumption.
    pub fn validate(&self) -> Result<(), SetupError> {
        let mut kings = ByColor::<u8>::default();
        let mut kinds = SetupErrorKinds::empty();

        for square in Square::all() {
            let Some(piece) = self.piece_at(square) else {
                continue;
            };
            match piece.role {
                Role::King => *kings.get_mut(piece.color) += 1,
                Role::Pawn
                    if square.row == Color::White.backrank()
                        || square.row == Color::Black.backrank() =>
                {
                    kinds |= SetupErrorKinds::PAWNS_ON_BACKRANK;
                }
                _ => {}
            }
        }

        if kings.find(|&n| n == 0).is_some() {
            kinds |= SetupErrorKinds::MISSING_KING;
        }
        if kings.find(|&n| n > 1).is_some() {
            kinds |= SetupErrorKinds::TOO_MANY_KINGS;
        }

        if kinds.is_empty() {
            Ok(())
        } else {
            Err(SetupError { kinds })
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

/// ASCII diagram with the last row on top, White in uppercase.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            for col in 0..BOARD_SIZE {
                f.write_char(
                    self.piece_at(Square::new(row, col))
                        .map_or('.', |piece| piece.char()),
                )?;
                f.write_char(if col + 1 < BOARD_SIZE { ' ' } else { '\n' })?;
            }
        }

        Ok(())
    }
}

impl PieceId {
    /// Generates the moves of this piece. See [`Board::available_moves`].
    pub fn available_moves(self, board: &Board) -> Result<AvailableMoves, PieceNotFound> {
        board.available_moves(self)
    }

    /// Moves this piece to `to`. See [`Board::move_piece`].
    pub fn move_to(self, board: &mut Board, to: Square) -> Result<(), PlayError> {
        let from = board.find_piece(self)?;
        board.move_piece(from, to)
    }
}
