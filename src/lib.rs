//! A chess rules engine: move generation for single pieces, move execution
//! with castling, en passant and promotion, and check detection.
//!
//! # Examples
//!
//! Ask a piece for its moves:
//!
//! ```
//! use chessrules::{Board, Color, Square};
//!
//! let mut board = Board::new();
//! let king = board.set_piece(Square::new(3, 4), Some(Color::White.king())).unwrap();
//!
//! let moves = king.available_moves(&board)?;
//! assert_eq!(moves.len(), 8);
//! # Ok::<_, chessrules::PieceNotFound>(())
//! ```
//!
//! Castle by moving the king two columns:
//!
//! ```
//! # use chessrules::{Board, Color, Square};
//! use chessrules::Role;
//!
//! let mut board = Board::new();
//! let king = board.set_piece(Square::new(0, 4), Some(Color::White.king())).unwrap();
//! board.set_piece(Square::new(0, 0), Some(Color::White.rook()));
//!
//! assert!(king.available_moves(&board)?.contains(Square::new(0, 2)));
//! board.play(Square::new(0, 4), Square::new(0, 2))?;
//!
//! assert_eq!(board.piece_at(Square::new(0, 2)).map(|p| p.role), Some(Role::King));
//! assert_eq!(board.piece_at(Square::new(0, 3)).map(|p| p.role), Some(Role::Rook));
//! # Ok::<_, chessrules::PlayError>(())
//! ```
//!
//! Detect check:
//!
//! ```
//! # use chessrules::{Board, Color, Square};
//! let mut board = Board::new();
//! board.set_piece(Square::new(0, 4), Some(Color::White.king()));
//! board.set_piece(Square::new(7, 4), Some(Color::Black.rook()));
//!
//! assert!(board.is_check(Color::White, None));
//! assert!(!board.is_check(Color::White, Some(Square::new(0, 3))));
//! ```
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   the plain value types.
//!
//! # Logging
//!
//! Rejected moves are reported at `debug` level and executed moves at
//! `trace` level through [`tracing`](https://docs.rs/tracing/0.1). The
//! library never installs a subscriber.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod color;
mod errors;
mod movegen;
mod movelist;
mod perft;
mod role;
mod square;
mod types;

pub mod board;
pub mod square_set;

pub use board::Board;
pub use color::{ByColor, Color, ParseColorError};
pub use errors::{PieceNotFound, PlayError, SetupError, SetupErrorKinds};
pub use movelist::{AvailableMoves, MoveList};
pub use perft::perft;
pub use role::Role;
pub use square::{Square, BOARD_SIZE};
pub use square_set::SquareSet;
pub use types::{Move, MoveKind, Piece, PieceId, SquareState};
