//! # othello-core
//!
//! The rules engine for an 8x8 (generically W x H) othello/reversi game:
//! which moves are legal, what board results from a move including the
//! reversal of captured pieces, and whether the game has ended and who won.
//!
//! This crate is the rules only. Turn management, clocks, players, display,
//! and any host scaffolding live with the consumer - the engine exposes no
//! file or wire format, keeps no global state, and never mutates a board it
//! has handed out.
//!
//! ## Design Principles
//!
//! 1. **Immutable boards**: every operation returns a fresh [`Board`];
//!    the input always remains valid, so history and undo are free.
//!
//! 2. **Pure rules**: legality, capture, and termination are pure functions
//!    of a board snapshot. Results are deterministic and order-independent.
//!
//! 3. **Optional parallelism**: the `parallel` feature maps the
//!    per-direction and per-player scans over rayon. Correctness never
//!    depends on it - a 64-cell scan finishes in microseconds sequentially.
//!
//! ## Example
//!
//! ```
//! use othello_core::{apply_ply, legal_moves, outcome, Board, Outcome, Player, Ply};
//!
//! let board = Board::standard();
//! let moves = legal_moves(&board, Player::Black);
//! assert_eq!(moves.len(), 4);
//!
//! let ply = Ply::Place(*moves.iter().next().unwrap());
//! let next = apply_ply(&board, Player::Black, ply)?;
//! assert_eq!(next.piece_counts(), (4, 1));
//! assert_eq!(outcome(&next), Outcome::InProgress);
//! # Ok::<(), othello_core::RulesError>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: value types - players, cells, coordinates, directions, plies,
//!   the board grid
//! - `rules`: ray traversal, move legality, capture, termination
//! - `error`: the recoverable rule-violation error type

pub mod core;
pub mod error;
pub mod rules;

// Re-export the public surface flat.
pub use crate::core::{Board, Cell, Coord, Direction, Player, Ply, MAX_DIMENSION};
pub use crate::error::RulesError;
pub use crate::rules::{apply_ply, has_any_move, legal_moves, outcome, Outcome, Ray};
