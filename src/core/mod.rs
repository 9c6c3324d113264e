//! Core value types: players, cells, coordinates, directions, plies, the board.
//!
//! Everything here is a plain value with by-value equality and hashing.
//! The algorithmic layer lives in [`crate::rules`].

pub mod board;
pub mod coord;
pub mod direction;
pub mod player;
pub mod ply;

pub use board::{Board, MAX_DIMENSION};
pub use coord::Coord;
pub use direction::Direction;
pub use player::{Cell, Player};
pub use ply::Ply;
