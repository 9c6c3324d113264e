//! Crate error types.
//!
//! The three variants are the *recoverable* rule violations a caller (a turn
//! manager, UI, or test harness) is expected to check for and handle. They
//! are always surfaced through `Result` and never swallowed.
//!
//! Internal invariant violations - a bounded ray whose stop is not on the
//! ray, board dimensions outside the supported range - are defects, not game
//! states, and panic instead of returning an error.

use thiserror::Error;

use crate::core::coord::Coord;
use crate::core::ply::Ply;

/// A rule violation reported to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The coordinate does not lie on a `width` x `height` board.
    #[error("coordinate {coord} is outside the {width}x{height} board")]
    OutOfBounds {
        coord: Coord,
        width: u8,
        height: u8,
    },

    /// Attempted to place a piece on a cell that already holds one.
    #[error("cell {coord} is already occupied")]
    OccupiedCell { coord: Coord },

    /// The ply is not legal for the given player on the given board:
    /// a placement outside the legal-move set, or a pass while a legal
    /// placement exists.
    #[error("illegal move: {ply}")]
    IllegalMove { ply: Ply },
}
