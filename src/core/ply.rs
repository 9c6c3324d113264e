//! Move representation.
//!
//! A ply is either the placement of a piece on an empty cell or a pass.
//! Passing is only legal when the mover has no legal placement; the rules
//! layer enforces this in [`apply_ply`](crate::rules::apply_ply).

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A single move by one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ply {
    /// Place a piece at the given coordinate.
    Place(Coord),
    /// Skip the turn (no legal placement available).
    Pass,
}

impl Ply {
    /// The placement destination, if this ply is a placement.
    #[must_use]
    pub const fn destination(self) -> Option<Coord> {
        match self {
            Ply::Place(coord) => Some(coord),
            Ply::Pass => None,
        }
    }

    /// Check whether this ply is a pass.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Ply::Pass)
    }
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ply::Place(coord) => write!(f, "{coord}"),
            Ply::Pass => write!(f, "pass"),
        }
    }
}
