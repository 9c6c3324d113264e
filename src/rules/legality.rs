//! Move legality.
//!
//! A placement is legal when it lands on an empty cell and brackets at least
//! one contiguous run of opponent pieces against one of the mover's existing
//! pieces. Each (origin, direction) pair is probed independently; the legal
//! set for a player is the deduplicated union over all of that player's
//! origins and all 8 directions.
//!
//! Every probe is a pure function of an immutable board snapshot, so the
//! union is order-independent. With the `parallel` feature the per-origin
//! probes run under rayon and merge by set union; sequentially the result is
//! identical.

use rustc_hash::FxHashSet;

use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::core::direction::Direction;
use crate::core::player::{Cell, Player};
use crate::rules::ray::Ray;

/// Probe one (origin, direction) pair for the destination it contributes.
///
/// Walks the ray from `origin` (a cell holding `player`'s piece): skips over
/// a run of opponent pieces, and if the run is non-empty and ends on an
/// empty cell, that cell is a legal destination. A run ended by the board
/// edge or by `player`'s own piece contributes nothing, as does an empty
/// cell with no run before it.
#[must_use]
pub fn probe(board: &Board, origin: Coord, direction: Direction, player: Player) -> Option<Coord> {
    let mut opponent_run = false;
    for coord in Ray::new(board, origin, direction) {
        match board.get(coord) {
            Cell::Empty => return opponent_run.then_some(coord),
            Cell::Piece(owner) if owner == player => return None,
            Cell::Piece(_) => opponent_run = true,
        }
    }
    // Ran off the board edge while still inside the opponent run.
    None
}

/// All legal placement destinations for `player`.
///
/// Returns the empty set when the player has no legal placement - including
/// the degenerate case of a player with no pieces on the board.
///
/// ```
/// use othello_core::{legal_moves, Board, Player};
///
/// let board = Board::standard();
/// assert_eq!(legal_moves(&board, Player::Black).len(), 4);
/// ```
#[must_use]
pub fn legal_moves(board: &Board, player: Player) -> FxHashSet<Coord> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        let origins: Vec<Coord> = board.occupied_by(player).collect();
        origins
            .par_iter()
            .flat_map_iter(|&origin| {
                Direction::ALL
                    .iter()
                    .filter_map(move |&direction| probe(board, origin, direction, player))
            })
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        board
            .occupied_by(player)
            .flat_map(|origin| {
                Direction::ALL
                    .iter()
                    .filter_map(move |&direction| probe(board, origin, direction, player))
            })
            .collect()
    }
}

/// Check whether `player` has at least one legal placement.
///
/// Short-circuits on the first hit, so it is cheaper than materializing the
/// full legal set. This is the primitive the termination evaluator and pass
/// validation build on.
#[must_use]
pub fn has_any_move(board: &Board, player: Player) -> bool {
    board.occupied_by(player).any(|origin| {
        Direction::ALL
            .iter()
            .any(|&direction| probe(board, origin, direction, player).is_some())
    })
}
