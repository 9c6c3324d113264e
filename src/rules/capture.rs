//! Ply application and capture.
//!
//! Applying a placement puts the mover's piece on the destination and flips
//! every opponent run that the new piece brackets against an existing piece
//! of the mover's color. The input board is never touched: all work happens
//! on a private working copy that is published only once every direction has
//! been resolved.
//!
//! Flip decisions are *buffered*: all 8 directional scans read the board as
//! it stands after placement but before any flip, and only then are the runs
//! rewritten. The 8 rays from a single cell are disjoint, so the decisions
//! commute; buffering makes that independence explicit instead of relying on
//! scan order. With the `parallel` feature the scans run under rayon and are
//! joined before the first flip is applied.

use smallvec::SmallVec;

use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::core::direction::Direction;
use crate::core::player::{Cell, Player};
use crate::core::ply::Ply;
use crate::error::RulesError;
use crate::rules::legality::has_any_move;
use crate::rules::ray::Ray;

/// Apply `player`'s ply to `board`, producing the resulting board.
///
/// The input board remains unchanged and valid, so callers can keep it for
/// history or undo.
///
/// A pass leaves the board identical; it is only accepted when the player
/// has no legal placement. A placement is re-verified to land on an empty
/// on-board cell (membership in the legal-move set is the caller's check;
/// see [`legal_moves`](crate::rules::legal_moves)).
///
/// ## Errors
///
/// `IllegalMove` for a placement on an occupied or off-board cell, or for a
/// pass while a legal placement exists.
///
/// ```
/// use othello_core::{apply_ply, Board, Coord, Player, Ply};
///
/// let board = Board::standard();
/// let next = apply_ply(&board, Player::Black, Ply::Place(Coord::new(2, 3))).unwrap();
/// assert_eq!(next.piece_counts(), (4, 1));
/// assert_eq!(board.piece_counts(), (2, 2)); // input untouched
/// ```
pub fn apply_ply(board: &Board, player: Player, ply: Ply) -> Result<Board, RulesError> {
    let destination = match ply {
        Ply::Pass => {
            if has_any_move(board, player) {
                return Err(RulesError::IllegalMove { ply });
            }
            return Ok(board.clone());
        }
        Ply::Place(coord) => coord,
    };

    // Defensive re-check of the placement preconditions.
    let mut working = board
        .with_piece(destination, player)
        .map_err(|_| RulesError::IllegalMove { ply })?;

    // Scan all 8 directions against the pre-flip snapshot, then flip.
    let stops = capture_stops(&working, destination, player);
    for (direction, stop) in stops {
        for coord in Ray::between(&working, destination, direction, stop) {
            working.set(coord, Cell::Piece(player));
        }
    }

    Ok(working)
}

/// The terminating own-piece coordinate for each direction whose ray holds
/// a capturable run, resolved against a single pre-flip snapshot.
fn capture_stops(board: &Board, destination: Coord, player: Player) -> SmallVec<[(Direction, Coord); 8]> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        Direction::ALL
            .par_iter()
            .filter_map(|&direction| {
                capture_stop(board, destination, direction, player).map(|stop| (direction, stop))
            })
            .collect::<Vec<_>>()
            .into()
    }
    #[cfg(not(feature = "parallel"))]
    {
        Direction::ALL
            .iter()
            .filter_map(|&direction| {
                capture_stop(board, destination, direction, player).map(|stop| (direction, stop))
            })
            .collect()
    }
}

/// Walk one ray from the placed piece: a contiguous non-empty run of
/// opponent pieces immediately followed by the mover's own piece yields that
/// own piece's coordinate. A run ended by an empty cell or the board edge
/// yields nothing.
fn capture_stop(
    board: &Board,
    destination: Coord,
    direction: Direction,
    player: Player,
) -> Option<Coord> {
    let mut opponent_run = false;
    for coord in Ray::new(board, destination, direction) {
        match board.get(coord) {
            Cell::Empty => return None,
            Cell::Piece(owner) if owner == player => return opponent_run.then_some(coord),
            Cell::Piece(_) => opponent_run = true,
        }
    }
    None
}
