//! Terminal-state classification.
//!
//! ## Termination policy
//!
//! A position is terminal exactly when *neither* player has a legal
//! placement. Board fullness is never consulted: a full board trivially
//! satisfies the condition, and a sparse board with no placements for either
//! side is just as terminal. (An alternative policy - halt only when the
//! board is full - exists in othello engine folklore; this crate does not
//! implement it, and the tests lock the no-legal-move policy in.)
//!
//! The outcome is recomputed from scratch on every query. Nothing is cached
//! or incrementally updated, so it can never go stale.

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::player::Player;
use crate::rules::legality::has_any_move;

/// Classification of a board position.
///
/// Derived, never stored: always the result of a fresh [`outcome`] query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// At least one player still has a legal placement.
    InProgress,
    /// Terminal with a piece-count majority for this player.
    Win(Player),
    /// Terminal with equal piece counts.
    Draw,
}

impl Outcome {
    /// Check whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning player, if the game ended with a majority.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// Classify `board`: still in progress, won, or drawn.
///
/// Both players are evaluated regardless of whose turn it is - a mover with
/// no placement passes rather than ending the game, so the position stays
/// `InProgress` as long as *either* side can move. Turn-skip bookkeeping
/// belongs to the surrounding turn manager, not this engine.
///
/// With the `parallel` feature the two per-player existence scans run under
/// `rayon::join`; the result is identical either way.
///
/// ```
/// use othello_core::{outcome, Board, Outcome};
///
/// assert_eq!(outcome(&Board::standard()), Outcome::InProgress);
/// ```
#[must_use]
pub fn outcome(board: &Board) -> Outcome {
    #[cfg(feature = "parallel")]
    let (black_can_move, white_can_move) = rayon::join(
        || has_any_move(board, Player::Black),
        || has_any_move(board, Player::White),
    );
    #[cfg(not(feature = "parallel"))]
    let (black_can_move, white_can_move) = (
        has_any_move(board, Player::Black),
        has_any_move(board, Player::White),
    );

    if black_can_move || white_can_move {
        return Outcome::InProgress;
    }

    // Terminal: majority of pieces wins; remaining empty cells count for
    // neither side.
    let (black, white) = board.piece_counts();
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Outcome::Win(Player::Black),
        std::cmp::Ordering::Less => Outcome::Win(Player::White),
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}
