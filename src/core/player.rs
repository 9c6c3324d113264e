//! Player identity.
//!
//! Othello is strictly a two-player game: each side owns exactly one piece
//! type (a single pawn color, no promotion), so the player *is* the piece
//! color. The set is closed - there is no runtime extension.

use serde::{Deserialize, Serialize};

/// One of the two players, identified by piece color.
///
/// By convention Black moves first.
///
/// ```
/// use othello_core::Player;
///
/// assert_eq!(Player::Black.opponent(), Player::White);
/// assert_eq!(Player::White.opponent().opponent(), Player::White);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Both players, in move order (Black first).
    pub const BOTH: [Player; 2] = [Player::Black, Player::White];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Contents of a single board cell.
///
/// Three-valued: empty, or occupied by one player's piece. `Default` is
/// `Empty` so a freshly allocated grid is a blank board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Piece(Player),
}

impl Cell {
    /// Check whether the cell holds no piece.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Check whether the cell holds `player`'s piece.
    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        self == Cell::Piece(player)
    }

    /// The owning player, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Piece(p) => Some(p),
        }
    }
}
