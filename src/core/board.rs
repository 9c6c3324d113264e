//! The board grid.
//!
//! A `Board` is a fixed-size W x H grid of [`Cell`]s. Cell storage is a
//! `SmallVec` sized for the standard 8x8 game, so the common case never
//! touches the heap and cloning is a memcpy.
//!
//! ## Immutability
//!
//! A board handed to a caller is never mutated again. Every "set" operation
//! either returns a fresh copy ([`Board::with_piece`]) or happens on a
//! private working copy inside the capture engine that is published only
//! once fully updated. The previous board always remains valid, which is
//! what makes history/undo free for the caller.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::coord::Coord;
use super::player::{Cell, Player};
use crate::error::RulesError;

/// Largest supported dimension. Keeps algebraic notation to one letter.
pub const MAX_DIMENSION: u8 = 26;

/// A W x H othello board.
///
/// ```
/// use othello_core::{Board, Cell, Coord, Player};
///
/// let board = Board::standard();
/// assert_eq!(board.cell(Coord::new(3, 3)), Ok(Cell::Piece(Player::White)));
/// assert_eq!(board.piece_counts(), (2, 2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    width: u8,
    height: u8,
    /// Row-major cell storage; inline up to the standard 64 cells.
    cells: SmallVec<[Cell; 64]>,
}

impl Board {
    /// Create an all-empty board.
    ///
    /// ## Panics
    ///
    /// If either dimension is outside `2..=26`.
    #[must_use]
    pub fn empty(width: u8, height: u8) -> Self {
        assert!(
            (2..=MAX_DIMENSION).contains(&width) && (2..=MAX_DIMENSION).contains(&height),
            "board dimensions must be in 2..=26, got {width}x{height}"
        );
        Self {
            width,
            height,
            cells: smallvec![Cell::Empty; width as usize * height as usize],
        }
    }

    /// Create the starting position: a 2x2 cross at the grid center with
    /// alternating ownership, White on the upper-left/lower-right diagonal.
    ///
    /// ## Panics
    ///
    /// If either dimension is odd or below 4 (the cross needs an exact
    /// center and room around it), or outside the supported range.
    #[must_use]
    pub fn initial(width: u8, height: u8) -> Self {
        assert!(
            width >= 4 && height >= 4 && width % 2 == 0 && height % 2 == 0,
            "initial cross requires even dimensions >= 4, got {width}x{height}"
        );
        let mut board = Self::empty(width, height);
        let (row, col) = (height / 2 - 1, width / 2 - 1);
        board.set(Coord::new(row, col), Cell::Piece(Player::White));
        board.set(Coord::new(row, col + 1), Cell::Piece(Player::Black));
        board.set(Coord::new(row + 1, col), Cell::Piece(Player::Black));
        board.set(Coord::new(row + 1, col + 1), Cell::Piece(Player::White));
        board
    }

    /// The standard 8x8 starting position.
    #[must_use]
    pub fn standard() -> Self {
        Self::initial(8, 8)
    }

    /// Create a board with cells from a factory function.
    ///
    /// The factory receives each coordinate in row-major order. Useful for
    /// setting up test positions.
    ///
    /// ## Panics
    ///
    /// If either dimension is outside `2..=26`.
    #[must_use]
    pub fn from_fn(width: u8, height: u8, mut factory: impl FnMut(Coord) -> Cell) -> Self {
        let mut board = Self::empty(width, height);
        for coord in board.coords().collect::<Vec<_>>() {
            board.set(coord, factory(coord));
        }
        board
    }

    /// Board width (number of columns).
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Board height (number of rows).
    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Check whether a coordinate lies on this board.
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// The cell at `coord`.
    ///
    /// ## Errors
    ///
    /// `OutOfBounds` if `coord` is not on this board.
    pub fn cell(&self, coord: Coord) -> Result<Cell, RulesError> {
        if self.contains(coord) {
            Ok(self.cells[self.index(coord)])
        } else {
            Err(RulesError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Copy-on-write placement: a new board identical to this one except
    /// `coord` now holds `player`'s piece. The receiver is untouched.
    ///
    /// ## Errors
    ///
    /// `OutOfBounds` if `coord` is off the board, `OccupiedCell` if the
    /// cell already holds a piece.
    pub fn with_piece(&self, coord: Coord, player: Player) -> Result<Self, RulesError> {
        if !self.cell(coord)?.is_empty() {
            return Err(RulesError::OccupiedCell { coord });
        }
        let mut next = self.clone();
        next.set(coord, Cell::Piece(player));
        Ok(next)
    }

    /// Number of pieces `player` has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.is_owned_by(player))
            .count()
    }

    /// Piece counts as `(black, white)`. Linear scan, no side effects.
    #[must_use]
    pub fn piece_counts(&self) -> (usize, usize) {
        let mut black = 0;
        let mut white = 0;
        for cell in &self.cells {
            match cell.owner() {
                Some(Player::Black) => black += 1,
                Some(Player::White) => white += 1,
                None => {}
            }
        }
        (black, white)
    }

    /// Check whether every cell holds a piece.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Iterate over every coordinate on the board, row-major.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |row| (0..width).map(move |col| Coord::new(row, col)))
    }

    /// Iterate over the coordinates holding `player`'s pieces.
    pub fn occupied_by(&self, player: Player) -> impl Iterator<Item = Coord> + '_ {
        self.coords()
            .filter(move |&coord| self.get(coord).is_owned_by(player))
    }

    /// Cell lookup for coordinates already known to be on the board.
    ///
    /// Callers inside the rules layer reach cells through the ray iterator,
    /// which never yields an off-board coordinate.
    pub(crate) fn get(&self, coord: Coord) -> Cell {
        debug_assert!(self.contains(coord));
        self.cells[self.index(coord)]
    }

    /// Direct cell write. Only used on boards that have not been published:
    /// the constructors above and the capture engine's working copy.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        debug_assert!(self.contains(coord));
        let index = self.index(coord);
        self.cells[index] = cell;
    }

    const fn index(&self, coord: Coord) -> usize {
        coord.row as usize * self.width as usize + coord.col as usize
    }
}

impl std::fmt::Display for Board {
    /// ASCII rendering: `.` empty, `X` black, `O` white. Test/debug aid.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let glyph = match self.get(Coord::new(row, col)).owner() {
                    None => '.',
                    Some(Player::Black) => 'X',
                    Some(Player::White) => 'O',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
