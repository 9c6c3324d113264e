//! Ray traversal.
//!
//! A ray is the ordered sequence of cells extending from an origin in one
//! compass direction to the board edge. The iterator starts at the cell
//! *adjacent* to the origin (the origin itself is never yielded), steps one
//! cell at a time, and stops exactly at the boundary - it never yields an
//! off-board coordinate. Each constructed `Ray` is an independent sequence,
//! so traversals are restartable and freely shareable across parallel scans.
//!
//! The original rule logic dispatched to one iterator object per direction;
//! here a single stepping function parametrized by [`Direction`] covers all
//! eight.

use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::core::direction::Direction;

/// Iterator over the coordinates of one ray.
///
/// ```
/// use othello_core::{Board, Coord, Direction, Ray};
///
/// let board = Board::standard();
/// let ray: Vec<_> = Ray::new(&board, Coord::new(5, 5), Direction::NorthWest).collect();
/// assert_eq!(ray, vec![Coord::new(4, 4), Coord::new(3, 3), Coord::new(2, 2),
///                      Coord::new(1, 1), Coord::new(0, 0)]);
/// ```
#[derive(Clone, Debug)]
pub struct Ray {
    cursor: Coord,
    d_row: i8,
    d_col: i8,
    width: u8,
    height: u8,
    /// Exclusive end of a bounded ray; `None` runs to the board edge.
    stop: Option<Coord>,
}

impl Ray {
    /// The full ray from `origin` in `direction`, ending at the board edge.
    ///
    /// ## Panics
    ///
    /// If `origin` is not on `board`.
    #[must_use]
    pub fn new(board: &Board, origin: Coord, direction: Direction) -> Self {
        assert!(board.contains(origin), "ray origin {origin} is off-board");
        let (d_row, d_col) = direction.step();
        Self {
            cursor: origin,
            d_row,
            d_col,
            width: board.width(),
            height: board.height(),
            stop: None,
        }
    }

    /// The ray from `origin` in `direction`, truncated to end exactly at
    /// (and excluding) `stop`. Used to replay a known capture run.
    ///
    /// ## Panics
    ///
    /// If `stop` does not lie on the ray from `origin` in `direction`, or
    /// either coordinate is off-board. The three arguments are always
    /// derived together by the capture engine, so a violation is a defect
    /// in engine logic, not a recoverable condition.
    #[must_use]
    pub fn between(board: &Board, origin: Coord, direction: Direction, stop: Coord) -> Self {
        assert!(board.contains(stop), "ray stop {stop} is off-board");
        assert!(
            ray_distance(origin, direction, stop).is_some(),
            "ray stop {stop} does not lie {direction} of origin {origin}"
        );
        let mut ray = Self::new(board, origin, direction);
        ray.stop = Some(stop);
        ray
    }
}

impl Iterator for Ray {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let next = self
            .cursor
            .offset(self.d_row, self.d_col, self.width, self.height)?;
        if self.stop == Some(next) {
            return None;
        }
        self.cursor = next;
        Some(next)
    }
}

impl std::iter::FusedIterator for Ray {}

/// Number of steps from `origin` to `stop` along `direction`, if `stop`
/// lies exactly on that ray.
fn ray_distance(origin: Coord, direction: Direction, stop: Coord) -> Option<u8> {
    let d_row = i16::from(stop.row) - i16::from(origin.row);
    let d_col = i16::from(stop.col) - i16::from(origin.col);
    let (s_row, s_col) = direction.step();
    let (s_row, s_col) = (i16::from(s_row), i16::from(s_col));

    // Unit steps, so the step count along either moving axis is the ray
    // length; both axes must agree.
    let k = if s_row != 0 { d_row * s_row } else { d_col * s_col };
    (k >= 1 && d_row == k * s_row && d_col == k * s_col).then_some(k as u8)
}
