//! Board coordinates.
//!
//! A `Coord` is a plain (row, column) value pair, 0-indexed from the top-left
//! corner. Whether a coordinate is *on* a given board is a property of the
//! (coordinate, board) pair and is checked explicitly via
//! [`Board::contains`](crate::Board::contains) - ray traversal does its
//! boundary arithmetic in signed space and only ever materializes on-board
//! coordinates.

use serde::{Deserialize, Serialize};

/// A (row, column) board position, 0-indexed.
///
/// Equality and hashing are by value, so coordinates can be collected into
/// sets and compared across independently derived boards.
///
/// `Display` uses algebraic notation: column as a letter, 1-based row.
///
/// ```
/// use othello_core::Coord;
///
/// let c = Coord::new(2, 3);
/// assert_eq!(c.row, 2);
/// assert_eq!(c.col, 3);
/// assert_eq!(format!("{c}"), "d3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: u8,
    /// Column index, 0 at the left.
    pub col: u8,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Offset by one unit step, returning `None` if either component would
    /// leave `0..height` / `0..width`.
    ///
    /// This is the single stepping primitive the ray iterator is built on.
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8, width: u8, height: u8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(d_row);
        let col = i16::from(self.col) + i16::from(d_col);
        if (0..i16::from(height)).contains(&row) && (0..i16::from(width)).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Columns beyond 'z' don't occur: board dimensions are capped at 26.
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_equality_by_value() {
        assert_eq!(Coord::new(3, 4), Coord::new(3, 4));
        assert_ne!(Coord::new(3, 4), Coord::new(4, 3));
    }

    #[test]
    fn test_offset_inside() {
        let c = Coord::new(4, 4);
        assert_eq!(c.offset(-1, 1, 8, 8), Some(Coord::new(3, 5)));
        assert_eq!(c.offset(0, -1, 8, 8), Some(Coord::new(4, 3)));
    }

    #[test]
    fn test_offset_off_board() {
        assert_eq!(Coord::new(0, 0).offset(-1, 0, 8, 8), None);
        assert_eq!(Coord::new(0, 0).offset(0, -1, 8, 8), None);
        assert_eq!(Coord::new(7, 7).offset(1, 0, 8, 8), None);
        assert_eq!(Coord::new(7, 7).offset(0, 1, 8, 8), None);
    }

    #[test]
    fn test_algebraic_display() {
        assert_eq!(format!("{}", Coord::new(0, 0)), "a1");
        assert_eq!(format!("{}", Coord::new(7, 7)), "h8");
        assert_eq!(format!("{}", Coord::new(3, 3)), "d4");
    }

    #[test]
    fn test_coord_serialization() {
        let c = Coord::new(5, 2);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
