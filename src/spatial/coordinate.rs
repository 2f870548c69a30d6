//! Grid coordinates and 4-neighbour directions
//!
//! Coordinates are unsigned `(row, col)` pairs ordered row-major, so sorting a
//! region's cells gives the same order as sorting plain tuples.

use std::fmt;

/// Position of a cell in a square grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    /// Row index, growing downwards
    pub row: usize,
    /// Column index, growing rightwards
    pub col: usize,
}

impl Coordinate {
    /// Create a coordinate from row and column indices
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step one cell in `direction`, staying inside a `grid_size` square
    ///
    /// Returns `None` when the step would leave the grid.
    pub const fn neighbor(self, direction: Direction, grid_size: usize) -> Option<Self> {
        let (d_row, d_col) = direction.offset();
        let (Some(row), Some(col)) = (
            self.row.checked_add_signed(d_row),
            self.col.checked_add_signed(d_col),
        ) else {
            return None;
        };

        if row < grid_size && col < grid_size {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// All in-bounds 4-neighbours in `Direction::ALL` order
    pub fn neighbors(self, grid_size: usize) -> impl Iterator<Item = Self> {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(direction, grid_size))
    }

    /// Test whether two cells share an edge
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// Row-major index into a `grid_size`-wide flat buffer
    pub const fn linear_index(self, grid_size: usize) -> usize {
        self.row * grid_size + self.col
    }

    /// Every coordinate of a `grid_size` square in row-major order
    pub fn all(grid_size: usize) -> impl Iterator<Item = Self> {
        (0..grid_size).flat_map(move |row| (0..grid_size).map(move |col| Self { row, col }))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.row, coordinate.col)
    }
}

impl From<Coordinate> for [usize; 2] {
    fn from(coordinate: Coordinate) -> Self {
        [coordinate.row, coordinate.col]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Axis-aligned step between edge-adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0
    Up,
    /// Away from row 0
    Down,
    /// Towards column 0
    Left,
    /// Away from column 0
    Right,
}

impl Direction {
    /// The four directions in a fixed base order; expansion shuffles a copy
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Row and column delta of a single step
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}
