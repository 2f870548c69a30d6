//! Label grid tracking region ownership while a fill is in progress

use ndarray::Array2;

use crate::io::error::{Result, invalid_partition};
use crate::spatial::coordinate::Coordinate;

/// Square grid of optional region labels
///
/// Cells start unassigned and are claimed at most once. The grid counts
/// claims so completion can be checked without a full scan.
#[derive(Debug, Clone)]
pub struct LabelGrid {
    cells: Array2<Option<usize>>,
    size: usize,
    assigned: usize,
}

impl LabelGrid {
    /// Create a `size` × `size` grid with every cell unassigned
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), None),
            size,
            assigned: 0,
        }
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells in the grid
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Test whether every cell has been claimed
    pub const fn is_complete(&self) -> bool {
        self.assigned == self.cell_count()
    }

    /// Region owning `coordinate`, if it lies in the grid and is claimed
    pub fn get(&self, coordinate: Coordinate) -> Option<usize> {
        self.cells
            .get([coordinate.row, coordinate.col])
            .copied()
            .flatten()
    }

    /// Claim `coordinate` for `region` if it is in bounds and unclaimed
    ///
    /// Returns whether the claim succeeded. A claimed cell never changes owner.
    pub fn claim(&mut self, coordinate: Coordinate, region: usize) -> bool {
        let Some(cell) = self.cells.get_mut([coordinate.row, coordinate.col]) else {
            return false;
        };
        if cell.is_some() {
            return false;
        }

        *cell = Some(region);
        self.assigned += 1;
        true
    }

    /// Convert a complete grid into a dense label matrix
    ///
    /// # Errors
    ///
    /// Returns an error if any cell is still unassigned
    pub fn into_labels(self) -> Result<Array2<usize>> {
        if !self.is_complete() {
            return Err(invalid_partition(&format!(
                "{} of {} cells are unassigned",
                self.cell_count() - self.assigned,
                self.cell_count()
            )));
        }

        Ok(self.cells.mapv(|cell| cell.unwrap_or_default()))
    }
}
