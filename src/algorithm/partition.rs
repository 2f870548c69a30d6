//! Randomized multi-source flood fill over a square grid
//!
//! Seeds are drawn without replacement from a shuffled list of every cell,
//! then all regions grow together through one shared FIFO frontier. Each
//! expansion step shuffles the four directions before probing neighbours, so
//! region outlines come out irregular instead of leaning towards whichever
//! direction happens to be checked first. The first region to reach a cell
//! keeps it.
//!
//! Randomness is consumed in a fixed order: one shuffle of the full cell list,
//! then one four-element shuffle per dequeued cell. Equal seeds therefore
//! reproduce equal partitions.

use log::debug;
use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::frontier::Frontier;
use crate::io::error::{RegionError, Result, invalid_parameters};
use crate::io::visualization::GrowthCapture;
use crate::spatial::{Coordinate, Direction, LabelGrid};

/// A complete partition of a square grid into contiguous regions
///
/// Holds the same assignment in two shapes: a dense label matrix and one
/// sorted coordinate list per region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    labels: Array2<usize>,
    regions: Vec<Vec<Coordinate>>,
}

impl Partition {
    /// Dense label matrix indexed by `[row, col]`
    pub const fn grid(&self) -> &Array2<usize> {
        &self.labels
    }

    /// Label matrix as nested row vectors
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.labels.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Coordinate lists indexed by region id, each sorted by `(row, col)`
    pub fn regions(&self) -> &[Vec<Coordinate>] {
        &self.regions
    }

    /// Coordinates of a single region
    pub fn region(&self, region: usize) -> Option<&[Coordinate]> {
        self.regions.get(region).map(Vec::as_slice)
    }

    /// Region owning `coordinate`, if it lies in the grid
    pub fn label(&self, coordinate: Coordinate) -> Option<usize> {
        self.labels.get([coordinate.row, coordinate.col]).copied()
    }

    /// Side length of the partitioned grid
    pub fn grid_size(&self) -> usize {
        self.labels.nrows()
    }

    /// Number of regions
    pub fn num_regions(&self) -> usize {
        self.regions.len()
    }

    /// Split into the label matrix and the per-region coordinate lists
    pub fn into_parts(self) -> (Array2<usize>, Vec<Vec<Coordinate>>) {
        (self.labels, self.regions)
    }

    /// Assemble a partition from raw parts without checking invariants
    ///
    /// Intended for tests and tooling that need to feed hand-built or
    /// deliberately broken partitions to `analysis::validation`.
    pub const fn from_parts_unchecked(
        labels: Array2<usize>,
        regions: Vec<Vec<Coordinate>>,
    ) -> Self {
        Self { labels, regions }
    }
}

/// Validated partitioning parameters
///
/// Construction rejects impossible requests up front, so `partition` never
/// allocates a grid it cannot fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionPartitioner {
    num_regions: usize,
    grid_size: usize,
}

impl RegionPartitioner {
    /// Validate parameters for `num_regions` regions on a `grid_size` square
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `num_regions` or `grid_size` is zero (`InvalidParameters`)
    /// - `num_regions` exceeds `grid_size²` (`UnsatisfiablePartition`)
    pub fn new(num_regions: usize, grid_size: usize) -> Result<Self> {
        if num_regions == 0 {
            return Err(invalid_parameters(
                "num_regions",
                &num_regions,
                &"at least one region is required",
            ));
        }
        if grid_size == 0 {
            return Err(invalid_parameters(
                "grid_size",
                &grid_size,
                &"grid must have at least one cell",
            ));
        }

        let cell_count = grid_size
            .checked_mul(grid_size)
            .ok_or_else(|| invalid_parameters("grid_size", &grid_size, &"cell count overflows"))?;
        if num_regions > cell_count {
            return Err(RegionError::UnsatisfiablePartition {
                num_regions,
                cell_count,
            });
        }

        Ok(Self {
            num_regions,
            grid_size,
        })
    }

    /// Number of regions produced
    pub const fn num_regions(&self) -> usize {
        self.num_regions
    }

    /// Side length of the grid
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of cells to distribute
    pub const fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Partition the grid using `rng` for seed placement and tie-breaking
    ///
    /// # Errors
    ///
    /// Returns an error only if the fill leaves cells unassigned, which valid
    /// parameters rule out
    pub fn partition<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Partition> {
        self.fill(rng, |_, _| {})
    }

    /// Partition the grid while recording every claim into `capture`
    ///
    /// The capture is cleared first, then receives seeds in region order
    /// followed by expansion claims in frontier order.
    ///
    /// # Errors
    ///
    /// Returns an error if `capture` was created for a different grid size
    pub fn partition_with_capture<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        capture: &mut GrowthCapture,
    ) -> Result<Partition> {
        if capture.grid_size() != self.grid_size {
            return Err(invalid_parameters(
                "capture",
                &capture.grid_size(),
                &format!("capture grid size must equal {}", self.grid_size),
            ));
        }

        capture.clear();
        self.fill(rng, |coordinate, region| {
            capture.record_claim(coordinate, region);
        })
    }

    fn fill<R, F>(&self, rng: &mut R, mut on_claim: F) -> Result<Partition>
    where
        R: Rng + ?Sized,
        F: FnMut(Coordinate, usize),
    {
        let mut grid = LabelGrid::new(self.grid_size);
        let mut regions: Vec<Vec<Coordinate>> = vec![Vec::new(); self.num_regions];
        let mut frontier = Frontier::with_capacity(self.cell_count());

        for (region, seed) in self.select_seeds(rng).into_iter().enumerate() {
            grid.claim(seed, region);
            if let Some(cells) = regions.get_mut(region) {
                cells.push(seed);
            }
            frontier.push(seed, region);
            on_claim(seed, region);
        }

        let mut directions = Direction::ALL;
        while let Some(entry) = frontier.pop() {
            directions.shuffle(rng);
            for &direction in &directions {
                let Some(neighbor) = entry.coordinate.neighbor(direction, self.grid_size) else {
                    continue;
                };
                if !grid.claim(neighbor, entry.region) {
                    continue;
                }

                if let Some(cells) = regions.get_mut(entry.region) {
                    cells.push(neighbor);
                }
                frontier.push(neighbor, entry.region);
                on_claim(neighbor, entry.region);
            }
        }

        debug!(
            "filled {}x{} grid with {} regions",
            self.grid_size, self.grid_size, self.num_regions
        );

        let labels = grid.into_labels()?;
        for cells in &mut regions {
            cells.sort_unstable();
        }

        Ok(Partition { labels, regions })
    }

    // Shuffling the whole cell list keeps seeds distinct and uniform
    fn select_seeds<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Coordinate> {
        let mut cells: Vec<Coordinate> = Coordinate::all(self.grid_size).collect();
        cells.shuffle(rng);
        cells.truncate(self.num_regions);
        cells
    }
}

/// Partition a `grid_size` square into `num_regions` regions using `rng`
///
/// # Errors
///
/// Returns an error if the parameters are invalid or unsatisfiable
pub fn partition<R: Rng + ?Sized>(
    num_regions: usize,
    grid_size: usize,
    rng: &mut R,
) -> Result<Partition> {
    RegionPartitioner::new(num_regions, grid_size)?.partition(rng)
}

/// Partition with a fresh `StdRng` seeded from `seed`
///
/// # Errors
///
/// Returns an error if the parameters are invalid or unsatisfiable
pub fn partition_with_seed(num_regions: usize, grid_size: usize, seed: u64) -> Result<Partition> {
    partition(num_regions, grid_size, &mut StdRng::seed_from_u64(seed))
}
