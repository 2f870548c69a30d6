//! Randomized multi-source flood fill partitioning of square grids
//!
//! A grid of N×N cells is split into R contiguous regions. Seeds are placed
//! uniformly at random, then every region grows at once through a shared
//! breadth-first frontier with a freshly shuffled direction order per step.
//! The result covers every cell exactly once and every region is
//! 4-connected.

#![forbid(unsafe_code)]

/// Flood fill partitioning and its frontier queue
pub mod algorithm;
/// Verification and statistics for generated partitions
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Coordinates and grid state
pub mod spatial;

pub use algorithm::partition::{Partition, RegionPartitioner, partition, partition_with_seed};
pub use io::error::{RegionError, Result};
