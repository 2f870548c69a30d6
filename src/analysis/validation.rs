//! Structural verification of partitions
//!
//! Checks the properties every generated partition must have: a square label
//! matrix, labels in range, exact coverage with no overlaps, agreement between
//! the two views, and 4-connectivity of every region.

use bitvec::prelude::*;
use std::collections::VecDeque;

use crate::algorithm::partition::Partition;
use crate::io::error::{Result, invalid_partition};
use crate::spatial::Coordinate;

/// Test whether `cells` form one edge-connected group
///
/// An empty set counts as disconnected. Cells outside the `grid_size` square
/// make the set disconnected as well.
pub fn is_edge_connected(cells: &[Coordinate], grid_size: usize) -> bool {
    let Some(&start) = cells.first() else {
        return false;
    };

    let cell_count = grid_size * grid_size;
    let mut members = bitvec![0; cell_count];
    for cell in cells {
        if cell.row >= grid_size || cell.col >= grid_size {
            return false;
        }
        members.set(cell.linear_index(grid_size), true);
    }

    let mut visited = bitvec![0; cell_count];
    visited.set(start.linear_index(grid_size), true);
    let mut queue = VecDeque::from([start]);
    let mut reached = 1;

    while let Some(cell) = queue.pop_front() {
        for neighbor in cell.neighbors(grid_size) {
            let index = neighbor.linear_index(grid_size);
            let is_member = members.get(index).as_deref() == Some(&true);
            let is_visited = visited.get(index).as_deref() == Some(&true);
            if is_member && !is_visited {
                visited.set(index, true);
                reached += 1;
                queue.push_back(neighbor);
            }
        }
    }

    reached == members.count_ones()
}

/// Verify that `partition` is a complete partition into connected regions
///
/// # Errors
///
/// Returns `InvalidPartition` describing the first violated property
pub fn verify_partition(partition: &Partition) -> Result<()> {
    let grid = partition.grid();
    let (rows, cols) = grid.dim();
    if rows != cols {
        return Err(invalid_partition(&format!(
            "label grid is {rows}x{cols}, expected a square"
        )));
    }

    let grid_size = rows;
    let num_regions = partition.num_regions();

    if let Some(label) = grid.iter().find(|&&label| label >= num_regions) {
        return Err(invalid_partition(&format!(
            "label {label} is outside 0..{num_regions}"
        )));
    }

    let mut covered = bitvec![0; grid_size * grid_size];
    for (region, cells) in partition.regions().iter().enumerate() {
        if cells.is_empty() {
            return Err(invalid_partition(&format!("region {region} is empty")));
        }

        for &cell in cells {
            if partition.label(cell) != Some(region) {
                return Err(invalid_partition(&format!(
                    "cell {cell} is listed under region {region} but labelled {:?}",
                    partition.label(cell)
                )));
            }

            let index = cell.linear_index(grid_size);
            if covered.get(index).as_deref() == Some(&true) {
                return Err(invalid_partition(&format!("cell {cell} is listed twice")));
            }
            covered.set(index, true);
        }

        if !is_edge_connected(cells, grid_size) {
            return Err(invalid_partition(&format!(
                "region {region} is not edge-connected"
            )));
        }
    }

    let missing = covered.count_zeros();
    if missing > 0 {
        return Err(invalid_partition(&format!(
            "{missing} cells are not listed under any region"
        )));
    }

    Ok(())
}
