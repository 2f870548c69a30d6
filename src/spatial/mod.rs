//! Spatial data structures for square grids
//!
//! This module contains spatial-related functionality including:
//! - Cell coordinates and 4-neighbour stepping
//! - The label grid used while regions grow

/// Cell coordinates and axis-aligned directions
pub mod coordinate;
/// Label grid state during flood fill
pub mod grid;

pub use coordinate::{Coordinate, Direction};
pub use grid::LabelGrid;
