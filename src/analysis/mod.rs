//! Analysis of generated partitions

/// Region size statistics
pub mod statistics;
/// Structural verification of partitions
pub mod validation;
