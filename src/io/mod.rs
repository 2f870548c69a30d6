//! Input/output surface: CLI, rendering, reports and errors

/// Command-line interface and batch driver
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering of partitions
pub mod image;
/// Batch progress display
pub mod progress;
/// Plain-text partition reports
pub mod text;
/// Growth capture and GIF export
pub mod visualization;
