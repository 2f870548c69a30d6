/// Shared FIFO frontier of cells awaiting expansion
pub mod frontier;
/// Seed selection, multi-source flood fill and partition views
pub mod partition;
