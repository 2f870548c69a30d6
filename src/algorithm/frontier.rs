use std::collections::VecDeque;

use crate::spatial::Coordinate;

/// A claimed cell waiting to expand into its neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    /// Cell that was claimed
    pub coordinate: Coordinate,
    /// Region that claimed it
    pub region: usize,
}

/// Shared FIFO of cells pending expansion
///
/// All regions feed one queue, so cells expand in overall claim order rather
/// than region by region. This is what makes the fill grow every region
/// simultaneously.
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
}

impl Frontier {
    /// Create an empty frontier sized for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }

    /// Enqueue a freshly claimed cell
    pub fn push(&mut self, coordinate: Coordinate, region: usize) {
        self.queue.push_back(FrontierEntry { coordinate, region });
    }

    /// Dequeue the oldest pending cell
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    /// Number of pending cells
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Test if no cells are pending
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
