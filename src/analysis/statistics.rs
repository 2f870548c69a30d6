//! Region size statistics
//!
//! Flood fill makes no attempt to balance region sizes, so these numbers are
//! descriptive only.

use std::fmt;

use crate::algorithm::partition::Partition;

/// Summary of how cells are distributed across regions
#[derive(Debug, Clone, PartialEq)]
pub struct RegionStatistics {
    /// Cell count per region, indexed by region id
    pub sizes: Vec<usize>,
    /// Size of the smallest region
    pub smallest: usize,
    /// Size of the largest region
    pub largest: usize,
    /// Mean region size
    pub mean: f64,
    /// Population standard deviation of region sizes
    pub std_dev: f64,
}

impl RegionStatistics {
    /// Collect statistics for every region of `partition`
    pub fn from_partition(partition: &Partition) -> Self {
        let sizes: Vec<usize> = partition.regions().iter().map(Vec::len).collect();
        Self::from_sizes(sizes)
    }

    /// Collect statistics from raw region sizes
    pub fn from_sizes(sizes: Vec<usize>) -> Self {
        let smallest = sizes.iter().copied().min().unwrap_or(0);
        let largest = sizes.iter().copied().max().unwrap_or(0);

        let (mean, std_dev) = if sizes.is_empty() {
            (0.0, 0.0)
        } else {
            let count = sizes.len() as f64;
            let mean = sizes.iter().sum::<usize>() as f64 / count;
            let variance = sizes
                .iter()
                .map(|&size| (size as f64 - mean).powi(2))
                .sum::<f64>()
                / count;
            (mean, variance.sqrt())
        };

        Self {
            sizes,
            smallest,
            largest,
            mean,
            std_dev,
        }
    }

    /// Total number of cells across all regions
    pub fn total_cells(&self) -> usize {
        self.sizes.iter().sum()
    }

    /// Ratio of the largest to the smallest region (1.0 when perfectly even)
    pub fn imbalance(&self) -> f64 {
        if self.smallest == 0 {
            return 0.0;
        }
        self.largest as f64 / self.smallest as f64
    }
}

impl fmt::Display for RegionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Regions: {} | Cells: {}",
            self.sizes.len(),
            self.total_cells()
        )?;
        writeln!(
            f,
            "Size min/max: {}/{} | Mean: {:.2} | Std dev: {:.2} | Imbalance: {:.2}",
            self.smallest,
            self.largest,
            self.mean,
            self.std_dev,
            self.imbalance()
        )?;
        for (region, size) in self.sizes.iter().enumerate() {
            writeln!(f, "  Region {region}: {size} cells")?;
        }
        Ok(())
    }
}
