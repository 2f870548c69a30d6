//! Batch progress display for multi-partition runs

use crate::io::configuration::{MIN_PROGRESS_BATCH, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Partitions: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many partitions of a batch have been generated
///
/// Single partitions finish too quickly to be worth a bar, so a bar is only
/// created once the batch reaches `MIN_PROGRESS_BATCH`.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Prepare for a batch of `total` partitions
    pub fn initialize(&mut self, total: usize) {
        self.bar = None;
        if total >= MIN_PROGRESS_BATCH {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Mark partition `seed` as done
    pub fn complete_partition(&self, seed: u64) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("seed {seed}"));
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
