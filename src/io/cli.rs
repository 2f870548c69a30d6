//! Command-line interface for generating and rendering region partitions

use crate::algorithm::partition::{Partition, RegionPartitioner};
use crate::analysis::statistics::RegionStatistics;
use crate::analysis::validation::verify_partition;
use crate::io::configuration::{
    DEFAULT_CANVAS_SIZE, DEFAULT_COUNT, DEFAULT_GRID_SIZE, DEFAULT_NUM_REGIONS, DEFAULT_SEED,
    GIF_FRAME_DELAY_MS, GROWTH_SUFFIX, MAX_GRID_SIZE, MAX_VISUALIZE_GRID_SIZE,
};
use crate::io::error::{Result, invalid_parameters};
use crate::io::image::{RenderOptions, export_partition_as_png};
use crate::io::progress::ProgressManager;
use crate::io::text::format_report;
use crate::io::visualization::GrowthCapture;
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "regionfill")]
#[command(
    author,
    version,
    about = "Partition a square grid into contiguous regions by random flood fill"
)]
/// Command-line arguments for the partition tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Number of regions to generate
    #[arg(short, long, default_value_t = DEFAULT_NUM_REGIONS)]
    pub regions: usize,

    /// Side length of the square grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of partitions to generate, using consecutive seeds
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Write a PNG render to this path (indexed when count > 1)
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Side length of the rendered canvas in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_SIZE)]
    pub canvas_size: u32,

    /// Also write an animated GIF of the regions growing
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress the text report and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite images even if they already exist
    #[arg(short, long)]
    pub no_skip: bool,

    /// Print region size statistics
    #[arg(long)]
    pub stats: bool,

    /// Verify coverage and connectivity of every partition
    #[arg(long)]
    pub verify: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate argument combinations before any generation starts
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Region count or grid size is zero, or regions exceed cells
    /// - The grid size exceeds `MAX_GRID_SIZE`
    /// - Count or canvas size is zero
    /// - `--visualize` is given without `--output` or on a grid larger than
    ///   `MAX_VISUALIZE_GRID_SIZE`
    pub fn validate(&self) -> Result<RegionPartitioner> {
        if self.grid_size > MAX_GRID_SIZE {
            return Err(invalid_parameters(
                "grid_size",
                &self.grid_size,
                &format!("must not exceed {MAX_GRID_SIZE}"),
            ));
        }
        if self.count == 0 {
            return Err(invalid_parameters(
                "count",
                &self.count,
                &"at least one partition is required",
            ));
        }
        if self.canvas_size == 0 {
            return Err(invalid_parameters(
                "canvas_size",
                &self.canvas_size,
                &"canvas must be at least one pixel wide",
            ));
        }
        if self.visualize && self.output.is_none() {
            return Err(invalid_parameters(
                "visualize",
                &true,
                &"--visualize requires --output",
            ));
        }
        if self.visualize && self.grid_size > MAX_VISUALIZE_GRID_SIZE {
            return Err(invalid_parameters(
                "grid_size",
                &self.grid_size,
                &format!("--visualize supports grids up to {MAX_VISUALIZE_GRID_SIZE}"),
            ));
        }

        RegionPartitioner::new(self.regions, self.grid_size)
    }
}

/// Generates a batch of partitions and writes reports and renders
pub struct PartitionRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl PartitionRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the batch, writing text reports to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if validation, generation or any output fails
    pub fn process(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run(&mut out)
    }

    /// Run the batch, writing text reports to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if validation, generation or any output fails
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let partitioner = self.cli.validate()?;
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        for index in 0..self.cli.count {
            let seed = self.cli.seed.wrapping_add(index as u64);
            self.run_single(&partitioner, index, seed, out)?;

            if let Some(ref pm) = self.progress_manager {
                pm.complete_partition(seed);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        info!(
            "generated {} partition(s) of {} regions on a {}x{} grid in {:.2?}",
            self.cli.count,
            partitioner.num_regions(),
            partitioner.grid_size(),
            partitioner.grid_size(),
            start_time.elapsed()
        );

        Ok(())
    }

    fn run_single<W: Write>(
        &self,
        partitioner: &RegionPartitioner,
        index: usize,
        seed: u64,
        out: &mut W,
    ) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(seed);
        let image_path = self.image_path(index);
        let render_image = image_path
            .as_deref()
            .is_some_and(|path| self.should_write_image(path));

        let mut capture = (render_image && self.cli.visualize)
            .then(|| GrowthCapture::new(partitioner.grid_size()));
        let partition = match capture.as_mut() {
            Some(capture) => partitioner.partition_with_capture(&mut rng, capture)?,
            None => partitioner.partition(&mut rng)?,
        };

        self.write_text(&partition, seed, out)?;

        if let (true, Some(path)) = (render_image, image_path.as_deref()) {
            let options = RenderOptions {
                canvas_size: self.cli.canvas_size,
                ..RenderOptions::default()
            };
            export_partition_as_png(&partition, &options, path)?;
            info!("wrote {}", path.display());

            if let Some(capture) = &capture {
                let growth_path = Self::growth_path(path);
                capture.export_gif(&growth_path, GIF_FRAME_DELAY_MS)?;
                info!("wrote {}", growth_path.display());
            }
        }

        Ok(())
    }

    fn write_text<W: Write>(&self, partition: &Partition, seed: u64, out: &mut W) -> Result<()> {
        if self.cli.verify {
            verify_partition(partition)?;
        }
        if self.cli.quiet {
            return Ok(());
        }

        if self.cli.count > 1 {
            writeln!(out, "Seed {seed}")?;
        }
        write!(out, "{}", format_report(partition))?;
        if self.cli.stats {
            write!(out, "{}", RegionStatistics::from_partition(partition))?;
        }
        if self.cli.verify {
            writeln!(out, "Verified: complete partition with connected regions")?;
        }
        Ok(())
    }

    fn should_write_image(&self, path: &Path) -> bool {
        if !self.cli.skip_existing() || !path.exists() {
            return true;
        }

        // Allow print for user feedback for skipped renders
        #[allow(clippy::print_stderr)]
        if !self.cli.quiet {
            eprintln!("Skipping: {} (output exists)", path.display());
        }
        false
    }

    /// Image path for partition `index`, if rendering was requested
    ///
    /// Single runs use `--output` as given; batches insert `_<index>` before
    /// the extension.
    pub fn image_path(&self, index: usize) -> Option<PathBuf> {
        let output = self.cli.output.as_ref()?;
        if self.cli.count <= 1 {
            return Some(output.clone());
        }

        let stem = output.file_stem().unwrap_or_default().to_string_lossy();
        let name = match output.extension() {
            Some(extension) => format!("{stem}_{index}.{}", extension.to_string_lossy()),
            None => format!("{stem}_{index}"),
        };

        Some(output.parent().map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name)))
    }

    /// Growth animation path next to a PNG render
    pub fn growth_path(image_path: &Path) -> PathBuf {
        let stem = image_path.file_stem().unwrap_or_default();
        let growth_name = format!("{}{GROWTH_SUFFIX}.gif", stem.to_string_lossy());

        if let Some(parent) = image_path.parent() {
            parent.join(growth_name)
        } else {
            PathBuf::from(growth_name)
        }
    }
}
