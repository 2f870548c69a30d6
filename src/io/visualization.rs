//! Claim capture and GIF generation for flood fill visualization

use crate::io::configuration::{
    FINAL_FRAME_HOLD, GIF_CELL_SIZE, REGION_PALETTE, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{RegionError, Result, invalid_parameters};
use crate::io::image::{paint_cells, palette_color};
use crate::spatial::{Coordinate, LabelGrid};
use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, ImageResult};
use log::debug;
use std::io::Write;
use std::path::Path;

/// A single cell claimed by a region during flood fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimEvent {
    /// Claimed cell
    pub coordinate: Coordinate,
    /// Region that claimed it
    pub region: usize,
}

/// Records the order in which cells are claimed
///
/// Seeds appear first in region order, followed by expansion claims in
/// frontier order. Replaying the events frame by frame shows every region
/// growing outwards from its seed.
#[derive(Debug, Clone)]
pub struct GrowthCapture {
    claims: Vec<ClaimEvent>,
    grid_size: usize,
    cell_size: u32,
    palette: Vec<[u8; 4]>,
    empty_color: [u8; 4],
}

impl GrowthCapture {
    /// Capture for a `grid_size` square using the default palette
    pub fn new(grid_size: usize) -> Self {
        Self::with_palette(grid_size, REGION_PALETTE.to_vec(), GIF_CELL_SIZE)
    }

    /// The average of all palette colours is used for unclaimed cells
    pub fn with_palette(grid_size: usize, palette: Vec<[u8; 4]>, cell_size: u32) -> Self {
        let empty_color = if palette.is_empty() {
            [128, 128, 128, 255]
        } else {
            let mut sums = [0u32; 4];
            for color in &palette {
                for (sum, &channel) in sums.iter_mut().zip(color) {
                    *sum += u32::from(channel);
                }
            }

            let count = palette.len() as u32;
            sums.map(|sum| (sum / count) as u8)
        };

        Self {
            claims: Vec::with_capacity(grid_size * grid_size),
            grid_size,
            cell_size: cell_size.max(1),
            palette,
            empty_color,
        }
    }

    /// Side length of the captured grid
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Colour shown for cells not yet claimed
    pub const fn empty_color(&self) -> [u8; 4] {
        self.empty_color
    }

    /// Forget all recorded claims
    pub fn clear(&mut self) {
        self.claims.clear();
    }

    /// Records a claim of `coordinate` by `region`
    pub fn record_claim(&mut self, coordinate: Coordinate, region: usize) {
        self.claims.push(ClaimEvent { coordinate, region });
    }

    /// Returns all recorded claims in order
    pub fn claims(&self) -> &[ClaimEvent] {
        &self.claims
    }

    /// Returns the total number of claim events
    pub const fn claim_count(&self) -> usize {
        self.claims.len()
    }

    /// Export the captured growth as a GIF with automatic frame skipping
    ///
    /// Frames requested faster than viewers can show are merged: with a 20ms
    /// delay and a 50ms viewer minimum, every third claim produces a frame.
    /// The final frame is held longer so the finished partition stays visible.
    /// Frames are encoded as they are rendered, so memory stays at one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No claims were captured
    /// - A frame would be wider than the GIF format allows
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.claims.is_empty() {
            return Err(invalid_parameters(
                "capture",
                &0,
                &"no claims captured for visualization",
            ));
        }

        let frame_side = u64::try_from(self.grid_size)
            .unwrap_or(u64::MAX)
            .saturating_mul(u64::from(self.cell_size));
        if frame_side > u64::from(u16::MAX) {
            return Err(invalid_parameters(
                "capture",
                &self.grid_size,
                &format!("frames would be {frame_side}px wide, GIF allows {}", u16::MAX),
            ));
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms)
        } else {
            1
        };

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RegionError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| RegionError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = GifEncoder::new(file);
        let frame_count = self
            .encode_frames(&mut encoder, effective_delay_ms, skip_factor as usize)
            .map_err(|e| RegionError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        debug!(
            "encoded {frame_count} frames for {} claims to {}",
            self.claims.len(),
            output_path.display()
        );

        Ok(())
    }

    // Empty grid, one frame per `skip_factor` claims, then the finished grid held
    fn encode_frames<W: Write>(
        &self,
        encoder: &mut GifEncoder<W>,
        delay_ms: u32,
        skip_factor: usize,
    ) -> ImageResult<usize> {
        let skip_factor = skip_factor.max(1);
        let mut grid = LabelGrid::new(self.grid_size);
        encoder.encode_frame(self.render_frame(&grid, delay_ms))?;
        let mut frame_count = 1;

        let last = self.claims.len().saturating_sub(1);
        for (index, claim) in self.claims.iter().enumerate() {
            grid.claim(claim.coordinate, claim.region);
            if index < last && (index + 1) % skip_factor == 0 {
                encoder.encode_frame(self.render_frame(&grid, delay_ms))?;
                frame_count += 1;
            }
        }

        encoder.encode_frame(self.render_frame(&grid, delay_ms.saturating_mul(FINAL_FRAME_HOLD)))?;
        Ok(frame_count + 1)
    }

    fn render_frame(&self, grid: &LabelGrid, delay_ms: u32) -> Frame {
        let img = paint_cells(self.grid_size, self.cell_size, |row, col| {
            grid.get(Coordinate::new(row, col))
                .map_or(self.empty_color, |region| palette_color(&self.palette, region))
        });

        Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
    }
}
