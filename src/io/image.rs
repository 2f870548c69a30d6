//! PNG rendering of partitions with palette cycling and grid lines

use crate::algorithm::partition::Partition;
use crate::io::configuration::{
    BORDER_THICKNESS, DEFAULT_CANVAS_SIZE, LINE_COLOR, LINE_WIDTH, REGION_PALETTE,
};
use crate::io::error::{RegionError, Result, invalid_parameters};
use image::{Rgba, RgbaImage};
use log::debug;
use std::path::Path;

/// Layout and colour settings for static renders
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Target side length in pixels; rounded down to a whole number of cells
    pub canvas_size: u32,
    /// Thickness of the outer border in pixels
    pub border_thickness: u32,
    /// Thickness of lines between cells in pixels
    pub line_width: u32,
    /// Region colours, cycled by region id
    pub palette: Vec<[u8; 4]>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            border_thickness: BORDER_THICKNESS,
            line_width: LINE_WIDTH,
            palette: REGION_PALETTE.to_vec(),
        }
    }
}

impl RenderOptions {
    /// Colour for `region`, wrapping around the palette
    pub fn color_for(&self, region: usize) -> [u8; 4] {
        palette_color(&self.palette, region)
    }

    /// Pixel size of one cell for a `grid_size` square (never zero)
    pub fn cell_size(&self, grid_size: usize) -> u32 {
        if grid_size == 0 {
            return self.canvas_size.max(1);
        }
        (self.canvas_size / grid_size as u32).max(1)
    }

    fn validate(&self) -> Result<()> {
        if self.canvas_size == 0 {
            return Err(invalid_parameters(
                "canvas_size",
                &self.canvas_size,
                &"canvas must be at least one pixel wide",
            ));
        }
        if self.palette.is_empty() {
            return Err(invalid_parameters(
                "palette",
                &"[]",
                &"at least one colour is required",
            ));
        }
        Ok(())
    }
}

/// Colour of `region` in the default pastel palette
pub fn region_color(region: usize) -> [u8; 4] {
    palette_color(&REGION_PALETTE, region)
}

pub(crate) fn palette_color(palette: &[[u8; 4]], region: usize) -> [u8; 4] {
    if palette.is_empty() {
        return [0, 0, 0, 0];
    }
    palette
        .get(region % palette.len())
        .copied()
        .unwrap_or([0, 0, 0, 0])
}

/// Paint a `grid_size` square of `cell_size` pixel cells coloured by `color_at`
pub(crate) fn paint_cells<F>(grid_size: usize, cell_size: u32, color_at: F) -> RgbaImage
where
    F: Fn(usize, usize) -> [u8; 4],
{
    let side = grid_size as u32 * cell_size;
    RgbaImage::from_fn(side, side, |x, y| {
        let row = (y / cell_size) as usize;
        let col = (x / cell_size) as usize;
        Rgba(color_at(row, col))
    })
}

// Lines are centred on cell boundaries and clipped to the canvas
fn draw_grid_lines(img: &mut RgbaImage, grid_size: usize, cell_size: u32, options: &RenderOptions) {
    let side = img.width();
    let color = Rgba(LINE_COLOR);

    for i in 0..=grid_size as u32 {
        let thickness = if i == 0 || i == grid_size as u32 {
            options.border_thickness
        } else {
            options.line_width
        };
        if thickness == 0 {
            continue;
        }

        let center = i * cell_size;
        let start = center.saturating_sub(thickness / 2).min(side.saturating_sub(thickness));
        let end = (start + thickness).min(side);

        for band in start..end {
            for along in 0..side {
                img.put_pixel(along, band, color);
                img.put_pixel(band, along, color);
            }
        }
    }
}

/// Render a partition as an RGBA image
///
/// Each cell is filled with its region's palette colour, then grid lines are
/// drawn on top: a thick outer border and thinner lines between cells.
///
/// # Errors
///
/// Returns an error if the canvas size is zero or the palette is empty
pub fn render_partition(partition: &Partition, options: &RenderOptions) -> Result<RgbaImage> {
    options.validate()?;

    let grid_size = partition.grid_size();
    let cell_size = options.cell_size(grid_size);
    let labels = partition.grid();

    let mut img = paint_cells(grid_size, cell_size, |row, col| {
        labels
            .get([row, col])
            .map_or(LINE_COLOR, |&region| options.color_for(region))
    });
    draw_grid_lines(&mut img, grid_size, cell_size, options);

    debug!(
        "rendered {grid_size}x{grid_size} partition at {cell_size}px per cell ({}x{})",
        img.width(),
        img.height()
    );

    Ok(img)
}

/// Render a partition and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The render options are invalid
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_partition_as_png(
    partition: &Partition,
    options: &RenderOptions,
    output_path: &Path,
) -> Result<()> {
    let img = render_partition(partition, options)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| RegionError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| RegionError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
