//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Number of regions generated when none is given
pub const DEFAULT_NUM_REGIONS: usize = 3;

/// Side length of the square grid when none is given
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Number of partitions generated per run
pub const DEFAULT_COUNT: usize = 1;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid side length
pub const MAX_GRID_SIZE: usize = 4_096;

// Rendering settings
/// Side length of the rendered PNG canvas in pixels
pub const DEFAULT_CANVAS_SIZE: u32 = 600;
/// Thickness of the outer grid border in pixels
pub const BORDER_THICKNESS: u32 = 5;
/// Thickness of the inner grid lines in pixels
pub const LINE_WIDTH: u32 = 2;
/// Grid line colour
pub const LINE_COLOR: [u8; 4] = [0, 0, 0, 255];

/// Pastel colours assigned to regions, cycled when regions outnumber entries
pub const REGION_PALETTE: [[u8; 4]; 10] = [
    [0xB5, 0xEA, 0xD7, 0xFF],
    [0xFF, 0xDA, 0xC1, 0xFF],
    [0xFF, 0x9A, 0xA2, 0xFF],
    [0xC7, 0xCE, 0xEA, 0xFF],
    [0xFF, 0xB7, 0xB2, 0xFF],
    [0xE2, 0xF0, 0xCB, 0xFF],
    [0xC1, 0xE1, 0xC1, 0xFF],
    [0xFA, 0xD2, 0xE1, 0xFF],
    [0xF9, 0xF7, 0xC9, 0xFF],
    [0xA2, 0xD2, 0xFF, 0xFF],
];

// Output settings
/// Suffix added to growth animation filenames
pub const GROWTH_SUFFIX: &str = "_growth";
/// Pixels per cell in growth animation frames
pub const GIF_CELL_SIZE: u32 = 16;
/// Largest grid that `--visualize` animates; frame count grows with the cell count
pub const MAX_VISUALIZE_GRID_SIZE: usize = 64;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Multiplier applied to the frame delay of the held final frame
pub const FINAL_FRAME_HOLD: u32 = 25;

// Progress bar display settings
/// Minimum batch size that gets a progress bar
pub const MIN_PROGRESS_BATCH: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
