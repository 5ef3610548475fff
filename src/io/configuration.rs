//! Tiling constants and runtime configuration defaults

// Dimension normalization granularity
/// Dimensions must be divisible by this before tiling
pub const ALIGNMENT: usize = 8;

// Grid geometry defaults
/// Default target tile size in pixels
pub const DEFAULT_TILE_SIZE: usize = 512;

/// Default size unit granularity in pixels
pub const DEFAULT_SIZE_UNIT: usize = 64;

/// Default feather band width in pixels
pub const DEFAULT_FEATHER_WIDTH: usize = 16;

// Advisory values only; the planner derives the real counts from geometry
/// Requested row count passed to the planner
pub const DEFAULT_GRID_ROWS: usize = 3;
/// Requested column count passed to the planner
pub const DEFAULT_GRID_COLS: usize = 3;

/// Sample value used to pre-fill reassembly canvases (mid gray)
pub const PAD_FILL: f32 = 0.5;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to reassembled output filenames
pub const OUTPUT_SUFFIX: &str = "_stitched";
/// Infix added to dumped tile filenames, followed by the traversal index
pub const TILE_SUFFIX: &str = "_tile";
