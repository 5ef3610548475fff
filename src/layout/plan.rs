//! Grid derivation and tile descriptors
//!
//! The planner turns normalized image dimensions and a tile granularity
//! into a concrete overlapping grid. Every tile shares one uniform pixel
//! size, one size-unit larger than the non-overlapping footprint, so each
//! successive tile starts one size-unit short of where plain tiling would
//! put it. The resulting overlap bands are where seams get feathered
//! during reassembly.

use crate::io::error::{Result, TilingError, invalid_config};
use crate::layout::order::edge_to_center;

/// Placement record for a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileDescriptor {
    /// Traversal index, `col * rows + row` in raster convention
    pub index: usize,
    /// Left edge in source-image pixels
    pub x: usize,
    /// Top edge in source-image pixels
    pub y: usize,
    /// Tile width in pixels
    pub width: usize,
    /// Tile height in pixels
    pub height: usize,
}

/// A planned overlapping tile grid
///
/// Descriptors are ordered by traversal (edge-to-center along both axes,
/// rows varying fastest), not by raster position.
#[derive(Debug, Clone)]
pub struct GridSpec {
    /// Tile descriptors in traversal order
    pub tiles: Vec<TileDescriptor>,
    /// Derived tile count along the x axis
    pub rows: usize,
    /// Derived tile count along the y axis
    pub cols: usize,
    /// Size units per tile side along x, before the overlap extension
    pub width_unit: usize,
    /// Size units per tile side along y, before the overlap extension
    pub height_unit: usize,
    /// Uniform tile width in pixels
    pub tile_width: usize,
    /// Uniform tile height in pixels
    pub tile_height: usize,
}

impl GridSpec {
    /// Horizontal extent of the layout: rightmost tile edge in pixels
    pub fn span_width(&self) -> usize {
        self.tiles
            .iter()
            .map(|tile| tile.x + tile.width)
            .max()
            .unwrap_or(0)
    }

    /// Vertical extent of the layout: bottommost tile edge in pixels
    pub fn span_height(&self) -> usize {
        self.tiles
            .iter()
            .map(|tile| tile.y + tile.height)
            .max()
            .unwrap_or(0)
    }

    /// Descriptor runs sharing one y offset, in traversal order
    pub fn strips(&self) -> impl Iterator<Item = &[TileDescriptor]> {
        self.tiles.chunks(self.rows.max(1))
    }
}

/// Plan an overlapping tile grid for a normalized image
///
/// The requested `_rows` and `_cols` are advisory starting values; the
/// planner always derives the actual counts from the image dimensions and
/// the tile footprint, so callers must not assume a fixed grid size from
/// their request alone.
///
/// # Errors
///
/// Returns [`TilingError::InvalidConfig`] when `size_unit` is zero or
/// `tile_size` is smaller than one size unit, and
/// [`TilingError::GridTooSmall`] when the image cannot hold a single
/// overlapped tile along either axis.
pub fn plan_grid(
    width: usize,
    height: usize,
    _rows: usize,
    _cols: usize,
    tile_size: usize,
    size_unit: usize,
) -> Result<GridSpec> {
    if size_unit == 0 {
        return Err(invalid_config(
            "size_unit",
            &size_unit,
            "size unit must be positive",
        ));
    }

    let unit = tile_size / size_unit;
    if unit == 0 {
        return Err(invalid_config(
            "tile_size",
            &tile_size,
            &format!("tile size must span at least one size unit ({size_unit})"),
        ));
    }

    let footprint = unit * size_unit;
    let rows = width / footprint;
    let cols = height / footprint;
    if rows == 0 || cols == 0 {
        return Err(TilingError::GridTooSmall {
            width,
            height,
            tile_size,
            size_unit,
        });
    }

    // One extra size unit per side creates the overlap band
    let tile_width = (unit + 1) * size_unit;
    let tile_height = (unit + 1) * size_unit;
    // Successive offsets advance one size unit short of the footprint
    let stride = footprint - size_unit;

    // Single-row or single-column grids can plan a tile wider than the
    // image itself; reject rather than emit out-of-bounds descriptors
    let span_width = (rows - 1) * stride + tile_width;
    let span_height = (cols - 1) * stride + tile_height;
    if span_width > width || span_height > height {
        return Err(TilingError::GridTooSmall {
            width,
            height,
            tile_size,
            size_unit,
        });
    }

    let mut tiles = Vec::with_capacity(rows * cols);
    for &col in &edge_to_center(cols) {
        for &row in &edge_to_center(rows) {
            tiles.push(TileDescriptor {
                index: col * rows + row,
                x: row * stride,
                y: col * stride,
                width: tile_width,
                height: tile_height,
            });
        }
    }

    Ok(GridSpec {
        tiles,
        rows,
        cols,
        width_unit: unit,
        height_unit: unit,
        tile_width,
        tile_height,
    })
}
