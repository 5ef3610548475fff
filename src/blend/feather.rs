//! Directional feather masks for seam blending
//!
//! A feather mask holds per-pixel alpha for compositing one tile over
//! already-placed neighbors. Alpha ramps linearly from 0 at the tile edge
//! to 1 across a band of configurable width, and is 1 everywhere else, so
//! the tile's overlap band fades in over the content beneath instead of
//! cutting a hard seam. One mask per blend axis is built per
//! reconstruction and reused across all seams of that orientation.

use crate::io::error::{Result, invalid_config};
use ndarray::Array2;

/// Tile-sized alpha mask ramping along one axis
#[derive(Debug, Clone)]
pub struct FeatherMask {
    data: Array2<f32>,
}

impl FeatherMask {
    /// Mask ramping along x near the left edge, uniform down each column
    ///
    /// # Errors
    ///
    /// Returns [`crate::TilingError::InvalidConfig`] unless
    /// `0 < feather_width < width`.
    pub fn vertical(width: usize, height: usize, feather_width: usize) -> Result<Self> {
        validate_band(feather_width, width, "tile width")?;
        Ok(Self {
            data: Array2::from_shape_fn((height, width), |(_, x)| ramp(x, feather_width)),
        })
    }

    /// Mask ramping along y near the top edge, uniform across each row
    ///
    /// # Errors
    ///
    /// Returns [`crate::TilingError::InvalidConfig`] unless
    /// `0 < feather_width < height`.
    pub fn horizontal(width: usize, height: usize, feather_width: usize) -> Result<Self> {
        validate_band(feather_width, height, "tile height")?;
        Ok(Self {
            data: Array2::from_shape_fn((height, width), |(y, _)| ramp(y, feather_width)),
        })
    }

    /// Mask width in pixels
    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// Mask height in pixels
    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Alpha at (x, y), or `None` outside the mask
    pub fn alpha(&self, x: usize, y: usize) -> Option<f32> {
        self.data.get((y, x)).copied()
    }

    /// Borrow the underlying alpha array
    pub const fn data(&self) -> &Array2<f32> {
        &self.data
    }
}

/// Build the vertical-band and horizontal-band masks for one tile size
///
/// # Errors
///
/// Returns [`crate::TilingError::InvalidConfig`] when `feather_width` is
/// zero or not narrower than the tile along either ramp axis.
pub fn build_feather_masks(
    tile_width: usize,
    tile_height: usize,
    feather_width: usize,
) -> Result<(FeatherMask, FeatherMask)> {
    let vertical = FeatherMask::vertical(tile_width, tile_height, feather_width)?;
    let horizontal = FeatherMask::horizontal(tile_width, tile_height, feather_width)?;
    Ok((vertical, horizontal))
}

// Zero on the edge pixel, saturating to one at the first pixel past the band
const fn ramp(position: usize, feather_width: usize) -> f32 {
    (position as f32 / feather_width as f32).min(1.0)
}

fn validate_band(feather_width: usize, axis_len: usize, axis_name: &'static str) -> Result<()> {
    if feather_width == 0 {
        return Err(invalid_config(
            "feather_width",
            &feather_width,
            "feather band must be positive",
        ));
    }
    if feather_width >= axis_len {
        return Err(invalid_config(
            "feather_width",
            &feather_width,
            &format!("feather band must be narrower than the {axis_name} ({axis_len})"),
        ));
    }
    Ok(())
}
