//! Dimension alignment and center-anchored nearest-neighbor resampling
//!
//! Downstream grid planning assumes image dimensions divisible by a fixed
//! alignment. Unaligned images are scaled up to the next aligned size with
//! a nearest-neighbor resample anchored at the image center: the source is
//! first center-cropped to the target aspect ratio, then each destination
//! pixel takes the nearest source pixel under a half-pixel-centered mapping.

use crate::io::configuration::ALIGNMENT;
use crate::io::error::{Result, invalid_input};
use crate::raster::buffer::Raster;
use ndarray::Array3;

/// A normalized image together with its final dimensions
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    /// The aligned image (resampled copy, or clone of the input)
    pub image: Raster,
    /// Width after normalization
    pub width: usize,
    /// Height after normalization
    pub height: usize,
    /// Whether a resample was required
    pub resampled: bool,
}

/// Whether both dimensions are already divisible by the alignment unit
pub const fn is_aligned(width: usize, height: usize) -> bool {
    width % ALIGNMENT == 0 && height % ALIGNMENT == 0
}

/// Smallest aligned dimensions greater than or equal to the inputs
pub const fn aligned_dimensions(width: usize, height: usize) -> (usize, usize) {
    (
        width.div_ceil(ALIGNMENT) * ALIGNMENT,
        height.div_ceil(ALIGNMENT) * ALIGNMENT,
    )
}

/// Align an image's dimensions, resampling only when required
///
/// Already-aligned images are returned unchanged with `resampled = false`.
///
/// # Errors
///
/// Returns [`crate::TilingError::InvalidInput`] if the image has zero
/// width, height, or channels.
pub fn normalize(image: &Raster) -> Result<NormalizedImage> {
    if image.is_degenerate() {
        return Err(invalid_input("raster has zero width, height, or channels"));
    }

    let (width, height) = (image.width(), image.height());
    if is_aligned(width, height) {
        return Ok(NormalizedImage {
            image: image.clone(),
            width,
            height,
            resampled: false,
        });
    }

    let (new_width, new_height) = aligned_dimensions(width, height);
    Ok(NormalizedImage {
        image: resample_to(image, new_width, new_height),
        width: new_width,
        height: new_height,
        resampled: true,
    })
}

/// Nearest-neighbor resample to exact target dimensions, anchored at the center
///
/// When the target aspect ratio differs from the source, the source is
/// center-cropped to the target aspect before sampling, so content stays
/// centered rather than stretching from the top-left corner.
pub fn resample_to(image: &Raster, width: usize, height: usize) -> Raster {
    let channels = image.channels();
    if image.is_degenerate() || width == 0 || height == 0 {
        return Raster::zeros(width, height, channels);
    }

    let (src_width, src_height) = (image.width(), image.height());
    let (crop_x, crop_y) = center_crop_offsets(src_width, src_height, width, height);
    let region_width = src_width - 2 * crop_x;
    let region_height = src_height - 2 * crop_y;

    let source_xs = nearest_indices(region_width, crop_x, width);
    let source_ys = nearest_indices(region_height, crop_y, height);

    let mut data = Array3::zeros((height, width, channels));
    for (dy, &sy) in source_ys.iter().enumerate() {
        for (dx, &sx) in source_xs.iter().enumerate() {
            for c in 0..channels {
                if let (Some(src), Some(dst)) =
                    (image.data().get((sy, sx, c)), data.get_mut((dy, dx, c)))
                {
                    *dst = *src;
                }
            }
        }
    }

    Raster::from_array(data)
}

// Symmetric trim that brings the source aspect ratio to the target's
fn center_crop_offsets(
    src_width: usize,
    src_height: usize,
    dst_width: usize,
    dst_height: usize,
) -> (usize, usize) {
    let src_aspect = src_width as f64 / src_height as f64;
    let dst_aspect = dst_width as f64 / dst_height as f64;

    if src_aspect > dst_aspect {
        let trim = (src_width as f64 * (1.0 - dst_aspect / src_aspect) / 2.0).round() as usize;
        (trim.min(src_width.saturating_sub(1) / 2), 0)
    } else if src_aspect < dst_aspect {
        let trim = (src_height as f64 * (1.0 - src_aspect / dst_aspect) / 2.0).round() as usize;
        (0, trim.min(src_height.saturating_sub(1) / 2))
    } else {
        (0, 0)
    }
}

// Half-pixel-centered nearest source index for each destination index
fn nearest_indices(region_len: usize, region_offset: usize, dst_len: usize) -> Vec<usize> {
    let scale = region_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|d| {
            let nearest = ((d as f64 + 0.5) * scale).floor() as usize;
            region_offset + nearest.min(region_len.saturating_sub(1))
        })
        .collect()
}
