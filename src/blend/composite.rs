//! Padding and compositing primitives for reassembly
//!
//! Canvases grow by fill-padding and receive tiles either by plain
//! overwrite or by mask-weighted blending. Sources that extend past the
//! destination are clipped. Mask lookups use an integer nearest mapping
//! from source coordinates, so a directional mask sized to one tile
//! stretches cleanly across a wider strip.

use crate::blend::feather::FeatherMask;
use crate::raster::buffer::Raster;
use ndarray::Array3;
use num_traits::Float;

/// Blend one sample toward `src` by `alpha`
pub fn blend_sample<T: Float>(dst: T, src: T, alpha: T) -> T {
    (src - dst).mul_add(alpha, dst)
}

/// Grow an array on any side, filling new cells with a constant
///
/// Returns a clone when every pad amount is zero. Existing samples keep
/// their relative positions, shifted by the left/top padding.
pub fn pad_array<T: Copy>(
    array: &Array3<T>,
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
    fill: T,
) -> Array3<T> {
    if left + top + right + bottom == 0 {
        return array.clone();
    }

    let (height, width, channels) = array.dim();
    let mut padded =
        Array3::from_elem((height + top + bottom, width + left + right, channels), fill);

    for row in 0..height {
        for col in 0..width {
            for c in 0..channels {
                if let (Some(src), Some(dst)) = (
                    array.get((row, col, c)),
                    padded.get_mut((row + top, col + left, c)),
                ) {
                    *dst = *src;
                }
            }
        }
    }

    padded
}

/// Fill-pad an image on any side
pub fn pad(
    image: &Raster,
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
    fill: f32,
) -> Raster {
    Raster::from_array(pad_array(image.data(), left, top, right, bottom, fill))
}

/// Overwrite `dest` with `src` anchored at (x, y), clipped to `dest`
pub fn composite(dest: &mut Raster, src: &Raster, x: usize, y: usize) {
    let (dest_height, dest_width, dest_channels) = dest.data().dim();
    let (src_height, src_width, src_channels) = src.data().dim();
    let visible_width = src_width.min(dest_width.saturating_sub(x));
    let visible_height = src_height.min(dest_height.saturating_sub(y));
    let channels = src_channels.min(dest_channels);

    let data = dest.data_mut();
    for row in 0..visible_height {
        for col in 0..visible_width {
            for c in 0..channels {
                if let (Some(s), Some(d)) = (
                    src.data().get((row, col, c)),
                    data.get_mut((y + row, x + col, c)),
                ) {
                    *d = *s;
                }
            }
        }
    }
}

/// Blend `src` over `dest` anchored at (x, y) using mask alpha, clipped
///
/// Each written sample becomes `src * alpha + dest * (1 - alpha)`. Mask
/// coordinates are mapped by integer scaling from source coordinates, so
/// masks of a different size than `src` stretch rather than truncate.
pub fn composite_masked(dest: &mut Raster, src: &Raster, x: usize, y: usize, mask: &FeatherMask) {
    let (dest_height, dest_width, dest_channels) = dest.data().dim();
    let (src_height, src_width, src_channels) = src.data().dim();
    let visible_width = src_width.min(dest_width.saturating_sub(x));
    let visible_height = src_height.min(dest_height.saturating_sub(y));
    let channels = src_channels.min(dest_channels);
    let (mask_width, mask_height) = (mask.width(), mask.height());

    let data = dest.data_mut();
    for row in 0..visible_height {
        for col in 0..visible_width {
            let mask_x = col * mask_width / src_width;
            let mask_y = row * mask_height / src_height;
            let alpha = mask.alpha(mask_x, mask_y).unwrap_or(1.0);
            for c in 0..channels {
                if let (Some(s), Some(d)) = (
                    src.data().get((row, col, c)),
                    data.get_mut((y + row, x + col, c)),
                ) {
                    *d = blend_sample(*d, *s, alpha);
                }
            }
        }
    }
}
