//! Descriptor-driven tile extraction
//!
//! Copies one sub-image per planned descriptor, in traversal order, so the
//! k-th extracted tile belongs to the k-th descriptor of the plan. Tiles
//! are independent owned buffers; callers may process them in parallel.

use crate::io::error::{Result, TilingError};
use crate::layout::plan::GridSpec;
use crate::raster::buffer::Raster;

/// Extract every planned tile from the normalized image
///
/// # Errors
///
/// Returns [`TilingError::OutOfBounds`] if a descriptor rectangle exceeds
/// the image. The planner never emits such descriptors for the image it
/// was given, so this guards against mixing a plan with a different image.
pub fn extract_tiles(image: &Raster, spec: &GridSpec) -> Result<Vec<Raster>> {
    let mut tiles = Vec::with_capacity(spec.tiles.len());

    for descriptor in &spec.tiles {
        let tile = image
            .crop(descriptor.x, descriptor.y, descriptor.width, descriptor.height)
            .ok_or_else(|| TilingError::OutOfBounds {
                index: descriptor.index,
                rect: (
                    descriptor.x,
                    descriptor.y,
                    descriptor.width,
                    descriptor.height,
                ),
                bounds: (image.width(), image.height()),
            })?;
        tiles.push(tile);
    }

    Ok(tiles)
}
