//! Strip-wise reconstruction of an image from its overlapped tiles
//!
//! Tiles arrive keyed by raster-order slot and are consumed strip by
//! strip, following the edge-to-center sequence the layout planner
//! emitted. The first tile of a strip seeds a fill-padded canvas; every
//! later placement is blended through a feather mask when it overlaps
//! pixels already in place, and copied verbatim when it lands on
//! untouched fill. Completed strips stack onto the output canvas under
//! the same rule along the vertical axis.
//!
//! The engine places one tile per [`Reassembler::step`] call so a shell
//! can report stitching progress between placements; [`reassemble`] is
//! the one-shot wrapper that drives the engine to completion.

use crate::blend::cancel::CancelToken;
use crate::blend::composite::{composite, composite_masked, pad};
use crate::blend::feather::{FeatherMask, build_feather_masks};
use crate::io::configuration::PAD_FILL;
use crate::io::error::{Result, invalid_input, shape_mismatch};
use crate::layout::plan::{GridSpec, TileDescriptor};
use crate::raster::buffer::Raster;
use std::collections::BTreeMap;

/// Tiles awaiting reassembly, keyed by raster-order slot
#[derive(Debug, Clone, Default)]
pub struct TileSet {
    tiles: BTreeMap<usize, Raster>,
}

impl TileSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the tile for a slot, returning any previous tile
    pub fn insert(&mut self, index: usize, tile: Raster) -> Option<Raster> {
        self.tiles.insert(index, tile)
    }

    /// Build a set from tiles listed in a layout's placement order
    ///
    /// Pairs each tile with the slot of the corresponding descriptor, so
    /// the output of tile extraction can be fed back directly.
    ///
    /// # Errors
    ///
    /// Returns `TilingError::ShapeMismatch` when the tile count differs
    /// from the layout's slot count.
    pub fn from_tiles(spec: &GridSpec, tiles: Vec<Raster>) -> Result<Self> {
        if tiles.len() != spec.tiles.len() {
            return Err(shape_mismatch(
                &format!("{} tiles", spec.tiles.len()),
                &format!("{} tiles", tiles.len()),
            ));
        }

        let mut set = Self::new();
        for (descriptor, tile) in spec.tiles.iter().zip(tiles) {
            set.insert(descriptor.index, tile);
        }
        Ok(set)
    }

    /// Number of tiles held
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the set holds no tiles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Borrow the tile for a slot, if present
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Raster> {
        self.tiles.get(&index)
    }

    /// Iterate over slots and tiles in ascending slot order
    pub fn iter(&self) -> impl Iterator<Item = (&usize, &Raster)> {
        self.tiles.iter()
    }

    fn into_map(self) -> BTreeMap<usize, Raster> {
        self.tiles
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = (&'a usize, &'a Raster);
    type IntoIter = std::collections::btree_map::Iter<'a, usize, Raster>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// A tile moved out of the working set during reassembly
#[derive(Debug, Clone)]
pub struct ConsumedTile {
    /// Raster-order slot the tile occupied
    pub index: usize,
    /// The tile's pixel data
    pub tile: Raster,
}

/// A stitched image together with the tiles that built it
#[derive(Debug, Clone)]
pub struct Reassembly {
    /// Canvas sized to the layout's span
    pub image: Raster,
    /// Tiles in the order the engine placed them
    pub consumed: Vec<ConsumedTile>,
}

/// A partially built strip awaiting its remaining tiles
struct StripCanvas {
    image: Raster,
    y: usize,
    placed: Vec<(usize, usize)>,
}

/// Stepwise reassembly engine placing one tile per call
///
/// Construction validates the tile set against the layout and builds
/// both feather masks; each [`step`](Self::step) then consumes the next
/// tile of the traversal sequence. Shells that track progress drive the
/// steps themselves; everyone else goes through [`reassemble`].
pub struct Reassembler<'a> {
    spec: &'a GridSpec,
    cancel: CancelToken,
    vertical: FeatherMask,
    horizontal: FeatherMask,
    span_width: usize,
    span_height: usize,
    remaining: BTreeMap<usize, Raster>,
    consumed: Vec<ConsumedTile>,
    canvas: Option<Raster>,
    placed_strips: Vec<(usize, usize)>,
    strip: Option<StripCanvas>,
    cursor: usize,
}

impl<'a> Reassembler<'a> {
    /// Stage a reconstruction: validate the set, build the masks
    ///
    /// # Errors
    ///
    /// Returns `TilingError::ShapeMismatch` when the set's cardinality
    /// or any tile's dimensions disagree with the layout, and
    /// `TilingError::InvalidConfig` when the feather band is zero or at
    /// least as wide as a tile axis.
    pub fn new(
        tiles: TileSet,
        spec: &'a GridSpec,
        feather_width: usize,
        cancel: &CancelToken,
    ) -> Result<Self> {
        if tiles.len() != spec.tiles.len() {
            return Err(shape_mismatch(
                &format!("{} tiles", spec.tiles.len()),
                &format!("{} tiles", tiles.len()),
            ));
        }
        validate_tile_shapes(&tiles, spec)?;

        let (vertical, horizontal) =
            build_feather_masks(spec.tile_width, spec.tile_height, feather_width)?;

        Ok(Self {
            span_width: spec.span_width(),
            span_height: spec.span_height(),
            spec,
            cancel: cancel.clone(),
            vertical,
            horizontal,
            remaining: tiles.into_map(),
            consumed: Vec::with_capacity(spec.tiles.len()),
            canvas: None,
            placed_strips: Vec::new(),
            strip: None,
            cursor: 0,
        })
    }

    /// Number of tiles placed so far
    #[must_use]
    pub const fn placed(&self) -> usize {
        self.consumed.len()
    }

    /// Total number of tiles the layout expects
    #[must_use]
    pub const fn tile_count(&self) -> usize {
        self.spec.tiles.len()
    }

    /// Place the next tile of the traversal sequence
    ///
    /// Commits the working strip to the canvas whenever the sequence
    /// crosses a strip boundary, and again after the final tile.
    /// Returns the slot just placed, or `None` once every tile has been
    /// consumed.
    ///
    /// # Errors
    ///
    /// Returns `TilingError::Cancelled` when the token fires and
    /// `TilingError::ShapeMismatch` when no tile is keyed to the slot
    /// the sequence expects.
    pub fn step(&mut self) -> Result<Option<usize>> {
        let Some(&descriptor) = self.spec.tiles.get(self.cursor) else {
            return Ok(None);
        };
        self.cancel.checkpoint()?;

        // Strips are runs of `rows` descriptors sharing one y offset
        if self.cursor % self.spec.rows.max(1) == 0 {
            self.commit_strip();
            self.begin_strip(descriptor)?;
        } else {
            self.place_in_strip(descriptor)?;
        }

        self.cursor += 1;
        if self.cursor == self.spec.tiles.len() {
            self.commit_strip();
        }
        Ok(Some(descriptor.index))
    }

    /// Drive any remaining steps and return the finished reconstruction
    ///
    /// # Errors
    ///
    /// Propagates the same errors as [`Self::step`], and returns
    /// `TilingError::InvalidInput` for a layout with no tiles.
    pub fn finish(mut self) -> Result<Reassembly> {
        while self.step()?.is_some() {}

        let image = self
            .canvas
            .ok_or_else(|| invalid_input("cannot reassemble an empty tile layout"))?;
        Ok(Reassembly {
            image,
            consumed: self.consumed,
        })
    }

    /// Seed a new strip canvas from the first tile of a run
    ///
    /// The tile lands at its x offset on a canvas fill-padded to the
    /// layout's span width, reserving space for the rest of the run.
    fn begin_strip(&mut self, descriptor: TileDescriptor) -> Result<()> {
        let tile = self.take_tile(descriptor.index)?;
        let pad_right = self.span_width.saturating_sub(descriptor.x + tile.width());
        self.strip = Some(StripCanvas {
            image: pad(&tile, descriptor.x, 0, pad_right, 0, PAD_FILL),
            y: descriptor.y,
            placed: vec![(descriptor.x, descriptor.x + descriptor.width)],
        });
        self.consumed.push(ConsumedTile {
            index: descriptor.index,
            tile,
        });
        Ok(())
    }

    /// Composite one tile into the working strip
    ///
    /// Feather-masked when its rectangle overlaps a prior placement in
    /// the strip, plain overwrite when it lands on untouched fill.
    fn place_in_strip(&mut self, descriptor: TileDescriptor) -> Result<()> {
        let tile = self.take_tile(descriptor.index)?;
        if let Some(strip) = self.strip.as_mut() {
            let overlaps = strip
                .placed
                .iter()
                .any(|&(start, end)| descriptor.x < end && start < descriptor.x + descriptor.width);
            if overlaps {
                composite_masked(&mut strip.image, &tile, descriptor.x, 0, &self.vertical);
            } else {
                composite(&mut strip.image, &tile, descriptor.x, 0);
            }
            strip.placed.push((descriptor.x, descriptor.x + descriptor.width));
        }
        self.consumed.push(ConsumedTile {
            index: descriptor.index,
            tile,
        });
        Ok(())
    }

    /// Stack the finished working strip onto the output canvas
    ///
    /// The first strip becomes the canvas, fill-padded to the layout's
    /// span height; later strips follow the overlap rule vertically.
    fn commit_strip(&mut self) {
        let Some(strip) = self.strip.take() else {
            return;
        };
        let strip_height = strip.image.height();

        let Some(canvas) = self.canvas.as_mut() else {
            let pad_bottom = self.span_height.saturating_sub(strip.y + strip_height);
            self.canvas = Some(pad(&strip.image, 0, strip.y, 0, pad_bottom, PAD_FILL));
            self.placed_strips.push((strip.y, strip.y + strip_height));
            return;
        };

        let overlaps = self
            .placed_strips
            .iter()
            .any(|&(start, end)| strip.y < end && start < strip.y + strip_height);
        if overlaps {
            composite_masked(canvas, &strip.image, 0, strip.y, &self.horizontal);
        } else {
            composite(canvas, &strip.image, 0, strip.y);
        }
        self.placed_strips.push((strip.y, strip.y + strip_height));
    }

    fn take_tile(&mut self, index: usize) -> Result<Raster> {
        self.remaining.remove(&index).ok_or_else(|| {
            shape_mismatch(&format!("a tile in slot {index}"), "no tile for that slot")
        })
    }
}

/// Reassemble a full image from its tiles
///
/// Consumes the tile set, placing each tile at its descriptor's offsets
/// and feather-blending wherever placements overlap. The returned canvas
/// spans the layout's full extent; regions no tile reaches keep the
/// fill value.
///
/// # Errors
///
/// Returns `TilingError::ShapeMismatch` when the set's cardinality or
/// any tile's dimensions disagree with the layout,
/// `TilingError::InvalidConfig` when the feather band is zero or at
/// least as wide as a tile axis, `TilingError::Cancelled` when the
/// token fires, and `TilingError::InvalidInput` for an empty layout.
pub fn reassemble(
    tiles: TileSet,
    spec: &GridSpec,
    feather_width: usize,
    cancel: &CancelToken,
) -> Result<Reassembly> {
    Reassembler::new(tiles, spec, feather_width, cancel)?.finish()
}

fn validate_tile_shapes(tiles: &TileSet, spec: &GridSpec) -> Result<()> {
    let mut channels: Option<usize> = None;
    for (&index, tile) in tiles.iter() {
        if tile.width() != spec.tile_width || tile.height() != spec.tile_height {
            return Err(shape_mismatch(
                &format!(
                    "a {}x{} tile in slot {index}",
                    spec.tile_width, spec.tile_height
                ),
                &format!("{}x{}", tile.width(), tile.height()),
            ));
        }
        match channels {
            None => channels = Some(tile.channels()),
            Some(expected) if expected != tile.channels() => {
                return Err(shape_mismatch(
                    &format!("{expected} channels in slot {index}"),
                    &format!("{} channels", tile.channels()),
                ));
            }
            Some(_) => {}
        }
    }
    Ok(())
}
