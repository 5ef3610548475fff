//! Overlapped tile decomposition and feather-blended reassembly for large raster images
//!
//! The pipeline normalizes image dimensions to a fixed granularity, plans a
//! grid of deliberately overlapping tiles, extracts them for external
//! per-tile processing, and composites the processed tiles back into one
//! seamless image by feathering the overlap bands.

#![forbid(unsafe_code)]

/// Seam blending: feather masks, compositing primitives, and the reassembly engine
pub mod blend;
/// Input/output operations, configuration defaults, and error handling
pub mod io;
/// Grid planning: traversal ordering, tile descriptors, and tile extraction
pub mod layout;
/// Raster buffers and dimension normalization
pub mod raster;

pub use io::error::{Result, TilingError};
