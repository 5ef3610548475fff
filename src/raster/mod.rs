//! Raster buffers and dimension normalization
//!
//! This module contains the image-buffer functionality:
//! - Owned floating-point raster type used across the pipeline
//! - Dimension alignment and center-anchored nearest-neighbor resampling

/// Owned floating-point image buffer
pub mod buffer;
/// Dimension alignment and nearest-neighbor resampling
pub mod normalize;

pub use buffer::Raster;
