//! Owned floating-point image buffer shared by every pipeline stage
//!
//! Samples are stored as an `ndarray` array in `(height, width, channel)`
//! order with values normalized to [0, 1]. Buffers are value types: every
//! operation that changes pixels produces a new `Raster` rather than
//! mutating its input.

use crate::io::error::{Result, invalid_input};
use ndarray::Array3;

/// Rectangular image buffer with normalized floating-point samples
#[derive(Debug, Clone)]
pub struct Raster {
    data: Array3<f32>,
}

impl Raster {
    /// Wrap an existing `(height, width, channel)` sample array
    pub const fn from_array(data: Array3<f32>) -> Self {
        Self { data }
    }

    /// Create a buffer filled with zeros
    pub fn zeros(width: usize, height: usize, channels: usize) -> Self {
        Self {
            data: Array3::zeros((height, width, channels)),
        }
    }

    /// Create a buffer filled with a uniform sample value
    pub fn filled(width: usize, height: usize, channels: usize, value: f32) -> Self {
        Self {
            data: Array3::from_elem((height, width, channels), value),
        }
    }

    /// Create a buffer by evaluating `sample` at every (x, y, channel)
    pub fn from_fn<F>(width: usize, height: usize, channels: usize, sample: F) -> Self
    where
        F: Fn(usize, usize, usize) -> f32,
    {
        Self {
            data: Array3::from_shape_fn((height, width, channels), |(y, x, c)| sample(x, y, c)),
        }
    }

    /// Create a buffer from row-major `(y, x, channel)` samples
    ///
    /// # Errors
    ///
    /// Returns [`crate::TilingError::InvalidInput`] if the sample count does
    /// not equal `width * height * channels`.
    pub fn from_vec(
        width: usize,
        height: usize,
        channels: usize,
        samples: Vec<f32>,
    ) -> Result<Self> {
        let data = Array3::from_shape_vec((height, width, channels), samples).map_err(|err| {
            invalid_input(&format!(
                "sample buffer does not describe a {width}x{height}x{channels} raster: {err}"
            ))
        })?;
        Ok(Self { data })
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Number of channels per pixel
    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// Whether the buffer holds no pixels or no channels
    pub fn is_degenerate(&self) -> bool {
        let (height, width, channels) = self.data.dim();
        height == 0 || width == 0 || channels == 0
    }

    /// Sample at (x, y, channel), or `None` outside the buffer
    pub fn sample(&self, x: usize, y: usize, channel: usize) -> Option<f32> {
        self.data.get((y, x, channel)).copied()
    }

    /// Borrow the underlying sample array
    pub const fn data(&self) -> &Array3<f32> {
        &self.data
    }

    /// Mutably borrow the underlying sample array
    pub const fn data_mut(&mut self) -> &mut Array3<f32> {
        &mut self.data
    }

    /// Consume the buffer and return the sample array
    pub fn into_data(self) -> Array3<f32> {
        self.data
    }

    /// Copy a `width` x `height` sub-rectangle anchored at (x, y)
    ///
    /// Returns `None` when the rectangle does not fit inside the buffer.
    pub fn crop(&self, x: usize, y: usize, width: usize, height: usize) -> Option<Self> {
        let (src_height, src_width, channels) = self.data.dim();
        if x + width > src_width || y + height > src_height {
            return None;
        }

        let mut data = Array3::zeros((height, width, channels));
        for row in 0..height {
            for col in 0..width {
                for c in 0..channels {
                    if let (Some(src), Some(dst)) = (
                        self.data.get((y + row, x + col, c)),
                        data.get_mut((row, col, c)),
                    ) {
                        *dst = *src;
                    }
                }
            }
        }

        Some(Self { data })
    }
}
