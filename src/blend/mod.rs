//! Seam blending and reassembly
//!
//! This module contains the reconstruction functionality:
//! - Directional feather masks for seam alpha ramps
//! - Padding and compositing primitives
//! - Cooperative cancellation tokens
//! - The strip-wise reassembly engine

/// Cooperative cancellation tokens
pub mod cancel;
/// Padding and compositing primitives
pub mod composite;
/// Directional feather masks
pub mod feather;
/// Strip-wise reassembly of processed tiles
pub mod reassemble;

pub use cancel::CancelToken;
pub use reassemble::{Reassembler, Reassembly, TileSet};
