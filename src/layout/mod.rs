//! Grid planning and tile extraction
//!
//! This module contains the layout-related functionality:
//! - Edge-to-center traversal ordering
//! - Grid derivation and tile descriptors
//! - Descriptor-driven tile extraction

/// Descriptor-driven tile extraction
pub mod extract;
/// Edge-to-center traversal ordering
pub mod order;
/// Grid derivation and tile descriptors
pub mod plan;

pub use plan::{GridSpec, TileDescriptor};
