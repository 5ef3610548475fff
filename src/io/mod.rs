//! Input/output operations, configuration, and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Tuning constants for tiling, blending, and output naming
pub mod configuration;
/// Error types for tiling, blending, and file operations
pub mod error;
/// PNG loading and export at the filesystem boundary
pub mod image;
/// Multi-file progress display
pub mod progress;
