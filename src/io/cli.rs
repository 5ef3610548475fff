//! Command-line interface for batch tile-and-stitch processing of PNG files

use crate::blend::cancel::CancelToken;
use crate::blend::reassemble::{Reassembler, TileSet};
use crate::io::configuration::{
    DEFAULT_FEATHER_WIDTH, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_SIZE_UNIT,
    DEFAULT_TILE_SIZE, OUTPUT_SUFFIX, TILE_SUFFIX,
};
use crate::io::error::{Result, invalid_input};
use crate::io::image::{export_png, load_png};
use crate::io::progress::ProgressManager;
use crate::layout::extract::extract_tiles;
use crate::layout::plan::plan_grid;
use crate::raster::normalize::normalize;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tileweave")]
#[command(
    author,
    version,
    about = "Split PNG images into overlapping tiles and stitch them back seamlessly"
)]
/// Command-line arguments for the tile-and-stitch tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Requested tile size in pixels before overlap extension
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: usize,

    /// Sizing granularity in pixels, also half the tile overlap
    #[arg(short = 'u', long, default_value_t = DEFAULT_SIZE_UNIT)]
    pub size_unit: usize,

    /// Feather band width in pixels for seam blending
    #[arg(short, long, default_value_t = DEFAULT_FEATHER_WIDTH)]
    pub feather: usize,

    /// Write each extracted tile beside the stitched output
    #[arg(short, long)]
    pub dump_tiles: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch tiling and reassembly of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_input("Target file must be a PNG image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_input("Target must be a PNG file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let output_path = Self::get_output_path(input_path);

        let source = load_png(input_path)?;
        let normalized = normalize(&source)?;
        let spec = plan_grid(
            normalized.width,
            normalized.height,
            DEFAULT_GRID_ROWS,
            DEFAULT_GRID_COLS,
            self.cli.tile_size,
            self.cli.size_unit,
        )?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, spec.tiles.len());
        }

        let tiles = extract_tiles(&normalized.image, &spec)?;

        for (position, (descriptor, tile)) in spec.tiles.iter().zip(&tiles).enumerate() {
            if self.cli.dump_tiles {
                let tile_path = Self::get_tile_path(input_path, descriptor.index);
                export_png(tile, &tile_path)?;
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.tile_extracted(index, position + 1);
            }
        }

        let set = TileSet::from_tiles(&spec, tiles)?;
        let mut engine = Reassembler::new(set, &spec, self.cli.feather, &CancelToken::new())?;
        while engine.step()?.is_some() {
            if let Some(ref mut pm) = self.progress_manager {
                pm.tile_stitched(index, engine.placed());
            }
        }
        let stitched = engine.finish()?;
        export_png(&stitched.image, &output_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    fn get_tile_path(input_path: &Path, slot: usize) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let tile_name = format!("{}{}_{}.png", stem.to_string_lossy(), TILE_SUFFIX, slot);

        if let Some(parent) = input_path.parent() {
            parent.join(tile_name)
        } else {
            PathBuf::from(tile_name)
        }
    }
}
