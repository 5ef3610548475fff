//! Stage-aware progress display for batch tile-and-stitch runs
//!
//! Every file gets a bar spanning both pipeline stages: the first half
//! fills while tiles are extracted, the second while they are stitched
//! back together. Large batches collapse into a files-completed bar
//! with a rolling window of per-file bars underneath.

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Stitched: [{bar:40.cyan/blue}] {pos}/{len} files")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Pipeline stage a file's bar is currently reporting
#[derive(Debug, Clone, Copy)]
enum Stage {
    /// Planned but no tile handled yet
    Queued,
    /// Cropping tiles out of the normalized image
    Extract,
    /// Compositing processed tiles back together
    Stitch,
    /// Output written
    Done,
}

/// Progress state for one file moving through the pipeline
#[derive(Debug, Clone)]
struct FileProgress {
    name: String,
    stage: Stage,
    tiles_done: usize,
    tile_count: usize,
}

impl FileProgress {
    const fn idle() -> Self {
        Self {
            name: String::new(),
            stage: Stage::Queued,
            tiles_done: 0,
            tile_count: 0,
        }
    }

    const fn started(name: String, tile_count: usize) -> Self {
        Self {
            name,
            stage: Stage::Queued,
            tiles_done: 0,
            tile_count,
        }
    }

    // Extraction fills the first half of the bar, stitching the second
    const fn position(&self) -> usize {
        match self.stage {
            Stage::Queued => 0,
            Stage::Extract => self.tiles_done,
            Stage::Stitch => self.tile_count + self.tiles_done,
            Stage::Done => 2 * self.tile_count,
        }
    }

    const fn length(&self) -> usize {
        2 * self.tile_count
    }

    fn label(&self) -> String {
        let total = self.tile_count;
        let width = total.to_string().len();
        match self.stage {
            Stage::Queued => format!("{:>width$}/{total} queued", 0),
            Stage::Extract => format!("{:>width$}/{total} extracted", self.tiles_done),
            Stage::Stitch => format!("{:>width$}/{total} stitched", self.tiles_done),
            Stage::Done => format!("{total}/{total} stitched"),
        }
    }
}

/// Tracks extraction and stitching progress across a batch of files
///
/// Small batches get one bar per file; past the bar cap a single
/// files-completed bar summarizes the batch while the per-file bars
/// follow the most recently active files.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    files: Vec<FileProgress>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Lay out bars for a batch of `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        // Summarize with a batch bar when per-file bars cannot keep up
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(FILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Register a file entering the pipeline with its planned tile count
    pub fn start_file(&mut self, index: usize, path: &Path, tile_count: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.files.len() {
            self.files.resize(index + 1, FileProgress::idle());
        }
        if let Some(file) = self.files.get_mut(index) {
            *file = FileProgress::started(name, tile_count);
        }
        self.redraw();
    }

    /// Record that `position` tiles of a file have been cropped out
    pub fn tile_extracted(&mut self, index: usize, position: usize) {
        self.advance(index, Stage::Extract, position);
    }

    /// Record that `position` tiles of a file have been composited back
    pub fn tile_stitched(&mut self, index: usize, position: usize) {
        self.advance(index, Stage::Stitch, position);
    }

    /// Mark a file's stitched output as written
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(file) = self.files.get_mut(index) {
            file.stage = Stage::Done;
            file.tiles_done = file.tile_count;
            file.name = format!("✓ {}", file.name);
        }
        self.redraw();
    }

    /// Clear every bar and leave the batch summary behind
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files stitched");
        }
        let _ = self.multi_progress.clear();
    }

    fn advance(&mut self, index: usize, stage: Stage, position: usize) {
        if let Some(file) = self.files.get_mut(index) {
            file.stage = stage;
            file.tiles_done = position.min(file.tile_count);
        }
        self.redraw();
    }

    /// Repaint the rolling window of per-file bars
    fn redraw(&self) {
        let active: Vec<&FileProgress> = self
            .files
            .iter()
            .filter(|file| !file.name.is_empty())
            .collect();
        let window_start = active.len().saturating_sub(self.file_bars.len());
        let window = active.get(window_start..).unwrap_or(&[]);

        for (bar, file) in self.file_bars.iter().zip(window) {
            bar.set_length(file.length() as u64);
            bar.set_position(file.position() as u64);
            bar.set_prefix(file.name.clone());
            bar.set_message(file.label());
        }

        // Bars past the window go blank until enough files start
        for bar in self.file_bars.iter().skip(window.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_prefix(String::new());
            bar.set_message(String::new());
        }
    }
}
