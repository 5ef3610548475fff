//! CLI entry point for the tile-and-stitch image pipeline

use clap::Parser;
use tileweave::io::cli::{Cli, FileProcessor};

fn main() -> tileweave::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
