//! CLI entry point for the crossword puzzle generation tool

use clap::Parser;
use crossweave::io::cli::{Cli, FileProcessor};

fn main() -> crossweave::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
