//! Command-line interface for batch puzzle generation from record files

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::algorithm::generator::{GeneratorConfig, PuzzleGenerator};
use crate::io::configuration::{DEFAULT_SEED, DEFAULT_WORD_CAP, OUTPUT_SUFFIX};
use crate::io::error::{Result, target_error};
use crate::io::progress::ProgressManager;
use crate::io::records::{PuzzleDocument, load_records, write_puzzle};
use crate::io::render::render_puzzle;

#[derive(Parser)]
#[command(name = "crossweave")]
#[command(
    author,
    version,
    about = "Generate crossword puzzles from question and answer records"
)]
/// Command-line arguments for the puzzle generation tool
pub struct Cli {
    /// Input JSON record file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum words selected per puzzle
    #[arg(short, long, default_value_t = DEFAULT_WORD_CAP)]
    pub words: usize,

    /// Print each finished puzzle to stdout
    #[arg(short, long)]
    pub print: bool,

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

/// Orchestrates batch processing of record files with progress tracking
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

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("json") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(target_error(
                    &self.cli.target,
                    "Target file must be a JSON record file",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("json")
                    && !Self::is_output_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(target_error(
                &self.cli.target,
                "Target must be a JSON record file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for user feedback on dropped words and printed puzzles
    #[allow(clippy::print_stderr, clippy::print_stdout)]
    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let output_path = Self::get_output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let records = load_records(input_path)?;

        let config = GeneratorConfig {
            word_cap: self.cli.words,
            ..GeneratorConfig::default()
        };

        // Offset the seed per file so a batch run varies its layouts
        let seed = self.cli.seed.wrapping_add(index as u64);
        let mut generator = PuzzleGenerator::with_config(config, seed);
        let puzzle = generator.generate(&records);

        write_puzzle(&output_path, &PuzzleDocument::from_puzzle(&puzzle))?;

        if self.cli.print {
            println!("{}", render_puzzle(&puzzle));
        }

        if !self.cli.quiet && !puzzle.dropped.is_empty() {
            let unplaced: Vec<&str> = puzzle
                .dropped
                .iter()
                .map(|pair| pair.word.as_str())
                .collect();
            eprintln!(
                "{}: no valid placement for {}",
                input_path.display(),
                unplaced.join(", ")
            );
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(
                index,
                puzzle.words.len(),
                puzzle.words.len() + puzzle.dropped.len(),
            );
        }

        Ok(())
    }

    fn is_output_file(path: &Path) -> bool {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.json", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
