//! Batch progress tracking with automatic batching for large sets

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;

/// Per-file display state: name, words placed, words selected
type FileState = (String, usize, usize);

/// Coordinates progress display for batch puzzle generation
///
/// Small batches get one bar per file showing placed/selected words;
/// large batches collapse to a single file counter to avoid terminal
/// spam, with a rolling window of the most recent files.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_states: Vec<FileState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let bar = ProgressBar::new(0);
            bar.set_style(FILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Register a file as in progress
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = (display_name, 0, 0);
        }
        self.update_bars();
    }

    /// Mark a file as finished with its placement counts
    pub fn complete_file(&mut self, index: usize, placed: usize, selected: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = placed;
            state.2 = selected;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update the rolling window of per-file bars
    fn update_bars(&self) {
        let mut active_files = Vec::new();
        for (name, placed, selected) in &self.file_states {
            if !name.is_empty() {
                active_files.push((name.clone(), *placed, *selected));
            }
        }

        let start_idx = active_files
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_files = active_files.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (name, placed, selected)) in visible_files.iter().enumerate() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_length(*selected as u64);
                bar.set_position(*placed as u64);
                bar.set_message(format!("{placed}/{selected} words"));
                bar.set_prefix(name.clone());
            }
        }

        for bar_idx in visible_files.len()..self.file_bars.len() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
