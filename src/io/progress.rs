//! Progress tracking for batch script execution

use std::path::Path;
use std::sync::LazyLock;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::io::configuration::REPORT_LINE_INTERVAL;

/// Coordinates progress display for batch script runs
///
/// Shows a batch bar tracking scripts when more than one is queued, and a
/// line bar tracking execution within the current script
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    line_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static LINE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len} lines")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Scripts: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            line_bar: None,
        }
    }

    /// Initialize progress display for a batch of scripts
    pub fn initialize(&mut self, script_count: usize) {
        // A lone script needs no batch-level bar
        if script_count > 1 {
            let batch_bar = ProgressBar::new(script_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Begin tracking a script with a known line count
    pub fn start_script(&mut self, path: &Path, line_count: usize) {
        if let Some(old) = self.line_bar.take() {
            old.finish_and_clear();
        }

        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let bar = ProgressBar::new(line_count as u64);
        bar.set_style(LINE_STYLE.clone());
        bar.set_message(display_name);
        self.line_bar = Some(self.multi_progress.add(bar));
    }

    /// Report how many lines of the current script have executed
    ///
    /// Positions reach the bar every [`REPORT_LINE_INTERVAL`] lines,
    /// intermediate counts are dropped.
    pub fn update_lines(&self, executed: usize) {
        if executed % REPORT_LINE_INTERVAL != 0 {
            return;
        }
        if let Some(ref bar) = self.line_bar {
            bar.set_position(executed as u64);
        }
    }

    /// Mark the current script as completed
    pub fn complete_script(&mut self) {
        if let Some(bar) = self.line_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All scripts processed");
        }
        let _ = self.multi_progress.clear();
    }
}
