//! Row-level progress display for map generation

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar advanced once per completed map row
///
/// Constructed hidden in quiet mode so callers never branch on it.
pub struct GenerationProgress {
    bar: Option<ProgressBar>,
}

impl GenerationProgress {
    /// Create a progress bar over `total_rows`, or a silent one when quiet
    pub fn new(total_rows: usize, quiet: bool) -> Self {
        if quiet {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(total_rows as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] Rows: [{bar:40.cyan/blue}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar: Some(bar) }
    }

    /// Record one completed row
    pub fn row_done(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
