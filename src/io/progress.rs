//! Per-tile placement progress for a single stitching run

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Tiles: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for one stitching run
///
/// Draws to standard output so that placement lines share a stream with
/// the run summary.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Start the placement bar for the given number of tile files
    pub fn initialize(&mut self, file_count: usize) {
        let bar =
            ProgressBar::with_draw_target(Some(file_count as u64), ProgressDrawTarget::stdout());
        bar.set_style(PLACEMENT_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Report a tile painted with its top-left corner at the given offset
    pub fn tile_placed(&self, path: &Path, x: u32, y: u32) {
        if let Some(ref bar) = self.bar {
            bar.println(format!("Adding {} at ({x},{y})...", path.display()));
            bar.inc(1);
        }
    }

    /// Report a tile ignored because every grid cell is already painted
    pub fn tile_skipped(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            bar.println(format!("Skipping {} (grid is full)", path.display()));
            bar.inc(1);
        }
    }

    /// Clear the bar once every file has been visited
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
