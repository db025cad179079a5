//! Command-line interface for stitching a directory of map tiles into one PNG

use crate::io::error::{Result, StitchError};
use crate::io::progress::ProgressManager;
use crate::spatial::grid::GridLayout;
use crate::stitch::executor::Stitcher;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mapstitch")]
#[command(
    author,
    version,
    about = "Create a map image by stitching together fixed-size tiles",
    after_help = "Copyright (c) 2026 David Gathercole"
)]
/// Command-line arguments for the map stitching tool
pub struct Cli {
    /// Directory containing the map tile images
    #[arg(value_name = "MAP_FILES_DIR")]
    pub map_dir: PathBuf,

    /// Path of the map image to create (PNG)
    #[arg(value_name = "OUTPUT_FILE")]
    pub output: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one stitching run with progress tracking
pub struct FileProcessor {
    cli: Cli,
    layout: GridLayout,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a file processor using the default map grid
    pub fn new(cli: Cli) -> Self {
        Self::with_layout(cli, GridLayout::default())
    }

    /// Create a file processor with a custom grid layout
    pub fn with_layout(cli: Cli, layout: GridLayout) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            layout,
            progress_manager,
        }
    }

    /// Stitch every tile file in the input directory into the output image
    ///
    /// Tiles are placed in sorted filename order, left to right and top to
    /// bottom. A shortfall of tile files is reported but not fatal; the
    /// uncovered cells stay blank. Files beyond the grid capacity are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the input directory is missing or unreadable,
    /// if any tile file cannot be decoded as an image, or if the assembled
    /// canvas cannot be written to the output path.
    // Allow print for the tile shortfall warning and the run summary
    #[allow(clippy::print_stderr, clippy::print_stdout)]
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.len() < self.layout.tile_count() {
            eprintln!(
                "warning: not enough tile files found, expecting {}; uncovered cells stay blank",
                self.layout.tile_count()
            );
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut stitcher = Stitcher::new(self.layout);

        for file in &files {
            let tile = image::open(file).map_err(|e| StitchError::TileDecode {
                path: file.clone(),
                source: e,
            })?;

            match stitcher.place(&tile.to_rgba8()) {
                Some(cell) => {
                    if let Some(ref pm) = self.progress_manager {
                        pm.tile_placed(file, cell.x, cell.y);
                    }
                }
                None => {
                    if let Some(ref pm) = self.progress_manager {
                        pm.tile_skipped(file);
                    }
                }
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        stitcher.canvas().save(&self.cli.output)?;

        if !self.cli.quiet {
            println!("Created {}", self.cli.output.display());
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if !self.cli.map_dir.is_dir() {
            return Err(StitchError::DirectoryNotFound {
                path: self.cli.map_dir.clone(),
            });
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.cli.map_dir)? {
            let path = entry?.path();
            if path.is_file() {
                files.push(path);
            }
        }

        // Platform listing order is not stable; sort for deterministic placement
        files.sort();
        Ok(files)
    }
}
