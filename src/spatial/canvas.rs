//! Output raster buffer with bounds-checked painting and PNG export

use crate::io::error::{Result, StitchError};
use crate::spatial::grid::GridLayout;
use image::{ImageFormat, RgbaImage};
use std::path::Path;

/// Full-size output raster onto which tiles are painted
///
/// The buffer is zero-initialized, so cells never covered by a tile stay
/// fully transparent in the saved PNG.
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Create a blank canvas with the given pixel dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    /// Create a blank canvas sized to hold every cell of a layout
    pub fn for_layout(layout: &GridLayout) -> Self {
        Self::new(layout.canvas_width(), layout.canvas_height())
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Paint a tile with its top-left corner at the given pixel offset
    ///
    /// Existing pixels are overwritten without blending. The painted
    /// region is clipped to the canvas bounds; a tile whose origin lies
    /// outside the canvas leaves it untouched.
    pub fn paint(&mut self, tile: &RgbaImage, x: u32, y: u32) {
        if x >= self.pixels.width() || y >= self.pixels.height() {
            return;
        }

        let cols = tile.width().min(self.pixels.width() - x);
        let rows = tile.height().min(self.pixels.height() - y);

        for ty in 0..rows {
            for tx in 0..cols {
                let pixel = *tile.get_pixel(tx, ty);
                self.pixels.put_pixel(x + tx, y + ty, pixel);
            }
        }
    }

    /// Read back one pixel as RGBA bytes, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixels.get_pixel_checked(x, y).map(|pixel| pixel.0)
    }

    /// Access the underlying raster buffer
    pub const fn as_raw(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Encode the canvas as PNG and write it to the given path
    ///
    /// The output is always PNG-encoded regardless of the path's
    /// extension. The parent directory is created if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or if
    /// encoding or writing the image fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StitchError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        self.pixels
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| StitchError::CanvasExport {
                path: path.to_path_buf(),
                source: e,
            })
    }
}
