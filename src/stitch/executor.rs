//! Sequential placement of decoded tiles onto the shared canvas

use crate::spatial::canvas::Canvas;
use crate::spatial::grid::{Cell, GridLayout};
use image::RgbaImage;

/// Paints tiles onto the canvas one grid cell at a time
///
/// The cursor starts at the top-left cell and advances left to right,
/// wrapping to the next row, once per painted tile. The cursor never
/// moves past the last cell, so any number of further tiles can be
/// offered safely.
pub struct Stitcher {
    layout: GridLayout,
    canvas: Canvas,
    cursor: usize,
}

impl Stitcher {
    /// Create a stitcher with a blank canvas sized to the layout
    pub fn new(layout: GridLayout) -> Self {
        let canvas = Canvas::for_layout(&layout);
        Self {
            layout,
            canvas,
            cursor: 0,
        }
    }

    /// Paint the next tile and advance the cursor
    ///
    /// Returns the cell the tile was painted into, or `None` once every
    /// cell has been used; excess tiles are ignored and leave the canvas
    /// untouched.
    pub fn place(&mut self, tile: &RgbaImage) -> Option<Cell> {
        let cell = self.layout.cell(self.cursor)?;
        self.canvas.paint(tile, cell.x, cell.y);
        self.cursor += 1;
        Some(cell)
    }

    /// Number of tiles painted so far
    pub const fn placed(&self) -> usize {
        self.cursor
    }

    /// Grid layout driving the placement
    pub const fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Canvas in its current state
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Consume the stitcher and take ownership of the canvas
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}
