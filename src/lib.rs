//! Map tile stitching for composing a fixed grid of tile images into a single PNG
//!
//! The system lists tile files from a directory, paints each one onto a
//! shared canvas left to right, top to bottom, and writes the finished
//! composite once at the end of the run.

#![forbid(unsafe_code)]

/// Input/output operations, CLI orchestration, and error handling
pub mod io;
/// Grid geometry and canvas management
pub mod spatial;
/// Sequential tile placement onto the output canvas
pub mod stitch;

pub use io::error::{Result, StitchError};
