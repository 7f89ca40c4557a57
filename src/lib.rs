//! Bordered RGB cell pattern generation for calibrating imaging pipelines
//!
//! A pattern is a grid of square colored cells separated by black borders,
//! tiled from a fixed or randomized motif and cropped to exact dimensions.

#![deny(unsafe_code)]

/// Input/output collaborators: CLI, prompting, settings, image export and errors
pub mod io;
/// Pattern generation core: palette, motifs, modes and canvas tiling
pub mod pattern;

pub use io::error::{PatternError, Result};
pub use pattern::{GenerationParameters, PatternMode, PixelBuffer, generate, generate_seeded};
