//! Pattern generation core
//!
//! This module contains the parameter-only generation logic:
//! - The RGB palette
//! - Motifs and the strategies that build them
//! - The selectable pattern modes
//! - Canvas tiling, painting and cropping

/// Canvas tiling, painting and cropping
pub mod generator;
/// Pattern mode enumeration and lookup
pub mod mode;
/// Repeating color grids and motif strategies
pub mod motif;
/// Fixed RGB palette
pub mod palette;

pub use generator::{GenerationParameters, PixelBuffer, TileGrid, generate, generate_seeded};
pub use mode::PatternMode;
