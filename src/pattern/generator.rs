//! Bordered cell canvas generation with exact-size cropping
//!
//! The canvas is allocated as a whole number of tiles per axis, so it always
//! covers the requested size, and each tile paints only its cell interior.
//! Border margins keep the zero-initialized black. The result is the
//! top-left crop to the requested dimensions.

use log::debug;
use ndarray::{Array3, s};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{Result, invalid_parameter};
use crate::pattern::mode::PatternMode;

/// RGB pixel buffer indexed by (`row`, `col`, `channel`)
pub type PixelBuffer = Array3<u8>;

/// Channels per pixel
pub const CHANNELS: usize = 3;

/// Parameters describing one pattern image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParameters {
    /// Output width in pixels
    pub width: usize,
    /// Output height in pixels
    pub height: usize,
    /// Side length of each colored cell in pixels
    pub cell_size: usize,
    /// Black margin before each cell, at most `cell_size`
    pub border_size: usize,
    /// Motif selection mode
    pub mode: PatternMode,
}

impl GenerationParameters {
    /// Check every parameter against its valid range
    ///
    /// # Errors
    ///
    /// Returns an error if width, height or cell size is zero, or the border
    /// is wider than a cell
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("width", self.width),
            ("height", self.height),
            ("cell_size", self.cell_size),
        ] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
        }
        if self.border_size > self.cell_size {
            return Err(invalid_parameter(
                "border_size",
                &self.border_size,
                &format!("must be between 0 and cell_size {}", self.cell_size),
            ));
        }
        Ok(())
    }

    /// Side length of one tile, cell plus border
    pub const fn tile_span(&self) -> usize {
        self.cell_size.saturating_add(self.border_size)
    }
}

/// Tile counts and oversized canvas extent for a set of parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    /// Tiles stacked vertically
    pub rows: usize,
    /// Tiles placed horizontally
    pub cols: usize,
    /// Tile side length in pixels
    pub span: usize,
}

impl TileGrid {
    /// Size the tile grid to cover the requested image
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the oversized canvas
    /// would not fit in memory addressing
    pub fn covering(params: &GenerationParameters) -> Result<Self> {
        params.validate()?;
        let span = params
            .cell_size
            .checked_add(params.border_size)
            .ok_or_else(|| {
                invalid_parameter("cell_size", &params.cell_size, &"tile span overflows")
            })?;
        let grid = Self {
            rows: params.height.div_ceil(span),
            cols: params.width.div_ceil(span),
            span,
        };
        grid.canvas_len()?;
        Ok(grid)
    }

    /// Oversized canvas width in pixels
    pub const fn canvas_width(&self) -> usize {
        self.cols * self.span
    }

    /// Oversized canvas height in pixels
    pub const fn canvas_height(&self) -> usize {
        self.rows * self.span
    }

    fn canvas_len(&self) -> Result<usize> {
        self.rows
            .checked_mul(self.span)
            .and_then(|h| self.cols.checked_mul(self.span).and_then(|w| h.checked_mul(w)))
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or_else(|| {
                invalid_parameter(
                    "dimensions",
                    &format!("{}x{} tiles of {}px", self.cols, self.rows, self.span),
                    &"canvas size overflows",
                )
            })
    }
}

/// Generate the pattern image described by `params`
///
/// Randomized modes draw their motif from `rng`; fixed modes leave it untouched.
///
/// # Errors
///
/// Returns an error if any parameter is out of range
pub fn generate<R: Rng>(params: &GenerationParameters, rng: &mut R) -> Result<PixelBuffer> {
    let grid = TileGrid::covering(params)?;
    let motif = params.mode.strategy().build(grid.rows, grid.cols, rng)?;

    debug!(
        "Painting {}x{} tiles ({}px span) onto {}x{} canvas, motif {}x{}",
        grid.cols,
        grid.rows,
        grid.span,
        grid.canvas_width(),
        grid.canvas_height(),
        motif.rows(),
        motif.cols()
    );

    let mut canvas = PixelBuffer::zeros((grid.canvas_height(), grid.canvas_width(), CHANNELS));
    let border = params.border_size;
    let cell = params.cell_size;

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let top = row * grid.span + border;
            let left = col * grid.span + border;
            let color = motif.color_at(row, col);

            let mut interior = canvas.slice_mut(s![top..top + cell, left..left + cell, ..]);
            for (channel, &value) in color.iter().enumerate() {
                interior.slice_mut(s![.., .., channel]).fill(value);
            }
        }
    }

    Ok(canvas
        .slice(s![..params.height, ..params.width, ..])
        .to_owned())
}

/// Generate with a deterministic random source built from `seed`
///
/// # Errors
///
/// Returns an error if any parameter is out of range
pub fn generate_seeded(params: &GenerationParameters, seed: u64) -> Result<PixelBuffer> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(params, &mut rng)
}
