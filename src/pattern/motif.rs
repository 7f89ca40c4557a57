//! Repeating color grids and the strategies that build them
//!
//! Fixed motifs are small constant grids tiled by wrapping indices. Randomized
//! motifs are drawn once per generation and sized to the whole tile grid, so
//! every tile gets its own independent color.

use ndarray::{Array2, arr2};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::pattern::palette::{BLACK, BLUE, Color, GREEN, PALETTE, RED, random_color};

/// Minimal repeating grid of colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    cells: Array2<Color>,
}

impl Motif {
    /// Wrap a color grid as a motif
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has no rows or no columns
    pub fn new(cells: Array2<Color>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 {
            return Err(invalid_parameter(
                "motif",
                &format!("{rows}x{cols}"),
                &"motif must contain at least one cell",
            ));
        }
        Ok(Self { cells })
    }

    /// Build a motif from row-major colors
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` does not hold exactly `rows * cols` entries
    /// or either dimension is zero
    pub fn from_row_major(rows: usize, cols: usize, colors: Vec<Color>) -> Result<Self> {
        let cells = Array2::from_shape_vec((rows, cols), colors)
            .map_err(|e| computation_error("motif reshape", &e))?;
        Self::new(cells)
    }

    /// 2x2 Bayer-like mosaic
    pub fn bayer() -> Self {
        Self {
            cells: arr2(&[[GREEN, RED], [BLUE, GREEN]]),
        }
    }

    /// Two identical red, green, blue rows
    pub fn rgb_rows() -> Self {
        Self {
            cells: arr2(&[[RED, GREEN, BLUE], [RED, GREEN, BLUE]]),
        }
    }

    /// 3x3 grid where each row shifts the palette by one
    pub fn diagonal_rgb() -> Self {
        Self {
            cells: arr2(&[
                [RED, GREEN, BLUE],
                [GREEN, BLUE, RED],
                [BLUE, RED, GREEN],
            ]),
        }
    }

    /// 3x3 custom layout
    pub fn custom_3x3() -> Self {
        Self {
            cells: arr2(&[
                [GREEN, BLUE, RED],
                [RED, BLUE, GREEN],
                [BLUE, RED, GREEN],
            ]),
        }
    }

    /// 2x6 grid with every color twice per row
    pub fn balanced_6x6() -> Self {
        Self {
            cells: arr2(&[
                [RED, GREEN, BLUE, GREEN, BLUE, RED],
                [GREEN, BLUE, RED, BLUE, RED, GREEN],
            ]),
        }
    }

    /// Number of motif rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of motif columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Color of the tile at (`row`, `col`), wrapping around the motif
    pub fn color_at(&self, row: usize, col: usize) -> Color {
        self.cells
            .get([row % self.rows(), col % self.cols()])
            .copied()
            .unwrap_or(BLACK)
    }
}

/// How a pattern mode turns the tile grid into a motif
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MotifStrategy {
    /// Constant grid tiled across the canvas
    Fixed(Motif),
    /// Independent uniform draws, generated as one flat batch
    RandomUniform,
    /// Independent uniform draws, generated cell by cell
    RandomPerCell,
    /// Equal color counts in shuffled positions
    RandomEqualShuffle,
}

impl MotifStrategy {
    /// Produce the motif for a grid of `tile_rows` x `tile_cols` tiles
    ///
    /// Only the randomized strategies consume `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile grid is empty
    pub fn build<R: Rng>(&self, tile_rows: usize, tile_cols: usize, rng: &mut R) -> Result<Motif> {
        match self {
            Self::Fixed(motif) => Ok(motif.clone()),
            Self::RandomUniform => uniform_motif(tile_rows, tile_cols, rng),
            Self::RandomPerCell => per_cell_motif(tile_rows, tile_cols, rng),
            Self::RandomEqualShuffle => equal_shuffle_motif(tile_rows, tile_cols, rng),
        }
    }

    /// Whether the strategy draws from the random source
    pub const fn is_randomized(&self) -> bool {
        !matches!(self, Self::Fixed(_))
    }
}

fn tile_total(tile_rows: usize, tile_cols: usize) -> Result<usize> {
    tile_rows.checked_mul(tile_cols).ok_or_else(|| {
        invalid_parameter(
            "tile grid",
            &format!("{tile_rows}x{tile_cols}"),
            &"tile count overflows",
        )
    })
}

fn uniform_motif<R: Rng>(tile_rows: usize, tile_cols: usize, rng: &mut R) -> Result<Motif> {
    let total = tile_total(tile_rows, tile_cols)?;
    let flat: Vec<Color> = (0..total).map(|_| random_color(rng)).collect();
    Motif::from_row_major(tile_rows, tile_cols, flat)
}

fn per_cell_motif<R: Rng>(tile_rows: usize, tile_cols: usize, rng: &mut R) -> Result<Motif> {
    let mut colors = Vec::with_capacity(tile_total(tile_rows, tile_cols)?);
    for _row in 0..tile_rows {
        for _col in 0..tile_cols {
            colors.push(random_color(rng));
        }
    }
    Motif::from_row_major(tile_rows, tile_cols, colors)
}

// Remainder slots take palette colors in order so counts differ by at most one
fn equal_shuffle_motif<R: Rng>(tile_rows: usize, tile_cols: usize, rng: &mut R) -> Result<Motif> {
    let total = tile_total(tile_rows, tile_cols)?;
    let per_color = total / PALETTE.len();

    let mut flat = Vec::with_capacity(total);
    for color in PALETTE {
        flat.extend(std::iter::repeat_n(color, per_color));
    }
    flat.extend(PALETTE.iter().take(total % PALETTE.len()));

    flat.shuffle(rng);
    Motif::from_row_major(tile_rows, tile_cols, flat)
}
