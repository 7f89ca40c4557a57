//! Command-line interface for generating one pattern image per run

use crate::io::configuration::DEFAULT_OUTPUT_DIR;
use crate::io::error::Result;
use crate::io::image::{export_pattern, output_path};
use crate::io::progress::ProgressManager;
use crate::io::prompt::Prompter;
use crate::io::settings::{DimensionStore, Dimensions, FileDimensionStore};
use crate::pattern::{GenerationParameters, PatternMode, generate};
use clap::Parser;
use log::{info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "cellpattern")]
#[command(
    author,
    version,
    about = "Generate bordered RGB cell patterns for imaging calibration"
)]
/// Command-line arguments for the pattern generator
///
/// Any generation parameter left out is asked for interactively.
pub struct Cli {
    /// Image width in pixels
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Image height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Pattern mode, a letter from a to i or a pattern name
    #[arg(short, long, value_parser = parse_mode)]
    pub mode: Option<PatternMode>,

    /// Side length of each colored cell in pixels
    #[arg(short, long)]
    pub cell_size: Option<usize>,

    /// Black border between cells in pixels (0 to cell size)
    #[arg(short, long)]
    pub border_size: Option<usize>,

    /// Random seed for reproducible randomized patterns
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Directory generated images are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// File remembering the last used width and height
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_mode(value: &str) -> std::result::Result<PatternMode, String> {
    value.parse().map_err(|e: crate::io::error::PatternError| e.to_string())
}

impl Cli {
    /// Parameters given entirely on the command line, if all five are present
    pub const fn parameters(&self) -> Option<GenerationParameters> {
        match (
            self.width,
            self.height,
            self.mode,
            self.cell_size,
            self.border_size,
        ) {
            (Some(width), Some(height), Some(mode), Some(cell_size), Some(border_size)) => {
                Some(GenerationParameters {
                    width,
                    height,
                    cell_size,
                    border_size,
                    mode,
                })
            }
            _ => None,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Dimension store selected by `--settings`, else the home directory file
    pub fn dimension_store(&self) -> FileDimensionStore {
        self.settings
            .as_ref()
            .map_or_else(FileDimensionStore::in_home_dir, |path| {
                FileDimensionStore::new(path.clone())
            })
    }
}

/// Runs one generation: resolve parameters, generate, write the image
pub struct PatternJob {
    cli: Cli,
    store: Box<dyn DimensionStore>,
}

impl PatternJob {
    /// Create a job using the dimension store the CLI selects
    pub fn new(cli: Cli) -> Self {
        let store = Box::new(cli.dimension_store());
        Self::with_store(cli, store)
    }

    /// Create a job with an explicit dimension store
    pub fn with_store(cli: Cli, store: Box<dyn DimensionStore>) -> Self {
        Self { cli, store }
    }

    /// Run against the process terminal
    ///
    /// # Errors
    ///
    /// Returns an error if parameter collection, generation or export fails
    pub fn run(&self) -> Result<PathBuf> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run with explicit terminal streams, returning the written image path
    ///
    /// # Errors
    ///
    /// Returns an error if parameter collection, generation or export fails
    pub fn run_with<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<PathBuf> {
        let params = self.resolve_parameters(input, output)?;
        params.validate()?;

        let seed = self.cli.seed.unwrap_or_else(|| rand::rng().random());
        if params.mode.strategy().is_randomized() {
            info!("Using seed {seed} for {}", params.mode.slug());
        }
        let mut rng = StdRng::seed_from_u64(seed);

        let progress = if self.cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        let start_time = Instant::now();
        progress.stage("Generating pattern");
        let buffer = generate(&params, &mut rng);

        let path = output_path(&self.cli.output_dir, &params);
        let exported = buffer.and_then(|buffer| {
            progress.stage("Writing image");
            export_pattern(&buffer, &path)
        });
        progress.finish();
        exported?;

        info!(
            "Image saved to: {} ({:.2?})",
            path.display(),
            start_time.elapsed()
        );
        Ok(path)
    }

    fn resolve_parameters<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<GenerationParameters> {
        if let Some(params) = self.cli.parameters() {
            params.validate()?;
            let dimensions = Dimensions {
                width: params.width,
                height: params.height,
            };
            if let Err(e) = self.store.save(dimensions) {
                warn!("Could not save dimensions for next time: {e}");
            }
            return Ok(params);
        }

        Prompter::new(input, output, self.store.as_ref()).collect()
    }
}
