//! Output naming, settings location and runtime defaults

/// Directory generated images are written to when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "rgb_patterns";

/// Extension of generated image files (selects the TIFF encoder)
pub const OUTPUT_EXTENSION: &str = "tiff";

/// File name of the last-used dimensions record inside the home directory
pub const DIMENSIONS_FILE_NAME: &str = "previous_dimensions.txt";

/// Separator between width and height in the dimensions record
pub const DIMENSIONS_SEPARATOR: char = ',';

/// Answer accepted for reusing the saved dimensions
pub const REUSE_ANSWER: &str = "y";

/// Spinner redraw interval while generating and encoding
pub const SPINNER_TICK_MS: u64 = 80;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
