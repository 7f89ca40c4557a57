//! Last-used image dimensions, remembered between runs

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::io::configuration::{DIMENSIONS_FILE_NAME, DIMENSIONS_SEPARATOR};
use crate::io::error::{PatternError, Result};

/// Width and height pair in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

/// Storage for the most recently used dimensions
pub trait DimensionStore {
    /// Load the saved dimensions, `None` if nothing was saved yet
    ///
    /// # Errors
    ///
    /// Returns an error if the stored record cannot be read or parsed
    fn load(&self) -> Result<Option<Dimensions>>;

    /// Replace the saved dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written
    fn save(&self, dimensions: Dimensions) -> Result<()>;
}

/// Dimensions stored as `width,height` in a single-line text file
#[derive(Debug, Clone)]
pub struct FileDimensionStore {
    path: PathBuf,
}

impl FileDimensionStore {
    /// Store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the user's home directory, or the working directory if
    /// the home directory is unknown
    pub fn in_home_dir() -> Self {
        let dir = home::home_dir().unwrap_or_default();
        Self::new(dir.join(DIMENSIONS_FILE_NAME))
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str) -> Result<Dimensions> {
        let line = content.lines().next().unwrap_or_default().trim();
        let malformed = || PatternError::InvalidSettings {
            path: self.path.clone(),
            reason: format!("expected 'width{DIMENSIONS_SEPARATOR}height', found '{line}'"),
        };

        let (width, height) = line.split_once(DIMENSIONS_SEPARATOR).ok_or_else(malformed)?;
        let width = width.trim().parse::<usize>().map_err(|_parse_error| malformed())?;
        let height = height.trim().parse::<usize>().map_err(|_parse_error| malformed())?;
        if width == 0 || height == 0 {
            return Err(PatternError::InvalidSettings {
                path: self.path.clone(),
                reason: format!("saved dimensions {width}x{height} must be positive"),
            });
        }
        Ok(Dimensions { width, height })
    }
}

impl DimensionStore for FileDimensionStore {
    fn load(&self) -> Result<Option<Dimensions>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => self.parse(&content).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PatternError::FileSystem {
                path: self.path.clone(),
                operation: "read dimensions",
                source: e,
            }),
        }
    }

    fn save(&self, dimensions: Dimensions) -> Result<()> {
        let record = format!(
            "{}{DIMENSIONS_SEPARATOR}{}",
            dimensions.width, dimensions.height
        );
        fs::write(&self.path, record).map_err(|e| PatternError::FileSystem {
            path: self.path.clone(),
            operation: "write dimensions",
            source: e,
        })
    }
}
