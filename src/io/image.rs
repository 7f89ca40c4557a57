//! Image encoding and deterministic output naming

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::io::configuration::OUTPUT_EXTENSION;
use crate::io::error::{PatternError, Result, computation_error, invalid_parameter};
use crate::pattern::{GenerationParameters, PixelBuffer};

/// File name encoding mode, dimensions, cell size and border size
pub fn output_file_name(params: &GenerationParameters) -> String {
    format!(
        "{}_{}x{}_{cell}x{cell}_border{}.{OUTPUT_EXTENSION}",
        params.mode.slug(),
        params.width,
        params.height,
        params.border_size,
        cell = params.cell_size,
    )
}

/// Full output path for `params` under `output_dir`
pub fn output_path(output_dir: &Path, params: &GenerationParameters) -> PathBuf {
    output_dir.join(output_file_name(params))
}

/// Convert a (`height`, `width`, 3) buffer into an RGB image
///
/// # Errors
///
/// Returns an error if the buffer is not three-channel or its dimensions
/// exceed what the image encoder can address
pub fn to_rgb_image(buffer: &PixelBuffer) -> Result<RgbImage> {
    let (height, width, channels) = buffer.dim();
    if channels != 3 {
        return Err(invalid_parameter(
            "channels",
            &channels,
            &"pixel buffer must be RGB",
        ));
    }
    let width = u32::try_from(width).map_err(|e| invalid_parameter("width", &width, &e))?;
    let height = u32::try_from(height).map_err(|e| invalid_parameter("height", &height, &e))?;

    // Logical iteration order is row-major regardless of memory layout
    let raw: Vec<u8> = buffer.iter().copied().collect();
    RgbImage::from_raw(width, height, raw)
        .ok_or_else(|| computation_error("image conversion", &"buffer length mismatch"))
}

/// Encode `buffer` and write it to `path`, creating parent directories
///
/// The encoder is chosen from the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The buffer cannot be converted to an RGB image
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved
pub fn export_pattern(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let img = to_rgb_image(buffer)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(path).map_err(|e| PatternError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
