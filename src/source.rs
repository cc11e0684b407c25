use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};

use crate::error::FaviconError;
use crate::targets::DEFAULT_SOURCE;

/// Pick the source image path, falling back to [`DEFAULT_SOURCE`].
pub fn resolve_source(arg: Option<PathBuf>) -> PathBuf {
    arg.unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE))
}

/// Decode the source image.
///
/// The format is detected from the file contents, not the extension.
/// A missing file is reported as [`FaviconError::SourceNotFound`] so callers
/// can tell it apart from unreadable or corrupt data.
pub fn load_source(path: &Path) -> Result<DynamicImage, FaviconError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FaviconError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => FaviconError::SourceOpen {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| FaviconError::SourceOpen {
            path: path.to_path_buf(),
            source: e,
        })?;

    reader.decode().map_err(|e| FaviconError::Decode {
        path: path.to_path_buf(),
        source: e,
    })
}
