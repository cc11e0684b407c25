use std::io;
use std::path::PathBuf;

use crate::targets::IconSize;

/// Error type for favicon generation.
#[derive(Debug, thiserror::Error)]
pub enum FaviconError {
    #[error("the provided image file was not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("could not open the image '{}': {source}", path.display())]
    SourceOpen { path: PathBuf, source: io::Error },

    #[error("could not decode the image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("invalid icon size {width}x{height} (each side must be 1..=256)")]
    InvalidSize { width: u32, height: u32 },

    #[error("no icon sizes requested")]
    NoSizes,

    #[error("failed to encode icon at size {size}: {source}")]
    Encode { size: IconSize, source: io::Error },

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl FaviconError {
    /// True for errors raised while reading the source image.
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            FaviconError::SourceNotFound { .. }
                | FaviconError::SourceOpen { .. }
                | FaviconError::Decode { .. }
        )
    }
}
