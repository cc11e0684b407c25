//! Built-in favicon targets and icon size definitions

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::FaviconError;

/// Source image used when no path is given on the command line
pub const DEFAULT_SOURCE: &str = "/mnt/data/Minimalist_favicon_design_featuring_a_single_styli.png";

/// Directory the built-in targets are written to
pub const OUTPUT_DIR: &str = "/mnt/data";

/// Largest side an ICO directory entry can describe
pub const MAX_ICON_SIDE: u32 = 256;

/// Sizes embedded in the multi-size favicon
pub const FAVICON_SIZES: [IconSize; 4] = [
    IconSize { width: 16, height: 16 },
    IconSize { width: 32, height: 32 },
    IconSize { width: 48, height: 48 },
    IconSize { width: 64, height: 64 },
];

/// Single 64x64 frame
pub const SINGLE_64: [IconSize; 1] = [IconSize { width: 64, height: 64 }];

/// Pixel dimensions of one frame inside an icon container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconSize {
    width: u32,
    height: u32,
}

impl IconSize {
    pub fn new(width: u32, height: u32) -> Result<Self, FaviconError> {
        if !(1..=MAX_ICON_SIDE).contains(&width) || !(1..=MAX_ICON_SIDE).contains(&height) {
            return Err(FaviconError::InvalidSize { width, height });
        }
        Ok(IconSize { width, height })
    }

    pub fn square(side: u32) -> Result<Self, FaviconError> {
        Self::new(side, side)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An output icon file and the frame sizes it should contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    /// Where the icon is written
    pub path: PathBuf,
    /// Frame sizes, in the order they appear in the container
    pub sizes: Vec<IconSize>,
    /// Short description used in log messages (e.g. "64x64 favicon")
    pub label: String,
}

impl IconTarget {
    pub fn new(path: impl Into<PathBuf>, sizes: &[IconSize], label: &str) -> Self {
        IconTarget {
            path: path.into(),
            sizes: sizes.to_vec(),
            label: label.to_string(),
        }
    }
}

/// The three favicons written by default, rooted at [`OUTPUT_DIR`]
pub fn default_targets() -> Vec<IconTarget> {
    targets_in(Path::new(OUTPUT_DIR))
}

/// The default favicon set, rooted at `dir`
pub fn targets_in(dir: &Path) -> Vec<IconTarget> {
    vec![
        IconTarget::new(dir.join("alfe_favicon.ico"), &FAVICON_SIZES, "multi-size favicon"),
        IconTarget::new(dir.join("alfe_favicon_64x64.ico"), &SINGLE_64, "64x64 favicon"),
        IconTarget::new(
            dir.join("alfe_favicon_clean_64x64.ico"),
            &SINGLE_64,
            "additional 64x64 favicon",
        ),
    ]
}
