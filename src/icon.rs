//! ICO container encoding.
//!
//! Every frame is rendered from the same decoded source and stored as a
//! PNG-compressed 32-bit RGBA entry.

use std::fs;
use std::io::Cursor;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use crate::error::FaviconError;
use crate::targets::{IconSize, IconTarget};

/// Scale `image` to fit inside `size` and center it on a transparent canvas.
pub fn render_frame(image: &DynamicImage, size: IconSize) -> RgbaImage {
    let (width, height) = (size.width(), size.height());
    let scaled = image.resize(width, height, FilterType::Lanczos3).to_rgba8();

    if scaled.dimensions() == (width, height) {
        return scaled;
    }

    let mut canvas = RgbaImage::new(width, height);
    let x = (width - scaled.width()) / 2;
    let y = (height - scaled.height()) / 2;
    imageops::overlay(&mut canvas, &scaled, i64::from(x), i64::from(y));
    canvas
}

/// Encode `image` as an ICO container holding one frame per distinct size.
pub fn encode_icon(image: &DynamicImage, sizes: &[IconSize]) -> Result<Vec<u8>, FaviconError> {
    if sizes.is_empty() {
        return Err(FaviconError::NoSizes);
    }

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    let mut seen = Vec::with_capacity(sizes.len());

    for &size in sizes {
        if seen.contains(&size) {
            continue;
        }
        seen.push(size);

        let frame = render_frame(image, size);
        let icon_image = IconImage::from_rgba_data(size.width(), size.height(), frame.into_raw());
        let entry = IconDirEntry::encode_as_png(&icon_image)
            .map_err(|e| FaviconError::Encode { size, source: e })?;
        icon_dir.add_entry(entry);
    }

    let mut buffer = Cursor::new(Vec::new());
    icon_dir
        .write(&mut buffer)
        .map_err(|e| FaviconError::Encode { size: seen[0], source: e })?;
    Ok(buffer.into_inner())
}

/// Encode `image` for `target` and write it to `target.path`.
///
/// Nothing is written unless encoding succeeds.
pub fn write_icon(image: &DynamicImage, target: &IconTarget) -> Result<(), FaviconError> {
    let bytes = encode_icon(image, &target.sizes)?;
    fs::write(&target.path, bytes).map_err(|e| FaviconError::Write {
        path: target.path.clone(),
        source: e,
    })
}
