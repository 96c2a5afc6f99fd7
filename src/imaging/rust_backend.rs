//! Pure Rust identify backend.
//!
//! ## Crate mapping
//!
//! | Format | Crate / function |
//! |---|---|
//! | JPEG, PNG, TIFF, WebP | `image::image_dimensions` (header only) |
//! | AVIF | `avif-parse` container metadata |
//!
//! Neither path decodes pixel data.

use super::backend::{BackendError, ImageBackend, PixelDimensions};
use image::ImageFormat;
use std::path::Path;
use std::sync::LazyLock;

/// Extensions whose header readers are compiled in.
///
/// AVIF is handled separately: `image` has no AVIF reader without a native
/// decoder, so its dimensions come from `avif-parse`.
const PHOTO_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut exts: Vec<&'static str> = PHOTO_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect();
    exts.push("avif");
    exts
});

/// Returns the image file extensions this backend can identify.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Pure Rust backend using the `image` crate ecosystem.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn is_avif(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("avif"))
}

fn unreadable(path: &Path, reason: impl std::fmt::Display) -> BackendError {
    BackendError::Unreadable {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Extract dimensions from an AVIF file's container metadata.
fn identify_avif(path: &Path) -> Result<PixelDimensions, BackendError> {
    let file_data = std::fs::read(path)?;
    let avif = avif_parse::read_avif(&mut std::io::Cursor::new(&file_data))
        .map_err(|e| unreadable(path, format!("{e:?}")))?;
    let meta = avif
        .primary_item_metadata()
        .map_err(|e| unreadable(path, format!("{e:?}")))?;
    Ok(PixelDimensions {
        width: meta.max_frame_width.get(),
        height: meta.max_frame_height.get(),
    })
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<PixelDimensions, BackendError> {
        if is_avif(path) {
            return identify_avif(path);
        }
        let (width, height) = image::image_dimensions(path).map_err(|e| unreadable(path, e))?;
        Ok(PixelDimensions { width, height })
    }
}
