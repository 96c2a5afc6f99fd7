//! Reading natural dimensions from image files.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions`, `avif-parse` for AVIF |
//! | **Classify** | [`classify_image`](crate::classify::classify_image) over [`FileImage`] |
//!
//! The module is split into:
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Files**: [`FileImage`] adapts an identified file to
//!   [`ImageLike`](crate::element::ImageLike) so it flows through the same
//!   classifier as DOM-shaped elements.

pub mod backend;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend, PixelDimensions};
pub use rust_backend::{RustBackend, supported_input_extensions};

use crate::classify::{Classification, classify_image};
use crate::element::ImageLike;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// An image file and whatever the backend could read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileImage {
    pub path: PathBuf,
    pub dimensions: Option<PixelDimensions>,
    /// Why identification failed, when it did.
    pub error: Option<String>,
}

impl FileImage {
    /// Identify a file. Failures are kept on the value rather than returned,
    /// so one unreadable file doesn't stop a batch.
    pub fn identify(backend: &impl ImageBackend, path: &Path) -> Self {
        match backend.identify(path) {
            Ok(dims) => Self {
                path: path.to_path_buf(),
                dimensions: Some(dims),
                error: None,
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not identify image");
                Self {
                    path: path.to_path_buf(),
                    dimensions: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

impl ImageLike for FileImage {
    fn natural_width(&self) -> Option<u32> {
        self.dimensions.map(|d| d.width)
    }

    fn natural_height(&self) -> Option<u32> {
        self.dimensions.map(|d| d.height)
    }
}

/// Classification result for one file, as printed by `classify --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedFile {
    pub path: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub classification: Option<Classification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&FileImage> for ClassifiedFile {
    fn from(file: &FileImage) -> Self {
        Self {
            path: file.path.display().to_string(),
            width: file.natural_width(),
            height: file.natural_height(),
            classification: classify_image(file),
            error: file.error.clone(),
        }
    }
}

/// Identify and classify each file, in order.
pub fn classify_files(backend: &impl ImageBackend, paths: &[PathBuf]) -> Vec<ClassifiedFile> {
    paths
        .iter()
        .map(|path| ClassifiedFile::from(&FileImage::identify(backend, path)))
        .collect()
}
