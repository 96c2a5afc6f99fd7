//! Identify backend trait and shared types.
//!
//! The [`ImageBackend`] trait has one operation: read an image file's
//! natural dimensions without decoding its pixels.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, header
//! parsing only. Tests use `MockBackend` from this module's test submodule.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to identify {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelDimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for identify backends.
pub trait ImageBackend {
    /// Get image dimensions.
    fn identify(&self, path: &Path) -> Result<PixelDimensions, BackendError>;
}
