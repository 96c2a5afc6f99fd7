//! Input collection: turn command-line paths into a list of image files.
//!
//! Files named explicitly are taken as-is, whatever their extension: the
//! user asked for them. Directories are walked and only files whose
//! extension is listed in [`ScanConfig::extensions`] are kept. Directory
//! results are sorted by path so output order is stable across platforms.

use crate::config::ScanConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("No such file or directory: {0}")]
    NotFound(PathBuf),
}

/// Collect image files from a list of files and directories, in argument order.
pub fn collect_images(paths: &[PathBuf], config: &ScanConfig) -> Result<Vec<PathBuf>, ScanError> {
    let mut images = Vec::new();
    for path in paths {
        if path.is_dir() {
            let found = scan_directory(path, config)?;
            debug!(dir = %path.display(), count = found.len(), "scanned directory");
            images.extend(found);
        } else if path.is_file() {
            images.push(path.clone());
        } else {
            return Err(ScanError::NotFound(path.clone()));
        }
    }
    Ok(images)
}

fn scan_directory(dir: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>, ScanError> {
    let max_depth = if config.recursive { usize::MAX } else { 1 };
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(max_depth) {
        let entry = entry?;
        if entry.file_type().is_file() && is_image(entry.path(), &config.extensions) {
            entries.push(entry.into_path());
        }
    }
    entries.sort();
    Ok(entries)
}

fn is_image(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension() else {
        return false;
    };
    let ext = ext.to_string_lossy();
    extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
}
