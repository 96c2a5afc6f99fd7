//! Configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table, the user file is merged on top, and the result
//! is deserialized and validated.
//!
//! ## Config File Location
//!
//! `img-classify` looks for `config.toml` in the current directory, or uses
//! the file given with `--config`. A missing default file means stock
//! defaults; a missing `--config` file is an error.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [classes]
//! prefix = "img-"           # Class token prefix: img-landscape, img-medium
//! absent = "skip"           # Unclassifiable elements: "skip" or "legacy"
//!
//! [scan]
//! extensions = ["jpg", "jpeg", "png", "tif", "tiff", "webp", "avif"]
//! recursive = true          # Descend into subdirectories
//! ```
//!
//! The size thresholds (300/600/1200 px) are not configurable.
//! Unknown keys are rejected to catch typos early.

use crate::batch::{AbsentPolicy, ApplyOptions, DEFAULT_PREFIX};
use crate::imaging::supported_input_extensions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up when no explicit config path is given.
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Class token rendering.
    pub classes: ClassesConfig,
    /// Which files `classify` picks up from directories.
    pub scan: ScanConfig,
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.classes.prefix.is_empty() {
            return Err(ConfigError::Validation(
                "classes.prefix must not be empty".into(),
            ));
        }
        if self.classes.prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(
                "classes.prefix must not contain whitespace".into(),
            ));
        }
        if self.scan.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "scan.extensions must not be empty".into(),
            ));
        }
        if let Some(bad) = self
            .scan
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err(ConfigError::Validation(format!(
                "scan.extensions entries are bare extensions without a dot, got {bad:?}"
            )));
        }
        Ok(())
    }

    /// Batch options derived from the `[classes]` section.
    pub fn apply_options(&self) -> ApplyOptions {
        ApplyOptions {
            prefix: self.classes.prefix.clone(),
            absent: self.classes.absent,
        }
    }
}

/// Class token settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassesConfig {
    /// Prepended to every label (`img-` → `img-portrait`).
    pub prefix: String,
    /// What to do with elements that have no classification.
    pub absent: AbsentPolicy,
}

impl Default for ClassesConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            absent: AbsentPolicy::default(),
        }
    }
}

/// Directory scanning settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// File extensions treated as images (case-insensitive, no dot).
    pub extensions: Vec<String>,
    /// Whether directories are walked recursively.
    pub recursive: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: supported_input_extensions()
                .iter()
                .map(|e| e.to_string())
                .collect(),
            recursive: true,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(Config::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<Config, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: Config = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `config.toml` from a directory, falling back to stock defaults when
/// the directory has none.
pub fn load_config(dir: &Path) -> Result<Config, ConfigError> {
    let overlay = load_raw_config(&dir.join(CONFIG_FILE_NAME))?;
    resolve_config(stock_defaults_value(), overlay)
}

/// Load an explicitly named config file. The file must exist.
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let overlay: toml::Value = toml::from_str(&content)?;
    resolve_config(stock_defaults_value(), Some(overlay))
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# img-classify Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.
#
# Size buckets are fixed: an image is "large" when either side exceeds
# 1200px, "medium" above 600px, "small" above 300px. Images at or below
# 300px on both sides get no size label and are left unclassified.

# ---------------------------------------------------------------------------
# Class tokens
# ---------------------------------------------------------------------------
[classes]
# Prefix for every class token: <prefix><label>, e.g. img-landscape.
prefix = "img-"

# Elements without a classification (missing/zero dimensions, or too small):
#   "skip"   - leave the element's classes untouched
#   "legacy" - add <prefix>undefined, as older browser scripts did
absent = "skip"

# ---------------------------------------------------------------------------
# Directory scanning (classify command)
# ---------------------------------------------------------------------------
[scan]
# File extensions treated as images (case-insensitive).
extensions = ["jpg", "jpeg", "png", "tif", "tiff", "webp", "avif"]

# Descend into subdirectories.
recursive = true
"##
}
