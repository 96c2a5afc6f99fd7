//! # img-classify
//!
//! Classify images by their natural (intrinsic) pixel dimensions and apply
//! the result as CSS class tokens.
//!
//! Two labels are derived from width and height:
//!
//! - **Format** — `landscape`, `portrait` or `square`.
//! - **Size** — `large` (either side > 1200px), `medium` (> 600px) or
//!   `small` (> 300px).
//!
//! An image gets a [`Classification`] only when both labels apply. Missing
//! or zero dimensions, and images at or below 300px on both sides, are
//! unclassified: the result is `None`, never an error.
//!
//! ```text
//! 800x600    → img-landscape img-medium
//! 1300x400   → img-landscape img-large
//! 700x700    → img-square    img-medium
//! 250x250    → (unclassified)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`classify`] | Pure classification: dimensions, format, size, combined |
//! | [`element`] | `ImageLike` / `ClassList` traits, owned and JSON-backed elements |
//! | [`batch`] | Applies class tokens to sequences of elements |
//! | [`document`] | JSON element documents for the `apply` command |
//! | [`imaging`] | Reads natural dimensions from image files (header only) |
//! | [`scan`] | Collects image files from command-line paths |
//! | [`config`] | `config.toml` loading, merging and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Classifier, Many Element Shapes
//!
//! The classifier only sees the [`ImageLike`] trait. DOM-shaped values,
//! untyped JSON entries and files on disk all implement it, so there is one
//! set of rules with no per-source variants.
//!
//! ## Absent Is Not an Error
//!
//! Unclassifiable input yields `None`. Batch application then either leaves
//! the element alone ([`AbsentPolicy::Skip`], the default) or reproduces the
//! `img-undefined` token older browser scripts produced
//! ([`AbsentPolicy::Legacy`]).
//!
//! ## Zero Means Missing
//!
//! A zero width or height is treated exactly like a missing one. A browser
//! reports `0` for images that haven't loaded, and classifying those as
//! anything would be wrong.

pub mod batch;
pub mod classify;
pub mod config;
pub mod document;
pub mod element;
pub mod imaging;
pub mod output;
pub mod scan;

pub use batch::{
    AbsentPolicy, ApplyOptions, BatchReport, Outcome, classify_document, classify_images,
};
pub use classify::{
    Classification, Dimensions, Format, Size, classify_image, image_format, image_size,
    natural_dimensions,
};
pub use element::{ClassList, Element, ImageLike, JsonElement};
