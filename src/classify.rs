//! Pure classification functions.
//!
//! Everything here is a deterministic function of an [`ImageLike`]'s natural
//! dimensions. Nothing is cached: each call re-reads the dimensions.
//!
//! | Label | Rule |
//! |---|---|
//! | **landscape** | width > height |
//! | **portrait** | width < height |
//! | **square** | width == height |
//! | **large** | width > 1200 or height > 1200 |
//! | **medium** | width > 600 or height > 600 |
//! | **small** | width > 300 or height > 300 |
//!
//! Thresholds are exclusive and checked in the order above, so an image of
//! exactly 1200px falls through to the medium check. Images at or below
//! 300px on both axes get no size label at all; there is no "tiny" bucket.

use crate::element::ImageLike;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Either axis above this is `large`.
pub const LARGE_THRESHOLD: u32 = 1200;
/// Either axis above this is `medium`.
pub const MEDIUM_THRESHOLD: u32 = 600;
/// Either axis above this is `small`.
pub const SMALL_THRESHOLD: u32 = 300;

/// Natural dimensions as seen by the classifier.
///
/// Both fields are `Some` or both are `None`: a zero or missing axis
/// blanks out the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Dimensions {
    /// Both axes, if present.
    pub fn pair(self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }
}

/// Orientation of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Landscape,
    Portrait,
    Square,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Landscape => "landscape",
            Format::Portrait => "portrait",
            Format::Square => "square",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse size bucket of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete classification. Never partial: see [`classify_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub format: Format,
    pub size: Size,
}

/// Read the natural dimensions of an image.
///
/// Returns both axes unchanged when both are present and non-zero, otherwise
/// `{ width: None, height: None }`. A zero axis counts as missing.
pub fn natural_dimensions(image: &impl ImageLike) -> Dimensions {
    match (image.natural_width(), image.natural_height()) {
        (Some(width), Some(height)) if width > 0 && height > 0 => Dimensions {
            width: Some(width),
            height: Some(height),
        },
        _ => Dimensions::default(),
    }
}

fn format_of(dims: Dimensions) -> Option<Format> {
    let (width, height) = dims.pair()?;
    Some(match width.cmp(&height) {
        Ordering::Greater => Format::Landscape,
        Ordering::Less => Format::Portrait,
        Ordering::Equal => Format::Square,
    })
}

fn size_of(dims: Dimensions) -> Option<Size> {
    let (width, height) = dims.pair()?;
    let exceeds = |threshold: u32| width > threshold || height > threshold;

    if exceeds(LARGE_THRESHOLD) {
        Some(Size::Large)
    } else if exceeds(MEDIUM_THRESHOLD) {
        Some(Size::Medium)
    } else if exceeds(SMALL_THRESHOLD) {
        Some(Size::Small)
    } else {
        None
    }
}

/// Orientation of an image, or `None` when its dimensions are missing.
pub fn image_format(image: &impl ImageLike) -> Option<Format> {
    format_of(natural_dimensions(image))
}

/// Size bucket of an image, or `None` when its dimensions are missing or
/// it is at most 300px on both axes.
pub fn image_size(image: &impl ImageLike) -> Option<Size> {
    size_of(natural_dimensions(image))
}

/// Classify an image by orientation and size.
///
/// Returns `None` unless both labels apply.
///
/// # Examples
/// ```
/// use img_classify::{Classification, Element, Format, Size, classify_image};
///
/// let img = Element::new(800, 600);
/// assert_eq!(
///     classify_image(&img),
///     Some(Classification { format: Format::Landscape, size: Size::Medium })
/// );
///
/// // Square but too small for any size bucket.
/// assert_eq!(classify_image(&Element::new(250, 250)), None);
/// ```
pub fn classify_image(image: &impl ImageLike) -> Option<Classification> {
    let dims = natural_dimensions(image);
    let format = format_of(dims)?;
    let size = size_of(dims)?;
    Some(Classification { format, size })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    fn classified(format: Format, size: Size) -> Option<Classification> {
        Some(Classification { format, size })
    }

    // =========================================================================
    // natural_dimensions tests
    // =========================================================================

    #[test]
    fn dimensions_passed_through_when_present() {
        let dims = natural_dimensions(&Element::new(800, 600));
        assert_eq!(dims.width, Some(800));
        assert_eq!(dims.height, Some(600));
    }

    #[test]
    fn dimensions_zero_width_blanks_both() {
        let dims = natural_dimensions(&Element::new(0, 600));
        assert_eq!(dims, Dimensions::default());
    }

    #[test]
    fn dimensions_missing_height_blanks_both() {
        let img = Element {
            natural_width: Some(800),
            ..Element::default()
        };
        assert_eq!(natural_dimensions(&img), Dimensions::default());
    }

    // =========================================================================
    // image_format tests
    // =========================================================================

    #[test]
    fn format_landscape() {
        assert_eq!(image_format(&Element::new(800, 600)), Some(Format::Landscape));
    }

    #[test]
    fn format_portrait() {
        assert_eq!(image_format(&Element::new(600, 800)), Some(Format::Portrait));
    }

    #[test]
    fn format_square() {
        assert_eq!(image_format(&Element::new(250, 250)), Some(Format::Square));
    }

    #[test]
    fn format_one_pixel_difference() {
        assert_eq!(image_format(&Element::new(1001, 1000)), Some(Format::Landscape));
        assert_eq!(image_format(&Element::new(1000, 1001)), Some(Format::Portrait));
    }

    #[test]
    fn format_absent_without_dimensions() {
        assert_eq!(image_format(&Element::default()), None);
        assert_eq!(image_format(&Element::new(0, 0)), None);
    }

    // =========================================================================
    // image_size tests
    // =========================================================================

    #[test]
    fn size_large_on_either_axis() {
        assert_eq!(image_size(&Element::new(1300, 400)), Some(Size::Large));
        assert_eq!(image_size(&Element::new(400, 1300)), Some(Size::Large));
    }

    #[test]
    fn size_medium_on_either_axis() {
        assert_eq!(image_size(&Element::new(800, 600)), Some(Size::Medium));
        assert_eq!(image_size(&Element::new(100, 601)), Some(Size::Medium));
    }

    #[test]
    fn size_small_on_either_axis() {
        assert_eq!(image_size(&Element::new(301, 10)), Some(Size::Small));
        assert_eq!(image_size(&Element::new(10, 500)), Some(Size::Small));
    }

    #[test]
    fn size_thresholds_are_exclusive() {
        assert_eq!(image_size(&Element::new(1200, 1200)), Some(Size::Medium));
        assert_eq!(image_size(&Element::new(600, 600)), Some(Size::Small));
        assert_eq!(image_size(&Element::new(300, 300)), None);
    }

    #[test]
    fn size_has_no_tiny_bucket() {
        assert_eq!(image_size(&Element::new(250, 250)), None);
        assert_eq!(image_size(&Element::new(1, 1)), None);
    }

    #[test]
    fn size_absent_without_dimensions() {
        assert_eq!(image_size(&Element::new(5000, 0)), None);
    }

    // =========================================================================
    // classify_image tests
    // =========================================================================

    #[test]
    fn classify_landscape_medium() {
        assert_eq!(
            classify_image(&Element::new(800, 600)),
            classified(Format::Landscape, Size::Medium)
        );
    }

    #[test]
    fn classify_landscape_large() {
        assert_eq!(
            classify_image(&Element::new(1300, 400)),
            classified(Format::Landscape, Size::Large)
        );
    }

    #[test]
    fn classify_square_medium() {
        assert_eq!(
            classify_image(&Element::new(700, 700)),
            classified(Format::Square, Size::Medium)
        );
    }

    #[test]
    fn classify_portrait_small() {
        assert_eq!(
            classify_image(&Element::new(200, 450)),
            classified(Format::Portrait, Size::Small)
        );
    }

    #[test]
    fn classify_small_square_is_absent() {
        // Format applies but size doesn't — no partial result
        assert_eq!(classify_image(&Element::new(250, 250)), None);
    }

    #[test]
    fn classify_zero_dimensions_is_absent() {
        assert_eq!(classify_image(&Element::new(0, 0)), None);
        assert_eq!(classify_image(&Element::default()), None);
    }

    #[test]
    fn classify_is_idempotent() {
        let img = Element::new(1920, 1080);
        assert_eq!(classify_image(&img), classify_image(&img));
    }

    #[test]
    fn classification_serializes_lowercase() {
        let c = Classification {
            format: Format::Portrait,
            size: Size::Large,
        };
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"format":"portrait","size":"large"}"#);
    }

    #[test]
    fn labels_display_as_lowercase() {
        assert_eq!(Format::Square.to_string(), "square");
        assert_eq!(Size::Medium.to_string(), "medium");
    }
}
