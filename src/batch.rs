//! Batch application of classifications as class tokens.
//!
//! For every element, in order, [`classify_images`] computes a
//! [`Classification`] and adds two tokens to the element's class list:
//! `<prefix><format>` then `<prefix><size>` (with the default prefix,
//! `img-landscape img-medium`). There is no rollback; each element is
//! mutated as it is visited.
//!
//! ## Unclassifiable Elements
//!
//! What happens when an element has no classification is decided by
//! [`AbsentPolicy`]:
//!
//! - [`AbsentPolicy::Skip`] leaves the element untouched.
//! - [`AbsentPolicy::Legacy`] adds `<prefix>undefined`, reproducing what
//!   browser scripts that interpolate a missing label into the token did.
//!   Both labels are dropped together, so an element that was square but too
//!   small still gets `img-undefined` rather than `img-square`.
//!
//! ## Untyped Documents
//!
//! [`classify_document`] accepts a `serde_json::Value`. Anything other than
//! an array is rejected with `None` before any element is touched.

use crate::classify::{Classification, classify_image};
use crate::element::{ClassList, ImageLike, JsonElement};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Label fragment used for a missing classification under
/// [`AbsentPolicy::Legacy`].
pub const MISSING_LABEL: &str = "undefined";

/// Default class token prefix.
pub const DEFAULT_PREFIX: &str = "img-";

/// How to treat elements without a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbsentPolicy {
    /// Leave the element's class list untouched.
    #[default]
    Skip,
    /// Add `<prefix>undefined` for both tokens.
    Legacy,
}

/// Options for batch application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOptions {
    pub prefix: String,
    pub absent: AbsentPolicy,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            absent: AbsentPolicy::default(),
        }
    }
}

impl ApplyOptions {
    pub fn legacy() -> Self {
        Self {
            absent: AbsentPolicy::Legacy,
            ..Self::default()
        }
    }

    /// Render a class token for a label, or for the missing label.
    pub fn token(&self, label: Option<&str>) -> String {
        format!("{}{}", self.prefix, label.unwrap_or(MISSING_LABEL))
    }

    /// The two tokens for a classification, format first.
    pub fn tokens_for(&self, classification: Option<Classification>) -> [String; 2] {
        match classification {
            Some(c) => [
                self.token(Some(c.format.as_str())),
                self.token(Some(c.size.as_str())),
            ],
            None => [self.token(None), self.token(None)],
        }
    }
}

/// What happened to one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both tokens were added.
    Classified(Classification),
    /// No classification; the element was left alone.
    Skipped,
    /// No classification; `<prefix>undefined` was added.
    Legacy,
    /// The element cannot hold class tokens (untyped documents only).
    Immutable,
}

/// Per-element outcomes, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<Outcome>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn classified(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Classified(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped | Outcome::Immutable))
    }

    pub fn legacy(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Legacy))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// Classify one element and add its tokens according to `options`.
pub fn apply_classes<E>(element: &mut E, options: &ApplyOptions) -> Outcome
where
    E: ImageLike + ClassList,
{
    let classification = classify_image(&*element);
    let outcome = match (classification, options.absent) {
        (Some(c), _) => Outcome::Classified(c),
        (None, AbsentPolicy::Skip) => return Outcome::Skipped,
        (None, AbsentPolicy::Legacy) => Outcome::Legacy,
    };

    for token in options.tokens_for(classification) {
        element.add_class(&token);
    }
    outcome
}

/// Apply class tokens to every element, in order.
///
/// # Examples
/// ```
/// use img_classify::{ApplyOptions, Element, classify_images};
///
/// let mut images = vec![Element::new(800, 600), Element::new(700, 700)];
/// let report = classify_images(&mut images, &ApplyOptions::default());
///
/// assert_eq!(report.classified(), 2);
/// assert_eq!(images[0].class_list, vec!["img-landscape", "img-medium"]);
/// assert_eq!(images[1].class_list, vec!["img-square", "img-medium"]);
/// ```
pub fn classify_images<E>(images: &mut [E], options: &ApplyOptions) -> BatchReport
where
    E: ImageLike + ClassList,
{
    let outcomes = images
        .iter_mut()
        .enumerate()
        .map(|(index, element)| {
            let outcome = apply_classes(element, options);
            debug!(index, ?outcome, "applied classes");
            outcome
        })
        .collect();
    BatchReport { outcomes }
}

/// Apply class tokens to every entry of a JSON array of elements.
///
/// Returns `None`, without touching anything, when `document` is not an
/// array. Entries that cannot hold class tokens are reported as
/// [`Outcome::Immutable`].
pub fn classify_document(document: &mut Value, options: &ApplyOptions) -> Option<BatchReport> {
    let Value::Array(entries) = document else {
        debug!("document is not an array; nothing applied");
        return None;
    };

    let outcomes = entries
        .iter_mut()
        .enumerate()
        .map(|(index, entry)| {
            let mut element = JsonElement::new(entry);
            let outcome = if element.is_mutable() {
                apply_classes(&mut element, options)
            } else {
                Outcome::Immutable
            };
            debug!(index, ?outcome, "applied classes");
            outcome
        })
        .collect();
    Some(BatchReport { outcomes })
}
