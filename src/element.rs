//! Element model: what the classifier reads and what batch application writes.
//!
//! Two traits describe the seams:
//!
//! - [`ImageLike`] — anything with natural (intrinsic) pixel dimensions.
//! - [`ClassList`] — anything with a mutable set of class tokens.
//!
//! [`Element`] is an owned value implementing both, mirroring the shape of a
//! DOM `<img>` (`naturalWidth`, `naturalHeight`, `classList`).
//! [`JsonElement`] is a borrowed view over a `serde_json::Value` with the same
//! keys, used when the element collection arrives as an untyped document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A value exposing intrinsic pixel dimensions.
pub trait ImageLike {
    fn natural_width(&self) -> Option<u32>;
    fn natural_height(&self) -> Option<u32>;
}

/// A mutable set of class tokens.
pub trait ClassList {
    /// Add a token. Adding a token that is already present is a no-op,
    /// matching `DOMTokenList.add`.
    fn add_class(&mut self, token: &str);
}

/// An owned image element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natural_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natural_height: Option<u32>,
    #[serde(default)]
    pub class_list: Vec<String>,
}

impl Element {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            natural_width: Some(width),
            natural_height: Some(height),
            class_list: Vec::new(),
        }
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.class_list.iter().any(|c| c == token)
    }
}

impl ImageLike for Element {
    fn natural_width(&self) -> Option<u32> {
        self.natural_width
    }

    fn natural_height(&self) -> Option<u32> {
        self.natural_height
    }
}

impl ClassList for Element {
    fn add_class(&mut self, token: &str) {
        if !self.has_class(token) {
            self.class_list.push(token.to_string());
        }
    }
}

/// Key holding the natural width in a JSON element.
pub const WIDTH_KEY: &str = "naturalWidth";
/// Key holding the natural height in a JSON element.
pub const HEIGHT_KEY: &str = "naturalHeight";
/// Key holding the class token array in a JSON element.
pub const CLASS_LIST_KEY: &str = "classList";

/// Borrowed element view over a JSON value.
///
/// Dimensions are read from [`WIDTH_KEY`] / [`HEIGHT_KEY`] and must be
/// non-negative whole numbers (`800` or `800.0`) that fit in `u32`;
/// anything else reads as missing.
/// Class tokens go into the [`CLASS_LIST_KEY`] array, which is created on
/// first use. Entries that are not JSON objects, or whose `classList` is not
/// an array, are never mutated.
#[derive(Debug)]
pub struct JsonElement<'a> {
    value: &'a mut Value,
}

impl<'a> JsonElement<'a> {
    pub fn new(value: &'a mut Value) -> Self {
        Self { value }
    }

    fn dimension(&self, key: &str) -> Option<u32> {
        let number = self.value.get(key)?;
        if let Some(n) = number.as_u64() {
            return u32::try_from(n).ok();
        }
        // Whole-valued floats (`800.0`) are the same JSON number as `800`
        let f = number.as_f64()?;
        (f.is_finite() && f.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&f))
            .then_some(f as u32)
    }

    /// Whether tokens can be added to this element at all.
    pub fn is_mutable(&self) -> bool {
        match self.value.get(CLASS_LIST_KEY) {
            Some(list) => list.is_array(),
            None => self.value.is_object(),
        }
    }
}

impl ImageLike for JsonElement<'_> {
    fn natural_width(&self) -> Option<u32> {
        self.dimension(WIDTH_KEY)
    }

    fn natural_height(&self) -> Option<u32> {
        self.dimension(HEIGHT_KEY)
    }
}

impl ClassList for JsonElement<'_> {
    fn add_class(&mut self, token: &str) {
        let Some(object) = self.value.as_object_mut() else {
            return;
        };
        let list = object
            .entry(CLASS_LIST_KEY)
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(tokens) = list
            && !tokens.iter().any(|t| t.as_str() == Some(token))
        {
            tokens.push(Value::String(token.to_string()));
        }
    }
}
