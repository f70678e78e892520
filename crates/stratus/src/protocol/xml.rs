//! Minimal XML helpers for Query protocol responses.
//!
//! Response bodies are decoded with `quick-xml`'s serde support. These helpers
//! only locate the element to decode and pull single text values for errors.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The first `<tag ...>...</tag>` element in `xml`, including its tags.
///
/// Self-closing `<tag/>` elements are returned as-is.
pub fn element<'a>(xml: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut from = 0;
    while let Some(offset) = xml[from..].find(&open) {
        let start = from + offset;
        let after = &xml[start + open.len()..];
        match after.chars().next() {
            Some('>') | Some(' ') | Some('\n') | Some('\r') | Some('\t') | Some('/') => {
                let gt = start + open.len() + after.find('>')?;
                if xml[..gt].ends_with('/') {
                    return Some(&xml[start..=gt]);
                }
                let end = gt + xml[gt..].find(&close)? + close.len();
                return Some(&xml[start..end]);
            }
            _ => from = start + open.len(),
        }
    }
    None
}

/// Unescaped text content of the first `<tag>` element.
pub fn text(xml: &str, tag: &str) -> Option<String> {
    let block = element(xml, tag)?;
    if block.ends_with("/>") {
        return Some(String::new());
    }
    let inner = &block[block.find('>')? + 1..block.rfind("</")?];
    quick_xml::escape::unescape(inner.trim())
        .ok()
        .map(|s| s.into_owned())
}

/// Decode the `<{operation}Result>` element of a Query response.
///
/// A missing or self-closing result element yields `T::default()`.
pub fn decode_result<T: DeserializeOwned + Default>(body: &str, operation: &str) -> Result<T> {
    let tag = format!("{operation}Result");
    match element(body, &tag) {
        Some(block) if !block.ends_with("/>") => Ok(quick_xml::de::from_str(block)?),
        _ => Ok(T::default()),
    }
}

/// A Query protocol list: `<Name><member>..</member>...</Name>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Members<T> {
    /// The listed items, in document order.
    #[serde(rename = "member", default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for Members<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Members<T> {
    /// Unwrap into the items.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Iterate the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> From<Vec<T>> for Members<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<'a, T> IntoIterator for &'a Members<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
