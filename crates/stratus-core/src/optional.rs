//! Tri-state field values for request and response shapes.
//!
//! Service APIs distinguish a field that was never supplied from one that was
//! supplied as `null`. [`Optional`] keeps the three cases apart:
//!
//! | Variant | On serialize | From deserialize |
//! |---|---|---|
//! | `Unset` | omitted (with `skip_serializing_if`) | key absent (with `#[serde(default)]`) |
//! | `Null` | `null` | key present, value `null` |
//! | `Present(v)` | `v` | key present with a value |
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use stratus_core::Optional;
//!
//! #[derive(Default, Serialize, Deserialize)]
//! #[serde(default)]
//! struct Shape {
//!     #[serde(rename = "MaxResults", skip_serializing_if = "Optional::is_unset")]
//!     max_results: Optional<i32>,
//! }
//!
//! assert_eq!(serde_json::to_string(&Shape::default()).unwrap(), "{}");
//! let shape: Shape = serde_json::from_str(r#"{"MaxResults":null}"#).unwrap();
//! assert!(shape.max_results.is_null());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field value that may be unset, explicitly null, or present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// Not supplied. Omitted from payloads.
    #[default]
    Unset,
    /// Supplied as an explicit null.
    Null,
    /// Supplied with a value.
    Present(T),
}

impl<T> Optional<T> {
    /// `true` for [`Optional::Unset`]. Used as the `skip_serializing_if` predicate.
    pub fn is_unset(&self) -> bool {
        matches!(self, Optional::Unset)
    }

    /// `true` for [`Optional::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Optional::Null)
    }

    /// `true` when a value is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Borrow the inner value.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Unset => Optional::Unset,
            Optional::Null => Optional::Null,
            Optional::Present(v) => Optional::Present(v),
        }
    }

    /// The present value, if any.
    pub fn get(&self) -> Option<&T> {
        match self {
            Optional::Present(v) => Some(v),
            _ => None,
        }
    }

    /// Collapse unset and null into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(v) => Some(v),
            _ => None,
        }
    }

    /// `None` becomes `Unset`.
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Optional::Unset, Optional::Present)
    }

    /// Map the present value, keeping unset and null as they are.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Optional::Unset => Optional::Unset,
            Optional::Null => Optional::Null,
            Optional::Present(v) => Optional::Present(f(v)),
        }
    }

    /// The present value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }
}

impl<T: std::ops::Deref> Optional<T> {
    /// Borrow through the inner value, e.g. `Optional<String>` to `Option<&str>`.
    pub fn as_deref(&self) -> Option<&T::Target> {
        self.get().map(|v| v.deref())
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Optional::Present(value)
    }
}

impl From<&str> for Optional<String> {
    fn from(value: &str) -> Self {
        Optional::Present(value.to_owned())
    }
}

impl From<Vec<&str>> for Optional<Vec<String>> {
    fn from(value: Vec<&str>) -> Self {
        Optional::Present(value.into_iter().map(str::to_owned).collect())
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Optional::Present(v) => serializer.serialize_some(v),
            Optional::Null | Optional::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Optional::Present(v),
            None => Optional::Null,
        })
    }
}
