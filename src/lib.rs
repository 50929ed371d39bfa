//! Read, write and default values nested inside a JSON document by a
//! dotted property path, plus a small fluent checker for the result.
//!
//! ```
//! use serde_json::json;
//!
//! let mut doc = json!({"a": {"b": {"c": 42}}});
//! assert_eq!(okpath::get(&doc, "a.b.c"), Some(&json!(42)));
//!
//! okpath::ensure(&mut doc, "a.b.d", json!(0)).unwrap();
//! okpath::ensure(&mut doc, "a.b.d", json!(999)).unwrap();
//! assert_eq!(doc["a"]["b"]["d"], json!(0));
//!
//! assert!(okpath::check_at(&doc, "a.b.c").is().gt(41));
//! ```

pub mod accessor;
pub mod check;
pub mod comparison;
pub mod errors;
pub mod kind;
pub mod options;
pub mod path;

use serde_json::Value;

pub use accessor::{or_default, Accessor};
pub use check::{Check, Predicate};
pub use errors::{PathError, Result};
pub use kind::Kind;
pub use options::{Options, DEFAULT_SEPARATOR};
pub use path::{Path, Step};

/// [`Accessor::get`] with the default separator.
pub fn get<'a>(context: &'a Value, path: &str) -> Option<&'a Value> {
    Accessor::DEFAULT.get(context, path)
}

/// [`Accessor::get_or`] with the default separator.
pub fn get_or<'a>(context: &'a Value, path: &str, fallback: Option<&'a Value>) -> Option<&'a Value> {
    Accessor::DEFAULT.get_or(context, path, fallback)
}

/// [`Accessor::set`] with the default separator.
pub fn set<'c>(
    context: &'c mut Value,
    path: &str,
    value: impl Into<Option<Value>>,
) -> Result<&'c mut Value> {
    Accessor::DEFAULT.set(context, path, value)
}

/// [`Accessor::ensure`] with the default separator.
pub fn ensure<'c>(
    context: &'c mut Value,
    path: &str,
    value: impl Into<Option<Value>>,
) -> Result<&'c mut Value> {
    Accessor::DEFAULT.ensure(context, path, value)
}

/// Wrap a value directly for predicate checks.
pub fn check<'a>(value: impl Into<Option<&'a Value>>) -> Check<'a> {
    Check::new(value)
}

/// [`Accessor::check_at`] with the default separator.
pub fn check_at<'a>(context: &'a Value, path: &str) -> Check<'a> {
    Accessor::DEFAULT.check_at(context, path)
}
