use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::check::Check;
use crate::errors::{PathError, Result};
use crate::kind::is_present;
use crate::options::Options;
use crate::path::{Path, Step};

/// Resolves separator-delimited paths against a JSON document.
///
/// Reads never fail: anything missing along the way resolves to `None`.
/// Writes create empty mappings for absent intermediates and fail only when
/// they would have to descend through a present non-mapping value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accessor {
    options: Options,
}

impl Accessor {
    /// Accessor splitting on `.`.
    pub const DEFAULT: Accessor = Accessor { options: Options::new() };

    pub fn new() -> Self {
        Self::DEFAULT
    }

    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn path<'p>(&self, path: &'p str) -> Path<'p> {
        Path::parse(path, self.options.separator)
    }

    /// The value stored at `path`, as stored. A stored null comes back as
    /// `Some(Value::Null)`; an absent context or missing key as `None`.
    pub fn get<'a>(&self, context: &'a Value, path: &str) -> Option<&'a Value> {
        if !is_present(Some(context)) {
            return None;
        }
        resolve(context, &self.path(path))
    }

    /// Like [`Accessor::get`], but returns `fallback` whenever the stored value
    /// is null or missing. An absent context still yields `None`.
    pub fn get_or<'a>(
        &self,
        context: &'a Value,
        path: &str,
        fallback: Option<&'a Value>,
    ) -> Option<&'a Value> {
        if !is_present(Some(context)) {
            return None;
        }
        let found = resolve(context, &self.path(path));
        if is_present(found) {
            found
        } else {
            fallback
        }
    }

    /// Write `value` at `path` unconditionally. A null context becomes a fresh
    /// mapping first. Writing `None` removes the final key.
    pub fn set<'c>(
        &self,
        context: &'c mut Value,
        path: &str,
        value: impl Into<Option<Value>>,
    ) -> Result<&'c mut Value> {
        if context.is_null() {
            *context = Value::Object(Map::new());
        }
        let value = value.into();
        walk_mut(&mut *context, &self.path(path), |map, token| {
            write(map, token, value)
        })?;
        Ok(context)
    }

    /// Write `value` at `path` only if the existing value there is null or
    /// missing. Present values, falsy ones included, are left untouched.
    pub fn ensure<'c>(
        &self,
        context: &'c mut Value,
        path: &str,
        value: impl Into<Option<Value>>,
    ) -> Result<&'c mut Value> {
        if context.is_null() {
            debug!(path, "ensure on absent context");
            return Err(PathError::InvalidArgument(format!(
                "cannot ensure `{path}` on an absent context"
            )));
        }
        let value = value.into();
        walk_mut(&mut *context, &self.path(path), |map, token| {
            if is_present(map.get(token)) {
                debug!(token, "ensure kept existing value");
            } else {
                debug!(token, "ensure filled absent value");
                write(map, token, value);
            }
        })?;
        Ok(context)
    }

    /// Wrap the value at `path` for predicate checks.
    pub fn check_at<'a>(&self, context: &'a Value, path: &str) -> Check<'a> {
        Check::new(self.get(context, path))
    }
}

/// The path-less form of `ensure`: `context` if present, else `fallback`.
pub fn or_default<'a>(context: impl Into<Option<&'a Value>>, fallback: &'a Value) -> &'a Value {
    match context.into() {
        Some(v) if is_present(Some(v)) => v,
        _ => fallback,
    }
}

/// Read-only walk. An absent intermediate behaves like an empty mapping, so the
/// rest of the path resolves to `None`; so does a present non-mapping.
fn resolve<'a>(context: &'a Value, path: &Path<'_>) -> Option<&'a Value> {
    path.steps().fold(Some(context), |current, step| {
        let next = current
            .and_then(Value::as_object)
            .and_then(|map| map.get(step.token));
        if step.is_last || is_present(next) {
            next
        } else {
            None
        }
    })
}

/// Mutating walk. Absent intermediates are replaced by empty mappings; the
/// mapping holding the final token is handed to `decide`.
fn walk_mut<F>(context: &mut Value, path: &Path<'_>, decide: F) -> Result<()>
where
    F: FnOnce(&mut Map<String, Value>, &str),
{
    let mut current = context;
    for Step { index, token, is_last } in path.steps() {
        trace!(index, token, is_last, "walk");
        let map = match current.as_object_mut() {
            Some(map) => map,
            None => {
                let parent = if index == 0 {
                    "(context)".to_string()
                } else {
                    path.prefix(index - 1)
                };
                debug!(path = %parent, token, "walk hit a non-mapping value");
                return Err(PathError::NotAMapping {
                    path: parent,
                    token: token.to_string(),
                });
            }
        };
        if is_last {
            decide(map, token);
            return Ok(());
        }
        let slot = map.entry(token).or_insert(Value::Null);
        if slot.is_null() {
            debug!(path = %path.prefix(index), "created intermediate mapping");
            *slot = Value::Object(Map::new());
        }
        current = slot;
    }
    Ok(())
}

fn write(map: &mut Map<String, Value>, token: &str, value: Option<Value>) {
    match value {
        Some(v) => {
            map.insert(token.to_string(), v);
        }
        None => {
            map.remove(token);
        }
    }
}
