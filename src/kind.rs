use serde_json::Value;

/// Classification of an optional JSON value.
///
/// `None` stands for undefined (nothing stored), `Some(Value::Null)` for null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn of(v: Option<&Value>) -> Self {
        match v {
            None => Kind::Undefined,
            Some(Value::Null) => Kind::Null,
            Some(Value::Bool(_)) => Kind::Boolean,
            Some(Value::Number(_)) => Kind::Number,
            Some(Value::String(_)) => Kind::String,
            Some(Value::Array(_)) => Kind::Array,
            Some(Value::Object(_)) => Kind::Object,
        }
    }

    /// Coarse tag: null, arrays and mappings all report `object`.
    pub fn type_tag(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Null | Kind::Array | Kind::Object => "object",
        }
    }

    /// Fine tag: distinguishes null and arrays from mappings.
    pub fn kind_tag(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

/// A value is present unless it is undefined or null.
pub fn is_present(v: Option<&Value>) -> bool {
    !matches!(v, None | Some(Value::Null))
}

/// Empty containers are truthy; `0`, `""`, `false`, null and undefined are not.
pub fn is_truthy(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
