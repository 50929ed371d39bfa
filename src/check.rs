use serde_json::Value;
use std::cmp::Ordering;

use crate::comparison::{cmp_values, strict_eq};
use crate::kind::{is_present, is_truthy, Kind};

/// Every check a [`Check`] can evaluate.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<'p> {
    Equals(Value),
    Truthy,
    Falsy,
    TypeOf(&'p str),
    KindOf(&'p str),
    Lt(Value),
    Lte(Value),
    Gt(Value),
    Gte(Value),
    Defined,
    Undefined,
    Null,
    Value,
}

impl Predicate<'_> {
    /// Evaluate against `data`, without negation.
    pub fn test(&self, data: Option<&Value>) -> bool {
        match self {
            Predicate::Equals(v) => strict_eq(data, v),
            Predicate::Truthy => is_truthy(data),
            Predicate::Falsy => !is_truthy(data),
            Predicate::TypeOf(tag) => Kind::of(data).type_tag() == *tag,
            Predicate::KindOf(tag) => Kind::of(data).kind_tag() == *tag,
            Predicate::Lt(v) => cmp_values(data, v) == Some(Ordering::Less),
            Predicate::Lte(v) => matches!(cmp_values(data, v), Some(Ordering::Less | Ordering::Equal)),
            Predicate::Gt(v) => cmp_values(data, v) == Some(Ordering::Greater),
            Predicate::Gte(v) => matches!(
                cmp_values(data, v),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Predicate::Defined => data.is_some(),
            Predicate::Undefined => !Predicate::Defined.test(data),
            Predicate::Null => matches!(data, Some(Value::Null)),
            Predicate::Value => is_present(data),
        }
    }
}

/// A value wrapped for fluent checks.
///
/// `not()` negates every following predicate until `is()` clears it again:
///
/// ```
/// use serde_json::json;
///
/// let five = json!(5);
/// let c = okpath::check(&five).not();
/// assert!(!c.gt(3));
/// assert!(c.gt(10));
/// assert!(c.is().gt(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Check<'a> {
    data: Option<&'a Value>,
    negate: bool,
}

impl<'a> Check<'a> {
    pub fn new(data: impl Into<Option<&'a Value>>) -> Self {
        Self {
            data: data.into(),
            negate: false,
        }
    }

    pub fn data(&self) -> Option<&'a Value> {
        self.data
    }

    pub fn is_negated(&self) -> bool {
        self.negate
    }

    pub fn is(mut self) -> Self {
        self.negate = false;
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Evaluate `predicate` with the current negation applied. The flag is left as is.
    pub fn holds(&self, predicate: &Predicate<'_>) -> bool {
        predicate.test(self.data) != self.negate
    }

    pub fn equals(&self, v: impl Into<Value>) -> bool {
        self.holds(&Predicate::Equals(v.into()))
    }

    pub fn truthy(&self) -> bool {
        self.holds(&Predicate::Truthy)
    }

    pub fn falsy(&self) -> bool {
        self.holds(&Predicate::Falsy)
    }

    /// Matches the coarse tag (`undefined`, `object`, `boolean`, `number`, `string`).
    pub fn type_of(&self, tag: &str) -> bool {
        self.holds(&Predicate::TypeOf(tag))
    }

    /// Matches the fine tag, which also knows `null` and `array`.
    pub fn kind_of(&self, tag: &str) -> bool {
        self.holds(&Predicate::KindOf(tag))
    }

    pub fn lt(&self, v: impl Into<Value>) -> bool {
        self.holds(&Predicate::Lt(v.into()))
    }

    pub fn lte(&self, v: impl Into<Value>) -> bool {
        self.holds(&Predicate::Lte(v.into()))
    }

    pub fn gt(&self, v: impl Into<Value>) -> bool {
        self.holds(&Predicate::Gt(v.into()))
    }

    pub fn gte(&self, v: impl Into<Value>) -> bool {
        self.holds(&Predicate::Gte(v.into()))
    }

    pub fn defined(&self) -> bool {
        self.holds(&Predicate::Defined)
    }

    pub fn undefined(&self) -> bool {
        self.holds(&Predicate::Undefined)
    }

    pub fn null(&self) -> bool {
        self.holds(&Predicate::Null)
    }

    /// Present: neither null nor undefined.
    pub fn value(&self) -> bool {
        self.holds(&Predicate::Value)
    }
}
