//! Built-in predicates over parameter values

use serde_json::Value;

use super::combinators::Predicate;

/// Predicate that the parameter was supplied (any value, `null` included).
///
/// This is the default validity check for required and one-of rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IsDefined;

impl Predicate for IsDefined {
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        value.is_some()
    }
}

/// Create a predicate that the parameter was supplied.
///
/// ```rust
/// use paramcheck::predicate::*;
/// use serde_json::json;
///
/// assert!(is_defined().check(Some(&json!(null))));
/// assert!(is_defined().check(Some(&json!(0))));
/// assert!(is_defined().check(Some(&json!(""))));
/// assert!(!is_defined().check(None));
/// ```
pub fn is_defined() -> IsDefined {
    IsDefined
}

/// Predicate that the parameter was supplied and is not `null`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NotNull;

impl Predicate for NotNull {
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        matches!(value, Some(v) if !v.is_null())
    }
}

/// Create a predicate that the parameter is supplied and not `null`.
pub fn not_null() -> NotNull {
    NotNull
}

/// Predicate that the parameter holds something: not `null`, and not an
/// empty string, array or object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NonEmpty;

impl Predicate for NonEmpty {
    fn check(&self, value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(map)) => !map.is_empty(),
            Some(_) => true,
        }
    }
}

/// Create a predicate that the parameter is non-empty.
///
/// ```rust
/// use paramcheck::predicate::*;
/// use serde_json::json;
///
/// assert!(non_empty().check(Some(&json!("a"))));
/// assert!(non_empty().check(Some(&json!(0))));
/// assert!(!non_empty().check(Some(&json!(""))));
/// assert!(!non_empty().check(Some(&json!([]))));
/// ```
pub fn non_empty() -> NonEmpty {
    NonEmpty
}

/// JSON type a parameter must have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonType {
    /// `true` or `false`
    Boolean,
    /// Any JSON number
    Number,
    /// A string
    String,
    /// An array
    Array,
    /// An object
    Object,
}

/// Predicate that the parameter has a given JSON type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsType(pub JsonType);

impl Predicate for IsType {
    fn check(&self, value: Option<&Value>) -> bool {
        matches!(
            (self.0, value),
            (JsonType::Boolean, Some(Value::Bool(_)))
                | (JsonType::Number, Some(Value::Number(_)))
                | (JsonType::String, Some(Value::String(_)))
                | (JsonType::Array, Some(Value::Array(_)))
                | (JsonType::Object, Some(Value::Object(_)))
        )
    }
}

/// Parameter is a string.
pub fn is_string() -> IsType {
    IsType(JsonType::String)
}

/// Parameter is a number.
pub fn is_number() -> IsType {
    IsType(JsonType::Number)
}

/// Parameter is a boolean.
pub fn is_bool() -> IsType {
    IsType(JsonType::Boolean)
}

/// Parameter is an array.
pub fn is_array() -> IsType {
    IsType(JsonType::Array)
}

/// Parameter is an object.
pub fn is_object() -> IsType {
    IsType(JsonType::Object)
}

/// Numeric comparison against a fixed bound.
///
/// Non-numeric and absent values never satisfy a comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Compare {
    op: CompareOp,
    bound: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CompareOp {
    Gt,
    Ge,
    Lt,
    Le,
}

impl Predicate for Compare {
    fn check(&self, value: Option<&Value>) -> bool {
        let Some(n) = value.and_then(Value::as_f64) else {
            return false;
        };
        match self.op {
            CompareOp::Gt => n > self.bound,
            CompareOp::Ge => n >= self.bound,
            CompareOp::Lt => n < self.bound,
            CompareOp::Le => n <= self.bound,
        }
    }
}

/// Parameter is a number greater than `bound`.
///
/// ```rust
/// use paramcheck::predicate::*;
/// use serde_json::json;
///
/// let over_30 = gt(30.0);
/// assert!(over_30.check(Some(&json!(31))));
/// assert!(!over_30.check(Some(&json!(10))));
/// assert!(!over_30.check(Some(&json!("31"))));
/// ```
pub fn gt(bound: f64) -> Compare {
    Compare {
        op: CompareOp::Gt,
        bound,
    }
}

/// Parameter is a number greater than or equal to `bound`.
pub fn ge(bound: f64) -> Compare {
    Compare {
        op: CompareOp::Ge,
        bound,
    }
}

/// Parameter is a number less than `bound`.
pub fn lt(bound: f64) -> Compare {
    Compare {
        op: CompareOp::Lt,
        bound,
    }
}

/// Parameter is a number less than or equal to `bound`.
pub fn le(bound: f64) -> Compare {
    Compare {
        op: CompareOp::Le,
        bound,
    }
}

/// Predicate that the parameter equals a fixed value.
#[derive(Clone, Debug, PartialEq)]
pub struct Equals(pub Value);

impl Predicate for Equals {
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        value == Some(&self.0)
    }
}

/// Parameter equals `expected`.
pub fn equals(expected: impl Into<Value>) -> Equals {
    Equals(expected.into())
}
