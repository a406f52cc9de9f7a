//! Declarative requirement rules
//!
//! A requirement names one or more parameters and says what makes them valid.
//! Requirements are evaluated in order, and every one of them is evaluated even
//! after an earlier one has failed.
//!
//! Rules come in two forms. The typed form is [`Requirement`]. The document
//! form is a JSON array, read by [`parse_requirements`], where each entry's
//! shape selects the rule:
//!
//! | entry                         | rule                              |
//! |-------------------------------|-----------------------------------|
//! | `"name"`                      | required                          |
//! | `["a", "b"]`                  | at least one of                   |
//! | `{"name": "predicate_name"}`  | custom, via a registered predicate |
//! | anything else                 | ignored                           |

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::display::render_value;
use crate::error::UsageError;
use crate::predicate::{Predicate, PredicateRegistry, SharedPredicate};

/// One validation rule.
#[derive(Clone)]
pub enum Requirement {
    /// The parameter must satisfy the validator's default predicate.
    Required(String),
    /// At least one of the parameters must satisfy the default predicate.
    /// Every one that does is extracted.
    OneOf(Vec<String>),
    /// The parameter must satisfy `predicate`.
    Custom {
        /// Parameter name
        name: String,
        /// Check applied to the parameter's value
        predicate: SharedPredicate,
    },
}

impl Requirement {
    /// A required parameter.
    pub fn required(name: impl Into<String>) -> Self {
        Requirement::Required(name.into())
    }

    /// At least one of `names` must be present.
    ///
    /// ```
    /// use paramcheck::Requirement;
    ///
    /// let rule = Requirement::one_of(["email", "phone"]);
    /// assert_eq!(rule.names(), vec!["email", "phone"]);
    /// ```
    pub fn one_of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Requirement::OneOf(names.into_iter().map(Into::into).collect())
    }

    /// A parameter checked by a custom predicate.
    ///
    /// ```
    /// use paramcheck::predicate::gt;
    /// use paramcheck::Requirement;
    ///
    /// let rule = Requirement::custom("x", gt(30.0));
    /// assert_eq!(rule.names(), vec!["x"]);
    /// ```
    pub fn custom<P>(name: impl Into<String>, predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        Requirement::Custom {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// A parameter checked by an already shared predicate.
    pub fn custom_shared(name: impl Into<String>, predicate: SharedPredicate) -> Self {
        Requirement::Custom {
            name: name.into(),
            predicate,
        }
    }

    /// Parameter names this rule refers to.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Requirement::Required(name) | Requirement::Custom { name, .. } => vec![name.as_str()],
            Requirement::OneOf(names) => names.iter().map(String::as_str).collect(),
        }
    }

    /// Whether this rule has a shape that takes part in validation.
    ///
    /// Empty required names and empty one-of lists are skipped. A custom
    /// rule is always checked, even for the empty parameter name.
    pub fn is_active(&self) -> bool {
        match self {
            Requirement::Required(name) => !name.is_empty(),
            Requirement::OneOf(names) => !names.is_empty(),
            Requirement::Custom { .. } => true,
        }
    }
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Required(name) => f.debug_tuple("Required").field(name).finish(),
            Requirement::OneOf(names) => f.debug_tuple("OneOf").field(names).finish(),
            Requirement::Custom { name, .. } => f
                .debug_struct("Custom")
                .field("name", name)
                .finish_non_exhaustive(),
        }
    }
}

impl From<&str> for Requirement {
    fn from(name: &str) -> Self {
        Requirement::required(name)
    }
}

impl From<String> for Requirement {
    fn from(name: String) -> Self {
        Requirement::Required(name)
    }
}

impl<S: Into<String>> From<Vec<S>> for Requirement {
    fn from(names: Vec<S>) -> Self {
        Requirement::one_of(names)
    }
}

/// Read a requirements document.
///
/// Entries with unrecognized shapes are dropped. Fails if the document is
/// not an array, or if a custom entry does not name a predicate in
/// `registry`.
///
/// ```
/// use paramcheck::predicate::PredicateRegistry;
/// use paramcheck::requirement::parse_requirements;
/// use serde_json::json;
///
/// let registry = PredicateRegistry::with_builtins();
/// let rules = parse_requirements(
///     &json!(["id", ["email", "phone"], {"name": "string"}, 42, []]),
///     &registry,
/// )
/// .unwrap();
/// assert_eq!(rules.len(), 3);
///
/// let err = parse_requirements(&json!({"id": "string"}), &registry).unwrap_err();
/// assert_eq!(err.to_string(), "requirements must be an array, found object");
/// ```
pub fn parse_requirements(
    document: &Value,
    registry: &PredicateRegistry,
) -> Result<Vec<Requirement>, UsageError> {
    let Value::Array(entries) = document else {
        return Err(UsageError::RequirementsNotArray {
            found: json_type_name(document),
        });
    };

    let mut rules = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(rule) = parse_entry(entry, registry)? {
            rules.push(rule);
        }
    }
    Ok(rules)
}

fn parse_entry(
    entry: &Value,
    registry: &PredicateRegistry,
) -> Result<Option<Requirement>, UsageError> {
    match entry {
        Value::String(name) if !name.is_empty() => Ok(Some(Requirement::required(name.as_str()))),
        Value::Array(names) if !names.is_empty() => Ok(Some(Requirement::OneOf(
            names.iter().map(param_name).collect(),
        ))),
        Value::Object(map) if map.len() == 1 => {
            let Some((name, predicate_ref)) = map.iter().next() else {
                return Ok(None);
            };
            let predicate = predicate_ref
                .as_str()
                .and_then(|predicate_name| registry.get(predicate_name))
                .ok_or_else(|| UsageError::PredicateNotCallable {
                    param: name.clone(),
                })?;
            Ok(Some(Requirement::custom_shared(name.as_str(), predicate)))
        }
        _ => {
            #[cfg(feature = "tracing")]
            tracing::trace!(entry = %entry, "ignoring requirement with unrecognized shape");
            Ok(None)
        }
    }
}

// Non-string names in a one-of list are looked up by their string form.
fn param_name(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => render_value(Some(other)),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
