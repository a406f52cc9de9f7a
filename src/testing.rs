//! Testing utilities for code that validates parameters
//!
//! Assertion macros for validation results, plus (with the `proptest`
//! feature) strategies for generating provided-value maps.
//!
//! # Examples
//!
//! ```rust
//! use paramcheck::{assert_extracted, assert_validation_error, Requirement};
//! use serde_json::{json, Map};
//!
//! let mut provided = Map::new();
//! provided.insert("a".into(), json!(1));
//!
//! let ok = paramcheck::validate(Some(&provided), &[Requirement::required("a")]);
//! assert_extracted!(ok, json!({"a": 1}));
//!
//! let bad = paramcheck::validate(Some(&provided), &[Requirement::required("b")]);
//! assert_validation_error!(bad, "Invalid value of 'undefined' was provided for parameter 'b'.");
//! ```

/// Assert that validation succeeded, optionally with an exact extraction.
///
/// The expected extraction is any value convertible to `serde_json::Value`,
/// compared as an object.
///
/// # Example
///
/// ```rust
/// use paramcheck::assert_extracted;
/// use serde_json::Map;
///
/// let result = paramcheck::validate(Some(&Map::new()), &[]);
/// assert_extracted!(result);
/// ```
#[macro_export]
macro_rules! assert_extracted {
    ($result:expr) => {
        match $result {
            Ok(_) => {}
            Err(e) => {
                panic!("Expected extracted parameters, got error: {}", e);
            }
        }
    };
    ($result:expr, $expected:expr) => {
        match $result {
            Ok(extracted) => {
                assert_eq!(
                    $crate::serde_json::Value::Object(extracted.clone()),
                    $crate::serde_json::Value::from($expected)
                );
            }
            Err(e) => {
                panic!("Expected extracted parameters, got error: {}", e);
            }
        }
    };
}

/// Assert that validation failed with a `ValidationError`, optionally with
/// an exact combined message.
///
/// # Example
///
/// ```rust
/// use paramcheck::assert_validation_error;
///
/// let result = paramcheck::validate(None, &[]);
/// assert_validation_error!(result, "A paramsProvided object is required.");
/// ```
#[macro_export]
macro_rules! assert_validation_error {
    ($result:expr) => {
        match $result {
            Err($crate::Error::Validation(_)) => {}
            Err(e) => {
                panic!("Expected ValidationError, got usage error: {}", e);
            }
            Ok(v) => {
                panic!("Expected ValidationError, got Ok: {:?}", v);
            }
        }
    };
    ($result:expr, $expected:expr) => {
        match $result {
            Err($crate::Error::Validation(e)) => {
                assert_eq!(e.message(), $expected);
            }
            Err(e) => {
                panic!("Expected ValidationError, got usage error: {}", e);
            }
            Ok(v) => {
                panic!(
                    "Expected ValidationError {:?}, got Ok: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Assert that validation failed because the caller misused the validator.
///
/// # Example
///
/// ```rust
/// use paramcheck::assert_usage_error;
/// use serde_json::json;
///
/// let result = paramcheck::validate_json(Some(&json!({})), &json!({"a": "string"}));
/// assert_usage_error!(result);
/// ```
#[macro_export]
macro_rules! assert_usage_error {
    ($result:expr) => {
        match $result {
            Err($crate::Error::Usage(_)) => {}
            Err(e) => {
                panic!("Expected usage error, got ValidationError: {}", e);
            }
            Ok(v) => {
                panic!("Expected usage error, got Ok: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
pub use strategies::{json_scalar, param_name, provided_values};

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;
    use serde_json::{Map, Value};

    /// Short lowercase parameter names.
    pub fn param_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,7}"
    }

    /// Any non-container JSON value, `null` included.
    pub fn json_scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            "[ -~]{0,12}".prop_map(Value::String),
        ]
    }

    /// Provided-value maps of up to `max_len` scalar parameters.
    pub fn provided_values(max_len: usize) -> impl Strategy<Value = Map<String, Value>> {
        prop::collection::btree_map(param_name(), json_scalar(), 0..=max_len)
            .prop_map(|entries| entries.into_iter().collect())
    }
}
