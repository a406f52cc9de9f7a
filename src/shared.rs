//! Free functions backed by one process-wide default validator
//!
//! These are shorthands for calling the same method on [`Validator::new()`],
//! without constructing one. The shared instance is created on first use and
//! never changes.
//!
//! ```
//! use paramcheck::Requirement;
//! use serde_json::{json, Map};
//!
//! let mut provided = Map::new();
//! provided.insert("b".into(), json!(2));
//!
//! let rules = [Requirement::one_of(["a", "b"])];
//! let extracted = paramcheck::validate(Some(&provided), &rules).unwrap();
//! assert_eq!(extracted["b"], json!(2));
//! assert!(!extracted.contains_key("a"));
//! ```

use std::future::Future;
use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::error::Error;
use crate::requirement::Requirement;
use crate::validator::Validator;

static SHARED: LazyLock<Validator> = LazyLock::new(Validator::new);

/// The process-wide default validator.
pub fn shared() -> &'static Validator {
    &SHARED
}

/// [`Validator::validate`] on the shared validator.
pub fn validate(
    provided: Option<&Map<String, Value>>,
    requirements: &[Requirement],
) -> Result<Map<String, Value>, Error> {
    shared().validate(provided, requirements)
}

/// [`Validator::validate_into`] on the shared validator.
pub fn validate_into<'t>(
    provided: Option<&Map<String, Value>>,
    requirements: &[Requirement],
    target: &'t mut Map<String, Value>,
) -> Result<&'t mut Map<String, Value>, Error> {
    shared().validate_into(provided, requirements, target)
}

/// [`Validator::validate_json`] on the shared validator.
pub fn validate_json(
    provided: Option<&Value>,
    requirements: &Value,
) -> Result<Map<String, Value>, Error> {
    shared().validate_json(provided, requirements)
}

/// [`Validator::validate_async`] on the shared validator.
pub fn validate_async<'a>(
    provided: Option<&'a Map<String, Value>>,
    requirements: &'a [Requirement],
) -> impl Future<Output = Result<Map<String, Value>, Error>> + 'a {
    shared().validate_async(provided, requirements)
}

/// [`Validator::validate_into_async`] on the shared validator.
pub fn validate_into_async<'a>(
    provided: Option<&'a Map<String, Value>>,
    requirements: &'a [Requirement],
    target: &'a mut Map<String, Value>,
) -> impl Future<Output = Result<&'a mut Map<String, Value>, Error>> + 'a {
    shared().validate_into_async(provided, requirements, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shared_is_single_instance() {
        assert!(std::ptr::eq(shared(), shared()));
    }

    #[test]
    fn test_shared_uses_is_defined() {
        let mut provided = Map::new();
        provided.insert("a".into(), json!(null));
        assert!(validate(Some(&provided), &[Requirement::required("a")]).is_ok());
    }

    #[test]
    fn test_shared_json() {
        let err = validate_json(Some(&json!({})), &json!([["a", "b"]])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "One of the following parameters must be included: 'a', 'b'."
        );
    }

    #[tokio::test]
    async fn test_shared_async() {
        let provided = Map::new();
        let rules = [Requirement::required("a")];
        let err = validate_async(Some(&provided), &rules).await.unwrap_err();
        assert!(err.is_validation());
    }
}
