//! Validator configuration
//!
//! Configuration is plain data so it can live in a settings file. Anything
//! that needs behavior (the default predicate) is referred to by the name it
//! has in the validator's [`PredicateRegistry`](crate::predicate::PredicateRegistry).
//!
//! ```
//! use paramcheck::{Requirement, Validator, ValidatorConfig};
//! use serde_json::{json, Map};
//!
//! let config = ValidatorConfig::default().with_default_predicate("not_null");
//! let validator = Validator::from_config(&config).unwrap();
//!
//! let mut provided = Map::new();
//! provided.insert("id".into(), json!(null));
//!
//! let err = validator
//!     .validate(Some(&provided), &[Requirement::required("id")])
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "Invalid value of 'null' was provided for parameter 'id'.");
//! ```

/// Recognized validator options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidatorConfig {
    /// Registered predicate that replaces "is defined" as the validity check
    /// for required and one-of rules.
    pub default_predicate: Option<String>,
}

impl ValidatorConfig {
    /// Set the default predicate by registry name.
    pub fn with_default_predicate(mut self, name: impl Into<String>) -> Self {
        self.default_predicate = Some(name.into());
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: ValidatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_deserialize_default_predicate() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"default_predicate": "non_empty"}"#).unwrap();
        assert_eq!(config.default_predicate.as_deref(), Some("non_empty"));
    }
}
