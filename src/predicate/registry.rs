//! Named predicates for rules written as data
//!
//! Requirement documents and validator configuration refer to predicates by
//! name. A [`PredicateRegistry`] resolves those names to shared predicates.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::combinators::{Predicate, SharedPredicate};
use super::value::{
    is_array, is_bool, is_defined, is_number, is_object, is_string, non_empty, not_null,
};

/// Name under which [`is_defined`] is registered.
pub const DEFINED: &str = "defined";

/// Lookup table from predicate name to predicate.
///
/// # Example
///
/// ```rust
/// use paramcheck::predicate::*;
/// use serde_json::json;
///
/// let mut registry = PredicateRegistry::with_builtins();
/// registry.register("adult", ge(18.0));
///
/// let adult = registry.get("adult").unwrap();
/// assert!(adult.check(Some(&json!(30))));
/// assert!(registry.get("not_null").is_some());
/// assert!(registry.get("missing").is_none());
/// ```
#[derive(Clone, Default)]
pub struct PredicateRegistry {
    predicates: HashMap<String, SharedPredicate>,
}

impl PredicateRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in value predicates.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(DEFINED, is_defined());
        registry.register("not_null", not_null());
        registry.register("non_empty", non_empty());
        registry.register("string", is_string());
        registry.register("number", is_number());
        registry.register("boolean", is_bool());
        registry.register("array", is_array());
        registry.register("object", is_object());
        registry
    }

    /// Register `predicate` under `name`, replacing any earlier entry.
    pub fn register<P>(&mut self, name: impl Into<String>, predicate: P) -> &mut Self
    where
        P: Predicate + 'static,
    {
        self.predicates.insert(name.into(), Arc::new(predicate));
        self
    }

    /// Register an already shared predicate.
    pub fn register_shared(
        &mut self,
        name: impl Into<String>,
        predicate: SharedPredicate,
    ) -> &mut Self {
        self.predicates.insert(name.into(), predicate);
        self
    }

    /// Resolve a name.
    pub fn get(&self, name: &str) -> Option<SharedPredicate> {
        self.predicates.get(name).cloned()
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Number of registered predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl fmt::Debug for PredicateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.predicates.keys().collect();
        names.sort();
        f.debug_struct("PredicateRegistry")
            .field("names", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::gt;
    use serde_json::json;

    #[test]
    fn test_builtins_registered() {
        let registry = PredicateRegistry::with_builtins();
        for name in [
            "defined", "not_null", "non_empty", "string", "number", "boolean", "array", "object",
        ] {
            assert!(registry.contains(name), "missing builtin {name}");
        }
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = PredicateRegistry::new();
        registry.register("limit", gt(10.0));
        registry.register("limit", gt(100.0));

        let limit = registry.get("limit").unwrap();
        assert!(!limit.check(Some(&json!(50))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_debug_lists_sorted_names() {
        let mut registry = PredicateRegistry::new();
        registry.register("b", gt(1.0)).register("a", gt(2.0));
        assert_eq!(
            format!("{:?}", registry),
            r#"PredicateRegistry { names: ["a", "b"] }"#
        );
    }

    #[test]
    fn test_empty() {
        assert!(PredicateRegistry::new().is_empty());
    }
}
