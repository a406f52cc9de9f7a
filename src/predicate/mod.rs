//! Predicates over parameter values
//!
//! A predicate decides whether a single parameter's value is acceptable. The
//! value arrives as `Option<&Value>`: `None` means the caller never supplied
//! the parameter, which is distinct from supplying `null`.
//!
//! Predicates compose with `and`, `or` and `not`, and can be registered by
//! name in a [`PredicateRegistry`] so that requirement documents and
//! configuration can refer to them.
//!
//! # Example
//!
//! ```rust
//! use paramcheck::predicate::*;
//! use serde_json::json;
//!
//! let port = is_number().and(ge(1.0)).and(le(65535.0));
//! assert!(port.check(Some(&json!(8080))));
//! assert!(!port.check(Some(&json!(0))));
//! assert!(!port.check(Some(&json!("8080"))));
//! ```

mod combinators;
mod registry;
mod value;

// Re-export core trait
pub use combinators::{from_fn, And, FromFn, Not, Or, Predicate, PredicateExt, SharedPredicate};

pub use registry::{PredicateRegistry, DEFINED};

pub use value::{
    equals, ge, gt, is_array, is_bool, is_defined, is_number, is_object, is_string, le, lt,
    non_empty, not_null, Compare, Equals, IsDefined, IsType, JsonType, NonEmpty, NotNull,
};
