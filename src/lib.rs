//! # Paramcheck
//!
//! Declarative validation of named parameters.
//!
//! Give a [`Validator`] the values a caller provided and an ordered list of
//! [`Requirement`]s. It evaluates every requirement in one pass, extracts the
//! parameters that passed, and reports *all* failing rules together in a
//! single [`ValidationError`] instead of stopping at the first.
//!
//! ## Quick Example
//!
//! ```rust
//! use paramcheck::predicate::gt;
//! use paramcheck::{ErrorKind, Requirement};
//! use serde_json::json;
//!
//! let provided = json!({"user": "ada", "x": 10});
//! let provided = provided.as_object().unwrap();
//!
//! let rules = [
//!     Requirement::required("user"),
//!     Requirement::one_of(["email", "phone"]),
//!     Requirement::custom("x", gt(30.0)),
//! ];
//!
//! match paramcheck::validate(Some(provided), &rules) {
//!     Ok(extracted) => println!("valid: {:?}", extracted),
//!     Err(err) if err.kind() == ErrorKind::Validation => {
//!         assert_eq!(
//!             err.to_string(),
//!             "One of the following parameters must be included: 'email', 'phone'. \
//!              Invalid value of '10' was provided for parameter 'x'."
//!         );
//!     }
//!     Err(err) => panic!("caller bug: {}", err),
//! }
//! ```
//!
//! Requirements can also be written as data and checked with
//! [`validate_json`]:
//!
//! ```rust
//! use serde_json::json;
//!
//! let extracted = paramcheck::validate_json(
//!     Some(&json!({"id": 1, "phone": "555"})),
//!     &json!(["id", ["email", "phone"], {"id": "number"}]),
//! )
//! .unwrap();
//! assert_eq!(extracted.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod display;
pub mod error;
pub mod predicate;
pub mod requirement;
pub mod semigroup;
mod shared;
pub mod testing;
pub mod validation;
pub mod validator;

// Re-exports
pub use config::ValidatorConfig;
pub use error::{Error, ErrorKind, UsageError, ValidationError};
pub use requirement::Requirement;
pub use semigroup::Semigroup;
pub use shared::{
    shared, validate, validate_async, validate_into, validate_into_async, validate_json,
};
pub use validation::Validation;
pub use validator::{Validator, ValidatorBuilder};

// Used by the assertion macros and by callers building provided values.
pub use serde_json;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, ErrorKind, ValidationError};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::requirement::Requirement;
    pub use crate::validator::Validator;
}
