//! Error types for parameter validation
//!
//! Two kinds of failure come out of a validator:
//!
//! - [`ValidationError`]: the provided data did not satisfy the requirements.
//!   This is the expected, user-facing failure and carries every rule failure
//!   found in the pass.
//! - [`UsageError`]: the calling code handed the validator something it cannot
//!   work with (a requirements document that is not a list, a predicate name
//!   that does not resolve). These indicate a bug in the caller.
//!
//! Both are wrapped by [`Error`], and [`Error::kind`] lets callers branch on
//! "known validation failure" without matching on message text.
//!
//! ```
//! use paramcheck::{ErrorKind, Requirement, Validator};
//! use serde_json::Map;
//!
//! let provided = Map::new();
//! let err = Validator::new()
//!     .validate(Some(&provided), &[Requirement::required("id")])
//!     .unwrap_err();
//!
//! assert_eq!(err.kind(), ErrorKind::Validation);
//! assert_eq!(
//!     err.to_string(),
//!     "Invalid value of 'undefined' was provided for parameter 'id'."
//! );
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::semigroup::Semigroup;

/// Message used when no provided-values object was supplied at all.
pub const MISSING_PROVIDED_MESSAGE: &str = "A paramsProvided object is required.";

/// Discriminator for the two error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Provided data failed one or more requirements.
    Validation,
    /// The calling code violated the validator's contract.
    Usage,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Validation => f.write_str(ValidationError::NAME),
            ErrorKind::Usage => f.write_str("UsageError"),
        }
    }
}

/// Aggregate failure of one validation pass.
///
/// Holds each rule failure in the order it was encountered. The display form
/// is all of them joined with a single space.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    /// Name callers can match on when errors cross a string boundary.
    pub const NAME: &'static str = "ValidationError";

    /// Create an error with a single failure message.
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError {
            messages: vec![message.into()],
        }
    }

    /// The error raised when no provided-values object was given.
    pub fn missing_provided() -> Self {
        Self::new(MISSING_PROVIDED_MESSAGE)
    }

    /// Failure for a one-of rule where none of `names` passed.
    ///
    /// ```
    /// use paramcheck::ValidationError;
    ///
    /// let err = ValidationError::none_of(&["a".to_string(), "b".to_string()]);
    /// assert_eq!(
    ///     err.message(),
    ///     "One of the following parameters must be included: 'a', 'b'."
    /// );
    /// ```
    pub fn none_of(names: &[String]) -> Self {
        let quoted: Vec<String> = names.iter().map(|name| format!("'{}'", name)).collect();
        Self::new(format!(
            "One of the following parameters must be included: {}.",
            quoted.join(", ")
        ))
    }

    /// Failure for a single parameter whose value was rejected.
    pub fn invalid_value(param: &str, rendered_value: &str) -> Self {
        Self::new(format!(
            "Invalid value of '{}' was provided for parameter '{}'.",
            rendered_value, param
        ))
    }

    /// The combined, space-separated message.
    pub fn message(&self) -> String {
        self.messages.join(" ")
    }

    /// Individual failure messages in the order they were found.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Always [`ErrorKind::Validation`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

impl Semigroup for ValidationError {
    fn combine(mut self, other: Self) -> Self {
        self.messages.extend(other.messages);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl StdError for ValidationError {}

/// Contract violations by the calling code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// A requirements document was not a list.
    RequirementsNotArray {
        /// JSON type that was supplied instead.
        found: &'static str,
    },
    /// A custom rule did not name a registered predicate.
    PredicateNotCallable {
        /// Parameter the rule was attached to.
        param: String,
    },
    /// The configured default predicate does not resolve.
    DefaultPredicateNotCallable {
        /// Name that failed to resolve.
        name: String,
    },
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::RequirementsNotArray { found } => {
                write!(f, "requirements must be an array, found {}", found)
            }
            UsageError::PredicateNotCallable { param } => {
                write!(f, "predicate for parameter '{}' is not callable", param)
            }
            UsageError::DefaultPredicateNotCallable { name } => {
                write!(f, "default predicate '{}' is not callable", name)
            }
        }
    }
}

impl StdError for UsageError {}

/// Any failure a validator can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Provided data failed the requirements.
    Validation(ValidationError),
    /// The calling code misused the validator.
    Usage(UsageError),
}

impl Error {
    /// Which kind of failure this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::Usage(_) => ErrorKind::Usage,
        }
    }

    /// Returns true for data validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Returns true for caller contract violations.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_))
    }

    /// Borrow the validation failure, if that is what this is.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(e) => Some(e),
            Error::Usage(_) => None,
        }
    }

    /// Take the validation failure, if that is what this is.
    pub fn into_validation(self) -> Option<ValidationError> {
        match self {
            Error::Validation(e) => Some(e),
            Error::Usage(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(e) => write!(f, "{}", e),
            Error::Usage(e) => write!(f, "{}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Validation(e) => Some(e),
            Error::Usage(e) => Some(e),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Error::Validation(error)
    }
}

impl From<UsageError> for Error {
    fn from(error: UsageError) -> Self {
        Error::Usage(error)
    }
}
