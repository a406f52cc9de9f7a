//! Per-rule outcome type
//!
//! Each requirement evaluates to a `Validation`: either the parameters it
//! extracted, or the failure it contributes to the aggregate error. Unlike
//! `Result`, combining two validations keeps *both* failures, which is what
//! lets a single pass over the requirement list report every problem at once.
//!
//! # Examples
//!
//! ```
//! use paramcheck::{Validation, ValidationError};
//!
//! let outcomes = vec![
//!     Validation::failure(ValidationError::new("'a' missing.")),
//!     Validation::success(vec![1]),
//!     Validation::failure(ValidationError::new("'b' invalid.")),
//! ];
//!
//! let mut extracted: Vec<i32> = Vec::new();
//! let outcome = Validation::collect_into(outcomes, &mut extracted);
//! assert_eq!(extracted, vec![1]);
//! assert_eq!(
//!     outcome.into_result().unwrap_err().message(),
//!     "'a' missing. 'b' invalid."
//! );
//! ```

use crate::semigroup::{accumulate, Semigroup};

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }
}

impl<T, E: Semigroup> Validation<T, E>
where
    T: IntoIterator,
{
    /// Fold outcomes in order, extending `target` with every success.
    ///
    /// Successes are merged as they are reached, so `target` also receives
    /// the successes that precede or follow a failure. Failures are combined
    /// in the order they appear.
    pub fn collect_into<I, C>(validations: I, target: &mut C) -> Validation<(), E>
    where
        I: IntoIterator<Item = Validation<T, E>>,
        C: Extend<T::Item>,
    {
        let mut failures = None;

        for validation in validations {
            match validation {
                Validation::Success(values) => target.extend(values),
                Validation::Failure(error) => failures = accumulate(failures, error),
            }
        }

        match failures {
            None => Validation::Success(()),
            Some(error) => Validation::Failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_into_all_success() {
        let outcomes = vec![
            Validation::<_, Vec<&str>>::success(vec![1, 2]),
            Validation::success(vec![3]),
        ];
        let mut target: Vec<i32> = Vec::new();
        assert_eq!(
            Validation::collect_into(outcomes, &mut target),
            Validation::Success(())
        );
        assert_eq!(target, vec![1, 2, 3]);
    }

    #[test]
    fn test_collect_into_keeps_failure_order() {
        let outcomes = vec![
            Validation::failure(vec!["first"]),
            Validation::success(vec![1]),
            Validation::failure(vec!["second"]),
        ];
        let mut target: Vec<i32> = Vec::new();
        assert_eq!(
            Validation::collect_into(outcomes, &mut target),
            Validation::Failure(vec!["first", "second"])
        );
        assert_eq!(target, vec![1]);
    }

    #[test]
    fn test_collect_into_empty() {
        let outcomes: Vec<Validation<Vec<i32>, Vec<&str>>> = vec![];
        let mut target = vec![0];
        assert!(Validation::collect_into(outcomes, &mut target).is_success());
        assert_eq!(target, vec![0]);
    }

    #[test]
    fn test_into_result() {
        let v = Validation::<i32, _>::failure("bad".to_string());
        assert!(v.is_failure());
        assert_eq!(v.into_result(), Err("bad".to_string()));
        assert_eq!(Validation::<_, String>::success(1).into_result(), Ok(1));
    }
}
