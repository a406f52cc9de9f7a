//! Semigroup trait for accumulating rule failures
//!
//! A Semigroup is a type with an associative binary operation. Validation of a
//! requirement list never stops at the first failing rule; every failure is
//! folded into the previous ones with [`Semigroup::combine`], so the order in
//! which rules failed is the order in which they are reported.
//!
//! # Examples
//!
//! ```
//! use paramcheck::{Semigroup, ValidationError};
//!
//! let first = ValidationError::new("One of the following parameters must be included: 'a', 'b'.");
//! let second = ValidationError::new("Invalid value of '10' was provided for parameter 'x'.");
//!
//! let combined = first.combine(second);
//! assert_eq!(combined.messages().len(), 2);
//! assert!(combined.message().starts_with("One of the following"));
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes both sides by value; clone first if the originals are
/// still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use paramcheck::Semigroup;
    ///
    /// let failures = vec!["'a' missing"].combine(vec!["'b' missing"]);
    /// assert_eq!(failures, vec!["'a' missing", "'b' missing"]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// Combine an optional accumulator with a new failure.
///
/// Used when folding failures that may not have started yet.
pub(crate) fn accumulate<S: Semigroup>(acc: Option<S>, next: S) -> Option<S> {
    Some(match acc {
        Some(existing) => existing.combine(next),
        None => next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_semigroup() {
        let v1 = vec![1, 2];
        let v2 = vec![3];
        assert_eq!(v1.combine(v2), vec![1, 2, 3]);
    }

    #[test]
    fn test_vec_semigroup_empty() {
        let v1: Vec<i32> = vec![];
        assert_eq!(v1.combine(vec![1]), vec![1]);
    }

    #[test]
    fn test_vec_associativity() {
        let a = vec!["a"];
        let b = vec!["b"];
        let c = vec!["c"];
        assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }

    #[test]
    fn test_accumulate_starts_with_first_value() {
        let acc = accumulate(None, vec!["first"]);
        assert_eq!(acc, Some(vec!["first"]));

        let acc = accumulate(acc, vec!["second"]);
        assert_eq!(acc, Some(vec!["first", "second"]));
    }
}
