//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and logical
//! combinators for composing predicates over parameter values.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// A composable check over a parameter's value.
///
/// The value is `None` when the parameter was not supplied at all, which is
/// different from being supplied as `null`.
///
/// # Example
///
/// ```rust
/// use paramcheck::predicate::*;
/// use serde_json::json;
///
/// let adult = is_number().and(ge(18.0));
/// assert!(adult.check(Some(&json!(25))));
/// assert!(!adult.check(Some(&json!(12))));
/// assert!(!adult.check(None));
/// ```
pub trait Predicate: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: Option<&Value>) -> bool;
}

// Blanket impl for closures
impl<F> Predicate for F
where
    F: Fn(Option<&Value>) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        self(value)
    }
}

/// A predicate shared between requirements, registries and validators.
pub type SharedPredicate = Arc<dyn Predicate>;

/// Wraps a closure so its argument type is inferred.
///
/// ```rust
/// use paramcheck::predicate::*;
/// use serde_json::{json, Value};
///
/// let over_30 = from_fn(|v| v.and_then(Value::as_f64).is_some_and(|n| n > 30.0));
/// assert!(over_30.check(Some(&json!(31))));
/// assert!(!over_30.check(Some(&json!(10))));
/// ```
#[derive(Clone, Copy)]
pub struct FromFn<F>(pub F);

impl<F> Predicate for FromFn<F>
where
    F: Fn(Option<&Value>) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        (self.0)(value)
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn")
    }
}

/// Create a predicate from a closure over `Option<&Value>`.
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(Option<&Value>) -> bool + Send + Sync,
{
    FromFn(f)
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All methods return concrete types.
pub trait PredicateExt: Predicate + Sized {
    /// Both predicates must hold.
    fn and<P: Predicate>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Either predicate must hold.
    ///
    /// ```rust
    /// use paramcheck::predicate::*;
    /// use serde_json::json;
    ///
    /// let id = is_string().or(is_number());
    /// assert!(id.check(Some(&json!("abc"))));
    /// assert!(id.check(Some(&json!(7))));
    /// assert!(!id.check(Some(&json!(null))));
    /// ```
    fn or<P: Predicate>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Erase the concrete type so the predicate can be stored and shared.
    fn shared(self) -> SharedPredicate
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<P: Predicate> PredicateExt for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for And<P1, P2> {
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for Or<P1, P2> {
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<P: Predicate> Predicate for Not<P> {
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        !self.0.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn present(v: Option<&Value>) -> bool {
        v.is_some()
    }

    #[test]
    fn test_fn_item_is_predicate() {
        assert!(present.check(Some(&json!(0))));
        assert!(!present.check(None));
    }

    #[test]
    fn test_and() {
        let p = from_fn(present).and(from_fn(|v| v != Some(&Value::Null)));
        assert!(p.check(Some(&json!(1))));
        assert!(!p.check(Some(&Value::Null)));
        assert!(!p.check(None));
    }

    #[test]
    fn test_or() {
        let p = from_fn(|v| v.is_none()).or(from_fn(|v| v == Some(&json!(5))));
        assert!(p.check(None));
        assert!(p.check(Some(&json!(5))));
        assert!(!p.check(Some(&json!(6))));
    }

    #[test]
    fn test_not() {
        let p = from_fn(present).not();
        assert!(p.check(None));
        assert!(!p.check(Some(&json!("x"))));
    }

    #[test]
    fn test_shared_predicate_delegates() {
        let shared = from_fn(present).shared();
        let cloned = Arc::clone(&shared);
        assert!(cloned.check(Some(&json!([]))));
        assert!(!shared.check(None));
    }
}
