//! Property-based tests for single-pass validation

use proptest::prelude::*;
use paramcheck::{Requirement, Semigroup, ValidationError};
use serde_json::{Map, Value};

fn param_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,10}".prop_map(Value::String),
    ]
}

fn provided() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(param_name(), scalar(), 1..10)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_satisfied_rules_extract_exactly_named_params(
        provided in provided(),
        pick in any::<prop::sample::Index>(),
    ) {
        let names: Vec<String> = provided.keys().cloned().collect();
        let chosen = &names[..=pick.index(names.len())];
        let rules: Vec<Requirement> =
            chosen.iter().map(|n| Requirement::required(n.as_str())).collect();

        let extracted = paramcheck::validate(Some(&provided), &rules).unwrap();

        prop_assert_eq!(extracted.len(), chosen.len());
        for name in chosen {
            prop_assert_eq!(extracted.get(name), provided.get(name));
        }
    }

    #[test]
    fn prop_absent_required_always_reported(
        provided in provided(),
        missing in "[A-Z]{1,6}",
    ) {
        // generated keys are lowercase, so `missing` is never provided
        let rules = [Requirement::required(missing.as_str())];
        let err = paramcheck::validate(Some(&provided), &rules).unwrap_err();
        let expected = format!(
            "Invalid value of 'undefined' was provided for parameter '{}'.",
            missing
        );
        prop_assert!(err.to_string().contains(&expected));
    }

    #[test]
    fn prop_every_failure_is_reported_in_order(
        provided in provided(),
        missing in prop::collection::vec("[A-Z]{1,6}", 1..8),
    ) {
        let rules: Vec<Requirement> =
            missing.iter().map(|n| Requirement::required(n.as_str())).collect();
        let err = paramcheck::validate(Some(&provided), &rules).unwrap_err();
        let validation = err.into_validation().unwrap();

        prop_assert_eq!(validation.messages().len(), missing.len());
        for (message, name) in validation.messages().iter().zip(&missing) {
            let suffix = format!("parameter '{}'.", name);
            prop_assert!(message.ends_with(&suffix));
        }
    }

    #[test]
    fn prop_validation_is_idempotent(
        provided in provided(),
        names in prop::collection::vec(param_name(), 0..6),
    ) {
        let rules = vec![Requirement::one_of(names.clone())];
        let first = paramcheck::validate(Some(&provided), &rules);
        let second = paramcheck::validate(Some(&provided), &rules);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_error_combine_is_associative(
        a in "[a-z]{1,5}",
        b in "[a-z]{1,5}",
        c in "[a-z]{1,5}",
    ) {
        let ea = ValidationError::new(a);
        let eb = ValidationError::new(b);
        let ec = ValidationError::new(c);
        prop_assert_eq!(
            ea.clone().combine(eb.clone()).combine(ec.clone()),
            ea.combine(eb.combine(ec))
        );
    }
}
