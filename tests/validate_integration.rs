//! End-to-end behavior of the synchronous validator
//!
//! These tests exercise the public API the way a request handler would: build
//! a provided-values map, state the requirements, and branch on the result.

use paramcheck::predicate::{from_fn, gt, is_string, PredicateExt};
use paramcheck::{assert_extracted, assert_validation_error};
use paramcheck::{Error, ErrorKind, Requirement, ValidationError, Validator};
use serde_json::{json, Map, Value};

fn params(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

// A handler-style function returning the extracted parameters.
fn create_user(body: &Map<String, Value>) -> Result<Map<String, Value>, Error> {
    paramcheck::validate(
        Some(body),
        &[
            Requirement::required("username"),
            Requirement::one_of(["email", "phone"]),
            Requirement::custom("age", gt(17.0)),
        ],
    )
}

#[test]
fn test_all_rules_satisfied_extracts_exactly_named_params() {
    let body = params(json!({
        "username": "ada",
        "email": "ada@example.com",
        "age": 36,
        "ignored": "not a rule"
    }));

    assert_extracted!(
        create_user(&body),
        json!({"username": "ada", "email": "ada@example.com", "age": 36})
    );
}

#[test]
fn test_every_failing_rule_is_reported() {
    let body = params(json!({"age": 12}));

    assert_validation_error!(
        create_user(&body),
        "Invalid value of 'undefined' was provided for parameter 'username'. \
         One of the following parameters must be included: 'email', 'phone'. \
         Invalid value of '12' was provided for parameter 'age'."
    );
}

#[test]
fn test_required_absent_message() {
    let body = Map::new();
    let err = paramcheck::validate(Some(&body), &["token".into()]).unwrap_err();
    assert!(err
        .to_string()
        .contains("Invalid value of 'undefined' was provided for parameter 'token'."));
}

#[test]
fn test_one_of_with_exactly_one_present() {
    let body = params(json!({"b": "only"}));
    assert_extracted!(
        paramcheck::validate(Some(&body), &[Requirement::one_of(["a", "b"])]),
        json!({"b": "only"})
    );
}

#[test]
fn test_one_of_neither_present() {
    let body = params(json!({"c": 1}));
    let err = paramcheck::validate(Some(&body), &[Requirement::one_of(["a", "b"])]).unwrap_err();
    assert!(err
        .to_string()
        .contains("One of the following parameters must be included: 'a', 'b'."));
}

#[test]
fn test_custom_rule_evaluated_alongside_later_rules() {
    let body = params(json!({"x": 10}));
    let err = paramcheck::validate(
        Some(&body),
        &[
            Requirement::custom(
                "x",
                from_fn(|v| v.and_then(Value::as_f64).is_some_and(|n| n > 30.0)),
            ),
            Requirement::required("y"),
        ],
    )
    .unwrap_err();

    let validation = err.as_validation().expect("validation error");
    assert_eq!(
        validation.messages(),
        &[
            "Invalid value of '10' was provided for parameter 'x'.".to_string(),
            "Invalid value of 'undefined' was provided for parameter 'y'.".to_string(),
        ]
    );
}

#[test]
fn test_custom_rule_success() {
    let body = params(json!({"x": 31}));
    assert_extracted!(
        paramcheck::validate(Some(&body), &[Requirement::custom("x", gt(30.0))]),
        json!({"x": 31})
    );
}

#[test]
fn test_custom_rule_receives_absent_value() {
    let body = Map::new();
    let rule = Requirement::custom("note", from_fn(|v| v.is_none()));
    assert_extracted!(paramcheck::validate(Some(&body), &[rule]), json!({}));
}

#[test]
fn test_composed_predicate_messages_render_value() {
    let body = params(json!({"name": ["a", "b"], "meta": {"k": 1}}));
    let err = paramcheck::validate(
        Some(&body),
        &[
            Requirement::custom("name", is_string()),
            Requirement::custom("meta", is_string().or(gt(0.0))),
        ],
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid value of 'a,b' was provided for parameter 'name'. \
         Invalid value of '[object Object]' was provided for parameter 'meta'."
    );
}

#[test]
fn test_validating_twice_gives_equal_results() {
    let body = params(json!({"a": 1, "b": [1, 2]}));
    let rules = [Requirement::required("a"), Requirement::one_of(["b", "c"])];

    let first = paramcheck::validate(Some(&body), &rules).unwrap();
    let second = paramcheck::validate(Some(&body), &rules).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_target_is_merged_in_place() {
    let body = params(json!({"a": 1}));
    let mut request = params(json!({"request_id": "r-1"}));
    let before: *const Map<String, Value> = &request;

    let merged = paramcheck::validate_into(Some(&body), &["a".into()], &mut request).unwrap();
    assert!(std::ptr::eq(merged, before));
    assert_eq!(request, params(json!({"request_id": "r-1", "a": 1})));
}

#[test]
fn test_missing_provided_values() {
    assert_validation_error!(
        paramcheck::validate(None, &["a".into()]),
        "A paramsProvided object is required."
    );
}

#[test]
fn test_error_kind_allows_branching() {
    let body = Map::new();
    let outcome = match paramcheck::validate(Some(&body), &["a".into()]) {
        Ok(_) => "ok",
        Err(err) if err.kind() == ErrorKind::Validation => "bad request",
        Err(_) => "internal error",
    };
    assert_eq!(outcome, "bad request");
}

#[test]
fn test_validation_error_can_be_boxed() {
    fn handler(body: &Map<String, Value>) -> Result<(), Box<dyn std::error::Error>> {
        paramcheck::validate(Some(body), &["a".into()])?;
        Ok(())
    }

    let err = handler(&Map::new()).unwrap_err();
    let validation = err
        .downcast_ref::<Error>()
        .and_then(Error::as_validation)
        .expect("validation error");
    assert_eq!(validation.kind(), ErrorKind::Validation);
    assert_eq!(ValidationError::NAME, "ValidationError");
}

#[test]
fn test_custom_default_predicate_applies_to_required_and_one_of() {
    let validator = Validator::with_default_predicate(is_string());
    let body = params(json!({"a": 1, "b": "two", "c": 3}));

    let err = validator
        .validate(
            Some(&body),
            &[Requirement::required("a"), Requirement::one_of(["b", "c"])],
        )
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid value of '1' was provided for parameter 'a'."
    );

    assert_extracted!(
        validator.validate(Some(&body), &[Requirement::one_of(["b", "c"])]),
        json!({"b": "two"})
    );
}
