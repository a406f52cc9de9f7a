//! The parameter validator
//!
//! A [`Validator`] checks a map of provided values against an ordered list of
//! [`Requirement`]s in a single pass. Every rule is evaluated; values that
//! pass are extracted, and the failures of all rules that did not pass are
//! reported together in one [`ValidationError`].
//!
//! # Example
//!
//! ```
//! use paramcheck::predicate::gt;
//! use paramcheck::{Requirement, Validator};
//! use serde_json::{json, Map, Value};
//!
//! let provided: Map<String, Value> = json!({"id": 7, "email": "a@b.c", "x": 10})
//!     .as_object()
//!     .cloned()
//!     .unwrap();
//!
//! let validator = Validator::new();
//!
//! let extracted = validator
//!     .validate(
//!         Some(&provided),
//!         &[Requirement::required("id"), Requirement::one_of(["email", "phone"])],
//!     )
//!     .unwrap();
//! assert_eq!(Value::Object(extracted), json!({"id": 7, "email": "a@b.c"}));
//!
//! let err = validator
//!     .validate(
//!         Some(&provided),
//!         &[Requirement::required("name"), Requirement::custom("x", gt(30.0))],
//!     )
//!     .unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Invalid value of 'undefined' was provided for parameter 'name'. \
//!      Invalid value of '10' was provided for parameter 'x'."
//! );
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future;
use serde_json::{Map, Value};

use crate::config::ValidatorConfig;
use crate::display::render_value;
use crate::error::{Error, UsageError, ValidationError};
use crate::predicate::{is_defined, Predicate, PredicateRegistry, SharedPredicate};
use crate::requirement::{parse_requirements, Requirement};
use crate::validation::Validation;

/// Name/value pairs a single rule extracted.
type Extracted = Vec<(String, Value)>;

/// Checks provided parameters against requirement lists.
///
/// The default predicate and registry are fixed at construction, so a
/// validator can be shared freely between threads.
#[derive(Clone)]
pub struct Validator {
    default_predicate: SharedPredicate,
    registry: PredicateRegistry,
}

impl Validator {
    /// A validator whose default predicate is "is defined", with the
    /// built-in predicates registered.
    pub fn new() -> Self {
        Validator {
            default_predicate: Arc::new(is_defined()),
            registry: PredicateRegistry::with_builtins(),
        }
    }

    /// Start building a customized validator.
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Build a validator from configuration, resolving names against the
    /// built-in registry.
    ///
    /// Fails with a usage error if the configured default predicate is not
    /// registered.
    pub fn from_config(config: &ValidatorConfig) -> Result<Self, Error> {
        Self::builder().config(config).build()
    }

    /// A validator with `predicate` as its default validity check.
    ///
    /// ```
    /// use paramcheck::predicate::non_empty;
    /// use paramcheck::{Requirement, Validator};
    /// use serde_json::{json, Map};
    ///
    /// let validator = Validator::with_default_predicate(non_empty());
    /// let mut provided = Map::new();
    /// provided.insert("name".into(), json!(""));
    ///
    /// assert!(validator
    ///     .validate(Some(&provided), &[Requirement::required("name")])
    ///     .is_err());
    /// ```
    pub fn with_default_predicate<P>(predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        Validator {
            default_predicate: Arc::new(predicate),
            registry: PredicateRegistry::with_builtins(),
        }
    }

    /// Predicates available to requirement documents.
    pub fn registry(&self) -> &PredicateRegistry {
        &self.registry
    }

    /// Apply the default validity predicate to a value.
    pub fn is_valid(&self, value: Option<&Value>) -> bool {
        self.default_predicate.check(value)
    }

    /// Validate `provided` against `requirements`, returning a new map with
    /// every parameter that passed its rule.
    ///
    /// `provided` being `None` fails with
    /// `A paramsProvided object is required.` The input map is never
    /// modified.
    pub fn validate(
        &self,
        provided: Option<&Map<String, Value>>,
        requirements: &[Requirement],
    ) -> Result<Map<String, Value>, Error> {
        let mut extracted = Map::new();
        self.validate_into(provided, requirements, &mut extracted)?;
        Ok(extracted)
    }

    /// Validate and merge the passing parameters onto `target`.
    ///
    /// Returns the same map that was passed in. Parameters that passed their
    /// rule are merged even when another rule fails and an error is returned.
    ///
    /// ```
    /// use paramcheck::{Requirement, Validator};
    /// use serde_json::{json, Map};
    ///
    /// let mut provided = Map::new();
    /// provided.insert("id".into(), json!(3));
    ///
    /// let mut request = Map::new();
    /// request.insert("trace".into(), json!("abc"));
    ///
    /// let merged = Validator::new()
    ///     .validate_into(Some(&provided), &[Requirement::required("id")], &mut request)
    ///     .unwrap();
    /// assert_eq!(merged.len(), 2);
    /// assert_eq!(request["id"], json!(3));
    /// ```
    pub fn validate_into<'t>(
        &self,
        provided: Option<&Map<String, Value>>,
        requirements: &[Requirement],
        target: &'t mut Map<String, Value>,
    ) -> Result<&'t mut Map<String, Value>, Error> {
        let provided = provided.ok_or_else(ValidationError::missing_provided)?;
        self.run(provided, requirements, target)?;
        Ok(target)
    }

    /// Validate a JSON value against a requirements document.
    ///
    /// The document is read with the validator's registry (see
    /// [`parse_requirements`]). A missing, `null`, `false`, `0` or `""`
    /// provided value fails as if nothing were provided; any other non-object
    /// value has no parameters.
    ///
    /// ```
    /// use paramcheck::Validator;
    /// use serde_json::{json, Value};
    ///
    /// let validator = Validator::new();
    /// let provided = json!({"id": 1, "tags": ["a"]});
    ///
    /// let extracted = validator
    ///     .validate_json(Some(&provided), &json!(["id", {"tags": "array"}]))
    ///     .unwrap();
    /// assert_eq!(Value::Object(extracted), provided);
    ///
    /// let err = validator.validate_json(Some(&provided), &json!("id")).unwrap_err();
    /// assert!(err.is_usage());
    /// ```
    pub fn validate_json(
        &self,
        provided: Option<&Value>,
        requirements: &Value,
    ) -> Result<Map<String, Value>, Error> {
        let mut extracted = Map::new();
        self.validate_json_into(provided, requirements, &mut extracted)?;
        Ok(extracted)
    }

    /// [`validate_json`](Self::validate_json), merging onto `target`.
    ///
    /// The whole document is read before any rule runs, so a usage error
    /// leaves `target` untouched.
    pub fn validate_json_into<'t>(
        &self,
        provided: Option<&Value>,
        requirements: &Value,
        target: &'t mut Map<String, Value>,
    ) -> Result<&'t mut Map<String, Value>, Error> {
        let empty = Map::new();
        let provided = match provided_params(provided)? {
            Some(map) => map,
            None => &empty,
        };
        let rules = parse_requirements(requirements, &self.registry)?;
        self.run(provided, &rules, target)?;
        Ok(target)
    }

    /// Deferred form of [`validate`](Self::validate).
    ///
    /// Nothing runs until the returned future is first polled, and both the
    /// extracted map and any error arrive only through the future's output.
    ///
    /// ```
    /// use paramcheck::{ErrorKind, Requirement, Validator};
    /// use serde_json::Map;
    ///
    /// # tokio_test::block_on(async {
    /// let validator = Validator::new();
    /// let provided = Map::new();
    /// let rules = [Requirement::required("id")];
    ///
    /// let pending = validator.validate_async(Some(&provided), &rules);
    /// let err = pending.await.unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Validation);
    /// # });
    /// ```
    pub fn validate_async<'a>(
        &'a self,
        provided: Option<&'a Map<String, Value>>,
        requirements: &'a [Requirement],
    ) -> impl Future<Output = Result<Map<String, Value>, Error>> + 'a {
        future::lazy(move |_| self.validate(provided, requirements))
    }

    /// Deferred form of [`validate_into`](Self::validate_into).
    pub fn validate_into_async<'a>(
        &'a self,
        provided: Option<&'a Map<String, Value>>,
        requirements: &'a [Requirement],
        target: &'a mut Map<String, Value>,
    ) -> impl Future<Output = Result<&'a mut Map<String, Value>, Error>> + 'a {
        future::lazy(move |_| self.validate_into(provided, requirements, target))
    }

    /// Deferred form of [`validate_json`](Self::validate_json).
    pub fn validate_json_async<'a>(
        &'a self,
        provided: Option<&'a Value>,
        requirements: &'a Value,
    ) -> impl Future<Output = Result<Map<String, Value>, Error>> + 'a {
        future::lazy(move |_| self.validate_json(provided, requirements))
    }

    /// Run a validation with owned inputs on a tokio task.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use paramcheck::{Requirement, Validator};
    /// use serde_json::{json, Map};
    ///
    /// # tokio_test::block_on(async {
    /// let validator = Arc::new(Validator::new());
    /// let mut provided = Map::new();
    /// provided.insert("id".into(), json!(1));
    ///
    /// let handle = validator.spawn_validate(Some(provided), vec![Requirement::required("id")]);
    /// let extracted = handle.await.unwrap().unwrap();
    /// assert_eq!(extracted["id"], json!(1));
    /// # });
    /// ```
    #[cfg(feature = "async")]
    pub fn spawn_validate(
        self: &Arc<Self>,
        provided: Option<Map<String, Value>>,
        requirements: Vec<Requirement>,
    ) -> tokio::task::JoinHandle<Result<Map<String, Value>, Error>> {
        let validator = Arc::clone(self);
        tokio::spawn(async move { validator.validate(provided.as_ref(), &requirements) })
    }

    fn run(
        &self,
        provided: &Map<String, Value>,
        requirements: &[Requirement],
        target: &mut Map<String, Value>,
    ) -> Result<(), ValidationError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(requirements = requirements.len(), "validating parameters");

        let outcomes = requirements
            .iter()
            .map(|requirement| self.check(provided, requirement));

        match Validation::collect_into(outcomes, target).into_result() {
            Ok(()) => Ok(()),
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    failures = error.messages().len(),
                    "parameter validation failed"
                );
                Err(error)
            }
        }
    }

    fn check(
        &self,
        provided: &Map<String, Value>,
        requirement: &Requirement,
    ) -> Validation<Extracted, ValidationError> {
        if !requirement.is_active() {
            #[cfg(feature = "tracing")]
            tracing::trace!(?requirement, "ignoring empty requirement");
            return Validation::success(Vec::new());
        }

        match requirement {
            Requirement::Required(name) => check_param(provided, name, &*self.default_predicate),
            Requirement::Custom { name, predicate } => check_param(provided, name, &**predicate),
            Requirement::OneOf(names) => {
                let mut any_passed = false;
                let mut extracted = Vec::new();
                for name in names {
                    let value = provided.get(name);
                    if self.default_predicate.check(value) {
                        any_passed = true;
                        if let Some(value) = value {
                            extracted.push((name.clone(), value.clone()));
                        }
                    }
                }
                if any_passed {
                    Validation::success(extracted)
                } else {
                    Validation::failure(ValidationError::none_of(names))
                }
            }
        }
    }
}

// An absent value that passes extracts nothing.
fn check_param(
    provided: &Map<String, Value>,
    name: &str,
    predicate: &dyn Predicate,
) -> Validation<Extracted, ValidationError> {
    let value = provided.get(name);
    if predicate.check(value) {
        Validation::success(
            value
                .map(|v| (name.to_string(), v.clone()))
                .into_iter()
                .collect(),
        )
    } else {
        Validation::failure(ValidationError::invalid_value(name, &render_value(value)))
    }
}

// Falsy inputs count as "nothing provided"; other non-objects have no keys.
fn provided_params(
    provided: Option<&Value>,
) -> Result<Option<&Map<String, Value>>, ValidationError> {
    let absent = match provided {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    };
    if absent {
        return Err(ValidationError::missing_provided());
    }
    Ok(provided.and_then(Value::as_object))
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
enum DefaultChoice {
    Builtin,
    Named(String),
    Predicate(SharedPredicate),
}

/// Builder for [`Validator`].
///
/// ```
/// use paramcheck::predicate::{from_fn, not_null};
/// use paramcheck::{Validator, ValidatorConfig};
/// use serde_json::{json, Value};
///
/// let validator = Validator::builder()
///     .predicate("even", from_fn(|v| v.and_then(Value::as_i64).is_some_and(|n| n % 2 == 0)))
///     .default_predicate(not_null())
///     .build()
///     .unwrap();
///
/// let provided = json!({"n": 4, "m": null});
/// assert!(validator.validate_json(Some(&provided), &json!([{"n": "even"}])).is_ok());
/// assert!(validator.validate_json(Some(&provided), &json!(["m"])).is_err());
///
/// let err = Validator::builder()
///     .config(&ValidatorConfig::default().with_default_predicate("missing"))
///     .build()
///     .unwrap_err();
/// assert!(err.is_usage());
/// ```
#[derive(Clone)]
pub struct ValidatorBuilder {
    registry: PredicateRegistry,
    default: DefaultChoice,
}

impl ValidatorBuilder {
    /// A builder with the built-in registry and "is defined" as default.
    pub fn new() -> Self {
        ValidatorBuilder {
            registry: PredicateRegistry::with_builtins(),
            default: DefaultChoice::Builtin,
        }
    }

    /// Register a named predicate for requirement documents.
    pub fn predicate<P>(mut self, name: impl Into<String>, predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        self.registry.register(name, predicate);
        self
    }

    /// Replace the whole registry.
    pub fn registry(mut self, registry: PredicateRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Use `predicate` as the default validity check.
    pub fn default_predicate<P>(mut self, predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        self.default = DefaultChoice::Predicate(Arc::new(predicate));
        self
    }

    /// Use the registered predicate `name` as the default validity check.
    /// Resolved when the validator is built.
    pub fn default_predicate_named(mut self, name: impl Into<String>) -> Self {
        self.default = DefaultChoice::Named(name.into());
        self
    }

    /// Apply configuration options.
    pub fn config(self, config: &ValidatorConfig) -> Self {
        match &config.default_predicate {
            Some(name) => self.default_predicate_named(name.as_str()),
            None => self,
        }
    }

    /// Build the validator.
    ///
    /// Fails with a usage error if a named default predicate is not in the
    /// registry.
    pub fn build(self) -> Result<Validator, Error> {
        let default_predicate: SharedPredicate = match self.default {
            DefaultChoice::Builtin => Arc::new(is_defined()),
            DefaultChoice::Predicate(predicate) => predicate,
            DefaultChoice::Named(name) => match self.registry.get(&name) {
                Some(predicate) => predicate,
                None => return Err(UsageError::DefaultPredicateNotCallable { name }.into()),
            },
        };

        Ok(Validator {
            default_predicate,
            registry: self.registry,
        })
    }
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidatorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
