//! Loose string rendering of parameter values for error messages
//!
//! Messages quote the offending value the way a dynamic caller would print
//! it, not as JSON: strings appear without quotes, an absent value appears as
//! `undefined`, and objects collapse to `[object Object]`.

use serde_json::{Number, Value};

/// Rendering used for a parameter that was never supplied.
pub const UNDEFINED: &str = "undefined";

/// Render a possibly-absent value for inclusion in a message.
///
/// # Examples
///
/// ```
/// use paramcheck::display::render_value;
/// use serde_json::json;
///
/// assert_eq!(render_value(None), "undefined");
/// assert_eq!(render_value(Some(&json!("abc"))), "abc");
/// assert_eq!(render_value(Some(&json!(31.0))), "31");
/// assert_eq!(render_value(Some(&json!([1, null, "x"]))), "1,,x");
/// assert_eq!(render_value(Some(&json!({"k": 1}))), "[object Object]");
/// ```
pub fn render_value(value: Option<&Value>) -> String {
    match value {
        None => UNDEFINED.to_string(),
        Some(value) => render_present(value),
    }
}

fn render_present(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => render_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => render_present(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn render_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) => render_float(f),
        None => n.to_string(),
    }
}

// Plain decimals inside [1e-6, 1e21), exponent form with a signed exponent
// outside it. Negative zero prints as `0`.
fn render_float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let magnitude = f.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return f.to_string();
    }
    let exp = format!("{:e}", f);
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exp,
    }
}
