//! Helpers over the dynamic [`Value`] model.

use serde_json::Value;

/// Returns the name of the JSON kind of `value`.
///
/// Used in error messages.
///
/// # Examples
///
/// ```
/// use funcalg::value::kind_of;
/// use serde_json::json;
///
/// assert_eq!(kind_of(&json!(null)), "null");
/// assert_eq!(kind_of(&json!([1, 2])), "array");
/// assert_eq!(kind_of(&json!({"a": 1})), "object");
/// ```
#[must_use]
pub const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns `false` for `null`, `false`, zero and the empty string, `true`
/// for everything else.
///
/// Arrays and objects are truthy even when empty.
///
/// # Examples
///
/// ```
/// use funcalg::value::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!(1)));
/// assert!(is_truthy(&json!([])));
/// assert!(!is_truthy(&json!(0)));
/// assert!(!is_truthy(&json!("")));
/// ```
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|float| float != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
