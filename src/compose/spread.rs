//! Conversion between the variadic and the single-array calling conventions.

use serde_json::Value;

use crate::error::Error;
use crate::function::{Function, first_argument};
use crate::value::kind_of;

/// Returns a function that gathers all of its arguments into one array and
/// passes that array to `function`.
///
/// # Examples
///
/// ```
/// use funcalg::Function;
/// use funcalg::compose::spread;
/// use serde_json::json;
///
/// let length = Function::unary(|list| json!(list.as_array().unwrap().len()));
/// let count_arguments = spread(length);
///
/// assert_eq!(
///     count_arguments.apply(vec![json!(1), json!(2), json!(3)]).unwrap(),
///     json!(3)
/// );
/// ```
pub fn spread(function: Function) -> Function {
    Function::new(move |arguments| function.call(vec![Value::Array(arguments)]))
}

/// Returns a function that takes one array and passes its elements to
/// `function` as separate arguments. The inverse of [`spread`].
///
/// The returned function fails with [`Error::NotASequence`] when its first
/// argument is not an array (a missing argument counts as `null`).
///
/// # Examples
///
/// ```
/// use funcalg::Function;
/// use funcalg::compose::unspread;
/// use serde_json::json;
///
/// let subtract = Function::binary(|x, y| json!(x.as_i64().unwrap() - y.as_i64().unwrap()));
/// let subtract_pair = unspread(subtract);
///
/// assert_eq!(subtract_pair.apply(vec![json!([10, 4])]).unwrap(), json!(6));
/// assert!(subtract_pair.apply(vec![json!(10)]).is_err());
/// ```
pub fn unspread(function: Function) -> Function {
    Function::new(move |arguments| match first_argument(arguments) {
        Value::Array(elements) => function.call(elements),
        other => Err(Error::NotASequence {
            found: kind_of(&other),
        }),
    })
}
