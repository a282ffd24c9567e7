//! [`map`] and [`filter`] over arrays.
//!
//! Both accept an array, or an object whose values are taken in insertion
//! order, and always produce a new array. `null` counts as an empty
//! collection.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::function::{Function, Output, first_argument};
use crate::value::{is_truthy, kind_of};

/// Returns a function that applies `function` to every element of its array
/// argument.
///
/// Unlike lodash, strings are not split into characters and numbers are not
/// treated as empty collections: both are rejected.
///
/// # Errors
///
/// The returned function fails with [`Error::NotACollection`] for scalar
/// arguments, and with the first error `function` returns.
///
/// # Examples
///
/// ```
/// use funcalg::Function;
/// use funcalg::combinator::map;
/// use serde_json::json;
///
/// let double_all = map(Function::unary(|x| json!(x.as_i64().unwrap() * 2)));
/// assert_eq!(double_all.apply(vec![json!([1, 2, 3])]).unwrap(), json!([2, 4, 6]));
/// ```
pub fn map(function: Function) -> Function {
    Function::new(move |arguments| {
        let mapped = elements_of(first_argument(arguments))?
            .into_iter()
            .map(|element| function.apply(vec![element]))
            .collect::<Result<Vec<_>>>()?;
        Ok(Output::Single(Value::Array(mapped)))
    })
}

/// Returns a function that keeps the elements of its array argument for
/// which `predicate` returns a truthy value.
///
/// See [`is_truthy`](crate::value::is_truthy) for which values count as true.
///
/// # Errors
///
/// The returned function fails with [`Error::NotACollection`] for scalar
/// arguments, and with the first error `predicate` returns.
///
/// # Examples
///
/// ```
/// use funcalg::Function;
/// use funcalg::combinator::filter;
/// use serde_json::json;
///
/// let above_one = filter(Function::unary(|x| json!(x.as_i64().unwrap() > 1)));
/// assert_eq!(above_one.apply(vec![json!([1, 2, 3])]).unwrap(), json!([2, 3]));
/// ```
pub fn filter(predicate: Function) -> Function {
    Function::new(move |arguments| {
        let elements = elements_of(first_argument(arguments))?;
        let mut kept = Vec::with_capacity(elements.len());
        for element in elements {
            if is_truthy(&predicate.apply(vec![element.clone()])?) {
                kept.push(element);
            }
        }
        Ok(Output::Single(Value::Array(kept)))
    })
}

fn elements_of(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(elements) => Ok(elements),
        Value::Object(fields) => Ok(fields.into_iter().map(|(_, field)| field).collect()),
        Value::Null => Ok(Vec::new()),
        other => Err(Error::NotACollection {
            found: kind_of(&other),
        }),
    }
}
