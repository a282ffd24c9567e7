//! The [`compose!`] and [`chain!`] macros.
//!
//! Both accept owned or borrowed [`Function`](crate::Function)s, or anything
//! else with a `From` conversion into one (such as an
//! [`ObjectTransformer`](crate::object::ObjectTransformer)).

/// Composes functions from right to left.
///
/// `compose!(f, g, h)` is [`compose([f, g, h])`](crate::compose::compose)
/// with every argument converted through `Function::from`.
///
/// # Syntax
///
/// - `compose!()` - The identity function
/// - `compose!(f)` - Behaves as `f`
/// - `compose!(f, g, ...)` - Calls the rightmost function first
///
/// # Examples
///
/// ```
/// use funcalg::{Function, compose, mult};
/// use serde_json::json;
///
/// let join = Function::binary(|x, y| json!(format!("{x}, {y}")));
/// let increment = Function::unary(|x| json!(x.as_i64().unwrap() + 1));
/// let decrement = Function::unary(|x| json!(x.as_i64().unwrap() - 1));
///
/// let pipeline = compose!(join, mult!(increment, decrement));
/// assert_eq!(pipeline.apply(vec![json!(1), json!(1)]).unwrap(), json!("2, 0"));
/// ```
///
/// Borrowed functions are cloned, so they stay usable:
///
/// ```
/// use funcalg::{Function, compose};
/// use serde_json::json;
///
/// let double = Function::unary(|x| json!(x.as_i64().unwrap() * 2));
/// let quadruple = compose!(&double, &double);
///
/// assert_eq!(quadruple.apply(vec![json!(3)]).unwrap(), json!(12));
/// assert_eq!(double.apply(vec![json!(3)]).unwrap(), json!(6));
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::Function::identity()
    };

    ($($stage:expr),+ $(,)?) => {
        $crate::compose::compose([$($crate::Function::from($stage)),+])
    };
}

/// Composes functions from left to right.
///
/// `chain!(f, g, h)` is `compose!(h, g, f)`.
///
/// # Examples
///
/// ```
/// use funcalg::{Function, chain};
/// use serde_json::json;
///
/// let add_one = Function::unary(|x| json!(x.as_i64().unwrap() + 1));
/// let double = Function::unary(|x| json!(x.as_i64().unwrap() * 2));
///
/// // double(add_one(1)), add_one(double(1))
/// assert_eq!(chain!(&add_one, &double).apply(vec![json!(1)]).unwrap(), json!(4));
/// assert_eq!(chain!(&double, &add_one).apply(vec![json!(1)]).unwrap(), json!(3));
/// ```
#[macro_export]
macro_rules! chain {
    () => {
        $crate::Function::identity()
    };

    ($($stage:expr),+ $(,)?) => {
        $crate::compose::chain([$($crate::Function::from($stage)),+])
    };
}
