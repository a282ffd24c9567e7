//! The [`Function`] handle.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::Output;
use crate::error::Result;

type Body = dyn Fn(Vec<Value>) -> Result<Output> + Send + Sync;

/// A shareable n-ary function over [`Value`]s.
///
/// Every combinator in this crate takes and returns `Function`s. Cloning is
/// cheap: clones share the same underlying closure.
///
/// Arguments are passed positionally as an owned `Vec<Value>`. The typed
/// constructors ([`unary`](Self::unary), [`binary`](Self::binary)) read a
/// missing argument as `null` and ignore surplus ones.
///
/// # Examples
///
/// ```
/// use funcalg::Function;
/// use serde_json::json;
///
/// let add = Function::binary(|x, y| {
///     json!(x.as_i64().unwrap_or(0) + y.as_i64().unwrap_or(0))
/// });
///
/// assert_eq!(add.apply(vec![json!(2), json!(3)]).unwrap(), json!(5));
/// assert_eq!(add.apply(vec![json!(2)]).unwrap(), json!(2));
/// ```
#[derive(Clone)]
pub struct Function {
    body: Arc<Body>,
}

impl Function {
    /// Wraps a closure over the raw argument list.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Output> + Send + Sync + 'static,
    {
        Self {
            body: Arc::new(body),
        }
    }

    /// Wraps an infallible single-argument closure.
    pub fn unary<F, R>(function: F) -> Self
    where
        F: Fn(Value) -> R + Send + Sync + 'static,
        R: Into<Output>,
    {
        Self::new(move |arguments| Ok(function(first_argument(arguments)).into()))
    }

    /// Wraps a fallible single-argument closure.
    ///
    /// ```
    /// use funcalg::{Error, Function};
    /// use serde_json::json;
    ///
    /// let checked = Function::try_unary(|x| match x.as_i64() {
    ///     Some(n) => Ok(json!(n)),
    ///     None => Err(Error::function("not an integer")),
    /// });
    ///
    /// assert!(checked.apply(vec![json!("a")]).is_err());
    /// ```
    pub fn try_unary<F, R>(function: F) -> Self
    where
        F: Fn(Value) -> Result<R> + Send + Sync + 'static,
        R: Into<Output>,
    {
        Self::new(move |arguments| function(first_argument(arguments)).map(Into::into))
    }

    /// Wraps an infallible two-argument closure.
    pub fn binary<F, R>(function: F) -> Self
    where
        F: Fn(Value, Value) -> R + Send + Sync + 'static,
        R: Into<Output>,
    {
        Self::new(move |arguments| {
            let mut arguments = arguments.into_iter();
            let first = arguments.next().unwrap_or(Value::Null);
            let second = arguments.next().unwrap_or(Value::Null);
            Ok(function(first, second).into())
        })
    }

    /// Returns its first argument unchanged, `null` when called without one.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|arguments| Ok(Output::Single(first_argument(arguments))))
    }

    /// Invokes the function.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped closure returns.
    pub fn call(&self, arguments: Vec<Value>) -> Result<Output> {
        (self.body)(arguments)
    }

    /// Invokes the function and collapses its [`Output`] into one value.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped closure returns.
    pub fn apply(&self, arguments: Vec<Value>) -> Result<Value> {
        self.call(arguments).map(Output::into_value)
    }
}

impl From<&Function> for Function {
    fn from(function: &Function) -> Self {
        function.clone()
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Function").finish_non_exhaustive()
    }
}

/// Takes the first argument, or `null` when the list is empty.
pub(crate) fn first_argument(arguments: Vec<Value>) -> Value {
    arguments.into_iter().next().unwrap_or(Value::Null)
}

static_assertions::assert_impl_all!(Function: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::tuple;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(vec![json!(5)], json!(5))]
    #[case(vec![json!("a"), json!("b")], json!("a"))]
    #[case(vec![], json!(null))]
    fn test_identity(#[case] arguments: Vec<Value>, #[case] expected: Value) {
        assert_eq!(Function::identity().apply(arguments).unwrap(), expected);
    }

    #[rstest]
    fn test_unary_missing_argument_is_null() {
        let is_null = Function::unary(|x| json!(x.is_null()));
        assert_eq!(is_null.apply(vec![]).unwrap(), json!(true));
    }

    #[rstest]
    fn test_unary_may_return_tuple() {
        let duplicate = Function::unary(|x| tuple![x.clone(), x]);
        let output = duplicate.call(vec![json!(1)]).unwrap();
        assert_eq!(output, Output::Spread(tuple![1, 1]));
    }

    #[rstest]
    fn test_try_unary_propagates_error() {
        let failing = Function::try_unary(|_| Err::<Value, _>(Error::function("nope")));
        let error = failing.apply(vec![json!(1)]).unwrap_err();
        assert_eq!(error.to_string(), "nope");
    }

    #[rstest]
    fn test_clones_share_body() {
        let double = Function::unary(|x| json!(x.as_i64().unwrap() * 2));
        let borrowed = Function::from(&double);
        assert_eq!(borrowed.apply(vec![json!(4)]).unwrap(), json!(8));
    }
}
