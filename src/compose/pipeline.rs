//! [`compose`] and [`chain`].

use serde_json::Value;

use crate::error::Result;
use crate::function::{Function, Output, first_argument};

/// Composes functions from right to left.
///
/// `compose([f, g, h])` called with `(a, b)` evaluates `h(a, b)`, passes the
/// result to `g`, and that result to `f`, returning `f`'s output.
///
/// Between stages the output of one stage becomes the arguments of the next:
/// a [`Tuple`](crate::Tuple) is spread into one argument per element, any
/// other value is passed as the single argument. The same rule applies to
/// the output of the leftmost stage, which is handed to
/// [`Function::identity`]: a trailing tuple yields its first element, or
/// `null` when empty.
///
/// With no stages the result is [`Function::identity`], which returns its
/// first argument and ignores the rest.
///
/// Evaluation stops at the first stage that returns an error.
///
/// # Laws
///
/// - **Associativity**: `compose([f, compose([g, h])]) == compose([compose([f, g]), h])`
/// - **Identity**: `compose([f, compose([])]) == f` for single-argument calls
///
/// # Examples
///
/// ```
/// use funcalg::compose::compose;
/// use funcalg::{Function, tuple};
/// use serde_json::json;
///
/// let multiply = Function::binary(|x, y| json!(x.as_i64().unwrap() * y.as_i64().unwrap()));
/// let increment_both = Function::binary(|x, y| {
///     tuple![x.as_i64().unwrap() + 1, y.as_i64().unwrap() + 1]
/// });
///
/// let pipeline = compose([multiply, increment_both]);
/// assert_eq!(pipeline.apply(vec![json!(5), json!(6)]).unwrap(), json!(42));
/// ```
pub fn compose<I>(stages: I) -> Function
where
    I: IntoIterator<Item = Function>,
{
    let stages: Vec<Function> = stages.into_iter().collect();
    tracing::debug!(stages = stages.len(), "composing pipeline");

    if stages.is_empty() {
        return Function::identity();
    }
    Function::new(move |arguments| evaluate(&stages, arguments))
}

/// Composes functions from left to right.
///
/// `chain([f, g, h])` is `compose([h, g, f])`: the first function receives
/// the caller's arguments.
///
/// # Examples
///
/// ```
/// use funcalg::compose::chain;
/// use funcalg::Function;
/// use serde_json::json;
///
/// let add_one = Function::unary(|x| json!(x.as_i64().unwrap() + 1));
/// let double = Function::unary(|x| json!(x.as_i64().unwrap() * 2));
///
/// // double(add_one(3))
/// assert_eq!(chain([add_one, double]).apply(vec![json!(3)]).unwrap(), json!(8));
/// ```
#[doc(alias = "compose_reverse")]
#[doc(alias = "pipe")]
pub fn chain<I>(stages: I) -> Function
where
    I: IntoIterator<Item = Function>,
{
    let mut stages: Vec<Function> = stages.into_iter().collect();
    stages.reverse();
    compose(stages)
}

fn evaluate(stages: &[Function], arguments: Vec<Value>) -> Result<Output> {
    let Some((innermost, outer)) = stages.split_last() else {
        return Function::identity().call(arguments);
    };

    let mut output = innermost.call(arguments)?;
    for (position, stage) in outer.iter().enumerate().rev() {
        tracing::trace!(stage = position, spread = output.is_spread(), "feeding stage");
        output = stage.call(output.into_arguments())?;
    }
    Ok(Output::Single(first_argument(output.into_arguments())))
}
