//! [`mult`]: apply several functions side by side.

use serde_json::Value;

use crate::error::Result;
use crate::function::{Function, Output, Tuple};

/// Returns a function that applies the i-th function to the i-th argument
/// and returns the results as a [`Tuple`].
///
/// Combined with [`compose`](crate::compose::compose), the tuple is spread
/// back into separate arguments for the next stage.
///
/// When called with fewer arguments than there are functions, the remaining
/// functions receive `null`. Surplus arguments are ignored. With no functions
/// the result is always the empty tuple.
///
/// Each function's output is collapsed with
/// [`Output::into_value`], so a function returning a tuple contributes one
/// array element rather than several.
///
/// # Examples
///
/// ```
/// use funcalg::combinator::mult;
/// use funcalg::{Function, Output, tuple};
/// use serde_json::json;
///
/// let increment = Function::unary(|x| json!(x.as_i64().unwrap() + 1));
/// let decrement = Function::unary(|x| json!(x.as_i64().unwrap() - 1));
///
/// let both = mult([increment, decrement]);
/// assert_eq!(
///     both.call(vec![json!(1), json!(1)]).unwrap(),
///     Output::Spread(tuple![2, 0])
/// );
/// ```
pub fn mult<I>(functions: I) -> Function
where
    I: IntoIterator<Item = Function>,
{
    let functions: Vec<Function> = functions.into_iter().collect();
    Function::new(move |arguments| multiply(&functions, arguments).map(Output::Spread))
}

fn multiply(functions: &[Function], arguments: Vec<Value>) -> Result<Tuple> {
    if arguments.len() != functions.len() {
        tracing::debug!(
            functions = functions.len(),
            arguments = arguments.len(),
            "mult arity mismatch, padding with null and dropping surplus arguments"
        );
    }

    let mut arguments = arguments.into_iter();
    functions
        .iter()
        .map(|function| function.apply(vec![arguments.next().unwrap_or(Value::Null)]))
        .collect()
}

/// Builds a [`mult`] function from expressions convertible into
/// [`Function`].
///
/// # Examples
///
/// ```
/// use funcalg::{Function, Output, mult, tuple};
/// use serde_json::json;
///
/// let negate = Function::unary(|x| json!(-x.as_i64().unwrap()));
/// let both = mult!(&negate, &negate);
///
/// assert_eq!(
///     both.call(vec![json!(1), json!(2)]).unwrap(),
///     Output::Spread(tuple![-1, -2])
/// );
/// ```
#[macro_export]
macro_rules! mult {
    ($($function:expr),* $(,)?) => {
        $crate::combinator::mult(::std::vec![$($crate::Function::from($function)),*])
    };
}
