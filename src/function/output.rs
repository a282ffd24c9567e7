//! The value a pipeline stage hands to the next one.

use serde_json::Value;

use super::Tuple;

/// What a [`Function`](super::Function) returns.
///
/// `Single` becomes the only argument of the next stage; `Spread` becomes
/// its whole argument list.
///
/// # Examples
///
/// ```
/// use funcalg::{Output, tuple};
/// use serde_json::json;
///
/// assert_eq!(Output::from(json!(1)).into_arguments(), vec![json!(1)]);
/// assert_eq!(
///     Output::from(tuple![1, 2]).into_arguments(),
///     vec![json!(1), json!(2)]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// A single value.
    Single(Value),
    /// Several values to pass as separate arguments.
    Spread(Tuple),
}

impl Output {
    /// Collapses the output into one value. A spread becomes an array.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Single(value) => value,
            Self::Spread(tuple) => tuple.into(),
        }
    }

    /// Converts the output into the argument list of the next stage.
    #[must_use]
    pub fn into_arguments(self) -> Vec<Value> {
        match self {
            Self::Single(value) => vec![value],
            Self::Spread(tuple) => tuple.into_elements(),
        }
    }

    /// Returns `true` for [`Output::Spread`].
    #[must_use]
    pub const fn is_spread(&self) -> bool {
        matches!(self, Self::Spread(_))
    }

    /// Returns the value of a [`Output::Single`].
    #[must_use]
    pub const fn as_single(&self) -> Option<&Value> {
        match self {
            Self::Single(value) => Some(value),
            Self::Spread(_) => None,
        }
    }

    /// Returns the tuple of a [`Output::Spread`].
    #[must_use]
    pub const fn as_tuple(&self) -> Option<&Tuple> {
        match self {
            Self::Single(_) => None,
            Self::Spread(tuple) => Some(tuple),
        }
    }
}

impl From<Value> for Output {
    fn from(value: Value) -> Self {
        Self::Single(value)
    }
}

impl From<Tuple> for Output {
    fn from(tuple: Tuple) -> Self {
        Self::Spread(tuple)
    }
}
