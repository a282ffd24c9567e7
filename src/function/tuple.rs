//! The [`Tuple`] type and the [`tuple!`](crate::tuple!) macro.

use serde_json::Value;

/// An ordered, fixed-length sequence of values that a pipeline stage returns
/// to hand several arguments to the next stage.
///
/// A `Tuple` is immutable once built: it can be inspected and consumed, but
/// not modified. Two tuples are equal when their elements are.
///
/// # Examples
///
/// ```
/// use funcalg::Tuple;
/// use serde_json::json;
///
/// let tuple = Tuple::new(vec![json!(1), json!("two")]);
///
/// assert_eq!(tuple.len(), 2);
/// assert_eq!(tuple.get(1), Some(&json!("two")));
/// assert_eq!(tuple.into_elements(), vec![json!(1), json!("two")]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tuple {
    elements: Vec<Value>,
}

impl Tuple {
    /// Creates a tuple from its elements.
    #[must_use]
    pub const fn new(elements: Vec<Value>) -> Self {
        Self { elements }
    }

    /// Creates the empty tuple.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    /// Returns the element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the tuple has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    /// Consumes the tuple, returning its elements.
    #[must_use]
    pub fn into_elements(self) -> Vec<Value> {
        self.elements
    }
}

impl From<Vec<Value>> for Tuple {
    fn from(elements: Vec<Value>) -> Self {
        Self::new(elements)
    }
}

impl From<Tuple> for Value {
    fn from(tuple: Tuple) -> Self {
        Self::Array(tuple.elements)
    }
}

impl FromIterator<Value> for Tuple {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Tuple {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Builds a [`Tuple`] from expressions convertible into [`Value`].
///
/// # Examples
///
/// ```
/// use funcalg::{Tuple, tuple};
/// use serde_json::json;
///
/// let tuple = tuple![1, "two", true];
/// assert_eq!(tuple, Tuple::new(vec![json!(1), json!("two"), json!(true)]));
///
/// assert!(tuple![].is_empty());
/// ```
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::Tuple::empty()
    };

    ($($element:expr),+ $(,)?) => {
        $crate::Tuple::new(::std::vec![$($crate::Value::from($element)),+])
    };
}
