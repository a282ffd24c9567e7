//! Combinators built on top of [`Function`](crate::Function).
//!
//! - [`mult`]: apply N functions to N arguments, returning a tuple
//! - [`map`]: transform every element of an array
//! - [`filter`]: keep the elements of an array matching a predicate

mod mult;
mod sequence;

pub use mult::mult;
pub use sequence::{filter, map};
