//! Function composition.
//!
//! - [`compose`]: right-to-left composition
//! - [`chain`]: left-to-right composition
//! - [`spread`] / [`unspread`]: switch between variadic arguments and a
//!   single array argument
//! - [`compose!`](crate::compose!) / [`chain!`](crate::chain!): the same
//!   compositions in macro form
//!
//! # Argument spreading
//!
//! A stage may return a [`Tuple`](crate::Tuple) to hand the next stage
//! several arguments instead of one:
//!
//! ```text
//! compose(f, |..| Tuple(a, b))(..) = f(a, b)
//! compose(f, |..| v)(..)           = f(v)
//! compose(|..| Tuple(a, b))(..)    = a
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose([f, compose([g, h])]) == compose([compose([f, g]), h])`
//! - **Identity**: `compose([])(x) == x`, `compose([compose([]), f]) == compose([f])`
//! - **Chain**: `chain([f, g])(x) == compose([g, f])(x)`
//! - **Spread round trip**: `unspread(spread(f))(xs) == f(xs)`

mod compose_macro;
mod pipeline;
mod spread;

pub use pipeline::{chain, compose};
pub use spread::{spread, unspread};
