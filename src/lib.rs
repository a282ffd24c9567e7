//! # funcalg
//!
//! A small algebra of functions over dynamically shaped values.
//!
//! ## Overview
//!
//! Every function in this crate is a [`Function`]: a clonable, thread-safe
//! n-ary function from JSON-like [`Value`]s to an [`Output`]. On top of that
//! the crate provides:
//!
//! - **Composition**: [`compose`] (right to left) and [`chain`] (left to
//!   right), where a stage can return a [`Tuple`] to pass several arguments
//!   to the next stage
//! - **Calling conventions**: [`spread`] and [`unspread`] convert between
//!   variadic arguments and a single array argument
//! - **Parallel application**: [`mult`] applies N functions to N arguments
//! - **Structural transformation**: [`object`] applies per-key functions to
//!   the fields of an object or array, without touching the original unless
//!   asked to
//! - **Sequences**: [`map`] and [`filter`]
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Tuple`] and the object options
//!
//! ## Example
//!
//! ```rust
//! use funcalg::prelude::*;
//!
//! let join = Function::binary(|x, y| json!(format!("{x}, {y}")));
//! let increment = Function::unary(|x| json!(x.as_i64().unwrap() + 1));
//! let decrement = Function::unary(|x| json!(x.as_i64().unwrap() - 1));
//!
//! let pipeline = compose!(join, mult!(increment, decrement));
//! assert_eq!(pipeline.apply(vec![json!(1), json!(1)]).unwrap(), json!("2, 0"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the function types, every combinator and the macros.
///
/// # Usage
///
/// ```rust
/// use funcalg::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Error, Function, Key, KeyFunctions, ObjectOptions, ObjectTransformer, Output, Policy,
        Result, Tuple, Value, chain, compose, filter, map, mult, object, object_with, spread,
        tuple, unspread,
    };
    pub use serde_json::json;
}

pub mod combinator;
pub mod compose;
pub mod error;
pub mod function;
pub mod object;
pub mod value;

pub use combinator::{filter, map, mult};
pub use compose::{chain, compose, spread, unspread};
pub use error::{Error, Result};
pub use function::{Function, Output, Tuple};
pub use object::{Key, KeyFunctions, ObjectOptions, ObjectTransformer, Policy, object, object_with};
pub use serde_json::Value;
