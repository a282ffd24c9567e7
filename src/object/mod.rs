//! Per-field transformation of objects and arrays.
//!
//! [`object`] takes a mapping from keys to functions and returns an
//! [`ObjectTransformer`] that runs each function on the matching field.
//! Array indices are keys too, so the same mapping type works for both.
//!
//! By default the input is never modified: the transformer works on a deep
//! copy. [`ObjectOptions::mutating`] selects in-place transformation instead.
//!
//! # Examples
//!
//! ```
//! use funcalg::object::{KeyFunctions, object};
//! use funcalg::Function;
//! use serde_json::json;
//!
//! let transformer = object(
//!     KeyFunctions::new()
//!         .with("a", Function::unary(|x| json!(x.as_i64().unwrap() + 1)))
//!         .with("b", Function::unary(|x| json!(x.as_i64().unwrap() * 2))),
//! );
//!
//! assert_eq!(
//!     transformer.apply(&json!({"a": 15, "b": 11})).unwrap(),
//!     json!({"a": 16, "b": 22})
//! );
//! ```

mod key;
mod options;
mod transformer;

pub use key::{Key, KeyFunctions};
pub use options::{ObjectOptions, Policy};
pub use transformer::{ObjectTransformer, object, object_with};
