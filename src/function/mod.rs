//! Values that flow through pipelines and the functions that produce them.
//!
//! - [`Function`]: a clonable n-ary function over [`Value`](crate::Value)s
//! - [`Output`]: what a function returns, either one value or a [`Tuple`]
//! - [`Tuple`]: several values meant to become several arguments

mod handle;
mod output;
mod tuple;

pub(crate) use handle::first_argument;
pub use handle::Function;
pub use output::Output;
pub use tuple::Tuple;
