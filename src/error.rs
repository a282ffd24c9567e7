//! Error type shared by every combinator.
//!
//! Nothing in this crate recovers from an error: a failing stage stops the
//! pipeline and the error reaches the caller of the composed function
//! unchanged.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while evaluating a composed function.
///
/// # Examples
///
/// ```
/// use funcalg::Error;
///
/// let error = Error::NotASequence { found: "number" };
/// assert_eq!(error.to_string(), "expected an array argument, found number");
///
/// let error = Error::function("balance must be positive");
/// assert_eq!(error.to_string(), "balance must be positive");
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// An unspread function was called with something other than an array.
    #[error("expected an array argument, found {found}")]
    NotASequence {
        /// Kind of the value that was received.
        found: &'static str,
    },

    /// `map` or `filter` was called with a scalar.
    #[error("expected an array or object, found {found}")]
    NotACollection {
        /// Kind of the value that was received.
        found: &'static str,
    },

    /// A caller-supplied function reported a failure.
    #[error("{0}")]
    Function(String),

    /// A caller-supplied function propagated an error of its own.
    #[error(transparent)]
    Foreign(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    /// Creates an [`Error::Function`] from a message.
    #[must_use]
    pub fn function(message: impl Into<String>) -> Self {
        Self::Function(message.into())
    }

    /// Wraps an arbitrary error raised inside a caller-supplied function.
    #[must_use]
    pub fn foreign<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Foreign(Box::new(error))
    }
}
