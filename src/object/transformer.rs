//! The [`ObjectTransformer`].

use std::borrow::Cow;

use serde_json::Value;

use super::{KeyFunctions, ObjectOptions, Policy};
use crate::error::Result;
use crate::function::{Function, Output, first_argument};
use crate::value::kind_of;

/// Applies per-key functions to the fields of an object or the elements of
/// an array.
///
/// Only fields whose key has a registered function are touched; every other
/// field is kept as is. Keys registered but missing from the input are
/// ignored, so no field is ever added. Scalars have no fields and come back
/// unchanged.
///
/// Fields are visited in order. If a function fails, the transform stops and
/// the error is returned.
///
/// # Examples
///
/// ```
/// use funcalg::Function;
/// use funcalg::object::{KeyFunctions, object};
/// use serde_json::json;
///
/// let increment = Function::unary(|x| json!(x.as_i64().unwrap() + 1));
/// let transformer = object(KeyFunctions::from([("a", increment)]));
///
/// let input = json!({"a": 1, "b": 2});
/// assert_eq!(transformer.apply(&input).unwrap(), json!({"a": 2, "b": 2}));
/// assert_eq!(input, json!({"a": 1, "b": 2}));
/// ```
#[derive(Clone, Debug)]
pub struct ObjectTransformer {
    functions: KeyFunctions,
    options: ObjectOptions,
}

/// Creates a transformer that leaves its input untouched.
pub fn object(functions: impl Into<KeyFunctions>) -> ObjectTransformer {
    object_with(functions, ObjectOptions::default())
}

/// Creates a transformer with explicit options.
///
/// # Examples
///
/// ```
/// use funcalg::Function;
/// use funcalg::object::{KeyFunctions, ObjectOptions, object_with};
/// use serde_json::json;
///
/// let add_seven = Function::unary(|x| json!(x.as_i64().unwrap() + 7));
/// let transformer = object_with(
///     KeyFunctions::from([(2_usize, add_seven)]),
///     ObjectOptions::mutating(),
/// );
///
/// let mut input = json!([1, 4, -7]);
/// let output = transformer.transform(&mut input).unwrap().into_owned();
///
/// assert_eq!(output, json!([1, 4, 0]));
/// assert_eq!(input, json!([1, 4, 0]));
/// ```
pub fn object_with(
    functions: impl Into<KeyFunctions>,
    options: ObjectOptions,
) -> ObjectTransformer {
    ObjectTransformer {
        functions: functions.into(),
        options,
    }
}

impl ObjectTransformer {
    /// Returns the configured options.
    #[must_use]
    pub const fn options(&self) -> ObjectOptions {
        self.options
    }

    /// Returns a transformer with the same functions and new options.
    #[must_use]
    pub fn with_options(self, options: ObjectOptions) -> Self {
        Self { options, ..self }
    }

    /// Returns the per-key functions.
    #[must_use]
    pub const fn functions(&self) -> &KeyFunctions {
        &self.functions
    }

    /// Transforms a deep copy of `value`, whatever the configured policy.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a per-key function. `value` is
    /// unchanged in every case.
    pub fn apply(&self, value: &Value) -> Result<Value> {
        let mut copy = value.clone();
        self.apply_in_place(&mut copy)?;
        Ok(copy)
    }

    /// Transforms `value` in place, whatever the configured policy.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a per-key function. Fields visited
    /// before the failure keep their new values; the failing field keeps its
    /// old one.
    pub fn apply_in_place(&self, value: &mut Value) -> Result<()> {
        match value {
            Value::Object(fields) => {
                for (name, field) in fields.iter_mut() {
                    self.transform_field(name, field)?;
                }
            }
            Value::Array(elements) => {
                for (index, element) in elements.iter_mut().enumerate() {
                    self.transform_field(&index.to_string(), element)?;
                }
            }
            scalar => {
                tracing::debug!(kind = kind_of(scalar), "no fields to transform");
            }
        }
        Ok(())
    }

    /// Transforms `value` according to the configured [`Policy`] and returns
    /// the result.
    ///
    /// Under [`Policy::Preserve`] this is [`apply`](Self::apply) and the
    /// result is an owned copy. Under [`Policy::Mutate`] it is
    /// [`apply_in_place`](Self::apply_in_place) and the result borrows the
    /// updated `value`. Callers that know the policy statically should call
    /// those two methods directly.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a per-key function.
    pub fn transform<'a>(&self, value: &'a mut Value) -> Result<Cow<'a, Value>> {
        match self.options.policy() {
            Policy::Preserve => self.apply(value).map(Cow::Owned),
            Policy::Mutate => {
                self.apply_in_place(value)?;
                Ok(Cow::Borrowed(value))
            }
        }
    }

    /// Converts the transformer into a [`Function`] for use in pipelines.
    ///
    /// The function owns its argument, so the policy makes no observable
    /// difference there.
    #[must_use]
    pub fn to_function(&self) -> Function {
        let transformer = self.clone();
        Function::new(move |arguments| {
            let mut value = first_argument(arguments);
            transformer.apply_in_place(&mut value)?;
            Ok(Output::Single(value))
        })
    }

    fn transform_field(&self, key: &str, field: &mut Value) -> Result<()> {
        if let Some(function) = self.functions.get(key) {
            tracing::trace!(key, "transforming field");
            *field = function.apply(vec![field.clone()])?;
        }
        Ok(())
    }
}

impl From<ObjectTransformer> for Function {
    fn from(transformer: ObjectTransformer) -> Self {
        transformer.to_function()
    }
}

impl From<&ObjectTransformer> for Function {
    fn from(transformer: &ObjectTransformer) -> Self {
        transformer.to_function()
    }
}
