//! Field keys and the key-to-function mapping.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use crate::function::Function;

/// A field name or array index.
///
/// Indices are stored in their decimal form, so `Key::from(2_usize)` and
/// `Key::from("2")` are the same key and match both the object field `"2"`
/// and the third element of an array.
///
/// # Examples
///
/// ```
/// use funcalg::object::Key;
///
/// assert_eq!(Key::from(2_usize), Key::from("2"));
/// assert_eq!(Key::from("name").as_str(), "name");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(String);

impl Key {
    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self(index.to_string())
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// The functions an [`ObjectTransformer`](super::ObjectTransformer) applies,
/// one per key.
///
/// # Examples
///
/// ```
/// use funcalg::Function;
/// use funcalg::object::KeyFunctions;
///
/// let keep = Function::identity();
///
/// let by_name = KeyFunctions::from([("a", keep.clone()), ("b", keep.clone())]);
/// assert_eq!(by_name.len(), 2);
///
/// // Positional: the i-th function handles index i.
/// let by_index = KeyFunctions::from(vec![keep.clone(), keep]);
/// assert!(by_index.get("1").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct KeyFunctions {
    entries: BTreeMap<Key, Function>,
}

impl KeyFunctions {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the function for `key`, returning the previous one.
    pub fn insert(&mut self, key: impl Into<Key>, function: Function) -> Option<Function> {
        self.entries.insert(key.into(), function)
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<Key>, function: Function) -> Self {
        self.insert(key, function);
        self
    }

    /// Returns the function registered for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Function> {
        self.entries.get(key)
    }

    /// Returns `true` if a function is registered for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the registered keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Returns the number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<Key>> FromIterator<(K, Function)> for KeyFunctions {
    fn from_iter<I: IntoIterator<Item = (K, Function)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, function)| (key.into(), function))
                .collect(),
        }
    }
}

impl<K: Into<Key>, const N: usize> From<[(K, Function); N]> for KeyFunctions {
    fn from(entries: [(K, Function); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Vec<Function>> for KeyFunctions {
    fn from(functions: Vec<Function>) -> Self {
        functions.into_iter().enumerate().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Key::from(0_usize), "0")]
    #[case(Key::from(12_usize), "12")]
    #[case(Key::from("x"), "x")]
    #[case(Key::from(String::from("y")), "y")]
    fn test_key_string_form(#[case] key: Key, #[case] expected: &str) {
        assert_eq!(key.as_str(), expected);
        assert_eq!(key.to_string(), expected);
    }

    #[rstest]
    fn test_leading_zero_is_not_an_index() {
        let functions = KeyFunctions::new().with("01", Function::identity());
        assert!(!functions.contains_key("1"));
    }

    #[rstest]
    fn test_insert_replaces_existing() {
        let mut functions = KeyFunctions::new();
        assert!(functions.insert(3_usize, Function::identity()).is_none());
        assert!(functions.insert("3", Function::identity()).is_some());
        assert_eq!(functions.len(), 1);
    }

    #[rstest]
    fn test_positional_functions_use_indices() {
        let functions = KeyFunctions::from(vec![Function::identity(), Function::identity()]);
        let keys: Vec<&str> = functions.keys().map(Key::as_str).collect();
        assert_eq!(keys, vec!["0", "1"]);
    }
}
