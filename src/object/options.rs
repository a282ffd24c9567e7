//! Configuration of [`ObjectTransformer`](super::ObjectTransformer).

/// Whether a transformer may modify the value it is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Policy {
    /// Work on a deep copy and leave the input untouched.
    #[default]
    Preserve,
    /// Transform the input in place.
    Mutate,
}

/// Options for [`object_with`](super::object_with).
///
/// # Examples
///
/// ```
/// use funcalg::object::{ObjectOptions, Policy};
///
/// assert_eq!(ObjectOptions::default().policy(), Policy::Preserve);
/// assert_eq!(ObjectOptions::mutating().policy(), Policy::Mutate);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObjectOptions {
    /// Transform the input in place instead of a copy.
    pub mutate: bool,
}

impl ObjectOptions {
    /// Options that leave the input untouched.
    #[must_use]
    pub const fn new() -> Self {
        Self { mutate: false }
    }

    /// Options that transform the input in place.
    #[must_use]
    pub const fn mutating() -> Self {
        Self { mutate: true }
    }

    /// Returns the policy these options select.
    #[must_use]
    pub const fn policy(self) -> Policy {
        if self.mutate {
            Policy::Mutate
        } else {
            Policy::Preserve
        }
    }
}

impl From<Policy> for ObjectOptions {
    fn from(policy: Policy) -> Self {
        Self {
            mutate: policy == Policy::Mutate,
        }
    }
}

impl From<ObjectOptions> for Policy {
    fn from(options: ObjectOptions) -> Self {
        options.policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Policy::Preserve)]
    #[case(Policy::Mutate)]
    fn test_policy_survives_options(#[case] policy: Policy) {
        assert_eq!(Policy::from(ObjectOptions::from(policy)), policy);
    }

    #[rstest]
    fn test_default_options_preserve() {
        assert_eq!(ObjectOptions::default(), ObjectOptions::new());
        assert!(!ObjectOptions::default().mutate);
    }
}
