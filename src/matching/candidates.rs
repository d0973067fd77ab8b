//! Expected values for membership assertions on `type` and `id`.

use std::fmt;

/// One or more acceptable string values.
///
/// Membership assertions such as
/// [`assert_type_is`](crate::ResourceIdentity::assert_type_is) accept anything
/// convertible into `Candidates`, so a single value and a set of values read
/// the same at the call site:
///
/// ```rust
/// use jsonapi_testing::Candidates;
///
/// let single = Candidates::from("posts");
/// assert!(single.contains("posts"));
/// assert_eq!(single.to_string(), "posts");
///
/// let several = Candidates::from(["comments", "tags"]);
/// assert!(!several.contains("posts"));
/// assert_eq!(several.to_string(), "one of [comments, tags]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidates(Vec<String>);

impl Candidates {
    /// Returns `true` if `value` is one of the candidates.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|candidate| candidate == value)
    }

    /// Returns the candidates in the order they were given.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no candidates; nothing is then a member.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Candidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [single] = self.0.as_slice() {
            return f.write_str(single);
        }
        write!(f, "one of [{}]", self.0.join(", "))
    }
}

impl From<&str> for Candidates {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<String> for Candidates {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl From<&String> for Candidates {
    fn from(value: &String) -> Self {
        Self(vec![value.clone()])
    }
}

impl From<&[&str]> for Candidates {
    fn from(values: &[&str]) -> Self {
        Self(values.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Candidates {
    fn from(values: [&str; N]) -> Self {
        Self(values.iter().map(ToString::to_string).collect())
    }
}

impl From<Vec<&str>> for Candidates {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for Candidates {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let candidates = Candidates::from(vec!["999", "123"]);
        assert!(candidates.contains("123"));
        assert!(!candidates.contains("12"));
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_empty_set_contains_nothing() {
        let candidates = Candidates::from(Vec::<String>::new());
        assert!(candidates.is_empty());
        assert!(!candidates.contains(""));
        assert_eq!(candidates.to_string(), "one of []");
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        assert!(!Candidates::from("Posts").contains("posts"));
    }
}
