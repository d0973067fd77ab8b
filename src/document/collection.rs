//! Collections of resources or resource identifiers.
//!
//! [`ResourceCollection<T>`] implements `Deref<Target = [T]>`, so it can be
//! iterated, indexed and measured like the slice it wraps:
//!
//! ```rust
//! use jsonapi_testing::{DocumentTester, ResourceIdentity};
//!
//! let posts = DocumentTester::create(r#"{"data": [
//!     {"type": "posts", "id": "1"},
//!     {"type": "posts", "id": "2"}
//! ]}"#).unwrap().assert_resource_collection().unwrap();
//!
//! assert_eq!(posts.len(), 2);
//! assert_eq!(posts[1].id(), "2");
//! for post in posts.iter() {
//!     assert_eq!(post.resource_type(), "posts");
//! }
//! ```

use std::ops::Deref;

use serde_json::json;

use super::identity::ResourceIdentity;
use crate::error::{traced, MatchError};
use crate::matching::{Candidates, KeyPath};

/// An ordered collection extracted from a `data` array.
///
/// `T` is [`Resource`](crate::Resource) or
/// [`ResourceIdentifier`](crate::ResourceIdentifier).
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCollection<T> {
    path: KeyPath,
    items: Vec<T>,
}

impl<T> ResourceCollection<T> {
    pub(crate) const fn new(path: KeyPath, items: Vec<T>) -> Self {
        Self { path, items }
    }

    /// Returns where in the document the collection was found.
    #[must_use]
    pub const fn path(&self) -> &KeyPath {
        &self.path
    }

    /// Consumes the collection and returns its members.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for ResourceCollection<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a ResourceCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: ResourceIdentity> ResourceCollection<T> {
    /// Returns the member with the given identity, if any.
    #[must_use]
    pub fn find(&self, resource_type: &str, id: &str) -> Option<&T> {
        self.items
            .iter()
            .find(|item| item.resource_type() == resource_type && item.id() == id)
    }

    /// Asserts the collection has exactly `expected` members.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::LengthMismatch`] otherwise.
    pub fn assert_count(&self, expected: usize) -> Result<&Self, MatchError> {
        if self.items.len() == expected {
            return Ok(self);
        }
        Err(traced(MatchError::LengthMismatch {
            path: self.path.clone(),
            expected,
            actual: self.items.len(),
        }))
    }

    /// Asserts the collection has no members.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::LengthMismatch`] otherwise.
    pub fn assert_empty(&self) -> Result<&Self, MatchError> {
        self.assert_count(0)
    }

    /// Asserts every member's type is `expected`, or one of several candidates.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotOneOf`] for the first member that fails.
    pub fn assert_types(&self, expected: impl Into<Candidates>) -> Result<&Self, MatchError> {
        let candidates = expected.into();
        for item in &self.items {
            item.assert_type_is(candidates.clone())?;
        }
        Ok(self)
    }

    /// Asserts some member has the given type and id.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotContained`] if no member does.
    pub fn assert_contains(&self, resource_type: &str, id: &str) -> Result<&Self, MatchError> {
        if self.find(resource_type, id).is_some() {
            return Ok(self);
        }
        Err(traced(MatchError::NotContained {
            path: self.path.clone(),
            expected: json!({"type": resource_type, "id": id}),
        }))
    }

    /// Asserts the members are exactly `expected`, in this order.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::LengthMismatch`] if the counts differ, otherwise
    /// [`MatchError::NotOneOf`] for the first position that differs.
    pub fn assert_identifiers(&self, expected: &[(&str, &str)]) -> Result<&Self, MatchError> {
        self.assert_count(expected.len())?;
        for (item, (resource_type, id)) in self.items.iter().zip(expected) {
            item.assert_is(resource_type, id)?;
        }
        Ok(self)
    }

    /// Asserts the members are exactly `expected`, in any order.
    ///
    /// Duplicates count: `[a, a]` does not match a collection holding `a` and
    /// `b`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::LengthMismatch`] if the counts differ, otherwise
    /// [`MatchError::NotContained`] for the first expected identity without a
    /// remaining match.
    pub fn assert_identifiers_unordered(
        &self,
        expected: &[(&str, &str)],
    ) -> Result<&Self, MatchError> {
        self.assert_count(expected.len())?;

        let mut remaining: Vec<&T> = self.items.iter().collect();
        for (resource_type, id) in expected {
            let position = remaining
                .iter()
                .position(|item| item.resource_type() == *resource_type && item.id() == *id);
            match position {
                Some(index) => {
                    remaining.swap_remove(index);
                }
                None => {
                    return Err(traced(MatchError::NotContained {
                        path: self.path.clone(),
                        expected: json!({"type": resource_type, "id": id}),
                    }));
                }
            }
        }
        Ok(self)
    }
}
