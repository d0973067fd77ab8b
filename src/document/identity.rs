//! The `type`/`id` pair every resource carries, and the assertions on it.

use serde_json::Value;

use super::extract::{object_at, read_identity, FromData};
use crate::config::TesterConfig;
use crate::error::{traced, MatchError, ShapeError};
use crate::matching::{exact_match, Candidates, KeyPath};

/// Assertions shared by everything with a JSON:API identity.
///
/// Implemented by [`Resource`](crate::Resource) and [`ResourceIdentifier`].
/// Each assertion returns the receiver on success so calls chain with `?`:
///
/// ```rust
/// use jsonapi_testing::{DocumentTester, Error, ResourceIdentity};
///
/// fn check() -> Result<(), Error> {
///     let resource = DocumentTester::create(r#"{"data": {"type": "posts", "id": "123"}}"#)?
///         .assert_resource()?;
///
///     resource
///         .assert_type_is(["comments", "posts"])?
///         .assert_id_is("123")?
///         .assert_is("posts", "123")?;
///     Ok(())
/// }
/// # check().unwrap();
/// ```
pub trait ResourceIdentity {
    /// Returns the resource type.
    fn resource_type(&self) -> &str;

    /// Returns the resource id in string form.
    fn id(&self) -> &str;

    /// Returns where in the document this resource was found.
    fn path(&self) -> &KeyPath;

    /// Returns the resource object as read from the document, with an
    /// integer `id` rewritten to its string form.
    fn as_value(&self) -> &Value;

    /// Asserts the type is `expected`, or one of several candidates.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotOneOf`] if the type is not accepted.
    fn assert_type_is(&self, expected: impl Into<Candidates>) -> Result<&Self, MatchError> {
        let candidates = expected.into();
        if candidates.contains(self.resource_type()) {
            return Ok(self);
        }
        Err(traced(MatchError::NotOneOf {
            path: self.path().key("type"),
            member: "type",
            candidates,
            actual: self.resource_type().to_string(),
        }))
    }

    /// Asserts the id is `expected`, or one of several candidates.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotOneOf`] if the id is not accepted.
    fn assert_id_is(&self, expected: impl Into<Candidates>) -> Result<&Self, MatchError> {
        let candidates = expected.into();
        if candidates.contains(self.id()) {
            return Ok(self);
        }
        Err(traced(MatchError::NotOneOf {
            path: self.path().key("id"),
            member: "id",
            candidates,
            actual: self.id().to_string(),
        }))
    }

    /// Asserts both the type and the id exactly.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotOneOf`] for the first member that differs.
    fn assert_is(&self, resource_type: &str, id: &str) -> Result<&Self, MatchError> {
        self.assert_type_is(resource_type)?;
        self.assert_id_is(id)
    }

    /// Asserts the whole resource object equals `expected` exactly.
    ///
    /// Member order is irrelevant; array order and length are not. Every
    /// member of the resource must be listed, and nothing more.
    ///
    /// # Errors
    ///
    /// Returns the first [`MatchError`] found.
    fn assert_matches(&self, expected: &Value) -> Result<&Self, MatchError> {
        exact_match(expected, self.as_value(), self.path()).map_err(traced)?;
        Ok(self)
    }
}

/// A resource identifier object: a `type` and an `id`, optionally `meta`.
///
/// Obtained from [`DocumentTester::assert_resource_identifier`](crate::DocumentTester::assert_resource_identifier)
/// or as an element of
/// [`assert_resource_identifier_collection`](crate::DocumentTester::assert_resource_identifier_collection).
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceIdentifier {
    path: KeyPath,
    resource_type: String,
    id: String,
    object: Value,
}

impl ResourceIdentifier {
    /// Returns the identifier's `meta` member, if any.
    #[must_use]
    pub fn meta(&self) -> Option<&Value> {
        self.object.get("meta")
    }
}

impl ResourceIdentity for ResourceIdentifier {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn path(&self) -> &KeyPath {
        &self.path
    }

    fn as_value(&self) -> &Value {
        &self.object
    }
}

impl FromData for ResourceIdentifier {
    fn from_data(value: &Value, path: KeyPath, config: &TesterConfig) -> Result<Self, ShapeError> {
        let object = object_at(value, &path, "a resource identifier object")?;
        let identity = read_identity(object, &path, config)?;

        if config.strict_identifiers() {
            if let Some(member) = ["attributes", "relationships"]
                .into_iter()
                .find(|member| object.contains_key(*member))
            {
                return Err(ShapeError::UnexpectedMember {
                    path: path.key(member),
                    reason: "a resource identifier cannot carry attributes or relationships",
                });
            }
        }

        Ok(Self {
            path,
            resource_type: identity.resource_type,
            id: identity.id,
            object: identity.object,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn identifier(value: Value) -> Result<ResourceIdentifier, ShapeError> {
        ResourceIdentifier::from_data(&value, KeyPath::data(), &TesterConfig::default())
    }

    #[test]
    fn test_identifier_assertions_chain() {
        let identifier = identifier(json!({"type": "users", "id": "7"})).unwrap();
        assert!(identifier
            .assert_type_is("users")
            .and_then(|i| i.assert_id_is(["6", "7"]))
            .and_then(|i| i.assert_is("users", "7"))
            .is_ok());
    }

    #[test]
    fn test_assert_is_reports_type_before_id() {
        let identifier = identifier(json!({"type": "users", "id": "7"})).unwrap();
        let error = identifier.assert_is("people", "8").unwrap_err();
        assert_eq!(error.path().to_string(), "$.data.type");
    }

    #[test]
    fn test_identifier_rejects_attributes_by_default() {
        let error = identifier(json!({"type": "users", "id": "7", "attributes": {}})).unwrap_err();
        assert_eq!(
            error.path(),
            Some(&KeyPath::data().key("attributes"))
        );
    }

    #[test]
    fn test_identifier_allows_attributes_when_relaxed() {
        let config = TesterConfig::builder().strict_identifiers(false).build();
        let value = json!({"type": "users", "id": "7", "relationships": {}});
        assert!(ResourceIdentifier::from_data(&value, KeyPath::data(), &config).is_ok());
    }

    #[test]
    fn test_identifier_keeps_meta() {
        let identifier = identifier(json!({"type": "users", "id": 7, "meta": {"a": 1}})).unwrap();
        assert_eq!(identifier.meta(), Some(&json!({"a": 1})));
        assert!(identifier
            .assert_matches(&json!({"type": "users", "id": "7", "meta": {"a": 1}}))
            .is_ok());
    }
}
