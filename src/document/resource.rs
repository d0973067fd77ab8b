//! Full resource objects and the attribute/relationship assertions.

use serde_json::{Map, Value};

use super::extract::{is_empty_mapping, object_at, optional_object, read_identity, FromData};
use super::identity::ResourceIdentity;
use crate::config::TesterConfig;
use crate::error::{traced, MatchError, ShapeError};
use crate::matching::{loose_equal, strict_equal, subset_match, KeyPath};

/// A validated resource object.
///
/// A `Resource` always has a non-empty `type` and `id`. It is an immutable
/// snapshot of the document; every assertion borrows it and returns it again
/// on success, so assertions chain:
///
/// ```rust
/// use jsonapi_testing::{DocumentTester, OrFail, ResourceIdentity};
/// use serde_json::json;
///
/// let resource = DocumentTester::create(
///     r#"{"data": {"type": "posts", "id": "123", "attributes": {"rank": 1}}}"#,
/// )
/// .or_fail()
/// .assert_resource()
/// .or_fail();
///
/// resource
///     .assert_attribute_is("rank", 1)
///     .and_then(|r| r.assert_attribute("rank", "1"))
///     .and_then(|r| r.assert_attributes_subset(&json!({"rank": 1})))
///     .or_fail();
///
/// assert!(resource.assert_attribute_is("rank", "1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    path: KeyPath,
    resource_type: String,
    id: String,
    object: Value,
}

impl Resource {
    /// Returns the `attributes` member, if present.
    #[must_use]
    pub fn attributes(&self) -> Option<&Map<String, Value>> {
        self.object.get("attributes").and_then(Value::as_object)
    }

    /// Returns a single attribute value, if present.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes().and_then(|attributes| attributes.get(key))
    }

    /// Returns the `relationships` member, if present.
    #[must_use]
    pub fn relationships(&self) -> Option<&Map<String, Value>> {
        self.object.get("relationships").and_then(Value::as_object)
    }

    /// Returns a single relationship object, if present.
    #[must_use]
    pub fn relationship(&self, name: &str) -> Option<&Value> {
        self.relationships()
            .and_then(|relationships| relationships.get(name))
    }

    /// Returns the resource's `links` member, if present.
    #[must_use]
    pub fn links(&self) -> Option<&Value> {
        self.object.get("links")
    }

    /// Returns the resource's `meta` member, if present.
    #[must_use]
    pub fn meta(&self) -> Option<&Value> {
        self.object.get("meta")
    }

    /// Asserts an attribute exists and loosely equals `expected`.
    ///
    /// A number matches its string spelling: `1` matches `"1"`. See
    /// [`loose_equal`] for the exact rules.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MissingKey`] if the attribute is absent, or
    /// [`MatchError::ValueMismatch`] if it differs.
    pub fn assert_attribute(
        &self,
        key: &str,
        expected: impl Into<Value>,
    ) -> Result<&Self, MatchError> {
        self.check_attribute(key, expected.into(), loose_equal)
    }

    /// Asserts an attribute exists and is identical in type and value to
    /// `expected`: `1` does not match `"1"`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MissingKey`] if the attribute is absent, or
    /// [`MatchError::ValueMismatch`] if it differs.
    pub fn assert_attribute_is(
        &self,
        key: &str,
        expected: impl Into<Value>,
    ) -> Result<&Self, MatchError> {
        self.check_attribute(key, expected.into(), strict_equal)
    }

    fn check_attribute(
        &self,
        key: &str,
        expected: Value,
        equal: fn(&Value, &Value) -> bool,
    ) -> Result<&Self, MatchError> {
        let path = self.path.key("attributes").key(key);
        let Some(actual) = self.attribute(key) else {
            return Err(traced(MatchError::MissingKey { path, expected }));
        };

        if equal(&expected, actual) {
            Ok(self)
        } else {
            Err(traced(MatchError::ValueMismatch {
                path,
                expected,
                actual: actual.clone(),
            }))
        }
    }

    /// Asserts every expected attribute is present with a strictly equal
    /// value, recursing into nested arrays and objects.
    ///
    /// Attributes the expectation does not mention are ignored. A resource
    /// without an `attributes` member is treated as having none, and an
    /// empty array on either side stands for an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns the first [`MatchError`] found.
    pub fn assert_attributes_subset(&self, expected: &Value) -> Result<&Self, MatchError> {
        if is_empty_mapping(expected) {
            return Ok(self);
        }
        let actual = self.member_or_empty("attributes");
        subset_match(expected, &actual, &self.path.key("attributes")).map_err(traced)?;
        Ok(self)
    }

    /// Asserts every expected relationship is present.
    ///
    /// An empty expected entry (`{}` or `[]`) only checks the relationship
    /// exists. Any other entry is subset-matched against the actual
    /// relationship object, so a partial identifier such as
    /// `{"data": {"id": "1"}}` checks only the id, and an entry listing only
    /// `links` or `meta` checks those members without looking at `data`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MissingKey`] for an absent relationship, or the
    /// first mismatch found inside one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jsonapi_testing::DocumentTester;
    /// use serde_json::json;
    ///
    /// let resource = DocumentTester::create(r#"{"data": {
    ///     "type": "posts", "id": "1",
    ///     "relationships": {
    ///         "author": {"data": {"type": "users", "id": "9"}},
    ///         "comments": {"links": {"related": "/posts/1/comments"}}
    ///     }
    /// }}"#).unwrap().assert_resource().unwrap();
    ///
    /// assert!(resource
    ///     .assert_relationships_subset(&json!({
    ///         "author": {"data": {"id": "9"}},
    ///         "comments": []
    ///     }))
    ///     .is_ok());
    /// ```
    pub fn assert_relationships_subset(&self, expected: &Value) -> Result<&Self, MatchError> {
        let path = self.path.key("relationships");
        let actual = self.member_or_empty("relationships");

        if is_empty_mapping(expected) {
            return Ok(self);
        }
        let Value::Object(expected_relationships) = expected else {
            subset_match(expected, &actual, &path).map_err(traced)?;
            return Ok(self);
        };

        for (name, expected_entry) in expected_relationships {
            let entry_path = path.key(name);
            let Some(actual_entry) = actual.get(name) else {
                return Err(traced(MatchError::MissingKey {
                    path: entry_path,
                    expected: expected_entry.clone(),
                }));
            };

            if !is_empty_mapping(expected_entry) {
                subset_match(expected_entry, actual_entry, &entry_path).map_err(traced)?;
            }
        }

        Ok(self)
    }

    fn member_or_empty(&self, member: &str) -> Value {
        match self.object.get(member) {
            Some(value @ Value::Object(_)) => value.clone(),
            _ => Value::Object(Map::new()),
        }
    }
}

impl ResourceIdentity for Resource {
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

impl FromData for Resource {
    fn from_data(value: &Value, path: KeyPath, config: &TesterConfig) -> Result<Self, ShapeError> {
        let object = object_at(value, &path, "a resource object")?;
        let identity = read_identity(object, &path, config)?;
        optional_object(object, &path, "attributes")?;
        optional_object(object, &path, "relationships")?;

        Ok(Self {
            path,
            resource_type: identity.resource_type,
            id: identity.id,
            object: identity.object,
        })
    }
}
