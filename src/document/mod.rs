//! Navigation from a decoded JSON:API document to testable handles.
//!
//! [`DocumentTester`] is the entry point. Each `assert_*` method validates the
//! shape of the top-level `data` (or `errors`) member and returns a handle:
//!
//! | method                                    | `data` must be        | returns                                   |
//! |-------------------------------------------|-----------------------|-------------------------------------------|
//! | [`assert_resource`]                       | object                | [`Resource`]                              |
//! | [`assert_resource_identifier`]            | object                | [`ResourceIdentifier`]                    |
//! | [`assert_resource_collection`]            | array                 | [`ResourceCollection<Resource>`]          |
//! | [`assert_resource_identifier_collection`] | array                 | [`ResourceCollection<ResourceIdentifier>`]|
//! | [`assert_null_data`]                      | `null`                | `()`                                      |
//! | [`assert_errors`]                         | (`errors`: array)     | [`ErrorObjects`]                          |
//!
//! [`assert_resource`]: DocumentTester::assert_resource
//! [`assert_resource_identifier`]: DocumentTester::assert_resource_identifier
//! [`assert_resource_collection`]: DocumentTester::assert_resource_collection
//! [`assert_resource_identifier_collection`]: DocumentTester::assert_resource_identifier_collection
//! [`assert_null_data`]: DocumentTester::assert_null_data
//! [`assert_errors`]: DocumentTester::assert_errors

mod collection;
mod errors;
mod extract;
mod identity;
mod resource;

pub use collection::ResourceCollection;
pub use errors::{ErrorObject, ErrorObjects};
pub use identity::{ResourceIdentifier, ResourceIdentity};
pub use resource::Resource;

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::config::TesterConfig;
use crate::error::{traced, Error, ShapeError};
use crate::matching::{describe_kind, KeyPath};
use extract::{object_at, FromData};

/// A decoded JSON:API document under test.
///
/// The document is read-only; every extraction borrows it and produces an
/// independent, immutable handle.
///
/// # Example
///
/// ```rust
/// use jsonapi_testing::{DocumentTester, Error, ResourceIdentity};
/// use serde_json::json;
///
/// fn check(body: &str) -> Result<(), Error> {
///     let post = DocumentTester::create(body)?.assert_resource()?;
///     post.assert_is("posts", "1")?
///         .assert_attribute("title", "Hello")?
///         .assert_relationships_subset(&json!({"author": {}}))?;
///     Ok(())
/// }
///
/// check(r#"{"data": {
///     "type": "posts", "id": "1",
///     "attributes": {"title": "Hello"},
///     "relationships": {"author": {"links": {"related": "/posts/1/author"}}}
/// }}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTester {
    document: Value,
    config: TesterConfig,
}

impl DocumentTester {
    /// Parses `content` as JSON and wraps it with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if `content` is not valid JSON. The shape of
    /// the document is not checked until an `assert_*` method is called.
    pub fn create(content: &str) -> Result<Self, Error> {
        let document = serde_json::from_str(content)?;
        Ok(Self::from_value(document))
    }

    /// Wraps an already decoded document with the default configuration.
    #[must_use]
    pub fn from_value(document: Value) -> Self {
        Self {
            document,
            config: TesterConfig::default(),
        }
    }

    /// Replaces the configuration used by subsequent extractions.
    #[must_use]
    pub const fn with_config(mut self, config: TesterConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the decoded document.
    #[must_use]
    pub const fn document(&self) -> &Value {
        &self.document
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TesterConfig {
        &self.config
    }

    /// Extracts `data` as a single resource object.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if `data` is absent, is an array, is not an
    /// object, has a missing or empty `type` or `id`, or has non-object
    /// `attributes`/`relationships`.
    pub fn assert_resource(&self) -> Result<Resource, ShapeError> {
        self.single().map_err(traced)
    }

    /// Extracts `data` as a single resource identifier.
    ///
    /// With [`TesterConfig::strict_identifiers`] enabled (the default), a
    /// full resource object carrying `attributes` or `relationships` is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if `data` is absent, is an array, or is not a
    /// valid identifier.
    pub fn assert_resource_identifier(&self) -> Result<ResourceIdentifier, ShapeError> {
        self.single().map_err(traced)
    }

    /// Extracts `data` as an ordered collection of resource objects.
    ///
    /// An empty array is a valid, empty collection.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if `data` is absent, is a single object, or
    /// any element fails resource validation.
    pub fn assert_resource_collection(&self) -> Result<ResourceCollection<Resource>, ShapeError> {
        self.collection().map_err(traced)
    }

    /// Extracts `data` as an ordered collection of resource identifiers.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if `data` is absent, is a single object, or
    /// any element is not a valid identifier.
    pub fn assert_resource_identifier_collection(
        &self,
    ) -> Result<ResourceCollection<ResourceIdentifier>, ShapeError> {
        self.collection().map_err(traced)
    }

    /// Asserts `data` is present and `null`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::MissingMember`] if `data` is absent, or
    /// [`ShapeError::ExpectedNull`] if it holds anything else.
    pub fn assert_null_data(&self) -> Result<(), ShapeError> {
        let data = self.data().map_err(traced)?;
        if data.is_null() {
            return Ok(());
        }
        Err(traced(ShapeError::ExpectedNull {
            path: KeyPath::data(),
            found: describe_kind(data),
        }))
    }

    /// Extracts the top-level `errors` member.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if `errors` is absent, is not an array, is
    /// empty, or contains something other than objects.
    pub fn assert_errors(&self) -> Result<ErrorObjects, ShapeError> {
        self.errors().map_err(traced)
    }

    fn root(&self) -> Result<&Map<String, Value>, ShapeError> {
        self.document
            .as_object()
            .ok_or(ShapeError::RootNotObject {
                found: describe_kind(&self.document),
            })
    }

    fn data(&self) -> Result<&Value, ShapeError> {
        self.root()?
            .get("data")
            .ok_or_else(|| ShapeError::MissingMember {
                path: KeyPath::data(),
            })
    }

    fn single<T: FromData>(&self) -> Result<T, ShapeError> {
        let data = self.data()?;
        if data.is_array() {
            return Err(ShapeError::ExpectedSingle {
                path: KeyPath::data(),
            });
        }

        let extracted = T::from_data(data, KeyPath::data(), &self.config)?;
        tracing::debug!(path = %KeyPath::data(), "extracted JSON:API resource");
        Ok(extracted)
    }

    fn collection<T: FromData>(&self) -> Result<ResourceCollection<T>, ShapeError> {
        let path = KeyPath::data();
        let items = match self.data()? {
            Value::Array(items) => items,
            Value::Object(_) => return Err(ShapeError::ExpectedCollection { path }),
            other => {
                return Err(ShapeError::InvalidMember {
                    path,
                    expected: "an array of resource objects",
                    found: describe_kind(other),
                })
            }
        };

        let extracted = items
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_data(item, path.index(index), &self.config))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(path = %path, count = extracted.len(), "extracted JSON:API collection");
        Ok(ResourceCollection::new(path, extracted))
    }

    fn errors(&self) -> Result<ErrorObjects, ShapeError> {
        let path = KeyPath::root().key("errors");
        let Some(errors) = self.root()?.get("errors") else {
            return Err(ShapeError::MissingMember { path });
        };
        let Value::Array(items) = errors else {
            return Err(ShapeError::InvalidMember {
                path,
                expected: "an array of error objects",
                found: describe_kind(errors),
            });
        };
        if items.is_empty() {
            return Err(ShapeError::InvalidMember {
                path,
                expected: "a non-empty array of error objects",
                found: "an empty array",
            });
        }

        let extracted = items
            .iter()
            .enumerate()
            .map(|(index, item)| -> Result<ErrorObject, ShapeError> {
                let item_path = path.index(index);
                object_at(item, &item_path, "an error object")?;
                Ok(ErrorObject::new(item_path, item.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ErrorObjects::new(path, extracted))
    }
}

impl FromStr for DocumentTester {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::create(s)
    }
}

impl From<Value> for DocumentTester {
    fn from(document: Value) -> Self {
        Self::from_value(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_must_be_an_object() {
        let document = DocumentTester::from_value(json!([1, 2]));
        assert_eq!(
            document.assert_resource().unwrap_err(),
            ShapeError::RootNotObject { found: "an array" }
        );
    }

    #[test]
    fn test_missing_data() {
        let document = DocumentTester::from_value(json!({"meta": {}}));
        let expected = ShapeError::MissingMember {
            path: KeyPath::data(),
        };
        assert_eq!(document.assert_resource().unwrap_err(), expected);
        assert_eq!(document.assert_resource_collection().unwrap_err(), expected);
        assert_eq!(document.assert_null_data().unwrap_err(), expected);
    }

    #[test]
    fn test_null_data_is_not_a_resource() {
        let document = DocumentTester::from_value(json!({"data": null}));
        assert!(document.assert_null_data().is_ok());
        assert!(matches!(
            document.assert_resource(),
            Err(ShapeError::InvalidMember { found: "null", .. })
        ));
        assert!(matches!(
            document.assert_resource_collection(),
            Err(ShapeError::InvalidMember { found: "null", .. })
        ));
    }

    #[test]
    fn test_null_data_assertion_on_resource() {
        let document = DocumentTester::from_value(json!({"data": {"type": "posts", "id": "1"}}));
        assert_eq!(
            document.assert_null_data().unwrap_err(),
            ShapeError::ExpectedNull {
                path: KeyPath::data(),
                found: "an object",
            }
        );
    }

    #[test]
    fn test_collection_element_paths() {
        let document = DocumentTester::from_value(json!({"data": [
            {"type": "posts", "id": "1"},
            {"type": "posts"}
        ]}));
        assert_eq!(
            document.assert_resource_collection().unwrap_err(),
            ShapeError::MissingMember {
                path: KeyPath::data().index(1).key("id"),
            }
        );
    }

    #[test]
    fn test_errors_member() {
        let document = DocumentTester::from_value(json!({"errors": [{"status": "500"}]}));
        let errors = document.assert_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path().to_string(), "$.errors[0]");
    }

    #[test]
    fn test_errors_member_shape() {
        let missing = DocumentTester::from_value(json!({"data": null}));
        assert!(matches!(
            missing.assert_errors(),
            Err(ShapeError::MissingMember { .. })
        ));

        let empty = DocumentTester::from_value(json!({"errors": []}));
        assert!(matches!(
            empty.assert_errors(),
            Err(ShapeError::InvalidMember { found: "an empty array", .. })
        ));

        let scalar = DocumentTester::from_value(json!({"errors": ["oops"]}));
        assert_eq!(
            scalar.assert_errors().unwrap_err().path(),
            Some(&KeyPath::root().key("errors").index(0))
        );
    }

    #[test]
    fn test_from_str_and_from_value() {
        let parsed: DocumentTester = r#"{"data": null}"#.parse().unwrap();
        let converted = DocumentTester::from(json!({"data": null}));
        assert_eq!(parsed, converted);
        assert!("not json".parse::<DocumentTester>().is_err());
    }
}
