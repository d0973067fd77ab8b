//! JSON:API error objects from a top-level `errors` member.

use std::ops::Deref;

use serde_json::{json, Value};

use crate::error::{traced, MatchError};
use crate::matching::{loose_equal, strict_equal, subset_match, KeyPath};

/// One entry of a document's `errors` array.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorObject {
    path: KeyPath,
    object: Value,
}

impl ErrorObject {
    pub(crate) const fn new(path: KeyPath, object: Value) -> Self {
        Self { path, object }
    }

    /// Returns where in the document this error was found.
    #[must_use]
    pub const fn path(&self) -> &KeyPath {
        &self.path
    }

    /// Returns the error object as read from the document.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.object
    }

    /// Returns the HTTP `status`, if present as a string.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.member_str("status")
    }

    /// Returns the application-specific `code`, if present.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.member_str("code")
    }

    /// Returns the `title`, if present.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.member_str("title")
    }

    /// Returns the `detail`, if present.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.member_str("detail")
    }

    /// Returns the `source` object, if present.
    #[must_use]
    pub fn source(&self) -> Option<&Value> {
        self.object.get("source")
    }

    fn member_str(&self, member: &str) -> Option<&str> {
        self.object.get(member).and_then(Value::as_str)
    }

    /// Asserts the `status` member.
    ///
    /// JSON:API sends status codes as strings, but many servers emit numbers,
    /// so the comparison is loose: `422` and `"422"` both match `"422"`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MissingKey`] or [`MatchError::ValueMismatch`].
    pub fn assert_status(&self, expected: impl Into<Value>) -> Result<&Self, MatchError> {
        self.check_member("status", expected.into(), loose_equal)
    }

    /// Asserts the `code` member is exactly `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MissingKey`] or [`MatchError::ValueMismatch`].
    pub fn assert_code(&self, expected: &str) -> Result<&Self, MatchError> {
        self.check_member("code", Value::from(expected), strict_equal)
    }

    /// Asserts the error object contains `expected` (see
    /// [`subset_match`]).
    ///
    /// # Errors
    ///
    /// Returns the first [`MatchError`] found.
    pub fn assert_subset(&self, expected: &Value) -> Result<&Self, MatchError> {
        subset_match(expected, &self.object, &self.path).map_err(traced)?;
        Ok(self)
    }

    fn check_member(
        &self,
        member: &str,
        expected: Value,
        equal: fn(&Value, &Value) -> bool,
    ) -> Result<&Self, MatchError> {
        let path = self.path.key(member);
        match self.object.get(member) {
            Some(actual) if equal(&expected, actual) => Ok(self),
            Some(actual) => Err(traced(MatchError::ValueMismatch {
                path,
                expected,
                actual: actual.clone(),
            })),
            None => Err(traced(MatchError::MissingKey { path, expected })),
        }
    }
}

/// The non-empty `errors` array of a document.
///
/// Derefs to `[ErrorObject]`.
///
/// ```rust
/// use jsonapi_testing::DocumentTester;
/// use serde_json::json;
///
/// let errors = DocumentTester::create(r#"{"errors": [
///     {"status": "422", "source": {"pointer": "/data/attributes/title"}}
/// ]}"#).unwrap().assert_errors().unwrap();
///
/// assert!(errors
///     .assert_count(1)
///     .and_then(|e| e.assert_contains_status(422))
///     .and_then(|e| e.assert_contains(&json!({"source": {"pointer": "/data/attributes/title"}})))
///     .is_ok());
/// assert_eq!(errors[0].status(), Some("422"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorObjects {
    path: KeyPath,
    items: Vec<ErrorObject>,
}

impl ErrorObjects {
    pub(crate) const fn new(path: KeyPath, items: Vec<ErrorObject>) -> Self {
        Self { path, items }
    }

    /// Returns where in the document the errors were found.
    #[must_use]
    pub const fn path(&self) -> &KeyPath {
        &self.path
    }

    /// Consumes the collection and returns its members.
    #[must_use]
    pub fn into_inner(self) -> Vec<ErrorObject> {
        self.items
    }

    /// Asserts there are exactly `expected` errors.
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

    /// Asserts some error contains `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotContained`] if none does.
    pub fn assert_contains(&self, expected: &Value) -> Result<&Self, MatchError> {
        let found = self
            .items
            .iter()
            .any(|item| subset_match(expected, &item.object, &item.path).is_ok());
        if found {
            return Ok(self);
        }
        Err(traced(MatchError::NotContained {
            path: self.path.clone(),
            expected: expected.clone(),
        }))
    }

    /// Asserts some error has the given `status` (compared loosely).
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotContained`] if none does.
    pub fn assert_contains_status(&self, expected: impl Into<Value>) -> Result<&Self, MatchError> {
        let expected = expected.into();
        let found = self
            .items
            .iter()
            .filter_map(|item| item.object.get("status"))
            .any(|status| loose_equal(&expected, status));

        if found {
            return Ok(self);
        }
        Err(traced(MatchError::NotContained {
            path: self.path.clone(),
            expected: json!({ "status": expected }),
        }))
    }
}

impl Deref for ErrorObjects {
    type Target = [ErrorObject];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(value: Value) -> ErrorObject {
        ErrorObject::new(KeyPath::root().key("errors").index(0), value)
    }

    #[test]
    fn test_accessors() {
        let error = error(json!({
            "status": "404",
            "code": "not_found",
            "title": "Not Found",
            "detail": "No post with id 9."
        }));
        assert_eq!(error.status(), Some("404"));
        assert_eq!(error.code(), Some("not_found"));
        assert_eq!(error.title(), Some("Not Found"));
        assert_eq!(error.detail(), Some("No post with id 9."));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_status_is_loose() {
        let error = error(json!({"status": 422}));
        assert!(error.assert_status("422").is_ok());
        assert!(error.assert_status(422).is_ok());
        assert!(error.assert_status("400").is_err());
    }

    #[test]
    fn test_code_is_strict_and_required() {
        let with_code = error(json!({"code": "taken"}));
        assert!(with_code.assert_code("taken").is_ok());

        let missing = error(json!({"status": "422"}));
        assert_eq!(
            missing.assert_code("taken").unwrap_err().path().to_string(),
            "$.errors[0].code"
        );
    }

    #[test]
    fn test_collection_contains() {
        let errors = ErrorObjects::new(
            KeyPath::root().key("errors"),
            vec![
                error(json!({"status": "422", "code": "blank"})),
                error(json!({"status": "422", "code": "taken"})),
            ],
        );

        assert!(errors.assert_count(2).is_ok());
        assert!(errors.assert_contains(&json!({"code": "taken"})).is_ok());
        assert!(errors.assert_contains_status("422").is_ok());
        assert!(matches!(
            errors.assert_contains_status("500"),
            Err(MatchError::NotContained { .. })
        ));
        assert!(errors.assert_contains(&json!({"code": "other"})).is_err());
    }
}
