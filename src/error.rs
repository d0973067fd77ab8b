//! Error types for JSON:API document assertions.
//!
//! Two kinds of failure exist, mirroring the two stages of a test:
//!
//! - [`ShapeError`]: the document could not be read as the requested
//!   JSON:API structure (no `data`, a collection where a single resource was
//!   expected, a missing or empty `type`/`id`, ...). No partial resource is
//!   ever returned.
//! - [`MatchError`]: a resource was extracted, but its values disagree with the
//!   expectation. Every variant carries the [`KeyPath`] of the offending value.
//!
//! [`Error`] unifies both with JSON parse failures so that a test can return a
//! single `Result<(), Error>` and use `?` throughout.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_testing::{DocumentTester, Error, ShapeError};
//!
//! let document = DocumentTester::create(r#"{"data": {"type": "posts", "id": ""}}"#).unwrap();
//! let result = document.assert_resource();
//! assert!(matches!(result, Err(ShapeError::EmptyMember { .. })));
//!
//! let result = DocumentTester::create("{not json");
//! assert!(matches!(result, Err(Error::Parse(_))));
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::matching::{Candidates, KeyPath};

/// The document does not have the minimal JSON:API shape that was asserted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The top-level value is not a JSON object.
    #[error("Expected the document root to be a JSON object, got {found}.")]
    RootNotObject {
        /// The JSON type that was found instead.
        found: &'static str,
    },

    /// A required member is absent.
    #[error("Expected `{path}` to be present, but it is missing.")]
    MissingMember {
        /// Location of the missing member.
        path: KeyPath,
    },

    /// A collection was found where a single resource was asserted.
    #[error("Expected `{path}` to be a single resource object, got a collection.")]
    ExpectedSingle {
        /// Location of the collection.
        path: KeyPath,
    },

    /// A single object was found where a collection was asserted.
    #[error("Expected `{path}` to be a collection of resource objects, got a single object.")]
    ExpectedCollection {
        /// Location of the object.
        path: KeyPath,
    },

    /// A member has the wrong JSON type.
    #[error("Expected `{path}` to be {expected}, got {found}.")]
    InvalidMember {
        /// Location of the member.
        path: KeyPath,
        /// What the member should have been.
        expected: &'static str,
        /// The JSON type that was found instead.
        found: &'static str,
    },

    /// A `type` or `id` member is an empty string.
    #[error("Expected `{path}` to be a non-empty string.")]
    EmptyMember {
        /// Location of the empty member.
        path: KeyPath,
    },

    /// A member is present that the asserted structure must not have.
    #[error("Unexpected member `{path}`: {reason}.")]
    UnexpectedMember {
        /// Location of the member.
        path: KeyPath,
        /// Why the member is not allowed.
        reason: &'static str,
    },

    /// `data` was asserted to be `null` but holds something else.
    #[error("Expected `{path}` to be null, got {found}.")]
    ExpectedNull {
        /// Location of the member.
        path: KeyPath,
        /// The JSON type that was found instead.
        found: &'static str,
    },
}

impl ShapeError {
    /// Returns the location of the problem, or `None` for the document root.
    #[must_use]
    pub const fn path(&self) -> Option<&KeyPath> {
        match self {
            Self::RootNotObject { .. } => None,
            Self::MissingMember { path }
            | Self::ExpectedSingle { path }
            | Self::ExpectedCollection { path }
            | Self::InvalidMember { path, .. }
            | Self::EmptyMember { path }
            | Self::UnexpectedMember { path, .. }
            | Self::ExpectedNull { path, .. } => Some(path),
        }
    }
}

/// An extracted resource disagrees with the expectation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    /// `type` or `id` is not among the accepted values.
    #[error("expected {member} to be {candidates}, got {actual}")]
    NotOneOf {
        /// Location of the member.
        path: KeyPath,
        /// `"type"` or `"id"`.
        member: &'static str,
        /// The accepted values.
        candidates: Candidates,
        /// The value the resource has.
        actual: String,
    },

    /// An expected member is absent.
    #[error("expected `{path}` to be {expected}, but it is missing")]
    MissingKey {
        /// Location of the missing member.
        path: KeyPath,
        /// The value that was expected there.
        expected: Value,
    },

    /// An exact match found a member the expectation does not list.
    #[error("expected no member at `{path}`, got {actual}")]
    UnexpectedKey {
        /// Location of the extra member.
        path: KeyPath,
        /// The value of the extra member.
        actual: Value,
    },

    /// Values differ in type or content.
    #[error("expected `{path}` to be {expected}, got {actual}")]
    ValueMismatch {
        /// Location of the value.
        path: KeyPath,
        /// The expected value.
        expected: Value,
        /// The actual value.
        actual: Value,
    },

    /// Arrays differ in length.
    #[error("expected `{path}` to have {expected} element(s), got {actual}")]
    LengthMismatch {
        /// Location of the array.
        path: KeyPath,
        /// Expected number of elements.
        expected: usize,
        /// Actual number of elements.
        actual: usize,
    },

    /// No element of a collection matches the expectation.
    #[error("expected `{path}` to contain {expected}")]
    NotContained {
        /// Location of the collection.
        path: KeyPath,
        /// The element that was looked for.
        expected: Value,
    },
}

impl MatchError {
    /// Returns the location of the disagreement.
    #[must_use]
    pub const fn path(&self) -> &KeyPath {
        match self {
            Self::NotOneOf { path, .. }
            | Self::MissingKey { path, .. }
            | Self::UnexpectedKey { path, .. }
            | Self::ValueMismatch { path, .. }
            | Self::LengthMismatch { path, .. }
            | Self::NotContained { path, .. } => path,
        }
    }
}

/// Records a failed assertion on the `tracing` debug level and hands it back.
pub(crate) fn traced<E: std::fmt::Display>(error: E) -> E {
    tracing::debug!(error = %error, "JSON:API assertion failed");
    error
}

/// Any failure raised while testing a document.
#[derive(Debug, Error)]
pub enum Error {
    /// The input text is not valid JSON.
    #[error("Invalid JSON document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document does not have the asserted shape.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// A value disagrees with the expectation.
    #[error(transparent)]
    Match(#[from] MatchError),
}
