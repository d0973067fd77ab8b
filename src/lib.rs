//! # JSON:API Testing
//!
//! Fluent assertions for [JSON:API](https://jsonapi.org) documents in Rust
//! test suites.
//!
//! ## Overview
//!
//! This crate provides:
//! - Document navigation via [`DocumentTester`], failing fast with a
//!   [`ShapeError`] when `data` does not have the asserted shape
//! - Resource assertions on [`Resource`] and [`ResourceIdentifier`]: type and
//!   id membership, loose and strict attribute equality, attribute and
//!   relationship subsets, and exact structural matches
//! - Collection assertions via [`ResourceCollection`]
//! - Error document assertions via [`ErrorObjects`]
//! - A reusable matching engine in [`matching`], reporting the key path of
//!   every disagreement in a [`MatchError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonapi_testing::{DocumentTester, Error, ResourceIdentity};
//! use serde_json::json;
//!
//! fn post_is_valid(body: &str) -> Result<(), Error> {
//!     DocumentTester::create(body)?
//!         .assert_resource()?
//!         .assert_type_is("posts")?
//!         .assert_attribute_is("rank", 1)?
//!         .assert_attribute("rank", "1")?
//!         .assert_attributes_subset(&json!({"title": "My First Post"}))?;
//!     Ok(())
//! }
//!
//! post_is_valid(r#"{"data": {
//!     "type": "posts",
//!     "id": "123",
//!     "attributes": {"title": "My First Post", "rank": 1}
//! }}"#).unwrap();
//! ```
//!
//! ## Failing Tests
//!
//! Assertions return `Result`. Inside a test either return
//! `Result<(), Error>` and use `?`, or finish a chain with
//! [`OrFail::or_fail`], which panics with the failure message:
//!
//! ```rust,should_panic
//! use jsonapi_testing::{DocumentTester, OrFail};
//!
//! DocumentTester::create(r#"{"data": [{"type": "posts", "id": "1"}]}"#)
//!     .or_fail()
//!     .assert_resource()
//!     .or_fail(); // panics: `$.data` is a collection
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based via [`TesterConfig`]
//! - **Fail-fast extraction**: handles only exist for valid resources
//! - **Explicit equality**: every assertion is either strict or loose, never
//!   implicitly coercing
//! - **Immutable handles**: assertions borrow and return the same snapshot

pub mod config;
pub mod document;
pub mod error;
pub mod matching;

mod fail;

// Re-export public types at crate root for convenience
pub use config::{TesterConfig, TesterConfigBuilder};
pub use document::{
    DocumentTester, ErrorObject, ErrorObjects, Resource, ResourceCollection, ResourceIdentifier,
    ResourceIdentity,
};
pub use error::{Error, MatchError, ShapeError};
pub use fail::OrFail;
pub use matching::{Candidates, KeyPath};
