//! Configuration for document extraction.
//!
//! The defaults follow the JSON:API specification closely while accepting the
//! integer ids many servers emit. Tests that want different rules build a
//! [`TesterConfig`] and hand it to
//! [`DocumentTester::with_config`](crate::DocumentTester::with_config).
//!
//! # Example
//!
//! ```rust
//! use jsonapi_testing::{DocumentTester, TesterConfig};
//!
//! let config = TesterConfig::builder()
//!     .numeric_ids(false)
//!     .build();
//!
//! let document = DocumentTester::create(r#"{"data": {"type": "posts", "id": 1}}"#)
//!     .unwrap()
//!     .with_config(config);
//!
//! assert!(document.assert_resource().is_err());
//! ```

/// Settings that control how strictly documents are read.
///
/// # Thread Safety
///
/// `TesterConfig` is `Copy`, `Send`, and `Sync`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TesterConfig {
    numeric_ids: bool,
    strict_identifiers: bool,
}

impl TesterConfig {
    /// Creates a new builder for constructing a `TesterConfig`.
    #[must_use]
    pub fn builder() -> TesterConfigBuilder {
        TesterConfigBuilder::new()
    }

    /// Returns whether integer `id` members are accepted and normalised to
    /// their decimal string form.
    #[must_use]
    pub const fn numeric_ids(&self) -> bool {
        self.numeric_ids
    }

    /// Returns whether resource identifiers carrying `attributes` or
    /// `relationships` are rejected.
    #[must_use]
    pub const fn strict_identifiers(&self) -> bool {
        self.strict_identifiers
    }
}

impl Default for TesterConfig {
    fn default() -> Self {
        TesterConfigBuilder::new().build()
    }
}

// Verify TesterConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TesterConfig>();
};

/// Builder for constructing [`TesterConfig`] instances.
///
/// # Defaults
///
/// - `numeric_ids`: `true`
/// - `strict_identifiers`: `true`
///
/// # Example
///
/// ```rust
/// use jsonapi_testing::TesterConfig;
///
/// let config = TesterConfig::builder()
///     .strict_identifiers(false)
///     .build();
///
/// assert!(config.numeric_ids());
/// assert!(!config.strict_identifiers());
/// ```
#[derive(Debug, Default)]
pub struct TesterConfigBuilder {
    numeric_ids: Option<bool>,
    strict_identifiers: Option<bool>,
}

impl TesterConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether integer ids such as `{"id": 1}` are accepted.
    ///
    /// When disabled, an `id` must be a JSON string.
    #[must_use]
    pub const fn numeric_ids(mut self, accept: bool) -> Self {
        self.numeric_ids = Some(accept);
        self
    }

    /// Sets whether a resource identifier may carry `attributes` or
    /// `relationships`.
    ///
    /// When enabled, asserting an identifier on a full resource object fails.
    #[must_use]
    pub const fn strict_identifiers(mut self, strict: bool) -> Self {
        self.strict_identifiers = Some(strict);
        self
    }

    /// Builds the [`TesterConfig`], filling unset fields with defaults.
    #[must_use]
    pub fn build(self) -> TesterConfig {
        TesterConfig {
            numeric_ids: self.numeric_ids.unwrap_or(true),
            strict_identifiers: self.strict_identifiers.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = TesterConfig::builder().build();
        assert!(config.numeric_ids());
        assert!(config.strict_identifiers());
        assert_eq!(config, TesterConfig::default());
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = TesterConfigBuilder::new()
            .numeric_ids(false)
            .strict_identifiers(false)
            .build();

        assert!(!config.numeric_ids());
        assert!(!config.strict_identifiers());
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TesterConfig>();
    }

    #[test]
    fn test_config_is_copy_and_debug() {
        let config = TesterConfig::default();
        let copied = config;
        assert_eq!(copied, config);

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("TesterConfig"));
    }
}
