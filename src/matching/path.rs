//! Key paths locating a value inside a JSON:API document.
//!
//! A [`KeyPath`] is built up while walking a document and rendered in a
//! JSONPath-like form so failures point at the exact member that disagreed:
//!
//! ```rust
//! use jsonapi_testing::KeyPath;
//!
//! let path = KeyPath::data().key("attributes").key("tags").index(1);
//! assert_eq!(path.to_string(), "$.data.attributes.tags[1]");
//!
//! let odd = KeyPath::root().key("first-name").key("a b");
//! assert_eq!(odd.to_string(), "$.first-name[\"a b\"]");
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// One step of a [`KeyPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// An object member name.
    Key(String),
    /// An array position.
    Index(usize),
}

/// The location of a value inside a document, starting at the root (`$`).
///
/// Paths are cheap to extend: [`key`](Self::key) and [`index`](Self::index)
/// return a new path and leave the receiver untouched, which keeps the
/// recursive matchers free of push/pop bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<Segment>,
}

impl KeyPath {
    /// The document root.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// The top-level `data` member.
    #[must_use]
    pub fn data() -> Self {
        Self::root().key("data")
    }

    /// Returns this path extended by an object member.
    #[must_use]
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(key.into()));
        Self { segments }
    }

    /// Returns this path extended by an array position.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }

    /// Returns the segments of this path, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns `true` if this is the document root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the final segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }
}

fn is_plain_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                Segment::Key(key) if is_plain_key(key) => write!(f, ".{key}")?,
                Segment::Key(key) => write!(f, "[{key:?}]")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for KeyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
