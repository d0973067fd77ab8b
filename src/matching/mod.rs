//! The comparison engine behind every assertion.
//!
//! - [`strict_equal`] and [`loose_equal`]: scalar equality flavours
//! - [`subset_match`] and [`exact_match`]: recursive structural matching
//! - [`KeyPath`]: where in the document a comparison failed
//! - [`Candidates`]: the accepted values of a membership assertion
//!
//! The functions here are plain and reusable on any `serde_json::Value`; the
//! testers in [`crate::document`] call them with paths rooted in the document.

mod candidates;
mod equality;
mod path;
mod structure;

pub use candidates::Candidates;
pub use equality::{loose_equal, strict_equal};
pub use path::{KeyPath, Segment};
pub use structure::{exact_match, subset_match};

use serde_json::Value;

/// Describes the JSON type of `value` for use in messages.
pub(crate) const fn describe_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
