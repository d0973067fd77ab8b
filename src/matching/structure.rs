//! Recursive structural matching of expected JSON against actual JSON.
//!
//! Both matchers walk the expected value and stop at the first disagreement,
//! reporting it as a [`MatchError`] located by its [`KeyPath`]:
//!
//! | expected | subset match                        | exact match                 |
//! |----------|-------------------------------------|-----------------------------|
//! | object   | every expected member, recursively  | same, and no extra members  |
//! | array    | same length, element by element     | same                        |
//! | scalar   | [`strict_equal`]                    | same                        |

use serde_json::Value;

use super::equality::strict_equal;
use super::path::KeyPath;
use crate::error::MatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Subset,
    Exact,
}

/// Checks that `actual` contains everything in `expected`.
///
/// Objects in `actual` may carry members `expected` does not mention. Arrays
/// are not sets: they must have the same length and are compared by position.
///
/// # Errors
///
/// Returns the first [`MatchError`] found, located relative to `path`.
///
/// # Example
///
/// ```rust
/// use jsonapi_testing::{matching::subset_match, KeyPath};
/// use serde_json::json;
///
/// let actual = json!({"title": "Hello", "tags": ["news", "misc"], "rank": 1});
///
/// assert!(subset_match(&json!({"title": "Hello"}), &actual, &KeyPath::root()).is_ok());
///
/// let error = subset_match(&json!({"tags": ["news"]}), &actual, &KeyPath::root()).unwrap_err();
/// assert_eq!(error.path().to_string(), "$.tags");
/// ```
pub fn subset_match(expected: &Value, actual: &Value, path: &KeyPath) -> Result<(), MatchError> {
    compare(expected, actual, path, Mode::Subset)
}

/// Checks that `actual` and `expected` are structurally identical.
///
/// Like [`subset_match`], but objects must have exactly the same member
/// names in both directions.
///
/// # Errors
///
/// Returns the first [`MatchError`] found, located relative to `path`.
pub fn exact_match(expected: &Value, actual: &Value, path: &KeyPath) -> Result<(), MatchError> {
    compare(expected, actual, path, Mode::Exact)
}

fn compare(expected: &Value, actual: &Value, path: &KeyPath, mode: Mode) -> Result<(), MatchError> {
    match (expected, actual) {
        (Value::Object(expected_members), Value::Object(actual_members)) => {
            for (key, expected_value) in expected_members {
                let child = path.key(key);
                let Some(actual_value) = actual_members.get(key) else {
                    return Err(MatchError::MissingKey {
                        path: child,
                        expected: expected_value.clone(),
                    });
                };
                compare(expected_value, actual_value, &child, mode)?;
            }

            if mode == Mode::Exact {
                if let Some((key, value)) = actual_members
                    .iter()
                    .find(|(key, _)| !expected_members.contains_key(*key))
                {
                    return Err(MatchError::UnexpectedKey {
                        path: path.key(key),
                        actual: value.clone(),
                    });
                }
            }

            Ok(())
        }
        (Value::Array(expected_items), Value::Array(actual_items)) => {
            if expected_items.len() != actual_items.len() {
                return Err(MatchError::LengthMismatch {
                    path: path.clone(),
                    expected: expected_items.len(),
                    actual: actual_items.len(),
                });
            }

            expected_items
                .iter()
                .zip(actual_items)
                .enumerate()
                .try_for_each(|(index, (e, a))| compare(e, a, &path.index(index), mode))
        }
        _ if strict_equal(expected, actual) => Ok(()),
        _ => Err(MatchError::ValueMismatch {
            path: path.clone(),
            expected: expected.clone(),
            actual: actual.clone(),
        }),
    }
}
