//! Scalar equality: the strict and the loose flavour.
//!
//! Assertions name which flavour they use. Nothing in this crate relies on an
//! implicit coercion: when two values of different JSON types compare equal it
//! is because [`loose_equal`] explicitly allows that pair.

use serde_json::{Number, Value};

/// Type-and-value identity.
///
/// `1` is not `"1"`, and an integer `1` is not the float `1.0`. Objects compare
/// without regard to member order, arrays position by position.
///
/// ```rust
/// use jsonapi_testing::matching::strict_equal;
/// use serde_json::json;
///
/// assert!(strict_equal(&json!({"a": [1, 2]}), &json!({"a": [1, 2]})));
/// assert!(!strict_equal(&json!(1), &json!("1")));
/// assert!(!strict_equal(&json!(1), &json!(1.0)));
/// ```
#[must_use]
pub fn strict_equal(expected: &Value, actual: &Value) -> bool {
    expected == actual
}

/// Equality that lets a number match the string spelling of the same number.
///
/// The only coercions are:
/// - a number and a string that is a valid JSON number literal compare by
///   numeric value (`1` matches `"1"` and `"1.0"`, but not `" 1"` or `"one"`);
/// - two numbers compare by numeric value regardless of integer or float
///   representation.
///
/// Arrays and objects recurse with the same rules. Every other pairing of
/// different JSON types is unequal; in particular booleans and `null` never
/// match strings, and two strings compare byte for byte.
///
/// ```rust
/// use jsonapi_testing::matching::loose_equal;
/// use serde_json::json;
///
/// assert!(loose_equal(&json!("1"), &json!(1)));
/// assert!(loose_equal(&json!([1, "2"]), &json!(["1", 2])));
/// assert!(!loose_equal(&json!(2), &json!(1)));
/// assert!(!loose_equal(&json!("true"), &json!(true)));
/// ```
#[must_use]
pub fn loose_equal(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::Number(number), Value::String(text))
        | (Value::String(text), Value::Number(number)) => {
            numeric_string(text).is_some_and(|parsed| numbers_equal(number, &parsed))
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| loose_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| loose_equal(x, y)))
        }
        _ => expected == actual,
    }
}

fn numeric_string(text: &str) -> Option<Number> {
    text.parse::<Number>().ok()
}

#[allow(clippy::float_cmp)]
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strict_distinguishes_number_and_string() {
        assert!(strict_equal(&json!(1), &json!(1)));
        assert!(!strict_equal(&json!("1"), &json!(1)));
    }

    #[test]
    fn test_strict_ignores_object_member_order() {
        let a: Value = serde_json::from_str(r#"{"x": 1, "y": 2}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"y": 2, "x": 1}"#).unwrap();
        assert!(strict_equal(&a, &b));
    }

    #[test]
    fn test_strict_is_positional_for_arrays() {
        assert!(!strict_equal(&json!(["news", "misc"]), &json!(["misc", "news"])));
    }

    #[test]
    fn test_loose_numeric_string_coercion() {
        assert!(loose_equal(&json!("1"), &json!(1)));
        assert!(loose_equal(&json!(1), &json!("1")));
        assert!(loose_equal(&json!("1.5"), &json!(1.5)));
        assert!(loose_equal(&json!("1e2"), &json!(100)));
        assert!(!loose_equal(&json!("2"), &json!(1)));
    }

    #[test]
    fn test_loose_rejects_non_numeric_strings() {
        assert!(!loose_equal(&json!(" 1"), &json!(1)));
        assert!(!loose_equal(&json!("1abc"), &json!(1)));
        assert!(!loose_equal(&json!(""), &json!(0)));
    }

    #[test]
    fn test_loose_numbers_ignore_representation() {
        assert!(loose_equal(&json!(1), &json!(1.0)));
        assert!(loose_equal(&json!(-3), &json!(-3.0)));
        assert!(loose_equal(&json!(u64::MAX), &json!(u64::MAX)));
    }

    #[test]
    fn test_loose_does_not_coerce_other_types() {
        assert!(!loose_equal(&json!(true), &json!("1")));
        assert!(!loose_equal(&json!(null), &json!("")));
        assert!(!loose_equal(&json!(0), &json!(false)));
        assert!(!loose_equal(&json!("01"), &json!("1")));
    }

    #[test]
    fn test_loose_recurses_into_containers() {
        assert!(loose_equal(&json!({"a": ["1", 2]}), &json!({"a": [1, "2"]})));
        assert!(!loose_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!loose_equal(&json!([1]), &json!([1, 1])));
    }
}
