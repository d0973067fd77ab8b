//! Validation of the minimal resource shape shared by every extraction.

use serde_json::{Map, Value};

use crate::config::TesterConfig;
use crate::error::ShapeError;
use crate::matching::{describe_kind, KeyPath};

/// Something that can be read out of a `data` member (or one of its elements).
pub(crate) trait FromData: Sized {
    fn from_data(value: &Value, path: KeyPath, config: &TesterConfig) -> Result<Self, ShapeError>;
}

/// The validated identity of a resource and its normalised JSON form.
pub(crate) struct Identity {
    pub(crate) resource_type: String,
    pub(crate) id: String,
    pub(crate) object: Value,
}

pub(crate) fn object_at<'a>(
    value: &'a Value,
    path: &KeyPath,
    expected: &'static str,
) -> Result<&'a Map<String, Value>, ShapeError> {
    value.as_object().ok_or_else(|| ShapeError::InvalidMember {
        path: path.clone(),
        expected,
        found: describe_kind(value),
    })
}

/// Reads `type` and `id`, rewriting an integer id into its string form.
pub(crate) fn read_identity(
    object: &Map<String, Value>,
    path: &KeyPath,
    config: &TesterConfig,
) -> Result<Identity, ShapeError> {
    let resource_type = read_type(object, path)?;
    let id = read_id(object, path, config)?;

    let mut normalised = object.clone();
    normalised.insert("id".to_string(), Value::String(id.clone()));

    Ok(Identity {
        resource_type,
        id,
        object: Value::Object(normalised),
    })
}

fn read_type(object: &Map<String, Value>, path: &KeyPath) -> Result<String, ShapeError> {
    let path = path.key("type");
    match object.get("type") {
        None => Err(ShapeError::MissingMember { path }),
        Some(Value::String(value)) if value.is_empty() => Err(ShapeError::EmptyMember { path }),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(ShapeError::InvalidMember {
            path,
            expected: "a string",
            found: describe_kind(other),
        }),
    }
}

fn read_id(
    object: &Map<String, Value>,
    path: &KeyPath,
    config: &TesterConfig,
) -> Result<String, ShapeError> {
    let path = path.key("id");
    let expected = if config.numeric_ids() {
        "a string or an integer"
    } else {
        "a string"
    };

    match object.get("id") {
        None => Err(ShapeError::MissingMember { path }),
        Some(Value::String(value)) if value.is_empty() => Err(ShapeError::EmptyMember { path }),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(Value::Number(number)) if config.numeric_ids() => number
            .as_i64()
            .map(|n| n.to_string())
            .or_else(|| number.as_u64().map(|n| n.to_string()))
            .ok_or(ShapeError::InvalidMember {
                path,
                expected,
                found: "a non-integer number",
            }),
        Some(other) => Err(ShapeError::InvalidMember {
            path,
            expected,
            found: describe_kind(other),
        }),
    }
}

/// Returns true for `{}` and `[]`, which both encode an empty mapping.
pub(crate) fn is_empty_mapping(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Checks that `member`, when present, is a JSON object or an empty array.
pub(crate) fn optional_object(
    object: &Map<String, Value>,
    path: &KeyPath,
    member: &'static str,
) -> Result<(), ShapeError> {
    match object.get(member) {
        None | Some(Value::Object(_)) => Ok(()),
        Some(Value::Array(items)) if items.is_empty() => Ok(()),
        Some(other) => Err(ShapeError::InvalidMember {
            path: path.key(member),
            expected: "an object",
            found: describe_kind(other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn identity(value: &Value, config: &TesterConfig) -> Result<Identity, ShapeError> {
        let object = value.as_object().unwrap();
        read_identity(object, &KeyPath::data(), config)
    }

    #[test]
    fn test_string_identity() {
        let identity =
            identity(&json!({"type": "posts", "id": "123"}), &TesterConfig::default()).unwrap();
        assert_eq!(identity.resource_type, "posts");
        assert_eq!(identity.id, "123");
    }

    #[test]
    fn test_integer_id_is_normalised() {
        let identity =
            identity(&json!({"type": "posts", "id": 123}), &TesterConfig::default()).unwrap();
        assert_eq!(identity.id, "123");
        assert_eq!(identity.object["id"], json!("123"));
    }

    #[test]
    fn test_float_id_is_rejected() {
        let error = identity(&json!({"type": "posts", "id": 1.5}), &TesterConfig::default())
            .err()
            .unwrap();
        assert!(matches!(error, ShapeError::InvalidMember { found: "a non-integer number", .. }));
    }

    #[test]
    fn test_integer_id_rejected_when_disabled() {
        let config = TesterConfig::builder().numeric_ids(false).build();
        let error = identity(&json!({"type": "posts", "id": 1}), &config)
            .err()
            .unwrap();
        assert_eq!(
            error,
            ShapeError::InvalidMember {
                path: KeyPath::data().key("id"),
                expected: "a string",
                found: "a number",
            }
        );
    }

    #[test]
    fn test_type_must_be_a_string() {
        let error = identity(&json!({"type": 7, "id": "1"}), &TesterConfig::default())
            .err()
            .unwrap();
        assert!(matches!(error, ShapeError::InvalidMember { expected: "a string", .. }));
    }

    #[test]
    fn test_null_type_is_not_missing() {
        let error = identity(&json!({"type": null, "id": "1"}), &TesterConfig::default())
            .err()
            .unwrap();
        assert!(matches!(error, ShapeError::InvalidMember { found: "null", .. }));
    }

    #[test]
    fn test_optional_object_members() {
        let object = json!({"attributes": {}, "relationships": [], "links": ["a"], "meta": 1});
        let object = object.as_object().unwrap();

        assert!(optional_object(object, &KeyPath::data(), "attributes").is_ok());
        assert!(optional_object(object, &KeyPath::data(), "relationships").is_ok());
        assert!(optional_object(object, &KeyPath::data(), "missing").is_ok());

        let error = optional_object(object, &KeyPath::data(), "links").unwrap_err();
        assert_eq!(error.path(), Some(&KeyPath::data().key("links")));
        assert!(matches!(
            optional_object(object, &KeyPath::data(), "meta"),
            Err(ShapeError::InvalidMember { found: "a number", .. })
        ));
    }

    #[test]
    fn test_empty_mapping() {
        assert!(is_empty_mapping(&json!({})));
        assert!(is_empty_mapping(&json!([])));
        assert!(!is_empty_mapping(&json!({"a": 1})));
        assert!(!is_empty_mapping(&json!([1])));
        assert!(!is_empty_mapping(&json!(null)));
    }
}
