//! Dictionary mappers: copy a JSON object property in and out of a model.
//!
//! The read path ([`read_dictionary`]) is lenient and never fails. The write
//! path ([`serialize_dictionary`]) checks every non-null entry against the
//! element type.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{value_kind, ExpectedType, ValidationError};
use crate::options::MapperOptions;
use crate::path::FieldPath;

/// Copies the dictionary stored under `name` in `parent`.
///
/// Returns `None` when `parent` is absent or not an object, when `name` is
/// missing or `null`, or when its value is not a JSON object. Entries are
/// copied verbatim, `null` included.
pub fn read_dictionary(parent: Option<&Value>, name: &str) -> Option<Map<String, Value>> {
    let field = parent?.as_object()?.get(name)?;
    match field {
        Value::Object(entries) => Some(entries.clone()),
        Value::Null => None,
        other => {
            debug!(
                property = name,
                kind = value_kind(other),
                "ignoring non-object dictionary property"
            );
            None
        }
    }
}

/// Builds the payload for a dictionary property whose values must be
/// `element`.
///
/// `null` entries pass through unchecked. The first mismatching entry aborts
/// the whole copy.
pub fn serialize_dictionary(
    path: &FieldPath,
    entries: &Map<String, Value>,
    element: ExpectedType,
    options: &MapperOptions,
) -> Result<Map<String, Value>, ValidationError> {
    if !options.client_side_validation {
        trace!(path = %path, "client side validation disabled");
        return Ok(entries.clone());
    }
    let mut out = Map::with_capacity(entries.len());
    for (key, value) in entries {
        if !value.is_null() && !element.matches_value(value) {
            let path = path.key(key.as_str());
            debug!(path = %path, kind = value_kind(value), expected = %element, "rejecting dictionary entry");
            return Err(ValidationError::new(path, element));
        }
        out.insert(key.clone(), value.clone());
    }
    Ok(out)
}

/// Typed view over a string dictionary: string and `null` entries, in map
/// order. Entries of any other type are skipped.
pub fn string_entries(entries: &Map<String, Value>) -> impl Iterator<Item = (&str, Option<&str>)> {
    entries.iter().filter_map(|(key, value)| match value {
        Value::String(s) => Some((key.as_str(), Some(s.as_str()))),
        Value::Null => Some((key.as_str(), None)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn read_requires_object_property() {
        assert_eq!(read_dictionary(None, "p"), None);
        assert_eq!(read_dictionary(Some(&json!(null)), "p"), None);
        assert_eq!(read_dictionary(Some(&json!([1])), "p"), None);
        assert_eq!(read_dictionary(Some(&json!({})), "p"), None);
        assert_eq!(read_dictionary(Some(&json!({"p": null})), "p"), None);
        assert_eq!(read_dictionary(Some(&json!({"p": 0})), "p"), None);
        assert_eq!(read_dictionary(Some(&json!({"p": "ab"})), "p"), None);
        assert_eq!(read_dictionary(Some(&json!({"p": {}})), "p"), Some(Map::new()));
    }

    #[test]
    fn read_keeps_nulls_and_foreign_types() {
        let input = json!({"p": {"a": null, "b": 5, "c": "x"}});
        let got = read_dictionary(Some(&input), "p").unwrap();
        assert_eq!(Value::Object(got), json!({"a": null, "b": 5, "c": "x"}));
    }

    #[test]
    fn serialize_rejects_first_mismatch() {
        let entries = obj(json!({"ok": "x", "bad": true}));
        let err = serialize_dictionary(
            &FieldPath::property("p"),
            &entries,
            ExpectedType::String,
            &MapperOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "p[bad] must be of type string.");
    }

    #[test]
    fn serialize_without_validation_passes_through() {
        let entries = obj(json!({"bad": [1, 2]}));
        let got = serialize_dictionary(
            &FieldPath::property("p"),
            &entries,
            ExpectedType::String,
            &MapperOptions::new().client_side_validation(false),
        )
        .unwrap();
        assert_eq!(got, entries);
    }

    #[test]
    fn string_entries_skips_other_types() {
        let entries = obj(json!({"a": "1", "b": null, "c": 3}));
        let got: Vec<_> = string_entries(&entries).collect();
        assert_eq!(got, vec![("a", Some("1")), ("b", None)]);
    }
}
