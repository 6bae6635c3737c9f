//! Firestore `Value` wire encoding
//!
//! The REST documents API does not carry plain JSON: every field is a typed
//! `Value` object (`{"stringValue": "x"}`, `{"mapValue": {"fields": ...}}`).
//! These functions map between that encoding and ordinary `serde_json`
//! values so the repositories can lean on serde for the domain structs.

use serde_json::{json, Map, Value};

/// Encode a plain JSON value as a Firestore `Value`.
pub fn to_firestore_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                // integerValue is string-encoded on the wire.
                json!({ "integerValue": i.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(to_firestore_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
    }
}

/// Decode a Firestore `Value` back to plain JSON.
pub fn from_firestore_value(value: &Value) -> Value {
    let Some(map) = value.as_object() else {
        return Value::Null;
    };

    if map.contains_key("nullValue") {
        return Value::Null;
    }
    if let Some(b) = map.get("booleanValue") {
        return b.clone();
    }
    if let Some(i) = map.get("integerValue") {
        // String-encoded on the wire; surface it as a JSON number.
        if let Some(parsed) = i.as_str().and_then(|s| s.parse::<i64>().ok()) {
            return json!(parsed);
        }
        return i.clone();
    }
    if let Some(d) = map.get("doubleValue") {
        return d.clone();
    }
    if let Some(s) = map.get("stringValue") {
        return s.clone();
    }
    if let Some(t) = map.get("timestampValue") {
        return t.clone();
    }
    if let Some(array) = map.get("arrayValue") {
        let items = array
            .get("values")
            .and_then(|v| v.as_array())
            .map(|values| values.iter().map(from_firestore_value).collect())
            .unwrap_or_default();
        return Value::Array(items);
    }
    if let Some(nested) = map.get("mapValue") {
        return Value::Object(decode_fields(nested.get("fields")));
    }

    Value::Null
}

/// Encode a JSON object as a document `fields` map.
pub fn encode_fields(map: &Map<String, Value>) -> Value {
    let fields: Map<String, Value> = map
        .iter()
        .map(|(key, value)| (key.clone(), to_firestore_value(value)))
        .collect();
    Value::Object(fields)
}

/// Decode a document `fields` map to a JSON object.
pub fn decode_fields(fields: Option<&Value>) -> Map<String, Value> {
    fields
        .and_then(|f| f.as_object())
        .map(|map| {
            map.iter()
                .map(|(key, value)| (key.clone(), from_firestore_value(value)))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_encode_to_typed_values() {
        assert_eq!(
            to_firestore_value(&json!("hello")),
            json!({ "stringValue": "hello" })
        );
        assert_eq!(
            to_firestore_value(&json!(true)),
            json!({ "booleanValue": true })
        );
        assert_eq!(
            to_firestore_value(&json!(42)),
            json!({ "integerValue": "42" })
        );
        assert_eq!(
            to_firestore_value(&json!(1.5)),
            json!({ "doubleValue": 1.5 })
        );
    }

    #[test]
    fn test_nested_document_roundtrip() {
        let company = json!({
            "company_name": "Acme",
            "address": {
                "formatted_address": "1 Example St",
                "city": "Sydney"
            },
            "tags": ["crm", "desktop"]
        });

        let encoded = encode_fields(company.as_object().unwrap());
        let decoded = Value::Object(decode_fields(Some(&encoded)));

        assert_eq!(decoded, company);
    }

    #[test]
    fn test_string_encoded_integer_decodes_to_number() {
        let decoded = from_firestore_value(&json!({ "integerValue": "7" }));
        assert_eq!(decoded, json!(7));
    }

    #[test]
    fn test_timestamp_value_decodes_as_string() {
        let decoded = from_firestore_value(&json!({ "timestampValue": "2024-03-01T00:00:00Z" }));
        assert_eq!(decoded, json!("2024-03-01T00:00:00Z"));
    }
}
