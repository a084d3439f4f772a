use spatula::{call_function, ErrorKind, Value};
use serde_json::json;

const USAGE: &str = "jPath function - first parameter should be a JObject and second a string jPath expression with optional third parameter returnNullIfNotFound.";
const NO_MATCH: &str = "jPath function - jPath expression did not result in a match.";

fn source() -> Value {
    Value::Json(json!({
        "name": "bob",
        "numbers": [1, 2],
        "kvps": [
            {"key": "key1", "value": "value1"},
            {"key": "key2", "value": "value2"}
        ]
    }))
}

fn jpath(path: &str) -> Result<Value, spatula::Error> {
    call_function("jPath", vec![source(), Value::String(path.to_string())])
}

#[test]
fn test_single_scalar_match() {
    assert_eq!(jpath("name").unwrap(), Value::String("bob".to_string()));
}

#[test]
fn test_indexed_access() {
    assert_eq!(jpath("numbers[0]").unwrap(), Value::Number(1.0));
    assert_eq!(jpath("numbers[1]").unwrap(), Value::Number(2.0));
}

#[test]
fn test_filter_predicate_selects_one_element() {
    assert_eq!(
        jpath("kvps[?(@.key=='key1')].value").unwrap(),
        Value::String("value1".to_string())
    );
    assert_eq!(
        jpath("kvps[?(@.key=='key2')].value").unwrap(),
        Value::String("value2".to_string())
    );
}

#[test]
fn test_array_field_returns_full_array() {
    // Selecting an array-valued field is not an error: the whole array comes
    // back, in order.
    assert_eq!(
        jpath("numbers").unwrap(),
        Value::Array(vec![Value::Number(1.0), Value::Number(2.0)])
    );
}

#[test]
fn test_no_match_is_a_domain_failure() {
    let err = jpath("size").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Domain);
    assert_eq!(err.message, NO_MATCH);
}

#[test]
fn test_no_match_with_bypass_flag_returns_null() {
    let result = call_function(
        "jPath",
        vec![source(), Value::String("size".to_string()), Value::Boolean(true)],
    )
    .unwrap();
    assert_eq!(result, Value::Null);
}

#[test]
fn test_filter_miss_with_bypass_flag_returns_null() {
    let result = call_function(
        "jPath",
        vec![
            source(),
            Value::String("kvps[?(@.key=='keyXXX')].value".to_string()),
            Value::Boolean(true),
        ],
    )
    .unwrap();
    assert_eq!(result, Value::Null);
}

#[test]
fn test_string_source_is_a_format_failure() {
    // A string that happens to contain valid JSON still does not qualify:
    // the check is on the variant, not the content.
    for src in ["SomeRandomString", "{ \"name\": \"bob\" }"] {
        let err = call_function(
            "jPath",
            vec![Value::String(src.to_string()), Value::String("name".to_string())],
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Format);
        assert_eq!(err.message, USAGE);
    }
}

#[test]
fn test_empty_path_is_a_format_failure() {
    let err = call_function("jPath", vec![source(), Value::String(String::new())]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Format);
    assert_eq!(err.message, USAGE);
}

#[test]
fn test_non_boolean_bypass_flag_is_a_format_failure() {
    let err = call_function(
        "jPath",
        vec![source(), Value::String("name".to_string()), Value::String("yes".to_string())],
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Format);
    assert_eq!(err.message, USAGE);
}

#[test]
fn test_multiple_matches_return_an_array() {
    let result = jpath("kvps[*].value").unwrap();
    assert_eq!(
        result,
        Value::Array(vec![
            Value::String("value1".to_string()),
            Value::String("value2".to_string()),
        ])
    );
}

#[test]
fn test_object_match_stays_a_document_node() {
    let result = jpath("kvps[?(@.key=='key1')]").unwrap();
    assert_eq!(result, Value::Json(json!({"key": "key1", "value": "value1"})));
}
