//! JSON assertion helpers shared by the module tests.

use serde_json::Value;

/// Decode a JSON string, panicking with context on failure.
pub fn parse(json: &str) -> Value {
    serde_json::from_str(json).expect("invalid JSON")
}

/// Assert that a JSON object carries every expected field.
pub fn assert_has_fields(
    value: &Value,
    expected: &[&str],
) {
    for field in expected {
        assert!(value.get(field).is_some(), "missing required field: {}", field);
    }
}
