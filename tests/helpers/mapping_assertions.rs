//! Mapping assertion helpers.

use member_extract::{Mapping, Value};

/// Keys of a mapping, in order.
pub fn keys(mapping: &Mapping) -> Vec<&str> {
    mapping.keys().map(|k| k.as_ref()).collect()
}

/// Assert a mapping has exactly the given keys, in order.
pub fn assert_keys(mapping: &Mapping, expected: &[&str]) {
    assert_eq!(
        keys(mapping),
        expected,
        "Unexpected keys in {}",
        Value::Nested(mapping.clone())
    );
}

/// Get a nested mapping by key, panicking with context if it is not one.
pub fn nested<'a>(mapping: &'a Mapping, key: &str) -> &'a Mapping {
    mapping
        .get(key)
        .and_then(Value::as_mapping)
        .unwrap_or_else(|| panic!("Expected '{}' to be a nested mapping", key))
}
