//! Tests for the in-memory provider

use crate::provider::{Inline, Provider};

#[test]
fn test_fetch_returns_payload() {
    let mut provider = Inline::new("name\nA\n");
    let payload = provider.fetch().unwrap();
    assert_eq!(payload, b"name\nA\n");
    assert!(provider.errors().is_empty());
}

#[test]
fn test_fetch_is_repeatable() {
    let mut provider = Inline::new("x");
    assert_eq!(provider.fetch().unwrap(), provider.fetch().unwrap());
}

#[test]
fn test_from_params() {
    let mut provider =
        Inline::from_params(&serde_json::json!({"data": "a,b\n1,2\n"})).unwrap();
    assert_eq!(provider.fetch().unwrap(), b"a,b\n1,2\n");
}

#[test]
fn test_from_params_missing_data_is_definition_error() {
    assert!(Inline::from_params(&serde_json::json!({})).is_err());
}
