//! Tests for the default-substitution translations

use crate::translate::{DefaultNil, DefaultZero, Translate};
use crate::value::Value;

#[test]
fn test_default_nil_empty_string_becomes_null() {
    let result = DefaultNil::new().translate(Value::from("")).unwrap();
    assert_eq!(result, Value::Null);
}

#[test]
fn test_default_nil_null_stays_null() {
    let result = DefaultNil::new().translate(Value::Null).unwrap();
    assert_eq!(result, Value::Null);
}

#[test]
fn test_default_nil_keeps_present_value() {
    let result = DefaultNil::new()
        .translate(Value::from("a@example.com"))
        .unwrap();
    assert_eq!(result, Value::from("a@example.com"));
}

#[test]
fn test_default_nil_zero_is_not_empty() {
    // Falsy-but-meaningful values must survive default substitution
    let result = DefaultNil::new().translate(Value::Int(0)).unwrap();
    assert_eq!(result, Value::Int(0));
}

#[test]
fn test_default_zero_blank_becomes_zero() {
    assert_eq!(
        DefaultZero::new().translate(Value::from("")).unwrap(),
        Value::Int(0)
    );
    assert_eq!(
        DefaultZero::new().translate(Value::Null).unwrap(),
        Value::Int(0)
    );
}

#[test]
fn test_default_zero_keeps_present_value() {
    assert_eq!(
        DefaultZero::new().translate(Value::Int(7)).unwrap(),
        Value::Int(7)
    );
}
