//! Tests for integer and decimal coercion

use crate::translate::{Decimal, Integer, Translate};
use crate::value::Value;

#[test]
fn test_integer_empty_string_becomes_null() {
    let result = Integer::new().translate(Value::from("")).unwrap();
    assert_eq!(result, Value::Null);
}

#[test]
fn test_integer_parses_numeric_string() {
    let result = Integer::new().translate(Value::from("42")).unwrap();
    assert_eq!(result, Value::Int(42));
}

#[test]
fn test_integer_trims_whitespace() {
    let result = Integer::new().translate(Value::from(" 42 ")).unwrap();
    assert_eq!(result, Value::Int(42));
}

#[test]
fn test_integer_passes_int_through() {
    let result = Integer::new().translate(Value::Int(-3)).unwrap();
    assert_eq!(result, Value::Int(-3));
}

#[test]
fn test_integer_truncates_float() {
    let result = Integer::new().translate(Value::Float(3.9)).unwrap();
    assert_eq!(result, Value::Int(3));
}

#[test]
fn test_integer_rejects_non_numeric_string() {
    let result = Integer::new().translate(Value::from("abc"));
    assert!(result.is_err());
}

#[test]
fn test_decimal_parses_string() {
    let result = Decimal::new().translate(Value::from("2.5")).unwrap();
    assert_eq!(result, Value::Float(2.5));
}

#[test]
fn test_decimal_widens_int() {
    let result = Decimal::new().translate(Value::Int(4)).unwrap();
    assert_eq!(result, Value::Float(4.0));
}

#[test]
fn test_decimal_blank_becomes_null() {
    let result = Decimal::new().translate(Value::from("")).unwrap();
    assert_eq!(result, Value::Null);
}

#[test]
fn test_decimal_rejects_non_numeric_string() {
    assert!(Decimal::new().translate(Value::from("n/a")).is_err());
}
