//! SimpleLisp Value -> JSON conversion

use crate::Value;

/// Convert a SimpleLisp Value to serde_json::Value.
///
/// JSON has no infinities or NaN; non-finite numbers become `null`.
pub fn value_to_json(v: Value) -> serde_json::Value {
    match v {
        Value::Boolean(b) => serde_json::Value::Bool(b),
        Value::Number(n) if n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 => {
            serde_json::Value::Number((n as i64).into())
        }
        Value::Number(n) => serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
    }
}

#[test]
fn test_value_to_json() {
    assert_eq!(value_to_json(Value::Number(5.0)), serde_json::json!(5));
    assert_eq!(value_to_json(Value::Number(2.5)), serde_json::json!(2.5));
    assert_eq!(value_to_json(Value::Boolean(true)), serde_json::json!(true));
    assert_eq!(value_to_json(Value::Number(f64::INFINITY)), serde_json::Value::Null);
    assert_eq!(value_to_json(Value::Number(f64::NAN)), serde_json::Value::Null);
}
