use std::fmt;

/// A runtime value produced by evaluation.
///
/// # Examples
///
/// ```
/// use simplelisp::Value;
///
/// assert_eq!(Value::Number(5.0).to_string(), "5");
/// assert_eq!(Value::Number(2.5).to_string(), "2.5");
/// assert_eq!(Value::Boolean(true).to_string(), "True");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// 64-bit floating-point number
    Number(f64),

    /// Boolean, produced only as the operand of `&` and `|`
    Boolean(bool),
}

impl Value {
    /// Human-readable type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) if n.is_nan() => write!(f, "NaN"),
            Value::Number(n) if n.is_infinite() => {
                if n.is_sign_negative() {
                    write!(f, "-Infinity")
                } else {
                    write!(f, "Infinity")
                }
            }
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(true) => write!(f, "True"),
            Value::Boolean(false) => write!(f, "False"),
        }
    }
}

#[test]
fn test_display() {
    let cases = vec![
        (Value::Number(12.0), "12"),
        (Value::Number(-0.25), "-0.25"),
        (Value::Number(f64::INFINITY), "Infinity"),
        (Value::Number(f64::NEG_INFINITY), "-Infinity"),
        (Value::Number(f64::NAN), "NaN"),
        (Value::Boolean(false), "False"),
    ];

    for (value, expected) in cases {
        assert_eq!(value.to_string(), expected);
    }
}

#[test]
fn test_accessors() {
    assert_eq!(Value::Number(3.0).as_number(), Some(3.0));
    assert_eq!(Value::Number(3.0).as_boolean(), None);
    assert_eq!(Value::Boolean(true).as_boolean(), Some(true));
    assert_eq!(Value::Boolean(true).type_name(), "boolean");
}
