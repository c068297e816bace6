use crate::value::Value;
use std::sync::Arc;

/// Strict identity
///
/// Numbers compare with same-value semantics, so `NaN` equals `NaN` while
/// `+0` and `-0` are distinct. Strings and booleans compare by value,
/// containers and deferred values by allocation.
pub fn reference_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if x.is_nan() && y.is_nan() {
                return true;
            }
            x == y && x.is_sign_negative() == y.is_sign_negative()
        }
        _ => strict_equal(a, b),
    }
}

/// Strict equality without coercion: `NaN` is never equal, `+0 == -0`
pub fn strict_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        _ => same_container(a, b),
    }
}

/// Loose equality with coercion between primitives
///
/// `null` and `undefined` equal each other and nothing else. Numbers and
/// strings meet as numbers, booleans coerce to `0`/`1`. Two containers are
/// equal only when they are the same allocation; a container compared with a
/// primitive is replaced by its primitive string form first.
pub fn loose_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Undefined | Value::Null, _) | (_, Value::Undefined | Value::Null) => false,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            *n == crate::value::parse_number(s)
        }
        (Value::Bool(flag), other) | (other, Value::Bool(flag)) => {
            let coerced = Value::Number(if *flag { 1.0 } else { 0.0 });
            loose_equal(&coerced, other)
        }
        (x, y) if x.kind().is_container() && y.kind().is_container() => same_container(x, y),
        (x, y) if x.kind().is_container() => loose_equal(&Value::from(x.to_primitive_string()), y),
        (x, y) if y.kind().is_container() => loose_equal(x, &Value::from(y.to_primitive_string())),
        _ => false,
    }
}

pub(crate) fn same_container(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(x), Value::Array(y)) => Arc::ptr_eq(x, y),
        (Value::Record(x), Value::Record(y)) => Arc::ptr_eq(x, y),
        (Value::Instance(x), Value::Instance(y)) => Arc::ptr_eq(x, y),
        (Value::Deferred(x), Value::Deferred(y)) => x.ptr_eq(y),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_equal_numbers() {
        assert!(reference_equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
        assert!(!reference_equal(&Value::from(0.0), &Value::from(-0.0)));
        assert!(reference_equal(&Value::from(1), &Value::from(1.0)));
    }

    #[test]
    fn test_strict_equal_numbers() {
        assert!(!strict_equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
        assert!(strict_equal(&Value::from(0.0), &Value::from(-0.0)));
    }

    #[test]
    fn test_reference_equal_containers_by_identity() {
        let a = Value::array([1, 2]);
        let b = Value::array([1, 2]);
        assert!(reference_equal(&a, &a.clone()));
        assert!(!reference_equal(&a, &b));
    }

    #[test]
    fn test_loose_equal_coercions() {
        assert!(loose_equal(&Value::Null, &Value::Undefined));
        assert!(!loose_equal(&Value::Null, &Value::from(0)));
        assert!(loose_equal(&Value::from(1), &Value::from("1")));
        assert!(loose_equal(&Value::from(true), &Value::from(1)));
        assert!(loose_equal(&Value::from(false), &Value::from("0")));
        assert!(loose_equal(&Value::array([1, 2]), &Value::from("1,2")));
        assert!(loose_equal(&Value::array([0]), &Value::from(false)));
        assert!(!loose_equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
        assert!(!loose_equal(&Value::array([1]), &Value::array([1])));
    }
}
