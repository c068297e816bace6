use super::loose::{loose_equal, same_container};
use crate::value::Value;
use std::collections::BTreeMap;

/// Loose equality that descends `depth` container levels
///
/// Loosely equal values short-circuit to `true`. At depth 0 nothing else is
/// equal. Arrays must match in length and compare element-wise at
/// `depth - 1`. Plain records must have the same key set and compare each
/// field by loose equality, without descending further. Everything else,
/// including instances, is unequal unless loosely equal.
pub fn equal_to_depth(a: &Value, b: &Value, depth: usize) -> bool {
    if loose_equal(a, b) {
        return true;
    }
    if depth == 0 {
        return false;
    }
    match (a, b) {
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys.iter())
                    .all(|(x, y)| equal_to_depth(x, y, depth - 1))
        }
        (Value::Record(xs), Value::Record(ys)) => {
            same_keys(xs, ys)
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| loose_equal(x, y)))
        }
        _ => false,
    }
}

/// One level of array or record traversal; see [`equal_to_depth`]
pub fn shallow_equal(a: &Value, b: &Value) -> bool {
    equal_to_depth(a, b, 1)
}

/// Unbounded structural equality
///
/// No coercion across kinds. Numbers use same-value-zero (`NaN` equals `NaN`,
/// `+0` equals `-0`). Arrays are order-sensitive, records are not. Instances
/// additionally require the same class. Deferred values compare by identity.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            same_container(a, b)
                || (xs.len() == ys.len()
                    && xs.iter().zip(ys.iter()).all(|(x, y)| deep_equal(x, y)))
        }
        (Value::Record(xs), Value::Record(ys)) => same_container(a, b) || fields_deep_equal(xs, ys),
        (Value::Instance(x), Value::Instance(y)) => {
            same_container(a, b)
                || (x.class() == y.class() && fields_deep_equal(x.fields(), y.fields()))
        }
        (Value::Deferred(x), Value::Deferred(y)) => x.ptr_eq(y),
        _ => false,
    }
}

fn same_keys(xs: &BTreeMap<String, Value>, ys: &BTreeMap<String, Value>) -> bool {
    xs.len() == ys.len() && xs.keys().all(|key| ys.contains_key(key))
}

fn fields_deep_equal(xs: &BTreeMap<String, Value>, ys: &BTreeMap<String, Value>) -> bool {
    same_keys(xs, ys)
        && xs
            .iter()
            .all(|(key, x)| ys.get(key).is_some_and(|y| deep_equal(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_zero_is_loose_only() {
        assert!(equal_to_depth(&Value::from(1), &Value::from("1"), 0));
        assert!(!equal_to_depth(&Value::array([1]), &Value::array([1]), 0));
    }

    #[test]
    fn test_records_compare_fields_loosely() {
        let a = Value::record([("n", Value::from(1))]);
        let b = Value::record([("n", Value::from("1"))]);
        assert!(shallow_equal(&a, &b));
        assert!(!deep_equal(&a, &b));
    }

    #[test]
    fn test_records_need_identical_key_sets() {
        let a = Value::record([("a", 1)]);
        let b = Value::record([("a", 1), ("b", 2)]);
        assert!(!shallow_equal(&a, &b));
        assert!(!shallow_equal(&b, &a));
    }

    #[test]
    fn test_instances_are_not_plain_records() {
        let a = Value::instance("Point", [("x", 1)]);
        let b = Value::instance("Point", [("x", 1)]);
        assert!(!shallow_equal(&a, &b));
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&a, &Value::instance("Vec2", [("x", 1)])));
    }

    #[test]
    fn test_deep_equal_numbers() {
        assert!(deep_equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
        assert!(deep_equal(&Value::from(0.0), &Value::from(-0.0)));
        assert!(!deep_equal(&Value::from(1), &Value::from("1")));
    }
}
