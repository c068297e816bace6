//! Equality Engine Tests
//!
//! ## Scenarios Covered
//!
//! 1. Reference equality on primitives and containers
//! 2. Depth 0 is loose equality only
//! 3. Arrays recurse under shallow equality, records do not
//! 4. Deep equality across nesting, instances and deferred values

use xpect_core::equality::{deep_equal, equal_to_depth, loose_equal, reference_equal, shallow_equal};
use xpect_core::{Deferred, Value};

#[test]
fn test_reference_equal_primitives() {
    for value in [
        Value::Undefined,
        Value::Null,
        Value::from(true),
        Value::from(0),
        Value::from(f64::NAN),
        Value::from("text"),
    ] {
        assert!(reference_equal(&value, &value), "{:?}", value);
    }
    assert!(!reference_equal(&Value::from(1), &Value::from("1")));
}

#[test]
fn test_distinct_containers_are_deep_but_not_reference_equal() {
    let a = Value::record([("a", Value::array([1, 2]))]);
    let b = Value::record([("a", Value::array([1, 2]))]);
    assert!(!reference_equal(&a, &b));
    assert!(deep_equal(&a, &b));
    assert!(reference_equal(&a, &a.clone()));
}

#[test]
fn test_depth_zero_is_loose_or_identical() {
    assert!(equal_to_depth(&Value::from(1), &Value::from(true), 0));
    assert!(equal_to_depth(&Value::Null, &Value::Undefined, 0));
    let shared = Value::array([1]);
    assert!(equal_to_depth(&shared, &shared.clone(), 0));
    assert!(!equal_to_depth(&Value::array([1]), &Value::array([1]), 0));
}

#[test]
fn test_shallow_equal_arrays_recurse_one_level() {
    let inner = Value::array([2, 3]);
    let a = Value::array([Value::from(1), inner.clone()]);
    let b = Value::array([Value::from(1), inner]);
    assert!(shallow_equal(&a, &b));

    let distinct = Value::array([Value::from(1), Value::array([2, 3])]);
    assert!(!shallow_equal(&a, &distinct));
    assert!(deep_equal(&a, &distinct));

    let c = Value::array([Value::from(1), Value::array([2, 4])]);
    assert!(!shallow_equal(&a, &c));

    assert!(shallow_equal(&Value::array([1, 2]), &Value::array(["1", "2"])));
    assert!(!shallow_equal(&Value::array([1, 2]), &Value::array([1])));
}

#[test]
fn test_shallow_equal_records_do_not_recurse() {
    let a = Value::record([("a", Value::record([("x", 1)]))]);
    let b = Value::record([("a", Value::record([("x", 1)]))]);
    assert!(!shallow_equal(&a, &b));

    assert!(shallow_equal(
        &Value::record([("a", 1)]),
        &Value::record([("a", 1)])
    ));
}

#[test]
fn test_loose_equal_coercion() {
    assert!(loose_equal(&Value::from("0x10"), &Value::from(16)));
    assert!(loose_equal(&Value::from(false), &Value::from("")));
    assert!(loose_equal(&Value::array([1, 2]), &Value::from("1,2")));
    assert!(!loose_equal(&Value::Null, &Value::from(0)));
    assert!(!loose_equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
}

#[test]
fn test_deep_equal_numbers_and_kinds() {
    assert!(deep_equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
    assert!(deep_equal(&Value::from(0.0), &Value::from(-0.0)));
    assert!(!deep_equal(&Value::from(1), &Value::from("1")));
    assert!(!deep_equal(&Value::Null, &Value::Undefined));
}

#[test]
fn test_deep_equal_instances_need_same_class() {
    let point = Value::instance("Point", [("x", 1)]);
    let vector = Value::instance("Vector", [("x", 1)]);
    let record = Value::record([("x", 1)]);
    assert!(deep_equal(&point, &Value::instance("Point", [("x", 1)])));
    assert!(!deep_equal(&point, &vector));
    assert!(!deep_equal(&point, &record));
}

#[test]
fn test_deep_equal_deferred_by_identity() {
    let a = Deferred::resolved(1);
    let b = Deferred::resolved(1);
    assert!(deep_equal(&Value::from(a.clone()), &Value::from(a.clone())));
    assert!(!deep_equal(&Value::from(a), &Value::from(b)));
}
