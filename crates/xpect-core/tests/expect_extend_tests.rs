//! Extension Tests
//!
//! ## Scenarios Covered
//!
//! 1. `extend` leaves the receiver untouched
//! 2. Overrides apply to the new entry point only
//! 3. Chained extension
//! 4. Matchers running nested checks through their context
//! 5. Typed extension methods through a user trait over `Checks`
//! 6. Shadowed fallback names stay available for other kinds

#![allow(clippy::unwrap_used, clippy::expect_used)]

use xpect_core::matchers::names;
use xpect_core::{
    default_expect, expect, Checks, ExError, ExErrorKind, Expect, Matcher, Matchers, Outcome,
    Result, Value, ValueKind,
};

fn even() -> Matchers {
    Matchers::new().with(
        "to_be_even",
        Matcher::predicate(|_, value, _| match value.as_f64() {
            Some(n) if n % 2.0 == 0.0 => Ok(()),
            _ => Err(ExError::assertion(format!(
                "Value {} is not even",
                value.to_primitive_string()
            ))),
        })
        .accepting([ValueKind::Number])
        .with_arity(0),
    )
}

#[test]
fn test_extend_is_non_mutating() {
    let base = Expect::base();
    let before: Vec<String> = base.matchers().names().map(str::to_string).collect();

    let extended = base.extend(even());

    let after: Vec<String> = base.matchers().names().map(str::to_string).collect();
    assert_eq!(before, after);
    assert!(extended.matchers().contains("to_be_even"));
    assert!(!base.matchers().contains("to_be_even"));
    assert!(!default_expect().matchers().contains("to_be_even"));
}

#[test]
fn test_override_applies_to_new_entry_point_only() {
    let always = Matchers::new().with(
        names::TO_BE_GREATER_THAN,
        Matcher::predicate(|_, _, _| Ok(()))
            .accepting([ValueKind::Number])
            .with_arity(1),
    );
    let lenient = Expect::base().extend(always);

    lenient.that(1).to_be_greater_than(100).unwrap();
    assert!(expect(1).to_be_greater_than(100).is_err());
}

#[test]
fn test_chained_extension() {
    let positive = Matchers::new().with(
        "to_be_positive",
        Matcher::predicate(|ctx, value, _| ctx.that(value).check_now(names::TO_BE_GREATER_THAN, &[Value::from(0)]).map(drop))
            .accepting([ValueKind::Number])
            .with_arity(0),
    );
    let chained = default_expect().extend(even()).extend(positive);

    let checks = chained.that(4);
    checks.check("to_be_even", &[]).unwrap();
    checks.check("to_be_positive", &[]).unwrap();
    assert!(chained.that(3).check("to_be_even", &[]).is_err());
    assert!(chained.that(-2).check("to_be_positive", &[]).is_err());
}

#[test]
fn test_matcher_uses_context_for_nested_checks() {
    let doubled = Matchers::new().with(
        "doubled_to_be",
        Matcher::predicate(|ctx, value, args| {
            let n = value.as_f64().unwrap_or(f64::NAN);
            ctx.that(n * 2.0)
                .to_equal(args[0].as_f64().unwrap_or(f64::NAN))
        })
        .accepting([ValueKind::Number])
        .with_arity(1),
    );
    let ctx = Expect::base().extend(doubled);

    ctx.that(5).check("doubled_to_be", &[Value::from(10)]).unwrap();
    let err = ctx
        .that(5)
        .check("doubled_to_be", &[Value::from(11)])
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::AssertionFailed);
    assert_eq!(err.check(), Some(names::TO_EQUAL));
}

#[test]
fn test_nested_checks_see_extended_registry() {
    let pair_even = Matchers::new().with(
        "to_be_even_pair",
        Matcher::new(|ctx, value, _| {
            for item in value.as_array().unwrap_or_default() {
                ctx.that(item).check("to_be_even", &[])?;
            }
            Ok(Outcome::Flag(true))
        })
        .accepting([ValueKind::Array])
        .with_arity(0),
    );
    let ctx = Expect::base().extend(even()).extend(pair_even);

    assert!(ctx.that(vec![2, 4]).check_now("to_be_even_pair", &[]).unwrap());
    assert!(ctx.that(vec![2, 5]).check_now("to_be_even_pair", &[]).is_err());
}

trait EvenChecks {
    fn to_be_even(&self) -> Result<()>;
}

impl<'e> EvenChecks for Checks<'e, i64> {
    fn to_be_even(&self) -> Result<()> {
        self.check("to_be_even", &[]).map(drop)
    }
}

#[test]
fn test_typed_extension_trait() {
    let ctx = Expect::base().extend(even());
    ctx.that(8i64).to_be_even().unwrap();
    assert!(ctx.that(7i64).to_be_even().is_err());

    let err = Expect::base().that(8i64).to_be_even().unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::UnknownCheck);
}

#[test]
fn test_shadowed_fallback_still_available_for_other_kinds() {
    let numbers_only = Matchers::new().with(
        names::TO_EQUAL,
        Matcher::predicate(|_, _, _| Err(ExError::assertion("numbers never equal")))
            .accepting([ValueKind::Number])
            .with_arity(1),
    );
    let ctx = Expect::base().extend(numbers_only);

    assert!(ctx.that(1).to_equal(1).is_err());
    ctx.that("same").to_equal("same").unwrap();
    assert!(ctx.that("same").has(names::TO_BE_TRUTHY));
}
