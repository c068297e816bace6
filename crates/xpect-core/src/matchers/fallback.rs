use super::{diff_failure, names};
use crate::equality::{deep_equal, reference_equal, shallow_equal};
use crate::errors::ExError;
use crate::matcher::{argument, Matcher, Outcome};
use crate::registry::Matchers;
use crate::value::Value;

/// Checks available for every value kind
pub fn fallback() -> Matchers {
    Matchers::new()
        .with(
            names::TO_REFERENCE_EQUAL,
            equality(reference_equal, "Value did not reference equal to expected"),
        )
        .with(
            names::TO_EQUAL,
            equality(deep_equal, "Value was not deep equal to expected"),
        )
        .with(
            names::TO_SHALLOW_EQUAL,
            equality(shallow_equal, "Value is not shallow equal to expected"),
        )
        .with(names::TO_BE_TRUTHY, truthiness(true, "truthy"))
        .with(names::TO_BE_FALSY, truthiness(false, "falsy"))
}

fn equality(equal: fn(&Value, &Value) -> bool, label: &'static str) -> Matcher {
    Matcher::predicate(move |ctx, value, args| {
        let expected = argument(args, 0)?;
        if equal(value, expected) {
            return Ok(());
        }
        Err(diff_failure(ctx, label, value, expected))
    })
    .with_arity(1)
}

fn truthiness(truthy: bool, label: &'static str) -> Matcher {
    Matcher::new(move |_ctx, value, _args| {
        if value.is_truthy() == truthy {
            return Ok(Outcome::Flag(true));
        }
        Err(ExError::assertion(format!(
            "Value {} is not {}",
            value.to_primitive_string(),
            label
        )))
    })
    .with_arity(0)
}
