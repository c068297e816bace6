use super::{invalid_argument, names};
use crate::errors::{ExError, Result};
use crate::matcher::{argument, Matcher};
use crate::registry::Matchers;
use crate::value::{format_number, Value};
use xpect_core_types::ValueKind;

/// Ordering checks for numbers
///
/// Each check fails exactly when the opposite comparison holds, so a `NaN`
/// operand never fails them.
pub fn numeric() -> Matchers {
    Matchers::new()
        .with(
            names::TO_BE_GREATER_THAN,
            comparison(|v, e| v <= e, "is not greater than"),
        )
        .with(
            names::TO_BE_GREATER_THAN_OR_EQUAL,
            comparison(|v, e| v < e, "is not greater than or equal to"),
        )
        .with(
            names::TO_BE_LESS_THAN,
            comparison(|v, e| v >= e, "is not less than"),
        )
        .with(
            names::TO_BE_LESS_THAN_OR_EQUAL,
            comparison(|v, e| v > e, "is not less than or equal to"),
        )
}

fn comparison(fails: fn(f64, f64) -> bool, label: &'static str) -> Matcher {
    Matcher::predicate(move |_ctx, value, args| {
        let actual = number(value)?;
        let expected = number(argument(args, 0)?)?;
        if fails(actual, expected) {
            return Err(ExError::assertion(format!(
                "Value {} {} {}",
                format_number(actual),
                label,
                format_number(expected)
            )));
        }
        Ok(())
    })
    .accepting([ValueKind::Number])
    .with_arity(1)
}

fn number(value: &Value) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| invalid_argument(format!("expected a number, got {}", value.kind())))
}
