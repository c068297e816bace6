use super::names;
use crate::errors::ExError;
use crate::matcher::{Matcher, Outcome};
use crate::registry::Matchers;
use xpect_core_types::ValueKind;

/// Strict checks on booleans; both return `Flag(true)` on success
pub fn boolean() -> Matchers {
    Matchers::new()
        .with(names::TO_BE_TRUE, exactly(true))
        .with(names::TO_BE_FALSE, exactly(false))
}

fn exactly(expected: bool) -> Matcher {
    Matcher::new(move |_ctx, value, _args| match value.as_bool() {
        Some(actual) if actual == expected => Ok(Outcome::Flag(true)),
        _ => Err(ExError::assertion(format!(
            "Value {} is not {}",
            value.to_primitive_string(),
            expected
        ))),
    })
    .accepting([ValueKind::Bool])
    .with_arity(0)
}
