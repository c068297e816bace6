use super::{invalid_argument, names};
use crate::equality::{deep_equal, strict_equal};
use crate::errors::{ExError, Result};
use crate::matcher::{argument, Matcher};
use crate::registry::Matchers;
use crate::value::{format_number, Value};
use xpect_core_types::ValueKind;

/// Checks over arrays: uniqueness, membership and length
pub fn sequence() -> Matchers {
    Matchers::new()
        .with(names::TO_HAVE_UNIQUE_VALUES, unique_values())
        .with(names::TO_CONTAIN, contain())
        .with(names::TO_HAVE_LENGTH, length())
}

fn unique_values() -> Matcher {
    Matcher::predicate(|_ctx, value, _args| {
        let items = items(value)?;
        for (index, item) in items.iter().enumerate() {
            if let Some(offset) = items[index + 1..]
                .iter()
                .position(|other| strict_equal(item, other))
            {
                return Err(ExError::assertion(format!(
                    "Values {} had duplicate at index {} and {}",
                    value.to_primitive_string(),
                    index,
                    index + 1 + offset
                )));
            }
        }
        Ok(())
    })
    .accepting([ValueKind::Array])
    .with_arity(0)
}

fn contain() -> Matcher {
    Matcher::predicate(|_ctx, value, args| {
        let needle = argument(args, 0)?;
        if items(value)?.iter().any(|item| deep_equal(item, needle)) {
            return Ok(());
        }
        Err(ExError::assertion(format!(
            "Values {} did not contain value to test: {}",
            value.to_primitive_string(),
            needle.to_primitive_string()
        )))
    })
    .accepting([ValueKind::Array])
    .with_arity(1)
}

fn length() -> Matcher {
    Matcher::predicate(|_ctx, value, args| {
        let expected = argument(args, 0)?;
        let expected_len = match expected.as_f64() {
            Some(n) if n >= 0.0 && n.fract() == 0.0 => n as usize,
            _ => {
                return Err(invalid_argument(format!(
                    "expected length must be a non-negative integer, got {}",
                    expected.to_primitive_string()
                )))
            }
        };
        let actual_len = items(value)?.len();
        if actual_len != expected_len {
            return Err(ExError::assertion(format!(
                "Values {} did not have expected length {} (actual length is {})",
                value.to_primitive_string(),
                format_number(expected_len as f64),
                actual_len
            )));
        }
        Ok(())
    })
    .accepting([ValueKind::Array])
    .with_arity(1)
}

fn items(value: &Value) -> Result<&[Value]> {
    value
        .as_array()
        .ok_or_else(|| invalid_argument(format!("expected an array, got {}", value.kind())))
}
