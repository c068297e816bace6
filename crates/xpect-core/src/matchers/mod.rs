//! Base matcher sets
//!
//! Each submodule contributes one group of definitions. The registry seeds
//! itself with all of them; the fallback group is additionally kept aside so
//! that its five checks stay available for every value.

mod boolean;
mod deferred;
mod fallback;
mod numeric;
mod sequence;

pub use boolean::boolean;
pub use deferred::deferred;
pub use fallback::fallback;
pub use numeric::numeric;
pub use sequence::sequence;

use crate::errors::{ExError, XpectError};
use crate::expect::Expect;
use crate::value::Value;

/// Check names of the base sets
pub mod names {
    pub const TO_BE_GREATER_THAN: &str = "to_be_greater_than";
    pub const TO_BE_GREATER_THAN_OR_EQUAL: &str = "to_be_greater_than_or_equal";
    pub const TO_BE_LESS_THAN: &str = "to_be_less_than";
    pub const TO_BE_LESS_THAN_OR_EQUAL: &str = "to_be_less_than_or_equal";

    pub const TO_BE_TRUE: &str = "to_be_true";
    pub const TO_BE_FALSE: &str = "to_be_false";

    pub const TO_HAVE_UNIQUE_VALUES: &str = "to_have_unique_values";
    pub const TO_CONTAIN: &str = "to_contain";
    pub const TO_HAVE_LENGTH: &str = "to_have_length";

    pub const TO_AWAIT_TO_EQUAL: &str = "to_await_to_equal";

    pub const TO_REFERENCE_EQUAL: &str = "to_reference_equal";
    pub const TO_EQUAL: &str = "to_equal";
    pub const TO_SHALLOW_EQUAL: &str = "to_shallow_equal";
    pub const TO_BE_TRUTHY: &str = "to_be_truthy";
    pub const TO_BE_FALSY: &str = "to_be_falsy";
}

/// Assertion failure whose message ends in a diff of the two values
pub(crate) fn diff_failure(ctx: &Expect, label: &str, actual: &Value, expected: &Value) -> ExError {
    let diff = ctx.renderer().render_pair(actual, expected);
    ExError::assertion(format!("{}:\n{}", label, diff)).with_diff(diff)
}

pub(crate) fn invalid_argument(reason: impl Into<String>) -> ExError {
    XpectError::InvalidArgument {
        reason: reason.into(),
    }
    .into()
}
