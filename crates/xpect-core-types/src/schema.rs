//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Check identifiers
pub const FIELD_CHECK: &str = "check";
pub const FIELD_VALUE_KIND: &str = "value_kind";
pub const FIELD_ARG_COUNT: &str = "arg_count";

// Registry sizes
pub const FIELD_MATCHER_COUNT: &str = "matcher_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
/// A check returned a pending outcome; `end` or `end_error` follows on settle
pub const EVENT_PENDING: &str = "pending";

// Canonical operation names
pub const OP_CHECK: &str = "check";
pub const OP_EXTEND: &str = "extend";
pub const OP_AWAIT: &str = "await_settle";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_CHECK.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
        assert_ne!(EVENT_PENDING, EVENT_END);
    }

    #[test]
    fn test_op_names_are_distinct() {
        assert_ne!(OP_CHECK, OP_EXTEND);
        assert_ne!(OP_CHECK, OP_AWAIT);
    }
}
