//! Value kind taxonomy
//!
//! Every value under test carries exactly one kind. Matchers declare the kinds
//! they accept and the binder uses the kind to decide which checks a value gets.

use serde::{Deserialize, Serialize};

/// Tag of a dynamic value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Undefined,
    Null,
    Bool,
    Number,
    String,
    Array,
    /// Plain key-value record
    Record,
    /// Class-like record with a class name; not a plain record
    Instance,
    /// Value that settles asynchronously
    Deferred,
}

impl ValueKind {
    /// All kinds, in declaration order
    pub const ALL: [ValueKind; 9] = [
        ValueKind::Undefined,
        ValueKind::Null,
        ValueKind::Bool,
        ValueKind::Number,
        ValueKind::String,
        ValueKind::Array,
        ValueKind::Record,
        ValueKind::Instance,
        ValueKind::Deferred,
    ];

    /// Stable lowercase name, used in log fields and dispatch errors
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Record => "record",
            ValueKind::Instance => "instance",
            ValueKind::Deferred => "deferred",
        }
    }

    /// Whether values of this kind are compared by identity rather than content
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            ValueKind::Array | ValueKind::Record | ValueKind::Instance | ValueKind::Deferred
        )
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = ValueKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ValueKind::ALL.len());
    }

    #[test]
    fn test_serde_uses_snake_case_names() {
        for kind in ValueKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
            let back: ValueKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_container_kinds() {
        assert!(ValueKind::Array.is_container());
        assert!(ValueKind::Deferred.is_container());
        assert!(!ValueKind::Number.is_container());
        assert!(!ValueKind::String.is_container());
    }
}
