//! Dynamic value model
//!
//! A [`Value`] is what every check is bound to. Containers are reference
//! counted: cloning a value shares its container, so identity is observable
//! and reference equality means "the same allocation". Building a new
//! container with identical contents yields a distinct reference.

mod convert;
mod deferred;

pub use deferred::{rejection, Deferred, Rejection, Settlement};

use std::collections::BTreeMap;
use std::sync::Arc;
use xpect_core_types::ValueKind;

/// A value under test
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Arc<str>),
    Array(Arc<Vec<Value>>),
    /// Plain key-value record; key order is irrelevant
    Record(Arc<BTreeMap<String, Value>>),
    /// Class-like record; never treated as a plain record
    Instance(Arc<Instance>),
    Deferred(Deferred),
}

/// Named record, the analogue of a class instance
#[derive(Debug, Clone)]
pub struct Instance {
    class: String,
    fields: BTreeMap<String, Value>,
}

impl Instance {
    /// Create an instance of `class` with the given fields
    pub fn new(class: impl Into<String>, fields: BTreeMap<String, Value>) -> Self {
        Self {
            class: class.into(),
            fields,
        }
    }

    /// Class name
    pub fn class(&self) -> &str {
        &self.class
    }

    /// All fields, sorted by name
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl Value {
    /// Build an array from anything convertible into values
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Array(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Build a plain record from key/value pairs
    pub fn record<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Record(Arc::new(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    /// Build an instance of `class` from key/value pairs
    pub fn instance<I, K, V>(class: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let fields = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Value::Instance(Arc::new(Instance::new(class, fields)))
    }

    /// The kind tag of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Record(_) => ValueKind::Record,
            Value::Instance(_) => ValueKind::Instance,
            Value::Deferred(_) => ValueKind::Deferred,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Record(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Value::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    pub fn as_deferred(&self) -> Option<&Deferred> {
        match self {
            Value::Deferred(deferred) => Some(deferred),
            _ => None,
        }
    }

    /// Truthiness: `undefined`, `null`, `false`, `0`, `NaN` and `""` are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => !(*n == 0.0 || n.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Record(_) | Value::Instance(_) | Value::Deferred(_) => true,
        }
    }

    /// Primitive string form, as used by loose comparison and short messages
    ///
    /// Arrays join their elements with `,` (missing elements render empty),
    /// records and instances render `[object Object]`.
    pub fn to_primitive_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::String(s) => s.to_string(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Undefined | Value::Null => String::new(),
                    other => other.to_primitive_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Record(_) | Value::Instance(_) => "[object Object]".to_string(),
            Value::Deferred(_) => "[object Deferred]".to_string(),
        }
    }

    /// Numeric coercion
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => *n,
            Value::String(s) => parse_number(s),
            other => parse_number(&other.to_primitive_string()),
        }
    }
}

/// Render a number the way a script engine prints it
///
/// Integral values print without a fractional part, `-0` prints as `0`,
/// non-finite values print as `NaN`, `Infinity` or `-Infinity`. Magnitudes
/// from `1e21` up and below `1e-6` use exponent form.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let label = if n > 0.0 { "Infinity" } else { "-Infinity" };
        label.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        exponent_form(n)
    } else if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

/// `1e+21`, `1.5e-7`: shortest mantissa, explicitly signed exponent
fn exponent_form(n: f64) -> String {
    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Parse a string under numeric coercion rules
///
/// Surrounding whitespace is ignored, the empty string is `0`, `0x` prefixes
/// are hexadecimal, anything unparsable is `NaN`.
pub fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        return u64::from_str_radix(hex, 16)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN);
    }
    // Rust also accepts "inf" and "nan"; those are not numeric strings here.
    let numeric = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !numeric {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 42 "), 42.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("0x10"), 16.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("abc").is_nan());
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::array(Vec::<i32>::new()).is_truthy());
    }

    #[test]
    fn test_primitive_string_of_containers() {
        let nested = Value::array([Value::from(1), Value::array([2, 3]), Value::Null]);
        assert_eq!(nested.to_primitive_string(), "1,2,3,");
        assert_eq!(
            Value::record([("a", 1)]).to_primitive_string(),
            "[object Object]"
        );
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(Value::from(1.5).kind(), ValueKind::Number);
        assert_eq!(Value::instance("Point", [("x", 1)]).kind(), ValueKind::Instance);
        assert_eq!(Value::default().kind(), ValueKind::Undefined);
    }
}
