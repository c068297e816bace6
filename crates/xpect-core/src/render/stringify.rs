//! Deterministic text rendering of values

use crate::value::{format_number, Value};
use std::collections::BTreeMap;

/// Render `value` with `indent` spaces per nesting level
///
/// Containers span one line per element so that line diffs point at the
/// element that changed. Record keys come out sorted, strings are
/// JSON-escaped, instances are prefixed with their class name.
pub fn stringify(value: &Value, indent: usize) -> String {
    let mut out = String::new();
    write_value(&mut out, value, indent, 0);
    out
}

fn write_value(out: &mut String, value: &Value, indent: usize, level: usize) {
    match value {
        Value::Undefined => out.push_str("undefined"),
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::String(s) => out.push_str(&quote(s)),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                pad(out, indent, level + 1);
                write_value(out, item, indent, level + 1);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            pad(out, indent, level);
            out.push(']');
        }
        Value::Record(fields) => write_fields(out, fields, indent, level),
        Value::Instance(instance) => {
            out.push_str(instance.class());
            out.push(' ');
            write_fields(out, instance.fields(), indent, level);
        }
        Value::Deferred(deferred) => {
            let state = match deferred.peek() {
                None => "<pending>",
                Some(Ok(_)) => "<resolved>",
                Some(Err(_)) => "<rejected>",
            };
            out.push_str("Deferred { ");
            out.push_str(state);
            out.push_str(" }");
        }
    }
}

fn write_fields(out: &mut String, fields: &BTreeMap<String, Value>, indent: usize, level: usize) {
    if fields.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{\n");
    for (i, (key, value)) in fields.iter().enumerate() {
        pad(out, indent, level + 1);
        out.push_str(&quote(key));
        out.push_str(": ");
        write_value(out, value, indent, level + 1);
        if i + 1 < fields.len() {
            out.push(',');
        }
        out.push('\n');
    }
    pad(out, indent, level);
    out.push('}');
}

fn pad(out: &mut String, indent: usize, level: usize) {
    out.extend(std::iter::repeat(' ').take(indent * level));
}

fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}
