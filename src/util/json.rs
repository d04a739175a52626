//! JSON rendering of dynamic values
//!
//! Used by the coercion engine when a container is cast to a string.
//! Follows the host serializer's conventions: unserializable members
//! (functions, symbols, undefined) render as null inside arrays and are
//! skipped inside objects.

use std::fmt::Write;

use crate::util::time::format_iso8601;
use crate::value::Value;

/// Render a value as JSON text
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn is_serializable(value: &Value) -> bool {
    !matches!(
        value,
        Value::Undefined | Value::Symbol(_) | Value::Function(_) | Value::Class(_)
    )
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) | Value::BoxedBool(b) => {
            out.push_str(if *b { "true" } else { "false" })
        }
        Value::Number(n) | Value::BoxedNumber(n) => {
            if n.is_finite() {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    let _ = write!(out, "{}", *n as i64);
                } else {
                    let _ = write!(out, "{}", n);
                }
            } else {
                out.push_str("null");
            }
        }
        Value::BigInt(n) => {
            let _ = write!(out, "{}", n);
        }
        Value::Str(s) | Value::BoxedString(s) => write_string(out, s),
        Value::Date(millis) => write_string(out, &format_iso8601(*millis)),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                if is_serializable(item) {
                    write_value(out, item);
                } else {
                    out.push_str("null");
                }
            }
            out.push(']');
        }
        Value::Object(fields) | Value::Instance { fields, .. } => {
            out.push('{');
            let mut first = true;
            for (key, field) in fields {
                if !is_serializable(field) {
                    continue;
                }
                if !first {
                    out.push(',');
                }
                first = false;
                write_string(out, key);
                out.push(':');
                write_value(out, field);
            }
            out.push('}');
        }
        Value::Set(items) => write_value(out, &Value::Array(items.clone())),
        Value::TypedArray(ta) => {
            out.push('[');
            for (i, n) in ta.data.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                let _ = write!(out, "{}", n);
            }
            out.push(']');
        }
        // Everything else renders as an empty object, like the host
        // serializer does for opaque platform objects.
        _ => out.push_str("{}"),
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
