//! Coercion engine
//!
//! `cast_to` converts a value of any classified type into a requested
//! target category under a deterministic rule table. Nothing here errors:
//! an unconvertible source lands on a documented default and an
//! unrecognized conversion returns the value unchanged.
//!
//! One intentional asymmetry: functions are invoked when the target is
//! boolean (they commonly stand in as lazy boolean providers) but NEVER
//! when the target is a number.

use crate::numeric;
use crate::util::json;
use crate::util::time::format_iso8601;
use crate::value::{FunctionValue, Symbol, TypeCategory, Value};

/// Options for [`cast_to`]
#[derive(Debug, Clone, Default)]
pub struct CastOptions {
    /// Wrap scalars as `{key: value}` instead of boxing them when the
    /// target is object
    pub property_key: Option<String>,
    /// Invoke functions for string coercion (default); when false the
    /// function's source text is returned instead
    pub execute_functions: Option<bool>,
}

impl CastOptions {
    fn execute_functions(&self) -> bool {
        self.execute_functions.unwrap_or(true)
    }
}

/// Convert a value into the requested target category
pub fn cast_to(value: &Value, target: TypeCategory, options: &CastOptions) -> Value {
    match target {
        TypeCategory::Number => Value::Number(cast_to_number(value, options)),
        TypeCategory::Boolean => Value::Bool(cast_to_boolean(value)),
        TypeCategory::String => Value::Str(cast_to_string(value, options)),
        TypeCategory::BigInt => Value::BigInt(cast_to_bigint(value)),
        TypeCategory::Object => cast_to_object(value, options),
        TypeCategory::Symbol => cast_to_symbol(value),
        TypeCategory::Function => cast_to_function(value),
        TypeCategory::Undefined => Value::Undefined,
    }
}

/// Numeric coercion
///
/// Containers coerce to their element or property count; functions are
/// NOT invoked and coerce to 0. A set `property_key` redirects: when the
/// value carries the named member, that member is coerced instead.
fn cast_to_number(value: &Value, options: &CastOptions) -> f64 {
    if let Some(key) = &options.property_key {
        let member = value.get_property(key);
        if !matches!(member, Value::Undefined) {
            return cast_to_number(&member, &CastOptions::default());
        }
    }
    match value {
        Value::Number(n) | Value::BoxedNumber(n) => *n,
        Value::BigInt(n) => *n as f64,
        Value::Bool(b) | Value::BoxedBool(b) => *b as i64 as f64,
        Value::Str(_) => numeric::to_float(value),
        Value::BoxedString(s) => numeric::to_float(&Value::Str(s.clone())),
        Value::Date(millis) => *millis as f64,
        Value::Array(items) => items.len() as f64,
        Value::Object(fields) | Value::Instance { fields, .. } => fields.len() as f64,
        Value::Map(entries) => entries.len() as f64,
        Value::Set(items) => items.len() as f64,
        Value::TypedArray(ta) => ta.len() as f64,
        Value::ArrayBuffer(bytes) | Value::SharedArrayBuffer(bytes) => bytes.len() as f64,
        Value::DataView { len, .. } => *len as f64,
        Value::Null => 0.0,
        Value::Undefined | Value::Symbol(_) => f64::NAN,
        // Functions, classes, promises, errors, regexps, iterables.
        _ => 0.0,
    }
}

/// Boolean coercion: truthiness, with functions invoked for their result
fn cast_to_boolean(value: &Value) -> bool {
    match value {
        Value::Function(f) => f.call(&[]).is_truthy(),
        other => other.is_truthy(),
    }
}

/// String coercion
fn cast_to_string(value: &Value, options: &CastOptions) -> String {
    match value {
        Value::Str(s) | Value::BoxedString(s) => s.clone(),
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(_)
        | Value::BoxedBool(_)
        | Value::Number(_)
        | Value::BoxedNumber(_)
        | Value::BigInt(_)
        | Value::Symbol(_)
        | Value::RegExp { .. }
        | Value::Error(_)
        | Value::Class(_) => value.to_string(),
        Value::Date(millis) => format_iso8601(*millis),
        Value::Function(f) => {
            if options.execute_functions() {
                cast_to_string(&f.call(&[]), options)
            } else {
                f.source
                    .clone()
                    .unwrap_or_else(|| "function () { [native code] }".to_string())
            }
        }
        other => json::stringify(other),
    }
}

/// BigInt coercion: numbers truncate, numeric strings parse, everything
/// else lands on zero
fn cast_to_bigint(value: &Value) -> i128 {
    match value {
        Value::BigInt(n) => *n,
        Value::Number(n) | Value::BoxedNumber(n) if n.is_finite() => *n as i128,
        Value::Bool(b) | Value::BoxedBool(b) => *b as i128,
        Value::Str(_) => numeric::to_integer(value) as i128,
        Value::Date(millis) => *millis as i128,
        _ => 0,
    }
}

/// Object coercion
///
/// Scalars box into their wrapper equivalent, or wrap as `{key: value}`
/// when a property key is supplied; object-kind values pass through.
fn cast_to_object(value: &Value, options: &CastOptions) -> Value {
    if let Some(key) = &options.property_key {
        return match value {
            v if v.category() == TypeCategory::Object && !matches!(v, Value::Null) => v.clone(),
            v => Value::object([(key.clone(), v.clone())]),
        };
    }
    match value {
        Value::Number(n) => Value::BoxedNumber(*n),
        Value::Str(s) => Value::BoxedString(s.clone()),
        Value::Bool(b) => Value::BoxedBool(*b),
        // No wrapper class exists for these; wrap under a value key.
        Value::Symbol(_) | Value::BigInt(_) | Value::Undefined => {
            Value::object([("value", value.clone())])
        }
        other => other.clone(),
    }
}

/// Symbol coercion: only strings (interned through the global registry)
/// and existing symbols succeed; everything else yields null
fn cast_to_symbol(value: &Value) -> Value {
    match value {
        Value::Symbol(_) => value.clone(),
        Value::Str(s) => Value::Symbol(Symbol::for_key(s)),
        _ => Value::Null,
    }
}

/// Function coercion: non-functions wrap in a closure returning the
/// value unchanged; functions pass through
fn cast_to_function(value: &Value) -> Value {
    match value {
        Value::Function(_) | Value::Class(_) => value.clone(),
        other => {
            let captured = other.clone();
            Value::Function(FunctionValue::new(move |_| captured.clone()))
        }
    }
}
