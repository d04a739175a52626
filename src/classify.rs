//! Type classification predicates
//!
//! One predicate per semantic category, each threaded with an explicit
//! strictness flag. Strict mode accepts only native primitive/instance
//! identity; lax mode broadens to boxed wrappers, string representations
//! and array-likes. The flag is a per-call parameter, never ambient
//! state, so each mode is independently testable.
//!
//! Predicates are total: they return false for anything outside their
//! category and never error. The single error path in the crate lives in
//! [`crate::env`], where resolving an undeclared binding fails.

use regex::Regex;

use crate::introspect::{self, builtins, ClassHandle};
use crate::numeric;
use crate::util::time::parse_date_string;
use crate::value::{TypeCategory, Value};

/// Options for [`is_object`]
///
/// Defaults accept null (the typeof-null quirk), accept arrays, and
/// reject boxed primitive wrappers.
#[derive(Debug, Clone, Copy)]
pub struct ObjectOptions {
    pub reject_null: bool,
    pub reject_arrays: bool,
    pub reject_primitive_wrappers: bool,
}

impl Default for ObjectOptions {
    fn default() -> Self {
        ObjectOptions {
            reject_null: false,
            reject_arrays: false,
            reject_primitive_wrappers: true,
        }
    }
}

/// True iff the value is the no-value sentinel
#[inline]
pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

/// True iff the value is null
///
/// Lax mode also treats the empty string as null-like (no meaningful
/// content).
pub fn is_null(value: &Value, strict: bool) -> bool {
    match value {
        Value::Null => true,
        Value::Str(s) if !strict => s.is_empty(),
        _ => false,
    }
}

/// Logical complement of [`is_null`], same strict/lax asymmetry
#[inline]
pub fn is_not_null(value: &Value, strict: bool) -> bool {
    !is_null(value, strict)
}

/// True iff the value is neither null nor undefined
///
/// Carries the lax empty-string-as-null asymmetry of [`is_null`].
pub fn is_non_null_value(value: &Value, strict: bool) -> bool {
    !is_undefined(value) && !is_null(value, strict)
}

/// True iff the value is of the object category
///
/// Null counts by default - the platform's own `typeof null` quirk,
/// preserved deliberately so type-category tables stay consistent. Each
/// acceptance is independently toggleable through [`ObjectOptions`].
pub fn is_object(value: &Value, options: ObjectOptions) -> bool {
    match value {
        Value::Null => !options.reject_null,
        Value::Array(_) => !options.reject_arrays,
        Value::BoxedNumber(_) | Value::BoxedString(_) | Value::BoxedBool(_) => {
            !options.reject_primitive_wrappers
        }
        _ => value.category() == TypeCategory::Object,
    }
}

/// [`is_object`] with the null acceptance forced off - the common input
/// guard shape
#[inline]
pub fn is_non_null_object(value: &Value, options: ObjectOptions) -> bool {
    is_object(
        value,
        ObjectOptions {
            reject_null: true,
            ..options
        },
    )
}

/// True iff the value is an object of neither plain-object nor array
/// shape (an instance of a user or library-defined class)
pub fn is_custom_object(value: &Value) -> bool {
    if !matches!(value.category(), TypeCategory::Object) {
        return false;
    }
    !matches!(value, Value::Null | Value::Object(_) | Value::Array(_))
}

/// True iff the value is callable
///
/// Lax mode also accepts any object exposing callable `call` and `apply`
/// members - a capability probe for duck-typed callables.
pub fn is_function(value: &Value, strict: bool) -> bool {
    match value {
        Value::Function(_) | Value::Class(_) => true,
        _ if !strict => {
            is_function(&value.get_property("call"), true)
                && is_function(&value.get_property("apply"), true)
        }
        _ => false,
    }
}

/// Detected from the function's flag, never by invoking it
pub fn is_async_function(value: &Value) -> bool {
    matches!(value, Value::Function(f) if f.is_async)
}

/// Detected from the function's flag, never by invoking it
pub fn is_generator_function(value: &Value) -> bool {
    matches!(value, Value::Function(f) if f.is_generator)
}

/// Native promise identity
#[inline]
pub fn is_promise(value: &Value) -> bool {
    matches!(value, Value::Promise(_))
}

/// True for anything exposing a callable `then` member
///
/// Inspects, never awaits: classification must not consume or resolve a
/// pending value. A settled plain value is just a value, not a thenable.
pub fn is_thenable(value: &Value) -> bool {
    match value {
        Value::Promise(_) => true,
        Value::Object(_) | Value::Instance { .. } => {
            is_function(&value.get_property("then"), true)
        }
        _ => false,
    }
}

/// True iff the value is a string
///
/// Lax mode also accepts the boxed String wrapper.
pub fn is_string(value: &Value, strict: bool) -> bool {
    match value {
        Value::Str(_) => true,
        Value::BoxedString(_) => !strict,
        _ => false,
    }
}

/// True iff the value is a number
///
/// Lax mode also accepts the boxed Number wrapper and bigints - bigint is
/// numeric family, though it stays its own category elsewhere.
pub fn is_number(value: &Value, strict: bool) -> bool {
    match value {
        Value::Number(_) => true,
        Value::BigInt(_) | Value::BoxedNumber(_) => !strict,
        _ => false,
    }
}

/// True iff the value is a bigint
#[inline]
pub fn is_bigint(value: &Value) -> bool {
    matches!(value, Value::BigInt(_))
}

/// True iff the value is a boolean
///
/// Lax mode also accepts the boxed Boolean wrapper.
pub fn is_boolean(value: &Value, strict: bool) -> bool {
    match value {
        Value::Bool(_) => true,
        Value::BoxedBool(_) => !strict,
        _ => false,
    }
}

/// True iff the value is a symbol
#[inline]
pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

/// Native array identity only
#[inline]
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// True only for actual fixed-width numeric arrays, never for
/// array-likes
#[inline]
pub fn is_typed_array(value: &Value) -> bool {
    matches!(value, Value::TypedArray(_))
}

/// True for anything with a numeric length and indexed properties
///
/// With `require_iterable` the value must additionally support the
/// iteration protocol, which excludes plain objects that merely carry a
/// numeric `length` member.
pub fn is_like_array(value: &Value, require_iterable: bool) -> bool {
    let like = match value {
        Value::Array(_) | Value::TypedArray(_) | Value::Str(_) | Value::BoxedString(_) => true,
        Value::Object(fields) => matches!(fields.get("length"), Some(Value::Number(n)) if n.fract() == 0.0 && *n >= 0.0),
        _ => false,
    };
    like && (!require_iterable || is_iterable(value))
}

/// True iff the value supports synchronous iteration
pub fn is_iterable(value: &Value) -> bool {
    match value {
        Value::Str(_)
        | Value::BoxedString(_)
        | Value::Array(_)
        | Value::TypedArray(_)
        | Value::Map(_)
        | Value::Set(_) => true,
        // Plain objects only iterate once adapted.
        Value::Iterable(it) => !it.asynchronous,
        _ => false,
    }
}

/// True iff the value supports asynchronous iteration
pub fn is_async_iterable(value: &Value) -> bool {
    matches!(value, Value::Iterable(it) if it.asynchronous)
}

/// True iff the value can be expanded into a call or sequence literal
///
/// Strict: arrays and strings only. Lax broadens to other sequence
/// iterables but still excludes plain objects - object spread is a
/// different protocol and never conflated with sequence spreading.
pub fn is_spreadable(value: &Value, strict: bool) -> bool {
    match value {
        Value::Array(_) | Value::Str(_) => true,
        _ if !strict => is_iterable(value),
        _ => false,
    }
}

/// True iff the value is a map
///
/// Lax mode accepts any plain object: its own keys are property names,
/// and a property name is always a string, so every plain object is
/// map-like.
pub fn is_map(value: &Value, strict: bool) -> bool {
    match value {
        Value::Map(_) => true,
        Value::Object(_) => !strict,
        _ => false,
    }
}

fn all_unique(values: &[Value]) -> bool {
    for (i, a) in values.iter().enumerate() {
        if values[i + 1..].contains(a) {
            return false;
        }
    }
    true
}

/// True iff the value is a set
///
/// Lax mode accepts array-likes and strings whose elements or characters
/// are pairwise unique.
pub fn is_set(value: &Value, strict: bool) -> bool {
    match value {
        Value::Set(_) => true,
        _ if strict => false,
        Value::Array(items) => all_unique(items),
        Value::TypedArray(ta) => {
            let mut seen = ta.data.clone();
            seen.sort_unstable();
            seen.windows(2).all(|w| w[0] != w[1])
        }
        Value::Str(s) | Value::BoxedString(s) => {
            let chars: Vec<char> = s.chars().collect();
            chars
                .iter()
                .enumerate()
                .all(|(i, c)| !chars[i + 1..].contains(c))
        }
        _ => false,
    }
}

/// True iff the value is a date
///
/// Lax mode also accepts epoch-millisecond numbers and strings parseable
/// as a date.
pub fn is_date(value: &Value, strict: bool) -> bool {
    match value {
        Value::Date(_) => true,
        _ if strict => false,
        Value::Number(n) => n.is_finite() && n.fract() == 0.0,
        Value::Str(s) => parse_date_string(s).is_some(),
        _ => false,
    }
}

/// True iff the value is a regular expression
///
/// Lax mode also accepts `/pattern/flags` literal strings, validated by
/// actually compiling the pattern; a compile failure classifies false.
pub fn is_regexp(value: &Value, strict: bool) -> bool {
    match value {
        Value::RegExp { .. } => true,
        Value::Str(s) if !strict => {
            let Some(body) = s.strip_prefix('/') else {
                return false;
            };
            let Some(slash) = body.rfind('/') else {
                return false;
            };
            if slash == 0 && body.len() == 1 {
                return false;
            }
            let (pattern, flags) = body.split_at(slash);
            let flags = &flags[1..];
            if pattern.is_empty() || !flags.chars().all(|c| "dgimsuvy".contains(c)) {
                return false;
            }
            Regex::new(pattern).is_ok()
        }
        _ => false,
    }
}

/// True iff the value is a class constructor
///
/// Strict: only user-defined classes. Lax: built-in constructors too.
pub fn is_class(value: &Value, strict: bool) -> bool {
    match value {
        Value::Class(class) => !strict || class.user_defined,
        _ => false,
    }
}

/// True iff the value is an error
pub fn is_error(value: &Value) -> bool {
    matches!(value, Value::Error(_)) || introspect::is_assignable_to(value, &builtins().error)
}

/// First element classifying as an error, if any
pub fn first_error(values: &[Value]) -> Option<&Value> {
    values.iter().find(|v| is_error(v))
}

/// True iff the value is an event instance
pub fn is_event(value: &Value) -> bool {
    introspect::is_assignable_to(value, &builtins().event)
}

/// True only for non-shared buffers; see [`is_shared_array_buffer`]
#[inline]
pub fn is_array_buffer(value: &Value) -> bool {
    matches!(value, Value::ArrayBuffer(_))
}

/// SharedArrayBuffer is explicitly NOT a subtype of ArrayBuffer
#[inline]
pub fn is_shared_array_buffer(value: &Value) -> bool {
    matches!(value, Value::SharedArrayBuffer(_))
}

#[inline]
pub fn is_data_view(value: &Value) -> bool {
    matches!(value, Value::DataView { .. })
}

/// Re-exported from the introspection module for a uniform call surface
pub fn is_instance_of_user_defined_class(value: &Value, classes: &[ClassHandle]) -> bool {
    introspect::is_instance_of_user_defined_class(value, classes)
}

/// Re-exported from the introspection module for a uniform call surface
pub fn is_assignable_to(value: &Value, base: &ClassHandle) -> bool {
    introspect::is_assignable_to(value, base)
}

/// Re-exported from the introspection module for a uniform call surface
pub fn is_listed_class(class: &ClassHandle, listed: &[ClassHandle]) -> bool {
    introspect::is_listed_class(class, listed)
}

/// Re-exported from the introspection module for a uniform call surface
pub fn is_instance_of_listed_class(value: &Value, listed: &[ClassHandle]) -> bool {
    introspect::is_instance_of_listed_class(value, listed)
}

fn broad_category(value: &Value) -> TypeCategory {
    // Number and bigint merge into one numeric bucket for same-type
    // comparison.
    match value.category() {
        TypeCategory::BigInt => TypeCategory::Number,
        other => other,
    }
}

/// True iff every value classifies into the identical category
///
/// Numbers and bigints count as the same broad numeric family here.
pub fn are_same_type(values: &[Value]) -> bool {
    let mut iter = values.iter();
    let Some(first) = iter.next() else {
        return true;
    };
    let category = broad_category(first);
    iter.all(|v| broad_category(v) == category)
}

/// True iff all values could be coerced to a common type
///
/// Numeric strings are compatible with numbers; a non-numeric string
/// mixed with anything else fails.
pub fn are_compatible_types(values: &[Value]) -> bool {
    if are_same_type(values) {
        return true;
    }
    values.iter().all(numeric::is_numeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::ClassDef;
    use crate::iterable::to_iterable;
    use crate::value::{ErrorKind, ErrorValue, PromiseValue, Symbol, TypedArray, TypedArrayKind};

    #[test]
    fn test_null_lax_accepts_empty_string() {
        assert!(is_null(&Value::Null, true));
        assert!(!is_null(&Value::str(""), true));
        assert!(is_null(&Value::str(""), false));
        assert!(!is_null(&Value::str("x"), false));
        assert!(!is_null(&Value::Undefined, false));

        assert!(is_not_null(&Value::str(""), true));
        assert!(!is_not_null(&Value::str(""), false));
        assert!(is_non_null_value(&Value::Number(0.0), true));
        assert!(!is_non_null_value(&Value::Undefined, true));
    }

    #[test]
    fn test_object_accepts_null_by_default() {
        assert!(is_object(&Value::Null, ObjectOptions::default()));
        assert!(!is_object(
            &Value::Null,
            ObjectOptions {
                reject_null: true,
                ..Default::default()
            }
        ));
        assert!(!is_non_null_object(&Value::Null, ObjectOptions::default()));
        assert!(is_non_null_object(&Value::Date(0), ObjectOptions::default()));
    }

    #[test]
    fn test_object_option_toggles() {
        let arr = Value::Array(vec![]);
        assert!(is_object(&arr, ObjectOptions::default()));
        assert!(!is_object(
            &arr,
            ObjectOptions {
                reject_arrays: true,
                ..Default::default()
            }
        ));

        let boxed = Value::BoxedNumber(1.0);
        assert!(!is_object(&boxed, ObjectOptions::default()));
        assert!(is_object(
            &boxed,
            ObjectOptions {
                reject_primitive_wrappers: false,
                ..Default::default()
            }
        ));

        assert!(!is_object(&Value::Number(1.0), ObjectOptions::default()));
        assert!(!is_object(
            &Value::function(|_| Value::Undefined),
            ObjectOptions::default()
        ));
        assert!(is_object(&Value::Date(0), ObjectOptions::default()));
    }

    #[test]
    fn test_custom_object() {
        let user = ClassDef::define("Session", None);
        assert!(is_custom_object(&user.instantiate([("id", Value::Null)])));
        assert!(is_custom_object(&Value::Date(0)));
        assert!(!is_custom_object(&Value::Object(Default::default())));
        assert!(!is_custom_object(&Value::Array(vec![])));
        assert!(!is_custom_object(&Value::Null));
        assert!(!is_custom_object(&Value::Number(1.0)));
    }

    #[test]
    fn test_function_duck_typing() {
        let real = Value::function(|_| Value::Undefined);
        assert!(is_function(&real, true));

        let duck = Value::object([
            ("call", Value::function(|_| Value::Undefined)),
            ("apply", Value::function(|_| Value::Undefined)),
        ]);
        assert!(!is_function(&duck, true));
        assert!(is_function(&duck, false));

        // call without apply is not enough.
        let half = Value::object([("call", Value::function(|_| Value::Undefined))]);
        assert!(!is_function(&half, false));
    }

    #[test]
    fn test_async_and_generator_flags() {
        use crate::value::FunctionValue;
        let plain = Value::Function(FunctionValue::new(|_| Value::Undefined));
        let asynch = Value::Function(FunctionValue::new(|_| Value::Undefined).asynchronous());
        let generator = Value::Function(FunctionValue::new(|_| Value::Undefined).generator());

        assert!(!is_async_function(&plain));
        assert!(is_async_function(&asynch));
        assert!(is_generator_function(&generator));
        assert!(!is_generator_function(&asynch));
    }

    #[test]
    fn test_thenable_vs_promise() {
        let promise = Value::Promise(PromiseValue::pending());
        assert!(is_promise(&promise));
        assert!(is_thenable(&promise));

        let thenable = Value::object([("then", Value::function(|_| Value::Undefined))]);
        assert!(!is_promise(&thenable));
        assert!(is_thenable(&thenable));

        // A resolved value is a plain value, not a thenable.
        let settled = Value::Number(42.0);
        assert!(!is_thenable(&settled));
    }

    #[test]
    fn test_primitive_predicates_and_wrappers() {
        assert!(is_string(&Value::str("x"), true));
        assert!(!is_string(&Value::BoxedString("x".into()), true));
        assert!(is_string(&Value::BoxedString("x".into()), false));

        assert!(is_number(&Value::Number(1.0), true));
        assert!(!is_number(&Value::BoxedNumber(1.0), true));
        assert!(is_number(&Value::BoxedNumber(1.0), false));
        assert!(!is_number(&Value::BigInt(1), true));
        assert!(is_number(&Value::BigInt(1), false));

        assert!(is_boolean(&Value::Bool(true), true));
        assert!(is_boolean(&Value::BoxedBool(true), false));
        assert!(is_bigint(&Value::BigInt(0)));
        assert!(is_symbol(&Value::Symbol(Symbol::new(None))));
    }

    #[test]
    fn test_strict_mutual_exclusivity() {
        let samples = [
            Value::str("s"),
            Value::Number(1.0),
            Value::BigInt(1),
            Value::Bool(true),
            Value::Object(Default::default()),
            Value::function(|_| Value::Undefined),
            Value::Symbol(Symbol::new(None)),
            Value::Undefined,
        ];
        for value in &samples {
            let hits = [
                is_string(value, true),
                is_number(value, true),
                is_bigint(value),
                is_boolean(value, true),
                is_object(
                    value,
                    ObjectOptions {
                        reject_null: true,
                        ..Default::default()
                    },
                ),
                is_function(value, true),
                is_symbol(value),
                is_undefined(value),
            ]
            .iter()
            .filter(|hit| **hit)
            .count();
            assert_eq!(hits, 1, "{:?}", value);
        }
    }

    #[test]
    fn test_predicates_are_total() {
        // One representative per value shape, plus the numeric edge
        // values; every predicate must return in both modes.
        let samples = vec![
            Value::Undefined,
            Value::Null,
            Value::Bool(false),
            Value::Number(1.5),
            Value::Number(f64::NAN),
            Value::Number(f64::INFINITY),
            Value::Number(f64::NEG_INFINITY),
            Value::BigInt(-3),
            Value::str("0xff"),
            Value::str(""),
            Value::Symbol(Symbol::new(None)),
            Value::BoxedBool(true),
            Value::BoxedNumber(0.0),
            Value::BoxedString("ab".into()),
            Value::Array(vec![Value::Null]),
            Value::object([("k", Value::Number(1.0))]),
            Value::Map(vec![(Value::str("k"), Value::Null)]),
            Value::Set(vec![Value::Number(1.0)]),
            Value::TypedArray(TypedArray::new(TypedArrayKind::Int16, vec![-5])),
            Value::ArrayBuffer(vec![0]),
            Value::SharedArrayBuffer(vec![0]),
            Value::DataView { len: 1, offset: 0 },
            Value::Date(0),
            Value::RegExp {
                pattern: "a+".into(),
                flags: "g".into(),
            },
            Value::Error(ErrorValue::new(ErrorKind::Error, "e")),
            Value::Promise(PromiseValue::pending()),
            Value::function(|_| Value::Undefined),
            Value::Class(ClassDef::define("Widget", None)),
            ClassDef::define("Widget", None).instantiate([("f", Value::Null)]),
            Value::Iterable(Box::new(to_iterable(&Value::Null, false))),
        ];

        for value in &samples {
            for strict in [true, false] {
                let _ = is_null(value, strict);
                let _ = is_not_null(value, strict);
                let _ = is_non_null_value(value, strict);
                let _ = is_function(value, strict);
                let _ = is_string(value, strict);
                let _ = is_number(value, strict);
                let _ = is_boolean(value, strict);
                let _ = is_spreadable(value, strict);
                let _ = is_map(value, strict);
                let _ = is_set(value, strict);
                let _ = is_date(value, strict);
                let _ = is_regexp(value, strict);
                let _ = is_class(value, strict);
                let _ = numeric::is_integer(value, strict);
                let _ = numeric::is_float(value, strict);
                let _ = numeric::is_zero(value, strict);
            }
            let _ = is_undefined(value);
            let _ = is_object(value, ObjectOptions::default());
            let _ = is_non_null_object(value, ObjectOptions::default());
            let _ = is_custom_object(value);
            let _ = is_async_function(value);
            let _ = is_generator_function(value);
            let _ = is_promise(value);
            let _ = is_thenable(value);
            let _ = is_bigint(value);
            let _ = is_symbol(value);
            let _ = is_array(value);
            let _ = is_typed_array(value);
            let _ = is_like_array(value, false);
            let _ = is_like_array(value, true);
            let _ = is_iterable(value);
            let _ = is_async_iterable(value);
            let _ = is_error(value);
            let _ = is_event(value);
            let _ = is_array_buffer(value);
            let _ = is_shared_array_buffer(value);
            let _ = is_data_view(value);
            let _ = numeric::is_numeric(value);
            let _ = numeric::is_nan_or_infinite(value);
            let _ = value.category();
        }
    }

    #[test]
    fn test_array_family() {
        assert!(is_array(&Value::Array(vec![])));
        assert!(!is_array(&Value::str("abc")));

        let ta = Value::TypedArray(TypedArray::new(TypedArrayKind::Uint8, vec![1]));
        assert!(is_typed_array(&ta));

        // An array-like with numeric keys and length is not a typed array.
        let fake = Value::object([
            ("0", Value::Number(1.0)),
            ("length", Value::Number(1.0)),
        ]);
        assert!(!is_typed_array(&fake));
        assert!(is_like_array(&fake, false));
        assert!(!is_like_array(&fake, true));
        assert!(is_like_array(&Value::str("ab"), true));
        assert!(is_like_array(&ta, true));
        assert!(!is_like_array(&Value::Number(3.0), false));
    }

    #[test]
    fn test_iterability() {
        assert!(is_iterable(&Value::str("ab")));
        assert!(is_iterable(&Value::Array(vec![])));
        assert!(is_iterable(&Value::Set(vec![])));
        assert!(!is_iterable(&Value::Object(Default::default())));

        let obj = Value::object([("a", Value::Number(1.0))]);
        let adapted = Value::Iterable(Box::new(to_iterable(&obj, false)));
        assert!(is_iterable(&adapted));
        assert!(!is_async_iterable(&adapted));

        let async_adapted = Value::Iterable(Box::new(to_iterable(&obj, true)));
        assert!(is_async_iterable(&async_adapted));
        assert!(!is_iterable(&async_adapted));
    }

    #[test]
    fn test_spreadable_excludes_plain_objects() {
        assert!(is_spreadable(&Value::Array(vec![]), true));
        assert!(is_spreadable(&Value::str("ab"), true));
        assert!(!is_spreadable(&Value::Set(vec![]), true));
        assert!(is_spreadable(&Value::Set(vec![]), false));
        assert!(!is_spreadable(&Value::Object(Default::default()), true));
        assert!(!is_spreadable(&Value::Object(Default::default()), false));
    }

    #[test]
    fn test_map_and_set_lax_shapes() {
        assert!(is_map(&Value::Map(vec![]), true));
        assert!(!is_map(&Value::Object(Default::default()), true));
        assert!(is_map(&Value::Object(Default::default()), false));

        assert!(is_set(&Value::Set(vec![]), true));
        let unique = Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]);
        let dup = Value::Array(vec![Value::Number(1.0), Value::Number(1.0)]);
        assert!(!is_set(&unique, true));
        assert!(is_set(&unique, false));
        assert!(!is_set(&dup, false));
        assert!(is_set(&Value::str("abc"), false));
        assert!(!is_set(&Value::str("abca"), false));
    }

    #[test]
    fn test_date_lax_forms() {
        assert!(is_date(&Value::Date(0), true));
        assert!(!is_date(&Value::str("09/12/2024"), true));
        assert!(is_date(&Value::str("09/12/2024"), false));
        assert!(is_date(&Value::str("2024-09-12"), false));
        assert!(!is_date(&Value::str("13/40/2024"), false));
        assert!(is_date(&Value::Number(1_700_000_000_000.0), false));
        assert!(!is_date(&Value::Number(1.5), false));
    }

    #[test]
    fn test_regexp_lax_compiles_the_pattern() {
        let native = Value::RegExp {
            pattern: "a+".into(),
            flags: "i".into(),
        };
        assert!(is_regexp(&native, true));

        assert!(!is_regexp(&Value::str("/a+/i"), true));
        assert!(is_regexp(&Value::str("/a+/i"), false));
        assert!(is_regexp(&Value::str("/^\\d{4}$/"), false));
        // Invalid pattern body: compile fails, classifies false.
        assert!(!is_regexp(&Value::str("/a{2,1}/"), false));
        assert!(!is_regexp(&Value::str("/a+/xyz"), false));
        assert!(!is_regexp(&Value::str("a+"), false));
    }

    #[test]
    fn test_class_strictness() {
        let user = Value::Class(ClassDef::define("Widget", None));
        let built_in = Value::Class(builtins().array.clone());
        assert!(is_class(&user, true));
        assert!(!is_class(&built_in, true));
        assert!(is_class(&built_in, false));
        assert!(!is_class(&Value::function(|_| Value::Undefined), true));
    }

    #[test]
    fn test_errors_and_first_error() {
        let err = Value::Error(ErrorValue::new(ErrorKind::RangeError, "out of range"));
        assert!(is_error(&err));
        assert!(!is_error(&Value::str("Error")));

        let list = [Value::Number(1.0), Value::str("ok"), err.clone(), Value::Null];
        assert_eq!(first_error(&list), Some(&err));
        assert_eq!(first_error(&[Value::Number(1.0)]), None);
    }

    #[test]
    fn test_event_instances() {
        let event = builtins().event.instantiate([("kind", Value::str("click"))]);
        assert!(is_event(&event));
        assert!(!is_event(&Value::Object(Default::default())));
    }

    #[test]
    fn test_buffers_are_distinct() {
        let ab = Value::ArrayBuffer(vec![0; 4]);
        let sab = Value::SharedArrayBuffer(vec![0; 4]);
        assert!(is_array_buffer(&ab));
        assert!(!is_array_buffer(&sab));
        assert!(is_shared_array_buffer(&sab));
        assert!(!is_shared_array_buffer(&ab));
        assert!(is_data_view(&Value::DataView { len: 4, offset: 0 }));
    }

    #[test]
    fn test_are_same_type_merges_numeric_family() {
        assert!(are_same_type(&[Value::Number(1.0), Value::Number(2.0)]));
        assert!(are_same_type(&[Value::Number(1.0), Value::BigInt(2)]));
        assert!(!are_same_type(&[Value::Number(1.0), Value::str("1")]));
        assert!(are_same_type(&[]));
        assert!(are_same_type(&[Value::Null, Value::Object(Default::default())]));
    }

    #[test]
    fn test_are_compatible_types() {
        assert!(are_compatible_types(&[Value::Number(1.0), Value::str("2")]));
        assert!(are_compatible_types(&[Value::str("0xff"), Value::BigInt(3)]));
        assert!(are_compatible_types(&[Value::str("a"), Value::str("b")]));
        assert!(!are_compatible_types(&[Value::Number(1.0), Value::str("two")]));
        assert!(!are_compatible_types(&[Value::Bool(true), Value::str("2")]));
    }
}
