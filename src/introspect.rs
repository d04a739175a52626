//! Class and instance introspection
//!
//! Class identity is a handle to a [`ClassDef`]; subclass and membership
//! checks walk the explicit parent chain. Name strings are never compared,
//! since renaming (minification, bundling) makes them unreliable -
//! identity is pointer identity of the class definition.
//!
//! Built-in classes are registered once on first use and never mutated.

use std::sync::{Arc, OnceLock};

use crate::value::{ErrorKind, TypedArrayKind, Value};

/// Shared handle to a class definition
pub type ClassHandle = Arc<ClassDef>;

/// A runtime class: name, optional base class, user-defined flag
///
/// Classes are declared once at module load; introspection never mutates
/// them. Equality is identity: two handles are the same class only if they
/// point at the same definition.
#[derive(Debug)]
pub struct ClassDef {
    pub name: String,
    pub parent: Option<ClassHandle>,
    pub user_defined: bool,
}

impl PartialEq for ClassDef {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for ClassDef {}

impl ClassDef {
    /// Declare a user-defined class
    pub fn define(name: impl Into<String>, parent: Option<ClassHandle>) -> ClassHandle {
        Arc::new(ClassDef {
            name: name.into(),
            parent,
            user_defined: true,
        })
    }

    fn builtin(name: &str, parent: Option<ClassHandle>) -> ClassHandle {
        Arc::new(ClassDef {
            name: name.to_string(),
            parent,
            user_defined: false,
        })
    }

    /// Construct an instance of this class with the given fields
    pub fn instantiate<I, K>(self: &ClassHandle, fields: I) -> Value
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Instance {
            class: self.clone(),
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// The built-in class table
pub struct BuiltinClasses {
    pub object: ClassHandle,
    pub array: ClassHandle,
    pub function: ClassHandle,
    pub number: ClassHandle,
    pub string: ClassHandle,
    pub boolean: ClassHandle,
    pub date: ClassHandle,
    pub regexp: ClassHandle,
    pub error: ClassHandle,
    pub eval_error: ClassHandle,
    pub range_error: ClassHandle,
    pub reference_error: ClassHandle,
    pub syntax_error: ClassHandle,
    pub type_error: ClassHandle,
    pub uri_error: ClassHandle,
    pub internal_error: ClassHandle,
    pub event: ClassHandle,
    pub promise: ClassHandle,
    pub map: ClassHandle,
    pub set: ClassHandle,
    // SharedArrayBuffer is deliberately NOT a subclass of ArrayBuffer.
    pub array_buffer: ClassHandle,
    pub shared_array_buffer: ClassHandle,
    pub data_view: ClassHandle,
    pub typed_array: ClassHandle,
    pub uint8_array: ClassHandle,
    pub int8_array: ClassHandle,
    pub uint16_array: ClassHandle,
    pub int16_array: ClassHandle,
    pub uint32_array: ClassHandle,
    pub int32_array: ClassHandle,
    pub big_uint64_array: ClassHandle,
    pub big_int64_array: ClassHandle,
}

/// Access the built-in class table (registered on first use)
pub fn builtins() -> &'static BuiltinClasses {
    static BUILTINS: OnceLock<BuiltinClasses> = OnceLock::new();
    BUILTINS.get_or_init(|| {
        let error = ClassDef::builtin("Error", None);
        let typed_array = ClassDef::builtin("TypedArray", None);
        BuiltinClasses {
            object: ClassDef::builtin("Object", None),
            array: ClassDef::builtin("Array", None),
            function: ClassDef::builtin("Function", None),
            number: ClassDef::builtin("Number", None),
            string: ClassDef::builtin("String", None),
            boolean: ClassDef::builtin("Boolean", None),
            date: ClassDef::builtin("Date", None),
            regexp: ClassDef::builtin("RegExp", None),
            eval_error: ClassDef::builtin("EvalError", Some(error.clone())),
            range_error: ClassDef::builtin("RangeError", Some(error.clone())),
            reference_error: ClassDef::builtin("ReferenceError", Some(error.clone())),
            syntax_error: ClassDef::builtin("SyntaxError", Some(error.clone())),
            type_error: ClassDef::builtin("TypeError", Some(error.clone())),
            uri_error: ClassDef::builtin("URIError", Some(error.clone())),
            internal_error: ClassDef::builtin("InternalError", Some(error.clone())),
            error,
            event: ClassDef::builtin("Event", None),
            promise: ClassDef::builtin("Promise", None),
            map: ClassDef::builtin("Map", None),
            set: ClassDef::builtin("Set", None),
            array_buffer: ClassDef::builtin("ArrayBuffer", None),
            shared_array_buffer: ClassDef::builtin("SharedArrayBuffer", None),
            data_view: ClassDef::builtin("DataView", None),
            uint8_array: ClassDef::builtin("Uint8Array", Some(typed_array.clone())),
            int8_array: ClassDef::builtin("Int8Array", Some(typed_array.clone())),
            uint16_array: ClassDef::builtin("Uint16Array", Some(typed_array.clone())),
            int16_array: ClassDef::builtin("Int16Array", Some(typed_array.clone())),
            uint32_array: ClassDef::builtin("Uint32Array", Some(typed_array.clone())),
            int32_array: ClassDef::builtin("Int32Array", Some(typed_array.clone())),
            big_uint64_array: ClassDef::builtin("BigUint64Array", Some(typed_array.clone())),
            big_int64_array: ClassDef::builtin("BigInt64Array", Some(typed_array.clone())),
            typed_array,
        }
    })
}

fn error_class(kind: ErrorKind) -> &'static ClassHandle {
    let b = builtins();
    match kind {
        ErrorKind::Error => &b.error,
        ErrorKind::EvalError => &b.eval_error,
        ErrorKind::RangeError => &b.range_error,
        ErrorKind::ReferenceError => &b.reference_error,
        ErrorKind::SyntaxError => &b.syntax_error,
        ErrorKind::TypeError => &b.type_error,
        ErrorKind::UriError => &b.uri_error,
        ErrorKind::InternalError => &b.internal_error,
    }
}

fn typed_array_class(kind: TypedArrayKind) -> &'static ClassHandle {
    let b = builtins();
    match kind {
        TypedArrayKind::Uint8 => &b.uint8_array,
        TypedArrayKind::Int8 => &b.int8_array,
        TypedArrayKind::Uint16 => &b.uint16_array,
        TypedArrayKind::Int16 => &b.int16_array,
        TypedArrayKind::Uint32 => &b.uint32_array,
        TypedArrayKind::Int32 => &b.int32_array,
        TypedArrayKind::BigUint64 => &b.big_uint64_array,
        TypedArrayKind::BigInt64 => &b.big_int64_array,
    }
}

/// Get the class of a value
///
/// Primitives have no class; boxed wrappers return their wrapper class.
pub fn get_class(value: &Value) -> Option<ClassHandle> {
    let b = builtins();
    let class = match value {
        Value::BoxedNumber(_) => b.number.clone(),
        Value::BoxedString(_) => b.string.clone(),
        Value::BoxedBool(_) => b.boolean.clone(),
        Value::Array(_) => b.array.clone(),
        Value::Object(_) | Value::Iterable(_) => b.object.clone(),
        Value::Map(_) => b.map.clone(),
        Value::Set(_) => b.set.clone(),
        Value::Date(_) => b.date.clone(),
        Value::RegExp { .. } => b.regexp.clone(),
        Value::Error(e) => error_class(e.kind).clone(),
        Value::Promise(_) => b.promise.clone(),
        Value::ArrayBuffer(_) => b.array_buffer.clone(),
        Value::SharedArrayBuffer(_) => b.shared_array_buffer.clone(),
        Value::DataView { .. } => b.data_view.clone(),
        Value::TypedArray(ta) => typed_array_class(ta.kind).clone(),
        Value::Function(_) => b.function.clone(),
        Value::Instance { class, .. } => class.clone(),
        _ => return None,
    };
    Some(class)
}

/// Get the declared class name, empty string if none resolvable
pub fn get_class_name(value: &Value) -> String {
    match value {
        Value::Class(class) => class.name.clone(),
        _ => get_class(value).map(|c| c.name.clone()).unwrap_or_default(),
    }
}

/// Walk the parent chain: true iff `class` is `base` or a transitive
/// subclass of it
pub fn is_subclass_of(class: &ClassHandle, base: &ClassHandle) -> bool {
    let mut current = Some(class.clone());
    while let Some(c) = current {
        if Arc::ptr_eq(&c, base) {
            return true;
        }
        current = c.parent.clone();
    }
    false
}

/// True iff the value is an instance whose class is `base` or a subclass
pub fn is_assignable_to(value: &Value, base: &ClassHandle) -> bool {
    match get_class(value) {
        Some(class) => is_subclass_of(&class, base),
        None => false,
    }
}

/// True iff `class` appears in the caller-supplied allowlist
/// (by identity, subclasses do not count)
pub fn is_listed_class(class: &ClassHandle, listed: &[ClassHandle]) -> bool {
    listed.iter().any(|c| Arc::ptr_eq(c, class))
}

/// True iff the value is an instance of one of the listed classes
/// or of a subclass of one
pub fn is_instance_of_listed_class(value: &Value, listed: &[ClassHandle]) -> bool {
    listed.iter().any(|base| is_assignable_to(value, base))
}

/// True iff the value is an instance of a user-defined class
///
/// When `classes` is non-empty, the instance must additionally be
/// assignable to one of them.
pub fn is_instance_of_user_defined_class(value: &Value, classes: &[ClassHandle]) -> bool {
    let Some(class) = get_class(value) else {
        return false;
    };
    if !class.user_defined {
        return false;
    }
    classes.is_empty() || classes.iter().any(|base| is_subclass_of(&class, base))
}
