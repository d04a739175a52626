//! Dynamic value representation
//!
//! Value is a tagged union covering every runtime shape the classifier
//! distinguishes: primitives, boxed wrappers, containers, binary buffers,
//! platform objects, callables and class instances.
//!
//! Every value maps to exactly one [`TypeCategory`] under `category()`.
//! Null maps to the object category - this mirrors the host language's
//! `typeof null === "object"` behavior and downstream type-category tables
//! rely on it.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};

use crate::introspect::ClassHandle;
use crate::iterable::Iterable;

/// Semantic type category - a closed enumeration
///
/// `Undefined` is a category of its own, distinct from the seven
/// "valid types".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    String,
    Number,
    BigInt,
    Boolean,
    Object,
    Function,
    Symbol,
    Undefined,
}

impl TypeCategory {
    /// Category name as the classifier reports it
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeCategory::String => "string",
            TypeCategory::Number => "number",
            TypeCategory::BigInt => "bigint",
            TypeCategory::Boolean => "boolean",
            TypeCategory::Object => "object",
            TypeCategory::Function => "function",
            TypeCategory::Symbol => "symbol",
            TypeCategory::Undefined => "undefined",
        }
    }

    /// Parse a category name, returns None for unknown names
    pub fn from_name(name: &str) -> Option<TypeCategory> {
        match name {
            "string" => Some(TypeCategory::String),
            "number" => Some(TypeCategory::Number),
            "bigint" => Some(TypeCategory::BigInt),
            "boolean" => Some(TypeCategory::Boolean),
            "object" => Some(TypeCategory::Object),
            "function" => Some(TypeCategory::Function),
            "symbol" => Some(TypeCategory::Symbol),
            "undefined" => Some(TypeCategory::Undefined),
            _ => None,
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unique symbol value with an optional description
///
/// Symbols created with `new` are always distinct; `for_key` interns
/// through a global registry so the same key yields the same symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    id: u64,
    pub description: Option<String>,
}

static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

fn symbol_registry() -> &'static Mutex<BTreeMap<String, u64>> {
    static REGISTRY: OnceLock<Mutex<BTreeMap<String, u64>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(BTreeMap::new()))
}

impl Symbol {
    /// Create a fresh, never-before-seen symbol
    pub fn new(description: Option<&str>) -> Symbol {
        Symbol {
            id: SYMBOL_COUNTER.fetch_add(1, Ordering::Relaxed),
            description: description.map(str::to_string),
        }
    }

    /// Look up or create the interned symbol for a registry key
    pub fn for_key(key: &str) -> Symbol {
        let mut registry = symbol_registry().lock().unwrap();
        let id = *registry
            .entry(key.to_string())
            .or_insert_with(|| SYMBOL_COUNTER.fetch_add(1, Ordering::Relaxed));
        Symbol {
            id,
            description: Some(key.to_string()),
        }
    }
}

/// Element kind of a fixed-width numeric array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedArrayKind {
    Uint8,
    Int8,
    Uint16,
    Int16,
    Uint32,
    Int32,
    BigUint64,
    BigInt64,
}

impl TypedArrayKind {
    /// Storage width of one element in bits
    pub const fn element_bits(self) -> u32 {
        match self {
            TypedArrayKind::Uint8 | TypedArrayKind::Int8 => 8,
            TypedArrayKind::Uint16 | TypedArrayKind::Int16 => 16,
            TypedArrayKind::Uint32 | TypedArrayKind::Int32 => 32,
            TypedArrayKind::BigUint64 | TypedArrayKind::BigInt64 => 64,
        }
    }

    /// Whether elements are signed
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            TypedArrayKind::Int8
                | TypedArrayKind::Int16
                | TypedArrayKind::Int32
                | TypedArrayKind::BigInt64
        )
    }

    /// Whether elements are 64-bit and bigint-backed
    pub const fn is_big(self) -> bool {
        matches!(self, TypedArrayKind::BigUint64 | TypedArrayKind::BigInt64)
    }

    /// Constructor name of the corresponding array class
    pub const fn name(self) -> &'static str {
        match self {
            TypedArrayKind::Uint8 => "Uint8Array",
            TypedArrayKind::Int8 => "Int8Array",
            TypedArrayKind::Uint16 => "Uint16Array",
            TypedArrayKind::Int16 => "Int16Array",
            TypedArrayKind::Uint32 => "Uint32Array",
            TypedArrayKind::Int32 => "Int32Array",
            TypedArrayKind::BigUint64 => "BigUint64Array",
            TypedArrayKind::BigInt64 => "BigInt64Array",
        }
    }
}

/// Fixed-width numeric array
///
/// Backing storage is widened to i128 so one representation covers all
/// eight element kinds; the kind tag decides interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedArray {
    pub kind: TypedArrayKind,
    pub data: Vec<i128>,
}

impl TypedArray {
    pub fn new(kind: TypedArrayKind, data: Vec<i128>) -> TypedArray {
        TypedArray { kind, data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Error,
    EvalError,
    RangeError,
    ReferenceError,
    SyntaxError,
    TypeError,
    UriError,
    InternalError,
}

/// Runtime error value
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorValue {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorValue {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> ErrorValue {
        ErrorValue {
            kind,
            message: message.into(),
        }
    }
}

/// Promise value
///
/// Only inspected, never awaited: classification must not consume or
/// resolve a pending value as a side effect.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PromiseValue {
    pub settled: Option<Box<Value>>,
}

impl PromiseValue {
    pub fn pending() -> PromiseValue {
        PromiseValue { settled: None }
    }

    pub fn resolved(value: Value) -> PromiseValue {
        PromiseValue {
            settled: Some(Box::new(value)),
        }
    }
}

/// Callable value wrapping a native closure
///
/// Functions carry optional source text (returned by string coercion when
/// execution is disabled), async/generator flags the classifier reads
/// without invoking the body, and an own-property table.
#[derive(Clone)]
pub struct FunctionValue {
    body: Rc<dyn Fn(&[Value]) -> Value>,
    pub source: Option<String>,
    pub is_async: bool,
    pub is_generator: bool,
    pub properties: BTreeMap<String, Value>,
}

impl FunctionValue {
    pub fn new(body: impl Fn(&[Value]) -> Value + 'static) -> FunctionValue {
        FunctionValue {
            body: Rc::new(body),
            source: None,
            is_async: false,
            is_generator: false,
            properties: BTreeMap::new(),
        }
    }

    /// Attach an own property, readable through [`Value::get_property`]
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> FunctionValue {
        self.properties.insert(key.into(), value);
        self
    }

    /// Attach the function's source text
    pub fn with_source(mut self, source: impl Into<String>) -> FunctionValue {
        self.source = Some(source.into());
        self
    }

    /// Mark as an async function
    pub fn asynchronous(mut self) -> FunctionValue {
        self.is_async = true;
        self
    }

    /// Mark as a generator function
    pub fn generator(mut self) -> FunctionValue {
        self.is_generator = true;
        self
    }

    /// Invoke the function body
    pub fn call(&self, args: &[Value]) -> Value {
        (self.body)(args)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("source", &self.source)
            .field("is_async", &self.is_async)
            .field("is_generator", &self.is_generator)
            .finish()
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

/// Dynamic runtime value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    Str(String),
    Symbol(Symbol),

    // Boxed primitive wrappers (object-kind values around a primitive)
    BoxedBool(bool),
    BoxedNumber(f64),
    BoxedString(String),

    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
    Map(Vec<(Value, Value)>),
    Set(Vec<Value>),

    TypedArray(TypedArray),
    ArrayBuffer(Vec<u8>),
    SharedArrayBuffer(Vec<u8>),
    DataView { len: usize, offset: usize },

    Date(i64),
    RegExp { pattern: String, flags: String },
    Error(ErrorValue),
    Promise(PromiseValue),

    Function(FunctionValue),
    Class(ClassHandle),
    Instance {
        class: ClassHandle,
        fields: BTreeMap<String, Value>,
    },

    /// An adapted sequence (see the iterable module)
    Iterable(Box<Iterable>),
}

impl Value {
    /// Create a string value
    pub fn str(s: impl Into<String>) -> Value {
        Value::Str(s.into())
    }

    /// Create a plain object from key/value pairs
    pub fn object<I, K>(pairs: I) -> Value
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Object(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Create a function value from a native closure
    pub fn function(body: impl Fn(&[Value]) -> Value + 'static) -> Value {
        Value::Function(FunctionValue::new(body))
    }

    /// Determine the semantic type category of this value
    ///
    /// Exactly one category per value. Null classifies as object.
    pub fn category(&self) -> TypeCategory {
        match self {
            Value::Undefined => TypeCategory::Undefined,
            Value::Null => TypeCategory::Object,
            Value::Bool(_) => TypeCategory::Boolean,
            Value::Number(_) => TypeCategory::Number,
            Value::BigInt(_) => TypeCategory::BigInt,
            Value::Str(_) => TypeCategory::String,
            Value::Symbol(_) => TypeCategory::Symbol,
            Value::Function(_) | Value::Class(_) => TypeCategory::Function,
            _ => TypeCategory::Object,
        }
    }

    /// Read an own property, Undefined when absent
    ///
    /// Unset properties are a value-level miss, not an error; contrast
    /// with [`crate::env::Scope::resolve`], where an undeclared binding
    /// is a reference error.
    pub fn get_property(&self, key: &str) -> Value {
        match self {
            Value::Object(fields) | Value::Instance { fields, .. } => {
                fields.get(key).cloned().unwrap_or(Value::Undefined)
            }
            Value::Array(items) if key == "length" => Value::Number(items.len() as f64),
            Value::Str(s) | Value::BoxedString(s) if key == "length" => {
                Value::Number(s.chars().count() as f64)
            }
            Value::TypedArray(ta) if key == "length" => Value::Number(ta.len() as f64),
            Value::Function(f) => f.properties.get(key).cloned().unwrap_or(Value::Undefined),
            _ => Value::Undefined,
        }
    }

    /// Truthiness of this value
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::BigInt(n) => *n != 0,
            Value::Str(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Get the string content, if this is a string primitive
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the numeric content of a number primitive
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Undefined
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) | Value::BoxedBool(b) => write!(f, "{}", b),
            Value::Number(n) | Value::BoxedNumber(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::Str(s) | Value::BoxedString(s) => write!(f, "{}", s),
            Value::Symbol(sym) => match &sym.description {
                Some(d) => write!(f, "Symbol({})", d),
                None => write!(f, "Symbol()"),
            },
            Value::Array(_) => write!(f, "[array]"),
            Value::Function(_) => write!(f, "[function]"),
            Value::Class(class) => write!(f, "[class {}]", class.name),
            Value::Error(e) => write!(f, "{:?}: {}", e.kind, e.message),
            Value::RegExp { pattern, flags } => write!(f, "/{}/{}", pattern, flags),
            _ => write!(f, "[object]"),
        }
    }
}
