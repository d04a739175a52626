//! Binding environment
//!
//! A Scope holds declared bindings. Resolving an undeclared name is the
//! one error condition in the whole crate: it is a caller bug, propagated
//! as [`ReferenceError`] and never caught internally. Reading an unset
//! *property* of a value is not an error - see
//! [`Value::get_property`](crate::value::Value::get_property).

use std::collections::BTreeMap;
use std::fmt;

use crate::value::Value;

/// Error for resolving an undeclared binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceError {
    pub name: String,
}

impl fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not defined", self.name)
    }
}

impl std::error::Error for ReferenceError {}

/// A table of declared bindings
#[derive(Debug, Default, Clone)]
pub struct Scope {
    bindings: BTreeMap<String, Value>,
}

impl Scope {
    pub fn new() -> Scope {
        Scope::default()
    }

    /// Declare a binding, overwriting any previous declaration
    pub fn declare(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// True iff the name has been declared (even if bound to undefined)
    pub fn is_declared(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Resolve a declared binding
    ///
    /// A binding declared as undefined resolves fine; only undeclared
    /// names error.
    pub fn resolve(&self, name: &str) -> Result<Value, ReferenceError> {
        self.bindings.get(name).cloned().ok_or_else(|| ReferenceError {
            name: name.to_string(),
        })
    }
}
