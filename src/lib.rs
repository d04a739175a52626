//! Typekit - runtime type classification and numeric coercion
//!
//! A small, self-contained runtime type system for dynamic values:
//! given an arbitrary [`Value`], determine its semantic category among a
//! fixed set, coerce it into another category under a deterministic rule
//! table, and analyze its numeric content down to the bit level
//! (sign-magnitude width, byte alignment, fixed-width array class).
//!
//! Classification runs in one of two modes, passed explicitly on every
//! call: strict (native primitive/instance identity only) or lax
//! (boxed wrappers, string representations and array-likes broaden the
//! match). Predicates are total - they classify, they never error.
//!
//! # Example
//! ```
//! use typekit::{cast_to, classify, CastOptions, TypeCategory, Value};
//!
//! let v = Value::str("0xff");
//! assert!(classify::is_string(&v, true));
//! assert_eq!(
//!     cast_to(&v, TypeCategory::Number, &CastOptions::default()),
//!     Value::Number(255.0)
//! );
//! ```

// Core value model
pub mod value;

// Binding environment (the one error path)
pub mod env;

// Classification predicates
pub mod classify;

// Numeric parsing, formatting and bit math
pub mod numeric;

// Coercion engine
pub mod cast;

// Class identity and chain walking
pub mod introspect;

// Uniform sequence adapter
pub mod iterable;

// Shared helpers
pub mod util;

// Re-export main types
pub use cast::{cast_to, CastOptions};
pub use introspect::{ClassDef, ClassHandle};
pub use iterable::{to_iterable, Iterable};
pub use value::{TypeCategory, Value};
