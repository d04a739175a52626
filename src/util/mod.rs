//! Utility functions
//!
//! Shared helpers used by the coercion engine and the lax classifier:
//! calendar math for date values and JSON rendering of dynamic values.

pub mod json;
pub mod time;
