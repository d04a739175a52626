//! Bit-width and byte-alignment calculation
//!
//! Computes the bits needed to represent a signed integer range, rounds
//! the requirement up to a supported storage width, and picks the
//! smallest-fitting fixed-width array class.
//!
//! The boundary semantics are load-bearing: `2^i` needs `i` bits and
//! `-(2^i)` needs `i + 1` (one extra sign bit at the same power-of-two
//! boundary). A length-prefix wire format downstream is sized by these
//! exact numbers.

use crate::value::{TypedArray, TypedArrayKind};

/// Bits needed for a single value
///
/// Zero needs one bit; a positive value needs its ceiling log2; a
/// negative value reserves one extra sign bit over its magnitude.
pub fn bits_for_value(value: i128) -> u32 {
    if value == 0 {
        return 1;
    }
    if value < 0 {
        return ceil_log2(value.unsigned_abs()) + 1;
    }
    ceil_log2(value.unsigned_abs())
}

fn ceil_log2(magnitude: u128) -> u32 {
    if magnitude <= 1 {
        return 0;
    }
    128 - (magnitude - 1).leading_zeros()
}

/// Bits needed to cover a range
///
/// With only `min` given this is the requirement of that single value;
/// with both ends it is the widest requirement of the two.
pub fn calculate_bits_needed(min: i128, max: Option<i128>) -> u32 {
    match max {
        Some(max) => bits_for_value(min).max(bits_for_value(max)),
        None => bits_for_value(min),
    }
}

/// Round a bit requirement up to the next storage width
///
/// Widths start at 8 and double (8, 16, 32, 64, ...) until the
/// requirement fits.
pub fn align_to_bytes(bits: u32) -> u32 {
    let mut width = 8;
    while width < bits {
        width *= 2;
    }
    width
}

/// Select the smallest-fitting fixed-width array class for a set of
/// numbers
///
/// Any negative member selects the signed family; a requirement beyond
/// 32 aligned bits selects the 64-bit bigint-backed class.
pub fn calculate_typed_array_class(numbers: &[i128]) -> TypedArrayKind {
    let signed = numbers.iter().any(|&n| n < 0);
    let bits = numbers
        .iter()
        .map(|&n| bits_for_value(n))
        .max()
        .unwrap_or(1);

    match (align_to_bytes(bits), signed) {
        (8, false) => TypedArrayKind::Uint8,
        (8, true) => TypedArrayKind::Int8,
        (16, false) => TypedArrayKind::Uint16,
        (16, true) => TypedArrayKind::Int16,
        (32, false) => TypedArrayKind::Uint32,
        (32, true) => TypedArrayKind::Int32,
        (_, false) => TypedArrayKind::BigUint64,
        (_, true) => TypedArrayKind::BigInt64,
    }
}

/// Construct the selected array class populated with the given numbers
pub fn to_typed_array(numbers: &[i128]) -> TypedArray {
    TypedArray::new(calculate_typed_array_class(numbers), numbers.to_vec())
}

/// Estimated storage bytes for one value of a named type category
///
/// A fixed lookup table: strings are sized per UTF-16 code unit. The
/// undefined category (and any unknown name) has no estimable size and
/// reports -1.
pub fn estimate_bytes_for_type(name: &str) -> i32 {
    match name {
        "string" => 2,
        "number" => 8,
        "bigint" => 16,
        "boolean" => 4,
        "symbol" => 8,
        "object" => 8,
        "function" => 8,
        _ => -1,
    }
}
