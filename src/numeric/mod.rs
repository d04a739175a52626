//! Numeric parsing and formatting
//!
//! Detects and converts between decimal, hex, octal, binary and
//! scientific representations of numbers. String forms are matched
//! against canonical prefixed shapes (`0x`, `0o`, `0b`, `e`/`E`) with an
//! optional leading minus; the sign always stays outside the base marker
//! (`-0xff`, never a two's-complement rendering).
//!
//! Everything here is total: malformed input classifies as false or
//! parses to a documented default, never an error.

pub mod bits;

use std::sync::OnceLock;

use regex::Regex;

use crate::value::Value;

fn decimal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Requires a leading digit: "-.00" is malformed, not zero.
    RE.get_or_init(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap())
}

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?0x[0-9a-fA-F]+$").unwrap())
}

fn octal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?0o[0-7]+$").unwrap())
}

fn binary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?0b[01]+$").unwrap())
}

fn scientific_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?\d+(\.\d+)?[eE][+-]?\d+$").unwrap())
}

fn leading_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(-?\d+(?:\.\d+)?)").unwrap())
}

/// True for strings in canonical binary form (`0b1010`, `-0b1`)
pub fn is_binary(value: &Value) -> bool {
    matches!(value, Value::Str(s) if binary_re().is_match(s.trim()))
}

/// True for strings in canonical octal form (`0o17`, `-0o7`)
pub fn is_octal(value: &Value) -> bool {
    matches!(value, Value::Str(s) if octal_re().is_match(s.trim()))
}

/// True for strings in canonical hex form (`0xff`, `-0x1A`)
pub fn is_hex(value: &Value) -> bool {
    matches!(value, Value::Str(s) if hex_re().is_match(s.trim()))
}

/// True for number values and plain decimal strings
pub fn is_decimal(value: &Value) -> bool {
    match value {
        Value::Number(_) | Value::BigInt(_) => true,
        Value::Str(s) => decimal_re().is_match(s.trim()),
        _ => false,
    }
}

/// True for strings carrying an exponent marker (`1e10`, `-2.5E-3`)
pub fn is_scientific_notation(value: &Value) -> bool {
    matches!(value, Value::Str(s) if scientific_re().is_match(s.trim()))
}

/// True for numbers, bigints and strings in ANY recognized numeric form
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(_) | Value::BigInt(_) => true,
        Value::Str(s) => {
            let s = s.trim();
            decimal_re().is_match(s)
                || hex_re().is_match(s)
                || octal_re().is_match(s)
                || binary_re().is_match(s)
                || scientific_re().is_match(s)
        }
        _ => false,
    }
}

/// Parse a string in any recognized form to its numeric value
fn parse_numeric_string(s: &str) -> Option<f64> {
    let s = s.trim();
    if hex_re().is_match(s) || octal_re().is_match(s) || binary_re().is_match(s) {
        return parse_prefixed_int(s).map(|n| n as f64);
    }
    if decimal_re().is_match(s) || scientific_re().is_match(s) {
        return s.parse::<f64>().ok();
    }
    None
}

/// Parse a sign-prefixed radix literal (`-0xff`, `0b101`, `0o17`)
fn parse_prefixed_int(s: &str) -> Option<i128> {
    let s = s.trim();
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (radix, digits) = if let Some(d) = body.strip_prefix("0x") {
        (16, d)
    } else if let Some(d) = body.strip_prefix("0o") {
        (8, d)
    } else if let Some(d) = body.strip_prefix("0b") {
        (2, d)
    } else {
        return None;
    };
    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// True iff the value is an integral number
///
/// Strict: number primitives without a fractional part, and bigints.
/// Lax: additionally numeric strings whose value is integral - a trailing
/// `.0` still counts as integral.
pub fn is_integer(value: &Value, strict: bool) -> bool {
    match value {
        Value::Number(n) => n.is_finite() && n.fract() == 0.0,
        Value::BigInt(_) => true,
        Value::Str(s) if !strict => {
            matches!(parse_numeric_string(s), Some(n) if n.fract() == 0.0)
        }
        _ => false,
    }
}

/// True iff the value is a number with a fractional part
///
/// Lax mode accepts numeric strings, but a string with an all-zero
/// fraction (`"7.0"`) represents an integral value and is NOT a float.
pub fn is_float(value: &Value, strict: bool) -> bool {
    match value {
        Value::Number(n) => n.is_finite() && n.fract() != 0.0,
        Value::Str(s) if !strict => {
            matches!(parse_numeric_string(s), Some(n) if n.fract() != 0.0)
        }
        _ => false,
    }
}

/// Convert to an integer by taking the leading numeric token, then
/// truncating
///
/// The token parse stops at the first malformed character: `"7.1"` → 7,
/// `"1.32.1"` → 1 (token `1.32`, truncated). Unparseable input → 0.
pub fn to_integer(value: &Value) -> i64 {
    match value {
        Value::Number(n) if n.is_finite() => *n as i64,
        Value::Number(_) => 0,
        Value::BigInt(n) => *n as i64,
        Value::Bool(b) => *b as i64,
        Value::Str(s) => {
            if let Some(n) = parse_prefixed_int(s) {
                n as i64
            } else {
                leading_number_re()
                    .captures(s)
                    .and_then(|c| c[1].parse::<f64>().ok())
                    .map(|n| n as i64)
                    .unwrap_or(0)
            }
        }
        _ => 0,
    }
}

/// Convert to a float by taking the leading numeric token
///
/// `"1.32.1"` → 1.32. Unparseable input → NaN.
pub fn to_float(value: &Value) -> f64 {
    match value {
        Value::Number(n) => *n,
        Value::BigInt(n) => *n as f64,
        Value::Bool(b) => *b as i64 as f64,
        Value::Str(s) => {
            if let Some(n) = parse_numeric_string(s) {
                n
            } else {
                leading_number_re()
                    .captures(s)
                    .and_then(|c| c[1].parse::<f64>().ok())
                    .unwrap_or(f64::NAN)
            }
        }
        _ => f64::NAN,
    }
}

/// Convert any recognized numeric representation to a decimal integer
pub fn to_decimal(value: &Value) -> i64 {
    to_integer(value)
}

fn integer_magnitude(value: &Value) -> (bool, u64) {
    let n = to_integer(value) as i128;
    (n < 0, n.unsigned_abs() as u64)
}

/// Format as a hex literal, sign outside the marker (`-0xff`)
pub fn to_hex(value: &Value) -> String {
    let (negative, magnitude) = integer_magnitude(value);
    if negative {
        format!("-0x{:x}", magnitude)
    } else {
        format!("0x{:x}", magnitude)
    }
}

/// Format as an octal literal (`-0o17`)
pub fn to_octal(value: &Value) -> String {
    let (negative, magnitude) = integer_magnitude(value);
    if negative {
        format!("-0o{:o}", magnitude)
    } else {
        format!("0o{:o}", magnitude)
    }
}

/// Format as a binary literal (`-0b101`)
pub fn to_binary(value: &Value) -> String {
    let (negative, magnitude) = integer_magnitude(value);
    if negative {
        format!("-0b{:b}", magnitude)
    } else {
        format!("0b{:b}", magnitude)
    }
}

/// Minimum width for an integer: magnitude bits for non-negative
/// values (no sign bit), magnitude plus sign bit for negative ones
fn min_twos_complement_width(n: i64) -> u32 {
    if n >= 0 {
        (64 - (n as u64).leading_zeros()).max(1)
    } else {
        64 - ((!n) as u64).leading_zeros() + 1
    }
}

/// Fixed-width two's-complement bit string
///
/// Width defaults to the minimum needed for the value; an explicit width
/// keeps the low `width` bits. The auto width for a non-negative value
/// is its magnitude width with no leading sign bit - `to_bits(5, None)`
/// is `"101"`, not `"0101"`. Callers needing a sign-faithful read-back
/// pass an explicit width.
pub fn to_bits(n: i64, width: Option<u32>) -> String {
    let width = width.unwrap_or_else(|| min_twos_complement_width(n)).clamp(1, 64);
    let mut out = String::with_capacity(width as usize);
    for i in (0..width).rev() {
        out.push(if (n >> i) & 1 == 1 { '1' } else { '0' });
    }
    out
}

/// Integer bit decomposition (minimum-width two's complement)
pub fn int_to_bits(n: i64) -> String {
    to_bits(n, None)
}

/// IEEE-754 bit decomposition of a double (always 64 bits)
///
/// A distinct algorithm from [`int_to_bits`], not a generalization of it.
pub fn float_to_bits(f: f64) -> String {
    let bits = f.to_bits();
    let mut out = String::with_capacity(64);
    for i in (0..64).rev() {
        out.push(if (bits >> i) & 1 == 1 { '1' } else { '0' });
    }
    out
}

/// Flip every bit in a bit string
pub fn invert_bits(bits: &str) -> String {
    bits.chars()
        .map(|c| match c {
            '0' => '1',
            '1' => '0',
            other => other,
        })
        .collect()
}

/// Two's complement of a bit string: invert, then add one
///
/// A carry out of the top bit is dropped (the width is fixed).
pub fn twos_complement(bits: &str) -> String {
    let mut out: Vec<char> = invert_bits(bits).chars().collect();
    for slot in out.iter_mut().rev() {
        match slot {
            '0' => {
                *slot = '1';
                break;
            }
            '1' => *slot = '0',
            _ => break,
        }
    }
    out.into_iter().collect()
}

/// True for NaN and the infinities
pub fn is_nan_or_infinite(value: &Value) -> bool {
    matches!(value, Value::Number(n) | Value::BoxedNumber(n) if n.is_nan() || n.is_infinite())
}

/// True iff the value is zero
///
/// Strict: numeric zero only, never the string `"0"`. Lax: zero-valued
/// decimal strings too (`"-0.00"`), but a string without a leading digit
/// (`"-.00"`) is malformed, not zero.
pub fn is_zero(value: &Value, strict: bool) -> bool {
    match value {
        Value::Number(n) => *n == 0.0,
        Value::BigInt(n) => *n == 0,
        Value::Str(s) if !strict => {
            let s = s.trim();
            decimal_re().is_match(s) && s.parse::<f64>().map(|n| n == 0.0).unwrap_or(false)
        }
        _ => false,
    }
}

/// Restrict a number, or elementwise every number in an array, to
/// `[min, max]`
pub fn clamp(value: &Value, min: f64, max: f64) -> Value {
    match value {
        Value::Number(n) => Value::Number(n.clamp(min, max)),
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| clamp(item, min, max)).collect())
        }
        other => other.clone(),
    }
}
