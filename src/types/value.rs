//! Comparison rules for JSON values.
//!
//! Scalar equality is loose: a single number/string/boolean coercion is
//! applied before comparing. Membership (`in`, or a scalar criterion against a
//! sequence field) is strict: same type, numbers compared by value, and
//! sequences or mappings never equal anything.

use std::cmp::Ordering;

use serde_json::{Number, Value};

use super::criterion::CompareOp;

/// Whether a value is a scalar (not a sequence or mapping). `null` counts as a scalar.
#[must_use]
pub(crate) fn is_scalar(v: &Value) -> bool {
    !matches!(v, Value::Array(_) | Value::Object(_))
}

/// Equality between two scalars with number/string/boolean coercion.
#[must_use]
pub(crate) fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => number_cmp(x, y) == Some(Ordering::Equal),
        _ => match (to_number(a), to_number(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

/// Equality without coercion. Used for membership tests.
///
/// Sequences and mappings have identity, not structure: they are never
/// strictly equal, even to an identical copy.
#[must_use]
pub(crate) fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => number_cmp(x, y) == Some(Ordering::Equal),
        _ => is_scalar(a) && a == b,
    }
}

/// Whether `haystack` holds a value strictly equal to `needle`.
#[must_use]
pub(crate) fn contains(haystack: &[Value], needle: &Value) -> bool {
    haystack.iter().any(|v| strict_eq(v, needle))
}

/// Evaluate `field <op> operand`.
/// Returns `None` when the two values have no meaningful ordering.
#[must_use]
pub(crate) fn compare(field: &Value, op: CompareOp, operand: &Value) -> Option<bool> {
    ordinal(field, operand).map(|ord| op.holds(ord))
}

fn ordinal(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Number(x), Value::Number(y)) => number_cmp(x, y),
        _ => to_number(a)?.partial_cmp(&to_number(b)?),
    }
}

#[allow(clippy::cast_precision_loss)]
fn number_cmp(a: &Number, b: &Number) -> Option<Ordering> {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return Some(x.cmp(&y));
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return Some(x.cmp(&y));
    }
    a.as_f64()?.partial_cmp(&b.as_f64()?)
}

/// Numeric coercion of a scalar: booleans become 0/1, strings follow
/// [`parse_number`]. `null`, sequences and mappings have no numeric value.
fn to_number(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::String(s) => parse_number(s)?,
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    (!n.is_nan()).then_some(n)
}

/// Numeric value of a string literal.
///
/// Surrounding whitespace is ignored and a blank string is 0. Accepted forms
/// are decimals with optional sign, fraction and exponent, `Infinity` with
/// optional sign, and unsigned `0x`/`0o`/`0b` integers. Anything else has no
/// numeric value.
fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return Some(0.0);
    }
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return integer_literal(&s[2..], radix);
    }
    // `f64::from_str` also takes `inf`, `nan` and `infinity` in any case.
    let decimal = |b: u8| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E');
    if !s.bytes().all(decimal) {
        return None;
    }
    s.parse().ok()
}

fn integer_literal(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
