//! # Coercion Module
//!
//! Primitive, string and number conversions used by the ordering
//! predicates on [`Value`].
//!
//! Ordering never fails. Operands are reduced to primitives; two strings
//! compare by UTF-16 code units, everything else compares as numbers, and
//! a NaN on either side makes the comparison undefined (`None`).

use crate::Value;
use std::cmp::Ordering;

/// Rendering of any non-array object as a primitive.
pub const OBJECT_TAG: &str = "[object Object]";

/// Reduce a value to a primitive.
///
/// Arrays become their comma-joined string form and objects become
/// [`OBJECT_TAG`]. Primitives are returned unchanged.
#[must_use]
pub fn to_primitive(value: &Value) -> Value {
    match value {
        Value::Array(_) | Value::Object(_) => Value::String(to_display_string(value)),
        other => other.clone(),
    }
}

/// String form of a value.
#[must_use]
pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::Undefined => String::from("undefined"),
        Value::Null => String::from("null"),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(*n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // Holes render empty inside a joined array.
                Value::Undefined | Value::Null => String::new(),
                other => to_display_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => String::from(OBJECT_TAG),
    }
}

/// Numeric form of a value. Unconvertible values yield NaN.
#[must_use]
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Undefined => f64::NAN,
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => *n,
        Value::String(s) => parse_number(s),
        Value::Array(_) | Value::Object(_) => to_number(&to_primitive(value)),
    }
}

/// Relational comparison of two values.
///
/// Returns `None` when the comparison is undefined, in which case every
/// ordering predicate is false.
#[must_use]
pub fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    let pa = to_primitive(a);
    let pb = to_primitive(b);

    if let (Value::String(sa), Value::String(sb)) = (&pa, &pb) {
        return Some(sa.encode_utf16().cmp(sb.encode_utf16()));
    }

    to_number(&pa).partial_cmp(&to_number(&pb))
}

fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        String::from("NaN")
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            String::from("Infinity")
        } else {
            String::from("-Infinity")
        }
    } else if n == 0.0 {
        // -0 prints as 0
        String::from("0")
    } else {
        finite_to_string(n)
    }
}

/// Shortest round-trip digits, laid out in plain notation for decimal
/// exponents in `[-6, 21)` and in `1.5e+21` notation otherwise.
fn finite_to_string(n: f64) -> String {
    let sign = if n.is_sign_negative() { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits, e.g. "1.5e-7".
    let sci = format!("{:e}", n.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exp: i32 = exp.parse().unwrap_or(0);

    let k = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    // Position of the decimal point relative to the first digit.
    let point = exp.saturating_add(1);
    let zeros = |count: i32| "0".repeat(usize::try_from(count).unwrap_or(0));

    let body = if k <= point && point <= 21 {
        format!("{digits}{}", zeros(point - k))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(usize::try_from(point).unwrap_or(0));
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", zeros(-point))
    } else {
        let (head, tail) = digits.split_at(1);
        let frac = if tail.is_empty() {
            String::new()
        } else {
            format!(".{tail}")
        };
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{head}{frac}e{exp_sign}{}", exp.unsigned_abs())
    };

    format!("{sign}{body}")
}

/// Parse a string the way the numeric conversion does.
///
/// Surrounding whitespace is ignored and the empty string is zero.
/// Accepts decimal literals with optional sign and exponent, signed
/// `Infinity`, and unsigned `0x`/`0o`/`0b` integer literals.
fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(n) = parse_radix_literal(s) {
        return n;
    }

    // `f64::from_str` also takes "inf" and "nan"; those are not numbers here.
    let decimal_chars = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    let has_digit = s.chars().any(|c| c.is_ascii_digit());
    if !decimal_chars || !has_digit {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Some(f64::NAN);
    }
    match u128::from_str_radix(digits, radix) {
        Ok(n) => Some(n as f64),
        // Wider than 128 bits, or a digit outside the radix.
        Err(_) => Some(accumulate_digits(digits, radix)),
    }
}

#[allow(clippy::float_arithmetic)]
fn accumulate_digits(digits: &str, radix: u32) -> f64 {
    let base = f64::from(radix);
    digits
        .chars()
        .try_fold(0.0, |acc, c| c.to_digit(radix).map(|d| acc * base + f64::from(d)))
        .unwrap_or(f64::NAN)
}

// =============================================================================
// TESTS
// =============================================================================
