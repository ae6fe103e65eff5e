//! # Dynamic Predicates
//!
//! The predicate table over [`Value`], keeping null and undefined distinct.
//! Ordering predicates go through [`crate::coerce::compare`] and never fail.

use crate::coerce::compare;
use crate::Value;
use std::cmp::Ordering;

/// True iff `v` is a sequence container.
#[must_use]
pub fn is_array(v: &Value) -> bool {
    matches!(v, Value::Array(_))
}

/// True iff `v` is null, undefined, or an empty sequence container.
#[must_use]
pub fn is_blank_array(v: &Value) -> bool {
    match v {
        Value::Null | Value::Undefined => true,
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// True iff `v` is a string of zero length.
#[must_use]
pub fn is_empty_string(v: &Value) -> bool {
    matches!(v, Value::String(s) if s.is_empty())
}

/// True iff `v` is the boolean `true`. No truthiness.
#[must_use]
pub fn is_true(v: &Value) -> bool {
    matches!(v, Value::Bool(true))
}

/// True iff `v` is the null sentinel. Undefined is not null.
#[must_use]
pub fn is_null(v: &Value) -> bool {
    matches!(v, Value::Null)
}

/// True iff `v` is the undefined sentinel.
#[must_use]
pub fn is_undefined(v: &Value) -> bool {
    matches!(v, Value::Undefined)
}

/// `a > b`
#[must_use]
pub fn is_major_number(a: &Value, b: &Value) -> bool {
    matches!(compare(a, b), Some(Ordering::Greater))
}

/// `a >= b`
#[must_use]
pub fn is_major_same_number(a: &Value, b: &Value) -> bool {
    matches!(compare(a, b), Some(Ordering::Greater | Ordering::Equal))
}

/// `a < b`
#[must_use]
pub fn is_minor_number(a: &Value, b: &Value) -> bool {
    matches!(compare(a, b), Some(Ordering::Less))
}

/// `a <= b`
#[must_use]
pub fn is_minor_same_number(a: &Value, b: &Value) -> bool {
    matches!(compare(a, b), Some(Ordering::Less | Ordering::Equal))
}

// =============================================================================
// TESTS
// =============================================================================
