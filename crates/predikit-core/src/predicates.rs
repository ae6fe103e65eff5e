//! # Typed Predicates
//!
//! The predicate table expressed over native Rust types.
//!
//! Rust has a single absence sentinel, `Option::None`. Where the dynamic
//! surface distinguishes null from undefined, this surface collapses both
//! into [`is_absent`]. Use [`crate::dynamic`] when the distinction matters.

/// True iff the slice is absent or has no elements.
#[must_use]
pub fn is_blank_array<T>(v: Option<&[T]>) -> bool {
    v.is_none_or(|items| items.is_empty())
}

/// True iff the string has zero length.
#[must_use]
pub fn is_empty_string<S: AsRef<str> + ?Sized>(s: &S) -> bool {
    s.as_ref().is_empty()
}

/// True iff `b` is `true`.
#[must_use]
pub fn is_true(b: bool) -> bool {
    b
}

/// True iff the value is absent. Stands in for both null and undefined.
#[must_use]
pub fn is_absent<T>(v: &Option<T>) -> bool {
    v.is_none()
}

/// `a > b`
#[must_use]
pub fn is_major_number<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a > b
}

/// `a >= b`
#[must_use]
pub fn is_major_same_number<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a >= b
}

/// `a < b`
#[must_use]
pub fn is_minor_number<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a < b
}

/// `a <= b`
#[must_use]
pub fn is_minor_same_number<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a <= b
}

// =============================================================================
// TESTS
// =============================================================================
