//! # Predikit Core
//!
//! Pure predicate helpers for validating application values.
//!
//! Every predicate is a total, stateless function that borrows its inputs
//! and returns a boolean verdict. Nothing here allocates state, logs or
//! performs I/O, so every function is safe to call from any thread.
//!
//! Two surfaces cover the same predicate table:
//!
//! - [`predicates`]: native Rust types (`Option`, slices, `PartialOrd`).
//! - [`dynamic`]: the [`Value`] model with distinct null and undefined
//!   sentinels and coercing comparisons.
//!
//! [`PredicateKind`] names each predicate for runtime lookup.
//!
//! ```
//! use predikit_core::{PredicateKind, Value, dynamic, predicates};
//!
//! assert!(predicates::is_major_number(&5, &3));
//! assert!(dynamic::is_null(&Value::Null));
//! assert!(!dynamic::is_null(&Value::Undefined));
//!
//! let kind: PredicateKind = "isMajorSameNumber".parse().unwrap();
//! assert!(kind.evaluate(&[Value::from(5), Value::from(5)]));
//! ```

pub mod coerce;
pub mod dynamic;
pub mod error;
pub mod predicates;
pub mod registry;
pub mod value;

pub use error::PredicateError;
pub use registry::PredicateKind;
pub use value::Value;
