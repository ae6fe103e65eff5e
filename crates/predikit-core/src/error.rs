//! # Error Module
//!
//! The predicates themselves never fail. Errors only arise when a
//! predicate is looked up by name or called with a checked argument count.

use thiserror::Error;

/// Errors from the predicate registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// No predicate has this name.
    #[error("unknown predicate: {0}")]
    UnknownPredicate(String),

    /// Wrong number of arguments under strict evaluation.
    #[error("{predicate} takes {expected} argument(s), got {actual}")]
    ArityMismatch {
        predicate: &'static str,
        expected: usize,
        actual: usize,
    },
}
