//! # Predicate Registry
//!
//! Named, enumerable view of the dynamic predicates.
//!
//! Names are accepted in camelCase (`isMajorSameNumber`) or snake_case
//! (`is_major_same_number`). Evaluation pads missing arguments with
//! [`Value::Undefined`] and ignores surplus ones, so a lookup by name
//! behaves like a call in the dynamic host.

use crate::dynamic;
use crate::error::PredicateError;
use crate::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One entry per predicate in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PredicateKind {
    IsArray,
    IsBlankArray,
    IsEmptyString,
    IsTrue,
    IsNull,
    IsUndefined,
    IsMajorNumber,
    IsMajorSameNumber,
    IsMinorNumber,
    IsMinorSameNumber,
}

impl PredicateKind {
    /// Every predicate, in table order.
    pub const ALL: [PredicateKind; 10] = [
        Self::IsArray,
        Self::IsBlankArray,
        Self::IsEmptyString,
        Self::IsTrue,
        Self::IsNull,
        Self::IsUndefined,
        Self::IsMajorNumber,
        Self::IsMajorSameNumber,
        Self::IsMinorNumber,
        Self::IsMinorSameNumber,
    ];

    /// The camelCase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::IsArray => "isArray",
            Self::IsBlankArray => "isBlankArray",
            Self::IsEmptyString => "isEmptyString",
            Self::IsTrue => "isTrue",
            Self::IsNull => "isNull",
            Self::IsUndefined => "isUndefined",
            Self::IsMajorNumber => "isMajorNumber",
            Self::IsMajorSameNumber => "isMajorSameNumber",
            Self::IsMinorNumber => "isMinorNumber",
            Self::IsMinorSameNumber => "isMinorSameNumber",
        }
    }

    /// The snake_case name, matching the Rust function.
    #[must_use]
    pub fn snake_name(self) -> &'static str {
        match self {
            Self::IsArray => "is_array",
            Self::IsBlankArray => "is_blank_array",
            Self::IsEmptyString => "is_empty_string",
            Self::IsTrue => "is_true",
            Self::IsNull => "is_null",
            Self::IsUndefined => "is_undefined",
            Self::IsMajorNumber => "is_major_number",
            Self::IsMajorSameNumber => "is_major_same_number",
            Self::IsMinorNumber => "is_minor_number",
            Self::IsMinorSameNumber => "is_minor_same_number",
        }
    }

    /// Number of arguments the predicate reads.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::IsMajorNumber
            | Self::IsMajorSameNumber
            | Self::IsMinorNumber
            | Self::IsMinorSameNumber => 2,
            _ => 1,
        }
    }

    /// Evaluate against `args`. Never fails.
    #[must_use]
    pub fn evaluate(self, args: &[Value]) -> bool {
        static UNDEFINED: Value = Value::Undefined;
        let a = args.first().unwrap_or(&UNDEFINED);
        let b = args.get(1).unwrap_or(&UNDEFINED);

        match self {
            Self::IsArray => dynamic::is_array(a),
            Self::IsBlankArray => dynamic::is_blank_array(a),
            Self::IsEmptyString => dynamic::is_empty_string(a),
            Self::IsTrue => dynamic::is_true(a),
            Self::IsNull => dynamic::is_null(a),
            Self::IsUndefined => dynamic::is_undefined(a),
            Self::IsMajorNumber => dynamic::is_major_number(a, b),
            Self::IsMajorSameNumber => dynamic::is_major_same_number(a, b),
            Self::IsMinorNumber => dynamic::is_minor_number(a, b),
            Self::IsMinorSameNumber => dynamic::is_minor_same_number(a, b),
        }
    }

    /// Reject an argument count other than [`Self::arity`].
    pub fn check_arity(self, actual: usize) -> Result<(), PredicateError> {
        if actual != self.arity() {
            return Err(PredicateError::ArityMismatch {
                predicate: self.name(),
                expected: self.arity(),
                actual,
            });
        }
        Ok(())
    }

    /// Evaluate, rejecting an argument count other than [`Self::arity`].
    pub fn evaluate_strict(self, args: &[Value]) -> Result<bool, PredicateError> {
        self.check_arity(args.len())?;
        Ok(self.evaluate(args))
    }
}

impl fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PredicateKind {
    type Err = PredicateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s || kind.snake_name() == s)
            .ok_or_else(|| PredicateError::UnknownPredicate(s.to_owned()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
