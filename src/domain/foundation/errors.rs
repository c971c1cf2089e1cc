//! Error types for the validation engine.
//!
//! Every record constructor returns [`Violation`], which is either a
//! [`ConstraintViolation`] (one field failed its own bound) or a
//! [`RuleViolation`] (a cross-field business rule failed after all
//! constraints passed).

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A numeric bound or actual value, as reported in violation messages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstraintReason {
    #[error("must have at least {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("must have at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("must be between {min} and {max}, got {actual}")]
    OutOfRange {
        min: Number,
        max: Number,
        actual: Number,
    },

    #[error("must contain at least {min} items, got {actual}")]
    TooFewItems { min: usize, actual: usize },

    #[error("must contain at most {max} items, got {actual}")]
    TooManyItems { max: usize, actual: usize },

    #[error("must be one of [{}], got '{actual}'", .allowed.join(", "))]
    UnknownVariant {
        allowed: &'static [&'static str],
        actual: String,
    },
}

/// A single field failed its declared bound or enum membership.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("Field '{field}' {reason}")]
pub struct ConstraintViolation {
    pub field: &'static str,
    pub reason: ConstraintReason,
}

impl ConstraintViolation {
    /// Creates a violation for `field`.
    pub fn new(field: &'static str, reason: ConstraintReason) -> Self {
        Self { field, reason }
    }

    /// Creates a text-too-short violation.
    pub fn too_short(field: &'static str, min: usize, actual: usize) -> Self {
        Self::new(field, ConstraintReason::TooShort { min, actual })
    }

    /// Creates a text-too-long violation.
    pub fn too_long(field: &'static str, max: usize, actual: usize) -> Self {
        Self::new(field, ConstraintReason::TooLong { max, actual })
    }

    /// Creates an out of range violation.
    pub fn out_of_range(
        field: &'static str,
        min: impl Into<Number>,
        max: impl Into<Number>,
        actual: impl Into<Number>,
    ) -> Self {
        Self::new(
            field,
            ConstraintReason::OutOfRange {
                min: min.into(),
                max: max.into(),
                actual: actual.into(),
            },
        )
    }

    /// Creates an unknown enum variant violation.
    pub fn unknown_variant(
        field: &'static str,
        allowed: &'static [&'static str],
        actual: impl Into<String>,
    ) -> Self {
        Self::new(
            field,
            ConstraintReason::UnknownVariant {
                allowed,
                actual: actual.into(),
            },
        )
    }

    /// Returns the machine-readable code for this violation.
    pub fn code(&self) -> ErrorCode {
        match self.reason {
            ConstraintReason::TooShort { .. } => ErrorCode::TooShort,
            ConstraintReason::TooLong { .. } => ErrorCode::TooLong,
            ConstraintReason::OutOfRange { .. } => ErrorCode::OutOfRange,
            ConstraintReason::TooFewItems { .. } => ErrorCode::TooFewItems,
            ConstraintReason::TooManyItems { .. } => ErrorCode::TooManyItems,
            ConstraintReason::UnknownVariant { .. } => ErrorCode::UnknownVariant,
        }
    }
}

/// A cross-field business rule failed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct RuleViolation {
    pub rule: &'static str,
    pub message: String,
}

impl RuleViolation {
    /// Creates a violation of the named rule.
    pub fn new(rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

/// Which layer rejected a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCategory {
    Constraint,
    Rule,
}

/// Machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Constraint layer
    TooShort,
    TooLong,
    OutOfRange,
    TooFewItems,
    TooManyItems,
    UnknownVariant,

    // Rule layer
    RuleViolated,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::TooShort => "TOO_SHORT",
            ErrorCode::TooLong => "TOO_LONG",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::TooFewItems => "TOO_FEW_ITEMS",
            ErrorCode::TooManyItems => "TOO_MANY_ITEMS",
            ErrorCode::UnknownVariant => "UNKNOWN_VARIANT",
            ErrorCode::RuleViolated => "RULE_VIOLATED",
        };
        write!(f, "{}", s)
    }
}

/// The first check that rejected a candidate record.
///
/// A record constructor that returns this has produced no record at all.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Violation {
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    #[error(transparent)]
    Rule(#[from] RuleViolation),
}

impl Violation {
    /// Returns which layer produced the violation.
    pub fn category(&self) -> ViolationCategory {
        match self {
            Violation::Constraint(_) => ViolationCategory::Constraint,
            Violation::Rule(_) => ViolationCategory::Rule,
        }
    }

    /// Returns the failing field name or rule name.
    pub fn identifier(&self) -> &'static str {
        match self {
            Violation::Constraint(v) => v.field,
            Violation::Rule(v) => v.rule,
        }
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns the machine-readable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Violation::Constraint(v) => v.code(),
            Violation::Rule(_) => ErrorCode::RuleViolated,
        }
    }

    /// Returns the constraint violation, if this is one.
    pub fn as_constraint(&self) -> Option<&ConstraintViolation> {
        match self {
            Violation::Constraint(v) => Some(v),
            Violation::Rule(_) => None,
        }
    }

    /// Returns the rule violation, if this is one.
    pub fn as_rule(&self) -> Option<&RuleViolation> {
        match self {
            Violation::Rule(v) => Some(v),
            Violation::Constraint(_) => None,
        }
    }
}
