//! Foundation module - Shared validation primitives.
//!
//! Contains the bounded value objects (constraint layer), the business rule
//! trait (rule layer), timestamps, and the error types that every record
//! family builds on.

mod bounded;
mod errors;
mod percentage;
mod rules;
mod timestamp;

pub use bounded::{BoundedFloat, BoundedInt, BoundedText, BoundedVec, FloatRange};
pub use errors::{
    ConstraintReason, ConstraintViolation, ErrorCode, Number, RuleViolation, Violation,
    ViolationCategory,
};
pub use percentage::{PercentRange, Percentage};
pub use rules::{check_rules, BusinessRule};
pub use timestamp::Timestamp;
