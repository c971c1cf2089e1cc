//! Domain layer containing the validation engine and the record families.
//!
//! # Module Organization
//!
//! - `foundation` - Bounded value objects, business rule trait, errors
//! - `station` - Station telemetry records (field constraints only)
//! - `contact` - Contact-event log records and their rules
//! - `mission` - Mission + crew roster records and their rules

pub mod contact;
pub mod foundation;
pub mod mission;
pub mod station;
