//! Orbital Registry - Constrained record validation
//!
//! This crate validates station telemetry, contact-event logs, and mission
//! crew rosters. Each record is built from a candidate in one step: every
//! field is checked against its bound, then the family's business rules run
//! in order, and the first failure is returned as a [`Violation`].
//!
//! [`Violation`]: domain::foundation::Violation

pub mod config;
pub mod domain;
