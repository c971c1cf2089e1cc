//! Contact-event log records.
//!
//! A contact report is bounded per field and must then satisfy the ordered
//! [`ContactRule`] set.

mod aggregate;
mod contact_type;
mod rules;

pub use aggregate::{
    AlienContact, ContactCode, ContactMessage, DurationMinutes, Location, NewContact,
    SignalRange, SignalStrength, WitnessCount,
};
pub use contact_type::ContactType;
pub use rules::{ContactRule, CONTACT_ID_PREFIX, MIN_TELEPATHIC_WITNESSES, STRONG_SIGNAL_THRESHOLD};
