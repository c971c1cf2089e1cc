//! Alien contact report.

use serde::{Deserialize, Serialize};

use super::{ContactRule, ContactType};
use crate::domain::foundation::{
    check_rules, BoundedFloat, BoundedInt, BoundedText, FloatRange, Timestamp, Violation,
};

pub type ContactCode = BoundedText<5, 15>;
pub type Location = BoundedText<3, 100>;
pub type DurationMinutes = BoundedInt<1, 1440>;
pub type WitnessCount = BoundedInt<1, 100>;
pub type ContactMessage = BoundedText<0, 500>;

/// Range marker for signal strength, `0.0..=10.0`.
#[derive(Debug)]
pub enum SignalRange {}

impl FloatRange for SignalRange {
    const MIN: f64 = 0.0;
    const MAX: f64 = 10.0;
}

pub type SignalStrength = BoundedFloat<SignalRange>;

/// Raw field values for a contact report, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewContact {
    pub contact_id: String,
    /// Defaults to now.
    pub timestamp: Option<Timestamp>,
    pub location: String,
    pub contact_type: ContactType,
    pub signal_strength: f64,
    pub duration_minutes: i64,
    pub witness_count: i64,
    pub message_received: Option<String>,
    /// Defaults to false.
    pub is_verified: Option<bool>,
}

impl NewContact {
    /// Creates a candidate with every defaulted field left unset.
    pub fn new(
        contact_id: impl Into<String>,
        location: impl Into<String>,
        contact_type: ContactType,
        signal_strength: f64,
        duration_minutes: i64,
        witness_count: i64,
    ) -> Self {
        Self {
            contact_id: contact_id.into(),
            timestamp: None,
            location: location.into(),
            contact_type,
            signal_strength,
            duration_minutes,
            witness_count,
            message_received: None,
            is_verified: None,
        }
    }

    pub fn with_timestamp(mut self, at: Timestamp) -> Self {
        self.timestamp = Some(at);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message_received = Some(message.into());
        self
    }

    pub fn with_verified(mut self, is_verified: bool) -> Self {
        self.is_verified = Some(is_verified);
        self
    }
}

/// A validated contact report.
///
/// # Invariants
///
/// - Every field is within its declared bound
/// - Every [`ContactRule`] holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewContact")]
pub struct AlienContact {
    contact_id: ContactCode,
    timestamp: Timestamp,
    location: Location,
    contact_type: ContactType,
    signal_strength: SignalStrength,
    duration_minutes: DurationMinutes,
    witness_count: WitnessCount,
    message_received: Option<ContactMessage>,
    is_verified: bool,
}

impl AlienContact {
    /// Validates a candidate and builds the report.
    ///
    /// Field constraints are checked first, in declaration order; rules in
    /// [`ContactRule::ALL`] run only once every field is in bounds.
    ///
    /// # Errors
    ///
    /// - `Violation::Constraint` for the first out-of-bounds field
    /// - `Violation::Rule` for the first failing rule
    pub fn new(candidate: NewContact) -> Result<Self, Violation> {
        Self::build(candidate).inspect_err(|v| {
            tracing::debug!(
                record = "alien_contact",
                identifier = v.identifier(),
                code = %v.code(),
                "candidate rejected"
            );
        })
    }

    fn build(candidate: NewContact) -> Result<Self, Violation> {
        let contact = Self {
            contact_id: ContactCode::try_new("contact_id", candidate.contact_id)?,
            timestamp: candidate.timestamp.unwrap_or_default(),
            location: Location::try_new("location", candidate.location)?,
            contact_type: candidate.contact_type,
            signal_strength: SignalStrength::try_new("signal_strength", candidate.signal_strength)?,
            duration_minutes: DurationMinutes::try_new(
                "duration_minutes",
                candidate.duration_minutes,
            )?,
            witness_count: WitnessCount::try_new("witness_count", candidate.witness_count)?,
            message_received: ContactMessage::try_optional(
                "message_received",
                candidate.message_received,
            )?,
            is_verified: candidate.is_verified.unwrap_or(false),
        };

        check_rules(&ContactRule::ALL, &contact)?;
        tracing::trace!(
            record = "alien_contact",
            contact_id = contact.contact_id(),
            "candidate accepted"
        );
        Ok(contact)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn contact_id(&self) -> &str {
        self.contact_id.as_str()
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    pub fn contact_type(&self) -> ContactType {
        self.contact_type
    }

    pub fn signal_strength(&self) -> f64 {
        self.signal_strength.value()
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration_minutes.value()
    }

    pub fn witness_count(&self) -> i64 {
        self.witness_count.value()
    }

    pub fn message_received(&self) -> Option<&str> {
        self.message_received.as_ref().map(ContactMessage::as_str)
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified
    }
}

impl TryFrom<NewContact> for AlienContact {
    type Error = Violation;

    fn try_from(candidate: NewContact) -> Result<Self, Self::Error> {
        Self::new(candidate)
    }
}
