//! Business rules for contact reports.

use super::{AlienContact, ContactType};
use crate::domain::foundation::BusinessRule;

/// Every contact ID starts with this tag.
pub const CONTACT_ID_PREFIX: &str = "AC";

/// Minimum witnesses for a telepathic contact.
pub const MIN_TELEPATHIC_WITNESSES: i64 = 3;

/// Signals strictly above this strength must carry a message.
pub const STRONG_SIGNAL_THRESHOLD: f64 = 7.0;

/// Cross-field rules for [`AlienContact`], in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactRule {
    ContactIdPrefix,
    PhysicalContactVerified,
    TelepathicWitnessQuorum,
    StrongSignalMessage,
}

impl ContactRule {
    /// All rules in the order they are evaluated.
    pub const ALL: [ContactRule; 4] = [
        ContactRule::ContactIdPrefix,
        ContactRule::PhysicalContactVerified,
        ContactRule::TelepathicWitnessQuorum,
        ContactRule::StrongSignalMessage,
    ];
}

impl BusinessRule<AlienContact> for ContactRule {
    fn name(&self) -> &'static str {
        match self {
            ContactRule::ContactIdPrefix => "contact_id_prefix",
            ContactRule::PhysicalContactVerified => "physical_contact_verified",
            ContactRule::TelepathicWitnessQuorum => "telepathic_witness_quorum",
            ContactRule::StrongSignalMessage => "strong_signal_message",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ContactRule::ContactIdPrefix => "Contact ID must start with 'AC'",
            ContactRule::PhysicalContactVerified => "Physical contact reports must be verified",
            ContactRule::TelepathicWitnessQuorum => {
                "Telepathic contact requires at least 3 witnesses"
            }
            ContactRule::StrongSignalMessage => {
                "Strong signals (> 7.0) should include received messages"
            }
        }
    }

    fn holds(&self, contact: &AlienContact) -> bool {
        match self {
            ContactRule::ContactIdPrefix => contact.contact_id().starts_with(CONTACT_ID_PREFIX),
            ContactRule::PhysicalContactVerified => match contact.contact_type() {
                ContactType::Physical => contact.is_verified(),
                ContactType::Radio | ContactType::Visual | ContactType::Telepathic => true,
            },
            ContactRule::TelepathicWitnessQuorum => match contact.contact_type() {
                ContactType::Telepathic => contact.witness_count() >= MIN_TELEPATHIC_WITNESSES,
                ContactType::Radio | ContactType::Visual | ContactType::Physical => true,
            },
            ContactRule::StrongSignalMessage => {
                contact.signal_strength() <= STRONG_SIGNAL_THRESHOLD
                    || contact.message_received().is_some_and(|m| !m.is_empty())
            }
        }
    }
}
