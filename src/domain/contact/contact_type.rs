//! ContactType enum: the medium through which a contact occurred.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ConstraintViolation;

/// How a contact was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Radio,
    Visual,
    Physical,
    Telepathic,
}

const NAMES: &[&str] = &["radio", "visual", "physical", "telepathic"];

impl ContactType {
    /// Returns all contact types in declaration order.
    pub fn all() -> &'static [ContactType] {
        &[
            ContactType::Radio,
            ContactType::Visual,
            ContactType::Physical,
            ContactType::Telepathic,
        ]
    }

    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::Radio => "radio",
            ContactType::Visual => "visual",
            ContactType::Physical => "physical",
            ContactType::Telepathic => "telepathic",
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactType {
    type Err = ConstraintViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ConstraintViolation::unknown_variant("contact_type", NAMES, s))
    }
}
