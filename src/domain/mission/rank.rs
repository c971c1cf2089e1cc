//! Rank enum for crew members.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ConstraintViolation;

/// Crew rank, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Cadet,
    Officer,
    Lieutenant,
    Captain,
    Commander,
}

const NAMES: &[&str] = &["cadet", "officer", "lieutenant", "captain", "commander"];

impl Rank {
    /// Returns all ranks in declaration order.
    pub fn all() -> &'static [Rank] {
        &[
            Rank::Cadet,
            Rank::Officer,
            Rank::Lieutenant,
            Rank::Captain,
            Rank::Commander,
        ]
    }

    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Cadet => "cadet",
            Rank::Officer => "officer",
            Rank::Lieutenant => "lieutenant",
            Rank::Captain => "captain",
            Rank::Commander => "commander",
        }
    }

    /// Returns true if this rank can lead a mission.
    pub fn can_command(&self) -> bool {
        match self {
            Rank::Captain | Rank::Commander => true,
            Rank::Cadet | Rank::Officer | Rank::Lieutenant => false,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = ConstraintViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ConstraintViolation::unknown_variant("rank", NAMES, s))
    }
}
