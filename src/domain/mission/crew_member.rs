//! Crew member record.
//!
//! Crew members are validated on their own before they can join a mission,
//! so a mission never holds an invalid member.

use serde::{Deserialize, Serialize};

use super::Rank;
use crate::domain::foundation::{BoundedInt, BoundedText, Violation};

pub type MemberCode = BoundedText<3, 10>;
pub type MemberName = BoundedText<2, 50>;
pub type Age = BoundedInt<18, 80>;
pub type Specialization = BoundedText<3, 30>;
pub type YearsExperience = BoundedInt<0, 50>;

/// Members with strictly more years than this count as experienced.
pub const EXPERIENCED_AFTER_YEARS: i64 = 5;

/// Raw field values for a crew member, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCrewMember {
    pub member_id: String,
    pub name: String,
    pub rank: Rank,
    pub age: i64,
    pub specialization: String,
    pub years_experience: i64,
    /// Defaults to true.
    pub is_active: Option<bool>,
}

impl NewCrewMember {
    /// Creates a candidate with `is_active` left unset.
    pub fn new(
        member_id: impl Into<String>,
        name: impl Into<String>,
        rank: Rank,
        age: i64,
        specialization: impl Into<String>,
        years_experience: i64,
    ) -> Self {
        Self {
            member_id: member_id.into(),
            name: name.into(),
            rank,
            age,
            specialization: specialization.into(),
            years_experience,
            is_active: None,
        }
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// A validated crew member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewCrewMember")]
pub struct CrewMember {
    member_id: MemberCode,
    name: MemberName,
    rank: Rank,
    age: Age,
    specialization: Specialization,
    years_experience: YearsExperience,
    is_active: bool,
}

impl CrewMember {
    /// Validates a candidate and builds the crew member.
    ///
    /// # Errors
    ///
    /// - `Violation::Constraint` for the first out-of-bounds field
    pub fn new(candidate: NewCrewMember) -> Result<Self, Violation> {
        Self::build(candidate).inspect_err(|v| {
            tracing::debug!(
                record = "crew_member",
                identifier = v.identifier(),
                code = %v.code(),
                "candidate rejected"
            );
        })
    }

    fn build(candidate: NewCrewMember) -> Result<Self, Violation> {
        let member = Self {
            member_id: MemberCode::try_new("member_id", candidate.member_id)?,
            name: MemberName::try_new("name", candidate.name)?,
            rank: candidate.rank,
            age: Age::try_new("age", candidate.age)?,
            specialization: Specialization::try_new("specialization", candidate.specialization)?,
            years_experience: YearsExperience::try_new(
                "years_experience",
                candidate.years_experience,
            )?,
            is_active: candidate.is_active.unwrap_or(true),
        };

        tracing::trace!(
            record = "crew_member",
            member_id = member.member_id(),
            "candidate accepted"
        );
        Ok(member)
    }

    pub fn member_id(&self) -> &str {
        self.member_id.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn age(&self) -> i64 {
        self.age.value()
    }

    pub fn specialization(&self) -> &str {
        self.specialization.as_str()
    }

    pub fn years_experience(&self) -> i64 {
        self.years_experience.value()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns true if the member has more than five years of experience.
    pub fn is_experienced(&self) -> bool {
        self.years_experience() > EXPERIENCED_AFTER_YEARS
    }
}

impl TryFrom<NewCrewMember> for CrewMember {
    type Error = Violation;

    fn try_from(candidate: NewCrewMember) -> Result<Self, Self::Error> {
        Self::new(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connor() -> NewCrewMember {
        NewCrewMember::new("M001_M", "Sarah Connor", Rank::Commander, 55, "Mission Command", 30)
    }

    #[test]
    fn valid_member_keeps_supplied_values() {
        let member = CrewMember::new(connor()).unwrap();

        assert_eq!(member.member_id(), "M001_M");
        assert_eq!(member.name(), "Sarah Connor");
        assert_eq!(member.rank(), Rank::Commander);
        assert_eq!(member.age(), 55);
        assert_eq!(member.specialization(), "Mission Command");
        assert_eq!(member.years_experience(), 30);
        assert!(member.is_active());
    }

    #[test]
    fn explicit_inactive_flag_is_kept() {
        let member = CrewMember::new(connor().with_active(false)).unwrap();
        assert!(!member.is_active());
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let mut youngest = connor();
        youngest.age = 18;
        let mut oldest = connor();
        oldest.age = 80;

        assert!(CrewMember::new(youngest).is_ok());
        assert!(CrewMember::new(oldest).is_ok());
    }

    #[test]
    fn underage_member_is_rejected() {
        let mut candidate = connor();
        candidate.age = 17;
        assert_eq!(CrewMember::new(candidate).unwrap_err().identifier(), "age");
    }

    #[test]
    fn one_letter_name_is_rejected() {
        let mut candidate = connor();
        candidate.name = "S".to_string();
        assert_eq!(CrewMember::new(candidate).unwrap_err().identifier(), "name");
    }

    #[test]
    fn five_years_is_not_experienced() {
        let mut candidate = connor();
        candidate.years_experience = 5;
        assert!(!CrewMember::new(candidate).unwrap().is_experienced());

        let mut candidate = connor();
        candidate.years_experience = 6;
        assert!(CrewMember::new(candidate).unwrap().is_experienced());
    }

    #[test]
    fn member_deserializes_with_lowercase_rank() {
        let json = r#"{
            "member_id": "J002_M",
            "name": "John Smith",
            "rank": "lieutenant",
            "age": 40,
            "specialization": "Navigation",
            "years_experience": 12
        }"#;

        let member: CrewMember = serde_json::from_str(json).unwrap();
        assert_eq!(member.rank(), Rank::Lieutenant);
        assert!(member.is_active());
    }
}
