//! Space mission aggregate.
//!
//! # Ownership
//!
//! A mission owns its crew outright. Members are moved in at construction
//! and are only readable afterwards.

use serde::{Deserialize, Serialize};

use super::{CrewMember, MissionRule};
use crate::domain::foundation::{
    check_rules, BoundedFloat, BoundedInt, BoundedText, BoundedVec, FloatRange, Timestamp,
    Violation,
};

pub type MissionCode = BoundedText<5, 15>;
pub type MissionName = BoundedText<3, 100>;
pub type Destination = BoundedText<3, 50>;
pub type DurationDays = BoundedInt<1, 3650>;
pub type Crew = BoundedVec<CrewMember, 1, 12>;

/// Range marker for mission budgets, `1.0..=10000.0` million.
#[derive(Debug)]
pub enum BudgetRange {}

impl FloatRange for BudgetRange {
    const MIN: f64 = 1.0;
    const MAX: f64 = 10000.0;
}

pub type BudgetMillions = BoundedFloat<BudgetRange>;

/// Status given to missions that do not specify one.
pub const DEFAULT_MISSION_STATUS: &str = "planned";

/// Raw field values for a mission, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewMission {
    pub mission_id: String,
    pub mission_name: String,
    pub destination: String,
    /// Defaults to now.
    pub launch_date: Option<Timestamp>,
    pub duration_days: i64,
    pub crew: Vec<CrewMember>,
    /// Defaults to [`DEFAULT_MISSION_STATUS`].
    pub mission_status: Option<String>,
    pub budget_millions: f64,
}

impl NewMission {
    /// Creates a candidate with every defaulted field left unset.
    pub fn new(
        mission_id: impl Into<String>,
        mission_name: impl Into<String>,
        destination: impl Into<String>,
        duration_days: i64,
        crew: Vec<CrewMember>,
        budget_millions: f64,
    ) -> Self {
        Self {
            mission_id: mission_id.into(),
            mission_name: mission_name.into(),
            destination: destination.into(),
            launch_date: None,
            duration_days,
            crew,
            mission_status: None,
            budget_millions,
        }
    }

    pub fn with_launch_date(mut self, at: Timestamp) -> Self {
        self.launch_date = Some(at);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.mission_status = Some(status.into());
        self
    }
}

/// A validated space mission with its crew roster.
///
/// # Invariants
///
/// - Every field is within its declared bound
/// - `crew` holds 1-12 already-valid members
/// - Every [`MissionRule`] holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewMission")]
pub struct SpaceMission {
    mission_id: MissionCode,
    mission_name: MissionName,
    destination: Destination,
    launch_date: Timestamp,
    duration_days: DurationDays,
    crew: Crew,
    mission_status: String,
    budget_millions: BudgetMillions,
}

impl SpaceMission {
    /// Validates a candidate and builds the mission.
    ///
    /// Field constraints are checked first, in declaration order; rules in
    /// [`MissionRule::ALL`] run only once every field is in bounds.
    ///
    /// # Errors
    ///
    /// - `Violation::Constraint` for the first out-of-bounds field
    /// - `Violation::Rule` for the first failing rule
    pub fn new(candidate: NewMission) -> Result<Self, Violation> {
        Self::build(candidate).inspect_err(|v| {
            tracing::debug!(
                record = "space_mission",
                identifier = v.identifier(),
                code = %v.code(),
                "candidate rejected"
            );
        })
    }

    fn build(candidate: NewMission) -> Result<Self, Violation> {
        let mission = Self {
            mission_id: MissionCode::try_new("mission_id", candidate.mission_id)?,
            mission_name: MissionName::try_new("mission_name", candidate.mission_name)?,
            destination: Destination::try_new("destination", candidate.destination)?,
            launch_date: candidate.launch_date.unwrap_or_default(),
            duration_days: DurationDays::try_new("duration_days", candidate.duration_days)?,
            crew: Crew::try_new("crew", candidate.crew)?,
            mission_status: candidate
                .mission_status
                .unwrap_or_else(|| DEFAULT_MISSION_STATUS.to_string()),
            budget_millions: BudgetMillions::try_new("budget_millions", candidate.budget_millions)?,
        };

        check_rules(&MissionRule::ALL, &mission)?;
        tracing::trace!(
            record = "space_mission",
            mission_id = mission.mission_id(),
            crew = mission.crew_size(),
            "candidate accepted"
        );
        Ok(mission)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn mission_id(&self) -> &str {
        self.mission_id.as_str()
    }

    pub fn mission_name(&self) -> &str {
        self.mission_name.as_str()
    }

    pub fn destination(&self) -> &str {
        self.destination.as_str()
    }

    pub fn launch_date(&self) -> &Timestamp {
        &self.launch_date
    }

    pub fn duration_days(&self) -> i64 {
        self.duration_days.value()
    }

    /// Returns the crew in roster order.
    pub fn crew(&self) -> &[CrewMember] {
        self.crew.as_slice()
    }

    pub fn crew_size(&self) -> usize {
        self.crew.len()
    }

    pub fn mission_status(&self) -> &str {
        &self.mission_status
    }

    pub fn budget_millions(&self) -> f64 {
        self.budget_millions.value()
    }

    /// Number of crew with more than five years of experience.
    pub fn experienced_crew(&self) -> usize {
        self.crew.iter().filter(|m| m.is_experienced()).count()
    }
}

impl TryFrom<NewMission> for SpaceMission {
    type Error = Violation;

    fn try_from(candidate: NewMission) -> Result<Self, Self::Error> {
        Self::new(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ConstraintReason, ViolationCategory};
    use crate::domain::mission::{NewCrewMember, Rank};

    fn member(id: &str, rank: Rank, years: i64) -> CrewMember {
        CrewMember::new(NewCrewMember::new(
            id,
            "Crew Person",
            rank,
            40,
            "Engineering",
            years,
        ))
        .unwrap()
    }

    fn mars() -> NewMission {
        NewMission::new(
            "M2024_MARS",
            "Mars Colony Establishment",
            "Mars",
            900,
            vec![
                member("M001_M", Rank::Commander, 30),
                member("J002_M", Rank::Lieutenant, 12),
                member("A003_M", Rank::Officer, 8),
            ],
            2500.0,
        )
    }

    #[test]
    fn valid_mission_keeps_supplied_values() {
        let mission = SpaceMission::new(mars()).unwrap();

        assert_eq!(mission.mission_id(), "M2024_MARS");
        assert_eq!(mission.mission_name(), "Mars Colony Establishment");
        assert_eq!(mission.destination(), "Mars");
        assert_eq!(mission.duration_days(), 900);
        assert_eq!(mission.crew_size(), 3);
        assert_eq!(mission.crew()[1].member_id(), "J002_M");
        assert_eq!(mission.budget_millions(), 2500.0);
        assert_eq!(mission.experienced_crew(), 3);
    }

    #[test]
    fn status_defaults_to_planned() {
        let mission = SpaceMission::new(mars()).unwrap();
        assert_eq!(mission.mission_status(), "planned");

        let mission = SpaceMission::new(mars().with_status("launched")).unwrap();
        assert_eq!(mission.mission_status(), "launched");
    }

    #[test]
    fn empty_crew_is_a_constraint_violation() {
        let mut candidate = mars();
        candidate.crew.clear();

        let err = SpaceMission::new(candidate).unwrap_err();

        assert_eq!(err.category(), ViolationCategory::Constraint);
        assert_eq!(err.identifier(), "crew");
        assert_eq!(
            err.as_constraint().map(|c| c.reason.clone()),
            Some(ConstraintReason::TooFewItems { min: 1, actual: 0 })
        );
    }

    #[test]
    fn thirteen_crew_is_a_constraint_violation() {
        let mut candidate = mars();
        candidate.crew = (0..13)
            .map(|i| member(&format!("C{:03}", i), Rank::Captain, 10))
            .collect();
        assert_eq!(SpaceMission::new(candidate).unwrap_err().identifier(), "crew");
    }

    #[test]
    fn twelve_crew_is_accepted() {
        let mut candidate = mars();
        candidate.crew = (0..12)
            .map(|i| member(&format!("C{:03}", i), Rank::Captain, 10))
            .collect();
        assert_eq!(SpaceMission::new(candidate).unwrap().crew_size(), 12);
    }

    #[test]
    fn crew_is_checked_before_budget() {
        let mut candidate = mars();
        candidate.crew.clear();
        candidate.budget_millions = 0.5;
        assert_eq!(SpaceMission::new(candidate).unwrap_err().identifier(), "crew");
    }

    #[test]
    fn budget_bounds_are_inclusive() {
        let mut low = mars();
        low.budget_millions = 1.0;
        let mut high = mars();
        high.budget_millions = 10000.0;
        let mut over = mars();
        over.budget_millions = 10000.5;

        assert!(SpaceMission::new(low).is_ok());
        assert!(SpaceMission::new(high).is_ok());
        assert_eq!(SpaceMission::new(over).unwrap_err().identifier(), "budget_millions");
    }

    #[test]
    fn mission_serializes_crew_in_order() {
        let mission = SpaceMission::new(mars()).unwrap();
        let json = serde_json::to_value(&mission).unwrap();

        assert_eq!(json["crew"][0]["rank"], "commander");
        assert_eq!(json["crew"][2]["member_id"], "A003_M");
        assert_eq!(json["mission_status"], "planned");
    }
}
