//! Mission and crew roster records.
//!
//! - `CrewMember` - individually validated crew record
//! - `SpaceMission` - mission aggregate owning 1-12 crew members
//! - `MissionRule` - ordered cross-field rules over the mission and its crew

mod aggregate;
mod crew_member;
mod rank;
mod rules;

pub use aggregate::{
    BudgetMillions, BudgetRange, Crew, Destination, DurationDays, MissionCode, MissionName,
    NewMission, SpaceMission, DEFAULT_MISSION_STATUS,
};
pub use crew_member::{
    Age, CrewMember, MemberCode, MemberName, NewCrewMember, Specialization, YearsExperience,
    EXPERIENCED_AFTER_YEARS,
};
pub use rank::Rank;
pub use rules::{MissionRule, LONG_MISSION_DAYS, MISSION_ID_PREFIX};
