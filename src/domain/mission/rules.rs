//! Business rules for missions.

use super::{CrewMember, SpaceMission};
use crate::domain::foundation::BusinessRule;

/// Every mission ID starts with this letter.
pub const MISSION_ID_PREFIX: &str = "M";

/// Missions longer than this many days need an experienced crew.
pub const LONG_MISSION_DAYS: i64 = 365;

/// Cross-field rules for [`SpaceMission`], in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissionRule {
    MissionIdPrefix,
    CommandOfficerPresent,
    LongMissionExperience,
    CrewAllActive,
}

impl MissionRule {
    /// All rules in the order they are evaluated.
    pub const ALL: [MissionRule; 4] = [
        MissionRule::MissionIdPrefix,
        MissionRule::CommandOfficerPresent,
        MissionRule::LongMissionExperience,
        MissionRule::CrewAllActive,
    ];
}

impl BusinessRule<SpaceMission> for MissionRule {
    fn name(&self) -> &'static str {
        match self {
            MissionRule::MissionIdPrefix => "mission_id_prefix",
            MissionRule::CommandOfficerPresent => "command_officer_present",
            MissionRule::LongMissionExperience => "long_mission_experience",
            MissionRule::CrewAllActive => "crew_all_active",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            MissionRule::MissionIdPrefix => "Mission ID must start with 'M'",
            MissionRule::CommandOfficerPresent => {
                "Mission must have at least one Commander or Captain"
            }
            MissionRule::LongMissionExperience => {
                "Long missions (>365 days) require at least 50% experienced crew (5+ years)"
            }
            MissionRule::CrewAllActive => "All crew members must be active",
        }
    }

    fn holds(&self, mission: &SpaceMission) -> bool {
        match self {
            MissionRule::MissionIdPrefix => mission.mission_id().starts_with(MISSION_ID_PREFIX),
            MissionRule::CommandOfficerPresent => {
                mission.crew().iter().any(|m| m.rank().can_command())
            }
            MissionRule::LongMissionExperience => {
                // experienced < total / 2 fails; doubled to stay in integers.
                mission.duration_days() <= LONG_MISSION_DAYS
                    || mission.experienced_crew() * 2 >= mission.crew_size()
            }
            MissionRule::CrewAllActive => mission.crew().iter().all(CrewMember::is_active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ViolationCategory;
    use crate::domain::mission::{NewCrewMember, NewMission, Rank};

    fn member(rank: Rank, years: i64) -> CrewMember {
        CrewMember::new(NewCrewMember::new(
            "X000_Z",
            "Finn the human",
            rank,
            20,
            "Navigation",
            years,
        ))
        .unwrap()
    }

    fn mission(id: &str, days: i64, crew: Vec<CrewMember>) -> NewMission {
        NewMission::new(id, "Meta Exploration", "Meta", days, crew, 5500.0)
    }

    fn rule_of(candidate: NewMission) -> &'static str {
        let err = SpaceMission::new(candidate).unwrap_err();
        assert_eq!(err.category(), ViolationCategory::Rule);
        err.identifier()
    }

    #[test]
    fn rules_are_listed_in_evaluation_order() {
        let names: Vec<&str> = MissionRule::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                "mission_id_prefix",
                "command_officer_present",
                "long_mission_experience",
                "crew_all_active",
            ]
        );
    }

    #[test]
    fn id_without_prefix_fails() {
        let candidate = mission("X2027_JAN", 100, vec![member(Rank::Captain, 10)]);
        assert_eq!(rule_of(candidate), "mission_id_prefix");
    }

    #[test]
    fn lowercase_prefix_does_not_count() {
        let candidate = mission("m2027_JAN", 100, vec![member(Rank::Captain, 10)]);
        assert_eq!(rule_of(candidate), "mission_id_prefix");
    }

    #[test]
    fn crew_without_captain_or_commander_fails() {
        let candidate = mission("M2027_JAN", 100, vec![member(Rank::Lieutenant, 10)]);
        assert_eq!(rule_of(candidate), "command_officer_present");
    }

    #[test]
    fn captain_alone_satisfies_command_rule() {
        let candidate = mission("M2027_JAN", 100, vec![member(Rank::Captain, 1)]);
        assert!(SpaceMission::new(candidate).is_ok());
    }

    #[test]
    fn short_mission_ignores_experience() {
        let candidate = mission("M2027_JAN", 365, vec![member(Rank::Commander, 0)]);
        assert!(SpaceMission::new(candidate).is_ok());
    }

    #[test]
    fn long_mission_with_inexperienced_majority_fails() {
        let candidate = mission(
            "M2027_JAN",
            366,
            vec![
                member(Rank::Commander, 10),
                member(Rank::Cadet, 1),
                member(Rank::Cadet, 5),
            ],
        );
        assert_eq!(rule_of(candidate), "long_mission_experience");
    }

    #[test]
    fn long_mission_with_exactly_half_experienced_passes() {
        let candidate = mission(
            "M2027_JAN",
            999,
            vec![member(Rank::Commander, 10), member(Rank::Cadet, 1)],
        );
        assert!(SpaceMission::new(candidate).is_ok());
    }

    #[test]
    fn odd_crew_needs_more_than_half_rounded_down() {
        // 1 of 3 experienced: 1 < 1.5 fails. 2 of 3 passes.
        let one_of_three = mission(
            "M2027_JAN",
            999,
            vec![member(Rank::Commander, 10), member(Rank::Cadet, 1), member(Rank::Cadet, 1)],
        );
        let two_of_three = mission(
            "M2027_JAN",
            999,
            vec![member(Rank::Commander, 10), member(Rank::Officer, 6), member(Rank::Cadet, 1)],
        );

        assert_eq!(rule_of(one_of_three), "long_mission_experience");
        assert!(SpaceMission::new(two_of_three).is_ok());
    }

    #[test]
    fn inactive_member_fails_whole_mission() {
        let inactive = CrewMember::new(
            NewCrewMember::new("A003_M", "Alice Johnson", Rank::Officer, 31, "Engineering", 8)
                .with_active(false),
        )
        .unwrap();
        let candidate = mission("M2027_JAN", 100, vec![member(Rank::Commander, 30), inactive]);

        let err = SpaceMission::new(candidate).unwrap_err();

        assert_eq!(err.identifier(), "crew_all_active");
        assert_eq!(err.message(), "All crew members must be active");
    }

    #[test]
    fn command_rule_is_reported_before_experience_rule() {
        let candidate = mission("M2027_JAN", 999, vec![member(Rank::Officer, 5)]);
        assert_eq!(rule_of(candidate), "command_officer_present");
    }
}
