//! Space station telemetry record.
//!
//! Stations have no cross-field rules; every field is bounded on its own.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BoundedInt, BoundedText, Percentage, Timestamp, Violation};

pub type StationCode = BoundedText<3, 10>;
pub type StationName = BoundedText<1, 50>;
pub type CrewSize = BoundedInt<1, 20>;
pub type StationNotes = BoundedText<0, 200>;

/// Raw field values for a station, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewStation {
    pub station_id: String,
    pub name: String,
    pub crew_size: i64,
    pub power_level: f64,
    pub oxygen_level: f64,
    /// Defaults to now.
    pub last_maintenance: Option<Timestamp>,
    /// Defaults to true.
    pub is_operational: Option<bool>,
    pub notes: Option<String>,
}

impl NewStation {
    /// Creates a candidate with every defaulted field left unset.
    pub fn new(
        station_id: impl Into<String>,
        name: impl Into<String>,
        crew_size: i64,
        power_level: f64,
        oxygen_level: f64,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            name: name.into(),
            crew_size,
            power_level,
            oxygen_level,
            last_maintenance: None,
            is_operational: None,
            notes: None,
        }
    }

    pub fn with_last_maintenance(mut self, at: Timestamp) -> Self {
        self.last_maintenance = Some(at);
        self
    }

    pub fn with_operational(mut self, is_operational: bool) -> Self {
        self.is_operational = Some(is_operational);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A validated space station.
///
/// # Invariants
///
/// - `station_id` is 3-10 characters
/// - `name` is 1-50 characters
/// - `crew_size` is 1-20
/// - `power_level` and `oxygen_level` are 0.0-100.0
/// - `notes`, when present, is at most 200 characters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewStation")]
pub struct SpaceStation {
    station_id: StationCode,
    name: StationName,
    crew_size: CrewSize,
    power_level: Percentage,
    oxygen_level: Percentage,
    last_maintenance: Timestamp,
    is_operational: bool,
    notes: Option<StationNotes>,
}

impl SpaceStation {
    /// Validates a candidate and builds the station.
    ///
    /// # Errors
    ///
    /// - `Violation::Constraint` naming the first field (in declaration order)
    ///   that is out of bounds
    pub fn new(candidate: NewStation) -> Result<Self, Violation> {
        Self::build(candidate).inspect_err(|v| {
            tracing::debug!(
                record = "space_station",
                identifier = v.identifier(),
                code = %v.code(),
                "candidate rejected"
            );
        })
    }

    fn build(candidate: NewStation) -> Result<Self, Violation> {
        let station_id = StationCode::try_new("station_id", candidate.station_id)?;
        let name = StationName::try_new("name", candidate.name)?;
        let crew_size = CrewSize::try_new("crew_size", candidate.crew_size)?;
        let power_level = Percentage::try_new("power_level", candidate.power_level)?;
        let oxygen_level = Percentage::try_new("oxygen_level", candidate.oxygen_level)?;
        let notes = StationNotes::try_optional("notes", candidate.notes)?;

        let station = Self {
            station_id,
            name,
            crew_size,
            power_level,
            oxygen_level,
            last_maintenance: candidate.last_maintenance.unwrap_or_default(),
            is_operational: candidate.is_operational.unwrap_or(true),
            notes,
        };

        tracing::trace!(
            record = "space_station",
            station_id = station.station_id(),
            "candidate accepted"
        );
        Ok(station)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn station_id(&self) -> &str {
        self.station_id.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn crew_size(&self) -> i64 {
        self.crew_size.value()
    }

    pub fn power_level(&self) -> f64 {
        self.power_level.value()
    }

    pub fn oxygen_level(&self) -> f64 {
        self.oxygen_level.value()
    }

    pub fn last_maintenance(&self) -> &Timestamp {
        &self.last_maintenance
    }

    pub fn is_operational(&self) -> bool {
        self.is_operational
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_ref().map(StationNotes::as_str)
    }
}

impl TryFrom<NewStation> for SpaceStation {
    type Error = Violation;

    fn try_from(candidate: NewStation) -> Result<Self, Self::Error> {
        Self::new(candidate)
    }
}
