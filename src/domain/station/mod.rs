//! Station telemetry records.

mod aggregate;

pub use aggregate::{CrewSize, NewStation, SpaceStation, StationCode, StationName, StationNotes};
