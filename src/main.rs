//! # orbital-registry demonstration entry point
//!
//! Builds one valid and one deliberately invalid record per family and
//! prints either the record or the violation message.

use clap::{Parser, ValueEnum};

use orbital_registry::config::{AppConfig, LogFormat};
use orbital_registry::domain::contact::{AlienContact, ContactType, NewContact};
use orbital_registry::domain::foundation::Violation;
use orbital_registry::domain::mission::{CrewMember, NewCrewMember, NewMission, Rank, SpaceMission};
use orbital_registry::domain::station::{NewStation, SpaceStation};

/// Validate sample station, contact, and mission records.
#[derive(Parser, Debug)]
#[command(name = "orbital-registry", version, about)]
struct Cli {
    /// Which record family to demonstrate.
    #[arg(value_enum, default_value_t = Family::All)]
    family: Family,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Family {
    Station,
    Contact,
    Mission,
    All,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config);

    tracing::debug!(family = ?cli.family, "starting demonstration");

    if matches!(cli.family, Family::Station | Family::All) {
        station_demo()?;
    }
    if matches!(cli.family, Family::Contact | Family::All) {
        contact_demo()?;
    }
    if matches!(cli.family, Family::Mission | Family::All) {
        mission_demo()?;
    }

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.logging.env_filter())
        .with_writer(std::io::stderr);

    match config.logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn rule() {
    println!("{}", "=".repeat(40));
}

fn status_label(is_operational: bool) -> &'static str {
    if is_operational {
        "Operational"
    } else {
        "non-operational"
    }
}

/// Renders a float so whole values keep their `.0`.
fn reading(value: f64) -> String {
    format!("{:?}", value)
}

fn report_violation(violation: &Violation) {
    println!("{}", violation.message());
}

fn station_demo() -> Result<(), Violation> {
    println!("\n== Space Station Data Validation ==\n");
    rule();

    let station = SpaceStation::new(
        NewStation::new("ISS001", "International Space Station", 6, 85.5, 92.3)
            .with_operational(true),
    )?;

    println!("Valid station created:");
    println!("ID: {}", station.station_id());
    println!("Name: {}", station.name());
    println!("Crew: {} people", station.crew_size());
    println!("Power: {}%", reading(station.power_level()));
    println!("Oxygen: {}%", reading(station.oxygen_level()));
    println!("Status: {}", status_label(station.is_operational()));

    println!("\n");
    println!("Invalid station created:");
    let rejected = SpaceStation::new(
        NewStation::new("ABB002", "Uneverse Space Station", 24, 95.5, 92.3).with_operational(false),
    );
    if let Err(violation) = rejected {
        report_violation(&violation);
    }

    Ok(())
}

fn contact_demo() -> Result<(), Violation> {
    println!("\nAlien Contact Log Validation");
    rule();

    let report = AlienContact::new(
        NewContact::new("AC_2024_001", "Area 51, Nevada", ContactType::Radio, 8.5, 45, 5)
            .with_message("Greetings from Zeta Reticuli"),
    )?;

    println!("Valid contact report:");
    println!("ID: {}", report.contact_id());
    println!("Type: {}", report.contact_type());
    println!("Location: {}", report.location());
    println!("Signal: {}/10", reading(report.signal_strength()));
    println!("Duration: {} minutes", report.duration_minutes());
    println!("Witnesses: {}", report.witness_count());
    if let Some(message) = report.message_received() {
        println!("Message: '{}'", message);
    }

    println!();
    rule();
    println!("Expected validation error:");
    let rejected = AlienContact::new(
        NewContact::new("AC_2024_001", "Area 57, Nevada", ContactType::Telepathic, 3.12, 12, 2)
            .with_message("Greetings from Finn The Human"),
    );
    if let Err(violation) = rejected {
        report_violation(&violation);
    }

    Ok(())
}

fn mission_demo() -> Result<(), Violation> {
    println!("\nSpace Mission Crew Validation");
    rule();

    let crew = vec![
        CrewMember::new(NewCrewMember::new(
            "M001_M",
            "Sarah Connor",
            Rank::Commander,
            55,
            "Mission Command",
            30,
        ))?,
        CrewMember::new(NewCrewMember::new(
            "J002_M",
            "John Smith",
            Rank::Lieutenant,
            40,
            "Navigation",
            12,
        ))?,
        CrewMember::new(NewCrewMember::new(
            "A003_M",
            "Alice Johnson",
            Rank::Officer,
            31,
            "Engineering",
            8,
        ))?,
    ];

    let colony = SpaceMission::new(NewMission::new(
        "M2024_MARS",
        "Mars Colony Establishment",
        "Mars",
        900,
        crew,
        2500.0,
    ))?;

    println!("Valid mission created:");
    println!("Mission: {}", colony.mission_name());
    println!("ID: {}", colony.mission_id());
    println!("Destination: {}", colony.destination());
    println!("Duration: {} days", colony.duration_days());
    println!("Budget: {} M", reading(colony.budget_millions()));
    println!("Crew size: {}", colony.crew_size());
    println!("Crew members: ");
    for member in colony.crew() {
        println!("- {} ({}) - {}", member.name(), member.rank(), member.specialization());
    }
    println!();
    rule();

    println!("Expected validation error:");
    let finn = CrewMember::new(NewCrewMember::new(
        "X000_Z",
        "Finn the human",
        Rank::Officer,
        20,
        "Navigation",
        5,
    ))?;
    let rejected = SpaceMission::new(NewMission::new(
        "M2027_JAN",
        "Meta Exploration",
        "Meta",
        999,
        vec![finn],
        5500.0,
    ));
    if let Err(violation) = rejected {
        report_violation(&violation);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_label_matches_report_wording() {
        assert_eq!(status_label(true), "Operational");
        assert_eq!(status_label(false), "non-operational");
    }

    #[test]
    fn whole_number_readings_keep_their_decimal_point() {
        assert_eq!(reading(2500.0), "2500.0");
        assert_eq!(reading(85.5), "85.5");
        assert_eq!(reading(100.0), "100.0");
    }

    #[test]
    fn family_defaults_to_all() {
        let cli = Cli::parse_from(["orbital-registry"]);
        assert_eq!(cli.family, Family::All);

        let cli = Cli::parse_from(["orbital-registry", "mission"]);
        assert_eq!(cli.family, Family::Mission);
    }
}
