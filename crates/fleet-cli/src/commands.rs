//! Command handlers

use std::path::{Path, PathBuf};

use crate::cli::{Cli, Commands};
use crate::output::{
    output_distance, output_drive, output_status, output_trip, DistanceResult, DriveResult,
};
use fleet_app::config::Config;
use fleet_app::fleet::Fleet;
use fleet_app::{logging, roster};
use fleet_domain::constants::fuel_for_distance;
use fleet_domain::service::estimate_trip;
use fleet_domain::GeoPosition;
use fleet_types::{Error, OutputFormat, Result};
use tracing::{debug, info};

pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Distance { from, to } => {
            let (_, output_format) = setup(cli.format, cli.verbose)?;
            cmd_distance(from, to, output_format)
        }

        Commands::Plan {
            roster,
            vehicle,
            to,
        } => {
            let (_, output_format) = setup(cli.format, cli.verbose)?;
            cmd_plan(&roster, &vehicle, to, output_format)
        }

        Commands::Status { roster } => {
            let (config, output_format) = setup(cli.format, cli.verbose)?;
            let roster = resolve_roster(roster, &config)?;
            cmd_status(&roster, output_format)
        }

        Commands::Drive {
            roster,
            vehicle,
            to,
            refuel,
        } => {
            let (_, output_format) = setup(cli.format, cli.verbose)?;
            cmd_drive(&roster, &vehicle, to, refuel, output_format)
        }

        // Runs without loading the stored config so a broken file can be repaired
        Commands::Config {
            show,
            set_log_level,
            set_output,
            set_roster,
            reset,
        } => {
            let path = Config::config_path()?;
            cmd_config(&path, show, set_log_level, set_output, set_roster, reset)
        }
    }
}

/// Load config, install logging and pick the output format
fn setup(format: Option<OutputFormat>, verbose: bool) -> Result<(Config, OutputFormat)> {
    let config = Config::load()?;
    logging::init(logging::effective_level(&config.log_level, verbose));
    debug!(log_level = %config.log_level, "configuration loaded");
    let output_format = format.unwrap_or(config.output_format);
    Ok((config, output_format))
}

fn resolve_roster(roster: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    roster.or_else(|| config.roster_path.clone()).ok_or_else(|| {
        Error::InvalidInput(
            "No roster given. Pass one or set a default with: fleet-sim config --set-roster <file>"
                .to_string(),
        )
    })
}

fn load_fleet(path: &Path) -> Result<Fleet> {
    let fleet = roster::load_from_file(path)?;
    info!(
        roster = %path.display(),
        vehicles = fleet.count(),
        "roster loaded"
    );
    Ok(fleet)
}

fn cmd_distance(from: GeoPosition, to: GeoPosition, output_format: OutputFormat) -> Result<()> {
    let distance_km = GeoPosition::distance_km(&from, &to);
    let result = DistanceResult {
        from,
        to,
        distance_km,
        fuel_needed: fuel_for_distance(distance_km),
    };
    output_distance(output_format, &result)
}

fn cmd_plan(
    roster: &Path,
    vehicle_id: &str,
    to: GeoPosition,
    output_format: OutputFormat,
) -> Result<()> {
    let fleet = load_fleet(roster)?;
    let vehicle = fleet
        .vehicle(vehicle_id)
        .ok_or_else(|| Error::UnknownVehicle(vehicle_id.to_string()))?;
    let trip = estimate_trip(vehicle.vehicle(), to);
    output_trip(output_format, vehicle_id, &trip)
}

fn cmd_status(roster: &Path, output_format: OutputFormat) -> Result<()> {
    let fleet = load_fleet(roster)?;
    output_status(output_format, &fleet.statuses(), &fleet.report())
}

fn cmd_drive(
    roster: &Path,
    vehicle_id: &str,
    to: GeoPosition,
    refuel: Option<f64>,
    output_format: OutputFormat,
) -> Result<()> {
    let mut fleet = load_fleet(roster)?;
    let result = drive_vehicle(&mut fleet, vehicle_id, to, refuel)?;
    output_drive(output_format, &result)
}

/// Refuel, start, drive and park one vehicle of the fleet
fn drive_vehicle(
    fleet: &mut Fleet,
    vehicle_id: &str,
    to: GeoPosition,
    refuel: Option<f64>,
) -> Result<DriveResult> {
    let vehicle = fleet.require_vehicle_mut(vehicle_id)?.vehicle_mut();
    if let Some(amount) = refuel {
        vehicle.refuel(amount)?;
    }
    let from = vehicle.position();
    vehicle.start_engine();
    let distance_km = vehicle.drive(to)?;
    vehicle.stop_engine();

    Ok(DriveResult {
        vehicle: vehicle_id.to_string(),
        from,
        to,
        distance_km,
        tank_level: vehicle.tank_level(),
        tank_capacity: vehicle.tank_capacity(),
    })
}

fn cmd_config(
    path: &Path,
    show: bool,
    set_log_level: Option<String>,
    set_output: Option<OutputFormat>,
    set_roster: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save_to(path)?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load_from(path)?;
    let mut modified = false;

    if let Some(level) = set_log_level {
        config.set_log_level(&level)?;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(roster) = set_roster {
        config.roster_path = Some(roster);
        modified = true;
    }

    if modified {
        config.save_to(path)?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_types::VehicleError;
    use tempfile::tempdir;

    const ROSTER: &str = r#"
[[drivers]]
name = "Anna"
license = "C"

[[vehicles]]
id = "truck-1"
kind = "truck"
tank_capacity = 100.0
max_speed = 120.0
longitude = 13.4
latitude = 52.5
tank_level = 50.0
load_capacity = 25.0
driver = "Anna"
"#;

    fn paris() -> GeoPosition {
        GeoPosition::new(2.3, 48.8).unwrap()
    }

    fn write_roster(dir: &Path) -> PathBuf {
        let path = dir.join("fleet.toml");
        std::fs::write(&path, ROSTER).unwrap();
        path
    }

    #[test]
    fn test_drive_needs_enough_fuel() {
        let dir = tempdir().unwrap();
        let mut fleet = roster::load_from_file(&write_roster(dir.path())).unwrap();

        let err = drive_vehicle(&mut fleet, "truck-1", paris(), None).unwrap_err();
        assert!(matches!(
            err,
            Error::Vehicle(VehicleError::InsufficientFuel { .. })
        ));

        let result = drive_vehicle(&mut fleet, "truck-1", paris(), Some(50.0)).unwrap();
        assert!((result.distance_km - 878.0).abs() <= 20.0);
        assert!((result.tank_level - (100.0 - result.distance_km / 10.0)).abs() < 1e-9);

        let truck = fleet.vehicle("truck-1").unwrap().vehicle();
        assert_eq!(truck.position(), paris());
        assert!(!truck.is_engine_on());
    }

    #[test]
    fn test_drive_unknown_vehicle() {
        let mut fleet = Fleet::new();
        assert!(matches!(
            drive_vehicle(&mut fleet, "ghost", paris(), None),
            Err(Error::UnknownVehicle(_))
        ));
    }

    #[test]
    fn test_plan_and_status() {
        let dir = tempdir().unwrap();
        let path = write_roster(dir.path());
        assert!(cmd_plan(&path, "truck-1", paris(), OutputFormat::Json).is_ok());
        assert!(matches!(
            cmd_plan(&path, "bus-9", paris(), OutputFormat::Table),
            Err(Error::UnknownVehicle(_))
        ));
        assert!(cmd_status(&path, OutputFormat::Table).is_ok());
    }

    #[test]
    fn test_resolve_roster() {
        let mut config = Config::default();
        assert!(matches!(
            resolve_roster(None, &config),
            Err(Error::InvalidInput(_))
        ));

        config.roster_path = Some(PathBuf::from("default.toml"));
        assert_eq!(
            resolve_roster(None, &config).unwrap(),
            PathBuf::from("default.toml")
        );
        assert_eq!(
            resolve_roster(Some(PathBuf::from("other.toml")), &config).unwrap(),
            PathBuf::from("other.toml")
        );
    }

    #[test]
    fn test_config_updates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        cmd_config(
            &path,
            false,
            Some("info".to_string()),
            Some(OutputFormat::Json),
            Some(PathBuf::from("fleet.toml")),
            false,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.roster_path, Some(PathBuf::from("fleet.toml")));

        cmd_config(&path, false, None, None, None, true).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_config_repairs_unknown_level_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"log_level":"verbose"}"#).unwrap();

        cmd_config(&path, false, None, None, None, true).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        std::fs::write(&path, r#"{"log_level":"verbose"}"#).unwrap();
        cmd_config(&path, false, Some("warn".to_string()), None, None, false).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"warn\""), "{}", raw);
    }

    #[test]
    fn test_config_rejects_bad_level() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(cmd_config(&path, false, Some("loud".to_string()), None, None, false).is_err());
        assert!(!path.exists());
    }
}
