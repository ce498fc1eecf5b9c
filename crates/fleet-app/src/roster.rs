//! Fleet roster loader from TOML
//!
//! ```toml
//! [[drivers]]
//! name = "Anna"
//! license = "C"
//!
//! [[vehicles]]
//! id = "truck-1"
//! kind = "truck"
//! tank_capacity = 80.0
//! max_speed = 120.0
//! longitude = 13.4
//! latitude = 52.5
//! load_capacity = 25.0
//! driver = "Anna"
//! ```

use std::fs;
use std::path::Path;

use fleet_domain::{
    Bus, EmployeeId, FleetVehicle, GeoPosition, LicenseRank, PassengerVehicle, Truck, Vehicle,
    VehicleKind,
};
use fleet_types::{ConfigError, Error, Result};
use serde::Deserialize;
use tracing::debug;

use crate::fleet::Fleet;

/// Container for parsing a roster file
#[derive(Debug, Deserialize)]
struct RosterConfig {
    #[serde(default)]
    drivers: Vec<DriverEntry>,
    #[serde(default)]
    vehicles: Vec<VehicleEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DriverEntry {
    name: String,
    license: char,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VehicleEntry {
    /// Generated when omitted
    id: Option<String>,
    kind: VehicleKind,
    tank_capacity: f64,
    max_speed: f64,
    longitude: f64,
    latitude: f64,
    tank_level: Option<f64>,
    /// Requirement for general vehicles; other kinds fix their own
    license: Option<char>,
    load_capacity: Option<f64>,
    seat_capacity: Option<usize>,
    /// Driver name from `[[drivers]]`
    driver: Option<String>,
    /// Names of drivers already aboard
    #[serde(default)]
    passengers: Vec<String>,
}

/// Load a fleet from a TOML roster file
pub fn load_from_file(path: &Path) -> Result<Fleet> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read roster {}: {}",
            path.display(),
            e
        )))
    })?;

    load_from_str(&content)
}

/// Load a fleet from a TOML string
pub fn load_from_str(toml_content: &str) -> Result<Fleet> {
    let config: RosterConfig = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse roster TOML: {}",
            e
        )))
    })?;

    let mut fleet = Fleet::new();
    for entry in &config.drivers {
        fleet.register_driver(&entry.name, entry.license)?;
    }

    for entry in &config.vehicles {
        let vehicle = build_vehicle(entry)?;
        let id = match &entry.id {
            Some(id) => {
                fleet.add_vehicle(id, vehicle)?;
                id.clone()
            }
            None => fleet.register_vehicle(vehicle),
        };

        if let Some(name) = &entry.driver {
            let driver = employee_named(&fleet, name)?;
            fleet.assign_driver(&id, Some(driver))?;
        }
        for name in &entry.passengers {
            let passenger = employee_named(&fleet, name)?;
            if !fleet.board(&id, passenger)? {
                return Err(Error::InvalidInput(format!(
                    "vehicle {}: no free seat for {}",
                    id, name
                )));
            }
        }
    }

    debug!(
        drivers = fleet.drivers().len(),
        vehicles = fleet.count(),
        "roster loaded"
    );
    Ok(fleet)
}

fn employee_named(fleet: &Fleet, name: &str) -> Result<EmployeeId> {
    fleet
        .driver_by_name(name)
        .map(|d| d.id())
        .ok_or_else(|| Error::UnknownEmployee(name.to_string()))
}

fn build_vehicle(entry: &VehicleEntry) -> Result<FleetVehicle> {
    let label = entry.id.as_deref().unwrap_or("(unnamed)");
    let missing = |field: &str| {
        Error::InvalidInput(format!(
            "vehicle {}: {} requires `{}`",
            label, entry.kind, field
        ))
    };
    let has_seats = matches!(entry.kind, VehicleKind::Passenger | VehicleKind::Bus);
    let misplaced = [
        ("license", entry.license.is_some() && entry.kind != VehicleKind::General),
        ("load_capacity", entry.load_capacity.is_some() && entry.kind != VehicleKind::Truck),
        ("seat_capacity", entry.seat_capacity.is_some() && !has_seats),
        ("passengers", !entry.passengers.is_empty() && !has_seats),
    ];
    if let Some((field, _)) = misplaced.into_iter().find(|(_, set)| *set) {
        return Err(Error::InvalidInput(format!(
            "vehicle {}: `{}` does not apply to {}",
            label, field, entry.kind
        )));
    }
    let position = GeoPosition::new(entry.longitude, entry.latitude)?;

    let mut vehicle: FleetVehicle = match entry.kind {
        VehicleKind::General => {
            let grade = entry.license.ok_or_else(|| missing("license"))?;
            Vehicle::new(
                entry.tank_capacity,
                entry.max_speed,
                position,
                LicenseRank::from_char(grade)?,
            )?
            .into()
        }
        VehicleKind::Truck => {
            let load_capacity = entry.load_capacity.ok_or_else(|| missing("load_capacity"))?;
            Truck::new(entry.tank_capacity, entry.max_speed, position, load_capacity)?.into()
        }
        VehicleKind::Passenger => {
            let seats = entry.seat_capacity.ok_or_else(|| missing("seat_capacity"))?;
            PassengerVehicle::new(entry.tank_capacity, entry.max_speed, position, seats)?.into()
        }
        VehicleKind::Bus => {
            let seats = entry.seat_capacity.ok_or_else(|| missing("seat_capacity"))?;
            Bus::new(entry.tank_capacity, entry.max_speed, position, seats)?.into()
        }
    };

    if let Some(level) = entry.tank_level {
        vehicle.vehicle_mut().set_tank_level(level)?;
    }
    Ok(vehicle)
}
