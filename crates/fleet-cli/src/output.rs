//! Output formatting module

use fleet_domain::service::{TripEstimate, VehicleStatus};
use fleet_domain::GeoPosition;
use fleet_types::{OutputFormat, Result};
use serde::Serialize;

/// Result of the `distance` command
#[derive(Debug, Serialize)]
pub struct DistanceResult {
    pub from: GeoPosition,
    pub to: GeoPosition,
    pub distance_km: f64,
    pub fuel_needed: f64,
}

/// Result of the `drive` command
#[derive(Debug, Serialize)]
pub struct DriveResult {
    pub vehicle: String,
    pub from: GeoPosition,
    pub to: GeoPosition,
    pub distance_km: f64,
    pub tank_level: f64,
    pub tank_capacity: f64,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

pub fn output_distance(output_format: OutputFormat, result: &DistanceResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(result);
    }
    println!("From:            {}", result.from);
    println!("To:              {}", result.to);
    println!("Distance:        {:.1} km", result.distance_km);
    println!("Fuel needed:     {:.2}", result.fuel_needed);
    Ok(())
}

pub fn output_trip(output_format: OutputFormat, vehicle: &str, trip: &TripEstimate) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(trip);
    }
    println!("\nTrip Plan: {}", vehicle);
    println!("===============");
    println!("From:            {}", trip.from);
    println!("To:              {}", trip.to);
    println!("Distance:        {:.1} km", trip.distance_km);
    println!("Fuel needed:     {:.2}", trip.fuel_needed);
    println!("Fuel on board:   {:.2}", trip.fuel_available);
    println!(
        "Reachable:       {}",
        if trip.reachable { "Yes" } else { "No" }
    );
    if !trip.reachable {
        println!(
            "Short by:        {:.2}",
            trip.fuel_needed - trip.fuel_available
        );
    }
    Ok(())
}

pub fn output_status(
    output_format: OutputFormat,
    statuses: &[VehicleStatus],
    report: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&statuses);
    }
    print!("{}", report);
    Ok(())
}

pub fn output_drive(output_format: OutputFormat, result: &DriveResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(result);
    }
    println!("\nTrip Completed: {}", result.vehicle);
    println!("===============");
    println!("From:            {}", result.from);
    println!("To:              {}", result.to);
    println!("Distance:        {:.1} km", result.distance_km);
    println!(
        "Tank:            {:.1}/{:.1}",
        result.tank_level, result.tank_capacity
    );
    Ok(())
}
