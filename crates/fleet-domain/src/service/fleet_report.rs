//! Fleet status summary and text report

use serde::Serialize;

use crate::constants::LOW_FUEL_RATIO;
use crate::model::{FleetVehicle, GeoPosition, LicenseRank, VehicleKind};
use crate::repository::EmployeeId;

/// Snapshot of a single vehicle for reporting
#[derive(Debug, Clone, Serialize)]
pub struct VehicleStatus {
    pub id: String,
    pub kind: VehicleKind,
    pub tank_level: f64,
    pub tank_capacity: f64,
    pub low_fuel: bool,
    pub engine_on: bool,
    pub current_speed: f64,
    pub position: GeoPosition,
    pub license_requirement: LicenseRank,
    pub driver: Option<EmployeeId>,
    /// (loaded, capacity) for trucks
    pub cargo: Option<(f64, f64)>,
    /// (passengers, seats) for passenger vehicles and buses
    pub seats: Option<(usize, usize)>,
}

pub fn summarize_vehicle(id: &str, vehicle: &FleetVehicle) -> VehicleStatus {
    let chassis = vehicle.vehicle();
    VehicleStatus {
        id: id.to_string(),
        kind: chassis.kind(),
        tank_level: chassis.tank_level(),
        tank_capacity: chassis.tank_capacity(),
        low_fuel: chassis.fuel_ratio() <= LOW_FUEL_RATIO,
        engine_on: chassis.is_engine_on(),
        current_speed: chassis.current_speed(),
        position: chassis.position(),
        license_requirement: chassis.license_requirement(),
        driver: chassis.driver().map(|d| d.id),
        cargo: vehicle
            .cargo()
            .map(|t| (t.loaded_amount(), t.load_capacity())),
        seats: vehicle
            .cabin()
            .map(|c| (c.passenger_count(), c.seat_capacity())),
    }
}

pub fn generate_fleet_report(statuses: &[VehicleStatus]) -> String {
    let total = statuses.len();
    let count_kind = |kind: VehicleKind| statuses.iter().filter(|s| s.kind == kind).count();
    let driverless = statuses.iter().filter(|s| s.driver.is_none()).count();
    let low_fuel = statuses.iter().filter(|s| s.low_fuel).count();

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("               Fleet Status Report                \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Vehicles:            {}\n", total));
    report.push_str(&format!("    General:           {}\n", count_kind(VehicleKind::General)));
    report.push_str(&format!("    Trucks:            {}\n", count_kind(VehicleKind::Truck)));
    report.push_str(&format!("    Passenger:         {}\n", count_kind(VehicleKind::Passenger)));
    report.push_str(&format!("    Buses:             {}\n", count_kind(VehicleKind::Bus)));
    report.push_str(&format!("  Without driver:      {}\n", driverless));
    report.push_str(&format!("  Low on fuel:         {}\n", low_fuel));
    report.push('\n');

    if total > 0 {
        report.push_str("[Vehicles]\n");
        report.push_str("-".repeat(78).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<12} {:<16} {:>13} {:>7} {:<4} {:<8} {:>12}\n",
            "ID", "Kind", "Fuel", "Speed", "Lic", "Driver", "Load/Seats"
        ));
        report.push_str("-".repeat(78).as_str());
        report.push('\n');
        for s in statuses {
            let fuel = format!("{:.1}/{:.1}", s.tank_level, s.tank_capacity);
            let driver = s
                .driver
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string());
            let payload = match (s.cargo, s.seats) {
                (Some((loaded, cap)), _) => format!("{:.1}/{:.1}", loaded, cap),
                (_, Some((count, seats))) => format!("{}/{}", count, seats),
                _ => "-".to_string(),
            };
            report.push_str(&format!(
                "{:<12} {:<16} {:>13} {:>7.1} {:<4} {:<8} {:>12}{}\n",
                truncate_str(&s.id, 11),
                s.kind.label(),
                fuel,
                s.current_speed,
                s.license_requirement.as_char(),
                driver,
                payload,
                if s.low_fuel { "  (low fuel)" } else { "" }
            ));
        }
        report.push('\n');
    } else {
        report.push_str("[No vehicles registered]\n\n");
    }

    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
