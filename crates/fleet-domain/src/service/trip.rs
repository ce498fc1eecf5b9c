//! Trip planning without moving the vehicle

use serde::Serialize;

use crate::constants::{distance_for_fuel, fuel_for_distance};
use crate::model::{GeoPosition, Vehicle};

/// What a `drive` to some destination would cost
#[derive(Debug, Clone, Serialize)]
pub struct TripEstimate {
    pub from: GeoPosition,
    pub to: GeoPosition,
    pub distance_km: f64,
    pub fuel_needed: f64,
    pub fuel_available: f64,
    /// Enough fuel on board for the whole trip (engine state not considered)
    pub reachable: bool,
}

pub fn estimate_trip(vehicle: &Vehicle, destination: GeoPosition) -> TripEstimate {
    let from = vehicle.position();
    let distance_km = GeoPosition::distance_km(&from, &destination);
    let fuel_needed = fuel_for_distance(distance_km);
    let fuel_available = vehicle.tank_level();
    TripEstimate {
        from,
        to: destination,
        distance_km,
        fuel_needed,
        fuel_available,
        reachable: fuel_available > 0.0 && fuel_available >= fuel_needed,
    }
}

/// Distance the vehicle can cover on its current tank
pub fn range_km(vehicle: &Vehicle) -> f64 {
    distance_for_fuel(vehicle.tank_level())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LicenseRank;

    fn berlin_car(fuel: f64) -> Vehicle {
        let berlin = GeoPosition::new(13.4, 52.5).unwrap();
        let mut v = Vehicle::new(100.0, 180.0, berlin, LicenseRank::B).unwrap();
        v.refuel(fuel).unwrap();
        v
    }

    fn paris() -> GeoPosition {
        GeoPosition::new(2.3, 48.8).unwrap()
    }

    #[test]
    fn test_estimate_reachable() {
        let v = berlin_car(100.0);
        let est = estimate_trip(&v, paris());
        assert!((est.distance_km - 878.0).abs() < 20.0);
        assert!((est.fuel_needed - est.distance_km / 10.0).abs() < 1e-9);
        assert!(est.reachable);
    }

    #[test]
    fn test_estimate_unreachable() {
        let v = berlin_car(50.0);
        let est = estimate_trip(&v, paris());
        assert!(!est.reachable);
        assert_eq!(est.fuel_available, 50.0);
    }

    #[test]
    fn test_empty_tank_never_reachable() {
        let v = berlin_car(0.0);
        let est = estimate_trip(&v, v.position());
        assert_eq!(est.distance_km, 0.0);
        assert!(!est.reachable);
    }

    #[test]
    fn test_estimate_matches_drive() {
        let mut v = berlin_car(100.0);
        let est = estimate_trip(&v, paris());
        v.start_engine();
        let km = v.drive(paris()).unwrap();
        assert!((km - est.distance_km).abs() < 1e-9);
        assert!((v.tank_level() - (est.fuel_available - est.fuel_needed)).abs() < 1e-9);
    }

    #[test]
    fn test_range() {
        assert_eq!(range_km(&berlin_car(25.0)), 250.0);
        assert_eq!(range_km(&berlin_car(0.0)), 0.0);
    }
}
