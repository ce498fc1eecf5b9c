//! Physical constants used by the movement model

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance covered per unit of fuel
pub const KM_PER_FUEL_UNIT: f64 = 10.0;

/// Tank fraction at or below which a vehicle counts as low on fuel
pub const LOW_FUEL_RATIO: f64 = 0.1;

/// Fuel units consumed for a trip of the given length
pub fn fuel_for_distance(distance_km: f64) -> f64 {
    distance_km / KM_PER_FUEL_UNIT
}

/// Distance reachable with the given amount of fuel
pub fn distance_for_fuel(fuel: f64) -> f64 {
    fuel * KM_PER_FUEL_UNIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_for_distance() {
        assert!((fuel_for_distance(878.0) - 87.8).abs() < 1e-9);
        assert_eq!(fuel_for_distance(0.0), 0.0);
    }

    #[test]
    fn test_distance_for_fuel_inverts_consumption() {
        let fuel = fuel_for_distance(123.4);
        assert!((distance_for_fuel(fuel) - 123.4).abs() < 1e-9);
    }
}
