//! Heterogeneous vehicle wrapper

use std::fmt;

use serde::Serialize;

use crate::model::{Bus, PassengerVehicle, Truck, Vehicle, VehicleKind};

/// Any vehicle type, for collections holding a mixed fleet
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FleetVehicle {
    General(Vehicle),
    Truck(Truck),
    Passenger(PassengerVehicle),
    Bus(Bus),
}

impl FleetVehicle {
    pub fn kind(&self) -> VehicleKind {
        self.vehicle().kind()
    }

    /// Shared chassis state
    pub fn vehicle(&self) -> &Vehicle {
        match self {
            FleetVehicle::General(v) => v,
            FleetVehicle::Truck(t) => t.vehicle(),
            FleetVehicle::Passenger(p) => p.vehicle(),
            FleetVehicle::Bus(b) => b.vehicle(),
        }
    }

    pub fn vehicle_mut(&mut self) -> &mut Vehicle {
        match self {
            FleetVehicle::General(v) => v,
            FleetVehicle::Truck(t) => t.vehicle_mut(),
            FleetVehicle::Passenger(p) => p.vehicle_mut(),
            FleetVehicle::Bus(b) => b.vehicle_mut(),
        }
    }

    /// Cargo hold, for trucks
    pub fn cargo(&self) -> Option<&Truck> {
        match self {
            FleetVehicle::Truck(t) => Some(t),
            _ => None,
        }
    }

    pub fn cargo_mut(&mut self) -> Option<&mut Truck> {
        match self {
            FleetVehicle::Truck(t) => Some(t),
            _ => None,
        }
    }

    /// Passenger cabin, for passenger vehicles and buses
    pub fn cabin(&self) -> Option<&PassengerVehicle> {
        match self {
            FleetVehicle::Passenger(p) => Some(p),
            FleetVehicle::Bus(b) => Some(b.carrier()),
            _ => None,
        }
    }

    pub fn cabin_mut(&mut self) -> Option<&mut PassengerVehicle> {
        match self {
            FleetVehicle::Passenger(p) => Some(p),
            FleetVehicle::Bus(b) => Some(b.carrier_mut()),
            _ => None,
        }
    }
}

impl From<Vehicle> for FleetVehicle {
    fn from(v: Vehicle) -> Self {
        FleetVehicle::General(v)
    }
}

impl From<Truck> for FleetVehicle {
    fn from(t: Truck) -> Self {
        FleetVehicle::Truck(t)
    }
}

impl From<PassengerVehicle> for FleetVehicle {
    fn from(p: PassengerVehicle) -> Self {
        FleetVehicle::Passenger(p)
    }
}

impl From<Bus> for FleetVehicle {
    fn from(b: Bus) -> Self {
        FleetVehicle::Bus(b)
    }
}

impl fmt::Display for FleetVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetVehicle::General(v) => fmt::Display::fmt(v, f),
            FleetVehicle::Truck(t) => fmt::Display::fmt(t, f),
            FleetVehicle::Passenger(p) => fmt::Display::fmt(p, f),
            FleetVehicle::Bus(b) => fmt::Display::fmt(b, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GeoPosition, LicenseRank};
    use crate::repository::EmployeeId;

    fn pos() -> GeoPosition {
        GeoPosition::new(13.4, 52.5).unwrap()
    }

    fn mixed_fleet() -> Vec<FleetVehicle> {
        vec![
            Bus::new(100.0, 80.0, pos(), 50).unwrap().into(),
            Truck::new(80.0, 120.0, pos(), 20.0).unwrap().into(),
            PassengerVehicle::new(60.0, 150.0, pos(), 5).unwrap().into(),
            Vehicle::new(40.0, 90.0, pos(), LicenseRank::A).unwrap().into(),
        ]
    }

    #[test]
    fn test_kinds() {
        let kinds: Vec<_> = mixed_fleet().iter().map(|v| v.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                VehicleKind::Bus,
                VehicleKind::Truck,
                VehicleKind::Passenger,
                VehicleKind::General
            ]
        );
    }

    #[test]
    fn test_common_operations_on_all() {
        let mut fleet = mixed_fleet();
        for v in fleet.iter_mut() {
            let chassis = v.vehicle_mut();
            chassis.refuel(20.0).unwrap();
            chassis.start_engine();
            chassis.accelerate(30.0).unwrap();
        }
        assert!(fleet.iter().all(|v| v.vehicle().tank_level() > 0.0));
        assert!(fleet.iter().all(|v| v.vehicle().current_speed() == 30.0));
    }

    #[test]
    fn test_capability_views() {
        let mut fleet = mixed_fleet();
        assert!(fleet[0].cabin().is_some());
        assert!(fleet[0].cargo().is_none());
        assert!(fleet[1].cargo().is_some());
        assert!(fleet[1].cabin().is_none());
        assert!(fleet[2].cabin().is_some());
        assert!(fleet[3].cabin().is_none() && fleet[3].cargo().is_none());

        assert!(fleet[0].cabin_mut().unwrap().board(EmployeeId(1)));
        assert_eq!(fleet[0].cabin().unwrap().passenger_count(), 1);
        fleet[1].cargo_mut().unwrap().load(5.0).unwrap();
        assert_eq!(fleet[1].cargo().unwrap().loaded_amount(), 5.0);
    }

    #[test]
    fn test_bus_cabin_keeps_d_requirement() {
        let fleet = mixed_fleet();
        let cabin = fleet[0].cabin().unwrap();
        assert_eq!(cabin.vehicle().license_requirement(), LicenseRank::D);
    }

    #[test]
    fn test_display_delegates() {
        let fleet = mixed_fleet();
        assert!(fleet[2].to_string().contains("PassengerVehicle"));
        assert!(fleet[2].to_string().contains("seat_capacity"));
    }
}
