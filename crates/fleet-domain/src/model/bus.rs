//! Bus: a passenger vehicle with a stricter license requirement

use std::fmt;

use fleet_types::VehicleError;
use serde::Serialize;

use crate::model::{GeoPosition, LicenseRank, PassengerVehicle, Vehicle, VehicleKind};
use crate::repository::EmployeeId;

/// Passenger vehicle whose driver must hold license D.
///
/// The requirement is written into the wrapped chassis by the constructor,
/// so every driver check on a bus runs against D rather than B.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bus {
    carrier: PassengerVehicle,
}

impl Bus {
    pub const LICENSE_REQUIREMENT: LicenseRank = LicenseRank::D;

    pub fn new(
        tank_capacity: f64,
        max_speed: f64,
        position: GeoPosition,
        seat_capacity: usize,
    ) -> Result<Self, VehicleError> {
        let carrier = PassengerVehicle::build(
            VehicleKind::Bus,
            tank_capacity,
            max_speed,
            position,
            seat_capacity,
            Self::LICENSE_REQUIREMENT,
        )?;
        Ok(Self { carrier })
    }

    /// Passenger-carrier view of this bus
    pub fn carrier(&self) -> &PassengerVehicle {
        &self.carrier
    }

    pub fn carrier_mut(&mut self) -> &mut PassengerVehicle {
        &mut self.carrier
    }

    pub fn vehicle(&self) -> &Vehicle {
        self.carrier.vehicle()
    }

    pub fn vehicle_mut(&mut self) -> &mut Vehicle {
        self.carrier.vehicle_mut()
    }

    pub fn board(&mut self, occupant: EmployeeId) -> bool {
        self.carrier.board(occupant)
    }

    pub fn unboard(&mut self, occupant: EmployeeId) -> bool {
        self.carrier.unboard(occupant)
    }

    pub fn passenger_count(&self) -> usize {
        self.carrier.passenger_count()
    }

    pub fn seat_capacity(&self) -> usize {
        self.carrier.seat_capacity()
    }

    pub fn free_seats(&self) -> usize {
        self.carrier.free_seats()
    }

    pub fn is_aboard(&self, occupant: EmployeeId) -> bool {
        self.carrier.is_aboard(occupant)
    }

    pub fn passengers(&self) -> impl Iterator<Item = EmployeeId> + '_ {
        self.carrier.passengers()
    }

    pub fn set_seat_capacity(&mut self, seat_capacity: usize) -> Result<(), VehicleError> {
        self.carrier.set_seat_capacity(seat_capacity)
    }
}

impl fmt::Display for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.carrier.fmt_with_label("Bus", f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::vehicle::tests::TestDriver;

    fn bus() -> Bus {
        let pos = GeoPosition::new(13.4, 52.5).unwrap();
        Bus::new(100.0, 80.0, pos, 50).unwrap()
    }

    #[test]
    fn test_bus_requires_d() {
        let b = bus();
        assert_eq!(b.vehicle().license_requirement(), LicenseRank::D);
        assert_eq!(b.carrier().vehicle().license_requirement(), LicenseRank::D);
        assert_eq!(b.vehicle().kind(), VehicleKind::Bus);
    }

    #[test]
    fn test_grade_c_driver_rejected() {
        let mut b = bus();
        let c = TestDriver { id: 1, grade: 'C' };
        assert_eq!(
            b.vehicle_mut().assign_driver(Some(&c)),
            Err(VehicleError::DriverUnqualified {
                grade: 'C',
                required: 'D'
            })
        );
        // Same check through the passenger-carrier view
        assert!(b.carrier_mut().vehicle_mut().assign_driver(Some(&c)).is_err());
        assert!(b.vehicle().driver().is_none());
    }

    #[test]
    fn test_grade_d_driver_accepted() {
        let mut b = bus();
        let d = TestDriver { id: 2, grade: 'D' };
        b.vehicle_mut().assign_driver(Some(&d)).unwrap();
        assert_eq!(b.vehicle().driver().unwrap().rank, LicenseRank::D);
    }

    #[test]
    fn test_bus_boarding() {
        let mut b = bus();
        assert!(b.board(EmployeeId(1)));
        assert!(b.board(EmployeeId(2)));
        assert_eq!(b.passenger_count(), 2);
        assert!(b.unboard(EmployeeId(1)));
        assert_eq!(b.passenger_count(), 1);
        assert_eq!(b.seat_capacity(), 50);
    }

    #[test]
    fn test_bus_seat_management() {
        let mut b = bus();
        assert!(b.board(EmployeeId(7)));
        assert!(b.board(EmployeeId(3)));
        assert!(b.is_aboard(EmployeeId(7)));
        assert!(!b.is_aboard(EmployeeId(9)));
        assert_eq!(b.free_seats(), 48);
        assert_eq!(
            b.passengers().collect::<Vec<_>>(),
            vec![EmployeeId(3), EmployeeId(7)]
        );

        assert!(matches!(
            b.set_seat_capacity(1),
            Err(VehicleError::InvalidCapacity(_))
        ));
        b.set_seat_capacity(2).unwrap();
        assert_eq!(b.free_seats(), 0);
        assert!(!b.board(EmployeeId(9)));
        assert_eq!(b.vehicle().license_requirement(), LicenseRank::D);
    }

    #[test]
    fn test_display() {
        assert!(bus().to_string().starts_with("Bus{"));
    }
}
