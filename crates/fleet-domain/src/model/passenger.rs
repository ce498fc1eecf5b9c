//! Passenger-carrying vehicle with seat management

use std::collections::BTreeSet;
use std::fmt;

use fleet_types::VehicleError;
use serde::Serialize;
use tracing::debug;

use crate::model::{GeoPosition, LicenseRank, Vehicle, VehicleKind};
use crate::repository::EmployeeId;

/// Vehicle with a bounded set of occupants
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassengerVehicle {
    vehicle: Vehicle,
    seat_capacity: usize,
    passengers: BTreeSet<EmployeeId>,
}

impl PassengerVehicle {
    pub const LICENSE_REQUIREMENT: LicenseRank = LicenseRank::B;

    /// Create an empty passenger vehicle. Drivers must hold license B or higher.
    pub fn new(
        tank_capacity: f64,
        max_speed: f64,
        position: GeoPosition,
        seat_capacity: usize,
    ) -> Result<Self, VehicleError> {
        Self::build(
            VehicleKind::Passenger,
            tank_capacity,
            max_speed,
            position,
            seat_capacity,
            Self::LICENSE_REQUIREMENT,
        )
    }

    /// Shared constructor for passenger-carrying types with their own requirement
    pub(crate) fn build(
        kind: VehicleKind,
        tank_capacity: f64,
        max_speed: f64,
        position: GeoPosition,
        seat_capacity: usize,
        license_requirement: LicenseRank,
    ) -> Result<Self, VehicleError> {
        let vehicle = Vehicle::build(kind, tank_capacity, max_speed, position, license_requirement)?;
        if seat_capacity == 0 {
            return Err(VehicleError::InvalidCapacity(
                "seat capacity must be positive".to_string(),
            ));
        }
        Ok(Self {
            vehicle,
            seat_capacity,
            passengers: BTreeSet::new(),
        })
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    pub fn seat_capacity(&self) -> usize {
        self.seat_capacity
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    pub fn free_seats(&self) -> usize {
        self.seat_capacity - self.passengers.len()
    }

    pub fn is_aboard(&self, occupant: EmployeeId) -> bool {
        self.passengers.contains(&occupant)
    }

    /// Occupants in id order
    pub fn passengers(&self) -> impl Iterator<Item = EmployeeId> + '_ {
        self.passengers.iter().copied()
    }

    /// Seat an occupant.
    ///
    /// Returns `false` when every seat is taken. Boarding someone already
    /// aboard is a no-op that returns `true`.
    pub fn board(&mut self, occupant: EmployeeId) -> bool {
        if self.passengers.contains(&occupant) {
            return true;
        }
        if self.passengers.len() >= self.seat_capacity {
            debug!(kind = self.vehicle.kind().label(), %occupant, "boarding refused, vehicle full");
            return false;
        }
        self.passengers.insert(occupant);
        debug!(kind = self.vehicle.kind().label(), %occupant, count = self.passengers.len(), "passenger boarded");
        true
    }

    /// Remove an occupant; `false` if they were not aboard
    pub fn unboard(&mut self, occupant: EmployeeId) -> bool {
        let removed = self.passengers.remove(&occupant);
        if removed {
            debug!(kind = self.vehicle.kind().label(), %occupant, "passenger left");
        }
        removed
    }

    /// Change the number of seats. Fewer seats than current occupants is rejected.
    pub fn set_seat_capacity(&mut self, seat_capacity: usize) -> Result<(), VehicleError> {
        if seat_capacity == 0 {
            return Err(VehicleError::InvalidCapacity(
                "seat capacity must be positive".to_string(),
            ));
        }
        if seat_capacity < self.passengers.len() {
            return Err(VehicleError::InvalidCapacity(format!(
                "seat capacity {} is below passenger count {}",
                seat_capacity,
                self.passengers.len()
            )));
        }
        self.seat_capacity = seat_capacity;
        Ok(())
    }

    pub(crate) fn fmt_with_label(&self, label: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", label)?;
        self.vehicle.fmt_fields(f)?;
        write!(
            f,
            ", seat_capacity={}, passengers=[",
            self.seat_capacity
        )?;
        for (i, id) in self.passengers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", id)?;
        }
        f.write_str("]}")
    }
}

impl fmt::Display for PassengerVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_label(self.vehicle.kind().label(), f)
    }
}
