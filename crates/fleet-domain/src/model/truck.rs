//! Cargo-carrying truck

use std::fmt;

use fleet_types::VehicleError;
use serde::Serialize;
use tracing::debug;

use crate::model::vehicle::check_amount;
use crate::model::{GeoPosition, LicenseRank, Vehicle, VehicleKind};

/// Vehicle with a bounded cargo hold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Truck {
    vehicle: Vehicle,
    load_capacity: f64,
    loaded_amount: f64,
}

impl Truck {
    pub const LICENSE_REQUIREMENT: LicenseRank = LicenseRank::C;

    /// Create an empty truck. Drivers must hold license C or higher.
    pub fn new(
        tank_capacity: f64,
        max_speed: f64,
        position: GeoPosition,
        load_capacity: f64,
    ) -> Result<Self, VehicleError> {
        let vehicle = Vehicle::build(
            VehicleKind::Truck,
            tank_capacity,
            max_speed,
            position,
            Self::LICENSE_REQUIREMENT,
        )?;
        if !(load_capacity.is_finite() && load_capacity > 0.0) {
            return Err(VehicleError::InvalidCapacity(format!(
                "load capacity must be positive, got {}",
                load_capacity
            )));
        }
        Ok(Self {
            vehicle,
            load_capacity,
            loaded_amount: 0.0,
        })
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    pub fn load_capacity(&self) -> f64 {
        self.load_capacity
    }

    pub fn loaded_amount(&self) -> f64 {
        self.loaded_amount
    }

    pub fn free_capacity(&self) -> f64 {
        self.load_capacity - self.loaded_amount
    }

    /// Fraction of the hold in use (0.0 - 1.0)
    pub fn load_ratio(&self) -> f64 {
        self.loaded_amount / self.load_capacity
    }

    pub fn load(&mut self, amount: f64) -> Result<(), VehicleError> {
        check_amount(amount, "load amount")?;
        if self.loaded_amount + amount > self.load_capacity {
            return Err(VehicleError::CapacityExceeded {
                requested: amount,
                available: self.free_capacity(),
            });
        }
        self.loaded_amount += amount;
        debug!(amount, total = self.loaded_amount, "loaded cargo");
        Ok(())
    }

    pub fn unload(&mut self, amount: f64) -> Result<(), VehicleError> {
        check_amount(amount, "unload amount")?;
        if amount > self.loaded_amount {
            return Err(VehicleError::InsufficientLoad {
                requested: amount,
                loaded: self.loaded_amount,
            });
        }
        self.loaded_amount -= amount;
        debug!(amount, remaining = self.loaded_amount, "unloaded cargo");
        Ok(())
    }

    /// Resize the hold. Shrinking below the current load is rejected.
    pub fn set_load_capacity(&mut self, load_capacity: f64) -> Result<(), VehicleError> {
        if !(load_capacity.is_finite() && load_capacity > 0.0) {
            return Err(VehicleError::InvalidCapacity(format!(
                "load capacity must be positive, got {}",
                load_capacity
            )));
        }
        if load_capacity < self.loaded_amount {
            return Err(VehicleError::InvalidCapacity(format!(
                "load capacity {} is below loaded amount {}",
                load_capacity, self.loaded_amount
            )));
        }
        self.load_capacity = load_capacity;
        Ok(())
    }

    pub fn set_loaded_amount(&mut self, loaded_amount: f64) -> Result<(), VehicleError> {
        check_amount(loaded_amount, "loaded amount")?;
        if loaded_amount > self.load_capacity {
            return Err(VehicleError::CapacityExceeded {
                requested: loaded_amount,
                available: self.load_capacity,
            });
        }
        self.loaded_amount = loaded_amount;
        Ok(())
    }
}

impl fmt::Display for Truck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Truck{")?;
        self.vehicle.fmt_fields(f)?;
        write!(
            f,
            ", load_capacity={:.2}, loaded_amount={:.2}}}",
            self.load_capacity, self.loaded_amount
        )
    }
}
