//! Vehicle chassis: fuel, speed, engine state, position and driver

use std::fmt;

use fleet_types::VehicleError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::fuel_for_distance;
use crate::model::{GeoPosition, LicenseRank};
use crate::repository::{Driver, DriverRef};

/// Engine state machine. Movement is only possible while `On`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Off,
    On,
}

/// Concrete vehicle type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    General,
    Truck,
    Passenger,
    Bus,
}

impl VehicleKind {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::General => "Vehicle",
            VehicleKind::Truck => "Truck",
            VehicleKind::Passenger => "PassengerVehicle",
            VehicleKind::Bus => "Bus",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shared state of every vehicle.
///
/// Invariants after every public call:
/// - `0 <= tank_level <= tank_capacity`
/// - `0 <= current_speed <= max_speed`
/// - an assigned driver satisfied `license_requirement` when assigned
///
/// The license requirement is fixed by the constructor of each vehicle type
/// and has no setter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    kind: VehicleKind,
    tank_capacity: f64,
    tank_level: f64,
    max_speed: f64,
    current_speed: f64,
    engine: EngineState,
    position: GeoPosition,
    license_requirement: LicenseRank,
    driver: Option<DriverRef>,
}

/// Reject negative and non-finite amounts
pub(crate) fn check_amount(amount: f64, what: &str) -> Result<(), VehicleError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(VehicleError::InvalidAmount(format!(
            "{} must be a non-negative number, got {}",
            what, amount
        )))
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Vehicle {
    /// Create a general-purpose vehicle with an empty tank, engine off and no driver
    pub fn new(
        tank_capacity: f64,
        max_speed: f64,
        position: GeoPosition,
        license_requirement: LicenseRank,
    ) -> Result<Self, VehicleError> {
        Self::build(
            VehicleKind::General,
            tank_capacity,
            max_speed,
            position,
            license_requirement,
        )
    }

    pub(crate) fn build(
        kind: VehicleKind,
        tank_capacity: f64,
        max_speed: f64,
        position: GeoPosition,
        license_requirement: LicenseRank,
    ) -> Result<Self, VehicleError> {
        if !is_positive(tank_capacity) {
            return Err(VehicleError::InvalidCapacity(format!(
                "tank capacity must be positive, got {}",
                tank_capacity
            )));
        }
        if !is_positive(max_speed) {
            return Err(VehicleError::InvalidSpeed(format!(
                "max speed must be positive, got {}",
                max_speed
            )));
        }
        debug!(kind = kind.label(), tank_capacity, max_speed, "vehicle created");
        Ok(Self {
            kind,
            tank_capacity,
            tank_level: 0.0,
            max_speed,
            current_speed: 0.0,
            engine: EngineState::Off,
            position,
            license_requirement,
            driver: None,
        })
    }

    /// Attach a driver at construction time
    pub fn with_driver(mut self, driver: &dyn Driver) -> Result<Self, VehicleError> {
        self.assign_driver(Some(driver))?;
        Ok(self)
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn tank_capacity(&self) -> f64 {
        self.tank_capacity
    }

    pub fn tank_level(&self) -> f64 {
        self.tank_level
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn current_speed(&self) -> f64 {
        self.current_speed
    }

    pub fn engine_state(&self) -> EngineState {
        self.engine
    }

    pub fn is_engine_on(&self) -> bool {
        self.engine == EngineState::On
    }

    pub fn position(&self) -> GeoPosition {
        self.position
    }

    pub fn license_requirement(&self) -> LicenseRank {
        self.license_requirement
    }

    pub fn driver(&self) -> Option<DriverRef> {
        self.driver
    }

    // --- Engine and speed ---

    pub fn start_engine(&mut self) {
        if self.engine == EngineState::Off {
            self.engine = EngineState::On;
            debug!(kind = self.kind.label(), "engine started");
        }
    }

    /// Turn the engine off; the vehicle comes to a standstill
    pub fn stop_engine(&mut self) {
        self.engine = EngineState::Off;
        self.current_speed = 0.0;
        debug!(kind = self.kind.label(), "engine stopped");
    }

    /// Increase speed, clamped at `max_speed`
    pub fn accelerate(&mut self, delta: f64) -> Result<(), VehicleError> {
        if !self.is_engine_on() {
            return Err(VehicleError::EngineRequired);
        }
        check_amount(delta, "acceleration")?;
        self.current_speed = (self.current_speed + delta).min(self.max_speed);
        Ok(())
    }

    /// Decrease speed, clamped at zero. Allowed with the engine off.
    pub fn brake(&mut self, delta: f64) -> Result<(), VehicleError> {
        check_amount(delta, "braking")?;
        self.current_speed = (self.current_speed - delta).max(0.0);
        Ok(())
    }

    // --- Fuel and movement ---

    /// Add fuel. Anything beyond the tank capacity is discarded.
    pub fn refuel(&mut self, amount: f64) -> Result<(), VehicleError> {
        check_amount(amount, "refuel amount")?;
        let overflow = self.tank_level + amount - self.tank_capacity;
        if overflow > 0.0 {
            self.tank_level = self.tank_capacity;
            debug!(kind = self.kind.label(), amount, overflow, "tank full, excess discarded");
        } else {
            self.tank_level += amount;
            debug!(kind = self.kind.label(), amount, level = self.tank_level, "refueled");
        }
        Ok(())
    }

    /// Move straight to `destination`, burning one fuel unit per 10 km.
    ///
    /// Either the whole trip happens or nothing changes. Returns the
    /// distance travelled in kilometers.
    pub fn drive(&mut self, destination: GeoPosition) -> Result<f64, VehicleError> {
        if !self.is_engine_on() {
            return Err(VehicleError::EngineRequired);
        }
        if self.tank_level <= 0.0 {
            return Err(VehicleError::FuelEmpty);
        }
        let km = GeoPosition::distance_km(&self.position, &destination);
        let needed = fuel_for_distance(km);
        if self.tank_level < needed {
            return Err(VehicleError::InsufficientFuel {
                needed,
                available: self.tank_level,
            });
        }
        self.tank_level = (self.tank_level - needed).max(0.0);
        self.position = destination;
        info!(
            kind = self.kind.label(),
            km,
            fuel_used = needed,
            level = self.tank_level,
            "trip completed"
        );
        Ok(km)
    }

    // --- Driver ---

    /// Attach, replace or (with `None`) detach the driver.
    ///
    /// The driver's grade must satisfy this vehicle's license requirement.
    pub fn assign_driver(&mut self, driver: Option<&dyn Driver>) -> Result<(), VehicleError> {
        let Some(driver) = driver else {
            self.driver = None;
            return Ok(());
        };
        let rank = LicenseRank::from_char(driver.license_grade())?;
        if !LicenseRank::satisfies(rank, self.license_requirement) {
            debug!(
                kind = self.kind.label(),
                grade = %rank,
                required = %self.license_requirement,
                "driver rejected"
            );
            return Err(VehicleError::DriverUnqualified {
                grade: rank.as_char(),
                required: self.license_requirement.as_char(),
            });
        }
        self.driver = Some(DriverRef {
            id: driver.employee_id(),
            rank,
        });
        Ok(())
    }

    /// Detach the driver, returning the previous one
    pub fn clear_driver(&mut self) -> Option<DriverRef> {
        self.driver.take()
    }

    /// Whether `grade` is a recognised license grade
    pub fn is_license_valid(&self, grade: char) -> bool {
        LicenseRank::is_valid_grade(grade)
    }

    /// Whether a driver holding `grade` may operate this vehicle
    pub fn is_license_requirement_met(&self, grade: char) -> bool {
        LicenseRank::from_char(grade)
            .map(|rank| LicenseRank::satisfies(rank, self.license_requirement))
            .unwrap_or(false)
    }

    // --- Setters ---

    /// Change the tank size. Shrinking below the current fuel level is rejected.
    pub fn set_tank_capacity(&mut self, tank_capacity: f64) -> Result<(), VehicleError> {
        if !is_positive(tank_capacity) {
            return Err(VehicleError::InvalidCapacity(format!(
                "tank capacity must be positive, got {}",
                tank_capacity
            )));
        }
        if tank_capacity < self.tank_level {
            return Err(VehicleError::InvalidCapacity(format!(
                "tank capacity {} is below current tank level {}",
                tank_capacity, self.tank_level
            )));
        }
        self.tank_capacity = tank_capacity;
        Ok(())
    }

    pub fn set_tank_level(&mut self, tank_level: f64) -> Result<(), VehicleError> {
        check_amount(tank_level, "tank level")?;
        if tank_level > self.tank_capacity {
            return Err(VehicleError::InvalidAmount(format!(
                "tank level {} exceeds tank capacity {}",
                tank_level, self.tank_capacity
            )));
        }
        self.tank_level = tank_level;
        Ok(())
    }

    /// Change the top speed. Lowering it below the current speed is rejected.
    pub fn set_max_speed(&mut self, max_speed: f64) -> Result<(), VehicleError> {
        if !is_positive(max_speed) {
            return Err(VehicleError::InvalidSpeed(format!(
                "max speed must be positive, got {}",
                max_speed
            )));
        }
        if max_speed < self.current_speed {
            return Err(VehicleError::InvalidSpeed(format!(
                "max speed {} is below current speed {}",
                max_speed, self.current_speed
            )));
        }
        self.max_speed = max_speed;
        Ok(())
    }

    pub fn set_current_speed(&mut self, current_speed: f64) -> Result<(), VehicleError> {
        if !(current_speed.is_finite() && (0.0..=self.max_speed).contains(&current_speed)) {
            return Err(VehicleError::InvalidSpeed(format!(
                "current speed {} must be between 0 and {}",
                current_speed, self.max_speed
            )));
        }
        self.current_speed = current_speed;
        Ok(())
    }

    pub fn set_position(&mut self, position: GeoPosition) {
        self.position = position;
    }

    // --- Reporting ---

    /// One-line state summary
    pub fn info(&self) -> String {
        format!(
            "Tank: {:.1}/{:.1}, Speed: {:.1}/{:.1}, Engine: {}",
            self.tank_level,
            self.tank_capacity,
            self.current_speed,
            self.max_speed,
            if self.is_engine_on() { "On" } else { "Off" }
        )
    }

    /// Fraction of the tank that is filled
    pub fn fuel_ratio(&self) -> f64 {
        self.tank_level / self.tank_capacity
    }

    /// Attribute list shared by the `Display` impls of all vehicle types
    pub(crate) fn fmt_fields(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tank_capacity={:.2}, tank_level={:.2}, current_speed={:.2}, max_speed={:.2}, engine_on={}, position={}, license_requirement={}, driver=",
            self.tank_capacity,
            self.tank_level,
            self.current_speed,
            self.max_speed,
            self.is_engine_on(),
            self.position,
            self.license_requirement,
        )?;
        match self.driver {
            Some(d) => write!(f, "{}({})", d.id, d.rank),
            None => f.write_str("none"),
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.kind.label())?;
        self.fmt_fields(f)?;
        f.write_str("}")
    }
}
