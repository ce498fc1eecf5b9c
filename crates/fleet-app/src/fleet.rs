//! Fleet registry: driver arena plus vehicles keyed by id

use std::collections::HashMap;

use fleet_domain::repository::DriverDirectory;
use fleet_domain::service::{generate_fleet_report, summarize_vehicle, VehicleStatus};
use fleet_domain::{Driver, EmployeeId, FleetVehicle, LicenseRank, PassengerVehicle};
use fleet_types::{Error, Result};
use tracing::{debug, info};
use uuid::Uuid;

/// Employee record held by the fleet
#[derive(Debug, Clone, PartialEq)]
pub struct DriverRecord {
    id: EmployeeId,
    pub name: String,
    pub license: LicenseRank,
}

impl DriverRecord {
    pub fn id(&self) -> EmployeeId {
        self.id
    }
}

impl Driver for DriverRecord {
    fn employee_id(&self) -> EmployeeId {
        self.id
    }

    fn license_grade(&self) -> char {
        self.license.as_char()
    }
}

/// Drivers addressed by index. Records are never removed, so ids stay valid.
/// Names are unique so rosters can refer to drivers by name.
#[derive(Debug, Default)]
pub struct DriverArena {
    records: Vec<DriverRecord>,
}

impl DriverArena {
    pub fn register(&mut self, name: &str, grade: char) -> Result<EmployeeId> {
        let license = LicenseRank::from_char(grade)?;
        if self.find_by_name(name).is_some() {
            return Err(Error::InvalidInput(format!(
                "duplicate driver name '{}'",
                name
            )));
        }
        let id = EmployeeId(self.records.len());
        self.records.push(DriverRecord {
            id,
            name: name.to_string(),
            license,
        });
        Ok(id)
    }

    pub fn get(&self, id: EmployeeId) -> Option<&DriverRecord> {
        self.records.get(id.0)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&DriverRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn all(&self) -> &[DriverRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DriverDirectory for DriverArena {
    fn find_driver(&self, id: EmployeeId) -> Option<&dyn Driver> {
        self.get(id).map(|r| r as &dyn Driver)
    }
}

/// A set of vehicles and the employees who drive and ride them
#[derive(Debug, Default)]
pub struct Fleet {
    drivers: DriverArena,
    vehicles: HashMap<String, FleetVehicle>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Drivers ---

    pub fn register_driver(&mut self, name: &str, grade: char) -> Result<EmployeeId> {
        let id = self.drivers.register(name, grade)?;
        debug!(%id, name, grade = %grade, "driver registered");
        Ok(id)
    }

    pub fn driver(&self, id: EmployeeId) -> Option<&DriverRecord> {
        self.drivers.get(id)
    }

    pub fn driver_by_name(&self, name: &str) -> Option<&DriverRecord> {
        self.drivers.find_by_name(name)
    }

    pub fn drivers(&self) -> &[DriverRecord] {
        self.drivers.all()
    }

    // --- Vehicles ---

    /// Add a vehicle under `id`. Ids are unique within the fleet.
    pub fn add_vehicle(&mut self, id: &str, vehicle: impl Into<FleetVehicle>) -> Result<()> {
        if self.vehicles.contains_key(id) {
            return Err(Error::DuplicateVehicle(id.to_string()));
        }
        let vehicle = vehicle.into();
        info!(id, kind = vehicle.kind().label(), "vehicle added");
        self.vehicles.insert(id.to_string(), vehicle);
        Ok(())
    }

    /// Add a vehicle under a freshly generated id
    pub fn register_vehicle(&mut self, vehicle: impl Into<FleetVehicle>) -> String {
        let id = Uuid::new_v4().to_string();
        let vehicle = vehicle.into();
        info!(id = %id, kind = vehicle.kind().label(), "vehicle added");
        self.vehicles.insert(id.clone(), vehicle);
        id
    }

    pub fn remove_vehicle(&mut self, id: &str) -> Option<FleetVehicle> {
        let removed = self.vehicles.remove(id);
        if removed.is_some() {
            info!(id, "vehicle removed");
        }
        removed
    }

    pub fn vehicle(&self, id: &str) -> Option<&FleetVehicle> {
        self.vehicles.get(id)
    }

    pub fn vehicle_mut(&mut self, id: &str) -> Option<&mut FleetVehicle> {
        self.vehicles.get_mut(id)
    }

    /// Like [`Fleet::vehicle_mut`], failing with `UnknownVehicle`
    pub fn require_vehicle_mut(&mut self, id: &str) -> Result<&mut FleetVehicle> {
        self.vehicles
            .get_mut(id)
            .ok_or_else(|| Error::UnknownVehicle(id.to_string()))
    }

    /// All vehicles sorted by id
    pub fn vehicles(&self) -> Vec<(&str, &FleetVehicle)> {
        let mut vehicles: Vec<_> = self
            .vehicles
            .iter()
            .map(|(id, v)| (id.as_str(), v))
            .collect();
        vehicles.sort_by(|a, b| a.0.cmp(b.0));
        vehicles
    }

    pub fn count(&self) -> usize {
        self.vehicles.len()
    }

    // --- Operations ---

    /// Put a registered driver in `vehicle_id`, or detach with `None`
    pub fn assign_driver(&mut self, vehicle_id: &str, driver: Option<EmployeeId>) -> Result<()> {
        let vehicle = self
            .vehicles
            .get_mut(vehicle_id)
            .ok_or_else(|| Error::UnknownVehicle(vehicle_id.to_string()))?;
        let driver = match driver {
            Some(id) => Some(
                self.drivers
                    .find_driver(id)
                    .ok_or_else(|| Error::UnknownEmployee(id.to_string()))?,
            ),
            None => None,
        };
        vehicle.vehicle_mut().assign_driver(driver)?;
        Ok(())
    }

    /// Board a registered employee. `Ok(false)` when every seat is taken.
    pub fn board(&mut self, vehicle_id: &str, employee: EmployeeId) -> Result<bool> {
        if self.drivers.get(employee).is_none() {
            return Err(Error::UnknownEmployee(employee.to_string()));
        }
        let cabin = self.cabin_mut(vehicle_id)?;
        Ok(cabin.board(employee))
    }

    pub fn unboard(&mut self, vehicle_id: &str, employee: EmployeeId) -> Result<bool> {
        let cabin = self.cabin_mut(vehicle_id)?;
        Ok(cabin.unboard(employee))
    }

    fn cabin_mut(&mut self, vehicle_id: &str) -> Result<&mut PassengerVehicle> {
        self.require_vehicle_mut(vehicle_id)?
            .cabin_mut()
            .ok_or_else(|| Error::NotPassengerCarrier(vehicle_id.to_string()))
    }

    // --- Reporting ---

    pub fn statuses(&self) -> Vec<VehicleStatus> {
        self.vehicles()
            .into_iter()
            .map(|(id, v)| summarize_vehicle(id, v))
            .collect()
    }

    pub fn report(&self) -> String {
        generate_fleet_report(&self.statuses())
    }
}
