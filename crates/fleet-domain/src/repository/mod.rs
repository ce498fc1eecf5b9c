//! Interfaces to the employee subsystem
//!
//! Vehicles never own drivers or passengers. They hold an [`EmployeeId`]
//! into a lookup table owned elsewhere, plus whatever was validated at
//! assignment time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::LicenseRank;

/// Index of an employee in an external roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub usize);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anything that can sit behind the wheel
pub trait Driver {
    fn employee_id(&self) -> EmployeeId;

    /// Single-character license grade as recorded by the employee subsystem
    fn license_grade(&self) -> char;
}

/// Lookup table of drivers by id
pub trait DriverDirectory {
    fn find_driver(&self, id: EmployeeId) -> Option<&dyn Driver>;
}

/// Weak link from a vehicle to its driver.
///
/// The rank is a snapshot taken when the driver was assigned; later changes
/// to the employee record are not re-validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRef {
    pub id: EmployeeId,
    pub rank: LicenseRank,
}
