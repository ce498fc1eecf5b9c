//! Fleet domain: positions, licensing, vehicles and the services built on them

pub mod constants;
pub mod model;
pub mod repository;
pub mod service;

pub use model::*;
pub use repository::{Driver, DriverRef, EmployeeId};
