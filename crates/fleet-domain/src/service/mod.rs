//! Domain services

pub mod fleet_report;
pub mod trip;

pub use fleet_report::{generate_fleet_report, summarize_vehicle, VehicleStatus};
pub use trip::{estimate_trip, range_km, TripEstimate};
