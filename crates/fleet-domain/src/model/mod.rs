//! Domain model types

pub mod bus;
pub mod fleet_vehicle;
pub mod geo_position;
pub mod license;
pub mod passenger;
pub mod truck;
pub mod vehicle;

pub use bus::Bus;
pub use fleet_vehicle::FleetVehicle;
pub use geo_position::GeoPosition;
pub use license::LicenseRank;
pub use passenger::PassengerVehicle;
pub use truck::Truck;
pub use vehicle::{EngineState, Vehicle, VehicleKind};
