//! Error types for the fleet simulator

use thiserror::Error;

/// Validation failures raised by vehicle operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VehicleError {
    #[error("Coordinate out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid license grade '{0}': must be A, B, C or D")]
    InvalidGrade(char),

    #[error("Invalid license grade \"{0}\": expected a single letter A, B, C or D")]
    InvalidGradeText(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),

    #[error("Invalid speed: {0}")]
    InvalidSpeed(String),

    #[error("Engine must be on")]
    EngineRequired,

    #[error("Tank is empty")]
    FuelEmpty,

    #[error("Not enough fuel: {needed:.2} units needed, {available:.2} available")]
    InsufficientFuel { needed: f64, available: f64 },

    #[error("Exceeds load capacity: {requested:.2} requested, {available:.2} free")]
    CapacityExceeded { requested: f64, available: f64 },

    #[error("Cannot unload {requested:.2} units, only {loaded:.2} loaded")]
    InsufficientLoad { requested: f64, loaded: f64 },

    #[error("Driver with license {grade} cannot operate a vehicle requiring {required}")]
    DriverUnqualified { grade: char, required: char },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Vehicle error: {0}")]
    Vehicle(#[from] VehicleError),

    #[error("Unknown vehicle: {0}")]
    UnknownVehicle(String),

    #[error("Unknown employee: {0}")]
    UnknownEmployee(String),

    #[error("Vehicle already registered: {0}")]
    DuplicateVehicle(String),

    #[error("Vehicle {0} does not carry passengers")]
    NotPassengerCarrier(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
