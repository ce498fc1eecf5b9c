//! Physical and operational constants

pub mod physics;

pub use physics::{
    distance_for_fuel, fuel_for_distance, EARTH_RADIUS_KM, KM_PER_FUEL_UNIT, LOW_FUEL_RATIO,
};
