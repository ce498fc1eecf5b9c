//! Geographic position value type

use std::fmt;
use std::str::FromStr;

use fleet_types::VehicleError;
use serde::{Deserialize, Serialize};

use crate::constants::EARTH_RADIUS_KM;

/// Validated coordinate pair.
///
/// Longitude is measured eastward in `[0, 360)`, latitude in `[-90, 90]`.
/// Values are immutable; moving a vehicle replaces its whole position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPosition")]
pub struct GeoPosition {
    longitude: f64,
    latitude: f64,
}

/// Unvalidated form used for deserialization
#[derive(Deserialize)]
struct RawGeoPosition {
    longitude: f64,
    latitude: f64,
}

impl TryFrom<RawGeoPosition> for GeoPosition {
    type Error = VehicleError;

    fn try_from(raw: RawGeoPosition) -> Result<Self, Self::Error> {
        GeoPosition::new(raw.longitude, raw.latitude)
    }
}

impl GeoPosition {
    /// Create a position, rejecting coordinates outside the valid bounds
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, VehicleError> {
        // Negated range checks so that NaN is rejected as well
        if !(0.0..360.0).contains(&longitude) {
            return Err(VehicleError::OutOfRange(format!(
                "longitude {} must be between 0° and 360°",
                longitude
            )));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(VehicleError::OutOfRange(format!(
                "latitude {} must be between -90° and 90°",
                latitude
            )));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Great-circle distance between two positions in kilometers (haversine)
    pub fn distance_km(a: &GeoPosition, b: &GeoPosition) -> f64 {
        let lat1 = a.latitude.to_radians();
        let lat2 = b.latitude.to_radians();
        let d_lat = (b.latitude - a.latitude).to_radians();
        let d_lon = (b.longitude - a.longitude).to_radians();

        let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        // Rounding can push h marginally past 1 for antipodal points
        let c = 2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Distance from this position to another, in kilometers
    pub fn distance_to(&self, other: &GeoPosition) -> f64 {
        Self::distance_km(self, other)
    }
}

impl fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GeoPosition{{longitude={:.6}, latitude={:.6}}}",
            self.longitude, self.latitude
        )
    }
}

/// Parses `"longitude,latitude"`, e.g. `"13.4,52.5"`
impl FromStr for GeoPosition {
    type Err = VehicleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lon, lat) = s
            .split_once(',')
            .ok_or_else(|| VehicleError::OutOfRange(format!("expected 'lon,lat', got '{}'", s)))?;
        let parse = |part: &str, name: &str| {
            part.trim().parse::<f64>().map_err(|_| {
                VehicleError::OutOfRange(format!("{} '{}' is not a number", name, part.trim()))
            })
        };
        GeoPosition::new(parse(lon, "longitude")?, parse(lat, "latitude")?)
    }
}
