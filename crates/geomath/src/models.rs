//! Coordinate and compass-direction types
//!
//! These are plain value types; a [`Coordinate`] is a decimal-degree pair and
//! a [`CompassDirection`] is one of the 8 points of the compass rose.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bearing::initial_bearing;
use crate::convert::degrees_to_radians;
use crate::distance::{haversine_distance_km, haversine_distance_nm, is_within_radius};
use crate::error::GeoMathError;

/// A latitude/longitude pair in decimal degrees
///
/// Latitude is conventionally in [-90, 90] and longitude in [-180, 180], but
/// no range validation or normalization is performed; callers are responsible
/// for supplying sane values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Both components converted to radians, as (lat, lon)
    pub fn to_radians(&self) -> (f64, f64) {
        (degrees_to_radians(self.lat), degrees_to_radians(self.lon))
    }

    /// Great-circle distance to another coordinate in kilometers
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_distance_km(self.lat, self.lon, other.lat, other.lon)
    }

    /// Great-circle distance to another coordinate in nautical miles
    pub fn distance_nm(&self, other: &Coordinate) -> f64 {
        haversine_distance_nm(self.lat, self.lon, other.lat, other.lon)
    }

    /// Initial bearing toward another coordinate in degrees, in [0, 360)
    pub fn bearing_to(&self, other: &Coordinate) -> f64 {
        initial_bearing(self.lat, self.lon, other.lat, other.lon)
    }

    /// Check if a point lies within `radius_km` of this coordinate (inclusive)
    pub fn is_within_radius(&self, point: &Coordinate, radius_km: f64) -> bool {
        is_within_radius(self.lat, self.lon, point.lat, point.lon, radius_km)
    }
}

impl FromStr for Coordinate {
    type Err = GeoMathError;

    /// Parse a `"lat,lon"` decimal-degree pair, e.g. `"51.5074,-0.1278"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat_str, lon_str) =
            s.split_once(',').ok_or_else(|| GeoMathError::InvalidCoordinate {
                input: s.to_string(),
                reason: "expected 'lat,lon'".to_string(),
            })?;

        let lat = lat_str.trim().parse::<f64>().map_err(|e| GeoMathError::InvalidCoordinate {
            input: s.to_string(),
            reason: format!("latitude: {}", e),
        })?;
        let lon = lon_str.trim().parse::<f64>().map_err(|e| GeoMathError::InvalidCoordinate {
            input: s.to_string(),
            reason: format!("longitude: {}", e),
        })?;

        Ok(Self { lat, lon })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// The 8-point compass rose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompassDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassDirection {
    const ROSE: [CompassDirection; 8] = [
        CompassDirection::N,
        CompassDirection::NE,
        CompassDirection::E,
        CompassDirection::SE,
        CompassDirection::S,
        CompassDirection::SW,
        CompassDirection::W,
        CompassDirection::NW,
    ];

    /// Nearest compass point for a bearing in degrees
    ///
    /// The sector index is `round(bearing / 45) mod 8`, so bearings at or
    /// above 337.5 wrap back around to `N`. Bearings outside [0, 360) are
    /// reduced into range by the modulo rather than rejected; callers that
    /// computed the bearing via [`crate::initial_bearing`] are already
    /// normalized.
    pub fn from_bearing(bearing: f64) -> Self {
        let index = ((bearing / 45.0).round() as i64).rem_euclid(8) as usize;
        Self::ROSE[index]
    }

    /// The label string for this direction
    pub fn as_str(&self) -> &'static str {
        match self {
            CompassDirection::N => "N",
            CompassDirection::NE => "NE",
            CompassDirection::E => "E",
            CompassDirection::SE => "SE",
            CompassDirection::S => "S",
            CompassDirection::SW => "SW",
            CompassDirection::W => "W",
            CompassDirection::NW => "NW",
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
