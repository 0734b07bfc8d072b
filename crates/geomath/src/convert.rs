//! Angle and distance-unit conversions

use std::f64::consts::PI;

/// Earth's mean radius in kilometers (spherical approximation, not ellipsoidal)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Conversion factor from kilometers to nautical miles
pub const KM_TO_NAUTICAL_MILES: f64 = 0.539957;

/// Convert decimal degrees to radians
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert radians to decimal degrees
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}
