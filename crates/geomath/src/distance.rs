//! Great-circle distance and radius containment

use crate::convert::{degrees_to_radians, EARTH_RADIUS_KM, KM_TO_NAUTICAL_MILES};

/// Calculate the great-circle distance between two points in kilometers
///
/// Uses the haversine formula over a sphere of radius [`EARTH_RADIUS_KM`].
/// The result is non-negative, zero when both points coincide, and symmetric
/// in the two points. Inputs are decimal degrees and are not range-checked;
/// NaN or infinite inputs propagate through the arithmetic.
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = degrees_to_radians(lat2 - lat1);
    let d_lon = degrees_to_radians(lon2 - lon1);
    let lat1_rad = degrees_to_radians(lat1);
    let lat2_rad = degrees_to_radians(lat2);

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Calculate the great-circle distance between two points in nautical miles
pub fn haversine_distance_nm(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine_distance_km(lat1, lon1, lat2, lon2) * KM_TO_NAUTICAL_MILES
}

/// Check if a point lies within `radius_km` of a center point
///
/// The boundary is inclusive: a point exactly `radius_km` away counts as
/// within. A NaN anywhere in the inputs makes the comparison false.
pub fn is_within_radius(
    center_lat: f64,
    center_lon: f64,
    point_lat: f64,
    point_lon: f64,
    radius_km: f64,
) -> bool {
    haversine_distance_km(center_lat, center_lon, point_lat, point_lon) <= radius_km
}
