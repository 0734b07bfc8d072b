//! Initial bearing along a great-circle path

use crate::convert::{degrees_to_radians, radians_to_degrees};
use crate::models::CompassDirection;

/// Calculate the initial compass bearing from point 1 to point 2 in degrees
///
/// The bearing is measured clockwise from true north along the great-circle
/// path and normalized to [0, 360). It is direction-dependent: the bearing
/// from A to B is not the reverse of the bearing from B to A in general.
/// Identical points yield 0 (the atan2(0, 0) convention).
pub fn initial_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = degrees_to_radians(lat1);
    let lat2_rad = degrees_to_radians(lat2);
    let d_lon = degrees_to_radians(lon2 - lon1);

    let y = d_lon.sin() * lat2_rad.cos();
    let x = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * d_lon.cos();

    (radians_to_degrees(y.atan2(x)) + 360.0) % 360.0
}

/// Map a bearing in degrees to the nearest of the 8 compass points
pub fn compass_direction(bearing: f64) -> CompassDirection {
    CompassDirection::from_bearing(bearing)
}
