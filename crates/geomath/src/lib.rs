//! GeoMath - stateless geodesic calculations over decimal-degree coordinates
//!
//! This crate provides pure closed-form functions for location-aware
//! applications: great-circle distance (haversine, spherical Earth), initial
//! compass bearing, radius containment, angle and distance-unit conversions,
//! and human-readable distance formatting. There is no I/O, no shared state,
//! and no concurrency model; every function is safe to call from any thread.

pub mod bearing;
pub mod convert;
pub mod distance;
pub mod error;
pub mod format;
pub mod models;

pub use bearing::{compass_direction, initial_bearing};
pub use convert::{
    degrees_to_radians, radians_to_degrees, EARTH_RADIUS_KM, KM_TO_NAUTICAL_MILES,
};
pub use distance::{haversine_distance_km, haversine_distance_nm, is_within_radius};
pub use error::{GeoMathError, Result};
pub use format::{format_distance, format_distance_with_precision};
pub use models::{CompassDirection, Coordinate};
