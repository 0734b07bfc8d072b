//! Error types for geomath
//!
//! The geodesic math itself is total over finite floats and never fails;
//! only coordinate-string parsing can produce an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoMathError {
    #[error("Invalid coordinate string '{input}': {reason}")]
    InvalidCoordinate { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, GeoMathError>;
