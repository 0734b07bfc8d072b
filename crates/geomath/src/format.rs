//! Human-readable distance formatting

/// Decimal places used by [`format_distance`]
const DEFAULT_PRECISION: usize = 1;

/// Format a kilometer distance for display using the default precision of 1
///
/// Distances under one kilometer render as integer meters (`"75m"`);
/// everything else renders as fixed-point kilometers (`"3.1km"`).
pub fn format_distance(distance_km: f64) -> String {
    format_distance_with_precision(distance_km, DEFAULT_PRECISION)
}

/// Format a kilometer distance with an explicit number of decimal places
///
/// Rounding rules: the meter value uses [`f64::round`], which rounds halfway
/// cases away from zero; kilometer decimals follow Rust's fixed-point
/// formatting, which rounds halfway cases to even.
pub fn format_distance_with_precision(distance_km: f64, precision: usize) -> String {
    if distance_km < 1.0 {
        format!("{}m", (distance_km * 1000.0).round() as i64)
    } else {
        format!("{:.*}km", precision, distance_km)
    }
}
