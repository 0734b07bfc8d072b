//! Property-based tests for the geodesic math invariants.

use geomath::{
    degrees_to_radians, haversine_distance_km, haversine_distance_nm, initial_bearing,
    is_within_radius, radians_to_degrees, CompassDirection, KM_TO_NAUTICAL_MILES,
};
use proptest::prelude::*;

fn lat() -> impl Strategy<Value = f64> {
    -90.0..=90.0
}

fn lon() -> impl Strategy<Value = f64> {
    -180.0..=180.0
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(lat in lat(), lon in lon()) {
        prop_assert!(haversine_distance_km(lat, lon, lat, lon) < 1e-9);
    }

    #[test]
    fn distance_is_symmetric(lat1 in lat(), lon1 in lon(), lat2 in lat(), lon2 in lon()) {
        let forward = haversine_distance_km(lat1, lon1, lat2, lon2);
        let backward = haversine_distance_km(lat2, lon2, lat1, lon1);
        prop_assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn distance_is_non_negative(lat1 in lat(), lon1 in lon(), lat2 in lat(), lon2 in lon()) {
        prop_assert!(haversine_distance_km(lat1, lon1, lat2, lon2) >= 0.0);
    }

    #[test]
    fn nautical_miles_scale_kilometers(lat1 in lat(), lon1 in lon(), lat2 in lat(), lon2 in lon()) {
        let km = haversine_distance_km(lat1, lon1, lat2, lon2);
        let nm = haversine_distance_nm(lat1, lon1, lat2, lon2);
        prop_assert!((nm - km * KM_TO_NAUTICAL_MILES).abs() <= 1e-9 * km.max(1.0));
    }

    #[test]
    fn bearing_is_normalized(lat1 in lat(), lon1 in lon(), lat2 in lat(), lon2 in lon()) {
        let bearing = initial_bearing(lat1, lon1, lat2, lon2);
        prop_assert!((0.0..360.0).contains(&bearing), "bearing {} out of range", bearing);
    }

    #[test]
    fn center_is_within_any_radius(lat in lat(), lon in lon(), radius in 0.0..20_000.0f64) {
        prop_assert!(is_within_radius(lat, lon, lat, lon, radius));
    }

    #[test]
    fn angle_conversions_round_trip(x in -1e6..1e6f64) {
        let there = radians_to_degrees(degrees_to_radians(x));
        prop_assert!((there - x).abs() <= 1e-9 * x.abs().max(1.0));
        let back = degrees_to_radians(radians_to_degrees(x));
        prop_assert!((back - x).abs() <= 1e-9 * x.abs().max(1.0));
    }

    #[test]
    fn compass_direction_is_periodic(bearing in 0.0..360.0f64) {
        // Out-of-range bearings reduce to the same sector as their in-range equivalent
        prop_assert_eq!(
            CompassDirection::from_bearing(bearing),
            CompassDirection::from_bearing(bearing + 360.0)
        );
    }
}
