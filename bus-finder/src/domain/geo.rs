//! Great-circle distance between coordinates.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for all distance calculations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two points given in degrees.
///
/// Symmetric in its arguments and zero for identical points. NaN inputs
/// propagate as NaN rather than being rejected.
///
/// # Examples
///
/// ```
/// use bus_finder::domain::distance_km;
///
/// assert_eq!(distance_km(28.60, 77.20, 28.60, 77.20), 0.0);
///
/// let there = distance_km(28.60, 77.20, 28.70, 77.10);
/// let back = distance_km(28.70, 77.10, 28.60, 77.20);
/// assert!((there - back).abs() < 1e-12);
/// ```
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push near-antipodal points just past 1. Written as a
    // comparison so NaN passes through untouched.
    let a = if a > 1.0 { 1.0 } else { a };

    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Great-circle distance to another coordinate in kilometres.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        distance_km(self.lat, self.lon, other.lat, other.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero() {
        assert_eq!(distance_km(28.60, 77.20, 28.60, 77.20), 0.0);
        assert_eq!(distance_km(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // 2 * pi * 6371 / 360
        let d = distance_km(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111.194_926_6).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = distance_km(0.0, 0.0, 0.0, 180.0);
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn nan_propagates() {
        assert!(distance_km(f64::NAN, 77.2, 28.6, 77.2).is_nan());
    }

    #[test]
    fn coordinate_delegates() {
        let a = Coordinate::new(28.60, 77.20);
        let b = Coordinate::new(28.65, 77.25);
        assert_eq!(a.distance_km(&b), distance_km(28.60, 77.20, 28.65, 77.25));
    }

    #[test]
    fn coordinate_finiteness() {
        assert!(Coordinate::new(28.6, 77.2).is_finite());
        assert!(!Coordinate::new(f64::NAN, 77.2).is_finite());
        assert!(!Coordinate::new(28.6, f64::INFINITY).is_finite());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_lat() -> impl Strategy<Value = f64> {
        -90.0f64..=90.0
    }

    fn arb_lon() -> impl Strategy<Value = f64> {
        -180.0f64..=180.0
    }

    proptest! {
        /// Distance from a point to itself is zero
        #[test]
        fn zero_for_same_point(lat in arb_lat(), lon in arb_lon()) {
            prop_assert_eq!(distance_km(lat, lon, lat, lon), 0.0);
        }

        /// Swapping the endpoints gives the same distance
        #[test]
        fn symmetric(a in arb_lat(), b in arb_lon(), c in arb_lat(), d in arb_lon()) {
            let there = distance_km(a, b, c, d);
            let back = distance_km(c, d, a, b);
            prop_assert!((there - back).abs() < 1e-9, "{} vs {}", there, back);
        }

        /// Never negative and never longer than half the circumference
        #[test]
        fn bounded(a in arb_lat(), b in arb_lon(), c in arb_lat(), d in arb_lon()) {
            let dist = distance_km(a, b, c, d);
            prop_assert!(dist >= 0.0);
            prop_assert!(dist <= EARTH_RADIUS_KM * std::f64::consts::PI + 1e-6);
        }

        /// Along a meridian, moving further away never shortens the distance
        #[test]
        fn monotonic_along_meridian(lon in arb_lon(), near in 0.0f64..45.0, extra in 0.0f64..45.0) {
            let d_near = distance_km(0.0, lon, near, lon);
            let d_far = distance_km(0.0, lon, near + extra, lon);
            prop_assert!(d_far + 1e-9 >= d_near);
        }
    }
}
