//! Distance-based arrival estimates.

use std::fmt;

use serde::Serialize;

/// Assumed average bus speed in km/h.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 20.0;

/// Minutes to cover `distance_km` at the default average speed, rounded to
/// one decimal place.
///
/// # Examples
///
/// ```
/// use bus_finder::domain::eta_minutes;
///
/// assert_eq!(eta_minutes(20.0), 60.0);
/// assert_eq!(eta_minutes(0.0), 0.0);
/// assert_eq!(eta_minutes(3.0), 9.0);
/// ```
pub fn eta_minutes(distance_km: f64) -> f64 {
    eta_minutes_at(distance_km, DEFAULT_AVERAGE_SPEED_KMH)
}

/// Minutes to cover `distance_km` at `speed_kmh`, rounded to one decimal.
pub fn eta_minutes_at(distance_km: f64, speed_kmh: f64) -> f64 {
    round_tenths(distance_km / speed_kmh * 60.0)
}

/// Nearest one-decimal value to `value`, ties to even. Formatting rounds the
/// exact binary value, so no intermediate scaling error creeps in.
fn round_tenths(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// An arrival estimate in minutes.
///
/// Displays as `"<n> min"` with exactly one decimal, e.g. `"9.0 min"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Eta(f64);

impl Eta {
    /// Estimate from a distance using the given average speed.
    pub fn from_distance(distance_km: f64, speed_kmh: f64) -> Self {
        Eta(eta_minutes_at(distance_km, speed_kmh))
    }

    /// Wrap an already-rounded minute value.
    pub fn from_minutes(minutes: f64) -> Self {
        Eta(minutes)
    }

    /// The estimate in minutes.
    pub fn minutes(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} min", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_km_is_an_hour() {
        assert_eq!(eta_minutes(20.0), 60.0);
    }

    #[test]
    fn zero_distance() {
        assert_eq!(eta_minutes(0.0), 0.0);
    }

    #[test]
    fn rounds_to_one_decimal() {
        // 1.234 km -> 3.702 min
        assert_eq!(eta_minutes(1.234), 3.7);
        // 0.05 km -> 0.15 min
        assert_eq!(eta_minutes(0.051), 0.2);
    }

    #[test]
    fn rounds_the_exact_value() {
        // 0.35 / 3 km is 0.34999.. min, just below the tie
        assert_eq!(eta_minutes(0.35 / 3.0), 0.3);
        assert_eq!(eta_minutes(1.45 / 3.0), 1.4);
        // exactly 0.25 min: ties go to even
        assert_eq!(eta_minutes(0.25 / 3.0), 0.2);
        assert_eq!(Eta::from_distance(0.25 / 3.0, 20.0).to_string(), "0.2 min");
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(eta_minutes(f64::NAN).is_nan());
        assert_eq!(eta_minutes(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn custom_speed() {
        assert_eq!(eta_minutes_at(30.0, 60.0), 30.0);
    }

    #[test]
    fn display_keeps_one_decimal() {
        assert_eq!(Eta::from_distance(0.0, 20.0).to_string(), "0.0 min");
        assert_eq!(Eta::from_distance(3.0, 20.0).to_string(), "9.0 min");
        assert_eq!(Eta::from_minutes(12.3).to_string(), "12.3 min");
    }

    #[test]
    fn ordering_by_minutes() {
        assert!(Eta::from_minutes(1.0) < Eta::from_minutes(2.5));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Longer distances never produce shorter estimates
        #[test]
        fn monotonic(a in 0.0f64..500.0, extra in 0.0f64..500.0) {
            prop_assert!(eta_minutes(a + extra) >= eta_minutes(a));
        }

        /// The rounded estimate is within half a tenth of the exact value
        #[test]
        fn close_to_exact(d in 0.0f64..500.0) {
            let exact = d / DEFAULT_AVERAGE_SPEED_KMH * 60.0;
            prop_assert!((eta_minutes(d) - exact).abs() <= 0.05 + 1e-9);
        }
    }
}
