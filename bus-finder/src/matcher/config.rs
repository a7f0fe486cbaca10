//! Search configuration for the bus matcher.

use crate::domain::DEFAULT_AVERAGE_SPEED_KMH;

/// Default radius around the source stop within which any bus is reported.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 5.0;

/// Configuration parameters for a vehicle search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Buses within this distance of the source stop (km, inclusive) are
    /// reported even when they serve neither a valid trip nor route.
    pub nearby_radius_km: f64,

    /// Assumed average speed used for arrival estimates (km/h).
    pub average_speed_kmh: f64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(nearby_radius_km: f64, average_speed_kmh: f64) -> Self {
        Self {
            nearby_radius_km,
            average_speed_kmh,
        }
    }

    /// Set the nearby radius.
    pub fn with_nearby_radius_km(mut self, km: f64) -> Self {
        self.nearby_radius_km = km;
        self
    }

    /// Set the average speed.
    pub fn with_average_speed_kmh(mut self, kmh: f64) -> Self {
        self.average_speed_kmh = kmh;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            nearby_radius_km: DEFAULT_NEARBY_RADIUS_KM,
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
        }
    }
}
