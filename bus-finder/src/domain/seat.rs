//! Seat availability.
//!
//! Occupancy is not predicted yet. A vehicle's seat load is a scalar in
//! `[0, 1)` supplied by a [`SeatLoadProvider`]; the search only buckets it.
//! The random provider stands in until a real predictor exists.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::vehicle::LiveVehicleRecord;

/// Fraction of seats taken, in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(from = "f64")]
pub struct SeatLoad(f64);

impl From<f64> for SeatLoad {
    fn from(value: f64) -> Self {
        SeatLoad::new(value)
    }
}

impl SeatLoad {
    /// Create a seat load, clamping into `[0, 1)`. NaN becomes `0.0`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() || value < 0.0 {
            SeatLoad(0.0)
        } else if value >= 1.0 {
            SeatLoad(1.0 - f64::EPSILON)
        } else {
            SeatLoad(value)
        }
    }

    /// The raw scalar.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Bucket into a display status. Both thresholds are exclusive.
    pub fn status(&self) -> SeatStatus {
        if self.0 > 0.7 {
            SeatStatus::Low
        } else if self.0 > 0.4 {
            SeatStatus::Medium
        } else {
            SeatStatus::High
        }
    }
}

/// How many seats are likely free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SeatStatus {
    /// Few seats left.
    Low,
    /// Moderately full.
    Medium,
    /// Many seats available.
    High,
}

impl SeatStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SeatStatus::Low => "Low",
            SeatStatus::Medium => "Medium",
            SeatStatus::High => "High",
        }
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Source of seat-load scalars for live vehicles.
///
/// Implementations must be cheap; they are called once per matched vehicle
/// per search.
pub trait SeatLoadProvider: Send + Sync {
    fn seat_load(&self, vehicle: &LiveVehicleRecord) -> SeatLoad;
}

/// Uniformly random seat load, drawn fresh on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSeatLoad;

impl SeatLoadProvider for RandomSeatLoad {
    fn seat_load(&self, _vehicle: &LiveVehicleRecord) -> SeatLoad {
        SeatLoad::new(rand::random::<f64>())
    }
}

/// The same seat load for every vehicle.
#[derive(Debug, Clone, Copy)]
pub struct FixedSeatLoad(pub SeatLoad);

impl SeatLoadProvider for FixedSeatLoad {
    fn seat_load(&self, _vehicle: &LiveVehicleRecord) -> SeatLoad {
        self.0
    }
}

/// Uses the load carried on the vehicle record, falling back to `fallback`
/// for vehicles that arrive without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordedSeatLoad<P> {
    fallback: P,
}

impl<P: SeatLoadProvider> RecordedSeatLoad<P> {
    pub fn new(fallback: P) -> Self {
        Self { fallback }
    }
}

impl<P: SeatLoadProvider> SeatLoadProvider for RecordedSeatLoad<P> {
    fn seat_load(&self, vehicle: &LiveVehicleRecord) -> SeatLoad {
        vehicle
            .seat_load
            .unwrap_or_else(|| self.fallback.seat_load(vehicle))
    }
}

/// Whether an individual seat is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatState {
    Available,
    Booked,
}

/// Placeholder seat map: each seat is independently available or booked
/// with equal probability.
pub fn random_seat_map(seats: usize) -> Vec<SeatState> {
    (0..seats)
        .map(|_| {
            if rand::random::<bool>() {
                SeatState::Available
            } else {
                SeatState::Booked
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VehicleId;

    fn vehicle(seat_load: Option<SeatLoad>) -> LiveVehicleRecord {
        LiveVehicleRecord {
            seat_load,
            ..LiveVehicleRecord::new(VehicleId::new("DL1PC0001"), "DL1PC0001".to_string())
        }
    }

    #[test]
    fn buckets() {
        assert_eq!(SeatLoad::new(0.75).status(), SeatStatus::Low);
        assert_eq!(SeatLoad::new(0.5).status(), SeatStatus::Medium);
        assert_eq!(SeatLoad::new(0.1).status(), SeatStatus::High);
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(SeatLoad::new(0.7).status(), SeatStatus::Medium);
        assert_eq!(SeatLoad::new(0.4).status(), SeatStatus::High);
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(SeatLoad::new(-0.5).value(), 0.0);
        assert_eq!(SeatLoad::new(f64::NAN).value(), 0.0);
        assert!(SeatLoad::new(1.0).value() < 1.0);
        assert!(SeatLoad::new(7.0).value() < 1.0);
    }

    #[test]
    fn labels() {
        assert_eq!(SeatStatus::Low.to_string(), "Low");
        assert_eq!(SeatStatus::Medium.to_string(), "Medium");
        assert_eq!(SeatStatus::High.to_string(), "High");
    }

    #[test]
    fn random_provider_stays_in_range() {
        let v = vehicle(None);
        for _ in 0..1000 {
            let load = RandomSeatLoad.seat_load(&v).value();
            assert!((0.0..1.0).contains(&load));
        }
    }

    #[test]
    fn recorded_prefers_vehicle_value() {
        let provider = RecordedSeatLoad::new(FixedSeatLoad(SeatLoad::new(0.1)));
        assert_eq!(
            provider.seat_load(&vehicle(Some(SeatLoad::new(0.9)))).status(),
            SeatStatus::Low
        );
        assert_eq!(
            provider.seat_load(&vehicle(None)).status(),
            SeatStatus::High
        );
    }

    #[test]
    fn seat_map_has_requested_size() {
        assert_eq!(random_seat_map(40).len(), 40);
        assert!(random_seat_map(0).is_empty());
    }
}
