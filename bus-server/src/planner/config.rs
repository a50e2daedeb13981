//! Search configuration for the journey planner.

use crate::fare::FareConfig;

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Minutes added per stop on the itinerary.
    pub minutes_per_stop: u32,

    /// Fixed minutes added to every itinerary (waiting, boarding).
    pub base_minutes: u32,

    /// Fare model applied to each leg.
    pub fare: FareConfig,
}

impl SearchConfig {
    /// Create a new configuration with the given time model.
    pub fn new(minutes_per_stop: u32, base_minutes: u32, fare: FareConfig) -> Self {
        Self {
            minutes_per_stop,
            base_minutes,
            fare,
        }
    }

    /// Estimated travel time in minutes for an itinerary visiting
    /// `stop_count` stops.
    pub fn estimated_minutes(&self, stop_count: usize) -> u32 {
        let stops = u32::try_from(stop_count).unwrap_or(u32::MAX);
        stops
            .saturating_mul(self.minutes_per_stop)
            .saturating_add(self.base_minutes)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            minutes_per_stop: 3,
            base_minutes: 5,
            fare: FareConfig::default(),
        }
    }
}
