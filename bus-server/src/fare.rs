//! Distance-based fare estimation.
//!
//! Fares are priced per kilometre travelled along the stop sequence, with a
//! minimum fare and rounding to the nearest 5 units. Stop coordinates in the
//! wild are noisy, so the distance is computed defensively:
//!
//! - consecutive duplicate stops are collapsed,
//! - segments with missing or out-of-range coordinates are ignored,
//! - segments longer than a city hop can plausibly be are ignored,
//! - segments far longer than the median segment are dropped as outliers,
//! - if nothing survives, the straight-line distance between the endpoints
//!   is used instead.

use std::collections::HashMap;

use crate::domain::{Stop, StopId};
use crate::geo::{haversine_distance_km, median};

/// Parameters of the fare model.
#[derive(Debug, Clone, PartialEq)]
pub struct FareConfig {
    /// Price per kilometre.
    pub rate_per_km: f64,

    /// Lowest fare ever charged.
    pub minimum_fare: u32,

    /// Fares are rounded to the nearest multiple of this.
    pub rounding_step: u32,

    /// Segments longer than this (km) are treated as bad data.
    pub max_segment_km: f64,

    /// Segments longer than this multiple of the median are outliers.
    pub outlier_factor: f64,

    /// The outlier gate never drops segments shorter than this (km).
    pub outlier_floor_km: f64,

    /// Minimum number of segments before outlier filtering applies.
    pub outlier_min_segments: usize,
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            rate_per_km: 2.42,
            minimum_fare: 10,
            rounding_step: 5,
            max_segment_km: 15.0,
            outlier_factor: 3.0,
            outlier_floor_km: 1.0,
            outlier_min_segments: 3,
        }
    }
}

/// Estimate the fare for riding through `stop_ids` in order.
///
/// Never fails: missing stops and bad coordinates only reduce the distance,
/// and the result is always at least the minimum fare.
pub fn estimate_fare(
    stop_ids: &[StopId],
    stops_by_id: &HashMap<StopId, Stop>,
    config: &FareConfig,
) -> u32 {
    if stop_ids.len() < 2 {
        return config.minimum_fare;
    }

    let mut path = stop_ids.to_vec();
    path.dedup();

    let total_km = travelled_km(&path, stops_by_id, config);
    price(total_km, config)
}

/// Distance along `path` in km, after filtering and endpoint fallback.
fn travelled_km(path: &[StopId], stops_by_id: &HashMap<StopId, Stop>, config: &FareConfig) -> f64 {
    let coords = |id: &StopId| stops_by_id.get(id).and_then(Stop::coordinates);

    let segments: Vec<f64> = path
        .windows(2)
        .filter_map(|pair| {
            let (lat1, lon1) = coords(&pair[0])?;
            let (lat2, lon2) = coords(&pair[1])?;
            let km = haversine_distance_km(lat1, lon1, lat2, lon2);
            (km <= config.max_segment_km).then_some(km)
        })
        .collect();

    let mut total_km: f64 = if segments.len() >= config.outlier_min_segments {
        let gate = median(&segments)
            .map(|m| (m * config.outlier_factor).max(config.outlier_floor_km))
            .unwrap_or(config.outlier_floor_km);
        segments.iter().filter(|&&km| km <= gate).sum()
    } else {
        segments.iter().sum()
    };

    if total_km == 0.0 {
        let endpoints = path
            .first()
            .and_then(|first| coords(first))
            .zip(path.last().and_then(|last| coords(last)));
        if let Some(((lat1, lon1), (lat2, lon2))) = endpoints {
            total_km = haversine_distance_km(lat1, lon1, lat2, lon2);
        }
    }

    total_km
}

/// Convert a distance into a rounded fare.
fn price(total_km: f64, config: &FareConfig) -> u32 {
    let raw = (total_km * config.rate_per_km).max(f64::from(config.minimum_fare));
    let step = f64::from(config.rounding_step.max(1));
    // Half-way values round up; all values here are positive.
    let rounded = (raw / step).round() * step;
    rounded as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Degrees of latitude per kilometre on the 6371 km sphere.
    const DEG_PER_KM: f64 = 1.0 / 111.194_926_644_558_73;

    fn ids(stops: &[&str]) -> Vec<StopId> {
        stops.iter().map(|s| StopId::from(*s)).collect()
    }

    /// Stops laid out due north of (0, 0) at the given kilometre marks.
    fn stops_at_km(marks: &[(&str, f64)]) -> HashMap<StopId, Stop> {
        marks
            .iter()
            .map(|(id, km)| {
                let stop = Stop::new(*id, *id).with_location(km * DEG_PER_KM, 0.0);
                (stop.id.clone(), stop)
            })
            .collect()
    }

    fn fare(stop_ids: &[&str], stops: &HashMap<StopId, Stop>) -> u32 {
        estimate_fare(&ids(stop_ids), stops, &FareConfig::default())
    }

    #[test]
    fn fewer_than_two_stops_costs_minimum() {
        let stops = stops_at_km(&[("A", 0.0)]);
        assert_eq!(fare(&[], &stops), 10);
        assert_eq!(fare(&["A"], &stops), 10);
    }

    #[test]
    fn identical_coordinates_cost_minimum() {
        let mut stops = stops_at_km(&[("A", 2.0)]);
        let twin = Stop::new("B", "B").with_location(2.0 * DEG_PER_KM, 0.0);
        stops.insert(twin.id.clone(), twin);

        assert_eq!(fare(&["A", "B"], &stops), 10);
    }

    #[test]
    fn short_trip_lifted_to_minimum() {
        // 3 km * 2.42 = 7.26, below the minimum
        let stops = stops_at_km(&[("A", 0.0), ("B", 1.0), ("C", 2.0), ("D", 3.0)]);
        assert_eq!(fare(&["A", "B", "C", "D"], &stops), 10);
    }

    #[test]
    fn rounds_to_nearest_five() {
        // 8.8 km * 2.42 = 21.296 -> 20
        let stops = stops_at_km(&[("A", 0.0), ("B", 4.4), ("C", 8.8)]);
        assert_eq!(fare(&["A", "B", "C"], &stops), 20);

        // 9.5 km * 2.42 = 22.99 -> 25
        let stops = stops_at_km(&[("A", 0.0), ("B", 4.75), ("C", 9.5)]);
        assert_eq!(fare(&["A", "B", "C"], &stops), 25);
    }

    #[test]
    fn half_way_rounds_up() {
        let config = FareConfig {
            rate_per_km: 1.0,
            ..FareConfig::default()
        };
        assert_eq!(price(12.5, &config), 15);
        assert_eq!(price(12.4, &config), 10);
    }

    #[test]
    fn consecutive_duplicates_are_collapsed() {
        let stops = stops_at_km(&[("A", 0.0), ("B", 5.0), ("C", 10.0)]);
        assert_eq!(
            fare(&["A", "A", "B", "B", "B", "C"], &stops),
            fare(&["A", "B", "C"], &stops)
        );
    }

    #[test]
    fn overlong_segment_is_ignored() {
        // A-B is 20 km, over the 15 km cap; only B-C (6 km) counts.
        let stops = stops_at_km(&[("A", 0.0), ("B", 20.0), ("C", 26.0)]);
        // 6 * 2.42 = 14.52 -> 15
        assert_eq!(fare(&["A", "B", "C"], &stops), 15);
    }

    #[test]
    fn outlier_segment_is_dropped() {
        // Segments 2, 2, 2, 12 km: median 2, gate 6, so the 12 km hop goes.
        let stops = stops_at_km(&[("A", 0.0), ("B", 2.0), ("C", 4.0), ("D", 6.0), ("E", 18.0)]);
        // 6 * 2.42 = 14.52 -> 15
        assert_eq!(fare(&["A", "B", "C", "D", "E"], &stops), 15);
    }

    #[test]
    fn outlier_gate_has_one_km_floor() {
        // Segments 0.1, 0.1, 0.9 km: 3x median is 0.3 but the floor keeps 0.9.
        let stops = stops_at_km(&[("A", 0.0), ("B", 0.1), ("C", 0.2), ("D", 1.1)]);
        let path = ids(&["A", "B", "C", "D"]);
        let km = travelled_km(&path, &stops, &FareConfig::default());
        assert!((km - 1.1).abs() < 1e-6, "got {km}");
    }

    #[test]
    fn outlier_gate_needs_three_segments() {
        // Two segments, 1 and 10 km: no median filtering.
        let stops = stops_at_km(&[("A", 0.0), ("B", 1.0), ("C", 11.0)]);
        let path = ids(&["A", "B", "C"]);
        let km = travelled_km(&path, &stops, &FareConfig::default());
        assert!((km - 11.0).abs() < 1e-6, "got {km}");
    }

    #[test]
    fn invalid_middle_stop_falls_back_to_endpoints() {
        let mut stops = stops_at_km(&[("A", 0.0), ("C", 10.0)]);
        let bad = Stop::new("B", "B").with_location(200.0, 0.0);
        stops.insert(bad.id.clone(), bad);

        // No valid segment, so use A-C directly: 10 km * 2.42 = 24.2 -> 25
        assert_eq!(fare(&["A", "B", "C"], &stops), 25);
    }

    #[test]
    fn invalid_endpoint_defaults_to_minimum() {
        let mut stops = stops_at_km(&[("B", 5.0)]);
        let bad = Stop::new("A", "A").with_location(200.0, 0.0);
        stops.insert(bad.id.clone(), bad);

        assert_eq!(fare(&["A", "B"], &stops), 10);
    }

    #[test]
    fn unknown_stops_default_to_minimum() {
        let stops = HashMap::new();
        assert_eq!(fare(&["X", "Y", "Z"], &stops), 10);
    }

    #[test]
    fn fare_is_direction_independent() {
        let stops = stops_at_km(&[("A", 0.0), ("B", 3.0), ("C", 7.5), ("D", 12.0)]);
        assert_eq!(fare(&["A", "B", "C", "D"], &stops), fare(&["D", "C", "B", "A"], &stops));
    }
}
