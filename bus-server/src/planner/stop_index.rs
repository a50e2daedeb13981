//! Stop-to-route index for itinerary search.
//!
//! Finding every route that serves a stop, and where on that route the stop
//! sits, is the inner operation of both direct and transfer search. Building
//! the index once per search turns those scans into hash lookups, so the
//! transfer phase only visits route pairs that can actually connect the
//! origin to the destination.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Route, StopId};

/// A route calling at a stop, with the stop's position on that route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteStop {
    /// Index of the route in the network's route list.
    pub route: usize,
    /// Position of the first occurrence of the stop on the route.
    pub position: usize,
}

/// Index from stop id to the routes that serve it.
///
/// Only the first occurrence of a stop on each route is indexed, so a loop
/// route that revisits a stop is boarded at its first visit.
#[derive(Debug)]
pub struct StopIndex<'a> {
    routes: &'a [Arc<Route>],

    /// Stop -> routes serving it, in route order.
    by_stop: HashMap<&'a StopId, Vec<RouteStop>>,

    /// Per route: stop -> first position.
    positions: Vec<HashMap<&'a StopId, usize>>,
}

impl<'a> StopIndex<'a> {
    /// Build the index over `routes`.
    pub fn build(routes: &'a [Arc<Route>]) -> Self {
        let mut by_stop: HashMap<&'a StopId, Vec<RouteStop>> = HashMap::new();
        let mut positions = Vec::with_capacity(routes.len());

        for (route_idx, route) in routes.iter().enumerate() {
            let mut first_seen: HashMap<&'a StopId, usize> = HashMap::new();

            for (position, stop) in route.stops.iter().enumerate() {
                if first_seen.contains_key(stop) {
                    continue;
                }
                first_seen.insert(stop, position);
                by_stop.entry(stop).or_default().push(RouteStop {
                    route: route_idx,
                    position,
                });
            }

            positions.push(first_seen);
        }

        Self {
            routes,
            by_stop,
            positions,
        }
    }

    /// Routes serving `stop`, in route order.
    pub fn routes_at(&self, stop: &StopId) -> &[RouteStop] {
        self.by_stop.get(stop).map(Vec::as_slice).unwrap_or_default()
    }

    /// Position of the first occurrence of `stop` on route `route_idx`.
    pub fn position(&self, route_idx: usize, stop: &StopId) -> Option<usize> {
        self.positions.get(route_idx)?.get(stop).copied()
    }

    /// The route at `route_idx`.
    pub fn route(&self, route_idx: usize) -> &'a Arc<Route> {
        &self.routes[route_idx]
    }

    /// Number of distinct stops served by any route.
    pub fn stop_count(&self) -> usize {
        self.by_stop.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes() -> Vec<Arc<Route>> {
        vec![
            Arc::new(Route::new("R1", "One", ["A", "B", "C"])),
            Arc::new(Route::new("R2", "Two", ["C", "D", "A"])),
            Arc::new(Route::new("R3", "Loop", ["E", "F", "E"])),
        ]
    }

    #[test]
    fn routes_at_lists_routes_in_order() {
        let routes = routes();
        let index = StopIndex::build(&routes);

        assert_eq!(
            index.routes_at(&StopId::from("A")),
            &[
                RouteStop {
                    route: 0,
                    position: 0
                },
                RouteStop {
                    route: 1,
                    position: 2
                },
            ]
        );
        assert!(index.routes_at(&StopId::from("Z")).is_empty());
    }

    #[test]
    fn position_lookup() {
        let routes = routes();
        let index = StopIndex::build(&routes);

        assert_eq!(index.position(0, &StopId::from("C")), Some(2));
        assert_eq!(index.position(1, &StopId::from("C")), Some(0));
        assert_eq!(index.position(0, &StopId::from("D")), None);
        assert_eq!(index.position(9, &StopId::from("A")), None);
    }

    #[test]
    fn revisited_stop_indexed_once() {
        let routes = routes();
        let index = StopIndex::build(&routes);

        assert_eq!(index.routes_at(&StopId::from("E")).len(), 1);
        assert_eq!(index.position(2, &StopId::from("E")), Some(0));
        assert_eq!(index.stop_count(), 6);
    }

    #[test]
    fn route_accessor() {
        let routes = routes();
        let index = StopIndex::build(&routes);
        assert_eq!(index.route(1).id.as_str(), "R2");
    }
}
