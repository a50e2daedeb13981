//! Itinerary search.
//!
//! Finds every way to ride from one stop to another using a single route,
//! or two routes joined at a shared stop.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Direction, Itinerary, Network, Route, Stop, StopId};
use crate::fare::estimate_fare;

use super::config::SearchConfig;
use super::rank::rank_itineraries;
use super::stop_index::{RouteStop, StopIndex};

/// Request for itinerary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Where the rider boards.
    pub from: StopId,

    /// Where the rider wants to get off.
    pub to: StopId,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(from: impl Into<StopId>, to: impl Into<StopId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Returns true if origin and destination are the same stop.
    pub fn is_round_trip(&self) -> bool {
        self.from == self.to
    }
}

/// Itinerary planner over a network snapshot.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Find direct and single-transfer itineraries, ranked best-first.
    ///
    /// Never fails: an empty network or unknown stops simply produce an
    /// empty list.
    pub fn search(&self, request: &SearchRequest) -> Vec<Itinerary> {
        if request.is_round_trip() || self.network.is_empty() {
            return Vec::new();
        }

        let index = StopIndex::build(self.network.routes());

        let mut itineraries = self.direct_itineraries(&index, request);
        let direct_count = itineraries.len();
        itineraries.extend(self.transfer_itineraries(&index, request));

        debug!(
            from = %request.from,
            to = %request.to,
            direct = direct_count,
            transfer = itineraries.len() - direct_count,
            "itinerary search complete"
        );

        rank_itineraries(itineraries)
    }

    /// One itinerary per route serving both stops.
    fn direct_itineraries(&self, index: &StopIndex<'_>, request: &SearchRequest) -> Vec<Itinerary> {
        let mut itineraries = Vec::new();

        for &RouteStop {
            route: route_idx,
            position: from_pos,
        } in index.routes_at(&request.from)
        {
            let Some(to_pos) = index.position(route_idx, &request.to) else {
                continue;
            };
            if from_pos == to_pos {
                continue;
            }

            let route = index.route(route_idx);
            let (direction, stops) = if from_pos < to_pos {
                (Direction::Forward, route.stops[from_pos..=to_pos].to_vec())
            } else {
                let mut stops = route.stops[to_pos..=from_pos].to_vec();
                stops.reverse();
                (Direction::Reverse, stops)
            };

            let stops = collapse(stops);
            let fare = self.fare(&stops);
            let minutes = self.config.estimated_minutes(stops.len());

            itineraries.push(Itinerary::direct(
                Arc::clone(route),
                direction,
                stops,
                fare,
                minutes,
            ));
        }

        itineraries
    }

    /// Itineraries riding one route to a shared stop, then another route
    /// onwards.
    ///
    /// For every ordered pair of distinct routes where the first serves the
    /// origin and the second serves the destination, each stop that comes
    /// after the origin on the first route and before the destination on the
    /// second is a transfer point.
    fn transfer_itineraries(
        &self,
        index: &StopIndex<'_>,
        request: &SearchRequest,
    ) -> Vec<Itinerary> {
        let mut itineraries = Vec::new();

        for &RouteStop {
            route: first_idx,
            position: from_pos,
        } in index.routes_at(&request.from)
        {
            let first = index.route(first_idx);

            for &RouteStop {
                route: second_idx,
                position: to_pos,
            } in index.routes_at(&request.to)
            {
                let second = index.route(second_idx);
                if first.id == second.id {
                    continue;
                }

                for (transfer_pos, stop) in first.stops.iter().enumerate().skip(from_pos + 1) {
                    // Later visits of a stop the route already passed are not
                    // separate transfer points.
                    if index.position(first_idx, stop) != Some(transfer_pos) {
                        continue;
                    }
                    let Some(board_pos) = index.position(second_idx, stop) else {
                        continue;
                    };
                    if board_pos >= to_pos {
                        continue;
                    }

                    itineraries.push(self.transfer_itinerary(
                        first,
                        second,
                        &first.stops[from_pos..=transfer_pos],
                        &second.stops[board_pos..=to_pos],
                    ));
                }
            }
        }

        itineraries
    }

    fn transfer_itinerary(
        &self,
        first: &Arc<Route>,
        second: &Arc<Route>,
        first_leg: &[StopId],
        second_leg: &[StopId],
    ) -> Itinerary {
        // Each leg is priced on its own and the fares added.
        let fare = self
            .fare(first_leg)
            .saturating_add(self.fare(second_leg));

        let transfer_stop = second_leg[0].clone();
        let mut stops = first_leg.to_vec();
        stops.extend_from_slice(&second_leg[1..]);
        let stops = collapse(stops);
        let minutes = self.config.estimated_minutes(stops.len());

        Itinerary::transfer(
            Arc::clone(first),
            Arc::clone(second),
            transfer_stop,
            stops,
            fare,
            minutes,
        )
    }

    fn fare(&self, stops: &[StopId]) -> u32 {
        estimate_fare(stops, self.network.stops_by_id(), &self.config.fare)
    }
}

/// Drop stops that immediately repeat their predecessor.
fn collapse(mut stops: Vec<StopId>) -> Vec<StopId> {
    stops.dedup();
    stops
}

/// Find ranked itineraries from `from` to `to` with the default
/// configuration.
pub fn search_routes(
    from: &StopId,
    to: &StopId,
    routes: Vec<Route>,
    stops: Vec<Stop>,
) -> Vec<Itinerary> {
    let network = Network::new(routes, stops);
    let config = SearchConfig::default();
    let request = SearchRequest::new(from.clone(), to.clone());

    Planner::new(&network, &config).search(&request)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
