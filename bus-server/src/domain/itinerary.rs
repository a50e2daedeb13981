//! Itinerary types.
//!
//! An `Itinerary` is a candidate travel plan between two stops: either a
//! single bus ride or two rides joined at a transfer stop. Itineraries are
//! built by the planner and never mutated afterwards.

use std::fmt;
use std::sync::Arc;

use super::{Route, StopId};

/// Whether an itinerary uses one bus or two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItineraryKind {
    /// One route, no change of bus
    Direct,
    /// Two routes with a single transfer
    Transfer,
}

impl ItineraryKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItineraryKind::Direct => "direct",
            ItineraryKind::Transfer => "transfer",
        }
    }
}

impl fmt::Display for ItineraryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of travel along a route relative to its native stop order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Travelling in the route's listed order
    Forward,
    /// Travelling against the route's listed order
    Reverse,
}

impl Direction {
    fn id_suffix(self) -> &'static str {
        match self {
            Direction::Forward => "fw",
            Direction::Reverse => "rev",
        }
    }
}

/// A computed travel plan from an origin stop to a destination stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    id: String,
    kind: ItineraryKind,
    routes: Vec<Arc<Route>>,
    stops: Vec<StopId>,
    total_fare: u32,
    estimated_time: u32,
    transfer_stop: Option<StopId>,
}

impl Itinerary {
    /// Creates a single-route itinerary.
    ///
    /// The id is `direct-<routeId>-fw` or `direct-<routeId>-rev`.
    pub fn direct(
        route: Arc<Route>,
        direction: Direction,
        stops: Vec<StopId>,
        total_fare: u32,
        estimated_time: u32,
    ) -> Self {
        Self {
            id: format!("direct-{}-{}", route.id, direction.id_suffix()),
            kind: ItineraryKind::Direct,
            routes: vec![route],
            stops,
            total_fare,
            estimated_time,
            transfer_stop: None,
        }
    }

    /// Creates a two-route itinerary changing buses at `transfer_stop`.
    ///
    /// The id is `transfer-<firstId>-<secondId>`. It is not unique when the
    /// same pair of routes meets at several stops.
    pub fn transfer(
        first: Arc<Route>,
        second: Arc<Route>,
        transfer_stop: StopId,
        stops: Vec<StopId>,
        total_fare: u32,
        estimated_time: u32,
    ) -> Self {
        Self {
            id: format!("transfer-{}-{}", first.id, second.id),
            kind: ItineraryKind::Transfer,
            routes: vec![first, second],
            stops,
            total_fare,
            estimated_time,
            transfer_stop: Some(transfer_stop),
        }
    }

    /// Deterministic id built from the route id(s).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Direct or transfer.
    pub fn kind(&self) -> ItineraryKind {
        self.kind
    }

    /// Routes ridden, in order.
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    /// Stops from origin to destination inclusive.
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    /// Estimated fare in whole currency units.
    pub fn total_fare(&self) -> u32 {
        self.total_fare
    }

    /// Estimated travel time in minutes.
    pub fn estimated_time(&self) -> u32 {
        self.estimated_time
    }

    /// Number of bus changes.
    pub fn transfers(&self) -> usize {
        self.routes.len().saturating_sub(1)
    }

    /// Stop where the rider changes bus, for transfer itineraries.
    pub fn transfer_stop(&self) -> Option<&StopId> {
        self.transfer_stop.as_ref()
    }

    /// First stop of the itinerary.
    pub fn origin(&self) -> Option<&StopId> {
        self.stops.first()
    }

    /// Last stop of the itinerary.
    pub fn destination(&self) -> Option<&StopId> {
        self.stops.last()
    }

    /// Returns true if no change of bus is needed.
    pub fn is_direct(&self) -> bool {
        self.kind == ItineraryKind::Direct
    }
}
