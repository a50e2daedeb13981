//! Domain types for the bus journey planner.
//!
//! Stops and routes are immutable snapshots of what the data source
//! returned. Itineraries are derived values built by the planner.

mod itinerary;
mod network;
mod route;
mod stop;

pub use itinerary::{Direction, Itinerary, ItineraryKind};
pub use network::Network;
pub use route::{Route, RouteId};
pub use stop::{Stop, StopId};
