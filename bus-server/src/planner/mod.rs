//! Itinerary planner over a bus network snapshot.
//!
//! This module implements the route search that answers:
//! "Which buses can take me from this stop to that one?"
//!
//! Only direct rides and rides with a single transfer are considered. Each
//! candidate is priced with the distance-based fare model and the results
//! are ranked by transfers, then fare.

mod config;
mod rank;
mod search;
mod stop_index;

pub use config::SearchConfig;
pub use rank::{SortOrder, TransferFilter, apply_view, rank_itineraries};
pub use search::{Planner, SearchRequest, search_routes};
pub use stop_index::{RouteStop, StopIndex};
