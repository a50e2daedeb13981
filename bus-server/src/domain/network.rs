//! A snapshot of the bus network used for one search.

use std::collections::HashMap;
use std::sync::Arc;

use super::{Route, Stop, StopId};

/// Routes and stops loaded for a single search.
///
/// The snapshot is immutable; a new one is built for every request.
#[derive(Debug, Clone, Default)]
pub struct Network {
    routes: Vec<Arc<Route>>,
    stops: Vec<Stop>,
    stops_by_id: HashMap<StopId, Stop>,
}

impl Network {
    /// Build a snapshot from raw route and stop lists.
    ///
    /// If two stops share an id, the later one wins the id lookup.
    pub fn new(routes: Vec<Route>, stops: Vec<Stop>) -> Self {
        let stops_by_id = stops
            .iter()
            .map(|stop| (stop.id.clone(), stop.clone()))
            .collect();

        Self {
            routes: routes.into_iter().map(Arc::new).collect(),
            stops,
            stops_by_id,
        }
    }

    /// Routes in the order the data source returned them.
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    /// Stops in the order the data source returned them.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Stop lookup by id.
    pub fn stops_by_id(&self) -> &HashMap<StopId, Stop> {
        &self.stops_by_id
    }

    /// Look up a single stop.
    pub fn stop(&self, id: &StopId) -> Option<&Stop> {
        self.stops_by_id.get(id)
    }

    /// Returns true if there is nothing to search.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty() || self.stops.is_empty()
    }

    /// Stops whose name or nearby landmarks contain `query`, ignoring case.
    ///
    /// A blank query matches nothing.
    pub fn suggest_stops(&self, query: &str, limit: usize) -> Vec<&Stop> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.stops
            .iter()
            .filter(|stop| stop.matches_lowercase(&needle))
            .take(limit)
            .collect()
    }

    /// Routes that call at `stop`, in input order.
    pub fn routes_serving(&self, stop: &StopId) -> Vec<Arc<Route>> {
        self.routes
            .iter()
            .filter(|route| route.serves(stop))
            .cloned()
            .collect()
    }
}
