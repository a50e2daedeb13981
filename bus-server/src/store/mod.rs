//! Data access for stops and routes.
//!
//! The planner never talks to a store directly. A request handler calls
//! [`load_network`], which fetches both tables and builds a [`Network`]
//! snapshot. Fetch failures are logged and treated as empty tables, so a
//! store outage shows up to riders as "no routes found" rather than an
//! error page.

mod client;
mod error;
mod file;
mod rows;

use std::future::Future;

use tracing::warn;

use crate::domain::{Network, Route, Stop};

pub use client::{SupabaseClient, SupabaseConfig};
pub use error::StoreError;
pub use file::{FileStore, NetworkFile};
pub use rows::{RawId, RouteRow, StopRow};

/// A source of stops and routes.
///
/// This abstraction allows the web layer to be run against a database, a
/// snapshot file, or in-memory test data.
pub trait TransitStore {
    /// Fetch every stop.
    fn fetch_stops(&self) -> impl Future<Output = Result<Vec<Stop>, StoreError>> + Send;

    /// Fetch every route.
    fn fetch_routes(&self) -> impl Future<Output = Result<Vec<Route>, StoreError>> + Send;
}

/// The store selected at start-up.
#[derive(Debug, Clone)]
pub enum Backend {
    /// Live Supabase database
    Supabase(SupabaseClient),
    /// JSON snapshot file
    File(FileStore),
}

impl TransitStore for Backend {
    async fn fetch_stops(&self) -> Result<Vec<Stop>, StoreError> {
        match self {
            Backend::Supabase(client) => client.fetch_stops().await,
            Backend::File(store) => store.fetch_stops().await,
        }
    }

    async fn fetch_routes(&self) -> Result<Vec<Route>, StoreError> {
        match self {
            Backend::Supabase(client) => client.fetch_routes().await,
            Backend::File(store) => store.fetch_routes().await,
        }
    }
}

/// Fetch all stops, logging and returning an empty list on failure.
pub async fn fetch_stops_or_empty<S: TransitStore>(store: &S) -> Vec<Stop> {
    store.fetch_stops().await.unwrap_or_else(|e| {
        warn!(error = %e, "failed to fetch stops");
        Vec::new()
    })
}

/// Fetch all routes, logging and returning an empty list on failure.
pub async fn fetch_routes_or_empty<S: TransitStore>(store: &S) -> Vec<Route> {
    store.fetch_routes().await.unwrap_or_else(|e| {
        warn!(error = %e, "failed to fetch routes");
        Vec::new()
    })
}

/// Load a fresh network snapshot. Never fails.
pub async fn load_network<S: TransitStore>(store: &S) -> Network {
    let (routes, stops) = tokio::join!(fetch_routes_or_empty(store), fetch_stops_or_empty(store));
    Network::new(routes, stops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopId;

    /// In-memory store that can be told to fail.
    struct MockStore {
        stops: Result<Vec<Stop>, u16>,
        routes: Result<Vec<Route>, u16>,
    }

    impl TransitStore for MockStore {
        async fn fetch_stops(&self) -> Result<Vec<Stop>, StoreError> {
            self.stops.clone().map_err(|status| StoreError::Api {
                status,
                message: "stops unavailable".to_string(),
            })
        }

        async fn fetch_routes(&self) -> Result<Vec<Route>, StoreError> {
            self.routes.clone().map_err(|status| StoreError::Api {
                status,
                message: "routes unavailable".to_string(),
            })
        }
    }

    fn stops() -> Vec<Stop> {
        vec![Stop::new("A", "Alpha"), Stop::new("B", "Bravo")]
    }

    fn routes() -> Vec<Route> {
        vec![Route::new("R1", "Route 1", ["A", "B"])]
    }

    #[tokio::test]
    async fn load_network_with_both_tables() {
        let store = MockStore {
            stops: Ok(stops()),
            routes: Ok(routes()),
        };

        let network = load_network(&store).await;

        assert_eq!(network.routes().len(), 1);
        assert_eq!(network.stops().len(), 2);
        assert!(network.stop(&StopId::from("B")).is_some());
    }

    #[tokio::test]
    async fn failed_fetches_become_empty() {
        let store = MockStore {
            stops: Err(503),
            routes: Ok(routes()),
        };

        assert!(fetch_stops_or_empty(&store).await.is_empty());
        assert_eq!(fetch_routes_or_empty(&store).await.len(), 1);

        let network = load_network(&store).await;
        assert!(network.is_empty());
        assert!(network.stops().is_empty());
        assert_eq!(network.routes().len(), 1);
    }

    #[tokio::test]
    async fn sample_snapshot_plans_transfers() {
        use crate::planner::{Planner, SearchConfig, SearchRequest};

        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/network.json");
        let network = load_network(&Backend::File(FileStore::new(path))).await;
        assert_eq!(network.routes().len(), 3);
        assert_eq!(network.stops().len(), 8);

        // Mirpur 10 to Motijheel needs a change: at Farmgate or Shahbagh
        // onto Route 9, or at Gulistan onto Route 12.
        let config = SearchConfig::default();
        let result = Planner::new(&network, &config).search(&SearchRequest::new("1", "6"));

        assert_eq!(result.len(), 3);
        let mut transfer_stops: Vec<_> = result
            .iter()
            .filter_map(|it| it.transfer_stop())
            .map(|s| s.as_str())
            .collect();
        transfer_stops.sort_unstable();
        assert_eq!(transfer_stops, vec!["3", "4", "5"]);
        assert!(
            result
                .windows(2)
                .all(|w| w[0].total_fare() <= w[1].total_fare())
        );
    }

    #[tokio::test]
    async fn file_backend_failure_is_swallowed() {
        let backend = Backend::File(FileStore::new("/nonexistent/path/network.json"));

        let network = load_network(&backend).await;

        assert!(network.routes().is_empty());
        assert!(network.stops().is_empty());
    }
}
