//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::SearchConfig;
use crate::store::Backend;

/// Shared application state.
///
/// Holds no network data: every request loads a fresh snapshot from the
/// store.
#[derive(Clone)]
pub struct AppState {
    /// Stop and route source
    pub store: Arc<Backend>,

    /// Planner configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: Backend, config: SearchConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
