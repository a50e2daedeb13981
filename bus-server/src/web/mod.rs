//! Web layer for the bus journey planner.
//!
//! Provides JSON endpoints for stop lookup and itinerary search.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
