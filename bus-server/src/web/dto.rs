//! Data transfer objects for web requests and responses.
//!
//! Field names are camelCase to match what the existing front end reads.

use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, Route, Stop};
use crate::planner::{SortOrder, TransferFilter};

/// Query for itinerary search.
#[derive(Debug, Deserialize)]
pub struct SearchItinerariesRequest {
    /// Origin stop id
    pub from: Option<String>,

    /// Destination stop id
    pub to: Option<String>,

    /// Optional display ordering
    pub sort: Option<SortParam>,

    /// Optional transfer filter
    pub filter: Option<FilterParam>,
}

/// `sort` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortParam {
    Fastest,
    Cheapest,
    Transfers,
}

impl From<SortParam> for SortOrder {
    fn from(param: SortParam) -> Self {
        match param {
            SortParam::Fastest => SortOrder::Fastest,
            SortParam::Cheapest => SortOrder::Cheapest,
            SortParam::Transfers => SortOrder::FewestTransfers,
        }
    }
}

/// `filter` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterParam {
    All,
    Direct,
    Transfer,
}

impl From<FilterParam> for TransferFilter {
    fn from(param: FilterParam) -> Self {
        match param {
            FilterParam::All => TransferFilter::All,
            FilterParam::Direct => TransferFilter::Direct,
            FilterParam::Transfer => TransferFilter::Transfer,
        }
    }
}

/// Response for itinerary search.
#[derive(Debug, Serialize)]
pub struct SearchItinerariesResponse {
    pub itineraries: Vec<ItineraryResult>,
}

/// A route as shown alongside an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    pub id: String,
    pub name: String,
    pub stops: Vec<String>,
    pub color: Option<String>,
    pub frequency: Option<String>,
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        Self {
            id: route.id.to_string(),
            name: route.name.clone(),
            stops: route.stops.iter().map(ToString::to_string).collect(),
            color: route.color.clone(),
            frequency: route.frequency.clone(),
        }
    }
}

/// A candidate itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResult {
    pub id: String,
    /// "direct" or "transfer"
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub routes: Vec<RouteResult>,
    pub stops: Vec<String>,
    pub total_fare: u32,
    /// Minutes
    pub estimated_time: u32,
    pub transfers: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_stop: Option<String>,
}

impl ItineraryResult {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            id: itinerary.id().to_string(),
            kind: itinerary.kind().as_str(),
            routes: itinerary
                .routes()
                .iter()
                .map(|r| RouteResult::from_route(r))
                .collect(),
            stops: itinerary.stops().iter().map(ToString::to_string).collect(),
            total_fare: itinerary.total_fare(),
            estimated_time: itinerary.estimated_time(),
            transfers: itinerary.transfers(),
            transfer_stop: itinerary.transfer_stop().map(ToString::to_string),
        }
    }
}

/// Query for stop suggestions.
#[derive(Debug, Deserialize)]
pub struct StopSearchRequest {
    /// Text to match against stop names and landmarks
    #[serde(default)]
    pub q: String,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// A stop in suggestion or lookup results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopResult {
    pub id: String,
    pub name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub nearby_landmarks: Vec<String>,
}

impl StopResult {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            id: stop.id.to_string(),
            name: stop.name.clone(),
            lat: stop.lat,
            lng: stop.lng,
            nearby_landmarks: stop.nearby_landmarks.clone(),
        }
    }
}

/// Response for stop suggestions.
#[derive(Debug, Serialize)]
pub struct StopSearchResponse {
    pub stops: Vec<StopResult>,
}

/// Response listing the routes that serve a stop.
#[derive(Debug, Serialize)]
pub struct StopRoutesResponse {
    pub stop: StopResult,
    pub routes: Vec<RouteResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
