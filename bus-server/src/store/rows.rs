//! Row types returned by the backing stores, and their conversion into
//! domain types.
//!
//! The database was populated by hand and by scripts over time, so rows are
//! read leniently: ids may be numbers or strings, coordinates may be null or
//! not numbers at all, and list columns may be null.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Route, RouteId, Stop, StopId};

/// An id column that may hold either a string or a number.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    /// The id in its canonical string form.
    pub fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// A row from the `stops` table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StopRow {
    pub id: RawId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub lat: Option<Value>,
    #[serde(default)]
    pub lng: Option<Value>,
    #[serde(default)]
    pub nearby_landmarks: Option<Vec<String>>,
}

/// A row from the `routes` table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteRow {
    pub id: RawId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stops: Option<Vec<RawId>>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
}

/// Only JSON numbers count as coordinates; strings and other values are
/// treated as an unknown location.
fn coordinate(value: Option<Value>) -> Option<f64> {
    value.as_ref().and_then(Value::as_f64)
}

impl From<StopRow> for Stop {
    fn from(row: StopRow) -> Self {
        Stop {
            id: StopId::new(row.id.into_string()),
            name: row.name.unwrap_or_default(),
            lat: coordinate(row.lat),
            lng: coordinate(row.lng),
            nearby_landmarks: row.nearby_landmarks.unwrap_or_default(),
        }
    }
}

impl From<RouteRow> for Route {
    fn from(row: RouteRow) -> Self {
        Route {
            id: RouteId::new(row.id.into_string()),
            name: row.name.unwrap_or_default(),
            stops: row
                .stops
                .unwrap_or_default()
                .into_iter()
                .map(|id| StopId::new(id.into_string()))
                .collect(),
            color: row.color,
            frequency: row.frequency,
        }
    }
}
