//! Bus route types.

use std::fmt;

use super::StopId;

/// Opaque identifier of a bus route.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(String);

impl RouteId {
    /// Create a route id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouteId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RouteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bus line: an ordered chain of stops.
///
/// The stop list is kept exactly as the data source provides it. Adjacent
/// repeats are not expected but are not rejected either; the search and fare
/// code tolerate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Unique route id
    pub id: RouteId,
    /// Display name (e.g. "Route 6")
    pub name: String,
    /// Stops served, in running order
    pub stops: Vec<StopId>,
    /// Display colour, usually a CSS hex string
    pub color: Option<String>,
    /// Service frequency label (e.g. "Every 10 min")
    pub frequency: Option<String>,
}

impl Route {
    /// Create a route without display metadata.
    pub fn new<I, S>(id: impl Into<RouteId>, name: impl Into<String>, stops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StopId>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            stops: stops.into_iter().map(Into::into).collect(),
            color: None,
            frequency: None,
        }
    }

    /// Position of the first occurrence of `stop` on this route.
    pub fn position_of(&self, stop: &StopId) -> Option<usize> {
        self.stops.iter().position(|s| s == stop)
    }

    /// Returns true if the route calls at `stop`.
    pub fn serves(&self, stop: &StopId) -> bool {
        self.stops.contains(stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_of_uses_first_occurrence() {
        let route = Route::new("R1", "Loop", ["A", "B", "C", "A"]);

        assert_eq!(route.position_of(&StopId::from("A")), Some(0));
        assert_eq!(route.position_of(&StopId::from("C")), Some(2));
        assert_eq!(route.position_of(&StopId::from("Z")), None);
    }

    #[test]
    fn serves() {
        let route = Route::new("R1", "Line", ["A", "B"]);
        assert!(route.serves(&StopId::from("B")));
        assert!(!route.serves(&StopId::from("C")));
    }

    #[test]
    fn route_id_display() {
        assert_eq!(RouteId::from("6A").to_string(), "6A");
        assert_eq!(format!("{:?}", RouteId::from("6A")), "RouteId(6A)");
    }
}
