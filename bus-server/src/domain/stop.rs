//! Bus stop types.

use std::fmt;

/// Opaque identifier of a bus stop.
///
/// The backing store may hand out numeric or textual ids; both are kept in
/// their string form so that comparisons are always by exact text.
///
/// # Examples
///
/// ```
/// use bus_server::domain::StopId;
///
/// let id = StopId::new("42");
/// assert_eq!(id.as_str(), "42");
/// assert_eq!(id, StopId::from("42"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(String);

impl StopId {
    /// Create a stop id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StopId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StopId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A physical bus stop.
///
/// Latitude and longitude are optional: a stop with an unknown location is
/// still a valid stop, it just cannot contribute to distance calculations.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Unique stop id
    pub id: StopId,
    /// Display name
    pub name: String,
    /// Latitude in degrees, if known
    pub lat: Option<f64>,
    /// Longitude in degrees, if known
    pub lng: Option<f64>,
    /// Names of nearby landmarks, used for search hints
    pub nearby_landmarks: Vec<String>,
}

impl Stop {
    /// Create a stop with no location and no landmarks.
    pub fn new(id: impl Into<StopId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat: None,
            lng: None,
            nearby_landmarks: Vec::new(),
        }
    }

    /// Set the stop's location.
    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    /// Add nearby landmark names.
    pub fn with_landmarks<I, S>(mut self, landmarks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nearby_landmarks
            .extend(landmarks.into_iter().map(Into::into));
        self
    }

    /// Returns `(lat, lng)` if the stop has a usable location.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        if crate::geo::is_valid_coordinate(self) {
            Some((self.lat?, self.lng?))
        } else {
            None
        }
    }

    /// Case-insensitive substring match on the name or any landmark.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .nearby_landmarks
                .iter()
                .any(|landmark| landmark.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_id_display_and_debug() {
        let id = StopId::new("S1");
        assert_eq!(format!("{}", id), "S1");
        assert_eq!(format!("{:?}", id), "StopId(S1)");
    }

    #[test]
    fn stop_id_equality_is_textual() {
        assert_eq!(StopId::from("7"), StopId::new(String::from("7")));
        assert_ne!(StopId::from("7"), StopId::from("07"));
    }

    #[test]
    fn coordinates_require_both_values() {
        let mut stop = Stop::new("S1", "Farmgate");
        assert_eq!(stop.coordinates(), None);

        stop.lat = Some(23.75);
        assert_eq!(stop.coordinates(), None);

        stop.lng = Some(90.39);
        assert_eq!(stop.coordinates(), Some((23.75, 90.39)));
    }

    #[test]
    fn coordinates_reject_out_of_range() {
        let stop = Stop::new("S1", "Nowhere").with_location(200.0, 90.0);
        assert_eq!(stop.coordinates(), None);
    }

    #[test]
    fn matches_name_or_landmark() {
        let stop =
            Stop::new("S1", "Shahbagh").with_landmarks(["National Museum", "Dhaka University"]);

        assert!(stop.matches_lowercase("shah"));
        assert!(stop.matches_lowercase("museum"));
        assert!(stop.matches_lowercase("university"));
        assert!(!stop.matches_lowercase("airport"));
    }
}
