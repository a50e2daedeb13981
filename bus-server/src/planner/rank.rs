//! Itinerary ranking for search results.
//!
//! The planner always returns itineraries in one canonical order. Callers
//! can then re-sort or filter that list for display.

use crate::domain::Itinerary;

/// Rank itineraries by preference.
///
/// Itineraries are ranked by:
/// 1. Number of transfers (fewer is better)
/// 2. Total fare (cheaper is better)
///
/// The sort is stable: itineraries equal on both keys keep the order in
/// which the search found them.
pub fn rank_itineraries(mut itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    itineraries.sort_by_key(|it| (it.transfers(), it.total_fare()));
    itineraries
}

/// Display ordering chosen by the rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Shortest estimated time first
    Fastest,
    /// Lowest fare first
    Cheapest,
    /// Fewest transfers first
    FewestTransfers,
}

/// Which itineraries to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransferFilter {
    /// Everything
    #[default]
    All,
    /// Only single-bus itineraries
    Direct,
    /// Only itineraries with a transfer
    Transfer,
}

impl TransferFilter {
    /// Returns true if the itinerary passes the filter.
    pub fn accepts(&self, itinerary: &Itinerary) -> bool {
        match self {
            TransferFilter::All => true,
            TransferFilter::Direct => itinerary.transfers() == 0,
            TransferFilter::Transfer => itinerary.transfers() > 0,
        }
    }
}

/// Filter a ranked list, then optionally re-sort it.
///
/// Re-sorting is stable, so the canonical ranking breaks ties.
pub fn apply_view(
    itineraries: Vec<Itinerary>,
    filter: TransferFilter,
    sort: Option<SortOrder>,
) -> Vec<Itinerary> {
    let mut itineraries: Vec<Itinerary> = itineraries
        .into_iter()
        .filter(|it| filter.accepts(it))
        .collect();

    match sort {
        Some(SortOrder::Fastest) => itineraries.sort_by_key(Itinerary::estimated_time),
        Some(SortOrder::Cheapest) => itineraries.sort_by_key(Itinerary::total_fare),
        Some(SortOrder::FewestTransfers) => itineraries.sort_by_key(Itinerary::transfers),
        None => {}
    }

    itineraries
}
