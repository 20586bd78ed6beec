use actix::prelude::*;
use common::types::catalog::{MenuItem, Restaurant};
use common::types::comparison::PriceComparison;
use common::types::filters::{SearchFilters, SortBy};

/// Kick off a search for `query`. Results arrive at the engine's subscriber
/// after the simulated round trip, unless a newer search supersedes this one.
#[derive(Debug, Clone, Message)]
#[rtype(result = "()")]
pub struct Search {
    pub query: String,
}

/// Replace the engine's filter state. Applies to subsequent searches.
#[derive(Debug, Clone, Message)]
#[rtype(result = "()")]
pub struct SetFilters {
    pub filters: SearchFilters,
}

/// Replace the engine's sort order. Applies to subsequent searches.
#[derive(Debug, Clone, Copy, Message)]
#[rtype(result = "()")]
pub struct SetSortBy {
    pub sort_by: SortBy,
}

/// Build the cross-platform comparison for a dish, by exact
/// case-insensitive name.
#[derive(Debug, Clone, Message)]
#[rtype(result = "Option<PriceComparison>")]
pub struct ComparePrices {
    pub item_name: String,
}

/// Sent to the subscriber the moment a search is accepted, so the UI can
/// show a loading state.
#[derive(Debug, Clone, Message)]
#[rtype(result = "()")]
pub struct SearchStarted {
    pub query: String,
}

/// Sent to the subscriber when a search completes and is still the latest.
#[derive(Debug, Clone, Message)]
#[rtype(result = "()")]
pub struct SearchResultsReady {
    pub query: String,
    pub restaurants: Vec<Restaurant>,
    pub menu_items: Vec<MenuItem>,
    pub total_results: usize,
}

/// Last applied search outcome, kept by the engine for the UI and tests.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub query: String,
    pub restaurants: Vec<Restaurant>,
    pub menu_items: Vec<MenuItem>,
    pub loading: bool,
}

/// Snapshot request for the engine's current outcome.
#[derive(Debug, Clone, Copy, Message)]
#[rtype(result = "SearchOutcome")]
pub struct GetResults;
