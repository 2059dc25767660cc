//! Error types for the planner kernel and the geocoding adapter.

use thiserror::Error;

/// Errors returned by [`crate::planner::compute_best_route`].
///
/// None of these are transient; callers must fix the input before retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// The input did not contain exactly one start and exactly one end.
    #[error("expected exactly one start and one end, got {starts} start(s) and {ends} end(s)")]
    MalformedInput { starts: usize, ends: usize },
    /// More stops than the configured ceiling.
    #[error("{count} stops exceed the maximum of {max}")]
    TooManyStops { count: usize, max: usize },
    /// Two records share the same name.
    #[error("location {name:?} appears more than once")]
    DuplicateLocation { name: String },
    /// Enumeration produced no candidate. Indicates a bug in the enumerator.
    #[error("no candidate route to select from")]
    EmptyCandidateSet,
}

/// Errors returned by a [`crate::geocode::Geocoder`].
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The address was empty once normalized.
    #[error("address is empty")]
    EmptyAddress,
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The service answered but found nothing for the query.
    #[error("no match for {query:?}")]
    NoMatch { query: String },
}
