//! Best route pipeline.
//!
//! locations -> [`RouteParts`] -> [`PermutationEnumerator`] -> annotate ->
//! [`select_best`]. Each call is independent; nothing is kept between calls.

use rayon::prelude::*;
use tracing::debug;

use crate::distance::{annotate, DistanceMetric, Planar};
use crate::error::PlannerError;
use crate::location::Location;
use crate::permutations::{PermutationEnumerator, DEFAULT_MAX_STOPS};
use crate::route::{AnnotatedRoute, RouteParts};
use crate::selector::select_best;

#[derive(Debug, Clone)]
pub struct PlannerOptions {
    /// Maximum number of intermediate stops accepted.
    pub max_stops: usize,
    /// Annotate candidates on the rayon thread pool.
    pub parallel: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            max_stops: DEFAULT_MAX_STOPS,
            parallel: false,
        }
    }
}

/// Order the stops in `locations` to minimize planar distance.
///
/// See [`compute_best_route_with`] for the failure modes.
pub fn compute_best_route(
    locations: &[Location],
    options: PlannerOptions,
) -> Result<AnnotatedRoute<'_>, PlannerError> {
    compute_best_route_with(locations, &Planar, options)
}

/// Order the stops in `locations` to minimize distance under `metric`.
///
/// Fails with [`PlannerError::MalformedInput`] unless there is exactly one
/// start and one end, [`PlannerError::DuplicateLocation`] on a repeated name,
/// and [`PlannerError::TooManyStops`] past
/// `options.max_stops`. No partial result is returned.
pub fn compute_best_route_with<'a, M>(
    locations: &'a [Location],
    metric: &M,
    options: PlannerOptions,
) -> Result<AnnotatedRoute<'a>, PlannerError>
where
    M: DistanceMetric,
{
    let parts = RouteParts::build(locations)?;
    let candidates = PermutationEnumerator::new(&parts, options.max_stops)?;
    debug!(candidates = candidates.len(), parallel = options.parallel, "enumerating routes");

    if options.parallel {
        // Collect keeps enumeration order, so the tie-break is unchanged.
        let routes: Vec<_> = candidates.collect();
        let annotated: Vec<_> = routes
            .into_par_iter()
            .map(|route| annotate(route, metric))
            .collect();
        select_best(annotated)
    } else {
        select_best(candidates.map(|route| annotate(route, metric)))
    }
}
