//! Best route selection.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::PlannerError;
use crate::route::AnnotatedRoute;

/// Return the candidate with the smallest total distance.
///
/// Candidates are consumed in order and only a strictly smaller total
/// replaces the current best, so on a tie the earliest candidate wins.
/// Fails with [`PlannerError::EmptyCandidateSet`] if there is nothing to
/// choose from.
pub fn select_best<'a, I>(candidates: I) -> Result<AnnotatedRoute<'a>, PlannerError>
where
    I: IntoIterator<Item = AnnotatedRoute<'a>>,
{
    let mut best: Option<AnnotatedRoute<'a>> = None;
    let mut seen = 0usize;

    for candidate in candidates {
        seen += 1;
        trace!(route = ?candidate.names(), total = candidate.total(), "candidate");
        let better = match &best {
            None => true,
            Some(current) => candidate.total().total_cmp(&current.total()) == Ordering::Less,
        };
        if better {
            best = Some(candidate);
        }
    }

    let best = best.ok_or(PlannerError::EmptyCandidateSet)?;
    debug!(candidates = seen, total = best.total(), route = ?best.names(), "selected best route");
    Ok(best)
}
