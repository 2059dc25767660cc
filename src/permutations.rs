//! Lazy enumeration of stop orderings.
//!
//! Orderings are produced in lexicographic order of the stops' input
//! positions, so `[0, 1, 2]` comes first and `[2, 1, 0]` last. The selector
//! relies on this order for its tie-break.

use tracing::warn;

use crate::error::PlannerError;
use crate::location::Location;
use crate::route::{Route, RouteParts};

/// Default ceiling on stops. 5! = 120 candidate routes.
pub const DEFAULT_MAX_STOPS: usize = 5;

/// Iterator over every [`Route`] with start and end held fixed.
#[derive(Debug, Clone)]
pub struct PermutationEnumerator<'a> {
    start: &'a Location,
    stops: Vec<&'a Location>,
    end: &'a Location,
    indices: Vec<usize>,
    remaining: usize,
}

impl<'a> PermutationEnumerator<'a> {
    /// Fails with [`PlannerError::TooManyStops`] if there are more than
    /// `max_stops` stops, or if the number of orderings overflows `usize`.
    pub fn new(parts: &RouteParts<'a>, max_stops: usize) -> Result<Self, PlannerError> {
        let count = parts.stops.len();
        let remaining = match factorial(count) {
            Some(total) if count <= max_stops => total,
            _ => {
                warn!(count, max = max_stops, "too many stops to enumerate");
                return Err(PlannerError::TooManyStops { count, max: max_stops });
            }
        };

        Ok(Self {
            start: parts.start,
            stops: parts.stops.clone(),
            end: parts.end,
            indices: (0..count).collect(),
            remaining,
        })
    }

    fn current(&self) -> Route<'a> {
        Route::new(self.start, self.indices.iter().map(|&i| self.stops[i]), self.end)
    }
}

impl<'a> Iterator for PermutationEnumerator<'a> {
    type Item = Route<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let route = self.current();
        self.remaining -= 1;
        if self.remaining > 0 {
            next_permutation(&mut self.indices);
        }
        Some(route)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for PermutationEnumerator<'_> {}

/// Number of candidate routes for `k` stops, `None` on overflow.
pub fn factorial(k: usize) -> Option<usize> {
    (1..=k).try_fold(1usize, |acc, n| acc.checked_mul(n))
}

/// Advance `indices` to the next lexicographic permutation.
///
/// Returns false (leaving `indices` untouched) when already at the last one.
fn next_permutation(indices: &mut [usize]) -> bool {
    let n = indices.len();
    if n < 2 {
        return false;
    }

    let mut i = n - 1;
    while i > 0 && indices[i - 1] >= indices[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = n - 1;
    while indices[j] <= indices[i - 1] {
        j -= 1;
    }
    indices.swap(i - 1, j);
    indices[i..].reverse();
    true
}
