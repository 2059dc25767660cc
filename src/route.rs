//! Route building blocks.
//!
//! [`RouteParts`] partitions the caller's flat record set into start, stops
//! and end. [`Route`] is one full ordering of those parts and
//! [`AnnotatedRoute`] adds the per-leg distances. Routes borrow the caller's
//! locations; nothing here copies or mutates them.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::PlannerError;
use crate::location::{Location, Nature};

/// Canonical split of a request: one start, the stops in input order, one end.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteParts<'a> {
    pub start: &'a Location,
    pub stops: Vec<&'a Location>,
    pub end: &'a Location,
}

impl<'a> RouteParts<'a> {
    /// Partition `locations` by nature.
    ///
    /// Fails with [`PlannerError::MalformedInput`] unless there is exactly one
    /// start and one end, and with [`PlannerError::DuplicateLocation`] when two
    /// records share a name.
    pub fn build(locations: &'a [Location]) -> Result<Self, PlannerError> {
        let mut starts = Vec::new();
        let mut ends = Vec::new();
        let mut stops = Vec::new();

        for location in locations {
            match location.nature() {
                Nature::Start => starts.push(location),
                Nature::End => ends.push(location),
                Nature::Stop => stops.push(location),
            }
        }

        let (start, end) = match (starts.as_slice(), ends.as_slice()) {
            ([start], [end]) => (*start, *end),
            _ => {
                warn!(starts = starts.len(), ends = ends.len(), "malformed route input");
                return Err(PlannerError::MalformedInput {
                    starts: starts.len(),
                    ends: ends.len(),
                });
            }
        };

        let mut seen = HashSet::new();
        for location in locations {
            if !seen.insert(location.name()) {
                warn!(name = location.name(), "duplicate location in route input");
                return Err(PlannerError::DuplicateLocation {
                    name: location.name().to_string(),
                });
            }
        }

        debug!(stops = stops.len(), start = start.name(), end = end.name(), "partitioned route input");

        Ok(Self { start, stops, end })
    }
}

/// A full ordering: start, every stop exactly once, end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<'a> {
    points: Vec<&'a Location>,
}

impl<'a> Route<'a> {
    /// Assemble `[start] + stops + [end]`.
    pub fn new(start: &'a Location, stops: impl IntoIterator<Item = &'a Location>, end: &'a Location) -> Self {
        let mut points = vec![start];
        points.extend(stops);
        points.push(end);
        Self { points }
    }

    pub fn points(&self) -> &[&'a Location] {
        &self.points
    }

    pub fn start(&self) -> &'a Location {
        self.points[0]
    }

    pub fn end(&self) -> &'a Location {
        self.points[self.points.len() - 1]
    }

    /// The stops between start and end, in travel order.
    pub fn stops(&self) -> &[&'a Location] {
        &self.points[1..self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Pairs with `len`; a route built by [`Route::new`] is never empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Location names in travel order.
    pub fn names(&self) -> Vec<&'a str> {
        self.points.iter().map(|location| location.name()).collect()
    }
}

/// A route plus the distance of each leg.
///
/// `legs[i]` is the distance between `points[i]` and `points[i + 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedRoute<'a> {
    route: Route<'a>,
    legs: Vec<f64>,
    total: f64,
}

impl<'a> AnnotatedRoute<'a> {
    pub(crate) fn new(route: Route<'a>, legs: Vec<f64>) -> Self {
        let total = legs.iter().sum();
        Self { route, legs, total }
    }

    pub fn route(&self) -> &Route<'a> {
        &self.route
    }

    pub fn legs(&self) -> &[f64] {
        &self.legs
    }

    /// Sum of all leg distances.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.route.names()
    }

    /// Stop names in the order they are visited.
    pub fn stop_order(&self) -> Vec<&'a str> {
        self.route.stops().iter().map(|location| location.name()).collect()
    }

    pub fn into_route(self) -> Route<'a> {
        self.route
    }
}
