//! Distance between locations and per-leg route annotation.
//!
//! The default metric is [`Planar`]: longitude and latitude are treated as
//! plane coordinates with no geodesic correction. Trips are expected to stay
//! within a small local area where this ordering is the same as the
//! great-circle one. [`Haversine`] is available when kilometres matter.

use crate::location::Location;
use crate::route::{AnnotatedRoute, Route};

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Straight-line distance between two locations.
///
/// Implementations must be symmetric, non-negative and zero for identical
/// coordinates. `Sync` so candidates can be annotated across threads.
pub trait DistanceMetric: Sync {
    fn distance(&self, from: &Location, to: &Location) -> f64;
}

/// Euclidean distance over (longitude, latitude) as plane coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planar;

impl DistanceMetric for Planar {
    fn distance(&self, from: &Location, to: &Location) -> f64 {
        let (x1, y1) = from.coords();
        let (x2, y2) = to.coords();
        (x2 - x1).hypot(y2 - y1)
    }
}

/// Great-circle distance in kilometers.
#[derive(Debug, Clone, Copy)]
pub struct Haversine {
    pub radius_km: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self {
            radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl DistanceMetric for Haversine {
    fn distance(&self, from: &Location, to: &Location) -> f64 {
        let lat1_rad = from.latitude().to_radians();
        let lat2_rad = to.latitude().to_radians();
        let delta_lat = (to.latitude() - from.latitude()).to_radians();
        let delta_lng = (to.longitude() - from.longitude()).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().min(1.0).asin();

        self.radius_km * c
    }
}

/// Compute one leg per consecutive pair of `route`.
pub fn annotate<'a, M>(route: Route<'a>, metric: &M) -> AnnotatedRoute<'a>
where
    M: DistanceMetric + ?Sized,
{
    let legs = route
        .points()
        .windows(2)
        .map(|pair| metric.distance(pair[0], pair[1]))
        .collect();
    AnnotatedRoute::new(route, legs)
}
