//! bestway-planner core
//!
//! Orders the intermediate stops of a fixed start/end trip so the total
//! straight-line distance travelled is minimal.

pub mod error;
pub mod location;
pub mod route;
pub mod permutations;
pub mod distance;
pub mod selector;
pub mod planner;
pub mod geocode;

pub use error::{GeocodeError, PlannerError};
pub use location::{Location, Nature};
pub use planner::{compute_best_route, compute_best_route_with, PlannerOptions};
pub use route::{AnnotatedRoute, Route, RouteParts};
