//! Test fixtures for bestway-planner.
//!
//! Provides realistic test data:
//! - Real Paris landmarks (from OpenStreetMap)
//! - A builder for trip inputs

pub mod paris_locations;

pub use paris_locations::*;
