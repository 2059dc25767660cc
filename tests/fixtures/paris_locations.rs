//! Real Paris locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap, stored as (longitude, latitude).

#![allow(dead_code)]

use bestway_planner::Location;

/// A named landmark with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Landmark {
    pub name: &'static str,
    pub lng: f64,
    pub lat: f64,
}

impl Landmark {
    pub const fn new(name: &'static str, lng: f64, lat: f64) -> Self {
        Self { name, lng, lat }
    }

    pub fn as_start(&self) -> Location {
        Location::start(self.name, self.lng, self.lat)
    }

    pub fn as_end(&self) -> Location {
        Location::end(self.name, self.lng, self.lat)
    }

    pub fn as_stop(&self) -> Location {
        Location::stop(self.name, self.lng, self.lat)
    }
}

// ============================================================================
// Train stations (good for start/end locations)
// ============================================================================

pub const STATIONS: &[Landmark] = &[
    Landmark::new("Gare du Nord", 2.3553, 48.8809),
    Landmark::new("Gare de Lyon", 2.3735, 48.8443),
    Landmark::new("Gare Montparnasse", 2.3211, 48.8412),
    Landmark::new("Gare Saint-Lazare", 2.3252, 48.8763),
];

// ============================================================================
// Landmarks (stops)
// ============================================================================

pub const LANDMARKS: &[Landmark] = &[
    Landmark::new("Tour Eiffel", 2.2945, 48.8584),
    Landmark::new("Musée du Louvre", 2.3376, 48.8606),
    Landmark::new("Notre-Dame", 2.3499, 48.8530),
    Landmark::new("Arc de Triomphe", 2.2950, 48.8738),
    Landmark::new("Sacré-Cœur", 2.3431, 48.8867),
    Landmark::new("Panthéon", 2.3461, 48.8462),
    Landmark::new("Place de la Bastille", 2.3691, 48.8532),
];

/// Builder for planner inputs.
#[derive(Debug, Clone, Default)]
pub struct TripBuilder {
    locations: Vec<Location>,
}

impl TripBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, lng: f64, lat: f64) -> Self {
        self.locations.push(Location::start("start", lng, lat));
        self
    }

    pub fn end(mut self, lng: f64, lat: f64) -> Self {
        self.locations.push(Location::end("end", lng, lat));
        self
    }

    pub fn stop(mut self, name: &str, lng: f64, lat: f64) -> Self {
        self.locations.push(Location::stop(name, lng, lat));
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    pub fn build(self) -> Vec<Location> {
        self.locations
    }
}
