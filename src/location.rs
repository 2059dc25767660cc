//! Geocoded locations.
//!
//! A location is produced once by the geocoding layer and never changes
//! afterwards, so fields are private and only readable through accessors.

use serde::{Deserialize, Serialize};

/// Role of a location within a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nature {
    Start,
    End,
    Stop,
}

/// A named point with planar coordinates and a role tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    nature: Nature,
    longitude: f64,
    latitude: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, nature: Nature, longitude: f64, latitude: f64) -> Self {
        Self {
            name: name.into(),
            nature,
            longitude,
            latitude,
        }
    }

    pub fn start(name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self::new(name, Nature::Start, longitude, latitude)
    }

    pub fn end(name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self::new(name, Nature::End, longitude, latitude)
    }

    pub fn stop(name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self::new(name, Nature::Stop, longitude, latitude)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nature(&self) -> Nature {
        self.nature
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Coordinates as (longitude, latitude), i.e. (x, y).
    pub fn coords(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }
}
