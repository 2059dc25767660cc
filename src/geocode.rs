//! Address normalization and geocoding.
//!
//! The planner only consumes [`Location`]s; this module is how a caller
//! turns the free-text addresses a user typed into them.

use serde::Deserialize;
use tracing::debug;

use crate::error::GeocodeError;
use crate::location::{Location, Nature};

/// Resolves a free-text address into a [`Location`] with the given role.
pub trait Geocoder {
    fn geocode(&self, address: &str, nature: Nature) -> Result<Location, GeocodeError>;
}

/// Normalize a user-typed address for lookup.
///
/// Separators (`,` and `;`) become spaces and whitespace runs collapse to a
/// single space. Fails with [`GeocodeError::EmptyAddress`] if nothing is left.
pub fn clean_address(raw: &str) -> Result<String, GeocodeError> {
    let cleaned = raw
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if cleaned.is_empty() {
        Err(GeocodeError::EmptyAddress)
    } else {
        Ok(cleaned)
    }
}

#[derive(Debug, Clone)]
pub struct GeoApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Number of matches requested; only the first is used.
    pub limit: u32,
}

impl Default for GeoApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api-adresse.data.gouv.fr".to_string(),
            timeout_secs: 10,
            limit: 1,
        }
    }
}

/// Blocking client for the French national address search API.
#[derive(Debug, Clone)]
pub struct GeoApiClient {
    config: GeoApiConfig,
    client: reqwest::blocking::Client,
}

impl GeoApiClient {
    pub fn new(config: GeoApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn search_url(&self) -> String {
        format!("{}/search/", self.config.base_url.trim_end_matches('/'))
    }
}

impl Geocoder for GeoApiClient {
    fn geocode(&self, address: &str, nature: Nature) -> Result<Location, GeocodeError> {
        let query = clean_address(address)?;
        let limit = self.config.limit.to_string();

        let body = self
            .client
            .get(self.search_url())
            .query(&[("q", query.as_str()), ("limit", limit.as_str())])
            .send()?
            .error_for_status()?
            .json::<GeoApiResponse>()?;

        let location = body.into_location(&query, nature)?;
        debug!(
            query = %query,
            name = location.name(),
            longitude = location.longitude(),
            latitude = location.latitude(),
            "geocoded address"
        );
        Ok(location)
    }
}

#[derive(Debug, Deserialize)]
struct GeoApiResponse {
    #[serde(default)]
    features: Vec<GeoApiFeature>,
}

#[derive(Debug, Deserialize)]
struct GeoApiFeature {
    geometry: GeoApiGeometry,
    properties: GeoApiProperties,
}

#[derive(Debug, Deserialize)]
struct GeoApiGeometry {
    /// GeoJSON order: [longitude, latitude].
    coordinates: (f64, f64),
}

#[derive(Debug, Deserialize)]
struct GeoApiProperties {
    label: String,
}

impl GeoApiResponse {
    fn into_location(self, query: &str, nature: Nature) -> Result<Location, GeocodeError> {
        let feature = self.features.into_iter().next().ok_or_else(|| GeocodeError::NoMatch {
            query: query.to_string(),
        })?;
        let (longitude, latitude) = feature.geometry.coordinates;
        Ok(Location::new(feature.properties.label, nature, longitude, latitude))
    }
}
