use crate::types::location::Location;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How a fix was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoSource {
    Gps,
    Network,
    Wifi,
    Manual,
}

impl fmt::Display for GeoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeoSource::Gps => "gps",
            GeoSource::Network => "network",
            GeoSource::Wifi => "wifi",
            GeoSource::Manual => "manual",
        };
        f.write_str(name)
    }
}

/// A raw fix as reported by a position provider, before geocoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPosition {
    pub lat: f64,
    pub lng: f64,
    /// Accuracy radius in meters.
    pub accuracy: f64,
    pub timestamp: DateTime<Utc>,
}

/// Options passed to a position provider for one request, mirroring the
/// browser geolocation API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    pub maximum_age: Duration,
}

/// A geocoded fix delivered to callers of the location service.
#[derive(Debug, Clone, PartialEq)]
pub struct GeolocationResult {
    pub location: Location,
    /// Accuracy of the underlying fix in meters.
    pub accuracy: f64,
    pub source: GeoSource,
    pub timestamp: DateTime<Utc>,
}
