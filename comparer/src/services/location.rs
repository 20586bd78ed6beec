use crate::services::geocode::Geocoder;
use colored::Color;
use common::constants::{
    DEFAULT_REQUIRED_ACCURACY_M, GEOCODE_DELAY_MILLIS, HIGH_ACCURACY_MAX_AGE_MILLIS,
    HIGH_ACCURACY_TIMEOUT_MILLIS, NETWORK_MAX_AGE_MILLIS, NETWORK_TIMEOUT_MILLIS,
    WATCH_GPS_ACCURACY_M, WATCH_MAX_AGE_MILLIS, WATCH_TIMEOUT_MILLIS,
};
use common::logger::Logger;
use common::types::geolocation::{GeoOptions, GeoSource, GeolocationResult, RawPosition};
use common::types::location::{Coordinates, Location};
use common::utils;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::IntervalStream;

/// Everything that can go wrong while locating the user. Display strings are
/// the exact messages shown to the user; callers match on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum GeolocationError {
    Unsupported,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    /// The best fix was worse than the configured accuracy target and the
    /// network fallback was disabled.
    InsufficientAccuracy { accuracy: f64, required: f64 },
    /// The geocoder could not turn the fix into an address.
    Unresolvable,
    Unknown,
}

impl fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeolocationError::Unsupported => {
                write!(f, "Geolocation is not supported on this device")
            }
            GeolocationError::PermissionDenied => write!(
                f,
                "Location access denied by user. Please enable location permissions."
            ),
            GeolocationError::PositionUnavailable => write!(
                f,
                "Location information is unavailable. Please check your GPS settings."
            ),
            GeolocationError::Timeout => {
                write!(f, "Location request timed out. Please try again.")
            }
            GeolocationError::InsufficientAccuracy { accuracy, required } => write!(
                f,
                "GPS accuracy ({accuracy}m) exceeds required precision ({required}m)"
            ),
            GeolocationError::Unresolvable => {
                write!(f, "Failed to resolve address from coordinates")
            }
            GeolocationError::Unknown => {
                write!(f, "An unknown error occurred while retrieving location.")
            }
        }
    }
}

impl std::error::Error for GeolocationError {}

/// Tuning for [`LocationService`]; defaults mirror a patient first fix:
/// high accuracy, generous timeout, 5-minute cache, network fallback on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationServiceConfig {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    pub maximum_age: Duration,
    pub fallback_to_network: bool,
    /// Meters. Fixes worse than this are not accepted as GPS-grade.
    pub required_accuracy: f64,
}

impl Default for LocationServiceConfig {
    fn default() -> Self {
        LocationServiceConfig {
            enable_high_accuracy: true,
            timeout: Duration::from_millis(HIGH_ACCURACY_TIMEOUT_MILLIS),
            maximum_age: Duration::from_millis(HIGH_ACCURACY_MAX_AGE_MILLIS),
            fallback_to_network: true,
            required_accuracy: DEFAULT_REQUIRED_ACCURACY_M,
        }
    }
}

/// The positioning capability itself, kept behind a trait so the simulated
/// provider and tests can stand in for real hardware.
pub trait PositionProvider: Send + Sync {
    /// Whether positioning exists at all on this device.
    fn is_supported(&self) -> bool {
        true
    }

    /// One fix honoring the request options.
    fn current_position(&self, options: &GeoOptions) -> Result<RawPosition, GeolocationError>;
}

/// Fake GPS around a fixed point: accuracy depends on the requested profile
/// and the coordinates wobble a little per fix.
pub struct SimulatedPositionProvider {
    pub lat: f64,
    pub lng: f64,
    pub gps_accuracy: f64,
    pub network_accuracy: f64,
}

impl SimulatedPositionProvider {
    pub fn new(lat: f64, lng: f64) -> Self {
        SimulatedPositionProvider {
            lat,
            lng,
            gps_accuracy: 4.0,
            network_accuracy: 60.0,
        }
    }
}

impl PositionProvider for SimulatedPositionProvider {
    fn current_position(&self, options: &GeoOptions) -> Result<RawPosition, GeolocationError> {
        let jitter = || (rand::random::<f64>() - 0.5) * 0.0005;
        let accuracy = if options.enable_high_accuracy {
            self.gps_accuracy
        } else {
            self.network_accuracy
        };
        Ok(RawPosition {
            lat: self.lat + jitter(),
            lng: self.lng + jitter(),
            accuracy,
            timestamp: chrono::Utc::now(),
        })
    }
}

/// Outcome of [`LocationService::validate_address`]. `missing_fields` mixes
/// required and recommended names; only the required ones drive `is_valid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressCompleteness {
    pub is_valid: bool,
    pub missing_fields: Vec<String>,
}

struct Watch {
    id: u64,
    task: JoinHandle<()>,
}

/// Wraps a [`PositionProvider`] and a [`Geocoder`] into the flow the
/// location picker needs: one-shot detection with a GPS-to-network accuracy
/// fallback, an optional continuous watch, and address-completeness checks.
pub struct LocationService {
    config: LocationServiceConfig,
    provider: Arc<dyn PositionProvider>,
    geocoder: Arc<dyn Geocoder>,
    /// Simulated geocoding round trip; zero in tests.
    geocode_delay: Duration,
    /// At most one watch per service instance.
    watch: Option<Watch>,
    next_watch_id: u64,
    logger: Logger,
}

impl LocationService {
    pub fn new(provider: Arc<dyn PositionProvider>, geocoder: Arc<dyn Geocoder>) -> Self {
        LocationService {
            config: LocationServiceConfig::default(),
            provider,
            geocoder,
            geocode_delay: Duration::from_millis(GEOCODE_DELAY_MILLIS),
            watch: None,
            next_watch_id: 0,
            logger: Logger::new("Location Service", Color::Yellow),
        }
    }

    pub fn with_config(mut self, config: LocationServiceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_geocode_delay(mut self, delay: Duration) -> Self {
        self.geocode_delay = delay;
        self
    }

    /// One-shot detection. Tries a high-accuracy fix first; a fix within the
    /// accuracy target resolves as GPS. A worse fix, or a provider error,
    /// falls back to the network profile when fallback is enabled, otherwise
    /// the failure is returned as-is.
    pub async fn get_current_location(&self) -> Result<GeolocationResult, GeolocationError> {
        if !self.provider.is_supported() {
            return Err(GeolocationError::Unsupported);
        }

        let options = GeoOptions {
            enable_high_accuracy: self.config.enable_high_accuracy,
            timeout: self.config.timeout,
            maximum_age: self.config.maximum_age,
        };

        match self.provider.current_position(&options) {
            Ok(position) if position.accuracy <= self.config.required_accuracy => {
                self.resolve(position, GeoSource::Gps).await
            }
            Ok(position) => {
                if self.config.fallback_to_network {
                    self.logger.warn(format!(
                        "GPS accuracy {}m over target {}m, falling back to network",
                        position.accuracy, self.config.required_accuracy
                    ));
                    self.network_location().await
                } else {
                    Err(GeolocationError::InsufficientAccuracy {
                        accuracy: position.accuracy,
                        required: self.config.required_accuracy,
                    })
                }
            }
            Err(err) => {
                if self.config.fallback_to_network {
                    self.logger
                        .warn(format!("High-accuracy fix failed ({err}), trying network"));
                    self.network_location().await
                } else {
                    Err(err)
                }
            }
        }
    }

    /// The lower-accuracy retry profile: no high accuracy, shorter timeout,
    /// 10-minute cache tolerance.
    async fn network_location(&self) -> Result<GeolocationResult, GeolocationError> {
        let options = GeoOptions {
            enable_high_accuracy: false,
            timeout: Duration::from_millis(NETWORK_TIMEOUT_MILLIS),
            maximum_age: Duration::from_millis(NETWORK_MAX_AGE_MILLIS),
        };
        let position = self.provider.current_position(&options)?;
        self.resolve(position, GeoSource::Network).await
    }

    async fn resolve(
        &self,
        position: RawPosition,
        source: GeoSource,
    ) -> Result<GeolocationResult, GeolocationError> {
        // Stands in for the round trip a real geocoder would make.
        tokio::time::sleep(self.geocode_delay).await;
        let mut location = self.geocoder.reverse_geocode(position.lat, position.lng)?;
        location.coordinates = Some(Coordinates {
            lat: position.lat,
            lng: position.lng,
            accuracy: Some(position.accuracy),
        });
        Ok(GeolocationResult {
            location,
            accuracy: position.accuracy,
            source,
            timestamp: position.timestamp,
        })
    }

    /// Continuous tracking: polls the provider on `interval`, geocodes each
    /// fix and hands it to `on_fix` (classified GPS at ≤10 m accuracy, else
    /// network). Per-fix failures go to `on_error` and the watch keeps
    /// running. Starting a new watch replaces the previous one; the returned
    /// id identifies the subscription.
    pub fn watch_position<F, E>(
        &mut self,
        interval: Duration,
        on_fix: F,
        on_error: E,
    ) -> Result<u64, GeolocationError>
    where
        F: Fn(GeolocationResult) + Send + 'static,
        E: Fn(GeolocationError) + Send + 'static,
    {
        if !self.provider.is_supported() {
            return Err(GeolocationError::Unsupported);
        }

        self.clear_watch();
        self.next_watch_id += 1;
        let id = self.next_watch_id;

        let provider = Arc::clone(&self.provider);
        let geocoder = Arc::clone(&self.geocoder);
        let geocode_delay = self.geocode_delay;
        let options = GeoOptions {
            enable_high_accuracy: true,
            timeout: Duration::from_millis(WATCH_TIMEOUT_MILLIS),
            maximum_age: Duration::from_millis(WATCH_MAX_AGE_MILLIS),
        };

        let task = tokio::spawn(async move {
            let mut ticks = IntervalStream::new(tokio::time::interval(interval));
            while ticks.next().await.is_some() {
                match provider.current_position(&options) {
                    Ok(position) => {
                        tokio::time::sleep(geocode_delay).await;
                        match geocoder.reverse_geocode(position.lat, position.lng) {
                            Ok(mut location) => {
                                location.coordinates = Some(Coordinates {
                                    lat: position.lat,
                                    lng: position.lng,
                                    accuracy: Some(position.accuracy),
                                });
                                let source = if position.accuracy <= WATCH_GPS_ACCURACY_M {
                                    GeoSource::Gps
                                } else {
                                    GeoSource::Network
                                };
                                on_fix(GeolocationResult {
                                    location,
                                    accuracy: position.accuracy,
                                    source,
                                    timestamp: position.timestamp,
                                });
                            }
                            Err(err) => on_error(err),
                        }
                    }
                    Err(err) => on_error(err),
                }
            }
        });

        self.logger.info(format!("Watch #{id} started"));
        self.watch = Some(Watch { id, task });
        Ok(id)
    }

    /// Cancels the active watch, if any.
    pub fn clear_watch(&mut self) {
        if let Some(watch) = self.watch.take() {
            watch.task.abort();
            self.logger.info(format!("Watch #{} stopped", watch.id));
        }
    }

    pub fn active_watch(&self) -> Option<u64> {
        self.watch.as_ref().map(|watch| watch.id)
    }

    /// Great-circle distance in meters between two coordinate pairs.
    pub fn calculate_distance(&self, lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
        utils::calculate_distance(lat1, lng1, lat2, lng2)
    }

    /// Completeness check for a delivery address: city, state and postal
    /// code are required; street and neighborhood are recommended. The
    /// returned list mixes both kinds on purpose; `is_valid` reflects only
    /// the required ones.
    pub fn validate_address(&self, location: &Location) -> AddressCompleteness {
        validate_address(location)
    }
}

impl Drop for LocationService {
    fn drop(&mut self) {
        self.clear_watch();
    }
}

/// See [`LocationService::validate_address`].
pub fn validate_address(location: &Location) -> AddressCompleteness {
    let blank = |value: &str| value.trim().is_empty();
    let missing_opt =
        |field: &Option<String>| field.as_deref().map_or(true, blank);

    let mut missing_required: Vec<String> = Vec::new();
    if blank(&location.city) {
        missing_required.push("city".to_string());
    }
    if blank(&location.state) {
        missing_required.push("state".to_string());
    }
    if missing_opt(&location.postal_code) {
        missing_required.push("postal_code".to_string());
    }

    let mut missing_fields = missing_required.clone();
    if missing_opt(&location.street_address) {
        missing_fields.push("street_address".to_string());
    }
    if missing_opt(&location.neighborhood) {
        missing_fields.push("neighborhood".to_string());
    }

    AddressCompleteness {
        is_valid: missing_required.is_empty(),
        missing_fields,
    }
}
