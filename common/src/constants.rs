/// Well-known key under which the address book blob is persisted.
pub const ADDRESS_STORAGE_KEY: &str = "foodapp_saved_addresses";
/// The address book keeps only the most recent entries.
pub const MAX_SAVED_ADDRESSES: usize = 10;
/// Distinct street/neighborhood/landmark suggestions returned at most.
pub const ADDRESS_SUGGESTION_LIMIT: usize = 5;

/// Simulated round trip for a catalog search.
pub const SEARCH_DELAY_MILLIS: u64 = 1000;
/// Simulated round trip for a reverse-geocoding call.
pub const GEOCODE_DELAY_MILLIS: u64 = 500;

/// Inclusive price filter applied when the user has not picked a range.
pub const DEFAULT_PRICE_RANGE: (f64, f64) = (0.0, 1000.0);

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A fix is accepted as GPS-grade when its accuracy is within this many meters.
pub const DEFAULT_REQUIRED_ACCURACY_M: f64 = 5.0;
/// Watch fixes at or under this accuracy are classified as GPS, else network.
pub const WATCH_GPS_ACCURACY_M: f64 = 10.0;

pub const HIGH_ACCURACY_TIMEOUT_MILLIS: u64 = 15_000;
pub const HIGH_ACCURACY_MAX_AGE_MILLIS: u64 = 300_000;
pub const NETWORK_TIMEOUT_MILLIS: u64 = 10_000;
pub const NETWORK_MAX_AGE_MILLIS: u64 = 600_000;
pub const WATCH_TIMEOUT_MILLIS: u64 = 10_000;
pub const WATCH_MAX_AGE_MILLIS: u64 = 30_000;

/// Used for a comparison row whose restaurant is missing from the catalog.
pub const FALLBACK_DELIVERY_TIME: &str = "30-35 mins";
/// Rating assumed when neither the item nor its restaurant carries one.
pub const FALLBACK_RATING: f64 = 4.0;
