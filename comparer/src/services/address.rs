use crate::services::store::KeyValueStore;
use chrono::Utc;
use colored::Color;
use common::constants::{ADDRESS_STORAGE_KEY, ADDRESS_SUGGESTION_LIMIT, MAX_SAVED_ADDRESSES};
use common::logger::Logger;
use common::types::location::{Location, SavedAddress};

/// Outcome of [`validate_address_format`]. Validation never fails the call
/// itself; problems come back as messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// The user's address book: a bounded, most-recent-first list of
/// [`SavedAddress`] records persisted as a single JSON blob in the injected
/// store.
///
/// ## Invariants:
/// - At most one record has `is_default == true`.
/// - At most [`MAX_SAVED_ADDRESSES`] records; the oldest is evicted first.
/// - A corrupt or missing blob reads as an empty book, never an error.
pub struct AddressService<S: KeyValueStore> {
    store: S,
    logger: Logger,
}

impl<S: KeyValueStore> AddressService<S> {
    pub fn new(store: S) -> Self {
        AddressService {
            store,
            logger: Logger::new("Address Service", Color::Blue),
        }
    }

    /// Saves an address at the front of the book and returns the stored
    /// record. When `is_default` is set, every other record loses the flag
    /// first.
    pub fn save_address(
        &mut self,
        location: Location,
        label: Option<&str>,
        is_default: bool,
    ) -> SavedAddress {
        let mut addresses = self.get_saved_addresses();

        if is_default {
            for address in &mut addresses {
                address.is_default = false;
            }
        }

        let now = Utc::now();
        let record = SavedAddress {
            id: generate_id(),
            label: label
                .map(str::to_string)
                .unwrap_or_else(|| derive_label(&location)),
            location,
            is_default,
            created_at: now,
            last_used: Some(now),
        };

        addresses.insert(0, record.clone());
        addresses.truncate(MAX_SAVED_ADDRESSES);
        self.persist(&addresses);

        self.logger
            .info(format!("Saved address '{}' ({})", record.label, record.id));
        record
    }

    /// The whole book, most recent first. Parse failures are logged and
    /// swallowed; the caller sees an empty book.
    pub fn get_saved_addresses(&self) -> Vec<SavedAddress> {
        let Some(blob) = self.store.read(ADDRESS_STORAGE_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&blob) {
            Ok(addresses) => addresses,
            Err(err) => {
                self.logger
                    .error(format!("Error loading saved addresses: {}", err));
                Vec::new()
            }
        }
    }

    pub fn get_default_address(&self) -> Option<SavedAddress> {
        self.get_saved_addresses()
            .into_iter()
            .find(|address| address.is_default)
    }

    /// Stamps `last_used` on the matching record. Unknown ids are a no-op.
    pub fn mark_address_as_used(&mut self, id: &str) {
        let mut addresses = self.get_saved_addresses();
        if let Some(address) = addresses.iter_mut().find(|a| a.id == id) {
            address.last_used = Some(Utc::now());
            self.persist(&addresses);
        }
    }

    pub fn delete_address(&mut self, id: &str) {
        let mut addresses = self.get_saved_addresses();
        addresses.retain(|address| address.id != id);
        self.persist(&addresses);
    }

    /// Makes `id` the single default record.
    pub fn set_as_default(&mut self, id: &str) {
        let mut addresses = self.get_saved_addresses();
        for address in &mut addresses {
            address.is_default = address.id == id;
        }
        self.persist(&addresses);
    }

    /// Case-insensitive substring search over label, formatted address,
    /// street, neighborhood and city.
    pub fn search_addresses(&self, query: &str) -> Vec<SavedAddress> {
        let needle = query.to_lowercase();
        let contains = |field: &Option<String>| {
            field
                .as_ref()
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        };

        self.get_saved_addresses()
            .into_iter()
            .filter(|address| {
                address.label.to_lowercase().contains(&needle)
                    || contains(&address.location.formatted_address)
                    || contains(&address.location.street_address)
                    || contains(&address.location.neighborhood)
                    || address.location.city.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Distinct street/neighborhood/landmark values containing the input,
    /// capped at [`ADDRESS_SUGGESTION_LIMIT`].
    pub fn get_address_suggestions(&self, input: &str) -> Vec<String> {
        let needle = input.to_lowercase();
        let mut suggestions: Vec<String> = Vec::new();
        let mut consider = |field: &Option<String>| {
            if let Some(value) = field {
                if value.to_lowercase().contains(&needle) && !suggestions.contains(value) {
                    suggestions.push(value.clone());
                }
            }
        };

        for address in self.get_saved_addresses() {
            consider(&address.location.street_address);
            consider(&address.location.neighborhood);
            consider(&address.location.landmark);
        }

        suggestions.truncate(ADDRESS_SUGGESTION_LIMIT);
        suggestions
    }

    fn persist(&mut self, addresses: &[SavedAddress]) {
        match serde_json::to_string(addresses) {
            Ok(blob) => self.store.write(ADDRESS_STORAGE_KEY, &blob),
            Err(err) => self
                .logger
                .error(format!("Error saving addresses: {}", err)),
        }
    }
}

/// Millisecond timestamp plus a random salt, both base-36. Uniqueness is
/// best-effort, matching how the ids looked upstream.
fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u128;
    let salt = rand::random::<u32>() as u128;
    format!("{}{}", to_base36(millis), to_base36(salt))
}

fn to_base36(mut n: u128) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Fallback label when the user does not provide one: building, then
/// neighborhood, then landmark, then "city, state".
fn derive_label(location: &Location) -> String {
    if let Some(building) = &location.building_name {
        return building.clone();
    }
    if let Some(neighborhood) = &location.neighborhood {
        return neighborhood.clone();
    }
    if let Some(landmark) = &location.landmark {
        return format!("Near {landmark}");
    }
    format!("{}, {}", location.city, location.state)
}

/// Field-level validation: city and state at least 2 characters after
/// trimming, postal code (when present) exactly 6 digits, coordinates (when
/// present) within range.
pub fn validate_address_format(location: &Location) -> AddressValidation {
    let mut errors = Vec::new();

    if location.city.trim().len() < 2 {
        errors.push("City is required and must be at least 2 characters".to_string());
    }
    if location.state.trim().len() < 2 {
        errors.push("State is required and must be at least 2 characters".to_string());
    }
    if let Some(postal_code) = &location.postal_code {
        if postal_code.len() != 6 || !postal_code.chars().all(|c| c.is_ascii_digit()) {
            errors.push("Postal code must be 6 digits".to_string());
        }
    }
    if let Some(coordinates) = &location.coordinates {
        if !(-90.0..=90.0).contains(&coordinates.lat) {
            errors.push("Invalid latitude".to_string());
        }
        if !(-180.0..=180.0).contains(&coordinates.lng) {
            errors.push("Invalid longitude".to_string());
        }
    }

    AddressValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// One-line rendering: street, building, neighborhood, district (when it
/// differs from the city), city, state, postal code, then the landmark and
/// optionally the coordinates at 6 decimal places.
pub fn format_address_for_display(location: &Location, include_coordinates: bool) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut push_some = |field: &Option<String>| {
        if let Some(value) = field {
            parts.push(value.clone());
        }
    };

    push_some(&location.street_address);
    push_some(&location.building_name);
    push_some(&location.neighborhood);
    if let Some(district) = &location.district {
        if *district != location.city {
            parts.push(district.clone());
        }
    }
    parts.push(location.city.clone());
    if !location.state.is_empty() {
        parts.push(location.state.clone());
    }
    if let Some(postal_code) = &location.postal_code {
        parts.push(postal_code.clone());
    }

    let mut formatted = parts.join(", ");
    if let Some(landmark) = &location.landmark {
        formatted.push_str(&format!(" (Near {landmark})"));
    }
    if include_coordinates {
        if let Some(coordinates) = &location.coordinates {
            formatted.push_str(&format!(
                " [{:.6}, {:.6}]",
                coordinates.lat, coordinates.lng
            ));
        }
    }
    formatted
}
