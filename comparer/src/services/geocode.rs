use crate::services::location::GeolocationError;
use common::types::location::Location;

/// Turns coordinates into a structured address. The production build would
/// plug a real provider in here; everything else in the app only sees this
/// trait.
pub trait Geocoder: Send + Sync {
    fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<Location, GeolocationError>;
}

/// Stand-in geocoder: deterministically picks one of a small set of canned
/// addresses by `floor(|lat + lng|) mod N`. Not geographically meaningful,
/// just stable for a given coordinate pair.
pub struct MockGeocoder {
    addresses: Vec<Location>,
}

impl MockGeocoder {
    pub fn new() -> Self {
        MockGeocoder {
            addresses: vec![
                Location {
                    street_address: Some("123 MG Road, Block A".to_string()),
                    building_name: Some("Phoenix Mall".to_string()),
                    neighborhood: Some("Connaught Place".to_string()),
                    district: Some("Central Delhi".to_string()),
                    country: Some("India".to_string()),
                    postal_code: Some("110001".to_string()),
                    landmark: Some("Near Metro Station".to_string()),
                    formatted_address: Some(
                        "123 MG Road, Block A, Phoenix Mall, Connaught Place, Central Delhi, \
                         New Delhi, Delhi 110001, India"
                            .to_string(),
                    ),
                    ..Location::city_state("New Delhi", "Delhi")
                },
                Location {
                    street_address: Some("456 Brigade Road, 2nd Floor".to_string()),
                    building_name: Some("UB City Mall".to_string()),
                    neighborhood: Some("Shivaji Nagar".to_string()),
                    district: Some("Bangalore Urban".to_string()),
                    country: Some("India".to_string()),
                    postal_code: Some("560001".to_string()),
                    landmark: Some("Opposite Cubbon Park".to_string()),
                    formatted_address: Some(
                        "456 Brigade Road, 2nd Floor, UB City Mall, Shivaji Nagar, \
                         Bangalore Urban, Bangalore, Karnataka 560001, India"
                            .to_string(),
                    ),
                    ..Location::city_state("Bangalore", "Karnataka")
                },
                Location {
                    street_address: Some("789 Marine Drive, Apartment 15B".to_string()),
                    building_name: Some("Sea View Towers".to_string()),
                    neighborhood: Some("Nariman Point".to_string()),
                    district: Some("South Mumbai".to_string()),
                    country: Some("India".to_string()),
                    postal_code: Some("400021".to_string()),
                    landmark: Some("Near Gateway of India".to_string()),
                    formatted_address: Some(
                        "789 Marine Drive, Apartment 15B, Sea View Towers, Nariman Point, \
                         South Mumbai, Mumbai, Maharashtra 400021, India"
                            .to_string(),
                    ),
                    ..Location::city_state("Mumbai", "Maharashtra")
                },
            ],
        }
    }
}

impl Default for MockGeocoder {
    fn default() -> Self {
        MockGeocoder::new()
    }
}

impl Geocoder for MockGeocoder {
    fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<Location, GeolocationError> {
        if self.addresses.is_empty() {
            return Err(GeolocationError::Unresolvable);
        }
        let index = ((lat + lng).abs().floor() as usize) % self.addresses.len();
        Ok(self.addresses[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_coordinates_resolve_to_the_same_address() {
        let geocoder = MockGeocoder::new();
        let a = geocoder.reverse_geocode(28.6139, 77.2090).unwrap();
        let b = geocoder.reverse_geocode(28.6139, 77.2090).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn selection_follows_floor_of_abs_sum() {
        let geocoder = MockGeocoder::new();
        // |1.2 + 0.3| = 1.5 -> index 1.
        let resolved = geocoder.reverse_geocode(1.2, 0.3).unwrap();
        assert_eq!(resolved.city, "Bangalore");
        // |0.1 + 0.2| -> index 0.
        let resolved = geocoder.reverse_geocode(0.1, 0.2).unwrap();
        assert_eq!(resolved.city, "New Delhi");
        // Negative sums resolve through the absolute value.
        let resolved = geocoder.reverse_geocode(-1.0, -1.5).unwrap();
        assert_eq!(resolved.city, "Mumbai");
    }

    #[test]
    fn every_canned_address_is_reachable() {
        let geocoder = MockGeocoder::new();
        let cities: Vec<String> = (0..3)
            .map(|i| {
                geocoder
                    .reverse_geocode(i as f64, 0.25)
                    .unwrap()
                    .city
            })
            .collect();
        assert_eq!(cities, vec!["New Delhi", "Bangalore", "Mumbai"]);
    }
}
