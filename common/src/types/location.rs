use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
    /// Accuracy of the fix in meters, when the source reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

/// A place as the user or the geocoder describes it. Only city and state are
/// guaranteed; everything else depends on how the location was obtained.
/// The UI treats city+state as the informal identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

impl Location {
    /// Bare city/state location, the shape the popular-cities picker uses.
    pub fn city_state(city: impl Into<String>, state: impl Into<String>) -> Self {
        Location {
            city: city.into(),
            state: state.into(),
            ..Location::default()
        }
    }
}

/// A user-persisted address: a [`Location`] plus identity, default flag and
/// usage metadata. Timestamps serialize as ISO-8601 strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAddress {
    pub id: String,
    pub label: String,
    pub location: Location,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_address_round_trips_through_json() {
        let record = SavedAddress {
            id: "abc123".to_string(),
            label: "Home".to_string(),
            location: Location {
                postal_code: Some("411001".to_string()),
                coordinates: Some(Coordinates {
                    lat: 18.5204,
                    lng: 73.8567,
                    accuracy: Some(4.0),
                }),
                ..Location::city_state("Pune", "Maharashtra")
            },
            is_default: true,
            created_at: Utc::now(),
            last_used: None,
        };

        let blob = serde_json::to_string(&vec![record.clone()]).unwrap();
        let revived: Vec<SavedAddress> = serde_json::from_str(&blob).unwrap();
        assert_eq!(revived.len(), 1);
        assert_eq!(revived[0].id, record.id);
        assert_eq!(revived[0].location, record.location);
        assert_eq!(revived[0].created_at, record.created_at);
    }

    #[test]
    fn timestamps_serialize_as_iso_strings() {
        let record = SavedAddress {
            id: "x".to_string(),
            label: "Work".to_string(),
            location: Location::city_state("Delhi", "Delhi"),
            is_default: false,
            created_at: "2024-05-01T10:00:00Z".parse().unwrap(),
            last_used: None,
        };
        let blob = serde_json::to_string(&record).unwrap();
        assert!(blob.contains("2024-05-01T10:00:00Z"));
    }
}
